//! The hash-map used by this crate.

pub use hashbrown::hash_map::Entry;
/// Hashmap using [`hashbrown::HashMap`] and its default hasher.
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
