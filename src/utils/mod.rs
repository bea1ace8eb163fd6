//! Various unsorted geometrical and logical operators.

pub use self::center::{center, midpoint};
pub use self::hashable_point::HashablePoint;

mod center;
mod hashable_point;
pub mod hashmap;
