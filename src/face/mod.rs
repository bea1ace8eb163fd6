//! CAT faces and their oriented normals.

pub use self::face::Face;
pub use self::face_normal::{anchor, orient, AnchoredNormal};

mod face;
mod face_normal;
