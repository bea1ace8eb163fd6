/*!
chordal3d
========

**chordal3d** computes the Chordal Axis Transform (CAT) of a set of objects
packed inside a container. Every tetrahedron of a tetrahedralization of the
merged object surfaces that spans more than one object is split into faces
approximating the medial surface between those objects. The faces, together
with their oriented normals, are then accumulated per object and per mesh point.

The tetrahedralization itself is provided by an external engine, see
[`mesh::Tetrahedralizer`].

```
# #[cfg(feature = "f32")] {
use chordal3d::cell::ObjectRanges;
use chordal3d::cat::compute_cat_faces;
use chordal3d::math::Point;
use chordal3d::mesh::TetMesh;

// Two objects with two points each, sharing a single tetrahedron.
let points = vec![
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
];
let mesh = TetMesh::from_flat_cells(points, &[4, 0, 1, 2, 3]).unwrap();
let ranges = ObjectRanges::new(&[2, 2]);
let cat = compute_cat_faces(&mesh, &ranges).unwrap();

assert_eq!(cat.faces(0).len(), 1);
assert_eq!(cat.faces(1).len(), 1);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod cat;
pub mod cell;
pub mod face;
pub mod mesh;
pub mod split;
pub mod utils;

mod error;

pub use self::error::CatError;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
