//! Definition of the planar CAT face.

use crate::math::{Point, Real, Vector, DIM};
use crate::utils;
use crate::CatError;
use arrayvec::ArrayVec;

/// A planar triangle or quadrilateral bounding part of a CAT cell.
///
/// The points of a quadrilateral are stored in cyclic order.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Face {
    points: ArrayVec<Point<Real>, 4>,
}

impl Face {
    /// Creates a triangular face.
    #[inline]
    pub fn triangle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Self {
        Face {
            points: ArrayVec::from_iter([a, b, c]),
        }
    }

    /// Creates a quadrilateral face from its points in cyclic order.
    #[inline]
    pub fn quad(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Self {
        Face {
            points: ArrayVec::from([a, b, c, d]),
        }
    }

    /// Creates a face from 3 or 4 points.
    pub fn try_from_points(points: &[Point<Real>]) -> Result<Self, CatError> {
        check_point_count(points.len(), DIM)?;
        Ok(Face {
            points: points.iter().copied().collect(),
        })
    }

    /// Creates a face from raw coordinates, checking there are 3 or 4 points in 3 dimensions.
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use chordal3d::face::Face;
    ///
    /// assert!(Face::try_from_coords(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]).is_ok());
    /// assert!(Face::try_from_coords(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]).is_err());
    /// # }
    /// ```
    pub fn try_from_coords<C: AsRef<[Real]>>(coords: &[C]) -> Result<Self, CatError> {
        let mut points = ArrayVec::new();

        for coord in coords {
            let coord = coord.as_ref();
            check_point_count(coords.len(), coord.len())?;
            points.push(Point::new(coord[0], coord[1], coord[2]));
        }

        check_point_count(points.len(), DIM)?;
        Ok(Face { points })
    }

    /// The points of this face.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of points of this face (3 or 4).
    #[inline]
    #[allow(clippy::len_without_is_empty)] // A face is never empty.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this face a triangle?
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.points.len() == 3
    }

    /// The center of this face.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.points)
    }

    /// A (non-normalized) normal of the plane of this face.
    ///
    /// Computed from the first three points, following their winding.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        scaled_normal(&self.points)
    }

    /// Checks whether `self` and `other` have the same points, up to ordering and `epsilon`.
    pub fn same_points_as(&self, other: &Face, epsilon: Real) -> bool {
        self.len() == other.len()
            && self.points.iter().all(|a| {
                other
                    .points
                    .iter()
                    .any(|b| na::distance_squared(a, b) <= epsilon * epsilon)
            })
    }
}

pub(crate) fn check_point_count(points: usize, dim: usize) -> Result<(), CatError> {
    if (points == 3 || points == 4) && dim == DIM {
        Ok(())
    } else {
        Err(CatError::InvalidFaceGeometry { points, dim })
    }
}

#[inline]
pub(crate) fn scaled_normal(points: &[Point<Real>]) -> Vector<Real> {
    let ab = points[1] - points[0];
    let ac = points[2] - points[0];
    ab.cross(&ac)
}
