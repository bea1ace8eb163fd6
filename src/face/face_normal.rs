use crate::face::face::{check_point_count, scaled_normal};
use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON, DIM};
use crate::CatError;
use na::Unit;

/// A unit face normal, located at the face.
///
/// This is the located vector used by downstream constraints: the normal starts
/// at `anchor`, a point of the face, and points toward the half-space
/// containing `reference`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct AnchoredNormal {
    /// The point the normal was oriented toward.
    pub reference: Point<Real>,
    /// The first point of the face.
    pub anchor: Point<Real>,
    /// The oriented unit normal of the face.
    pub normal: UnitVector<Real>,
}

/// Computes the unit normal of a planar face, oriented toward `reference`.
///
/// The face must have 3 or 4 points. Its plane is computed from its first three
/// points, which are degenerate if the sine of their angle is below
/// [`DEFAULT_EPSILON`]; the sign of the result is chosen such that
/// `normal.dot(reference - face[0]) >= 0`.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use chordal3d::face::orient;
/// use chordal3d::math::{Point, Vector};
///
/// let face = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
/// ];
/// let normal = orient(&face, &Point::new(1.0, 1.0, -1.0)).unwrap();
/// assert_eq!(*normal, -Vector::z());
/// # }
/// ```
pub fn orient(face: &[Point<Real>], reference: &Point<Real>) -> Result<UnitVector<Real>, CatError> {
    check_point_count(face.len(), DIM)?;

    // The cross product scales with the squared edge lengths.
    let edge_scale = (face[1] - face[0]).norm() * (face[2] - face[0]).norm();
    let normal = Unit::try_new(scaled_normal(face), DEFAULT_EPSILON * edge_scale)
        .ok_or(CatError::DegenerateFace)?;

    if normal.dot(&(reference - face[0])) < 0.0 {
        Ok(-normal)
    } else {
        Ok(normal)
    }
}

/// Computes the oriented unit normal of a face together with its anchor and reference points.
pub fn anchor(face: &[Point<Real>], reference: &Point<Real>) -> Result<AnchoredNormal, CatError> {
    let normal = orient(face, reference)?;

    Ok(AnchoredNormal {
        reference: *reference,
        anchor: face[0],
        normal,
    })
}
