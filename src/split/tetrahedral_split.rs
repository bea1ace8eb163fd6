//! Splitting of a multi-object tetrahedron into its chordal axis faces.
//!
//! The four points given to the splitters are sorted as by
//! [`classify`](crate::cell::classify): the points of each object form a
//! contiguous group, larger groups first. Faces are built from the midpoints of
//! the edges joining different objects and, when more than two objects meet,
//! from triangle and tetrahedron centroids.

use crate::cell::CellCase;
use crate::face::Face;
use crate::math::{Point, Real};
use crate::split::CellSplit;
use crate::utils::{center, midpoint};
use crate::CatError;
use smallvec::smallvec;

/// The edges of a tetrahedron.
///
/// The 0-st edge is the segment AB.
/// The 1-st edge is the segment AC.
/// The 2-nd edge is the segment AD.
/// The 3-rd edge is the segment BC.
/// The 4-th edge is the segment BD.
/// The 5-th edge is the segment CD.
const EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
/// The edge opposite to each edge of [`EDGES`].
const OPPOSITE_EDGES: [(usize, usize); 6] = [(2, 3), (1, 3), (1, 2), (0, 3), (0, 2), (0, 1)];

/// Splits a tetrahedron into the faces separating its object groups.
///
/// `pts` are the cell coordinates in grouped order. Fails with
/// [`CatError::UnrecognizedCellCase`] for [`CellCase::Single`] since a
/// single-object cell has nothing to separate.
pub fn split_cell(case: CellCase, pts: &[Point<Real>; 4]) -> Result<CellSplit, CatError> {
    let split = match case {
        CellCase::FourSingles => split_1111(pts),
        CellCase::TwoOneOne => split_211(pts),
        CellCase::TwoTwo => split_22(pts),
        CellCase::ThreeOne => split_31(pts),
        CellCase::Single => {
            return Err(CatError::UnrecognizedCellCase(
                case.group_sizes().to_vec(),
            ))
        }
    };

    debug_assert_eq!(split.faces().len(), case.face_count());
    debug_assert_eq!(split.num_groups(), case.object_count());
    Ok(split)
}

/// Four objects: one quadrilateral per edge, in the plane through that edge's
/// midpoint and the opposite edge.
fn split_1111(pts: &[Point<Real>; 4]) -> CellSplit {
    let tet_center = center(pts);
    let faces = EDGES
        .iter()
        .zip(OPPOSITE_EDGES.iter())
        .map(|(&(i, j), &(k, l))| {
            Face::quad(
                midpoint(&pts[i], &pts[j]),
                center(&[pts[i], pts[j], pts[k]]),
                tet_center,
                center(&[pts[i], pts[j], pts[l]]),
            )
        })
        .collect();

    // Each point's region is bounded by the faces of its three edges.
    let groups = (0..4)
        .map(|p| {
            EDGES
                .iter()
                .enumerate()
                .filter(|(_, (i, j))| *i == p || *j == p)
                .map(|(e, _)| e)
                .collect()
        })
        .collect();

    CellSplit::new(faces, groups)
}

/// Two points of one object, one point of each of two others: the corners of
/// the two lone points are cut off.
fn split_211(pts: &[Point<Real>; 4]) -> CellSplit {
    let faces = vec![corner(pts, 2), corner(pts, 3)];
    CellSplit::new(faces, smallvec![smallvec![0, 1], smallvec![0], smallvec![1]])
}

/// Two points of each of two objects: one quadrilateral through the midpoints
/// of the four edges joining them.
fn split_22(pts: &[Point<Real>; 4]) -> CellSplit {
    let face = Face::quad(
        midpoint(&pts[0], &pts[2]),
        midpoint(&pts[0], &pts[3]),
        midpoint(&pts[1], &pts[3]),
        midpoint(&pts[1], &pts[2]),
    );
    CellSplit::new(vec![face], smallvec![smallvec![0], smallvec![0]])
}

/// Three points of one object, one of another: the corner of the lone point is cut off.
fn split_31(pts: &[Point<Real>; 4]) -> CellSplit {
    CellSplit::new(vec![corner(pts, 3)], smallvec![smallvec![0], smallvec![0]])
}

/// The triangle through the midpoints of the three edges adjacent to `pts[i]`.
fn corner(pts: &[Point<Real>; 4], i: usize) -> Face {
    Face::triangle(
        midpoint(&pts[i], &pts[(i + 1) % 4]),
        midpoint(&pts[i], &pts[(i + 2) % 4]),
        midpoint(&pts[i], &pts[(i + 3) % 4]),
    )
}
