use crate::cat::CatCells;
use crate::cell::{filter_relevant_cells, ObjectRanges, TetraCell};
use crate::face::{anchor, AnchoredNormal, Face};
use crate::math::{Point, Real};
use crate::mesh::TetMesh;
use crate::split::split_cell;
use crate::CatError;
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The faces and normals a single cell adds to the chordal axis transform.
///
/// Computing a contribution only reads the cell and the mesh points, so the
/// contributions of different cells can be computed independently, then merged
/// in cell order with [`CatCells::accumulate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellContribution {
    /// The faces added to CAT cells, with their owning object and oriented normal.
    pub faces: Vec<(u32, Face, AnchoredNormal)>,
    /// The normals added to mesh points.
    pub point_normals: Vec<(u32, AnchoredNormal)>,
}

/// Splits a cell and orients its faces toward the objects they bound.
///
/// For each object group of the cell, every face bounding the group is oriented
/// toward the first point of the group and added to the group's object. Its
/// normal is also added to every mesh point of the group.
pub fn process_cell(
    cell: &TetraCell,
    mesh_points: &[Point<Real>],
) -> Result<CellContribution, CatError> {
    let coords = cell.coords(mesh_points)?;
    let split = split_cell(cell.case(), &coords)?;
    let mut covered: SmallVec<[u32; 4]> = SmallVec::new();
    let mut result = CellContribution::default();

    for (i, group) in cell.groups().enumerate() {
        // Groups can hold several points: the object and its point are found
        // at the group offset, not at the group rank `i`.
        let reference = coords[group.offset];
        let obj_covered = covered.contains(&group.object);

        for face in split.group_faces(i) {
            let normal = anchor(face.points(), &reference)?;

            if !obj_covered {
                result.faces.push((group.object, face.clone(), normal));
            }

            result
                .point_normals
                .extend(group.points.iter().map(|pt| (*pt, normal)));
        }

        if !obj_covered {
            covered.push(group.object);
        }
    }

    log::trace!(
        "cell {} ({:?}): {} faces.",
        cell.id(),
        cell.case(),
        result.faces.len()
    );

    Ok(result)
}

impl CatCells {
    /// Merges the contribution of one cell.
    pub fn accumulate(&mut self, contribution: CellContribution) -> Result<(), CatError> {
        for (object, face, normal) in contribution.faces {
            self.push_face(object, face, normal)?;
        }

        for (point, normal) in contribution.point_normals {
            self.push_point_normal(point, normal)?;
        }

        Ok(())
    }
}

/// Computes the CAT faces of the given relevant cells, one cell after the other.
///
/// `num_objects` is the number of objects the cells' object ids refer to.
pub fn sweep_cells(
    mesh_points: &[Point<Real>],
    cells: &[TetraCell],
    num_objects: usize,
) -> Result<CatCells, CatError> {
    let mut result = CatCells::new(num_objects, mesh_points.len());

    for cell in cells {
        result.accumulate(process_cell(cell, mesh_points)?)?;
    }

    log::debug!(
        "Swept {} cells into {} CAT faces.",
        cells.len(),
        result.total_faces()
    );

    Ok(result)
}

/// Computes the CAT faces of the given relevant cells in parallel.
///
/// The cell contributions are computed in parallel and merged in cell order,
/// so the result is identical to the one of [`sweep_cells`].
#[cfg(feature = "parallel")]
pub fn par_sweep_cells(
    mesh_points: &[Point<Real>],
    cells: &[TetraCell],
    num_objects: usize,
) -> Result<CatCells, CatError> {
    let contributions = cells
        .par_iter()
        .map(|cell| process_cell(cell, mesh_points))
        .collect::<Result<Vec<_>, _>>()?;

    let mut result = CatCells::new(num_objects, mesh_points.len());

    for contribution in contributions {
        result.accumulate(contribution)?;
    }

    log::debug!(
        "Swept {} cells into {} CAT faces.",
        cells.len(),
        result.total_faces()
    );

    Ok(result)
}

/// Computes the chordal axis transform of the objects of a tetrahedral mesh.
///
/// The object of each mesh point is given by `ranges`. Cells with points on a
/// single object are skipped. The sweep runs in parallel if the `parallel`
/// feature is enabled.
pub fn compute_cat_faces(mesh: &TetMesh, ranges: &ObjectRanges) -> Result<CatCells, CatError> {
    let filtered = filter_relevant_cells(mesh.cells(), ranges)?;

    #[cfg(feature = "parallel")]
    {
        par_sweep_cells(mesh.points(), &filtered.relevant, ranges.num_objects())
    }
    #[cfg(not(feature = "parallel"))]
    {
        sweep_cells(mesh.points(), &filtered.relevant, ranges.num_objects())
    }
}
