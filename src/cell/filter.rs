use crate::cell::{ObjectRanges, TetraCell};
use crate::CatError;

/// The cells of a tetrahedral mesh, split by whether they span several objects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredCells {
    /// Cells with points from at least two objects.
    pub relevant: Vec<TetraCell>,
    /// Cells with all their points on a single object.
    pub skipped: Vec<TetraCell>,
}

impl FilteredCells {
    /// The number of cells with all their points on a single object.
    #[inline]
    pub fn num_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Classifies every tetrahedron and keeps aside those belonging to a single object.
///
/// The object of each point is resolved with `ranges`. The id of each resulting
/// [`TetraCell`] is the index of its tetrahedron in `cells`.
pub fn filter_relevant_cells(
    cells: &[[u32; 4]],
    ranges: &ObjectRanges,
) -> Result<FilteredCells, CatError> {
    let mut result = FilteredCells::default();

    for (id, cell) in cells.iter().enumerate() {
        let objects = ranges.objects_of(cell)?;
        let cell = TetraCell::new(id, *cell, objects);

        if cell.case().is_relevant() {
            result.relevant.push(cell);
        } else {
            result.skipped.push(cell);
        }
    }

    log::debug!(
        "{} of {} tetrahedra span several objects ({} skipped).",
        result.relevant.len(),
        cells.len(),
        result.num_skipped()
    );

    Ok(result)
}
