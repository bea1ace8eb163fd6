//! Classification of tetrahedra by the objects owning their points.

pub use self::cell_case::CellCase;
pub use self::classify::{classify, classify_tetrahedron, ClassifiedCell};
pub use self::filter::{filter_relevant_cells, FilteredCells};
pub use self::object_ranges::ObjectRanges;
pub use self::tetra_cell::{CellGroup, TetraCell};

mod cell_case;
mod classify;
mod filter;
mod object_ranges;
mod tetra_cell;
