//! Accumulation of the chordal axis transform over a tetrahedral mesh.

pub use self::cat_cells::{CatCells, IndexedFaces};
#[cfg(feature = "parallel")]
pub use self::sweep::par_sweep_cells;
pub use self::sweep::{compute_cat_faces, process_cell, sweep_cells, CellContribution};

mod cat_cells;
mod sweep;
