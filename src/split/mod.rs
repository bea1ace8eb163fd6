//! Case-based splitting of tetrahedra into chordal axis faces.

pub use self::cell_split::CellSplit;
pub use self::tetrahedral_split::split_cell;

mod cell_split;
mod tetrahedral_split;
