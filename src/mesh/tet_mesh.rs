use crate::math::{Point, Real};
use crate::CatError;

/// The number of vertices of a tetrahedral cell, used as prefix in flat cell arrays.
pub const TETRAHEDRON_PREFIX: u32 = 4;

/// A tetrahedral mesh: a point array and a table of cells, four point indices each.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TetMesh {
    points: Vec<Point<Real>>,
    cells: Vec<[u32; 4]>,
}

impl TetMesh {
    /// Creates a mesh from its points and cells.
    ///
    /// Fails if a cell refers to a point that does not exist.
    pub fn new(points: Vec<Point<Real>>, cells: Vec<[u32; 4]>) -> Result<Self, CatError> {
        if let Some(point) = cells.iter().flatten().find(|id| **id as usize >= points.len()) {
            return Err(CatError::PointOutOfRange {
                point: *point,
                num_points: points.len(),
            });
        }

        Ok(TetMesh { points, cells })
    }

    /// Creates a mesh from a flat cell-connectivity array.
    ///
    /// The array is a sequence of `4, i0, i1, i2, i3` blocks, one per
    /// tetrahedron, as output by usual tetrahedralization engines.
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use chordal3d::math::Point;
    /// use chordal3d::mesh::TetMesh;
    ///
    /// let points = vec![Point::origin(); 8];
    /// let mesh = TetMesh::from_flat_cells(points, &[4, 0, 1, 2, 3, 4, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(mesh.cells(), &[[0, 1, 2, 3], [4, 5, 6, 7]]);
    /// # }
    /// ```
    pub fn from_flat_cells(points: Vec<Point<Real>>, flat: &[u32]) -> Result<Self, CatError> {
        let block = TETRAHEDRON_PREFIX as usize + 1;
        let mut cells = Vec::with_capacity(flat.len() / block);

        for (i, chunk) in flat.chunks(block).enumerate() {
            let offset = i * block;

            match chunk {
                [TETRAHEDRON_PREFIX, a, b, c, d] => cells.push([*a, *b, *c, *d]),
                [prefix, ..] if *prefix != TETRAHEDRON_PREFIX => {
                    return Err(CatError::InvalidCellArray {
                        offset,
                        prefix: Some(*prefix),
                    })
                }
                _ => return Err(CatError::InvalidCellArray {
                    offset,
                    prefix: None,
                }),
            }
        }

        Self::new(points, cells)
    }

    /// The points of this mesh.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The cells of this mesh.
    #[inline]
    pub fn cells(&self) -> &[[u32; 4]] {
        &self.cells
    }

    /// The number of cells of this mesh.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// The cells of this mesh as a flat array of `4, i0, i1, i2, i3` blocks.
    pub fn flat_cells(&self) -> Vec<u32> {
        self.cells
            .iter()
            .flat_map(|cell| std::iter::once(TETRAHEDRON_PREFIX).chain(cell.iter().copied()))
            .collect()
    }
}
