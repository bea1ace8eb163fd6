use crate::cell::{classify, classify_tetrahedron, CellCase, ClassifiedCell};
use crate::math::{Point, Real};
use crate::split::{split_cell, CellSplit};
use crate::CatError;

/// A tetrahedron of the tetrahedral mesh, with its points grouped by owning object.
///
/// The points are sorted at construction (see [`classify`]) so the points of
/// each object form a contiguous group. A `TetraCell` is immutable.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TetraCell {
    id: usize,
    points: [u32; 4],
    objects: [u32; 4],
    case: CellCase,
}

/// One group of points of a [`TetraCell`], all belonging to the same object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellGroup<'a> {
    /// The object owning the points of this group.
    pub object: u32,
    /// The position of the first point of this group in the sorted cell.
    pub offset: usize,
    /// The ids of the mesh points of this group.
    pub points: &'a [u32],
}

impl TetraCell {
    /// Creates the cell with the given id from its points and their object ids.
    pub fn new(id: usize, point_ids: [u32; 4], object_ids: [u32; 4]) -> Self {
        Self::from_classified(id, classify_tetrahedron(point_ids, object_ids))
    }

    /// Creates a cell from slices, checking that both contain exactly four elements.
    pub fn try_new(id: usize, point_ids: &[u32], object_ids: &[u32]) -> Result<Self, CatError> {
        Ok(Self::from_classified(id, classify(point_ids, object_ids)?))
    }

    fn from_classified(id: usize, classified: ClassifiedCell) -> Self {
        TetraCell {
            id,
            points: classified.points,
            objects: classified.objects,
            case: classified.case,
        }
    }

    /// The id of this cell, i.e., its index in the tetrahedral mesh.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The point ids of this cell, grouped by object.
    #[inline]
    pub fn points(&self) -> &[u32; 4] {
        &self.points
    }

    /// The object id of each point of [`Self::points`].
    #[inline]
    pub fn objects(&self) -> &[u32; 4] {
        &self.objects
    }

    /// The partition shape of this cell.
    #[inline]
    pub fn case(&self) -> CellCase {
        self.case
    }

    /// The number of distinct objects owning the points of this cell.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.case.object_count()
    }

    /// The number of distinct CAT faces this cell is split into.
    #[inline]
    pub fn num_cat_faces(&self) -> usize {
        self.case.face_count()
    }

    /// The object groups of this cell, in classification order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = CellGroup<'_>> + '_ {
        self.case
            .group_sizes()
            .iter()
            .zip(self.case.group_offsets())
            .map(move |(&size, &offset)| CellGroup {
                object: self.objects[offset],
                offset,
                points: &self.points[offset..offset + size],
            })
    }

    /// The coordinates of the points of this cell, in grouped order.
    pub fn coords(&self, mesh_points: &[Point<Real>]) -> Result<[Point<Real>; 4], CatError> {
        let mut coords = [Point::origin(); 4];

        for (coord, &id) in coords.iter_mut().zip(self.points.iter()) {
            *coord = *mesh_points
                .get(id as usize)
                .ok_or(CatError::PointOutOfRange {
                    point: id,
                    num_points: mesh_points.len(),
                })?;
        }

        Ok(coords)
    }

    /// Splits this cell into its CAT faces.
    pub fn split(&self, mesh_points: &[Point<Real>]) -> Result<CellSplit, CatError> {
        split_cell(self.case, &self.coords(mesh_points)?)
    }
}
