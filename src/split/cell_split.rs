use crate::face::Face;
use smallvec::SmallVec;

/// The faces a tetrahedron is split into, and the faces bounding each object group.
///
/// A face separating two groups appears once in [`Self::faces`] and is
/// referenced by both groups.
#[derive(Clone, Debug, PartialEq)]
pub struct CellSplit {
    faces: Vec<Face>,
    groups: SmallVec<[SmallVec<[usize; 3]>; 4]>,
}

impl CellSplit {
    pub(crate) fn new(faces: Vec<Face>, groups: SmallVec<[SmallVec<[usize; 3]>; 4]>) -> Self {
        debug_assert!(groups.iter().flatten().all(|i| *i < faces.len()));
        CellSplit { faces, groups }
    }

    /// All the distinct faces of the split.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The number of object groups.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// The indices, in [`Self::faces`], of the faces bounding the `i`-th group.
    #[inline]
    pub fn group_face_ids(&self, i: usize) -> &[usize] {
        &self.groups[i]
    }

    /// The faces bounding the `i`-th group.
    pub fn group_faces(&self, i: usize) -> impl ExactSizeIterator<Item = &Face> + '_ {
        self.groups[i].iter().map(move |id| &self.faces[*id])
    }

    /// The faces bounding each group, in group order.
    pub fn faces_per_group(&self) -> Vec<Vec<&Face>> {
        (0..self.num_groups())
            .map(|i| self.group_faces(i).collect())
            .collect()
    }
}
