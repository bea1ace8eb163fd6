use crate::face::{AnchoredNormal, Face};
use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::HashablePoint;
use crate::CatError;

/// The chordal axis transform of a set of objects.
///
/// Built by a sweep over the relevant cells of a tetrahedral mesh, see
/// [`sweep_cells`](super::sweep_cells).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CatCells {
    /// The faces of the CAT cell of each object.
    pub faces_by_object: Vec<Vec<Face>>,
    /// The oriented normals of each object's faces, aligned with `faces_by_object`.
    pub normals_by_object: Vec<Vec<AnchoredNormal>>,
    /// The normals of the faces bounding each mesh point's region.
    pub normals_by_point: Vec<Vec<AnchoredNormal>>,
}

/// A polygonal mesh with shared vertices and mixed triangle/quad faces.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct IndexedFaces {
    /// The deduplicated vertices.
    pub vertices: Vec<Point<Real>>,
    /// The faces, flattened as `n, i_0, ..., i_(n-1)` for each face of `n` vertices.
    pub faces: Vec<u32>,
}

impl IndexedFaces {
    /// The number of faces.
    pub fn num_faces(&self) -> usize {
        let mut count = 0;
        let mut i = 0;

        while i < self.faces.len() {
            i += self.faces[i] as usize + 1;
            count += 1;
        }

        count
    }
}

impl CatCells {
    /// Creates an empty accumulator for the given number of objects and mesh points.
    pub fn new(num_objects: usize, num_points: usize) -> Self {
        CatCells {
            faces_by_object: vec![Vec::new(); num_objects],
            normals_by_object: vec![Vec::new(); num_objects],
            normals_by_point: vec![Vec::new(); num_points],
        }
    }

    /// The number of objects.
    #[inline]
    pub fn num_objects(&self) -> usize {
        self.faces_by_object.len()
    }

    /// The faces of the CAT cell of the given object.
    ///
    /// # Panics
    ///
    /// Panics if `object` is out of range.
    #[inline]
    pub fn faces(&self, object: u32) -> &[Face] {
        &self.faces_by_object[object as usize]
    }

    /// The oriented normals of the faces of the given object.
    ///
    /// # Panics
    ///
    /// Panics if `object` is out of range.
    #[inline]
    pub fn normals(&self, object: u32) -> &[AnchoredNormal] {
        &self.normals_by_object[object as usize]
    }

    /// The normals accumulated on the given mesh point.
    ///
    /// # Panics
    ///
    /// Panics if `point` is out of range.
    #[inline]
    pub fn point_normals(&self, point: u32) -> &[AnchoredNormal] {
        &self.normals_by_point[point as usize]
    }

    /// The total number of faces over all CAT cells.
    pub fn total_faces(&self) -> usize {
        self.faces_by_object.iter().map(Vec::len).sum()
    }

    /// Appends a face and its normal to the CAT cell of `object`.
    pub(crate) fn push_face(
        &mut self,
        object: u32,
        face: Face,
        normal: AnchoredNormal,
    ) -> Result<(), CatError> {
        if object as usize >= self.num_objects() {
            return Err(CatError::ObjectOutOfRange {
                object,
                num_objects: self.num_objects(),
            });
        }

        self.faces_by_object[object as usize].push(face);
        self.normals_by_object[object as usize].push(normal);
        Ok(())
    }

    /// Appends a normal to the list of the given mesh point.
    pub(crate) fn push_point_normal(
        &mut self,
        point: u32,
        normal: AnchoredNormal,
    ) -> Result<(), CatError> {
        let num_points = self.normals_by_point.len();
        self.normals_by_point
            .get_mut(point as usize)
            .ok_or(CatError::PointOutOfRange { point, num_points })?
            .push(normal);
        Ok(())
    }

    /// The CAT cell of `object` as a mesh with shared vertices.
    ///
    /// Vertices are merged when their coordinates are exactly equal, which is the
    /// case for the face points shared between neighboring cells.
    pub fn cell_mesh(&self, object: u32) -> Result<IndexedFaces, CatError> {
        let faces = self
            .faces_by_object
            .get(object as usize)
            .ok_or(CatError::ObjectOutOfRange {
                object,
                num_objects: self.num_objects(),
            })?;

        let mut vtx_to_id = HashMap::default();
        let mut result = IndexedFaces::default();

        for face in faces {
            result.faces.push(face.len() as u32);

            for pt in face.points() {
                let id = match vtx_to_id.entry(HashablePoint::new(*pt)) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        let id = result.vertices.len() as u32;
                        result.vertices.push(*pt);
                        *entry.insert(id)
                    }
                };
                result.faces.push(id);
            }
        }

        Ok(result)
    }
}
