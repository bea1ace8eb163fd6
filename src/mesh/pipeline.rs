use crate::cat::{compute_cat_faces, CatCells};
use crate::cell::ObjectRanges;
use crate::math::{Point, Real};
use crate::mesh::TetMesh;
use crate::CatError;

/// The sampled closed surface of one object (or of the container).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SurfaceCloud {
    /// The points sampled on the surface.
    pub points: Vec<Point<Real>>,
    /// The surface triangles, indexing `points`, to preserve in the tetrahedralization.
    pub triangles: Vec<[u32; 3]>,
}

impl SurfaceCloud {
    /// Creates a surface from its points and triangles.
    pub fn new(points: Vec<Point<Real>>, triangles: Vec<[u32; 3]>) -> Self {
        SurfaceCloud { points, triangles }
    }

    /// Creates an unconstrained point cloud.
    pub fn from_points(points: Vec<Point<Real>>) -> Self {
        SurfaceCloud {
            points,
            triangles: Vec::new(),
        }
    }
}

/// An engine computing a (constrained) tetrahedralization of a point set.
///
/// The returned mesh must keep the input points, in order, as its first points.
pub trait Tetrahedralizer {
    /// Error reported by the engine.
    type Error: std::error::Error;

    /// Tetrahedralizes `points`, keeping the `constraints` triangles as mesh faces.
    fn tetrahedralize(
        &mut self,
        points: &[Point<Real>],
        constraints: &[[u32; 3]],
    ) -> Result<TetMesh, Self::Error>;
}

/// Errors of the full chordal axis transform pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError<E: std::error::Error> {
    /// The tetrahedralization engine failed.
    #[error("tetrahedralization failed: {0}")]
    Tetrahedralization(#[source] E),
    /// The chordal axis transform of the tetrahedral mesh failed.
    #[error(transparent)]
    Cat(#[from] CatError),
}

/// The merged point set of several surfaces, with the range owned by each surface.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MergedClouds {
    /// The points of all surfaces, in order.
    pub points: Vec<Point<Real>>,
    /// The triangles of all surfaces, re-indexed into `points`.
    pub triangles: Vec<[u32; 3]>,
    /// The range of points owned by each surface.
    pub ranges: ObjectRanges,
}

/// Concatenates the objects' surfaces, followed by the container's surface if any.
///
/// Fails with [`CatError::TooManyPoints`] if the merged points cannot be indexed
/// with `u32`.
pub fn merge_clouds(
    objects: &[SurfaceCloud],
    container: Option<&SurfaceCloud>,
) -> Result<MergedClouds, CatError> {
    let clouds: Vec<&SurfaceCloud> = objects.iter().chain(container).collect();
    let counts: Vec<usize> = clouds.iter().map(|cloud| cloud.points.len()).collect();
    let ranges = ObjectRanges::try_new(&counts)?;
    let mut result = MergedClouds {
        points: Vec::with_capacity(ranges.num_points()),
        triangles: Vec::new(),
        ranges: ObjectRanges::default(),
    };

    for (cloud, object) in clouds.into_iter().zip(0u32..) {
        let base = ranges.range(object).map_or(0, |range| range.start);
        result.points.extend_from_slice(&cloud.points);
        result
            .triangles
            .extend(cloud.triangles.iter().map(|tri| tri.map(|i| i + base)));
    }

    result.ranges = ranges;
    Ok(result)
}

/// Computes the CAT cells of a set of objects packed in a container.
///
/// The surfaces of the objects and of the container are merged, in this order,
/// and tetrahedralized. Object `k` of the result is `objects[k]`, the container
/// being the last object when present.
pub fn compute_cat_cells<T: Tetrahedralizer>(
    objects: &[SurfaceCloud],
    container: Option<&SurfaceCloud>,
    tetrahedralizer: &mut T,
) -> Result<CatCells, PipelineError<T::Error>> {
    let merged = merge_clouds(objects, container)?;
    let mesh = tetrahedralizer
        .tetrahedralize(&merged.points, &merged.triangles)
        .map_err(PipelineError::Tetrahedralization)?;

    if mesh.points().len() != merged.points.len() {
        log::warn!(
            "The tetrahedralization added {} points; cells using them will be rejected.",
            mesh.points().len().saturating_sub(merged.points.len())
        );
    }

    Ok(compute_cat_faces(&mesh, &merged.ranges)?)
}
