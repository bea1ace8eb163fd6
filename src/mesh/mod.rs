//! Tetrahedral meshes and the tetrahedralization boundary of the pipeline.

pub use self::pipeline::{
    compute_cat_cells, merge_clouds, MergedClouds, PipelineError, SurfaceCloud, Tetrahedralizer,
};
pub use self::tet_mesh::{TetMesh, TETRAHEDRON_PREFIX};

mod pipeline;
mod tet_mesh;
