/// Errors that can occur while computing the chordal axis transform.
///
/// None of these errors is recoverable within a computation: they all indicate
/// malformed input coming either from the tetrahedralization stage or from the
/// object point-range table. The caller decides whether to retry with different
/// tetrahedralization parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatError {
    /// A tetrahedral cell was given with a number of point ids or object ids other than 4.
    #[error("a tetrahedral cell needs exactly 4 point ids and 4 object ids, got {points} and {objects}.")]
    InvalidCellShape {
        /// The number of point ids given.
        points: usize,
        /// The number of object ids given.
        objects: usize,
    },
    /// The group sizes of a cell do not match any case with a registered splitter.
    #[error("no splitter is registered for the cell case {0:?}.")]
    UnrecognizedCellCase(Vec<usize>),
    /// A face was given with a point count other than 3 or 4, or with non-3D points.
    #[error("a face needs 3 or 4 points in 3 dimensions, got {points} points in {dim} dimensions.")]
    InvalidFaceGeometry {
        /// The number of points of the face.
        points: usize,
        /// The dimension of the offending points.
        dim: usize,
    },
    /// The leading points of a face are (almost) collinear so it has no well-defined normal.
    #[error("the face is degenerate: its first three points do not span a plane.")]
    DegenerateFace,
    /// A point index does not refer to any point of the mesh or of the object ranges.
    #[error("the point index {point} is out of range (number of points: {num_points}).")]
    PointOutOfRange {
        /// The offending point index.
        point: u32,
        /// The number of known points.
        num_points: usize,
    },
    /// The objects have more points than can be indexed with `u32`.
    #[error("{num_points} points cannot be indexed with 32-bit indices.")]
    TooManyPoints {
        /// The total number of points (saturated at `usize::MAX`).
        num_points: usize,
    },
    /// An object id does not refer to any object known to the accumulator.
    #[error("the object id {object} is out of range (number of objects: {num_objects}).")]
    ObjectOutOfRange {
        /// The offending object id.
        object: u32,
        /// The number of known objects.
        num_objects: usize,
    },
    /// The flat cell-connectivity array is not a sequence of `4, i0, i1, i2, i3` blocks.
    #[error("malformed cell array at offset {offset}: expected a tetrahedron prefix 4, found {prefix:?}.")]
    InvalidCellArray {
        /// Offset of the offending block in the flat array.
        offset: usize,
        /// The prefix found there, or `None` if the array ends inside a block.
        prefix: Option<u32>,
    },
}
