use crate::CatError;

/// The partition shape of the four points of a tetrahedron by owning object.
///
/// The shape is the tuple of group sizes once the points are grouped by object
/// and the groups are sorted by decreasing size (see [`classify`](super::classify)).
/// Only five partitions of four points exist, so this enum is closed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellCase {
    /// `(4)`: all four points belong to the same object.
    Single,
    /// `(3, 1)`: three points of one object, one point of another.
    ThreeOne,
    /// `(2, 2)`: two points of each of two objects.
    TwoTwo,
    /// `(2, 1, 1)`: two points of one object, one point of each of two others.
    TwoOneOne,
    /// `(1, 1, 1, 1)`: four points of four different objects.
    FourSingles,
}

impl CellCase {
    /// Identifies the case from the decreasing list of group sizes.
    pub fn from_group_sizes(sizes: &[usize]) -> Result<Self, CatError> {
        match sizes {
            [4] => Ok(CellCase::Single),
            [3, 1] => Ok(CellCase::ThreeOne),
            [2, 2] => Ok(CellCase::TwoTwo),
            [2, 1, 1] => Ok(CellCase::TwoOneOne),
            [1, 1, 1, 1] => Ok(CellCase::FourSingles),
            _ => Err(CatError::UnrecognizedCellCase(sizes.to_vec())),
        }
    }

    /// The sizes of the object groups, in classification order.
    #[inline]
    pub fn group_sizes(self) -> &'static [usize] {
        match self {
            CellCase::Single => &[4],
            CellCase::ThreeOne => &[3, 1],
            CellCase::TwoTwo => &[2, 2],
            CellCase::TwoOneOne => &[2, 1, 1],
            CellCase::FourSingles => &[1, 1, 1, 1],
        }
    }

    /// The position of the first point of each group in the sorted cell.
    ///
    /// This is the cumulative sum of the sizes of the preceding groups.
    #[inline]
    pub fn group_offsets(self) -> &'static [usize] {
        match self {
            CellCase::Single => &[0],
            CellCase::ThreeOne => &[0, 3],
            CellCase::TwoTwo => &[0, 2],
            CellCase::TwoOneOne => &[0, 2, 3],
            CellCase::FourSingles => &[0, 1, 2, 3],
        }
    }

    /// The number of distinct objects in a cell of this case.
    #[inline]
    pub fn object_count(self) -> usize {
        self.group_sizes().len()
    }

    /// The number of distinct CAT faces the splitter produces for this case.
    #[inline]
    pub fn face_count(self) -> usize {
        match self {
            CellCase::Single => 0,
            CellCase::ThreeOne => 1,
            CellCase::TwoTwo => 1,
            CellCase::TwoOneOne => 2,
            CellCase::FourSingles => 6,
        }
    }

    /// Does a cell of this case lie on the boundary between several objects?
    #[inline]
    pub fn is_relevant(self) -> bool {
        self != CellCase::Single
    }
}
