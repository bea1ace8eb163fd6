use crate::CatError;
use std::ops::Range;

/// The contiguous ranges of point indices owned by each object.
///
/// The point clouds of all objects (and of the container, conventionally last)
/// are concatenated, in order, into the point array fed to the
/// tetrahedralization. Object `k` owns the `counts[k]` points that follow those
/// of objects `0..k`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ObjectRanges {
    // Cumulative point counts: object `k` owns `ends[k - 1]..ends[k]`.
    ends: Vec<u32>,
}

impl ObjectRanges {
    /// Builds the ranges from the number of points of each object.
    ///
    /// # Panics
    ///
    /// Panics if the total number of points does not fit in a `u32`. See
    /// [`Self::try_new`] for a fallible version.
    pub fn new(counts: &[usize]) -> Self {
        match Self::try_new(counts) {
            Ok(ranges) => ranges,
            Err(err) => panic!("{}", err),
        }
    }

    /// Builds the ranges from the number of points of each object.
    ///
    /// Fails with [`CatError::TooManyPoints`] if the total number of points
    /// does not fit in a `u32`.
    pub fn try_new(counts: &[usize]) -> Result<Self, CatError> {
        let mut total = 0u32;
        let mut ends = Vec::with_capacity(counts.len());

        for count in counts {
            total = u32::try_from(*count)
                .ok()
                .and_then(|count| total.checked_add(count))
                .ok_or_else(|| CatError::TooManyPoints {
                    num_points: counts.iter().fold(0usize, |acc, c| acc.saturating_add(*c)),
                })?;
            ends.push(total);
        }

        Ok(ObjectRanges { ends })
    }

    /// The number of objects.
    #[inline]
    pub fn num_objects(&self) -> usize {
        self.ends.len()
    }

    /// The total number of points of all the objects.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.ends.last().copied().unwrap_or(0) as usize
    }

    /// The range of point indices owned by the given object.
    ///
    /// Returns `None` if `object` is out of range.
    pub fn range(&self, object: u32) -> Option<Range<u32>> {
        let end = *self.ends.get(object as usize)?;
        let start = match object {
            0 => 0,
            _ => self.ends[object as usize - 1],
        };
        Some(start..end)
    }

    /// The object owning the given point.
    ///
    /// Point `p` belongs to object `k` iff the number of points of the objects
    /// before `k` is at most `p`, and the number of points up to and including
    /// `k` is greater than `p`.
    pub fn object_of(&self, point: u32) -> Result<u32, CatError> {
        let object = self.ends.partition_point(|end| *end <= point);

        if object == self.ends.len() {
            Err(CatError::PointOutOfRange {
                point,
                num_points: self.num_points(),
            })
        } else {
            Ok(object as u32)
        }
    }

    /// The objects owning each point of a tetrahedron.
    pub fn objects_of(&self, cell: &[u32; 4]) -> Result<[u32; 4], CatError> {
        Ok([
            self.object_of(cell[0])?,
            self.object_of(cell[1])?,
            self.object_of(cell[2])?,
            self.object_of(cell[3])?,
        ])
    }
}
