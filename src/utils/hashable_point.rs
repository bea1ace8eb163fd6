use crate::math::{Point, Real};
use std::hash::{Hash, Hasher};

/// A point that can be used as a hash-map key.
///
/// Two points are equal iff their coordinates are bitwise equal, except that
/// `0.0` and `-0.0` are identified. NaN coordinates are never equal to anything
/// but themselves bitwise.
#[derive(Copy, Clone, Debug)]
pub struct HashablePoint(pub Point<Real>);

impl HashablePoint {
    /// Wraps a point.
    #[inline]
    pub fn new(pt: Point<Real>) -> Self {
        HashablePoint(pt)
    }

    fn key(&self) -> [<Real as BitsOf>::Bits; 3] {
        // Adding 0.0 maps -0.0 to 0.0.
        [
            (self.0.x + 0.0).bits_of(),
            (self.0.y + 0.0).bits_of(),
            (self.0.z + 0.0).bits_of(),
        ]
    }
}

impl PartialEq for HashablePoint {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HashablePoint {}

impl Hash for HashablePoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

trait BitsOf {
    type Bits: Copy + Eq + Hash;
    fn bits_of(self) -> Self::Bits;
}

impl BitsOf for f32 {
    type Bits = u32;

    #[inline]
    fn bits_of(self) -> u32 {
        self.to_bits()
    }
}

impl BitsOf for f64 {
    type Bits = u64;

    #[inline]
    fn bits_of(self) -> u64 {
        self.to_bits()
    }
}
