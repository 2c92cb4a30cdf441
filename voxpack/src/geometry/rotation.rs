use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the six axis-aligned orientations of a cuboid.
///
/// Each rotation is a permutation of the base extents `(w, l, h)`:
///
/// | index | extents     |
/// |-------|-------------|
/// | 0     | `(w, l, h)` |
/// | 1     | `(w, h, l)` |
/// | 2     | `(l, w, h)` |
/// | 3     | `(l, h, w)` |
/// | 4     | `(h, w, l)` |
/// | 5     | `(h, l, w)` |
///
/// Indices outside `0..6` wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    /// Number of distinct rotations
    pub const N: usize = 6;

    /// The rotation which leaves the base extents untouched
    pub const IDENTITY: Rotation = Rotation(0);

    pub fn new(index: usize) -> Self {
        Rotation((index % Self::N) as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// All rotations, in ascending index order
    pub fn all() -> impl Iterator<Item = Rotation> {
        (0..Self::N).map(Rotation::new)
    }
}

impl From<u8> for Rotation {
    fn from(index: u8) -> Self {
        Rotation::new(index as usize)
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}
