use std::fmt::Display;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;

/// Extents of an axis-aligned cuboid, in whole grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub length: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, length: u32, height: u32) -> Self {
        Dimensions {
            width,
            length,
            height,
        }
    }

    pub fn volume(&self) -> u64 {
        self.width as u64 * self.length as u64 * self.height as u64
    }

    /// Returns the extents after applying `rotation` (see [`Rotation`] for the permutation table).
    pub fn rotate(&self, rotation: Rotation) -> Dimensions {
        let Dimensions {
            width: w,
            length: l,
            height: h,
        } = *self;
        let (width, length, height) = match rotation.index() {
            0 => (w, l, h),
            1 => (w, h, l),
            2 => (l, w, h),
            3 => (l, h, w),
            4 => (h, w, l),
            _ => (h, l, w),
        };
        Dimensions::new(width, length, height)
    }

    /// True if a cuboid with these extents fits inside `other` without rotating it.
    pub fn fits_in(&self, other: &Dimensions) -> bool {
        self.width <= other.width && self.length <= other.length && self.height <= other.height
    }

    /// True if a cuboid with these extents, with its minimal corner at `position`,
    /// lies entirely within `[0, bounds)` on every axis.
    pub fn fits_at(&self, position: Position, bounds: &Dimensions) -> bool {
        let Position(x, y, z) = position;
        x as u64 + self.width as u64 <= bounds.width as u64
            && y as u64 + self.length as u64 <= bounds.length as u64
            && z as u64 + self.height as u64 <= bounds.height as u64
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.length, self.height)
    }
}

/// Minimal corner `(x, y, z)` of a placed cuboid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position(pub u32, pub u32, pub u32);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Grid cell ranges covered by a cuboid with extents `dims` and its minimal corner at `position`.
pub fn cell_ranges(position: Position, dims: Dimensions) -> [Range<usize>; 3] {
    let Position(x, y, z) = position;
    let (x, y, z) = (x as usize, y as usize, z as usize);
    [
        x..x + dims.width as usize,
        y..y + dims.length as usize,
        z..z + dims.height as usize,
    ]
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_case::test_case;

    use super::*;

    #[test_case(0, (2, 3, 5); "identity")]
    #[test_case(1, (2, 5, 3); "swap length and height")]
    #[test_case(2, (3, 2, 5); "swap width and length")]
    #[test_case(3, (3, 5, 2); "rotation 3")]
    #[test_case(4, (5, 2, 3); "rotation 4")]
    #[test_case(5, (5, 3, 2); "rotation 5")]
    fn rotate_permutes_extents(index: usize, expected: (u32, u32, u32)) {
        let dims = Dimensions::new(2, 3, 5);
        let rotated = dims.rotate(Rotation::new(index));
        assert_eq!(
            (rotated.width, rotated.length, rotated.height),
            expected
        );
        assert_eq!(rotated.volume(), dims.volume());
    }

    #[test]
    fn rotation_index_wraps_around() {
        let dims = Dimensions::new(2, 3, 5);
        for r in 0..Rotation::N {
            assert_eq!(dims.rotate(Rotation::new(r)), dims.rotate(Rotation::new(r + 6)));
            assert_eq!(dims.rotate(Rotation::new(r)), dims.rotate(Rotation::new(r + 12)));
        }
    }

    #[test]
    fn rotations_cover_all_permutations() {
        let dims = Dimensions::new(2, 3, 5);
        let rotated = Rotation::all()
            .map(|r| {
                let d = dims.rotate(r);
                (d.width, d.length, d.height)
            })
            .sorted()
            .collect_vec();
        let permutations = [2, 3, 5]
            .into_iter()
            .permutations(3)
            .map(|p| (p[0], p[1], p[2]))
            .sorted()
            .collect_vec();
        assert_eq!(rotated, permutations);
    }

    #[test]
    fn equal_extents_collapse_rotations() {
        let dims = Dimensions::new(4, 4, 7);
        let distinct = Rotation::all().map(|r| dims.rotate(r)).unique().count();
        assert_eq!(distinct, 3);

        let cube = Dimensions::new(6, 6, 6);
        assert_eq!(Rotation::all().map(|r| cube.rotate(r)).unique().count(), 1);
    }

    #[test]
    fn fits_at_respects_upper_bounds() {
        let bounds = Dimensions::new(10, 10, 10);
        let dims = Dimensions::new(5, 5, 5);
        assert!(dims.fits_at(Position(5, 5, 5), &bounds));
        assert!(!dims.fits_at(Position(6, 0, 0), &bounds));
        assert!(!dims.fits_at(Position(0, 0, 6), &bounds));
        assert!(!dims.fits_at(Position(u32::MAX, 0, 0), &bounds));
    }

    #[test]
    fn rotation_deserializes_modulo_six() {
        let r: Rotation = serde_json::from_str("8").unwrap();
        assert_eq!(r, Rotation::new(2));
        assert_eq!(serde_json::to_string(&Rotation::new(5)).unwrap(), "5");
    }
}
