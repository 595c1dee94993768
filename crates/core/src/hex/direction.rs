use crate::hex::CubeVec;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum::{EnumIter, IntoEnumIterator};

/// Unit vectors for stepping to each neighbor in cube space, indexed by
/// [Direction::index].
pub const CUBE_NEIGHBORS: [CubeVec; 6] = [
    CubeVec::new(1, -1),  // (1, -1, 0)
    CubeVec::new(1, 0),   // (1, 0, -1)
    CubeVec::new(0, 1),   // (0, 1, -1)
    CubeVec::new(-1, 1),  // (-1, 1, 0)
    CubeVec::new(-1, 0),  // (-1, 0, 1)
    CubeVec::new(0, -1),  // (0, -1, 1)
];

/// Vectors for stepping to each diagonal neighbor in cube space. Diagonal `i`
/// sits between direction `i` and direction `i + 1`, so each entry is the sum
/// of those two neighbor vectors.
pub const CUBE_DIAGONALS: [CubeVec; 6] = [
    CubeVec::new(2, -1),  // (2, -1, -1)
    CubeVec::new(1, 1),   // (1, 1, -2)
    CubeVec::new(-1, 2),  // (-1, 2, -1)
    CubeVec::new(-2, 1),  // (-2, 1, 1)
    CubeVec::new(-1, -1), // (-1, -1, 2)
    CubeVec::new(1, -2),  // (1, -2, 1)
];

/// `(q, r)` offsets for stepping to each neighbor in axial space. These are
/// just [CUBE_NEIGHBORS] with the y component dropped.
pub const AXIAL_NEIGHBORS: [(i32, i32); 6] =
    [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// The 6 directions in which hexes can line up side-to-side. A direction
/// can represent two useful things for any given hex:
///
/// - Direction from its center to the midpoint of one of its sides
/// - Direction to a neighboring hex's center
///
/// Directions are ordered **counter-clockwise**. The compass names assume
/// pointy-top hexes drawn with the screen y axis pointing down, where
/// direction 0 points directly right. With flat-top hexes everything is turned
/// 30° clockwise, so direction 0 points right-and-down instead.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// East
    E,
    /// Northeast
    NE,
    /// Northwest
    NW,
    /// West
    W,
    /// Southwest
    SW,
    /// Southeast
    SE,
}

impl Direction {
    /// All directions, in counter-clockwise order starting from [Self::E]
    pub const COUNTER_CLOCKWISE: [Self; 6] =
        [Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// Iterate through all `Direction`s, counter-clockwise from `E`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Get a direction by its index in the counter-clockwise ordering. Returns
    /// an error if the index is outside `[0, 6)`; out-of-range indexes are
    /// never wrapped.
    pub fn from_index(index: usize) -> anyhow::Result<Self> {
        Self::COUNTER_CLOCKWISE.get(index).copied().ok_or_else(|| {
            anyhow!("Invalid direction index {}; must be in [0, 6)", index)
        })
    }

    /// The index of this direction in the counter-clockwise ordering, in
    /// `[0, 6)`. This is also the index into all the neighbor tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction whose unit vector matches the given vector. Returns
    /// `None` if the vector doesn't point at a direct neighbor.
    pub fn from_unit(vec: CubeVec) -> Option<Self> {
        Self::iter().find(|dir| dir.vec() == vec)
    }

    /// Get a vector that would move a hex one step in this direction
    pub fn vec(self) -> CubeVec {
        CUBE_NEIGHBORS[self.index()]
    }

    /// Get a vector that would move a hex to the diagonal neighbor between
    /// this direction and the next one counter-clockwise
    pub fn diagonal_vec(self) -> CubeVec {
        CUBE_DIAGONALS[self.index()]
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::COUNTER_CLOCKWISE[(self.index() + 3) % 6]
    }

    /// Get the next direction counter-clockwise (a 60° left turn)
    pub fn rotate_left(self) -> Self {
        Self::COUNTER_CLOCKWISE[(self.index() + 1) % 6]
    }

    /// Get the next direction clockwise (a 60° right turn)
    pub fn rotate_right(self) -> Self {
        // Adding 5 is the same as subtracting 1 post-modulus, without having
        // to go through a signed type
        Self::COUNTER_CLOCKWISE[(self.index() + 5) % 6]
    }
}

impl TryFrom<i32> for Direction {
    type Error = anyhow::Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let index = usize::try_from(value).map_err(|_| {
            anyhow!("Invalid direction index {}; must be in [0, 6)", value)
        })?;
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_iter_order() {
        let dirs: Vec<Direction> = Direction::iter().collect();
        assert_eq!(dirs, Direction::COUNTER_CLOCKWISE.to_vec());
        for (i, dir) in dirs.into_iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i).unwrap(), dir);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(Direction::from_index(6).is_err());
        assert!(Direction::try_from(-1).is_err());
        assert!(Direction::try_from(6).is_err());
        assert_eq!(Direction::try_from(4).unwrap(), Direction::SW);
    }

    #[test]
    fn test_tables_are_zero_sum_units() {
        for vec in CUBE_NEIGHBORS.iter() {
            assert_eq!(vec.x() + vec.y() + vec.z(), 0);
            assert_eq!(vec.x().abs() + vec.y().abs() + vec.z().abs(), 2);
        }
        for (i, (q, r)) in AXIAL_NEIGHBORS.iter().enumerate() {
            let vec = CUBE_NEIGHBORS[i];
            assert_eq!((vec.x(), vec.z()), (*q, *r));
        }
    }

    #[test]
    fn test_diagonals() {
        for dir in Direction::iter() {
            assert_eq!(dir.diagonal_vec(), dir.vec() + dir.rotate_left().vec());
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::E.opposite(), Direction::W);
        assert_eq!(Direction::NE.opposite(), Direction::SW);
        assert_eq!(Direction::NW.opposite(), Direction::SE);
        for dir in Direction::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().vec(), -dir.vec());
        }
    }

    #[test]
    fn test_rotate() {
        assert_eq!(Direction::E.rotate_left(), Direction::NE);
        assert_eq!(Direction::E.rotate_right(), Direction::SE);
        assert_eq!(Direction::SE.rotate_left(), Direction::E);
        for dir in Direction::iter() {
            assert_eq!(dir.rotate_left().rotate_right(), dir);
            assert_eq!(dir.rotate_left().vec(), dir.vec().rotate_left());
            assert_eq!(dir.rotate_right().vec(), dir.vec().rotate_right());
        }
    }

    #[test]
    fn test_from_unit() {
        for dir in Direction::iter() {
            assert_eq!(Direction::from_unit(dir.vec()), Some(dir));
            assert_eq!(Direction::from_unit(dir.diagonal_vec()), None);
        }
        assert_eq!(Direction::from_unit(CubeVec::ZERO), None);
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &Direction::NE,
            &[Token::UnitVariant {
                name: "Direction",
                variant: "ne",
            }],
        );
        assert_tokens(
            &Direction::SW,
            &[Token::UnitVariant {
                name: "Direction",
                variant: "sw",
            }],
        );
        assert_de_tokens_error::<Direction>(
            &[Token::UnitVariant {
                name: "Direction",
                variant: "up",
            }],
            "unknown variant `up`, expected one of \
             `e`, `ne`, `nw`, `w`, `sw`, `se`",
        );
    }
}
