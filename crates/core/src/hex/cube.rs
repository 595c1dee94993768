//! Cube coordinates, the native coordinate system of this crate. See the
//! parent module documentation for a description of the coordinate systems.

use crate::hex::Direction;
use anyhow::anyhow;
use derive_more::{
    Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A whole hex in the cube coordinate system. Each coordinate has an x, y, and
/// z component, and **x+y+z=0 for every coordinate**.
///
/// ## Implementation
///
/// Since x+y+z=0 for all coordinates, this struct only needs to store x and y;
/// z is derived as needed. That means there is no way to build a coordinate
/// that breaks the invariant, so none of the algorithms in this crate need to
/// re-validate their inputs.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct CubeCoord {
    x: i32,
    y: i32,
}

impl CubeCoord {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a new coordinate from all three components. Returns an error
    /// if the components don't fall on the plane x+y+z=0.
    pub fn new(x: i32, y: i32, z: i32) -> anyhow::Result<Self> {
        if x + y + z != 0 {
            Err(anyhow!(
                "Invalid cube coordinate ({}, {}, {}); must be on the plane \
                 x+y+z=0",
                x,
                y,
                z
            ))
        } else {
            Ok(Self::new_xy(x, y))
        }
    }

    /// Construct a new coordinate with the given x and y. Since x+y+z=0 for
    /// all coordinates, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new coordinate with the given x and z. Since x+y+z=0 for
    /// all coordinates, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a new coordinate with the given y and z. Since x+y+z=0 for
    /// all coordinates, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    /// Overwrite this coordinate with another one
    pub fn set(&mut self, other: CubeCoord) -> &mut Self {
        *self = other;
        self
    }

    /// Get the coordinate of the hex adjacent to this one in the given
    /// direction
    pub fn neighbor(self, direction: Direction) -> CubeCoord {
        self + direction.vec()
    }

    /// Get the coordinate of the hex that is diagonally adjacent to this one,
    /// between `direction` and the next direction counter-clockwise. Diagonal
    /// neighbors share a vertex with this hex, but no side.
    pub fn diagonal_neighbor(self, direction: Direction) -> CubeCoord {
        self + direction.diagonal_vec()
    }

    /// Get an iterator of all the hexes directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in direction order.
    pub fn neighbors(self) -> impl Iterator<Item = CubeCoord> {
        Direction::iter().map(move |dir| self.neighbor(dir))
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the hexes are adjacent, 2 if there is 1 hex between them,
    /// etc.
    pub fn distance_to(self, other: CubeCoord) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        ((self.x() - other.x()).abs()
            + (self.y() - other.y()).abs()
            + (self.z() - other.z()).abs()) as u32
            // Two adjacent hexes are always separated by two cube edges
            / 2
    }

    /// Is the other hex directly adjacent to this one? A hex is never its own
    /// neighbor.
    pub fn is_neighbor(self, other: CubeCoord) -> bool {
        if self == other {
            return false;
        }
        let delta = other - self;
        delta.x().abs() <= 1 && delta.y().abs() <= 1 && delta.z().abs() <= 1
    }

    /// Get the direction of the first step along the straight line from this
    /// hex to the other one. Returns `None` if the two are the same hex.
    ///
    /// For adjacent hexes this is a direct table lookup. Otherwise, we walk
    /// `1/n` of the way down the line (where `n` is the distance) and round to
    /// find the first hex we'd actually pass through.
    pub fn direction_to(self, other: CubeCoord) -> Option<Direction> {
        if self == other {
            return None;
        }

        Direction::from_unit(other - self).or_else(|| {
            let t = 1.0 / f64::from(self.distance_to(other));
            let first_step = self.lerp(other, t).round();
            Direction::from_unit(first_step - self)
        })
    }

    /// Linearly interpolate between this hex and another. `t=0` is this hex,
    /// `t=1` is the other one. The output generally won't be a whole hex, use
    /// [FractionalCube::round] to snap it back onto the grid.
    pub fn lerp(self, other: CubeCoord, t: f64) -> FractionalCube {
        let from = FractionalCube::from(self);
        let to = FractionalCube::from(other);
        FractionalCube::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
            from.z + (to.z - from.z) * t,
        )
    }

    /// Rotate this hex 60° counter-clockwise around a pivot hex
    pub fn rotate_left_around(self, pivot: CubeCoord) -> CubeCoord {
        pivot + (self - pivot).rotate_left()
    }

    /// Rotate this hex 60° clockwise around a pivot hex
    pub fn rotate_right_around(self, pivot: CubeCoord) -> CubeCoord {
        pivot + (self - pivot).rotate_right()
    }
}

impl ops::Add<CubeVec> for CubeCoord {
    type Output = CubeCoord;

    fn add(self, rhs: CubeVec) -> Self::Output {
        Self::new_xy(self.x + rhs.x(), self.y + rhs.y())
    }
}

impl ops::AddAssign<CubeVec> for CubeCoord {
    fn add_assign(&mut self, rhs: CubeVec) {
        *self = *self + rhs;
    }
}

impl ops::Sub<CubeVec> for CubeCoord {
    type Output = CubeCoord;

    fn sub(self, rhs: CubeVec) -> Self::Output {
        self + -rhs
    }
}

impl ops::SubAssign<CubeVec> for CubeCoord {
    fn sub_assign(&mut self, rhs: CubeVec) {
        *self = *self - rhs;
    }
}

// The difference between two hexes is a vector
impl ops::Sub<CubeCoord> for CubeCoord {
    type Output = CubeVec;

    fn sub(self, rhs: CubeCoord) -> Self::Output {
        CubeVec::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A vector in cube space. This is an (x,y,z) kind of vector, not a list
/// vector. This is essentially the same as a [CubeCoord], but by denoting some
/// values explicitly as vectors rather than coordinates, it makes it a bit
/// clearer when shifting hexes around. Like [CubeCoord], x+y+z will always
/// equal 0 for all vectors.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct CubeVec {
    x: i32,
    y: i32,
}

impl CubeVec {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    /// Rotate this vector 60° counter-clockwise: `(x, y, z) -> (-y, -z, -x)`
    pub fn rotate_left(self) -> Self {
        Self::new(-self.y(), -self.z())
    }

    /// Rotate this vector 60° clockwise: `(x, y, z) -> (-z, -x, -y)`
    pub fn rotate_right(self) -> Self {
        Self::new(-self.z(), -self.x())
    }
}

/// A point in continuous cube space. Unlike [CubeCoord], the components here
/// are floats and **are not required to sum to zero**. These only exist as
/// intermediate values, e.g. while drawing lines or converting from pixels;
/// the only useful thing to do with one is [round](Self::round) it.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct FractionalCube {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FractionalCube {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Snap this point to the nearest whole hex.
    ///
    /// Each component is rounded independently. That can knock the sum off of
    /// zero, in which case the component that moved the most during rounding
    /// is thrown away and recomputed from the other two. Ties are broken in
    /// axis order: x only absorbs the correction if its error is strictly the
    /// largest, then y if its error strictly beats z's, otherwise z.
    pub fn round(self) -> CubeCoord {
        let mut rx = round_half_up(self.x);
        let mut ry = round_half_up(self.y);
        let mut rz = round_half_up(self.z);

        if rx + ry + rz != 0 {
            let dx = (f64::from(rx) - self.x).abs();
            let dy = (f64::from(ry) - self.y).abs();
            let dz = (f64::from(rz) - self.z).abs();

            if dx > dy && dx > dz {
                rx = -ry - rz;
            } else if dy > dz {
                ry = -rx - rz;
            } else {
                rz = -rx - ry;
            }
        }

        debug_assert_eq!(rx + ry + rz, 0, "rounding broke the cube invariant");
        CubeCoord::new_xy(rx, ry)
    }
}

impl From<CubeCoord> for FractionalCube {
    fn from(other: CubeCoord) -> Self {
        Self::new(other.x().into(), other.y().into(), other.z().into())
    }
}

/// Shorthand for [FractionalCube::round]
pub fn round_cube(x: f64, y: f64, z: f64) -> CubeCoord {
    FractionalCube::new(x, y, z).round()
}

/// Round to the nearest integer, with halves always rounding towards positive
/// infinity (`-0.5 -> 0`, `0.5 -> 1`). This is *not* the same as
/// [f64::round], which rounds halves away from zero. Halves come up a lot when
/// drawing lines along hex edges, so this choice decides which side of the
/// edge those lines fall on.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
