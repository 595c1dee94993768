use crate::hex::{CubeCoord, Direction, AXIAL_NEIGHBORS};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A hex in the axial coordinate system. This is a cube coordinate with the
/// redundant third axis dropped: `q = x`, `r = z`, and the missing `y` (which
/// we call `s` here) is always `-q - r`.
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
#[display(fmt = "({}, {})", q, r)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third axis
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    pub fn set(&mut self, q: i32, r: i32) -> &mut Self {
        self.q = q;
        self.r = r;
        self
    }

    /// Get the coordinate of the hex adjacent to this one in the given
    /// direction
    pub fn neighbor(self, direction: Direction) -> AxialCoord {
        let (dq, dr) = AXIAL_NEIGHBORS[direction.index()];
        Self::new(self.q + dq, self.r + dr)
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction order
    pub fn neighbors(self) -> impl Iterator<Item = AxialCoord> {
        Direction::iter().map(move |dir| self.neighbor(dir))
    }

    /// Number of steps between this hex and another. Always agrees with
    /// [CubeCoord::distance_to] for the same two hexes.
    pub fn distance_to(self, other: AxialCoord) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.abs() + dr.abs() + (dq + dr).abs()) as u32 / 2
    }
}

impl From<CubeCoord> for AxialCoord {
    fn from(cube: CubeCoord) -> Self {
        Self::new(cube.x(), cube.z())
    }
}

impl From<AxialCoord> for CubeCoord {
    fn from(axial: AxialCoord) -> Self {
        CubeCoord::new_xz(axial.q, axial.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        let cube = CubeCoord::new(3, -5, 2).unwrap();
        let axial = AxialCoord::from(cube);
        assert_eq!(axial, AxialCoord::new(3, 2));
        assert_eq!(axial.s(), -5);
        assert_eq!(CubeCoord::from(axial), cube);
    }

    #[test]
    fn test_round_trip() {
        for x in -10..=10 {
            for z in -10..=10 {
                let cube = CubeCoord::new_xz(x, z);
                assert_eq!(CubeCoord::from(AxialCoord::from(cube)), cube);
            }
        }
    }

    #[test]
    fn test_neighbor() {
        let axial = AxialCoord::new(-2, 7);
        let cube = CubeCoord::from(axial);
        for dir in Direction::iter() {
            assert_eq!(
                CubeCoord::from(axial.neighbor(dir)),
                cube.neighbor(dir),
                "axial neighbor disagrees with cube in direction {:?}",
                dir
            );
        }
        assert_eq!(axial.neighbors().count(), 6);
    }

    #[test]
    fn test_distance_to() {
        let a = AxialCoord::new(0, 0);
        let b = AxialCoord::new(3, -1);
        let c = AxialCoord::new(-2, 4);
        assert_eq!(a.distance_to(a), 0);
        assert_eq!(a.distance_to(b), 3);
        assert_eq!(a.distance_to(c), 4);
        assert_eq!(b.distance_to(c), 5);
        assert_eq!(
            b.distance_to(c),
            CubeCoord::from(b).distance_to(CubeCoord::from(c))
        );
    }

    #[test]
    fn test_set() {
        let mut axial = AxialCoord::ORIGIN;
        axial.set(4, -2);
        assert_eq!(axial, AxialCoord::new(4, -2));
    }
}
