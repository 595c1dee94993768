//! Offset coordinates. Each of the four encodings is a marker type, and the
//! encoding is baked into the coordinate type so that two encodings can never
//! be confused with each other. See the parent module docs for more info.

use crate::hex::{AxialCoord, CubeCoord, Direction};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    marker::PhantomData,
};

/// Which lines of an offset grid get shoved over by half a hex
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OffsetAxis {
    /// Every other row is shifted horizontally. Used for pointy-top hexes.
    Row,
    /// Every other column is shifted vertically. Used for flat-top hexes.
    Column,
}

/// One of the four ways to map `(col, row)` onto a hex grid. Implementors are
/// all zero-sized markers; the interesting stuff is in the associated items.
pub trait OffsetEncoding:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Hash
{
    /// Human-readable name, e.g. `"odd-r"`
    const NAME: &'static str;

    /// Which lines get shifted
    const AXIS: OffsetAxis;

    /// How far the shifted lines are moved, as a fraction of the hex spacing.
    /// Positive for the odd encodings, negative for the even ones.
    const SHIFT: f64;

    /// `(col, row)` offsets to each neighbor, indexed first by
    /// [parity](Self::parity), then by [Direction::index].
    const NEIGHBORS: [[(i32, i32); 6]; 2];

    /// Parity of the shifted axis, 0 or 1. This picks which neighbor table
    /// applies to a hex.
    fn parity(col: i32, row: i32) -> usize {
        match Self::AXIS {
            OffsetAxis::Row => (row & 1) as usize,
            OffsetAxis::Column => (col & 1) as usize,
        }
    }

    fn from_cube(cube: CubeCoord) -> (i32, i32);

    fn to_cube(col: i32, row: i32) -> CubeCoord;

    /// Number of steps between two hexes, computed directly from offset
    /// components. Each implementation recovers the missing cube axis from
    /// `(col, row)`, then plugs everything into the cube distance formula.
    fn distance(a: (i32, i32), b: (i32, i32)) -> u32;
}

/// Odd rows are shifted right by half a hex (pointy-top)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OddR;

/// Even rows are shifted right by half a hex (pointy-top)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvenR;

/// Odd columns are shifted down by half a hex (flat-top)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OddQ;

/// Even columns are shifted down by half a hex (flat-top)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvenQ;

// In all of these, (n & 1) is 0 or 1 even for negative n, and the numerators
// being halved are always even, so the division is exact.

impl OffsetEncoding for OddR {
    const NAME: &'static str = "odd-r";
    const AXIS: OffsetAxis = OffsetAxis::Row;
    const SHIFT: f64 = 0.5;
    const NEIGHBORS: [[(i32, i32); 6]; 2] = [
        [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
        [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)],
    ];

    fn from_cube(cube: CubeCoord) -> (i32, i32) {
        let (x, z) = (cube.x(), cube.z());
        (x + (z - (z & 1)) / 2, z)
    }

    fn to_cube(col: i32, row: i32) -> CubeCoord {
        CubeCoord::new_xz(col - (row - (row & 1)) / 2, row)
    }

    fn distance(a: (i32, i32), b: (i32, i32)) -> u32 {
        let x1 = a.0 - (a.1 - (a.1 & 1)) / 2;
        let x2 = b.0 - (b.1 - (b.1 & 1)) / 2;
        ((x1 - x2).abs() + (-x1 - a.1 + x2 + b.1).abs() + (a.1 - b.1).abs())
            as u32
            / 2
    }
}

impl OffsetEncoding for EvenR {
    const NAME: &'static str = "even-r";
    const AXIS: OffsetAxis = OffsetAxis::Row;
    const SHIFT: f64 = -0.5;
    const NEIGHBORS: [[(i32, i32); 6]; 2] = [
        [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)],
        [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
    ];

    fn from_cube(cube: CubeCoord) -> (i32, i32) {
        let (x, z) = (cube.x(), cube.z());
        (x + (z + (z & 1)) / 2, z)
    }

    fn to_cube(col: i32, row: i32) -> CubeCoord {
        CubeCoord::new_xz(col - (row + (row & 1)) / 2, row)
    }

    fn distance(a: (i32, i32), b: (i32, i32)) -> u32 {
        let x1 = a.0 - (a.1 + (a.1 & 1)) / 2;
        let x2 = b.0 - (b.1 + (b.1 & 1)) / 2;
        ((x1 - x2).abs() + (-x1 - a.1 + x2 + b.1).abs() + (a.1 - b.1).abs())
            as u32
            / 2
    }
}

impl OffsetEncoding for OddQ {
    const NAME: &'static str = "odd-q";
    const AXIS: OffsetAxis = OffsetAxis::Column;
    const SHIFT: f64 = 0.5;
    const NEIGHBORS: [[(i32, i32); 6]; 2] = [
        [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)],
        [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)],
    ];

    fn from_cube(cube: CubeCoord) -> (i32, i32) {
        let (x, z) = (cube.x(), cube.z());
        (x, z + (x - (x & 1)) / 2)
    }

    fn to_cube(col: i32, row: i32) -> CubeCoord {
        CubeCoord::new_xz(col, row - (col - (col & 1)) / 2)
    }

    fn distance(a: (i32, i32), b: (i32, i32)) -> u32 {
        let z1 = a.1 - (a.0 - (a.0 & 1)) / 2;
        let z2 = b.1 - (b.0 - (b.0 & 1)) / 2;
        ((a.0 - b.0).abs() + (-a.0 - z1 + b.0 + z2).abs() + (z1 - z2).abs())
            as u32
            / 2
    }
}

impl OffsetEncoding for EvenQ {
    const NAME: &'static str = "even-q";
    const AXIS: OffsetAxis = OffsetAxis::Column;
    const SHIFT: f64 = -0.5;
    const NEIGHBORS: [[(i32, i32); 6]; 2] = [
        [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)],
        [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)],
    ];

    fn from_cube(cube: CubeCoord) -> (i32, i32) {
        let (x, z) = (cube.x(), cube.z());
        (x, z + (x + (x & 1)) / 2)
    }

    fn to_cube(col: i32, row: i32) -> CubeCoord {
        CubeCoord::new_xz(col, row - (col + (col & 1)) / 2)
    }

    fn distance(a: (i32, i32), b: (i32, i32)) -> u32 {
        let z1 = a.1 - (a.0 + (a.0 & 1)) / 2;
        let z2 = b.1 - (b.0 + (b.0 & 1)) / 2;
        ((a.0 - b.0).abs() + (-a.0 - z1 + b.0 + z2).abs() + (z1 - z2).abs())
            as u32
            / 2
    }
}

/// A hex in one of the offset coordinate systems. The type parameter decides
/// which one, e.g. `OffsetCoord<OddR>`. Use the aliases ([OddRCoord] and
/// friends) for brevity.
///
/// Serializes as `{col, row}`; the encoding is **not** included in the
/// serialized form, so make sure to deserialize into the same type you
/// serialized from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct OffsetCoord<E: OffsetEncoding> {
    pub col: i32,
    pub row: i32,
    #[serde(skip)]
    encoding: PhantomData<E>,
}

pub type OddRCoord = OffsetCoord<OddR>;
pub type EvenRCoord = OffsetCoord<EvenR>;
pub type OddQCoord = OffsetCoord<OddQ>;
pub type EvenQCoord = OffsetCoord<EvenQ>;

impl<E: OffsetEncoding> OffsetCoord<E> {
    pub const fn new(col: i32, row: i32) -> Self {
        Self {
            col,
            row,
            encoding: PhantomData,
        }
    }

    pub fn set(&mut self, col: i32, row: i32) -> &mut Self {
        self.col = col;
        self.row = row;
        self
    }

    /// Parity of the shifted axis (row for r encodings, column for q
    /// encodings)
    pub fn parity(&self) -> usize {
        E::parity(self.col, self.row)
    }

    /// Get the coordinate of the hex adjacent to this one in the given
    /// direction. The step depends on the parity of this hex, since offset
    /// grids aren't translation-invariant.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dc, dr) = E::NEIGHBORS[self.parity()][direction.index()];
        Self::new(self.col + dc, self.row + dr)
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction order
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction::iter().map(move |dir| self.neighbor(dir))
    }

    /// Number of steps between this hex and another. Always agrees with
    /// [CubeCoord::distance_to] for the same two hexes.
    pub fn distance_to(self, other: Self) -> u32 {
        E::distance((self.col, self.row), (other.col, other.row))
    }
}

impl<E: OffsetEncoding> Default for OffsetCoord<E> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<E: OffsetEncoding> Display for OffsetCoord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", E::NAME, self.col, self.row)
    }
}

impl<E: OffsetEncoding> From<CubeCoord> for OffsetCoord<E> {
    fn from(cube: CubeCoord) -> Self {
        let (col, row) = E::from_cube(cube);
        Self::new(col, row)
    }
}

impl<E: OffsetEncoding> From<OffsetCoord<E>> for CubeCoord {
    fn from(offset: OffsetCoord<E>) -> Self {
        E::to_cube(offset.col, offset.row)
    }
}

impl<E: OffsetEncoding> From<AxialCoord> for OffsetCoord<E> {
    fn from(axial: AxialCoord) -> Self {
        CubeCoord::from(axial).into()
    }
}

impl<E: OffsetEncoding> From<OffsetCoord<E>> for AxialCoord {
    fn from(offset: OffsetCoord<E>) -> Self {
        CubeCoord::from(offset).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Check that every neighbor in both parity tables lands on the same hex
    /// as stepping in cube space
    fn check_neighbors<E: OffsetEncoding>() {
        for col in -3..=3 {
            for row in -3..=3 {
                let offset = OffsetCoord::<E>::new(col, row);
                let cube = CubeCoord::from(offset);
                for dir in Direction::iter() {
                    assert_eq!(
                        CubeCoord::from(offset.neighbor(dir)),
                        cube.neighbor(dir),
                        "{} neighbor of {} in direction {:?} is wrong",
                        E::NAME,
                        offset,
                        dir
                    );
                }
            }
        }
    }

    fn check_round_trip<E: OffsetEncoding>() {
        for x in -10..=10 {
            for z in -10..=10 {
                let cube = CubeCoord::new_xz(x, z);
                let offset = OffsetCoord::<E>::from(cube);
                assert_eq!(CubeCoord::from(offset), cube, "{}", E::NAME);
                // And the other way around
                let offset = OffsetCoord::<E>::new(x, z);
                assert_eq!(
                    OffsetCoord::<E>::from(CubeCoord::from(offset)),
                    offset
                );
            }
        }
    }

    fn check_distance<E: OffsetEncoding>() {
        let origin = OffsetCoord::<E>::new(0, 0);
        for col in -6..=6 {
            for row in -6..=6 {
                let offset = OffsetCoord::<E>::new(col, row);
                let expected =
                    CubeCoord::from(origin).distance_to(offset.into());
                assert_eq!(origin.distance_to(offset), expected, "{}", E::NAME);
                assert_eq!(offset.distance_to(origin), expected, "{}", E::NAME);
            }
        }
    }

    #[test]
    fn test_neighbors() {
        check_neighbors::<OddR>();
        check_neighbors::<EvenR>();
        check_neighbors::<OddQ>();
        check_neighbors::<EvenQ>();
    }

    #[test]
    fn test_round_trip() {
        check_round_trip::<OddR>();
        check_round_trip::<EvenR>();
        check_round_trip::<OddQ>();
        check_round_trip::<EvenQ>();
    }

    #[test]
    fn test_distance() {
        check_distance::<OddR>();
        check_distance::<EvenR>();
        check_distance::<OddQ>();
        check_distance::<EvenQ>();
    }

    #[test]
    fn test_odd_r_round_trip() {
        let cube = CubeCoord::from(OddRCoord::new(2, 3));
        assert_eq!(cube, CubeCoord::new_xz(1, 3));
        assert_eq!(OddRCoord::from(cube), OddRCoord::new(2, 3));
    }

    #[test]
    fn test_encodings_differ() {
        // Same (col, row), different encodings, different hexes
        let cube = CubeCoord::new_xz(1, 1);
        assert_eq!(OddRCoord::from(cube), OddRCoord::new(1, 1));
        assert_eq!(EvenRCoord::from(cube), EvenRCoord::new(2, 1));
        assert_eq!(OddQCoord::from(cube), OddQCoord::new(1, 1));
        assert_eq!(EvenQCoord::from(cube), EvenQCoord::new(1, 2));
    }

    #[test]
    fn test_negative_parity() {
        assert_eq!(OddRCoord::new(0, -1).parity(), 1);
        assert_eq!(OddRCoord::new(0, -2).parity(), 0);
        assert_eq!(OddQCoord::new(-3, 0).parity(), 1);
        assert_eq!(
            CubeCoord::from(OddRCoord::new(0, -1)),
            CubeCoord::new_xz(1, -1)
        );
    }

    #[test]
    fn test_axial_conversion() {
        let axial = AxialCoord::new(-3, 5);
        let offset = EvenQCoord::from(axial);
        assert_eq!(offset, EvenQCoord::new(-3, 4));
        assert_eq!(AxialCoord::from(offset), axial);
    }

    #[test]
    fn test_display() {
        assert_eq!(OddQCoord::new(4, -1).to_string(), "odd-q(4, -1)");
        assert_eq!(EvenRCoord::default().to_string(), "even-r(0, 0)");
    }
}
