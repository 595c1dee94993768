//! Hexgrid is a library of coordinate math for hexagonal grids. It covers the
//! usual hex coordinate systems (cube, axial, and the four offset encodings),
//! conversions between them, and the common grid algorithms: neighbors,
//! distances, ranges, rings, lines, rotation, and mapping hexes to and from
//! pixels.
//!
//! ```
//! use hexgrid::{CubeCoord, Direction, Layout, LayoutConfig, OddRCoord};
//!
//! let start = CubeCoord::ORIGIN;
//! let end = CubeCoord::new(4, -1, -3).unwrap();
//! assert_eq!(start.distance_to(end), 4);
//! assert_eq!(start.line_to(end).len(), 5);
//!
//! // Coordinate systems convert freely between each other
//! let offset = OddRCoord::from(end.neighbor(Direction::E));
//! assert_eq!(CubeCoord::from(offset), end.neighbor(Direction::E));
//!
//! // Place the grid in pixel space
//! let layout = Layout::new(LayoutConfig::default()).unwrap();
//! let center = layout.hex_to_pixel(end);
//! assert_eq!(layout.pixel_to_hex(center), end);
//! ```
//!
//! See [hex] for a description of the coordinate systems, and [layout] for
//! how hexes get placed in pixel space.

pub mod hex;
pub mod layout;

pub use crate::{
    hex::{
        AxialCoord, CubeCoord, CubeCoordMap, CubeCoordSet, CubeVec,
        Direction, EvenQ, EvenQCoord, EvenR, EvenRCoord, FractionalCube,
        OddQ, OddQCoord, OddR, OddRCoord, OffsetAxis, OffsetCoord,
        OffsetEncoding,
    },
    layout::{Hexagon, Layout, LayoutConfig, Orientation, Point2},
};
