//! This module holds the coordinate types for hexagon grids, plus the
//! algorithms that operate on them.
//!
//! ## Coordinate Systems
//!
//! There are several competing ways to address a hex in a grid. All of them
//! are supported here, as distinct types, with `From` conversions between
//! them. The descriptions on [redblobgames](https://www.redblobgames.com/grids/hexagons/#coordinates)
//! are much better than anything I can write here, but here's the TL;DR.
//!
//! ### Cube Coordinates
//!
//! Each coordinate has three components (`x`, `y`, and `z`). **For any hex,
//! all three components are integers and `x + y + z = 0`.** Hexes on a flat
//! grid only need two dimensions, but the third makes the math much simpler:
//! distance, rotation and rounding are all symmetric across the three axes.
//! This is the "native" system of this crate; every region algorithm works in
//! cube space. See [CubeCoord].
//!
//! ### Axial Coordinates
//!
//! Axial coordinates are cube coordinates with the redundant third axis
//! dropped: `q = x` and `r = z`, and `y` can always be recovered as `-q - r`.
//! See [AxialCoord].
//!
//! ### Offset Coordinates
//!
//! Offset coordinates are the "obvious" `(col, row)` addressing you'd use for
//! a rectangular map, where every other row (or column) is shoved over by half
//! a hex. There are four variants, depending on which axis gets shoved and
//! whether the odd or the even lines get shoved:
//!
//! - [OddR]: odd rows shifted right (pointy-top hexes)
//! - [EvenR]: even rows shifted right (pointy-top hexes)
//! - [OddQ]: odd columns shifted down (flat-top hexes)
//! - [EvenQ]: even columns shifted down (flat-top hexes)
//!
//! **Each encoding is a different bijection with cube space.** Converting
//! through the wrong one won't fail, it'll silently give you a different (but
//! still valid) hex. To keep that from happening the encoding is part of the
//! type, see [OffsetCoord].
//!
//! Offset grids are not translation-invariant: the neighbor offsets of a hex
//! depend on the parity of its row or column. That's why each encoding carries
//! its own pair of neighbor tables.
//!
//! ### Directions
//!
//! A [Direction] is one of the six ways you can step from a hex to one of its
//! neighbors. Directions are ordered counter-clockwise, see the type docs for
//! details.

mod axial;
mod cube;
mod data_structure;
mod direction;
mod offset;
mod region;

pub use self::{
    axial::*, cube::*, data_structure::*, direction::*, offset::*, region::*,
};
