//! Mapping between hex space and pixel space.
//!
//! ## Pixel Space
//!
//! Pixel space is plain continuous 2D space, with the x axis pointing right
//! and the y axis pointing **down** (like most screen coordinate systems). The
//! center of the origin hex sits at [LayoutConfig::origin].
//!
//! ## Orientations
//!
//! Hexes can be drawn two ways:
//!
//! - [Orientation::Pointy] (AKA "R" layout): a corner points straight up.
//!   Hexes line up in horizontal rows. Goes with the row-shifted offset
//!   encodings ([OddR](crate::OddR), [EvenR](crate::EvenR)).
//! - [Orientation::Flat] (AKA "Q" layout): a side faces straight up. Hexes
//!   line up in vertical columns. Goes with the column-shifted offset
//!   encodings ([OddQ](crate::OddQ), [EvenQ](crate::EvenQ)).
//!
//! In both cases hexes are regular, and their size is measured as the
//! distance from the center to any corner.
//!
//! ## Calculation
//!
//! Converting a hex to pixels is a linear transform of its axial `(q, r)`
//! components, so we represent each orientation as a 2x2 matrix. Going the
//! other way uses the inverse matrix, which gives a fractional hex that then
//! gets rounded to the nearest whole hex (see [FractionalCube::round]).

mod config;
mod hexagon;
mod unit;

pub use self::{config::*, hexagon::*, unit::*};

use crate::hex::{
    CubeCoord, FractionalCube, OffsetAxis, OffsetCoord, OffsetEncoding,
};
use anyhow::bail;
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{EnumIter, EnumString};
use validator::Validate;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way hexes are turned when drawn in pixel space. See the module-level
/// docs for more info.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Corner facing up, AKA "R" layout
    #[strum(serialize = "pointy", serialize = "r")]
    Pointy,
    /// Side facing up, AKA "Q" layout
    #[strum(serialize = "flat", serialize = "q")]
    Flat,
}

impl Orientation {
    /// The orientation that an offset encoding is meant to be drawn with
    pub fn of_axis(axis: OffsetAxis) -> Self {
        match axis {
            OffsetAxis::Row => Self::Pointy,
            OffsetAxis::Column => Self::Flat,
        }
    }

    /// Distance between the left-most and right-most points of a hex
    pub fn width(self, size: f64) -> f64 {
        match self {
            Self::Pointy => SQRT_3 * size,
            Self::Flat => 2.0 * size,
        }
    }

    /// Distance between the top-most and bottom-most points of a hex
    pub fn height(self, size: f64) -> f64 {
        match self {
            Self::Pointy => 2.0 * size,
            Self::Flat => SQRT_3 * size,
        }
    }

    /// Horizontal distance between the centers of two neighboring hexes
    pub fn horizontal_spacing(self, size: f64) -> f64 {
        match self {
            Self::Pointy => SQRT_3 * size,
            Self::Flat => 1.5 * size,
        }
    }

    /// Vertical distance between the centers of two neighboring hexes
    pub fn vertical_spacing(self, size: f64) -> f64 {
        match self {
            Self::Pointy => 1.5 * size,
            Self::Flat => SQRT_3 * size,
        }
    }

    /// Angle from a hex's center to one of its corners, in radians. Pointy
    /// hexes start at 30°, flat hexes start at 0°, and both go around in 60°
    /// steps.
    fn corner_angle(self, index: usize) -> f64 {
        let phase = match self {
            Self::Pointy => 0.5,
            Self::Flat => 0.0,
        };
        PI / 3.0 * (index as f64 + phase)
    }

    /// Get the position of one corner of a hex, relative to its center.
    /// Returns an error if the index isn't in `[0, 6)`.
    pub fn corner_offset(
        self,
        size: f64,
        index: usize,
    ) -> anyhow::Result<Point2> {
        if index >= 6 {
            bail!("Invalid corner index {}; must be in [0, 6)", index);
        }
        let (sin, cos) = self.corner_angle(index).sin_cos();
        Ok(Point2::new(size * cos, size * sin))
    }

    /// Get the positions of all 6 corners of a hex, relative to its center
    pub fn corner_offsets(self, size: f64) -> [Point2; 6] {
        let mut corners = [Point2::ORIGIN; 6];
        for (index, corner) in corners.iter_mut().enumerate() {
            let (sin, cos) = self.corner_angle(index).sin_cos();
            corner.set(size * cos, size * sin);
        }
        corners
    }

    /// Matrix that maps axial `(q, r)` onto pixels, for a hex of size 1
    fn forward_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5),
            Self::Flat => Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3),
        }
    }

    /// Inverse of [Self::forward_matrix]. Written out by hand so the
    /// coefficients are exact, rather than whatever a numeric inversion
    /// spits out.
    fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::Flat => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
        }
    }

    /// Convert a hex to the pixel position of its center, assuming the origin
    /// hex is centered at `(0, 0)`
    pub fn hex_to_pixel(self, hex: CubeCoord, size: f64) -> Point2 {
        let axial = Vector2::new(f64::from(hex.x()), f64::from(hex.z()));
        (self.forward_matrix() * axial * size).into()
    }

    /// Convert a pixel position to a point in continuous hex space, assuming
    /// the origin hex is centered at `(0, 0)`
    pub fn pixel_to_fractional(
        self,
        point: Point2,
        size: f64,
    ) -> FractionalCube {
        let pixel = Vector2::new(point.x, point.y);
        let axial = self.inverse_matrix() * pixel / size;
        let (q, r) = (axial.x, axial.y);
        FractionalCube::new(q, -q - r, r)
    }

    /// Convert a pixel position to the hex that contains it, assuming the
    /// origin hex is centered at `(0, 0)`
    pub fn pixel_to_hex(self, point: Point2, size: f64) -> CubeCoord {
        self.pixel_to_fractional(point, size).round()
    }
}

/// Get the pixel position of the center of an offset hex, assuming the
/// origin hex is centered at `(0, 0)`. Row-shifted encodings are laid out as
/// pointy hexes, column-shifted encodings as flat hexes. This always agrees
/// with [Orientation::hex_to_pixel] for the matching orientation.
pub fn offset_center<E: OffsetEncoding>(
    offset: OffsetCoord<E>,
    size: f64,
) -> Point2 {
    let col = f64::from(offset.col);
    let row = f64::from(offset.row);
    let shift = E::SHIFT * offset.parity() as f64;
    match E::AXIS {
        OffsetAxis::Row => {
            Point2::new(SQRT_3 * size * (col + shift), 1.5 * size * row)
        }
        OffsetAxis::Column => {
            Point2::new(1.5 * size * col, SQRT_3 * size * (row + shift))
        }
    }
}

/// A layout places a hex grid into pixel space, according to a
/// [LayoutConfig]. Layouts are immutable; if you need a different config,
/// just make a new layout, they're very cheap.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    config: LayoutConfig,
}

impl Layout {
    /// Initialize a new layout with the given options. Returns an error if
    /// the config is invalid.
    pub fn new(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        debug!(
            "Created {:?} layout with size {} at {}",
            config.orientation, config.size, config.origin
        );
        Ok(Self { config })
    }

    /// Get a reference to the config that this layout uses
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn size(&self) -> f64 {
        self.config.size
    }

    /// Width of a single hex in this layout
    pub fn hex_width(&self) -> f64 {
        self.orientation().width(self.size())
    }

    /// Height of a single hex in this layout
    pub fn hex_height(&self) -> f64 {
        self.orientation().height(self.size())
    }

    /// Horizontal distance between neighboring hex centers in this layout
    pub fn horizontal_spacing(&self) -> f64 {
        self.orientation().horizontal_spacing(self.size())
    }

    /// Vertical distance between neighboring hex centers in this layout
    pub fn vertical_spacing(&self) -> f64 {
        self.orientation().vertical_spacing(self.size())
    }

    /// Get the pixel position of the center of a hex. Accepts any coordinate
    /// type that converts to cube coordinates.
    pub fn hex_to_pixel(&self, hex: impl Into<CubeCoord>) -> Point2 {
        self.config.origin
            + self.orientation().hex_to_pixel(hex.into(), self.size())
    }

    /// Convert a pixel position to a point in continuous hex space. Useful if
    /// you need to know where inside a hex a point falls.
    pub fn pixel_to_fractional(&self, point: Point2) -> FractionalCube {
        self.orientation()
            .pixel_to_fractional(point - self.config.origin, self.size())
    }

    /// Get the hex that contains the given pixel position
    pub fn pixel_to_hex(&self, point: Point2) -> CubeCoord {
        self.pixel_to_fractional(point).round()
    }

    /// Get the drawable geometry for a hex in this layout
    pub fn hexagon(&self, hex: impl Into<CubeCoord>) -> Hexagon {
        Hexagon::new(self.size(), self.hex_to_pixel(hex), self.orientation())
    }
}
