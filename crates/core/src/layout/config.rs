use crate::layout::{Orientation, Point2};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines how a hex grid is placed in pixel space. Two
/// layouts built from the same config will always map hexes to the same
/// pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which way the hexes are turned. See [Orientation].
    pub orientation: Orientation,

    /// Distance between the center of a hex and one of its 6 corners, in
    /// pixels. This is also the length of one side of the hex.
    #[validate(range(min = 0.001))]
    pub size: f64,

    /// Pixel position of the center of the hex at the cube origin
    pub origin: Point2,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Pointy,
            size: 1.0,
            origin: Point2::ORIGIN,
        }
    }
}
