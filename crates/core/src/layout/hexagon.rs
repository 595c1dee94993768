use crate::layout::{Orientation, Point2};
use log::trace;
use serde::{Deserialize, Serialize};

/// Drawable geometry for a single hex: where it is, how big it is, and where
/// its corners are. The corner offsets and dimensions are derived from the
/// size and orientation, and are kept up to date whenever either of those
/// changes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    size: f64,
    width: f64,
    height: f64,
    center: Point2,
    orientation: Orientation,
    /// Relative to the center
    corners: [Point2; 6],
}

impl Hexagon {
    pub fn new(size: f64, center: Point2, orientation: Orientation) -> Self {
        let mut hexagon = Self {
            size,
            width: 0.0,
            height: 0.0,
            center,
            orientation,
            corners: [Point2::ORIGIN; 6],
        };
        hexagon.recompute();
        hexagon
    }

    fn recompute(&mut self) {
        trace!(
            "Computing {:?} hexagon geometry for size {}",
            self.orientation,
            self.size
        );
        self.width = self.orientation.width(self.size);
        self.height = self.orientation.height(self.size);
        self.corners = self.orientation.corner_offsets(self.size);
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the size of this hexagon. Corners and dimensions are updated to
    /// match.
    pub fn set_size(&mut self, size: f64) -> &mut Self {
        self.size = size;
        self.recompute();
        self
    }

    /// Move this hexagon. Corners are stored relative to the center, so
    /// nothing else needs to change.
    pub fn set_center(&mut self, center: Point2) -> &mut Self {
        self.center = center;
        self
    }

    /// Turn this hexagon. Corners and dimensions are updated to match.
    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self.recompute();
        self
    }

    /// Get one corner, relative to the center. Returns an error if the index
    /// isn't in `[0, 6)`.
    pub fn corner(&self, index: usize) -> anyhow::Result<Point2> {
        self.corners.get(index).copied().ok_or_else(|| {
            anyhow::anyhow!("Invalid corner index {}; must be in [0, 6)", index)
        })
    }

    /// All 6 corners, relative to the center
    pub fn corners(&self) -> &[Point2; 6] {
        &self.corners
    }

    /// All 6 corners, in absolute pixel space. This is what you want for
    /// drawing a polygon.
    pub fn vertices(&self) -> impl Iterator<Item = Point2> + '_ {
        self.corners.iter().map(move |corner| self.center + *corner)
    }
}
