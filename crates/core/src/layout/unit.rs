use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. See [crate::layout] for how pixel space relates
/// to hex space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Straight-line distance from the origin to this point
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Straight-line distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        (other - self).length()
    }
}

impl From<Vector2<f64>> for Point2 {
    fn from(other: Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for Vector2<f64> {
    fn from(other: Point2) -> Self {
        Vector2::new(other.x, other.y)
    }
}
