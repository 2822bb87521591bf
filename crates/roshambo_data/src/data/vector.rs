use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// A 2D vector.
///
/// Read-only apart from [`Vector2::accumulate`], which is only used to
/// build a running force sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn from_components(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from a signed radius and an angle in radians.
    ///
    /// A negative radius points opposite to `theta`.
    #[must_use]
    pub fn from_polar(radius: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: radius * cos,
            y: radius * sin,
        }
    }

    pub fn accumulate(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.accumulate(rhs);
    }
}
