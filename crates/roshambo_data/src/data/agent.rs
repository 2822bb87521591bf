use super::kind::AgentType;
use super::vector::Vector2;
use serde::{Deserialize, Serialize};

/// World position of an agent's center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the ray from `self` toward `other`.
    #[must_use]
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Axis-aligned hit box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Strict intersection: boxes that only share an edge do not overlap.
    #[must_use]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// A single Rock, Paper or Scissors on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub kind: AgentType,
    pub position: Position,
    /// Half-size of the square hit box.
    pub extent: f64,
    /// Direction of the last move, in radians.
    #[serde(default)]
    pub heading: f64,
}

impl Agent {
    #[must_use]
    pub fn new(kind: AgentType, x: f64, y: f64, extent: f64) -> Self {
        Self {
            kind,
            position: Position::new(x, y),
            extent,
            heading: 0.0,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.position.x - self.extent,
            top: self.position.y - self.extent,
            right: self.position.x + self.extent,
            bottom: self.position.y + self.extent,
        }
    }

    #[must_use]
    pub fn overlaps(&self, other: &Agent) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    #[must_use]
    pub fn distance_to(&self, other: &Agent) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// Inverse-square pull of `other` on `self`.
    ///
    /// A positive `weight` points toward `other`, a negative one away from it.
    /// Coincident agents contribute nothing.
    #[must_use]
    pub fn influence_from(&self, other: &Agent, weight: f64) -> Vector2 {
        let d = self.distance_to(other);
        if d == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::from_polar(weight / (d * d), self.position.angle_to(&other.position))
    }

    /// Same agent at a new position, facing `heading`.
    #[must_use]
    pub fn moved_to(&self, position: Position, heading: f64) -> Self {
        Self {
            position,
            heading,
            ..*self
        }
    }

    /// A fresh agent of `kind` taking this agent's place.
    #[must_use]
    pub fn converted_to(&self, kind: AgentType) -> Self {
        Self::new(kind, self.position.x, self.position.y, self.extent)
    }
}
