//! Brush and tile rotation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::ROTATION_STEP;

/// Direction of a single rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// A rotation in whole degrees, always normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rotation(u16);

impl Rotation {
    /// No rotation.
    pub const ZERO: Rotation = Rotation(0);

    /// Creates a rotation from any angle in degrees, normalizing it.
    pub fn from_degrees(degrees: i32) -> Self {
        Self(degrees.rem_euclid(360) as u16)
    }

    /// The rotation in degrees, within `[0, 360)`.
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Returns this rotation advanced by one step in `direction`.
    pub fn rotated(self, direction: RotationDirection) -> Self {
        let step = i32::from(ROTATION_STEP);
        let delta = match direction {
            RotationDirection::Clockwise => step,
            RotationDirection::CounterClockwise => -step,
        };
        Self::from_degrees(i32::from(self.0) + delta)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
