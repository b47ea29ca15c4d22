//! Display and simulation coordinate spaces
//!
//! The renderer works in display units: pixels, origin in the top-left
//! corner, Y growing downwards. The physics world works in simulation units:
//! `pixels_per_unit` display units make one simulation unit and Y grows
//! upwards. Everything here is a pure numeric transform.


use crate::error::{EngineError, Result};
use glam::Vec2;

/// Display units per simulation unit used by the demo scene
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 30.0;

/// Scale a display-space vector into simulation units. No axis flip.
#[inline]
pub fn to_sim_units(p: Vec2, pixels_per_unit: f32) -> Vec2 {
    p / pixels_per_unit
}

/// Scale a simulation-space vector into display units. Inverse of [`to_sim_units`].
#[inline]
pub fn to_display_units(p: Vec2, pixels_per_unit: f32) -> Vec2 {
    p * pixels_per_unit
}

/// Mirror a point across the horizontal center line of a display `height` tall.
///
/// Converts between the Y-up and Y-down conventions and is its own inverse.
#[inline]
pub fn invert_vertical_axis(p: Vec2, height: f32) -> Vec2 {
    Vec2::new(p.x, height - p.y)
}

/// Bundles the scale and display height needed to move points between spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pixels_per_unit: f32,
    display_height: f32,
}

impl CoordinateMapper {
    /// Create a mapper, rejecting scales and heights that are not positive
    pub fn new(pixels_per_unit: f32, display_height: f32) -> Result<Self> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "pixels per unit must be positive, got {pixels_per_unit}"
            )));
        }
        if !(display_height.is_finite() && display_height > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "display height must be positive, got {display_height}"
            )));
        }
        Ok(Self {
            pixels_per_unit,
            display_height,
        })
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn display_height(&self) -> f32 {
        self.display_height
    }

    pub fn to_sim_units(&self, p: Vec2) -> Vec2 {
        to_sim_units(p, self.pixels_per_unit)
    }

    pub fn to_display_units(&self, p: Vec2) -> Vec2 {
        to_display_units(p, self.pixels_per_unit)
    }

    pub fn invert_vertical_axis(&self, p: Vec2) -> Vec2 {
        invert_vertical_axis(p, self.display_height)
    }

    /// Map a display-space point (Y down) to a simulation-space point (Y up)
    pub fn display_to_sim(&self, p: Vec2) -> Vec2 {
        self.to_sim_units(self.invert_vertical_axis(p))
    }

    /// Map a simulation-space point (Y up) to a display-space point (Y down)
    pub fn sim_to_display(&self, p: Vec2) -> Vec2 {
        self.invert_vertical_axis(self.to_display_units(p))
    }
}
