//! Configuration types for the demo
//!
//! Defaults reproduce the classic falling-boxes scene: an 800x600 display,
//! four walls, ten spinning boxes and 30 pixels per simulation unit.

use crate::core::coordinates::DEFAULT_PIXELS_PER_UNIT;
use crate::error::{EngineError, Result};
use crate::graphics::Color;
use crate::physics::TimestepMode;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Most boxes a scene may hold
pub const MAX_BOX_COUNT: u32 = 10_000;

/// Layout of the scene, in display units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Logical display size the scene is laid out in
    pub display_size: Vec2,
    /// Thickness of each boundary wall
    pub wall_thickness: f32,
    /// Number of falling boxes
    pub box_count: u32,
    /// Full extents of each box
    pub box_size: Vec2,
    /// Vertical position of the box row as a fraction of display height
    pub box_row_ratio: f32,
    /// Angular impulse given to each box at creation
    pub spin_impulse: f32,
    pub wall_color: Color,
    pub box_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            display_size: Vec2::new(800.0, 600.0),
            wall_thickness: 10.0,
            box_count: 10,
            box_size: Vec2::new(50.0, 50.0),
            box_row_ratio: 0.7,
            spin_impulse: 5.0,
            wall_color: Color::WHITE,
            box_color: Color::WHITE,
        }
    }
}

impl SceneConfig {
    /// Check that the box row fits across the display without boxes overlapping
    pub fn check_box_row(&self) -> Result<()> {
        if self.box_count > MAX_BOX_COUNT {
            return Err(invalid(format!(
                "box count must be at most {MAX_BOX_COUNT}, got {}",
                self.box_count
            )));
        }

        let spacing = self.display_size.x / (self.box_count as f32 + 2.0);
        if self.box_count > 0 && self.box_size.x > spacing {
            return Err(invalid(format!(
                "{} boxes of width {} do not fit across a display {} wide",
                self.box_count, self.box_size.x, self.display_size.x
            )));
        }

        Ok(())
    }
}

/// Physics world parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity in simulation units, Y up
    pub gravity: Vec2,
    /// Display units per simulation unit
    pub pixels_per_unit: f32,
    pub timestep: TimestepMode,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -10.0),
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            timestep: TimestepMode::default(),
        }
    }
}

/// Top-level configuration for the demo application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window title
    pub window_title: String,
    /// Initial inner size of the window in logical pixels
    pub window_size: (u32, u32),
    /// Color the frame is cleared to before drawing
    pub clear_color: Color,
    pub scene: SceneConfig,
    pub physics: PhysicsConfig,
    /// Custom logging filter (None = default)
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Falling Boxes".to_string(),
            window_size: (800, 600),
            clear_color: Color::BLACK,
            scene: SceneConfig::default(),
            physics: PhysicsConfig::default(),
            log_filter: None,
        }
    }
}

impl DemoConfig {
    /// Check that every dimension and rate is usable
    pub fn validate(&self) -> Result<()> {
        debug!(config = ?self, "Validating demo config");

        let (width, height) = self.window_size;
        if width == 0 || height == 0 {
            return Err(invalid(format!(
                "window size must be non-zero, got {width}x{height}"
            )));
        }

        let scene = &self.scene;
        if !positive(scene.display_size) {
            return Err(invalid(format!(
                "display size must be positive, got {:?}",
                scene.display_size
            )));
        }
        if !(scene.wall_thickness.is_finite() && scene.wall_thickness > 0.0) {
            return Err(invalid(format!(
                "wall thickness must be positive, got {}",
                scene.wall_thickness
            )));
        }
        if !positive(scene.box_size) {
            return Err(invalid(format!(
                "box size must be positive, got {:?}",
                scene.box_size
            )));
        }
        scene.check_box_row()?;
        if !(0.0..=1.0).contains(&scene.box_row_ratio) {
            return Err(invalid(format!(
                "box row ratio must be within [0, 1], got {}",
                scene.box_row_ratio
            )));
        }

        let physics = &self.physics;
        if !physics.gravity.is_finite() {
            return Err(invalid("gravity must be finite".to_string()));
        }
        if !(physics.pixels_per_unit.is_finite() && physics.pixels_per_unit > 0.0) {
            return Err(invalid(format!(
                "pixels per unit must be positive, got {}",
                physics.pixels_per_unit
            )));
        }
        match physics.timestep {
            TimestepMode::Fixed { step, max_steps } => {
                if !(step.is_finite() && step > 0.0) || max_steps == 0 {
                    return Err(invalid(format!(
                        "fixed timestep needs a positive step and at least one step per frame, got {step}s x {max_steps}"
                    )));
                }
            }
            TimestepMode::Clamped { max_dt } => {
                if !(max_dt.is_finite() && max_dt > 0.0) {
                    return Err(invalid(format!(
                        "clamped timestep needs a positive max_dt, got {max_dt}"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn positive(v: Vec2) -> bool {
    v.is_finite() && v.x > 0.0 && v.y > 0.0
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.window_size, (800, 600));
        assert_eq!(config.clear_color, Color::BLACK);
        assert_eq!(config.scene.display_size, Vec2::new(800.0, 600.0));
        assert_eq!(config.scene.box_count, 10);
        assert_eq!(config.physics.gravity, Vec2::new(0.0, -10.0));
        assert_eq!(config.physics.pixels_per_unit, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "window_title": "Boxes", "scene": { "box_count": 3 } }"#)
                .unwrap();

        assert_eq!(config.window_title, "Boxes");
        assert_eq!(config.scene.box_count, 3);
        assert_eq!(config.scene.wall_thickness, 10.0);
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = DemoConfig {
            window_size: (0, 600),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_box_size() {
        let mut config = DemoConfig::default();
        config.scene.box_size = Vec2::new(50.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_box_count_overflow() {
        let mut config = DemoConfig::default();
        config.scene.box_count = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_crowded_box_row() {
        let mut config = DemoConfig::default();
        // 800 / (20 + 2) is narrower than a 50 wide box
        config.scene.box_count = 20;
        assert!(config.validate().is_err());

        config.scene.box_count = 14;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_timestep() {
        let mut config = DemoConfig::default();
        config.physics.timestep = TimestepMode::Fixed {
            step: 0.0,
            max_steps: 8,
        };
        assert!(config.validate().is_err());

        config.physics.timestep = TimestepMode::Clamped { max_dt: -1.0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut config = DemoConfig::default();
        config.physics.pixels_per_unit = 0.0;
        assert!(config.validate().is_err());
    }
}
