//! Builds the walls-and-boxes scene
//!
//! Walls are spawned first, then boxes, and that spawn order is also the
//! draw order.

use crate::config::SceneConfig;
use crate::core::coordinates::CoordinateMapper;
use crate::core::entity::{PhysicsBody, Scene};
use crate::error::Result;
use crate::graphics::RectangleShape;
use crate::physics::{create_box, BodyKind, PhysicsWorld};
use glam::Vec2;
use tracing::info;

/// Which display edge a wall runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Placement of one boundary wall in display units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub side: WallSide,
    pub center: Vec2,
    pub size: Vec2,
}

/// Walls spanning each edge of the display, inset by half their thickness
pub fn wall_layout(display_size: Vec2, thickness: f32) -> [Wall; 4] {
    let Vec2 { x: w, y: h } = display_size;
    let inset = thickness * 0.5;
    [
        Wall {
            side: WallSide::Top,
            center: Vec2::new(w * 0.5, inset),
            size: Vec2::new(w, thickness),
        },
        Wall {
            side: WallSide::Bottom,
            center: Vec2::new(w * 0.5, h - inset),
            size: Vec2::new(w, thickness),
        },
        Wall {
            side: WallSide::Left,
            center: Vec2::new(inset, h * 0.5),
            size: Vec2::new(thickness, h),
        },
        Wall {
            side: WallSide::Right,
            center: Vec2::new(w - inset, h * 0.5),
            size: Vec2::new(thickness, h),
        },
    ]
}

/// Centers of the box row: `box_count` boxes evenly spaced, leaving one gap
/// on each side
pub fn box_centers(config: &SceneConfig) -> Result<Vec<Vec2>> {
    config.check_box_row()?;

    let spacing = config.display_size.x / (config.box_count as f32 + 2.0);
    let y = config.display_size.y * config.box_row_ratio;
    Ok((1..=config.box_count)
        .map(|i| Vec2::new(i as f32 * spacing, y))
        .collect())
}

/// Create the walls and the spinning boxes, registering each with the physics world
pub fn build_scene(
    physics: &mut PhysicsWorld,
    mapper: &CoordinateMapper,
    config: &SceneConfig,
) -> Result<Scene> {
    let centers = box_centers(config)?;
    let mut scene = Scene::new();

    for wall in wall_layout(config.display_size, config.wall_thickness) {
        let shape =
            RectangleShape::centered(wall.center, wall.size).with_fill_color(config.wall_color);
        let handle = create_box(physics, mapper, BodyKind::Static, wall.center, wall.size)?;
        scene.spawn(shape, PhysicsBody::new(handle, BodyKind::Static));
    }

    for center in centers {
        let shape =
            RectangleShape::centered(center, config.box_size).with_fill_color(config.box_color);
        let handle = create_box(physics, mapper, BodyKind::Dynamic, center, config.box_size)?;
        physics.apply_angular_impulse(handle, config.spin_impulse, true);
        scene.spawn(shape, PhysicsBody::new(handle, BodyKind::Dynamic));
    }

    info!(walls = 4, boxes = config.box_count, "Scene built");
    Ok(scene)
}
