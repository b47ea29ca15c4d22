//! The running simulation: physics world, scene and clock in one place
//!
//! Everything the frame loop mutates lives here, so several independent
//! simulations can exist side by side (tests build two and compare them).

use crate::config::{PhysicsConfig, SceneConfig};
use crate::core::coordinates::CoordinateMapper;
use crate::core::entity::Scene;
use crate::error::Result;
use crate::graphics::RectangleShape;
use crate::physics::{physics_update_system, PhysicsAccumulator, PhysicsWorld, StepPlan};
use tracing::info;

pub struct Simulation {
    physics: PhysicsWorld,
    scene: Scene,
    mapper: CoordinateMapper,
    accumulator: PhysicsAccumulator,
    frames: u64,
}

impl Simulation {
    /// Create the physics world and build the scene into it
    pub fn new(scene_config: &SceneConfig, physics_config: &PhysicsConfig) -> Result<Self> {
        let mapper = CoordinateMapper::new(
            physics_config.pixels_per_unit,
            scene_config.display_size.y,
        )?;
        let mut physics = PhysicsWorld::new(physics_config.gravity);
        let scene = crate::scene::build_scene(&mut physics, &mapper, scene_config)?;

        info!(
            entities = scene.len(),
            timestep = ?physics_config.timestep,
            "Simulation ready"
        );

        Ok(Self {
            physics,
            scene,
            mapper,
            accumulator: PhysicsAccumulator::new(physics_config.timestep),
            frames: 0,
        })
    }

    /// Advance by one rendered frame that took `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) -> StepPlan {
        self.frames += 1;
        physics_update_system(
            &mut self.physics,
            &mut self.scene,
            &self.mapper,
            &mut self.accumulator,
            delta_time,
        )
    }

    /// Shapes in draw order
    pub fn shapes(&self) -> impl Iterator<Item = RectangleShape> + '_ {
        self.scene.shapes()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Number of `update` calls so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
