//! Physics system using Rapier2D
//!
//! This module owns the rigid-body simulation, the factory for box bodies,
//! the clock that turns frame time into steps, and the system that copies
//! body poses onto scene shapes.

pub mod accumulator;
pub mod factory;
pub mod system;
pub mod world;

// Re-export commonly used types
pub use accumulator::{PhysicsAccumulator, StepPlan, TimestepMode};
pub use factory::create_box;
pub use system::{physics_update_system, sync_shapes};
pub use world::{BodyKind, BodyMaterial, PhysicsWorld, POSITION_ITERATIONS, VELOCITY_ITERATIONS};

// Re-export commonly used Rapier types
pub use rapier2d::prelude::RigidBodyHandle;
