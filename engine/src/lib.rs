//! Falling boxes engine
//!
//! This crate glues a rapier2d physics world to a small wgpu rectangle
//! renderer: a row of spinning boxes falls inside a walled 800×600 display.
//! The simulation half (`core`, `physics`, `scene`, `simulation`) runs
//! headlessly; `app`, `graphics` and `windowing` add the window and GPU.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod graphics;
pub mod physics;
pub mod scene;
pub mod shaders;
pub mod simulation;
pub mod windowing;

// Re-export commonly used types
pub mod prelude {
    // Scene types
    pub use crate::core::coordinates::CoordinateMapper;
    pub use crate::core::entity::{Entity, PhysicsBody, Scene};

    // Math types
    pub use glam::Vec2;

    // Graphics types
    pub use crate::graphics::{Color, RectangleShape, RenderContext, Renderer};

    // Config types
    pub use crate::config::{DemoConfig, PhysicsConfig, SceneConfig};

    // App types
    pub use crate::app::{run, DemoApp, DemoBuilder, LoopState};
    pub use crate::simulation::Simulation;

    // Physics types
    pub use crate::physics::{BodyKind, BodyMaterial, PhysicsWorld, StepPlan, TimestepMode};

    pub use crate::error::{EngineError, Result};

    pub use wgpu;
    pub use winit;
}

/// Initialize logging for the engine
///
/// `RUST_LOG` wins over `filter`. Calling this more than once is harmless.
pub fn init_logging(filter: Option<&str>) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        filter
            .unwrap_or("info,wgpu_core=warn,wgpu_hal=warn,naga=warn")
            .into()
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
