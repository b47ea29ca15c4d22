//! Graphics module
//!
//! Provides the 2D rendering path: the GPU context, the rectangle pipeline,
//! buffer layouts, renderable shapes and the renderer that draws them.

pub mod context;
pub mod pipeline;
pub mod renderer;
pub mod shape;
pub mod uniform;

// Re-export commonly used types
pub use context::RenderContext;
pub use pipeline::RectPipeline;
pub use renderer::Renderer;
pub use shape::{Color, RectangleShape};
pub use uniform::{QuadVertex, RectInstance, ScreenUniform, UniformBuffer};
