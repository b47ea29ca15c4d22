//! Shader management and compilation
//!
//! Provides access to compiled shaders for the rendering pipeline.

/// Instanced rectangle shader for 2D shapes
pub const RECT_SHADER: &str = include_str!("rect.wgsl");
