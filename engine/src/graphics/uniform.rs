//! GPU buffer types
//!
//! Provides buffer structures that match the WGSL shader definitions in
//! `rect.wgsl`. These structures are used to pass data from the CPU to the GPU.

use crate::graphics::shape::RectangleShape;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Screen uniform buffer data
///
/// Maps display units (origin top-left, Y down) onto clip space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ScreenUniform {
    pub projection: [[f32; 4]; 4],
}

impl ScreenUniform {
    /// Create a projection covering a `display_size` logical display
    pub fn new(display_size: Vec2) -> Self {
        let projection =
            Mat4::orthographic_rh(0.0, display_size.x, display_size.y, 0.0, -1.0, 1.0);
        Self {
            projection: projection.to_cols_array_2d(),
        }
    }
}

/// Corner of the unit quad every rectangle is stretched from
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
}

impl QuadVertex {
    pub const QUAD: [QuadVertex; 4] = [
        QuadVertex { corner: [0.0, 0.0] },
        QuadVertex { corner: [1.0, 0.0] },
        QuadVertex { corner: [1.0, 1.0] },
        QuadVertex { corner: [0.0, 1.0] },
    ];
    pub const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    /// Get the vertex attribute layout for wgpu
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-rectangle instance data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub origin: [f32; 2],
    /// Radians, counter-clockwise on screen
    pub rotation: f32,
    pub _padding: f32,
    pub color: [f32; 4],
}

impl RectInstance {
    /// Get the instance attribute layout for wgpu
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &RECT_INSTANCE_ATTRIBUTES,
        }
    }
}

// Color skips the padding float after rotation
const RECT_INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 5] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 8,
        shader_location: 2,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 16,
        shader_location: 3,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 24,
        shader_location: 4,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 32,
        shader_location: 5,
    },
];

impl From<&RectangleShape> for RectInstance {
    fn from(shape: &RectangleShape) -> Self {
        Self {
            position: shape.position().to_array(),
            size: shape.size().to_array(),
            origin: shape.origin().to_array(),
            rotation: shape.rotation().to_radians(),
            _padding: 0.0,
            color: shape.fill_color().to_array(),
        }
    }
}

/// Helper trait for creating GPU buffers from uniform types
pub trait UniformBuffer: Pod {
    /// Create a GPU buffer containing this uniform data
    fn create_buffer(&self, device: &wgpu::Device, label: Option<&str>) -> wgpu::Buffer {
        use wgpu::util::DeviceExt;

        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label,
            contents: bytemuck::cast_slice(&[*self]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }
}

impl UniformBuffer for ScreenUniform {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::shape::Color;
    use glam::Vec4;

    #[test]
    fn test_screen_uniform_size() {
        // 16 floats * 4 bytes
        assert_eq!(std::mem::size_of::<ScreenUniform>(), 64);
    }

    #[test]
    fn test_rect_instance_layout() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 48);
        assert_eq!(std::mem::offset_of!(RectInstance, rotation), 24);
        assert_eq!(
            std::mem::offset_of!(RectInstance, color) as u64,
            RECT_INSTANCE_ATTRIBUTES[4].offset
        );
    }

    #[test]
    fn test_projection_maps_display_corners() {
        let uniform = ScreenUniform::new(Vec2::new(800.0, 600.0));
        let projection = Mat4::from_cols_array_2d(&uniform.projection);

        let top_left = projection * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let bottom_right = projection * Vec4::new(800.0, 600.0, 0.0, 1.0);

        assert!((top_left.x + 1.0).abs() < 1e-5 && (top_left.y - 1.0).abs() < 1e-5);
        assert!((bottom_right.x - 1.0).abs() < 1e-5 && (bottom_right.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_instance_from_shape() {
        let mut shape = RectangleShape::centered(Vec2::new(10.0, 20.0), Vec2::new(50.0, 50.0))
            .with_fill_color(Color::rgb(1.0, 0.5, 0.0));
        shape.set_rotation(180.0);

        let instance = RectInstance::from(&shape);
        assert_eq!(instance.position, [10.0, 20.0]);
        assert_eq!(instance.origin, [25.0, 25.0]);
        assert!((instance.rotation - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(instance.color, [1.0, 0.5, 0.0, 1.0]);
    }
}
