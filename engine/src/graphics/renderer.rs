//! Main renderer implementation
//!
//! The Renderer batches rectangle shapes for one frame and submits them as a
//! single instanced draw. A frame is `clear`, any number of `draw` calls in
//! painter's order, then `present`.

use crate::graphics::{
    context::RenderContext,
    pipeline::RectPipeline,
    shape::{Color, RectangleShape},
    uniform::{QuadVertex, RectInstance, ScreenUniform, UniformBuffer},
};
use glam::Vec2;
use std::sync::Arc;
use tracing::{debug, info};
use wgpu::util::DeviceExt;

const INITIAL_INSTANCE_CAPACITY: usize = 64;

/// Main renderer that manages all rendering operations
pub struct Renderer {
    /// Render context with device and queue
    context: Arc<RenderContext>,
    pipeline: RectPipeline,
    screen_bind_group: wgpu::BindGroup,
    quad_vertex_buffer: wgpu::Buffer,
    quad_index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    /// Number of instances the instance buffer can hold
    instance_capacity: usize,
    /// Shapes queued for the current frame
    pending: Vec<RectInstance>,
    clear_color: Color,
}

impl Renderer {
    /// Create a new renderer drawing a `display_size` logical display into `surface_format` targets
    pub fn new(
        context: Arc<RenderContext>,
        surface_format: wgpu::TextureFormat,
        display_size: Vec2,
    ) -> Self {
        info!(display_size = ?display_size, "Initializing renderer");

        let device = &context.device;
        let pipeline = RectPipeline::new(device, surface_format);

        // The bind group keeps the uniform buffer alive
        let screen_uniform_buffer =
            ScreenUniform::new(display_size).create_buffer(device, Some("Screen Uniform Buffer"));
        let screen_bind_group = pipeline.create_screen_bind_group(device, &screen_uniform_buffer);

        let quad_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&QuadVertex::QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&QuadVertex::INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY);

        Self {
            context,
            pipeline,
            screen_bind_group,
            quad_vertex_buffer,
            quad_index_buffer,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            pending: Vec::with_capacity(INITIAL_INSTANCE_CAPACITY),
            clear_color: Color::BLACK,
        }
    }

    /// Start a new frame filled with `color`, discarding anything queued
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.pending.clear();
    }

    /// Queue a shape; later shapes are drawn over earlier ones
    pub fn draw(&mut self, shape: &RectangleShape) {
        self.pending.push(RectInstance::from(shape));
    }

    /// Render the queued shapes to the surface and show the frame
    pub fn present(&mut self, surface: &wgpu::Surface) -> Result<(), wgpu::SurfaceError> {
        let output = surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.upload_instances();

        let mut encoder = self.context.create_command_encoder(Some("Render Encoder"));
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color.into()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if !self.pending.is_empty() {
                render_pass.set_pipeline(&self.pipeline.pipeline);
                render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.quad_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(
                    0..QuadVertex::INDICES.len() as u32,
                    0,
                    0..self.pending.len() as u32,
                );
            }
        }

        self.context.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Copy queued instances to the GPU, growing the buffer when needed
    fn upload_instances(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        if self.pending.len() > self.instance_capacity {
            let capacity = self.pending.len().next_power_of_two();
            debug!(
                old_capacity = self.instance_capacity,
                new_capacity = capacity,
                "Growing instance buffer"
            );
            self.instance_buffer = create_instance_buffer(&self.context.device, capacity);
            self.instance_capacity = capacity;
        }

        self.context.queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&self.pending),
        );
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: (capacity * std::mem::size_of::<RectInstance>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
