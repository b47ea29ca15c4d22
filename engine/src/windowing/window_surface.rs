use crate::graphics::RenderContext;
use std::sync::Arc;
use tracing::{debug, info};
use wgpu::{Surface, SurfaceConfiguration};
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// The demo window together with the surface frames are presented to
pub struct WindowSurface {
    pub window: Arc<Window>,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
}

impl WindowSurface {
    /// Configure `surface` for the window's current size
    pub fn new(window: Arc<Window>, surface: Surface<'static>, context: &RenderContext) -> Self {
        let size = window.inner_size();
        let surface_config =
            context.create_surface_configuration(&surface, size.width, size.height);
        surface.configure(&context.device, &surface_config);

        info!(
            window_id = ?window.id(),
            width = surface_config.width,
            height = surface_config.height,
            format = ?surface_config.format,
            "Configured window surface"
        );

        Self {
            window,
            surface,
            surface_config,
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    pub fn resize(&mut self, device: &wgpu::Device, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.surface.configure(device, &self.surface_config);

            debug!(
                width = new_size.width,
                height = new_size.height,
                "Resized window surface"
            );
        }
    }

    /// Configure the surface again after it was lost or became outdated
    pub fn reconfigure(&mut self, device: &wgpu::Device) {
        let size = self.window.inner_size();
        self.resize(device, size);
    }

    pub fn is_minimized(&self) -> bool {
        let size = self.window.inner_size();
        size.width == 0 || size.height == 0
    }
}

impl Drop for WindowSurface {
    fn drop(&mut self) {
        info!(window_id = ?self.window.id(), "Releasing window surface");
    }
}
