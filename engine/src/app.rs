//! Application management for the demo
//!
//! [`DemoApp`] drives the winit event loop. Setup happens on the first
//! `resumed`, and every pass through `about_to_wait` advances the simulation
//! and renders one frame while the loop is [`LoopState::Running`].

use crate::config::DemoConfig;
use crate::error::{EngineError, Result};
use crate::graphics::{Color, RenderContext, Renderer};
use crate::physics::TimestepMode;
use crate::simulation::Simulation;
use crate::windowing::WindowSurface;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{WindowAttributes, WindowId},
};

/// Lifecycle of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal; no further frames are produced
    Closed,
}

/// Everything created once the event loop is ready.
///
/// Fields drop in declaration order: the simulation first, the GPU context last.
struct Runtime {
    simulation: Simulation,
    renderer: Renderer,
    window_surface: WindowSurface,
    context: Arc<RenderContext>,
}

impl Runtime {
    fn render(&mut self, clear_color: Color) -> std::result::Result<(), wgpu::SurfaceError> {
        self.renderer.clear(clear_color);
        for shape in self.simulation.shapes() {
            self.renderer.draw(&shape);
        }
        self.renderer.present(&self.window_surface.surface)
    }
}

/// Main demo application struct that implements ApplicationHandler
pub struct DemoApp {
    config: DemoConfig,
    state: LoopState,
    runtime: Option<Runtime>,
    /// First fatal error, returned from [`DemoApp::run`]
    error: Option<EngineError>,
    last_time: Instant,
}

impl DemoApp {
    /// Create the app after validating `config`
    pub fn new(config: DemoConfig) -> Result<Self> {
        crate::init_logging(config.log_filter.as_deref());
        config.validate()?;

        info!(title = %config.window_title, "Creating DemoApp");

        Ok(Self {
            config,
            state: LoopState::Running,
            runtime: None,
            error: None,
            last_time: Instant::now(),
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run the event loop until the window closes or a fatal error occurs
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&self, event_loop: &ActiveEventLoop) -> Result<Runtime> {
        info!("Initializing DemoApp");

        let (width, height) = self.config.window_size;
        let window_attributes = WindowAttributes::default()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let instance = Arc::new(wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        }));
        let surface = instance.create_surface(Arc::clone(&window))?;

        let context = Arc::new(pollster::block_on(RenderContext::new(
            Arc::clone(&instance),
            Some(&surface),
        ))?);
        let window_surface = WindowSurface::new(window, surface, &context);
        let renderer = Renderer::new(
            Arc::clone(&context),
            window_surface.format(),
            self.config.scene.display_size,
        );

        let simulation = Simulation::new(&self.config.scene, &self.config.physics)?;

        Ok(Runtime {
            simulation,
            renderer,
            window_surface,
            context,
        })
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != LoopState::Closed {
            info!("Closing demo");
            self.state = LoopState::Closed;
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        error!(error = %err, "Fatal error");
        if self.error.is_none() {
            self.error = Some(err);
        }
        self.close(event_loop);
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta_time = (now - self.last_time).as_secs_f32();
        self.last_time = now;

        let clear_color = self.config.clear_color;
        let Some(runtime) = self.runtime.as_mut() else {
            return;
        };

        runtime.simulation.update(delta_time);

        // Minimized windows keep simulating but have nothing to present to
        if runtime.window_surface.is_minimized() {
            return;
        }

        match runtime.render(clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                info!("Surface lost or outdated, reconfiguring");
                runtime.window_surface.reconfigure(&runtime.context.device);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Surface timed out, skipping frame");
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, EngineError::OutOfMemory);
            }
            Err(e) => {
                error!(error = ?e, "Render error");
            }
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Initialize on first resume
        if self.runtime.is_some() || self.state == LoopState::Closed {
            return;
        }

        match self.init(event_loop) {
            Ok(runtime) => {
                self.runtime = Some(runtime);
                self.last_time = Instant::now();
                info!("Demo running");
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window close requested");
                self.close(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(runtime) = &mut self.runtime {
                    runtime
                        .window_surface
                        .resize(&runtime.context.device, physical_size);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(scale_factor, "Scale factor changed");
                if let Some(runtime) = &mut self.runtime {
                    let new_size = runtime.window_surface.window.inner_size();
                    runtime
                        .window_surface
                        .resize(&runtime.context.device, new_size);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.state == LoopState::Running {
            self.frame(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.state = LoopState::Closed;
        if let Some(runtime) = self.runtime.take() {
            info!(
                frames = runtime.simulation.frame_count(),
                "Event loop exiting, releasing resources"
            );
        }
    }
}

/// Builder pattern for DemoApp configuration
pub struct DemoBuilder {
    config: DemoConfig,
}

impl DemoBuilder {
    /// Create a new demo builder
    pub fn new() -> Self {
        Self {
            config: DemoConfig::default(),
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.window_title = title.into();
        self
    }

    /// Set the window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_size = (width, height);
        self
    }

    /// Set how many boxes are dropped
    pub fn box_count(mut self, count: u32) -> Self {
        self.config.scene.box_count = count;
        self
    }

    /// Set how frame time is turned into physics steps
    pub fn timestep(mut self, mode: TimestepMode) -> Self {
        self.config.physics.timestep = mode;
        self
    }

    /// Set a custom log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = Some(filter.into());
        self
    }

    /// Build the DemoApp
    pub fn build(self) -> Result<DemoApp> {
        DemoApp::new(self.config)
    }
}

impl Default for DemoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the demo with `config`
pub fn run(config: DemoConfig) -> Result<()> {
    DemoApp::new(config)?.run()
}
