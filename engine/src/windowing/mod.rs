//! Window and presentation surface

pub mod window_surface;

pub use window_surface::WindowSurface;
