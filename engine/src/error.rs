//! Error types for the engine

/// Errors that can stop the demo from starting or keep running
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid box size {width}x{height}: both extents must be positive")]
    InvalidBoxSize { width: f32, height: f32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("Failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("GPU ran out of memory while presenting a frame")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_box_size_message() {
        let err = EngineError::InvalidBoxSize {
            width: 0.0,
            height: 50.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid box size 0x50: both extents must be positive"
        );
    }
}
