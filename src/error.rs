//! Error types for the renderer and the application shell.

use thiserror::Error;

/// Failures while setting up or driving the GPU renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("shader compilation failed:\n{0}")]
    ShaderCompile(String),
    #[error("failed to map readback buffer: {0}")]
    BufferMap(#[from] wgpu::BufferAsyncError),
    #[error("readback channel closed before the GPU finished")]
    ReadbackChannel,
}

impl RenderError {
    /// Whether the viewer can continue on the CPU after this error.
    pub fn allows_cpu_fallback(&self) -> bool {
        matches!(self, Self::NoAdapter | Self::RequestDevice(_))
    }
}

/// Top-level errors that abort the viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
