//! Main application state.

use eframe::egui::{self, TextureHandle};

use super::input::translate_event;
use super::types::{FrameParams, RenderBackend};
use crate::colorize::render_cpu;
use crate::config::ViewerConfig;
use crate::gpu::GpuRenderer;
use crate::viewport::{SurfaceSize, ViewportController};

/// Texture side used for the CPU fallback, where the device limit does not apply.
const CPU_MAX_TEXTURE_SIDE: u32 = 8192;

/// Main application state.
pub struct MandelviewApp {
    /// Owns the view rectangle and pointer state.
    pub controller: ViewportController,
    /// GPU renderer, or `None` when running on the CPU fallback.
    pub gpu_renderer: Option<GpuRenderer>,
    /// Active render backend.
    pub backend: RenderBackend,
    /// Texture holding the last rendered frame.
    pub texture: Option<TextureHandle>,
    /// Parameters of the frame in `texture`.
    pub frame_params: Option<FrameParams>,
    /// Real-axis extent at startup, for the HUD zoom readout.
    initial_width: f32,
}

impl MandelviewApp {
    /// Create the application with an optional GPU renderer.
    pub fn new(config: &ViewerConfig, gpu_renderer: Option<GpuRenderer>) -> Self {
        let backend = match &gpu_renderer {
            Some(gpu) => RenderBackend::Gpu(gpu.adapter_name().to_string()),
            None => RenderBackend::Cpu,
        };
        Self {
            controller: ViewportController::new(config.initial_view),
            gpu_renderer,
            backend,
            texture: None,
            frame_params: None,
            initial_width: config.initial_view.width(),
        }
    }

    /// Magnification relative to the initial view.
    pub fn zoom(&self) -> f32 {
        self.initial_width / self.controller.current_bounds().width()
    }

    /// Largest framebuffer side the active backend can produce.
    pub fn max_texture_side(&self) -> u32 {
        self.gpu_renderer
            .as_ref()
            .map_or(CPU_MAX_TEXTURE_SIDE, GpuRenderer::max_dimension)
    }

    /// Feed this frame's input events to the controller, in arrival order.
    ///
    /// `surface` is the fractal's on-screen rectangle; its live size is used
    /// for every device-to-plane conversion.
    pub fn apply_input(&mut self, events: &[egui::Event], surface: egui::Rect) {
        let size = SurfaceSize::new(surface.width(), surface.height());
        for event in events {
            if let Some(input) = translate_event(event, surface.min) {
                self.controller.handle(input, size);
            }
        }
    }

    /// Produce RGBA pixels for `params` on the active backend.
    ///
    /// Returns `None` if the GPU failed; the caller keeps showing the previous frame.
    pub fn render_frame(&mut self, params: &FrameParams) -> Option<Vec<u8>> {
        match self.gpu_renderer.as_mut() {
            Some(gpu) => match gpu.render(&params.bounds, params.width, params.height) {
                Ok(pixels) => Some(pixels),
                Err(e) => {
                    log::error!("GPU render failed: {e}");
                    None
                }
            },
            None => Some(render_cpu(&params.bounds, params.width, params.height)),
        }
    }
}
