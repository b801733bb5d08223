//! MANDELVIEW - interactive Mandelbrot set viewer.
//!
//! Drag with the primary button to pan, scroll to zoom around the view center.

#![warn(clippy::all, clippy::pedantic)]

use mandelview::app::MandelviewApp;
use mandelview::config::ViewerConfig;
use mandelview::error::ViewerError;
use mandelview::gpu::GpuRenderer;

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> Result<(), ViewerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::default();

    let gpu_renderer = match GpuRenderer::new() {
        Ok(renderer) => {
            log::info!("GPU acceleration enabled: {}", renderer.adapter_name());
            Some(renderer)
        }
        Err(e) if e.allows_cpu_fallback() => {
            log::warn!("GPU acceleration unavailable ({e}), using CPU fallback");
            None
        }
        Err(e) => {
            log::error!("{e}");
            return Err(e.into());
        }
    };

    let options = config.native_options();
    let app = MandelviewApp::new(&config, gpu_renderer);

    eframe::run_native(&config.title, options, Box::new(move |_cc| Ok(Box::new(app)))).map_err(
        |e| {
            log::error!("Failed to create window: {e}");
            ViewerError::from(e)
        },
    )
}
