//! GPU-accelerated Mandelbrot rendering using a wgpu render pipeline.
//!
//! This module provides hardware-accelerated rendering of the current view.
//! It handles:
//! - Device and pipeline management
//! - The static full-surface quad geometry
//! - Publishing the view bounds as a uniform once per frame
//! - Texture readback for display

mod renderer;

pub use renderer::GpuRenderer;
