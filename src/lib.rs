//! Mandelview - GPU-accelerated interactive Mandelbrot set viewer.
//!
//! The viewer is split into:
//! - the viewport controller, which turns pointer drags and wheel steps into
//!   a view rectangle over the complex plane
//! - the escape-time colorizer, evaluated per pixel by a wgpu fragment shader
//!   (with a rayon CPU fallback)
//! - the eframe application shell that routes input and presents frames

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod app;
pub mod colorize;
pub mod config;
pub mod error;
pub mod gpu;
pub mod util;
pub mod viewport;
