//! Application state and types for Mandelview.
//!
//! This module contains the viewer shell around the viewport controller:
//! - `MandelviewApp` - Main application state
//! - `FrameParams` - Parameters of the presented frame
//! - `RenderBackend` - GPU or CPU rendering
//! - egui event translation and the eframe `App` implementation

mod input;
mod state;
mod types;
mod ui;

pub use input::{map_button, translate_event};
pub use state::MandelviewApp;
pub use types::{FrameParams, RenderBackend};
