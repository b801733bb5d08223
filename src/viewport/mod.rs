//! Viewport mapping and interaction model.
//!
//! This module provides:
//! - `ViewRectangle` - the visible region of the complex plane
//! - `PointerState` - the drag anchor and dragging flag
//! - `ViewportController` - turns pointer/button/scroll input into view updates

pub mod controller;
pub mod rect;

pub use controller::{InputEvent, PointerButton, ViewportController};
pub use rect::{PointerState, SurfaceSize, ViewRectangle};
