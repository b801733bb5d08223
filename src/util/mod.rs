//! Utility functions shared across the application.
//!
//! This module provides common utilities for:
//! - HUD colors
//! - Coordinate and zoom formatting

pub mod color;
pub mod format;

pub use color::*;
pub use format::{format_bounds, format_zoom};
