//! Viewer configuration and fixed constants.

use crate::viewport::ViewRectangle;

// =============================================================================
// Constants
// =============================================================================

/// Initial window inner size in logical pixels.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Window title.
pub const WINDOW_TITLE: &str = "Mandelview";

/// Initial view of the complex plane.
pub const INITIAL_MIN_X: f32 = -2.0;
pub const INITIAL_MAX_X: f32 = 2.0;
pub const INITIAL_MIN_Y: f32 = -1.5;
pub const INITIAL_MAX_Y: f32 = 1.5;

/// A zoom-in step scales both extents by `NUMERATOR / DENOMINATOR`; zoom-out
/// applies the inverse.
pub const ZOOM_IN_NUMERATOR: f32 = 5.0;
pub const ZOOM_IN_DENOMINATOR: f32 = 6.0;

/// Scroll requests that would shrink the real extent below this are dropped.
pub const ZOOM_FLOOR: f32 = 0.000_001;

/// Escape-time iteration cap. Must match `MAX_ITERATIONS` in `mandelbrot.wgsl`.
pub const MAX_ITERATIONS: u32 = 1000;

/// Squared magnitude beyond which a point has escaped.
pub const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

// =============================================================================
// Viewer Config
// =============================================================================

/// Startup configuration for the viewer window.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Window title.
    pub title: String,
    /// Initial inner size in logical pixels.
    pub window_size: [f32; 2],
    /// View shown when the session starts.
    pub initial_view: ViewRectangle,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_size: [WINDOW_WIDTH, WINDOW_HEIGHT],
            initial_view: ViewRectangle::default(),
        }
    }
}

impl ViewerConfig {
    /// Native window options for eframe.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            ..Default::default()
        }
    }
}
