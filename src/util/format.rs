//! Formatting utility functions.
//!
//! Provides human-readable formatting for the HUD overlay.

use crate::viewport::ViewRectangle;

/// Format the view bounds as `X [min, max]  Y [min, max]`.
///
/// # Examples
/// ```
/// use mandelview::util::format::format_bounds;
/// use mandelview::viewport::ViewRectangle;
/// assert_eq!(
///     format_bounds(&ViewRectangle::default()),
///     "X [-2.000000, 2.000000]  Y [-1.500000, 1.500000]"
/// );
/// ```
pub fn format_bounds(view: &ViewRectangle) -> String {
    format!(
        "X [{:.6}, {:.6}]  Y [{:.6}, {:.6}]",
        view.min_x, view.max_x, view.min_y, view.max_y
    )
}

/// Format a magnification factor, switching to scientific notation past 10^4.
pub fn format_zoom(zoom: f32) -> String {
    if zoom < 10_000.0 {
        format!("{zoom:.2}x")
    } else {
        format!("{zoom:.2e}x")
    }
}
