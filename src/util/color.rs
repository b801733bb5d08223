//! HUD color palette.
//!
//! The fractal itself is grayscale (see `colorize`); these colors are only
//! used for the overlay drawn on top of it.

use eframe::egui::Color32;

/// Overlay panel background.
pub const PANEL_DARK: Color32 = Color32::from_rgb(12, 14, 18);

/// Overlay panel border.
pub const INTERFACE_GRAY: Color32 = Color32::from_rgb(60, 64, 72);

/// Primary HUD text.
pub const TACTICAL_CYAN: Color32 = Color32::from_rgb(0, 200, 220);

/// Backend indicator when rendering on the GPU.
pub const OPERATIONAL_GREEN: Color32 = Color32::from_rgb(60, 220, 120);

/// Backend indicator when rendering on the CPU fallback.
pub const CAUTION_AMBER: Color32 = Color32::from_rgb(240, 170, 40);

/// Background shown before the first frame is ready.
pub const VOID_BLACK: Color32 = Color32::from_rgb(0, 0, 0);
