//! Core types for the viewer application state.

use crate::viewport::ViewRectangle;

// =============================================================================
// Render Backend
// =============================================================================

/// Where frames are computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderBackend {
    /// wgpu render pipeline; holds the adapter description.
    Gpu(String),
    /// rayon-parallel host fallback.
    Cpu,
}

impl RenderBackend {
    /// Short label for the HUD.
    pub fn label(&self) -> &str {
        match self {
            Self::Gpu(name) => name,
            Self::Cpu => "CPU fallback",
        }
    }

    pub fn is_gpu(&self) -> bool {
        matches!(self, Self::Gpu(_))
    }
}

// =============================================================================
// Frame Parameters
// =============================================================================

/// Parameters used to produce the current frame (to detect when re-rendering is needed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Bounds published for the frame.
    pub bounds: ViewRectangle,
    /// Framebuffer resolution in physical pixels.
    pub width: u32,
    pub height: u32,
}

impl FrameParams {
    /// Physical resolution for a surface of `size` logical points, clamped to `max_side`.
    pub fn new(bounds: ViewRectangle, size: [f32; 2], pixels_per_point: f32, max_side: u32) -> Self {
        let to_pixels = |points: f32| -> u32 {
            let pixels = (points * pixels_per_point).round();
            if pixels.is_finite() && pixels > 0.0 {
                (pixels as u32).min(max_side)
            } else {
                0
            }
        };
        Self {
            bounds,
            width: to_pixels(size[0]),
            height: to_pixels(size[1]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
