//! Plane-space rectangle, pointer anchor and surface dimensions.

use crate::config::{INITIAL_MAX_X, INITIAL_MAX_Y, INITIAL_MIN_X, INITIAL_MIN_Y};

// =============================================================================
// View Rectangle
// =============================================================================

/// Visible region of the complex plane (X = real axis, Y = imaginary axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRectangle {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for ViewRectangle {
    fn default() -> Self {
        Self::new(INITIAL_MIN_X, INITIAL_MAX_X, INITIAL_MIN_Y, INITIAL_MAX_Y)
    }
}

impl ViewRectangle {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Extent along the real axis.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Extent along the imaginary axis.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Center of the rectangle in plane coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.max_x + self.min_x) / 2.0,
            (self.max_y + self.min_y) / 2.0,
        )
    }

    /// Whether all bounds are finite and both extents strictly positive.
    pub fn is_valid(&self) -> bool {
        let finite = self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite();
        let (width, height) = (self.width(), self.height());
        finite && width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()
    }

    /// Map a device position on a surface of the given size to plane coordinates.
    ///
    /// Device row 0 is the top edge of the surface and maps to `min_y`.
    /// Returns `None` for a surface with a non-positive dimension.
    pub fn device_to_plane(&self, dev_x: f32, dev_y: f32, surface: SurfaceSize) -> Option<(f32, f32)> {
        if !surface.is_valid() {
            return None;
        }
        let plane_x = dev_x / surface.width * self.width() + self.min_x;
        let plane_y = dev_y / surface.height * self.height() + self.min_y;
        Some((plane_x, plane_y))
    }

    /// Translate both bounds of each axis by the given plane-space offset.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            min_x: self.min_x + dx,
            max_x: self.max_x + dx,
            min_y: self.min_y + dy,
            max_y: self.max_y + dy,
        }
    }

    /// Uniform payload in `(min_x, max_x, min_y, max_y)` order.
    pub fn to_array(self) -> [f32; 4] {
        [self.min_x, self.max_x, self.min_y, self.max_y]
    }
}

// =============================================================================
// Pointer State
// =============================================================================

/// Last sampled pointer position in plane coordinates, plus the drag flag.
///
/// While `dragging` is set, `mouse_x`/`mouse_y` hold the plane point grabbed
/// at the start of the gesture and are not resampled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub dragging: bool,
}

// =============================================================================
// Surface Size
// =============================================================================

/// Dimensions of the rendering surface in device units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
