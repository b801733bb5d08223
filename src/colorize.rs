//! Escape-time kernel and CPU fallback renderer.
//!
//! The kernel here mirrors `shaders/mandelbrot.wgsl` instruction for
//! instruction. The GPU path is the normal one; `render_cpu` is used when no
//! adapter is available.

use rayon::prelude::*;

use crate::config::{ESCAPE_RADIUS_SQUARED, MAX_ITERATIONS};
use crate::viewport::ViewRectangle;

/// Number of iterations before `(cx, cy)` escapes, capped at `MAX_ITERATIONS`.
#[inline]
pub fn escape_time(cx: f32, cy: f32) -> u32 {
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    let mut x2 = 0.0f32;
    let mut y2 = 0.0f32;
    let mut iteration = 0;
    while x2 + y2 <= ESCAPE_RADIUS_SQUARED && iteration < MAX_ITERATIONS {
        y = 2.0 * x * y + cy;
        x = x2 - y2 + cx;
        x2 = x * x;
        y2 = y * y;
        iteration += 1;
    }
    iteration
}

/// Grayscale intensity in `0.0..=1.0`.
#[inline]
pub fn intensity(cx: f32, cy: f32) -> f32 {
    escape_time(cx, cy) as f32 / MAX_ITERATIONS as f32
}

/// Convert an intensity to an opaque RGBA gray.
#[inline]
pub fn intensity_to_rgba(f: f32) -> [u8; 4] {
    let v = (f.clamp(0.0, 1.0) * 255.0).round() as u8;
    [v, v, v, 255]
}

/// Render the view to tightly packed RGBA rows on the CPU.
///
/// Pixels are sampled at their centers, matching fragment interpolation.
pub fn render_cpu(view: &ViewRectangle, width: u32, height: u32) -> Vec<u8> {
    let mut frame = vec![0u8; width as usize * height as usize * 4];
    if width == 0 || height == 0 {
        return frame;
    }

    let dx = view.width() / width as f32;
    let dy = view.height() / height as f32;

    frame
        .par_chunks_exact_mut(width as usize * 4)
        .enumerate()
        .for_each(|(row_index, row)| {
            let cy = view.min_y + (row_index as f32 + 0.5) * dy;
            for (col, pixel) in row.chunks_exact_mut(4).enumerate() {
                let cx = view.min_x + (col as f32 + 0.5) * dx;
                pixel.copy_from_slice(&intensity_to_rgba(intensity(cx, cy)));
            }
        });

    frame
}
