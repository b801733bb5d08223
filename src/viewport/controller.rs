//! Pointer-driven pan and scroll-driven zoom over the view rectangle.

use super::rect::{PointerState, SurfaceSize, ViewRectangle};
use crate::config::{ZOOM_FLOOR, ZOOM_IN_DENOMINATOR, ZOOM_IN_NUMERATOR};

/// Pointer buttons as seen by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Input delivered by the windowing layer, in device coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    Button { button: PointerButton, pressed: bool },
    /// Vertical wheel offset; positive zooms in.
    Scroll { delta: f32 },
}

/// Owns the current view and pointer state and applies input to them.
#[derive(Clone, Debug, Default)]
pub struct ViewportController {
    view: ViewRectangle,
    pointer: PointerState,
}

impl ViewportController {
    pub fn new(view: ViewRectangle) -> Self {
        Self {
            view,
            pointer: PointerState::default(),
        }
    }

    /// Bounds to publish to the colorizer for this frame.
    pub fn current_bounds(&self) -> ViewRectangle {
        self.view
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.dragging
    }

    /// Dispatch a single input event.
    pub fn handle(&mut self, event: InputEvent, surface: SurfaceSize) {
        match event {
            InputEvent::PointerMoved { x, y } => self.on_pointer_move(x, y, surface),
            InputEvent::Button { button, pressed } => self.on_button(button, pressed),
            InputEvent::Scroll { delta } => self.on_scroll(delta),
        }
    }

    /// Sample the anchor point, or drag the view so the anchor follows the cursor.
    ///
    /// The anchor is not updated during a drag: every move is measured against
    /// the plane point grabbed when the gesture began.
    pub fn on_pointer_move(&mut self, dev_x: f32, dev_y: f32, surface: SurfaceSize) {
        let Some((plane_x, plane_y)) = self.view.device_to_plane(dev_x, dev_y, surface) else {
            return;
        };

        if !self.pointer.dragging {
            self.pointer.mouse_x = plane_x;
            self.pointer.mouse_y = plane_y;
            return;
        }

        let delta_x = self.pointer.mouse_x - plane_x;
        let delta_y = self.pointer.mouse_y - plane_y;
        let moved = self.view.translated(delta_x, delta_y);
        if moved.is_valid() {
            self.view = moved;
        }
    }

    /// Only a primary press starts a drag; anything else ends it.
    pub fn on_button(&mut self, button: PointerButton, pressed: bool) {
        self.pointer.dragging = button == PointerButton::Primary && pressed;
    }

    /// Zoom in for a positive direction, out otherwise, around the current center.
    pub fn on_scroll(&mut self, direction: f32) {
        let (width, height) = if direction > 0.0 {
            (
                self.view.width() * ZOOM_IN_NUMERATOR / ZOOM_IN_DENOMINATOR,
                self.view.height() * ZOOM_IN_NUMERATOR / ZOOM_IN_DENOMINATOR,
            )
        } else {
            (
                self.view.width() * ZOOM_IN_DENOMINATOR / ZOOM_IN_NUMERATOR,
                self.view.height() * ZOOM_IN_DENOMINATOR / ZOOM_IN_NUMERATOR,
            )
        };

        if width < ZOOM_FLOOR {
            log::debug!("zoom floor reached (width {width:e}), ignoring scroll");
            return;
        }

        let v = self.view;
        let zoomed = ViewRectangle {
            min_x: (v.max_x + v.min_x - width) / 2.0,
            max_x: (v.max_x + v.min_x + width) / 2.0,
            min_y: (v.max_y + v.min_y - height) / 2.0,
            max_y: (v.max_y + v.min_y + height) / 2.0,
        };

        if zoomed.is_valid() {
            self.view = zoomed;
        } else {
            log::debug!("degenerate zoom result {zoomed:?}, ignoring scroll");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: SurfaceSize = SurfaceSize::new(800.0, 600.0);

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_view_close(actual: ViewRectangle, expected: ViewRectangle, tolerance: f32) {
        assert_close(actual.min_x, expected.min_x, tolerance);
        assert_close(actual.max_x, expected.max_x, tolerance);
        assert_close(actual.min_y, expected.min_y, tolerance);
        assert_close(actual.max_y, expected.max_y, tolerance);
    }

    #[test]
    fn test_move_without_drag_samples_anchor() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(400.0, 300.0, SURFACE);

        let pointer = controller.pointer();
        assert_eq!((pointer.mouse_x, pointer.mouse_y), (0.0, 0.0));
        assert_eq!(controller.current_bounds(), ViewRectangle::default());
    }

    #[test]
    fn test_drag_translates_view() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(400.0, 300.0, SURFACE);
        controller.on_button(PointerButton::Primary, true);
        controller.on_pointer_move(500.0, 300.0, SURFACE);

        let view = controller.current_bounds();
        assert_view_close(view, ViewRectangle::new(-2.5, 1.5, -1.5, 1.5), 1e-6);

        // Anchor is held at the grabbed point for the rest of the gesture
        let pointer = controller.pointer();
        assert_eq!((pointer.mouse_x, pointer.mouse_y), (0.0, 0.0));
    }

    #[test]
    fn test_grabbed_point_tracks_cursor() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(400.0, 300.0, SURFACE);
        controller.on_button(PointerButton::Primary, true);

        for (x, y) in [(500.0, 300.0), (520.0, 340.0), (300.0, 100.0), (650.0, 590.0)] {
            controller.on_pointer_move(x, y, SURFACE);
            let under_cursor = controller
                .current_bounds()
                .device_to_plane(x, y, SURFACE)
                .unwrap();
            assert_close(under_cursor.0, 0.0, 1e-5);
            assert_close(under_cursor.1, 0.0, 1e-5);
        }
    }

    #[test]
    fn test_repeated_move_at_same_position_is_stable() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(400.0, 300.0, SURFACE);
        controller.on_button(PointerButton::Primary, true);
        controller.on_pointer_move(500.0, 300.0, SURFACE);
        let after_first = controller.current_bounds();
        controller.on_pointer_move(500.0, 300.0, SURFACE);

        assert_view_close(controller.current_bounds(), after_first, 1e-6);
    }

    #[test]
    fn test_release_then_move_resamples_from_current_view() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(400.0, 300.0, SURFACE);
        controller.on_button(PointerButton::Primary, true);
        controller.on_pointer_move(500.0, 300.0, SURFACE);
        controller.on_button(PointerButton::Primary, false);
        assert!(!controller.is_dragging());

        let before = controller.current_bounds();
        controller.on_pointer_move(600.0, 300.0, SURFACE);

        // View unchanged, anchor sampled through the post-drag view
        assert_eq!(controller.current_bounds(), before);
        let pointer = controller.pointer();
        assert_close(pointer.mouse_x, 600.0 / 800.0 * 4.0 - 2.5, 1e-6);
        assert_close(pointer.mouse_y, 0.0, 1e-6);
    }

    #[test]
    fn test_button_handling_is_permissive() {
        let mut controller = ViewportController::default();

        controller.on_button(PointerButton::Primary, true);
        assert!(controller.is_dragging());

        // Pressing another button ends the drag
        controller.on_button(PointerButton::Secondary, true);
        assert!(!controller.is_dragging());

        controller.on_button(PointerButton::Primary, true);
        controller.on_button(PointerButton::Middle, false);
        assert!(!controller.is_dragging());

        controller.on_button(PointerButton::Other, true);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_single_zoom_in() {
        let mut controller = ViewportController::default();
        controller.on_scroll(1.0);

        assert_view_close(
            controller.current_bounds(),
            ViewRectangle::new(-5.0 / 3.0, 5.0 / 3.0, -1.25, 1.25),
            1e-5,
        );
    }

    #[test]
    fn test_single_zoom_out() {
        let mut controller = ViewportController::default();
        controller.on_scroll(-1.0);

        assert_view_close(
            controller.current_bounds(),
            ViewRectangle::new(-2.4, 2.4, -1.8, 1.8),
            1e-5,
        );
    }

    #[test]
    fn test_zero_scroll_zooms_out() {
        let mut controller = ViewportController::default();
        controller.on_scroll(0.0);
        assert!(controller.current_bounds().width() > 4.0);
    }

    #[test]
    fn test_zoom_preserves_center_and_aspect() {
        let mut controller = ViewportController::new(ViewRectangle::new(-1.0, 3.0, 0.5, 3.5));
        controller.on_scroll(1.0);
        controller.on_scroll(1.0);
        controller.on_scroll(-1.0);

        let view = controller.current_bounds();
        let (cx, cy) = view.center();
        assert_close(cx, 1.0, 1e-6);
        assert_close(cy, 2.0, 1e-6);
        assert_close(view.width() / view.height(), 4.0 / 3.0, 1e-5);
    }

    #[test]
    fn test_zoom_in_then_out_is_identity() {
        let original = ViewRectangle::default();
        let mut controller = ViewportController::new(original);

        for _ in 0..20 {
            controller.on_scroll(1.0);
        }
        for _ in 0..20 {
            controller.on_scroll(-1.0);
        }

        assert_view_close(controller.current_bounds(), original, 1e-4);
    }

    #[test]
    fn test_zoom_floor_stops_shrinking() {
        let mut controller = ViewportController::default();
        for _ in 0..10_000 {
            controller.on_scroll(1.0);
            assert!(controller.current_bounds().is_valid());
        }

        let view = controller.current_bounds();
        assert!(view.width() > 0.0);
        assert!(view.width() >= ZOOM_FLOOR);
        // One more step would have crossed the floor
        assert!(view.width() * ZOOM_IN_NUMERATOR / ZOOM_IN_DENOMINATOR < ZOOM_FLOOR);

        let frozen = controller.current_bounds();
        controller.on_scroll(1.0);
        assert_eq!(controller.current_bounds(), frozen);
    }

    #[test]
    fn test_zoom_floor_far_from_origin() {
        let mut controller = ViewportController::new(ViewRectangle::new(998.0, 1002.0, -1.5, 1.5));
        for _ in 0..10_000 {
            controller.on_scroll(1.0);
            let view = controller.current_bounds();
            assert!(view.max_x > view.min_x && view.max_y > view.min_y);
        }
    }

    #[test]
    fn test_zoom_out_never_overflows() {
        let mut controller = ViewportController::default();
        for _ in 0..10_000 {
            controller.on_scroll(-1.0);
        }
        assert!(controller.current_bounds().is_valid());
    }

    #[test]
    fn test_adversarial_drag_keeps_invariant() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(0.0, 0.0, SURFACE);
        controller.on_button(PointerButton::Primary, true);

        for i in 0..1_000 {
            let x = if i % 2 == 0 { 800.0 } else { -1.0e6 };
            controller.on_pointer_move(x, x, SURFACE);
            controller.on_scroll(-1.0);
            let view = controller.current_bounds();
            assert!(view.max_x > view.min_x && view.max_y > view.min_y);
        }
    }

    #[test]
    fn test_move_on_empty_surface_is_ignored() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(400.0, 300.0, SURFACE);
        controller.on_button(PointerButton::Primary, true);
        controller.on_pointer_move(10.0, 10.0, SurfaceSize::new(0.0, 0.0));

        assert_eq!(controller.current_bounds(), ViewRectangle::default());
    }

    #[test]
    fn test_conversion_uses_live_surface_size() {
        let mut controller = ViewportController::default();
        controller.on_pointer_move(800.0, 600.0, SurfaceSize::new(1600.0, 1200.0));

        let pointer = controller.pointer();
        assert_eq!((pointer.mouse_x, pointer.mouse_y), (0.0, 0.0));
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut controller = ViewportController::default();
        controller.handle(InputEvent::PointerMoved { x: 400.0, y: 300.0 }, SURFACE);
        controller.handle(
            InputEvent::Button {
                button: PointerButton::Primary,
                pressed: true,
            },
            SURFACE,
        );
        controller.handle(InputEvent::PointerMoved { x: 500.0, y: 300.0 }, SURFACE);
        controller.handle(
            InputEvent::Button {
                button: PointerButton::Primary,
                pressed: false,
            },
            SURFACE,
        );
        controller.handle(InputEvent::Scroll { delta: 1.0 }, SURFACE);

        let view = controller.current_bounds();
        assert_close(view.center().0, -0.5, 1e-6);
        assert_close(view.width(), 4.0 * 5.0 / 6.0, 1e-5);
        assert!(!controller.is_dragging());
    }
}
