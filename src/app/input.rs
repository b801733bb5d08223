//! Translation of egui input events into controller events.

use eframe::egui;

use crate::viewport::{InputEvent, PointerButton};

/// Map an egui pointer button onto the controller's buttons.
pub fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        egui::PointerButton::Extra1 | egui::PointerButton::Extra2 => PointerButton::Other,
    }
}

/// Convert an egui event to a controller event.
///
/// Pointer positions are made relative to `origin`, the top-left corner of
/// the fractal surface. Wheel events without a vertical component are dropped.
pub fn translate_event(event: &egui::Event, origin: egui::Pos2) -> Option<InputEvent> {
    match event {
        egui::Event::PointerMoved(pos) => {
            let rel = *pos - origin;
            Some(InputEvent::PointerMoved { x: rel.x, y: rel.y })
        }
        egui::Event::PointerButton {
            button, pressed, ..
        } => Some(InputEvent::Button {
            button: map_button(*button),
            pressed: *pressed,
        }),
        egui::Event::MouseWheel { delta, .. } if delta.y != 0.0 => {
            Some(InputEvent::Scroll { delta: delta.y })
        }
        _ => None,
    }
}
