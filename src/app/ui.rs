//! eframe integration: per-frame input, rendering and the HUD overlay.

use eframe::egui::{self, pos2, Color32, ColorImage, CursorIcon, Rect, Sense, Vec2};

use super::state::MandelviewApp;
use super::types::FrameParams;
use crate::util::color::{
    CAUTION_AMBER, INTERFACE_GRAY, OPERATIONAL_GREEN, PANEL_DARK, TACTICAL_CYAN, VOID_BLACK,
};
use crate::util::{format_bounds, format_zoom};

impl eframe::App for MandelviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(VOID_BLACK))
            .show(ctx, |ui| {
                self.draw_fractal(ui);
            });
    }
}

impl MandelviewApp {
    /// Apply input, publish the bounds, and present the frame.
    fn draw_fractal(&mut self, ui: &mut egui::Ui) {
        let surface = ui.max_rect();
        let response = ui.allocate_rect(surface, Sense::click_and_drag());

        let events = ui.input(|i| i.events.clone());
        self.apply_input(&events, surface);

        if self.controller.is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        let params = FrameParams::new(
            self.controller.current_bounds(),
            [surface.width(), surface.height()],
            ui.ctx().pixels_per_point(),
            self.max_texture_side(),
        );

        // Only re-render when the bounds or resolution changed since the last frame
        if !params.is_empty() && self.frame_params != Some(params) {
            if let Some(pixels) = self.render_frame(&params) {
                let image = ColorImage::from_rgba_unmultiplied(
                    [params.width as usize, params.height as usize],
                    &pixels,
                );
                match &mut self.texture {
                    Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                    None => {
                        self.texture = Some(ui.ctx().load_texture(
                            "mandelbrot",
                            image,
                            egui::TextureOptions::NEAREST,
                        ));
                    }
                }
                self.frame_params = Some(params);
            }
        }

        if let Some(texture) = &self.texture {
            ui.painter().image(
                texture.id(),
                surface,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        self.draw_hud(ui, surface);
    }

    /// Draw the HUD overlay with backend, zoom, center and bounds.
    fn draw_hud(&self, ui: &egui::Ui, rect: Rect) {
        let hud_rect = Rect::from_min_size(
            rect.min + Vec2::new(12.0, rect.height() - 58.0),
            Vec2::new(rect.width().min(460.0) - 24.0, 46.0),
        );
        if hud_rect.width() <= 0.0 || hud_rect.min.y < rect.min.y {
            return;
        }

        ui.painter()
            .rect_filled(hud_rect, 2.0, PANEL_DARK.gamma_multiply(0.85));
        ui.painter()
            .rect_stroke(hud_rect, 2.0, egui::Stroke::new(1.0, INTERFACE_GRAY));

        let bounds = self.controller.current_bounds();
        let (cx, cy) = bounds.center();
        let backend_color = if self.backend.is_gpu() {
            OPERATIONAL_GREEN
        } else {
            CAUTION_AMBER
        };

        let font = egui::FontId::monospace(10.0);
        ui.painter().text(
            hud_rect.left_top() + Vec2::new(8.0, 6.0),
            egui::Align2::LEFT_TOP,
            format!("◢ {}", self.backend.label()),
            font.clone(),
            backend_color,
        );
        ui.painter().text(
            hud_rect.left_top() + Vec2::new(8.0, 19.0),
            egui::Align2::LEFT_TOP,
            format!("ZOOM: {} | CENTER: {cx:.6}, {cy:.6}", format_zoom(self.zoom())),
            font.clone(),
            TACTICAL_CYAN,
        );
        ui.painter().text(
            hud_rect.left_top() + Vec2::new(8.0, 32.0),
            egui::Align2::LEFT_TOP,
            format_bounds(&bounds),
            font,
            TACTICAL_CYAN,
        );
    }
}
