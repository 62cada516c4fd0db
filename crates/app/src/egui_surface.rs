//! The widget drawing seam implemented over the egui painter.

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Stroke, StrokeKind};
use rea_tts_widget::{Color, Rect, Surface};

pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    font: FontId,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, font: FontId) -> Self {
        Self { painter, font }
    }
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(Pos2::new(rect.x, rect.y), egui::vec2(rect.w, rect.h))
}

impl Surface for EguiSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.painter.rect_filled(
            egui_rect(rect),
            CornerRadius::same(corner_radius as u8),
            color32(color),
        );
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color, corner_radius: f32) {
        self.painter.rect_stroke(
            egui_rect(rect),
            CornerRadius::same(corner_radius as u8),
            Stroke::new(width, color32(color)),
            StrokeKind::Inside,
        );
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.painter.text(
            Pos2::new(x, y),
            Align2::LEFT_TOP,
            text,
            self.font.clone(),
            color32(color),
        );
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.painter.line_segment(
            [Pos2::new(x0, y0), Pos2::new(x1, y1)],
            Stroke::new(1.0, color32(color)),
        );
    }
}
