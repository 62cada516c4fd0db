//! Font measurement over egui's text layout.

use eframe::egui;
use rea_tts_widget::TextMetrics;

/// `TextMetrics` backed by the egui font atlas for one font.
pub struct EguiMetrics<'a> {
    ctx: &'a egui::Context,
    font: egui::FontId,
}

impl<'a> EguiMetrics<'a> {
    pub fn new(ctx: &'a egui::Context, font: egui::FontId) -> Self {
        Self { ctx, font }
    }
}

impl TextMetrics for EguiMetrics<'_> {
    fn text_width(&self, text: &str) -> f32 {
        self.ctx.fonts_mut(|fonts| {
            fonts
                .layout_no_wrap(text.to_string(), self.font.clone(), egui::Color32::BLACK)
                .size()
                .x
        })
    }

    fn line_height(&self) -> f32 {
        self.ctx.fonts_mut(|fonts| fonts.row_height(&self.font))
    }
}
