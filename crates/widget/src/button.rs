//! A plain push button.
//!
//! The button itself holds no callback; the shell hit-tests it on pointer
//! down and dispatches an explicit command value, which keeps activation
//! synchronous and testable.

use crate::geom::Rect;
use crate::palette;
use crate::surface::Surface;

const CORNER_RADIUS: f32 = 4.0;
const LABEL_INSET_X: f32 = 15.0;
const LABEL_INSET_Y: f32 = 10.0;

/// A labeled rectangular button.
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(rect: Rect, label: &str) -> Self {
        Self {
            rect,
            label: label.to_string(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when the point lands on the button.
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect, palette::BUTTON_FACE, CORNER_RADIUS);
        surface.draw_text(
            self.rect.x + LABEL_INSET_X,
            self.rect.y + LABEL_INSET_Y,
            &self.label,
            palette::TEXT,
        );
    }
}
