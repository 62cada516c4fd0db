//! Drawing surface seam.
//!
//! [`Surface`] is the complete set of primitives the widgets draw with. The
//! shell implements it over the real painter; [`RecordingSurface`] captures
//! the draw call sequence so render output can be asserted on in headless
//! tests.

use crate::geom::{Color, Rect};

/// Low-level 2D drawing primitives.
///
/// Coordinates are view-space pixels with the origin at the top-left. Text is
/// positioned by the top-left corner of its line box.
pub trait Surface {
    /// Fills a rectangle, optionally with rounded corners (`corner_radius`
    /// of 0 draws square corners).
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32);

    /// Strokes a rectangle outline with the given line width.
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color, corner_radius: f32);

    /// Draws one line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color);

    /// Draws a one-pixel line segment.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
        corner_radius: f32,
    },
    StrokeRect {
        rect: Rect,
        width: f32,
        color: Color,
        corner_radius: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        color: Color,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Color,
    },
}

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Fill commands using the given color, in draw order.
    pub fn fills_with_color(&self, color: Color) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { color: c, .. } if *c == color))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            corner_radius,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color, corner_radius: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            width,
            color,
            corner_radius,
        });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.commands.push(DrawCommand::Line { x0, y0, x1, y1, color });
    }
}
