//! Font measurement seam.
//!
//! The widget never touches the windowing library's font machinery directly;
//! it measures text through this trait. The shell implements it over the real
//! font stack, tests implement it with fixed per-character advances.
//!
//! The font is not assumed monospaced: word wrapping, click-to-caret mapping,
//! and selection highlighting all measure rendered string prefixes rather
//! than counting columns.

/// Pixel measurements for the active font.
pub trait TextMetrics {
    /// Width in pixels of `text` rendered on a single line.
    fn text_width(&self, text: &str) -> f32;

    /// Height in pixels of one text line.
    fn line_height(&self) -> f32;
}
