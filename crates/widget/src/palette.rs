//! The fixed color palette for the widgets.
//!
//! Visual theming is not a concern of this application; every widget draws
//! from this one set of colors.

use crate::geom::Color;

/// Window background.
pub const WINDOW_BACKGROUND: Color = Color::rgb(255, 255, 255);
/// Text box interior.
pub const WIDGET_BACKGROUND: Color = Color::rgb(230, 230, 230);
/// Text box border while focused.
pub const BORDER_FOCUSED: Color = Color::rgb(30, 144, 255);
/// Text box border while unfocused.
pub const BORDER_UNFOCUSED: Color = Color::rgb(180, 180, 180);
/// Selection highlight behind selected text.
pub const SELECTION: Color = Color::rgb(173, 216, 230);
/// Text and caret.
pub const TEXT: Color = Color::rgb(0, 0, 0);
/// Scrollbar track.
pub const SCROLLBAR_TRACK: Color = Color::rgb(200, 200, 200);
/// Scrollbar slider.
pub const SCROLLBAR_SLIDER: Color = Color::rgb(100, 100, 100);
/// Button face.
pub const BUTTON_FACE: Color = Color::rgb(200, 200, 200);
