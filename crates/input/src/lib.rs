//! Input event types for keyboard, pointer, and wheel handling.
//!
//! These types abstract over the windowing library's event details and give
//! the widget a clean, platform-free interface. The shell translates raw
//! toolkit events into [`InputEvent`] values once per frame and feeds them to
//! every widget in order.

/// One raw input event, as consumed by the widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary pointer button pressed at view coordinates (pixels, top-left origin).
    PointerDown { x: f32, y: f32 },
    /// Primary pointer button released.
    PointerUp,
    /// Pointer moved (position in view coordinates).
    PointerMoved { x: f32, y: f32 },
    /// Vertical wheel scroll, in line units. Positive moves the view down
    /// (scroll offset increases); the shell adapter owns the platform sign
    /// negation.
    Wheel { lines: f32 },
    /// A key press with modifiers.
    Key(KeyEvent),
    /// Committed text input (typed characters, IME commit).
    Text(String),
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a character with the control modifier held
    /// (the clipboard and select-all shortcuts).
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub control: bool,
    /// Alt / Option key
    pub alt: bool,
    /// Platform command key (Cmd on macOS)
    pub command: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.command
    }

    /// Returns true if the platform shortcut modifier is held
    /// (Ctrl everywhere, or Cmd on macOS).
    pub fn shortcut(&self) -> bool {
        self.control || self.command
    }
}

/// Keys the widgets interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state). Plain typed
    /// text normally arrives as [`InputEvent::Text`]; `Char` key events carry
    /// the letter for shortcut combinations and for headless drivers.
    Char(char),
    /// Backspace / delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Escape key
    Escape,
}

impl Key {
    /// Returns true for caret navigation keys, which never modify the buffer
    /// and do not trigger selection replacement.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Up | Key::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_char() {
        let event = KeyEvent::char('a');
        assert_eq!(event.key, Key::Char('a'));
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_key_event_ctrl() {
        let event = KeyEvent::ctrl('c');
        assert_eq!(event.key, Key::Char('c'));
        assert!(event.modifiers.shortcut());
        assert!(!event.modifiers.is_empty());
    }

    #[test]
    fn test_command_counts_as_shortcut() {
        let mods = Modifiers {
            command: true,
            ..Default::default()
        };
        assert!(mods.shortcut());
    }

    #[test]
    fn test_navigation_keys() {
        assert!(Key::Left.is_navigation());
        assert!(Key::Right.is_navigation());
        assert!(Key::Up.is_navigation());
        assert!(Key::Down.is_navigation());
        assert!(!Key::Backspace.is_navigation());
        assert!(!Key::Char('x').is_navigation());
        assert!(!Key::Return.is_navigation());
    }
}
