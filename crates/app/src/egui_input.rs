//! Raw egui events translated into the widget's input events.
//!
//! Plain typed characters arrive through `Event::Text`, so letter keys are
//! only forwarded as key events when the shortcut modifier is down — that is
//! what keeps a typed `a` from also registering as a bare `Char('a')` key.

use eframe::egui;
use rea_tts_input::{InputEvent, Key, KeyEvent, Modifiers};

/// Translates one frame's egui event list.
pub fn translate_events(events: &[egui::Event]) -> Vec<InputEvent> {
    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } => out.push(InputEvent::PointerDown { x: pos.x, y: pos.y }),
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => out.push(InputEvent::PointerUp),
            egui::Event::PointerMoved(pos) => {
                out.push(InputEvent::PointerMoved { x: pos.x, y: pos.y })
            }
            egui::Event::Text(text) => {
                if !text.is_empty() {
                    out.push(InputEvent::Text(text.clone()));
                }
            }
            // the window system raises dedicated clipboard events on some
            // platforms; fold them back into the widget's shortcut keys (the
            // widget reads the system clipboard itself)
            egui::Event::Copy => out.push(InputEvent::Key(KeyEvent::ctrl('c'))),
            egui::Event::Cut => out.push(InputEvent::Key(KeyEvent::ctrl('x'))),
            egui::Event::Paste(_) => out.push(InputEvent::Key(KeyEvent::ctrl('v'))),
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                if let Some(event) = translate_key(*key, *modifiers) {
                    out.push(InputEvent::Key(event));
                }
            }
            _ => {}
        }
    }
    out
}

/// Converts the frame's raw scroll delta (pixels, positive = scroll up) into
/// a wheel event in line units, positive moving the view down.
pub fn wheel_event(raw_scroll_y: f32, line_height: f32) -> Option<InputEvent> {
    if raw_scroll_y == 0.0 || line_height <= 0.0 {
        return None;
    }
    Some(InputEvent::Wheel {
        lines: -raw_scroll_y / line_height,
    })
}

fn translate_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<KeyEvent> {
    let mods = Modifiers {
        shift: modifiers.shift,
        control: modifiers.ctrl,
        alt: modifiers.alt,
        command: modifiers.mac_cmd,
    };
    let key = match key {
        egui::Key::Backspace => Key::Backspace,
        egui::Key::Delete => Key::Delete,
        egui::Key::Enter => Key::Return,
        egui::Key::ArrowLeft => Key::Left,
        egui::Key::ArrowRight => Key::Right,
        egui::Key::ArrowUp => Key::Up,
        egui::Key::ArrowDown => Key::Down,
        egui::Key::Escape => Key::Escape,
        egui::Key::A if mods.shortcut() => Key::Char('a'),
        egui::Key::C if mods.shortcut() => Key::Char('c'),
        egui::Key::X if mods.shortcut() => Key::Char('x'),
        egui::Key::V if mods.shortcut() => Key::Char('v'),
        _ => return None,
    };
    Some(KeyEvent::new(key, mods))
}
