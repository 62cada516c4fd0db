//! Integration tests for wheel scrolling, slider dragging, and
//! caret-following during vertical navigation.

use std::time::Instant;

use rea_tts_input::{InputEvent, Key, KeyEvent, Modifiers};
use rea_tts_widget::{
    FrameContext, MemoryClipboard, Rect, TextArea, TextMetrics, SCROLLBAR_WIDTH,
};

/// Fixed-advance metrics: 8 px per character, 16 px lines.
struct MonoMetrics;

impl TextMetrics for MonoMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 8.0
    }

    fn line_height(&self) -> f32 {
        16.0
    }
}

/// 5 visible lines: inner height (h - 6) / 16 = 5.
const AREA: Rect = Rect {
    x: 50.0,
    y: 85.0,
    w: 500.0,
    h: 86.0,
};

/// Ten short paragraphs, so total = 10 wrapped lines.
fn ten_lines() -> String {
    (0..10).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
}

fn area_with(initial: &str) -> (TextArea, MemoryClipboard) {
    let mut area = TextArea::new(AREA, initial);
    area.set_focused(true);
    let mut clip = MemoryClipboard::new();
    let ctx = FrameContext::new(Instant::now(), &MonoMetrics, &mut clip);
    area.advance_frame(&ctx);
    (area, clip)
}

fn send(area: &mut TextArea, clip: &mut MemoryClipboard, event: InputEvent) {
    let mut ctx = FrameContext::new(Instant::now(), &MonoMetrics, clip);
    area.handle_event(&event, &mut ctx);
}

fn frame(area: &mut TextArea, clip: &mut MemoryClipboard) {
    let ctx = FrameContext::new(Instant::now(), &MonoMetrics, clip);
    area.advance_frame(&ctx);
}

// ==================== Wheel ====================

#[test]
fn test_wheel_scrolls_by_lines_and_clamps() {
    let (mut area, mut clip) = area_with(&ten_lines());
    send(&mut area, &mut clip, InputEvent::Wheel { lines: 1.0 });
    assert_eq!(area.scroll_offset(), 1);
    send(&mut area, &mut clip, InputEvent::Wheel { lines: 100.0 });
    // 10 lines, 5 visible: the ceiling is 5
    assert_eq!(area.scroll_offset(), 5);
    send(&mut area, &mut clip, InputEvent::Wheel { lines: -100.0 });
    assert_eq!(area.scroll_offset(), 0);
}

#[test]
fn test_wheel_ignored_while_unfocused() {
    let (mut area, mut clip) = area_with(&ten_lines());
    area.set_focused(false);
    send(&mut area, &mut clip, InputEvent::Wheel { lines: 2.0 });
    assert_eq!(area.scroll_offset(), 0);
}

#[test]
fn test_wheel_on_short_content_is_noop() {
    let (mut area, mut clip) = area_with("just one line");
    send(&mut area, &mut clip, InputEvent::Wheel { lines: 3.0 });
    assert_eq!(area.scroll_offset(), 0);
}

#[test]
fn test_scroll_clamps_when_content_shrinks() {
    let (mut area, mut clip) = area_with(&ten_lines());
    send(&mut area, &mut clip, InputEvent::Wheel { lines: 5.0 });
    assert_eq!(area.scroll_offset(), 5);
    // cut the document down to two lines and run a frame
    area.buffer_mut().select_all();
    area.buffer_mut().delete_selection();
    area.buffer_mut().insert_str("one\ntwo");
    frame(&mut area, &mut clip);
    assert_eq!(area.scroll_offset(), 0);
}

// ==================== Slider drag ====================

#[test]
fn test_slider_drag_scrolls_proportionally() {
    let (mut area, mut clip) = area_with(&ten_lines());
    // track spans the widget height on its right edge; at offset 0 the
    // slider (height 86 * 5/10 = 43) sits at the top
    let slider_x = AREA.x + AREA.w - SCROLLBAR_WIDTH / 2.0;
    send(
        &mut area,
        &mut clip,
        InputEvent::PointerDown {
            x: slider_x,
            y: AREA.y + 10.0,
        },
    );
    // drag to the bottom of the track: slider top travels 86 - 43 = 43 px
    send(
        &mut area,
        &mut clip,
        InputEvent::PointerMoved {
            x: slider_x,
            y: AREA.y + 10.0 + 43.0,
        },
    );
    assert_eq!(area.scroll_offset(), 5);
    // halfway back up
    send(
        &mut area,
        &mut clip,
        InputEvent::PointerMoved {
            x: slider_x,
            y: AREA.y + 10.0 + 21.5,
        },
    );
    assert_eq!(area.scroll_offset(), 3);
}

#[test]
fn test_drag_stops_after_pointer_up() {
    let (mut area, mut clip) = area_with(&ten_lines());
    let slider_x = AREA.x + AREA.w - SCROLLBAR_WIDTH / 2.0;
    send(
        &mut area,
        &mut clip,
        InputEvent::PointerDown {
            x: slider_x,
            y: AREA.y + 10.0,
        },
    );
    send(&mut area, &mut clip, InputEvent::PointerUp);
    send(
        &mut area,
        &mut clip,
        InputEvent::PointerMoved {
            x: slider_x,
            y: AREA.y + 60.0,
        },
    );
    assert_eq!(area.scroll_offset(), 0);
}

#[test]
fn test_pointer_moves_without_drag_do_nothing() {
    let (mut area, mut clip) = area_with(&ten_lines());
    send(
        &mut area,
        &mut clip,
        InputEvent::PointerMoved { x: 200.0, y: 120.0 },
    );
    assert_eq!(area.scroll_offset(), 0);
    assert_eq!(area.buffer().cursor(), area.buffer().len());
}

// ==================== Caret following ====================

#[test]
fn test_down_arrow_scrolls_caret_into_view() {
    let (mut area, mut clip) = area_with(&ten_lines());
    area.buffer_mut().set_cursor(0);
    for _ in 0..6 {
        send(
            &mut area,
            &mut clip,
            InputEvent::Key(KeyEvent::new(Key::Down, Modifiers::default())),
        );
    }
    // caret on line 6; lines 2..7 visible
    assert_eq!(area.scroll_offset(), 2);
}

#[test]
fn test_up_arrow_scrolls_back_up() {
    let (mut area, mut clip) = area_with(&ten_lines());
    send(&mut area, &mut clip, InputEvent::Wheel { lines: 5.0 });
    // caret sits on the last line already; walk it to the top
    for _ in 0..9 {
        send(
            &mut area,
            &mut clip,
            InputEvent::Key(KeyEvent::new(Key::Up, Modifiers::default())),
        );
    }
    assert_eq!(area.scroll_offset(), 0);
    // column 6 preserved all the way up to the first line
    assert_eq!(area.buffer().cursor(), 6);
}
