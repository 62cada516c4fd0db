//! The application shell: window layout, per-frame event routing, and
//! button command dispatch.
//!
//! Both input boxes are instances of the same widget; the language box is
//! simply a short one. Per frame, every translated input event is fed to
//! every widget in order, then each widget gets one `advance_frame` and one
//! `render` call. Button activation is resolved from pointer-down events and
//! dispatched synchronously after the widgets have run.

use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;
use rea_tts_input::InputEvent;
use rea_tts_widget::{
    palette, Button, FrameContext, Rect, Surface, TextArea, TextMetrics, CURSOR_BLINK_INTERVAL,
};
use tracing::{info, warn};

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::egui_input::{translate_events, wheel_event};
use crate::egui_metrics::EguiMetrics;
use crate::egui_surface::EguiSurface;
use crate::speech::{self, EspeakSynthesizer, Synthesizer};

const FONT_SIZE: f32 = 20.0;
const LANG_BOX: Rect = Rect {
    x: 200.0,
    y: 25.0,
    w: 200.0,
    h: 34.0,
};
const TEXT_BOX: Rect = Rect {
    x: 50.0,
    y: 85.0,
    w: 500.0,
    h: 180.0,
};
const SPEAK_BUTTON: Rect = Rect {
    x: 150.0,
    y: 280.0,
    w: 120.0,
    h: 40.0,
};
const SAVE_BUTTON: Rect = Rect {
    x: 330.0,
    y: 280.0,
    w: 120.0,
    h: 40.0,
};
const TEXT_BOX_PROMPT: &str = "พิมพ์ข้อความที่นี่";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellCommand {
    Speak,
    Save,
}

pub struct ReaTtsApp {
    lang_box: TextArea,
    text_box: TextArea,
    speak_button: Button,
    save_button: Button,
    clipboard: SystemClipboard,
    synthesizer: Box<dyn Synthesizer>,
    save_dir: PathBuf,
    config: Config,
}

impl ReaTtsApp {
    pub fn new(config: Config) -> Self {
        Self::with_synthesizer(config, Box::new(EspeakSynthesizer::new()), PathBuf::from("."))
    }

    fn with_synthesizer(
        config: Config,
        synthesizer: Box<dyn Synthesizer>,
        save_dir: PathBuf,
    ) -> Self {
        Self {
            lang_box: TextArea::new(LANG_BOX, &config.language_code),
            text_box: TextArea::new(TEXT_BOX, TEXT_BOX_PROMPT),
            speak_button: Button::new(SPEAK_BUTTON, "Speak"),
            save_button: Button::new(SAVE_BUTTON, "Save"),
            clipboard: SystemClipboard::new(),
            synthesizer,
            save_dir,
            config,
        }
    }

    /// Resolves a pointer-down against the two buttons.
    fn command_for_events(&self, events: &[InputEvent]) -> Option<ShellCommand> {
        for event in events {
            if let InputEvent::PointerDown { x, y } = event {
                if self.speak_button.hit(*x, *y) {
                    return Some(ShellCommand::Speak);
                }
                if self.save_button.hit(*x, *y) {
                    return Some(ShellCommand::Save);
                }
            }
        }
        None
    }

    fn dispatch(&mut self, command: ShellCommand) {
        let lang = self.lang_box.text();
        let text = self.text_box.text();
        let result = match command {
            ShellCommand::Speak => {
                speech::speak_clip(self.synthesizer.as_ref(), &lang, &text)
            }
            ShellCommand::Save => {
                speech::save_clip(self.synthesizer.as_ref(), &lang, &text, &self.save_dir)
                    .and_then(|path| {
                        info!(path = %path.display(), "clip saved");
                        speech::play(&path)
                    })
            }
        };
        if let Err(err) = result {
            warn!(%err, "speech request failed");
        }
    }
}

impl eframe::App for ReaTtsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let font = egui::FontId::proportional(FONT_SIZE);
        let background = egui::Color32::from_rgb(
            palette::WINDOW_BACKGROUND.r,
            palette::WINDOW_BACKGROUND.g,
            palette::WINDOW_BACKGROUND.b,
        );

        let screen = ctx.screen_rect();
        self.config.window_width = screen.width();
        self.config.window_height = screen.height();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (raw_events, raw_scroll) =
                    ctx.input(|input| (input.events.clone(), input.raw_scroll_delta.y));
                let metrics = EguiMetrics::new(ctx, font.clone());

                let mut events = translate_events(&raw_events);
                if let Some(wheel) = wheel_event(raw_scroll, metrics.line_height()) {
                    events.push(wheel);
                }
                let pending = self.command_for_events(&events);

                {
                    let mut frame_ctx =
                        FrameContext::new(Instant::now(), &metrics, &mut self.clipboard);
                    for event in &events {
                        self.lang_box.handle_event(event, &mut frame_ctx);
                        self.text_box.handle_event(event, &mut frame_ctx);
                    }
                    self.lang_box.advance_frame(&frame_ctx);
                    self.text_box.advance_frame(&frame_ctx);

                    let mut surface = EguiSurface::new(ui.painter(), font.clone());
                    surface.draw_text(50.0, 30.0, "Language Code:", palette::TEXT);
                    surface.draw_text(50.0, 60.0, "Text to Speak:", palette::TEXT);
                    self.lang_box.render(&mut surface, &frame_ctx);
                    self.text_box.render(&mut surface, &frame_ctx);
                    self.speak_button.render(&mut surface);
                    self.save_button.render(&mut surface);
                }

                if let Some(command) = pending {
                    self.dispatch(command);
                }
            });

        // keep the caret blinking while idle
        ctx.request_repaint_after(CURSOR_BLINK_INTERVAL);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.language_code = self.lang_box.text();
        self.config.save();
    }
}
