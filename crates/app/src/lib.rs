//! rea-tts: a small text-to-speech front-end.
//!
//! The interesting code lives in the workspace's widget crates; this crate is
//! the shell around them: an eframe/egui window, translation of raw egui
//! events into widget input events, the system clipboard, speech synthesis
//! glue, and config persistence.

mod app;
mod clipboard;
mod egui_input;
mod egui_metrics;
mod egui_surface;

pub mod config;
pub mod speech;
pub mod wav;

use app::ReaTtsApp;
use config::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("rea_tts=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::load();
    let app = ReaTtsApp::new(config.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("REA TTS"),
        ..Default::default()
    };

    eframe::run_native("REA TTS", options, Box::new(|_cc| Ok(Box::new(app))))
}
