//! Speech synthesis and playback glue.
//!
//! The synthesis engine sits behind the [`Synthesizer`] trait so the pipeline
//! can be exercised in tests without an engine installed. The default
//! implementation shells out to `espeak-ng` and decodes the WAV stream it
//! writes to stdout.
//!
//! Every error here is reported to the caller, logged by the shell, and
//! otherwise ignored; a failed speech request never disturbs the UI.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::{debug, info};

use crate::wav::{self, Audio, WavError};

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("no text to speak")]
    EmptyText,
    #[error("no language code")]
    EmptyLanguage,
    #[error("could not run `{command}`: {source}")]
    EngineSpawn {
        command: String,
        source: std::io::Error,
    },
    #[error("speech engine failed: {0}")]
    EngineFailed(String),
    #[error("bad audio from engine: {0}")]
    BadAudio(#[from] WavError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Turns text in a given language into audio.
pub trait Synthesizer {
    fn synthesize(&self, lang: &str, text: &str) -> Result<Audio, SpeechError>;
}

/// Synthesis via the `espeak-ng` command-line engine.
pub struct EspeakSynthesizer {
    command: String,
}

impl EspeakSynthesizer {
    pub fn new() -> Self {
        Self {
            command: "espeak-ng".to_string(),
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer for EspeakSynthesizer {
    fn synthesize(&self, lang: &str, text: &str) -> Result<Audio, SpeechError> {
        debug!(%lang, chars = text.chars().count(), "synthesizing");
        let output = Command::new(&self.command)
            .args(["-v", lang, "--stdout", text])
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SpeechError::EngineSpawn {
                command: self.command.clone(),
                source,
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SpeechError::EngineFailed(stderr));
        }
        Ok(wav::decode(&output.stdout)?)
    }
}

fn check_inputs(lang: &str, text: &str) -> Result<(), SpeechError> {
    if text.is_empty() {
        return Err(SpeechError::EmptyText);
    }
    if lang.is_empty() {
        return Err(SpeechError::EmptyLanguage);
    }
    Ok(())
}

/// A filesystem-safe clip name derived from the spoken text: runs of
/// non-alphanumeric characters collapse to underscores, empty results become
/// `clip`.
pub fn sanitize_clip_name(text: &str) -> String {
    let mut name = String::new();
    let mut gap = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if gap && !name.is_empty() {
                name.push('_');
            }
            gap = false;
            name.push(ch);
        } else {
            gap = true;
        }
    }
    if name.is_empty() {
        "clip".to_string()
    } else {
        name
    }
}

fn unique_suffix() -> String {
    // wall clock plus a process-local counter, so clips saved back-to-back
    // still get distinct names
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:08x}", nanos ^ (n << 48))
}

/// Synthesizes and writes a clip into `dir`, returning the file path. Does
/// not play it.
pub fn save_clip(
    synth: &dyn Synthesizer,
    lang: &str,
    text: &str,
    dir: &Path,
) -> Result<PathBuf, SpeechError> {
    check_inputs(lang, text)?;
    let audio = synth.synthesize(lang, text)?;
    let name = format!("{}_{}.wav", sanitize_clip_name(text), unique_suffix());
    let path = dir.join(name);
    std::fs::write(&path, wav::encode(&audio))?;
    info!(path = %path.display(), secs = audio.duration_secs(), "clip saved");
    Ok(path)
}

/// Synthesizes into a scratch file and starts playback.
pub fn speak_clip(synth: &dyn Synthesizer, lang: &str, text: &str) -> Result<(), SpeechError> {
    check_inputs(lang, text)?;
    let audio = synth.synthesize(lang, text)?;
    let path = std::env::temp_dir().join("rea-tts_temp.wav");
    std::fs::write(&path, wav::encode(&audio))?;
    play(&path)
}

/// Starts the platform audio player on `path` without waiting for it.
pub fn play(path: &Path) -> Result<(), SpeechError> {
    let (command, args): (&str, Vec<String>) = if cfg!(target_os = "windows") {
        (
            "powershell",
            vec![
                "-c".to_string(),
                format!("(New-Object Media.SoundPlayer '{}').PlaySync()", path.display()),
            ],
        )
    } else if cfg!(target_os = "macos") {
        ("afplay", vec![path.display().to_string()])
    } else {
        ("aplay", vec![path.display().to_string()])
    };
    Command::new(command)
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| SpeechError::EngineSpawn {
            command: command.to_string(),
            source,
        })?;
    Ok(())
}
