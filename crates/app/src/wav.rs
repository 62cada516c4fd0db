//! Minimal PCM16 mono WAV encoding and decoding.
//!
//! Just enough RIFF handling for the speech pipeline: the engine hands back a
//! PCM16 WAV stream which is decoded here, and synthesized clips are written
//! back out with [`encode`]. Streaming engines write a placeholder RIFF size,
//! so chunk lengths are clamped to the bytes actually present.

use thiserror::Error;

/// A mono audio clip.
#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl Audio {
    /// Clip duration in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

#[derive(Debug, Error)]
pub enum WavError {
    #[error("file truncated")]
    Truncated,
    #[error("not a RIFF/WAVE file")]
    BadHeader,
    #[error("unsupported wav format: {0}")]
    Unsupported(String),
    #[error("missing {0} chunk")]
    MissingChunk(&'static str),
}

/// Encodes `audio` as a PCM16 mono WAV file.
pub fn encode(audio: &Audio) -> Vec<u8> {
    let data_len = (audio.samples.len() * 2) as u32;
    let byte_rate = audio.sample_rate * 2;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&audio.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in &audio.samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Decodes a PCM16 mono WAV file.
pub fn decode(bytes: &[u8]) -> Result<Audio, WavError> {
    if bytes.len() < 12 {
        return Err(WavError::Truncated);
    }
    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(WavError::BadHeader);
    }

    let mut sample_rate = None;
    let mut data: Option<&[u8]> = None;
    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let id = &bytes[pos..pos + 4];
        let declared = u32::from_le_bytes([
            bytes[pos + 4],
            bytes[pos + 5],
            bytes[pos + 6],
            bytes[pos + 7],
        ]) as usize;
        let body_start = pos + 8;
        // streaming writers leave the size fields at a placeholder value
        let body_len = declared.min(bytes.len() - body_start);
        let body = &bytes[body_start..body_start + body_len];

        match id {
            b"fmt " => {
                if body.len() < 16 {
                    return Err(WavError::Truncated);
                }
                let format = u16::from_le_bytes([body[0], body[1]]);
                if format != 1 {
                    return Err(WavError::Unsupported(format!("audio format {format}")));
                }
                let channels = u16::from_le_bytes([body[2], body[3]]);
                if channels != 1 {
                    return Err(WavError::Unsupported(format!("{channels} channels")));
                }
                let bits = u16::from_le_bytes([body[14], body[15]]);
                if bits != 16 {
                    return Err(WavError::Unsupported(format!("{bits} bits per sample")));
                }
                sample_rate = Some(u32::from_le_bytes([body[4], body[5], body[6], body[7]]));
            }
            b"data" => data = Some(body),
            _ => {}
        }
        // chunk bodies are word-aligned
        pos = body_start + body_len + (body_len & 1);
    }

    let sample_rate = sample_rate.ok_or(WavError::MissingChunk("fmt "))?;
    let data = data.ok_or(WavError::MissingChunk("data"))?;
    let samples = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(Audio {
        samples,
        sample_rate,
    })
}
