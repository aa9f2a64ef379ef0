// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::path::Path;
use std::time::Duration;

use hound::{SampleFormat, WavReader};
use tracing::debug;

use super::error::ConvertError;

/// Default cap on embedded audio per file, in seconds. Keeps a stray long
/// recording from blowing up the data segment on the target.
pub const DEFAULT_MAX_SECONDS: u32 = 20;

/// The raw payload extracted from a WAV file: mono 16-bit little-endian PCM
/// bytes, exactly as they will be embedded.
pub struct WavPayload {
    bytes: Vec<u8>,
    sample_rate: u32,
}

impl WavPayload {
    /// The payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The source sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The number of frames in the payload. Mono 16-bit, so two bytes each.
    pub fn frames(&self) -> usize {
        self.bytes.len() / 2
    }

    /// The payload duration at the source sample rate.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }
}

/// Reads the payload of a WAV file, keeping at most `max_seconds` of audio.
/// Only mono, uncompressed, 16-bit integer PCM input is accepted.
pub fn read_payload<P: AsRef<Path>>(path: P, max_seconds: u32) -> Result<WavPayload, ConvertError> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(ConvertError::UnsupportedChannels {
            channels: spec.channels,
        });
    }
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(ConvertError::UnsupportedSampleFormat {
            bits: spec.bits_per_sample,
            format: spec.sample_format,
        });
    }

    let max_frames = spec.sample_rate as u64 * max_seconds as u64;
    let frames = (reader.duration() as u64).min(max_frames) as usize;

    let mut bytes = Vec::with_capacity(frames * 2);
    for frame in reader.samples::<i16>().take(frames) {
        bytes.extend_from_slice(&frame?.to_le_bytes());
    }

    let payload = WavPayload {
        bytes,
        sample_rate: spec.sample_rate,
    };

    debug!(
        path = ?path.as_ref(),
        sample_rate = payload.sample_rate,
        frames = payload.frames(),
        bytes = payload.bytes.len(),
        "Read WAV payload"
    );

    Ok(payload)
}
