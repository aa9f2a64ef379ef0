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
use super::MAX_FILES;

/// Typed error for WAV conversion and bank generation. Compressed WAV input
/// surfaces as a `Wav` decode error from hound.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Stereo input is not supported, use mono ({channels} channels)")]
    UnsupportedChannels { channels: u16 },

    #[error("Only 16-bit integer PCM is supported, got {bits}-bit {format:?}")]
    UnsupportedSampleFormat {
        bits: u16,
        format: hound::SampleFormat,
    },

    #[error("No input files given")]
    NoInputFiles,

    #[error("Too many input files ({0}), the limit is {limit}", limit = MAX_FILES)]
    TooManyFiles(usize),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
