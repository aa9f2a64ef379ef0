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

//! WAV to embedded payload conversion.
//!
//! This module provides:
//! - Reading mono 16-bit PCM WAV files into raw payloads, capped in length
//! - Emitting payloads as comma-separated `0x??` hex text
//! - Generating a complete bank (payload files plus the aggregating Rust
//!   source) from a set of payloads

mod error;
mod table;
mod wav;

pub use error::ConvertError;
pub use table::{generate_bank, hex_table, write_hex_file, GeneratedBank};
pub use wav::{read_payload, WavPayload, DEFAULT_MAX_SECONDS};

/// The maximum number of WAV files a single bank build will accept.
pub const MAX_FILES: usize = 18;
