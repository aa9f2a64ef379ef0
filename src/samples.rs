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

//! The embedded sample bank.
//!
//! This module provides:
//! - The payloads baked into the binary (`data`, regenerable with `kick generate`)
//! - Bounds-checked, read-only access to them by index
//!
//! The payload encoding is opaque here. The conversion tools guarantee mono
//! 16-bit little-endian PCM, but nothing in the bank depends on that.

mod bank;
mod data;
mod error;

pub use bank::{bank, Sample, SampleBank, SAMPLE_COUNT};
pub use error::SampleError;
