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
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::ConvertError;
use super::wav::WavPayload;
use super::MAX_FILES;

const LICENSE_HEADER: &str = "\
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
// Generated by `kick generate`. Do not edit by hand; regenerate from the
// bank manifest instead.
";

/// The files written by a bank generation run.
pub struct GeneratedBank {
    /// The aggregating Rust source file.
    pub source_path: PathBuf,
    /// The per-slot payload files, in bank index order.
    pub payload_paths: Vec<PathBuf>,
}

/// Renders a payload as comma-separated `0x??` text, for hand-inclusion in
/// embedded tables.
pub fn hex_table(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<String>>()
        .join(",")
}

/// Writes a payload as hex text to the given path.
pub fn write_hex_file(payload: &WavPayload, out_path: &Path) -> Result<(), ConvertError> {
    fs::write(out_path, hex_table(payload.bytes()))?;
    Ok(())
}

/// Writes a complete bank into `out_dir`: one `sampleNN.pcm` per payload and
/// a `data.rs` declaring an `include_bytes!` static per slot plus the
/// aggregate table. Nothing is written until every payload has been read, so
/// a bad input never leaves a half-built bank behind.
pub fn generate_bank(
    payloads: &[WavPayload],
    out_dir: &Path,
) -> Result<GeneratedBank, ConvertError> {
    if payloads.is_empty() {
        return Err(ConvertError::NoInputFiles);
    }
    if payloads.len() > MAX_FILES {
        return Err(ConvertError::TooManyFiles(payloads.len()));
    }

    fs::create_dir_all(out_dir)?;

    let mut payload_paths = Vec::with_capacity(payloads.len());
    for (index, payload) in payloads.iter().enumerate() {
        let path = out_dir.join(format!("{}.pcm", slot_name(index)));
        fs::write(&path, payload.bytes())?;
        payload_paths.push(path);
    }

    let source_path = out_dir.join("data.rs");
    fs::write(&source_path, render_bank_source(payloads.len()))?;

    info!(
        slots = payloads.len(),
        out_dir = ?out_dir,
        "Generated sample bank"
    );

    Ok(GeneratedBank {
        source_path,
        payload_paths,
    })
}

/// The static/file name for a bank slot: `sample01` for index 0.
fn slot_name(index: usize) -> String {
    format!("sample{:02}", index + 1)
}

fn render_bank_source(count: usize) -> String {
    let mut out = String::from(LICENSE_HEADER);
    out.push('\n');

    for index in 0..count {
        let name = slot_name(index);
        out.push_str(&format!(
            "static {}: &[u8] = include_bytes!(\"{}.pcm\");\n",
            name.to_uppercase(),
            name
        ));
    }

    out.push('\n');
    out.push_str("/// The bank table. Index order matches the manifest slot order.\n");
    out.push_str(&format!("pub(super) static TABLE: [&[u8]; {}] = [\n", count));
    for row in (0..count).collect::<Vec<usize>>().chunks(8) {
        let names: Vec<String> = row
            .iter()
            .map(|index| slot_name(*index).to_uppercase())
            .collect();
        out.push_str(&format!("    {},\n", names.join(", ")));
    }
    out.push_str("];\n");

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::convert::{read_payload, DEFAULT_MAX_SECONDS};

    fn write_wav(path: &Path, frames: usize) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for i in 0..frames {
            writer.write_sample((i % 64) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_hex_table() {
        assert_eq!(hex_table(&[0x00, 0x7F, 0xFF]), "0x00,0x7F,0xFF");
        assert_eq!(hex_table(&[]), "");
    }

    #[test]
    fn test_write_hex_file() {
        let dir = tempfile::tempdir().unwrap();
        let wav_path = dir.path().join("in.wav");
        write_wav(&wav_path, 4);

        let payload = read_payload(&wav_path, DEFAULT_MAX_SECONDS).unwrap();
        let out_path = dir.path().join("in.txt");
        write_hex_file(&payload, &out_path).unwrap();

        let text = fs::read_to_string(&out_path).unwrap();
        // 8 payload bytes, 5 characters each, comma separated.
        assert_eq!(text.len(), 8 * 5 - 1);
        assert!(text.starts_with("0x"));
        assert!(!text.contains(' '));
    }

    #[test]
    fn test_generate_bank() {
        let dir = tempfile::tempdir().unwrap();
        let mut payloads = Vec::new();
        for i in 0..3 {
            let wav_path = dir.path().join(format!("in{}.wav", i));
            write_wav(&wav_path, 16 + i);
            payloads.push(read_payload(&wav_path, DEFAULT_MAX_SECONDS).unwrap());
        }

        let out_dir = dir.path().join("bank");
        let generated = generate_bank(&payloads, &out_dir).unwrap();

        assert_eq!(generated.payload_paths.len(), 3);
        for (index, path) in generated.payload_paths.iter().enumerate() {
            assert_eq!(
                fs::read(path).unwrap(),
                payloads[index].bytes(),
                "payload {} should round-trip",
                index
            );
        }

        let source = fs::read_to_string(&generated.source_path).unwrap();
        assert!(source.contains("static SAMPLE01: &[u8] = include_bytes!(\"sample01.pcm\");"));
        assert!(source.contains("static SAMPLE03: &[u8] = include_bytes!(\"sample03.pcm\");"));
        assert!(source.contains("pub(super) static TABLE: [&[u8]; 3] = ["));
        assert!(source.contains("    SAMPLE01, SAMPLE02, SAMPLE03,\n];"));
    }

    #[test]
    fn test_generate_bank_limits() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("bank");

        assert!(matches!(
            generate_bank(&[], &out_dir),
            Err(ConvertError::NoInputFiles)
        ));

        let wav_path = dir.path().join("in.wav");
        write_wav(&wav_path, 8);
        let payloads: Vec<WavPayload> = (0..MAX_FILES + 1)
            .map(|_| read_payload(&wav_path, DEFAULT_MAX_SECONDS).unwrap())
            .collect();
        assert!(matches!(
            generate_bank(&payloads, &out_dir),
            Err(ConvertError::TooManyFiles(n)) if n == MAX_FILES + 1
        ));
    }

    #[test]
    fn test_generated_source_matches_embedded_shape() {
        // The checked-in src/samples/data.rs is the output of this renderer
        // for eight slots.
        let rendered = render_bank_source(8);
        let checked_in = include_str!("../samples/data.rs");
        assert_eq!(rendered, checked_in);
    }
}
