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

//! Bank manifest configuration.
//!
//! A manifest describes one bank build: the WAV inputs in slot order and the
//! per-file cap on embedded audio. Slot order is bank index order, so the
//! first entry becomes sample index 0.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::{DEFAULT_MAX_SECONDS, MAX_FILES};

/// Typed error for manifest load/parse/validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Manifest load error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("Manifest lists no samples")]
    Empty,

    #[error("Manifest lists {0} samples, the limit is {limit}", limit = MAX_FILES)]
    TooManySamples(usize),

    #[error("max_seconds must be at least 1")]
    InvalidMaxSeconds,
}

/// A YAML representation of a bank build.
#[derive(Deserialize, Clone, Serialize, Debug)]
pub struct BankManifest {
    /// The WAV inputs, in slot order.
    samples: Vec<String>,

    /// Maximum seconds of audio to embed per file.
    #[serde(default = "default_max_seconds")]
    max_seconds: u32,
}

fn default_max_seconds() -> u32 {
    DEFAULT_MAX_SECONDS
}

impl BankManifest {
    /// Loads and validates a manifest from a YAML file.
    pub fn from_file(path: &Path) -> Result<BankManifest, ManifestError> {
        let manifest: BankManifest = serde_yml::from_str(&fs::read_to_string(path)?)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.samples.is_empty() {
            return Err(ManifestError::Empty);
        }
        if self.samples.len() > MAX_FILES {
            return Err(ManifestError::TooManySamples(self.samples.len()));
        }
        if self.max_seconds == 0 {
            return Err(ManifestError::InvalidMaxSeconds);
        }
        Ok(())
    }

    /// The WAV inputs, in slot order.
    pub fn sample_files(&self) -> &[String] {
        &self.samples
    }

    /// The per-file cap on embedded audio, in seconds.
    pub fn max_seconds(&self) -> u32 {
        self.max_seconds
    }

    /// Resolves the inputs against a base path (normally the manifest's
    /// directory). Absolute entries are kept as-is.
    pub fn resolved_files(&self, base_path: &Path) -> Vec<PathBuf> {
        self.samples
            .iter()
            .map(|file| {
                let path = Path::new(file);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base_path.join(path)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    fn write_manifest(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_from_file() {
        let (_dir, path) = write_manifest(
            r#"
samples:
  - kick.wav
  - snare.wav
max_seconds: 5
"#,
        );

        let manifest = BankManifest::from_file(&path).unwrap();
        assert_eq!(manifest.sample_files(), &["kick.wav", "snare.wav"]);
        assert_eq!(manifest.max_seconds(), 5);
    }

    #[test]
    fn test_max_seconds_default() {
        let (_dir, path) = write_manifest("samples:\n  - kick.wav\n");
        let manifest = BankManifest::from_file(&path).unwrap();
        assert_eq!(manifest.max_seconds(), DEFAULT_MAX_SECONDS);
    }

    #[test]
    fn test_rejects_empty() {
        let (_dir, path) = write_manifest("samples: []\n");
        assert!(matches!(
            BankManifest::from_file(&path),
            Err(ManifestError::Empty)
        ));
    }

    #[test]
    fn test_rejects_too_many() {
        let mut contents = String::from("samples:\n");
        for i in 0..MAX_FILES + 1 {
            contents.push_str(&format!("  - sample{}.wav\n", i));
        }
        let (_dir, path) = write_manifest(&contents);
        assert!(matches!(
            BankManifest::from_file(&path),
            Err(ManifestError::TooManySamples(n)) if n == MAX_FILES + 1
        ));
    }

    #[test]
    fn test_rejects_zero_max_seconds() {
        let (_dir, path) = write_manifest("samples:\n  - kick.wav\nmax_seconds: 0\n");
        assert!(matches!(
            BankManifest::from_file(&path),
            Err(ManifestError::InvalidMaxSeconds)
        ));
    }

    #[test]
    fn test_resolved_files() {
        let (_dir, path) = write_manifest("samples:\n  - kick.wav\n  - /abs/snare.wav\n");
        let manifest = BankManifest::from_file(&path).unwrap();

        let resolved = manifest.resolved_files(Path::new("/base"));
        assert_eq!(resolved[0], PathBuf::from("/base/kick.wav"));
        assert_eq!(resolved[1], PathBuf::from("/abs/snare.wav"));
    }
}
