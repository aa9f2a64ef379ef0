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
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{crate_version, Parser, Subcommand};
use tracing::warn;

use kick::config::BankManifest;
use kick::convert::{self, ConvertError, DEFAULT_MAX_SECONDS};
use kick::samples;
use kick::util;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Drum sample bank tools."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists the samples embedded in this binary.
    Samples {},
    /// Writes the raw payload of an embedded sample to disk.
    Export {
        /// The bank index of the sample to export.
        index: usize,
        /// The path to write the payload to.
        path: String,
    },
    /// Converts WAV files to comma-separated 0x?? hex text.
    Hex {
        /// The WAV files to convert.
        #[arg(required = true)]
        files: Vec<String>,
        /// Output directory for the generated .txt files. Defaults to each input's directory.
        #[arg(short, long)]
        output_dir: Option<String>,
        /// Maximum seconds of audio to keep per file.
        #[arg(long)]
        max_seconds: Option<u32>,
    },
    /// Builds bank payload files and the bank source file from a manifest.
    Generate {
        /// The path to the bank manifest.
        manifest: String,
        /// The directory to write the generated bank into.
        #[arg(short, long)]
        output_dir: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Samples {} => {
            let bank = samples::bank();
            print!("{}", bank);

            let total: usize = bank.iter().map(|sample| sample.byte_len()).sum();
            println!("\nTotal: {} bytes ({} KiB)", total, total / 1024);
        }
        Commands::Export { index, path } => {
            let data = samples::bank().data(index)?;
            fs::write(&path, data)?;
            println!("Wrote {} bytes to {}.", data.len(), path);
        }
        Commands::Hex {
            files,
            output_dir,
            max_seconds,
        } => {
            if files.len() > convert::MAX_FILES {
                return Err(Box::new(ConvertError::TooManyFiles(files.len())));
            }

            // Validate all inputs up front so a bad file never leaves a
            // partially converted batch behind.
            for file in files.iter() {
                let path = Path::new(file);
                if !path.exists() {
                    return Err(format!("File not found: {}", file).into());
                }
                if !util::has_wav_extension(path) {
                    warn!(file = %file, "Input does not have a .wav extension");
                }
            }

            let max_seconds = max_seconds.unwrap_or(DEFAULT_MAX_SECONDS);
            for file in files.iter() {
                let in_path = PathBuf::from(file);
                let payload = convert::read_payload(&in_path, max_seconds)?;

                let out_path = match &output_dir {
                    Some(dir) => {
                        let txt = in_path.with_extension("txt");
                        let name = txt
                            .file_name()
                            .ok_or_else(|| format!("File has no name: {}", file))?;
                        Path::new(dir).join(name)
                    }
                    None => in_path.with_extension("txt"),
                };
                if let Some(parent) = out_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                convert::write_hex_file(&payload, &out_path)?;

                println!(
                    "Wrote {} bytes ({} frames, {}) to {}.",
                    payload.bytes().len(),
                    payload.frames(),
                    util::duration_seconds(payload.duration()),
                    util::filename_display(&out_path),
                );
            }

            println!("\nSuccessfully processed {} file(s).", files.len());
        }
        Commands::Generate {
            manifest,
            output_dir,
        } => {
            let manifest_path = PathBuf::from(&manifest);
            let manifest = BankManifest::from_file(&manifest_path)?;
            let base_path = manifest_path.parent().unwrap_or(Path::new("."));

            let mut payloads = Vec::new();
            for file in manifest.resolved_files(base_path) {
                payloads.push(convert::read_payload(&file, manifest.max_seconds()).map_err(
                    |e| -> Box<dyn Error> {
                        format!("Failed to convert {}: {}", file.display(), e).into()
                    },
                )?);
            }

            let generated = convert::generate_bank(&payloads, Path::new(&output_dir))?;
            for (index, path) in generated.payload_paths.iter().enumerate() {
                println!(
                    "- {:02}: {} ({} bytes)",
                    index,
                    util::filename_display(path),
                    payloads[index].bytes().len()
                );
            }
            println!(
                "Wrote {} payload(s) and {}.",
                generated.payload_paths.len(),
                generated.source_path.display()
            );
        }
    }

    Ok(())
}
