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

/// Returns the file name portion of a path for log and console output.
pub fn filename_display(path: &Path) -> &str {
    path.file_name().and_then(|f| f.to_str()).unwrap_or("<unnamed>")
}

/// Returns true if the path carries a .wav extension, in any case.
pub fn has_wav_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
}

/// Outputs the given duration as seconds with two decimals.
pub fn duration_seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}
