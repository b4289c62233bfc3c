//! CLI mode implementations

mod colors;
mod decode;
mod encode;
mod format;

pub use colors::run_colors;
pub use decode::{DecodeOptions, run_decode};
pub use encode::run_encode;
pub use format::run_format;

use std::path::Path;

use resband::Error;

/// Read resistance values from a file: one per line, blank lines and `#` comments skipped
pub fn read_values(path: &Path) -> Result<Vec<String>, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
