//! Error types for the fallible edges of the crate
//!
//! Calculation results never surface here: incomplete assignments, invalid
//! resistances and table misses are reported as data by the calc module.

use std::path::PathBuf;

use crate::value::ParseValueError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("unknown band role '{0}' (expected digit1, digit2, digit3, multiplier, tolerance or tcr)")]
    UnknownRole(String),
    #[error("unknown series '{0}' (expected e6, e12, e24, e48 or e96)")]
    UnknownSeries(String),
    #[error("unsupported band count {0} (expected 4, 5 or 6)")]
    BandCount(usize),
    #[error("invalid band count '{0}' (expected 4, 5 or 6)")]
    InvalidBandCount(String),
    #[error("--bands {expected} does not match the {found} colors given")]
    BandMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Value(#[from] ParseValueError),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
