//! Resistor color band encoding and decoding
//!
//! Converts an ordered sequence of 4, 5 or 6 band colors into resistance,
//! tolerance and temperature coefficient, and maps a resistance back onto
//! the best-fitting digit and multiplier bands.

pub mod advisory;
pub mod calc;
pub mod color;
pub mod error;
pub mod value;

pub use calc::{
    CalculationResult, INVALID_BANDS, Normalized, PLACEHOLDER, decode, encode, format_resistance,
    merge_decoded, normalize,
};
pub use color::{BandCount, BandRole, Color, ColorEntry, DisplayColor, colors_for_role};
pub use error::Error;
