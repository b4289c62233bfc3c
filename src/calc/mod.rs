//! Band encoding, decoding and formatting

mod decode;
mod encode;
mod format;
mod normalize;

pub use decode::{decode, merge_decoded};
pub use encode::{CalculationResult, INVALID_BANDS, encode};
pub use format::{PLACEHOLDER, format_resistance};
pub use normalize::{MAX_MULTIPLIER_EXP, MIN_MULTIPLIER_EXP, Normalized, normalize};
