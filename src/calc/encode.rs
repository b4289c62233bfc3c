//! Band colors to resistance, tolerance and TCR

use log::trace;

use super::format::format_resistance;
use crate::color::{BandCount, ColorEntry, scale};

/// Display string for an assignment missing a digit or the multiplier
pub const INVALID_BANDS: &str = "Invalid bands";

/// Outcome of [`encode`]. `resistance` is `None` when the assignment is incomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub resistance: Option<f64>,
    /// Percent
    pub tolerance: Option<f64>,
    /// ppm/°C
    pub tcr: Option<f64>,
    pub display: String,
}

impl CalculationResult {
    fn incomplete() -> Self {
        Self {
            resistance: None,
            tolerance: None,
            tcr: None,
            display: INVALID_BANDS.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.resistance.is_some()
    }
}

/// Compute resistance, tolerance and TCR for an ordered band assignment.
///
/// Positions past the end of `bands` count as unset.
pub fn encode(band_count: BandCount, bands: &[&ColorEntry]) -> CalculationResult {
    trace!(
        "encoding {} bands: {:?}",
        band_count,
        bands.iter().map(|e| e.name).collect::<Vec<_>>()
    );

    let band = |index: usize| bands.get(index).copied();

    let mut mantissa: u32 = 0;
    for index in 0..band_count.digit_count() {
        let Some(digit) = band(index).and_then(|e| e.digit) else {
            return CalculationResult::incomplete();
        };
        mantissa = mantissa * 10 + u32::from(digit);
    }

    let Some(exp) = band(band_count.multiplier_index()).and_then(|e| e.multiplier_exp) else {
        return CalculationResult::incomplete();
    };

    let resistance = scale(f64::from(mantissa), exp);
    let tolerance = band(band_count.tolerance_index()).and_then(|e| e.tolerance);
    let tcr = band_count
        .tcr_index()
        .and_then(band)
        .and_then(|e| e.tcr);

    CalculationResult {
        resistance: Some(resistance),
        tolerance,
        tcr,
        display: format_resistance(Some(resistance)),
    }
}
