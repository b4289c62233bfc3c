//! Resistance to band colors

use log::debug;

use super::normalize::{Normalized, normalize};
use crate::color::{BandCount, Color, ColorEntry, digit_entry, multiplier_entry, unset};

/// Best-fit band colors for `resistance`.
///
/// Only digit and multiplier positions are filled; tolerance and TCR stay
/// unset. Negative, NaN and infinite input yields all-unset bands. A digit
/// or power with no table entry leaves just that position unset.
pub fn decode(resistance: f64, band_count: BandCount) -> Vec<&'static ColorEntry> {
    let mut bands = vec![unset(); band_count.len()];

    if !resistance.is_finite() || resistance < 0.0 {
        debug!("cannot decode resistance {}", resistance);
        return bands;
    }

    let digit_count = band_count.digit_count();
    let multiplier_index = band_count.multiplier_index();

    if resistance == 0.0 {
        bands[..digit_count].fill(Color::Black.entry());
        bands[multiplier_index] = multiplier_entry(0).unwrap_or_else(unset);
        return bands;
    }

    let Normalized { digits, power } = normalize(resistance, digit_count);

    for (band, ch) in bands.iter_mut().zip(digits.chars()) {
        *band = ch
            .to_digit(10)
            .and_then(|d| digit_entry(d as u8))
            .unwrap_or_else(unset);
    }
    bands[multiplier_index] = multiplier_entry(power).unwrap_or_else(|| {
        debug!("no multiplier color for 10^{}", power);
        unset()
    });

    bands
}

/// Decoded digit and multiplier bands, with tolerance and TCR taken from `previous`.
///
/// Positions missing from `previous` are left unset.
pub fn merge_decoded(
    band_count: BandCount,
    decoded: &[&'static ColorEntry],
    previous: &[&'static ColorEntry],
) -> Vec<&'static ColorEntry> {
    let multiplier_index = band_count.multiplier_index();
    (0..band_count.len())
        .map(|i| {
            let source = if i <= multiplier_index {
                decoded
            } else {
                previous
            };
            source.get(i).copied().unwrap_or_else(unset)
        })
        .collect()
}
