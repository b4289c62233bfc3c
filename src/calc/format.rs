//! Human-readable resistance with SI suffixes

use crate::color::pow10;

/// Shown for absent or unrepresentable values
pub const PLACEHOLDER: &str = "-";

const UNITS: [&str; 4] = ["Ω", "kΩ", "MΩ", "GΩ"];

/// Format a resistance, e.g. `4.7 kΩ`.
///
/// Values of 1 Ω and above are scaled by 1000 per suffix up to GΩ and
/// rounded to 3 significant digits. Values below 1 Ω are printed as-is.
pub fn format_resistance(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite() && *v >= 0.0) else {
        return PLACEHOLDER.to_string();
    };

    if value == 0.0 {
        return "0 Ω".to_string();
    }
    if value < 1.0 {
        return format!("{} {}", value, UNITS[0]);
    }

    let mut scaled = value;
    let mut unit = 0;
    while scaled >= 1000.0 && unit < UNITS.len() - 1 {
        scaled /= 1000.0;
        unit += 1;
    }

    format!("{} {}", significant_text(scaled), UNITS[unit])
}

/// Scaled values from this magnitude on print in exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// 3 significant digits without trailing zeros, e.g. `4.7`, `100`, `1.23e24`
fn significant_text(value: f64) -> String {
    if value < EXPONENT_THRESHOLD {
        return round_significant(value, 3).to_string();
    }
    let text = format!("{:.2e}", value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            format!("{}e{}", mantissa, exp)
        }
        None => text,
    }
}

/// Round a positive value to `digits` significant digits
pub(crate) fn round_significant(value: f64, digits: i32) -> f64 {
    let magnitude = value.log10().floor() as i32;
    let shift = digits - 1 - magnitude;
    if shift >= 0 {
        let factor = pow10(shift);
        (value * factor).round() / factor
    } else {
        let factor = pow10(-shift);
        (value / factor).round() * factor
    }
}
