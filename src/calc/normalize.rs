//! Split a resistance into significant digits and a multiplier power

use log::debug;

use crate::color::pow10;

/// Largest tabulated multiplier power (White, 10^9)
pub const MAX_MULTIPLIER_EXP: i32 = 9;
/// Smallest tabulated multiplier power (Silver, 10^-2)
pub const MIN_MULTIPLIER_EXP: i32 = -2;

/// Significant digits (exactly `digit_count` ASCII digits) and power of ten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub digits: String,
    pub power: i32,
}

/// Normalize a positive finite resistance to `digit_count` significant digits.
///
/// Exact trailing zeros are stripped first so round values keep the fewest
/// significant digits. Remaining excess digits are shifted into the power,
/// bounded by the tabulated multiplier range. Values below 1 Ω are scaled up
/// towards Silver; values from 1 Ω up to `10^digit_count` keep power 0.
///
/// The residual is rounded and then truncated to the leftmost digits, so a
/// round-up never carries into the power (999 with two digits is `10` x 10^1).
/// Power may still fall outside the table when stripping zeros pushed it
/// past 10^9.
pub fn normalize(resistance: f64, digit_count: usize) -> Normalized {
    let width = digit_count as i32;
    let upper = pow10(width);
    let lower = pow10(width - 1);

    let mut residual = resistance;
    let mut power = 0;

    if residual >= upper {
        while residual >= upper && residual % 10.0 == 0.0 {
            residual /= 10.0;
            power += 1;
        }
        while residual >= upper && power < MAX_MULTIPLIER_EXP {
            residual /= 10.0;
            power += 1;
        }
    } else if residual < 1.0 {
        while residual < lower && power > MIN_MULTIPLIER_EXP {
            residual *= 10.0;
            power -= 1;
        }
    }

    let mut digits = format!("{:.0}", residual.round());
    digits.truncate(digit_count);
    let digits = format!("{:0>width$}", digits, width = digit_count);

    debug!(
        "normalized {} to digits {} x 10^{} (residual {})",
        resistance, digits, power, residual
    );

    Normalized { digits, power }
}
