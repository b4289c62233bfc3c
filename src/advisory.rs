//! Advisory suggestions for resistances that are unlikely to exist as parts
//!
//! The calculation core never waits on or consumes a suggestion. Callers ask
//! an [`Advisor`] after the bands are computed and show the text if any.

use std::fmt;
use std::str::FromStr;

use crate::calc::{decode, format_resistance};
use crate::color::{BandCount, scale};
use crate::error::Error;

/// Free-text guidance for one resistance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub trait Advisor {
    /// Guidance for `resistance`, or `None` when there is nothing to say.
    /// Only positive finite resistances are meaningful requests.
    fn suggest(&self, resistance: f64) -> Option<Suggestion>;
}

/// IEC 60063 preferred number series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Series {
    E6,
    E12,
    #[default]
    E24,
    E48,
    E96,
}

const E6: [u16; 6] = [10, 15, 22, 33, 47, 68];

const E12: [u16; 12] = [10, 12, 15, 18, 22, 27, 33, 39, 47, 56, 68, 82];

const E24: [u16; 24] = [
    10, 11, 12, 13, 15, 16, 18, 20, 22, 24, 27, 30, 33, 36, 39, 43, 47, 51, 56, 62, 68, 75, 82, 91,
];

const E48: [u16; 48] = [
    100, 105, 110, 115, 121, 127, 133, 140, 147, 154, 162, 169, 178, 187, 196, 205, 215, 226, 237,
    249, 261, 274, 287, 301, 316, 332, 348, 365, 383, 402, 422, 442, 464, 487, 511, 536, 562, 590,
    619, 649, 681, 715, 750, 787, 825, 866, 909, 953,
];

const E96: [u16; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, 133, 137, 140, 143, 147, 150, 154,
    158, 162, 165, 169, 174, 178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232, 237, 243,
    249, 255, 261, 267, 274, 280, 287, 294, 301, 309, 316, 324, 332, 340, 348, 357, 365, 374, 383,
    392, 402, 412, 422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549, 562, 576, 590, 604,
    619, 634, 649, 665, 681, 698, 715, 732, 750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953,
    976,
];

/// Relative distance below which a value counts as a series member
const MEMBER_TOLERANCE: f64 = 1e-9;

impl Series {
    /// Significant-digit mantissas of one decade
    pub fn mantissas(self) -> &'static [u16] {
        match self {
            Series::E6 => &E6,
            Series::E12 => &E12,
            Series::E24 => &E24,
            Series::E48 => &E48,
            Series::E96 => &E96,
        }
    }

    fn digits(self) -> i32 {
        match self {
            Series::E6 | Series::E12 | Series::E24 => 2,
            Series::E48 | Series::E96 => 3,
        }
    }

    /// Series value closest to `resistance` by relative error
    pub fn nearest(self, resistance: f64) -> f64 {
        let exp = resistance.log10().floor() as i32 - (self.digits() - 1);
        let next_decade = 10u16.pow(self.digits() as u32);

        let mut best = scale(f64::from(self.mantissas()[0]), exp);
        for &mantissa in self.mantissas().iter().chain(std::iter::once(&next_decade)) {
            let candidate = scale(f64::from(mantissa), exp);
            if (candidate - resistance).abs() < (best - resistance).abs() {
                best = candidate;
            }
        }
        best
    }

    pub fn contains(self, resistance: f64) -> bool {
        let nearest = self.nearest(resistance);
        ((nearest - resistance) / resistance).abs() < MEMBER_TOLERANCE
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::E6 => "E6",
            Series::E12 => "E12",
            Series::E24 => "E24",
            Series::E48 => "E48",
            Series::E96 => "E96",
        };
        f.write_str(name)
    }
}

impl FromStr for Series {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e6" => Ok(Series::E6),
            "e12" => Ok(Series::E12),
            "e24" => Ok(Series::E24),
            "e48" => Ok(Series::E48),
            "e96" => Ok(Series::E96),
            _ => Err(Error::UnknownSeries(s.to_string())),
        }
    }
}

/// Suggests the nearest preferred value and which bands to change
#[derive(Debug, Clone, Copy)]
pub struct StandardSeriesAdvisor {
    series: Series,
    band_count: BandCount,
}

impl StandardSeriesAdvisor {
    pub fn new(series: Series, band_count: BandCount) -> Self {
        Self { series, band_count }
    }
}

impl Advisor for StandardSeriesAdvisor {
    fn suggest(&self, resistance: f64) -> Option<Suggestion> {
        if !resistance.is_finite() || resistance <= 0.0 || self.series.contains(resistance) {
            return None;
        }

        let nearest = self.series.nearest(resistance);
        let value_bands = self.band_count.multiplier_index() + 1;
        let current = decode(resistance, self.band_count);
        let target = decode(nearest, self.band_count);

        let names: Vec<&str> = target[..value_bands].iter().map(|e| e.name).collect();
        let roles = self.band_count.roles();
        let changes: Vec<String> = (0..value_bands)
            .filter(|&i| current[i].color != target[i].color)
            .map(|i| {
                format!(
                    "band {} ({}) from {} to {}",
                    i + 1,
                    roles[i],
                    current[i],
                    target[i]
                )
            })
            .collect();

        let advice = if changes.is_empty() {
            "the bands already encode it".to_string()
        } else {
            format!("change {}", changes.join(", "))
        };

        Some(Suggestion {
            text: format!(
                "{} Ω is not a standard {} value. Nearest is {} ({}); {}.",
                resistance,
                self.series,
                format_resistance(Some(nearest)),
                names.join(" "),
                advice
            ),
        })
    }
}
