//! Band roles and band-count layouts

use std::fmt;
use std::str::FromStr;

use super::table::{Color, ColorEntry};
use crate::error::Error;

/// What a band position encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandRole {
    Digit1,
    Digit2,
    Digit3,
    Multiplier,
    Tolerance,
    Tcr,
}

impl BandRole {
    pub fn label(self) -> &'static str {
        match self {
            BandRole::Digit1 => "1st Digit",
            BandRole::Digit2 => "2nd Digit",
            BandRole::Digit3 => "3rd Digit",
            BandRole::Multiplier => "Multiplier",
            BandRole::Tolerance => "Tolerance",
            BandRole::Tcr => "TCR",
        }
    }

    pub fn is_digit(self) -> bool {
        matches!(self, BandRole::Digit1 | BandRole::Digit2 | BandRole::Digit3)
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BandRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digit1" => Ok(BandRole::Digit1),
            "digit2" => Ok(BandRole::Digit2),
            "digit3" => Ok(BandRole::Digit3),
            "multiplier" => Ok(BandRole::Multiplier),
            "tolerance" => Ok(BandRole::Tolerance),
            "tcr" => Ok(BandRole::Tcr),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

const FOUR_BAND: [BandRole; 4] = [
    BandRole::Digit1,
    BandRole::Digit2,
    BandRole::Multiplier,
    BandRole::Tolerance,
];

const FIVE_BAND: [BandRole; 5] = [
    BandRole::Digit1,
    BandRole::Digit2,
    BandRole::Digit3,
    BandRole::Multiplier,
    BandRole::Tolerance,
];

const SIX_BAND: [BandRole; 6] = [
    BandRole::Digit1,
    BandRole::Digit2,
    BandRole::Digit3,
    BandRole::Multiplier,
    BandRole::Tolerance,
    BandRole::Tcr,
];

/// Number of bands on the resistor. Determines the role of every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BandCount {
    #[default]
    Four,
    Five,
    Six,
}

impl BandCount {
    pub const ALL: [BandCount; 3] = [BandCount::Four, BandCount::Five, BandCount::Six];

    pub fn roles(self) -> &'static [BandRole] {
        match self {
            BandCount::Four => &FOUR_BAND,
            BandCount::Five => &FIVE_BAND,
            BandCount::Six => &SIX_BAND,
        }
    }

    pub fn len(self) -> usize {
        self.roles().len()
    }

    /// Number of leading significant-digit bands
    pub fn digit_count(self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five | BandCount::Six => 3,
        }
    }

    pub fn multiplier_index(self) -> usize {
        self.digit_count()
    }

    pub fn tolerance_index(self) -> usize {
        self.digit_count() + 1
    }

    pub fn tcr_index(self) -> Option<usize> {
        match self {
            BandCount::Six => Some(5),
            BandCount::Four | BandCount::Five => None,
        }
    }

    /// Starting selection: 1 kΩ with the usual tolerance for the band count
    pub fn default_assignment(self) -> Vec<&'static ColorEntry> {
        let colors: &[Color] = match self {
            BandCount::Four => &[Color::Brown, Color::Black, Color::Red, Color::Gold],
            BandCount::Five => &[
                Color::Brown,
                Color::Black,
                Color::Black,
                Color::Red,
                Color::Brown,
            ],
            BandCount::Six => &[
                Color::Brown,
                Color::Black,
                Color::Black,
                Color::Red,
                Color::Brown,
                Color::Brown,
            ],
        };
        colors.iter().map(|c| c.entry()).collect()
    }
}

impl TryFrom<usize> for BandCount {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            4 => Ok(BandCount::Four),
            5 => Ok(BandCount::Five),
            6 => Ok(BandCount::Six),
            other => Err(Error::BandCount(other)),
        }
    }
}

impl FromStr for BandCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count: usize = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidBandCount(s.to_string()))?;
        BandCount::try_from(count)
    }
}

impl fmt::Display for BandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())
    }
}
