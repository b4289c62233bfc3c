//! Resistor color code table

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Band color, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Sentinel for an unset band
    None,
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

/// Opaque display token handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColor {
    /// `None` for a transparent (absent) band
    pub rgb: Option<(u8, u8, u8)>,
    pub css: &'static str,
}

impl DisplayColor {
    pub fn hex(&self) -> String {
        match self.rgb {
            Some((r, g, b)) => format!("#{:02X}{:02X}{:02X}", r, g, b),
            None => "#00000000".to_string(),
        }
    }
}

/// One row of the color code table.
///
/// Each optional field is one role the color can play. A field is `Some`
/// exactly when the color is a member of that role, so digit 0 (Black) and
/// "no digit" (Gold) stay distinct.
#[derive(Debug, PartialEq)]
pub struct ColorEntry {
    pub color: Color,
    pub name: &'static str,
    pub digit: Option<u8>,
    /// Multiplier as a power of ten
    pub multiplier_exp: Option<i32>,
    /// Tolerance in percent
    pub tolerance: Option<f64>,
    /// Temperature coefficient in ppm/°C
    pub tcr: Option<f64>,
    pub display: DisplayColor,
}

impl ColorEntry {
    pub fn multiplier(&self) -> Option<f64> {
        self.multiplier_exp.map(pow10)
    }

    pub fn is_unset(&self) -> bool {
        self.color == Color::None
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn entry(
    color: Color,
    name: &'static str,
    digit: Option<u8>,
    multiplier_exp: Option<i32>,
    tolerance: Option<f64>,
    tcr: Option<f64>,
    rgb: Option<(u8, u8, u8)>,
    css: &'static str,
) -> ColorEntry {
    ColorEntry {
        color,
        name,
        digit,
        multiplier_exp,
        tolerance,
        tcr,
        display: DisplayColor { rgb, css },
    }
}

/// The color code table. Index matches `Color as usize`.
#[rustfmt::skip]
pub(crate) static TABLE: [ColorEntry; 13] = [
    // No band at all: a resistor without a tolerance band is ±20 %
    entry(Color::None, "None", None, None, Some(20.0), None, None, "transparent"),
    entry(Color::Black, "Black", Some(0), Some(0), None, Some(250.0), Some((0x00, 0x00, 0x00)), "black"),
    entry(Color::Brown, "Brown", Some(1), Some(1), Some(1.0), Some(100.0), Some((0xA5, 0x2A, 0x2A)), "saddlebrown"),
    entry(Color::Red, "Red", Some(2), Some(2), Some(2.0), Some(50.0), Some((0xFF, 0x00, 0x00)), "red"),
    entry(Color::Orange, "Orange", Some(3), Some(3), None, Some(15.0), Some((0xFF, 0xA5, 0x00)), "orange"),
    entry(Color::Yellow, "Yellow", Some(4), Some(4), None, Some(25.0), Some((0xFF, 0xFF, 0x00)), "yellow"),
    entry(Color::Green, "Green", Some(5), Some(5), Some(0.5), Some(20.0), Some((0x00, 0x80, 0x00)), "green"),
    entry(Color::Blue, "Blue", Some(6), Some(6), Some(0.25), Some(10.0), Some((0x00, 0x00, 0xFF)), "blue"),
    entry(Color::Violet, "Violet", Some(7), Some(7), Some(0.1), Some(5.0), Some((0xEE, 0x82, 0xEE)), "violet"),
    entry(Color::Grey, "Grey", Some(8), Some(8), Some(0.05), Some(1.0), Some((0x80, 0x80, 0x80)), "grey"),
    entry(Color::White, "White", Some(9), Some(9), None, None, Some((0xFF, 0xFF, 0xFF)), "white"),
    entry(Color::Gold, "Gold", None, Some(-1), Some(5.0), None, Some((0xFF, 0xD7, 0x00)), "gold"),
    entry(Color::Silver, "Silver", None, Some(-2), Some(10.0), None, Some((0xC0, 0xC0, 0xC0)), "silver"),
];

impl Color {
    pub fn entry(self) -> &'static ColorEntry {
        &TABLE[self as usize]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().name)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let color = match lower.as_str() {
            "gray" => Color::Grey,
            "purple" => Color::Violet,
            name => TABLE
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(name))
                .map(|e| e.color)
                .ok_or_else(|| Error::UnknownColor(s.to_string()))?,
        };
        Ok(color)
    }
}

/// The unset sentinel entry
pub fn unset() -> &'static ColorEntry {
    Color::None.entry()
}

/// Digit color for `digit`, if any
pub fn digit_entry(digit: u8) -> Option<&'static ColorEntry> {
    TABLE.iter().find(|e| e.digit == Some(digit))
}

/// Multiplier color for 10^`exp`, if tabulated
pub fn multiplier_entry(exp: i32) -> Option<&'static ColorEntry> {
    TABLE.iter().find(|e| e.multiplier_exp == Some(exp))
}

/// CSS color token per band, for renderers
pub fn display_tokens(bands: &[&ColorEntry]) -> Vec<&'static str> {
    bands.iter().map(|e| e.display.css).collect()
}

/// 10^exp, exact for the tabulated range
pub(crate) fn pow10(exp: i32) -> f64 {
    if exp >= 0 {
        10f64.powi(exp)
    } else {
        1.0 / 10f64.powi(-exp)
    }
}

/// `value` × 10^exp without going through an inexact factor like 0.1
pub(crate) fn scale(value: f64, exp: i32) -> f64 {
    if exp >= 0 {
        value * 10f64.powi(exp)
    } else {
        value / 10f64.powi(-exp)
    }
}
