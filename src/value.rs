//! Resistance text parsing
//!
//! Accepts plain numbers (`4700`, `-5`, `1e3`), SI-prefixed values (`4.7k`,
//! `2.2M`, `470m`) and the RKM notation printed on parts and schematics, where
//! the prefix letter stands in for the decimal point (`4k7`, `0R47`, `2M2`).
//! A trailing `Ω`, `ohm` or `ohms` is ignored.

use thiserror::Error;

use crate::color::scale;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("empty resistance value")]
    Empty,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("invalid unit or prefix '{0}'")]
    InvalidSuffix(String),
}

/// Power of ten for an SI prefix letter. `R` marks plain ohms.
fn prefix_exp(c: char) -> Option<i32> {
    match c {
        'R' | 'r' => Some(0),
        'm' => Some(-3),
        'k' | 'K' => Some(3),
        'M' => Some(6),
        'G' | 'g' => Some(9),
        _ => None,
    }
}

fn strip_unit(s: &str) -> &str {
    let s = s.trim_end();
    if let Some(rest) = s.strip_suffix('Ω') {
        return rest;
    }
    for unit in ["ohms", "ohm"] {
        if s.len() >= unit.len() && s.is_char_boundary(s.len() - unit.len()) {
            let (rest, tail) = s.split_at(s.len() - unit.len());
            if tail.eq_ignore_ascii_case(unit) {
                return rest;
            }
        }
    }
    s
}

fn parse_number(text: &str) -> Result<f64, ParseValueError> {
    text.parse::<f64>()
        .map_err(|_| ParseValueError::InvalidNumber(text.to_string()))
}

/// Parse a resistance in ohms.
///
/// Negative values parse successfully; range checks belong to the caller.
pub fn parse_resistance(input: &str) -> Result<f64, ParseValueError> {
    let compact: String = strip_unit(input.trim()).split_whitespace().collect();
    if compact.is_empty() {
        return Err(ParseValueError::Empty);
    }

    // First character that cannot be part of a float literal
    let split = compact
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')));

    let Some((pos, prefix)) = split else {
        return parse_number(&compact);
    };

    let exp = prefix_exp(prefix)
        .ok_or_else(|| ParseValueError::InvalidSuffix(compact[pos..].to_string()))?;
    let before = &compact[..pos];
    let after = &compact[pos + prefix.len_utf8()..];

    if !after.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseValueError::InvalidSuffix(compact[pos..].to_string()));
    }

    let number = if after.is_empty() {
        if before.is_empty() {
            return Err(ParseValueError::InvalidNumber(compact));
        }
        parse_number(before)?
    } else {
        // RKM: the prefix letter is the decimal point
        if before.contains('.') {
            return Err(ParseValueError::InvalidNumber(compact));
        }
        let whole = if before.is_empty() { "0" } else { before };
        parse_number(&format!("{}.{}", whole, after))?
    };

    Ok(scale(number, exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_resistance("4700"), Ok(4700.0));
        assert_eq!(parse_resistance(" 0.47 "), Ok(0.47));
        assert_eq!(parse_resistance("1e3"), Ok(1000.0));
        assert_eq!(parse_resistance("-5"), Ok(-5.0));
        assert_eq!(parse_resistance("0"), Ok(0.0));
    }

    #[test]
    fn test_si_suffixes() {
        assert_eq!(parse_resistance("4.7k"), Ok(4700.0));
        assert_eq!(parse_resistance("10K"), Ok(10_000.0));
        assert_eq!(parse_resistance("2.2M"), Ok(2_200_000.0));
        assert_eq!(parse_resistance("1G"), Ok(1e9));
        assert_eq!(parse_resistance("470m"), Ok(0.47));
        assert_eq!(parse_resistance("470R"), Ok(470.0));
    }

    #[test]
    fn test_rkm_notation() {
        assert_eq!(parse_resistance("4k7"), Ok(4700.0));
        assert_eq!(parse_resistance("2M2"), Ok(2_200_000.0));
        assert_eq!(parse_resistance("0R47"), Ok(0.47));
        assert_eq!(parse_resistance("R1"), Ok(0.1));
        assert_eq!(parse_resistance("1k05"), Ok(1050.0));
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(parse_resistance("1kΩ"), Ok(1000.0));
        assert_eq!(parse_resistance("4.7 kΩ"), Ok(4700.0));
        assert_eq!(parse_resistance("10 ohm"), Ok(10.0));
        assert_eq!(parse_resistance("220 Ohms"), Ok(220.0));
        assert_eq!(parse_resistance("100Ω"), Ok(100.0));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(parse_resistance(""), Err(ParseValueError::Empty));
        assert_eq!(parse_resistance("  Ω"), Err(ParseValueError::Empty));
        assert!(matches!(
            parse_resistance("abc"),
            Err(ParseValueError::InvalidSuffix(_))
        ));
        assert!(matches!(
            parse_resistance("4.7x"),
            Err(ParseValueError::InvalidSuffix(_))
        ));
        assert!(matches!(
            parse_resistance("4.2k7"),
            Err(ParseValueError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_resistance("4k7k"),
            Err(ParseValueError::InvalidSuffix(_))
        ));
        assert!(matches!(
            parse_resistance("1.2.3"),
            Err(ParseValueError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_resistance("k"),
            Err(ParseValueError::InvalidNumber(_))
        ));
    }
}
