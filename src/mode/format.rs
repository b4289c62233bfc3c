//! Value formatting mode

use resband::value::parse_resistance;
use resband::{Error, format_resistance};

/// Print each value with SI suffixes
pub fn run_format(values: &[String]) -> Result<(), Error> {
    for text in values {
        let resistance = parse_resistance(text)?;
        println!("{:>12}  {}", text, format_resistance(Some(resistance)));
    }
    Ok(())
}
