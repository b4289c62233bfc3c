//! Resistance to colors mode

use std::path::Path;

use log::info;
use resband::advisory::{Advisor, Series, StandardSeriesAdvisor};
use resband::color::unset;
use resband::value::parse_resistance;
use resband::{BandCount, Color, Error, decode, encode, format_resistance, merge_decoded};

use super::read_values;
use crate::output::{print_assignment, print_result, print_suggestion, print_warning};

pub struct DecodeOptions {
    pub band_count: BandCount,
    pub tolerance: Option<Color>,
    pub tcr: Option<Color>,
    pub series: Series,
}

/// Run decoding for each value given on the command line, then each value in `file`
pub fn run_decode(
    values: &[String],
    file: Option<&Path>,
    options: &DecodeOptions,
    quiet: bool,
) -> Result<(), Error> {
    let mut inputs = values.to_vec();
    if let Some(path) = file {
        let from_file = read_values(path)?;
        info!("read {} values from {}", from_file.len(), path.display());
        inputs.extend(from_file);
    }

    let band_count = options.band_count;
    let mut previous = vec![unset(); band_count.len()];
    if let Some(color) = options.tolerance {
        previous[band_count.tolerance_index()] = color.entry();
    }
    if let Some(color) = options.tcr {
        match band_count.tcr_index() {
            Some(index) => previous[index] = color.entry(),
            None => print_warning("--tcr only applies to 6-band resistors"),
        }
    }

    let advisor = StandardSeriesAdvisor::new(options.series, band_count);

    for (i, text) in inputs.iter().enumerate() {
        let resistance = parse_resistance(text)?;
        let decoded = decode(resistance, band_count);

        if !resistance.is_finite() || resistance < 0.0 {
            print_warning(&format!("invalid resistance {}", text));
        } else if decoded[..=band_count.multiplier_index()]
            .iter()
            .any(|e| e.is_unset())
        {
            print_warning(&format!(
                "{} cannot be represented with {} bands",
                text, band_count
            ));
        }

        let bands = merge_decoded(band_count, &decoded, &previous);
        let result = encode(band_count, &bands);

        if i > 0 {
            println!();
        }
        println!("Value: {} ({})", text, format_resistance(Some(resistance)));
        print_assignment(band_count, &bands);
        println!();
        print_result(&result, band_count);

        if !quiet && let Some(suggestion) = advisor.suggest(resistance) {
            print_suggestion(&suggestion);
        }
    }

    Ok(())
}
