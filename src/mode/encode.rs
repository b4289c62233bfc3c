//! Colors to resistance mode

use resband::{BandCount, Color, ColorEntry, Error, encode};

use crate::output::{print_assignment, print_legend, print_result, print_warning};

/// Run band encoding. With no colors, encodes the default assignment for `bands`.
pub fn run_encode(colors: &[Color], bands: Option<BandCount>, quiet: bool) -> Result<(), Error> {
    let (band_count, assignment): (BandCount, Vec<&ColorEntry>) = if colors.is_empty() {
        let band_count = bands.unwrap_or_default();
        (band_count, band_count.default_assignment())
    } else {
        let band_count = BandCount::try_from(colors.len())?;
        if let Some(expected) = bands
            && expected != band_count
        {
            return Err(Error::BandMismatch {
                expected: expected.len(),
                found: colors.len(),
            });
        }
        (band_count, colors.iter().map(|c| c.entry()).collect())
    };

    let result = encode(band_count, &assignment);

    if !result.is_valid() {
        let missing: Vec<&str> = band_count
            .roles()
            .iter()
            .zip(&assignment)
            .take(band_count.multiplier_index() + 1)
            .filter(|(role, entry)| !entry.has_role(**role))
            .map(|(role, _)| role.label())
            .collect();
        print_warning(&format!("no value for {}", missing.join(", ")));
    }

    if !quiet {
        println!("{}-band resistor", band_count);
    }
    print_assignment(band_count, &assignment);
    println!();
    print_result(&result, band_count);

    if !quiet {
        println!();
        print_legend();
    }

    Ok(())
}
