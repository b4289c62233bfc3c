//! Color table listing mode

use resband::color::entries;
use resband::{BandRole, ColorEntry, colors_for_role};

use crate::output::{print_color_header, print_color_row};

/// List the color table, or only the colors valid for `role`
pub fn run_colors(role: Option<BandRole>, quiet: bool) {
    let rows: Vec<&ColorEntry> = match role {
        Some(role) => colors_for_role(role),
        None => entries().iter().collect(),
    };

    if !quiet {
        match role {
            Some(role) => println!("Colors for {} band:", role),
            None => println!("Resistor color code:"),
        }
        println!();
    }

    print_color_header();
    for entry in rows {
        print_color_row(entry);
    }
}
