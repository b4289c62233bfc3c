use colored::*;
use resband::advisory::Suggestion;
use resband::{BandCount, CalculationResult, ColorEntry};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Three-cell color swatch. Unset bands render as dots.
fn swatch(entry: &ColorEntry) -> ColoredString {
    match entry.display.rgb {
        Some((r, g, b)) => "   ".on_truecolor(r, g, b),
        None => " · ".dimmed(),
    }
}

/// Multiplier as `×100`, `×1k` style text
pub(crate) fn format_multiplier(exp: i32) -> String {
    const PREFIXES: [&str; 4] = ["", "k", "M", "G"];
    if exp < 0 {
        return format!("×{}", 1.0 / 10f64.powi(-exp));
    }
    let prefix = (exp / 3) as usize;
    match PREFIXES.get(prefix) {
        Some(p) => format!("×{}{}", 10u64.pow((exp % 3) as u32), p),
        None => format!("×1e{}", exp),
    }
}

pub(crate) fn print_assignment(band_count: BandCount, bands: &[&ColorEntry]) {
    for (i, role) in band_count.roles().iter().enumerate() {
        let entry = bands.get(i).copied().unwrap_or_else(|| resband::color::unset());
        println!("  {:<10} {} {}", role.label(), swatch(entry), entry.name);
    }
}

pub(crate) fn print_result(result: &CalculationResult, band_count: BandCount) {
    println!("{} {}", style_label("Resistance:"), result.display);
    if let Some(tolerance) = result.tolerance {
        println!("{} ±{}%", style_label("Tolerance: "), tolerance);
    }
    if band_count == BandCount::Six
        && let Some(tcr) = result.tcr
    {
        println!("{} {} ppm/°C", style_label("TCR:       "), tcr);
    }
}

pub(crate) fn print_suggestion(suggestion: &Suggestion) {
    println!("{} {}", "Suggestion:".cyan().bold(), suggestion);
}

pub(crate) fn print_color_header() {
    println!(
        "{:<8}     {:>5} {:>10} {:>10} {:>12}",
        "COLOR", "DIGIT", "MULTIPLIER", "TOLERANCE", "TCR"
    );
    println!("{}", "-".repeat(52));
}

pub(crate) fn print_color_row(entry: &ColorEntry) {
    let digit = entry
        .digit
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let multiplier = entry
        .multiplier_exp
        .map(format_multiplier)
        .unwrap_or_else(|| "-".to_string());
    let tolerance = entry
        .tolerance
        .map(|t| format!("±{}%", t))
        .unwrap_or_else(|| "-".to_string());
    let tcr = entry
        .tcr
        .map(|t| format!("{} ppm", t))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<8} {} {:>5} {:>10} {:>10} {:>12}",
        entry.name,
        swatch(entry),
        digit,
        multiplier,
        tolerance,
        tcr
    );
}

pub(crate) fn print_legend() {
    println!("Digit bands are read left to right as one number, then scaled by the multiplier.");
    println!("Tolerance: guaranteed deviation from nominal. None means no band (±20%).");
    println!("TCR: temperature coefficient, 6-band resistors only.");
}
