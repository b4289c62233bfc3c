//! Encode/decode agreement over every representable band assignment

use resband::color::{digit_entry, multiplier_entry};
use resband::{
    BandCount, BandRole, Color, ColorEntry, colors_for_role, decode, encode, format_resistance,
};

fn assignments(band_count: BandCount) -> Vec<Vec<&'static ColorEntry>> {
    let mut out: Vec<Vec<&'static ColorEntry>> = vec![vec![]];
    for role in &band_count.roles()[..=band_count.multiplier_index()] {
        let choices = colors_for_role(*role);
        out = out
            .into_iter()
            .flat_map(|prefix| {
                choices.iter().map(move |choice| {
                    let mut next = prefix.clone();
                    next.push(*choice);
                    next
                })
            })
            .collect();
    }
    out
}

/// Values from 1 Ω up to the first full-width mantissa are not scaled into
/// the digit bands, so they only round-trip below 1 Ω or at full width.
fn fills_digit_bands(resistance: f64, band_count: BandCount) -> bool {
    let full_width = 10f64.powi(band_count.digit_count() as i32 - 1);
    resistance < 1.0 || resistance >= full_width
}

fn assert_short_value_keeps_unit_multiplier(
    resistance: f64,
    band_count: BandCount,
    decoded: &[&ColorEntry],
) {
    assert_eq!(
        decoded[band_count.multiplier_index()].color,
        Color::Black,
        "decoding {} Ω",
        resistance
    );
}

#[test]
fn test_four_band_roundtrip() {
    let band_count = BandCount::Four;
    let all = assignments(band_count);
    assert_eq!(all.len(), 9 * 10 * 12);

    for bands in all {
        let expected = encode(band_count, &bands);
        let resistance = expected.resistance.expect("fully set assignment");
        let decoded = decode(resistance, band_count);
        if !fills_digit_bands(resistance, band_count) {
            assert_short_value_keeps_unit_multiplier(resistance, band_count, &decoded);
            continue;
        }

        let names = |b: &[&ColorEntry]| b.iter().map(|e| e.name).collect::<Vec<_>>();
        assert_eq!(
            names(&decoded[..3]),
            names(&bands),
            "decoding {} Ω",
            resistance
        );
        assert_eq!(encode(band_count, &decoded).resistance, expected.resistance);
    }
}

#[test]
fn test_five_and_six_band_roundtrip() {
    for band_count in [BandCount::Five, BandCount::Six] {
        for bands in assignments(band_count) {
            let expected = encode(band_count, &bands);
            let resistance = expected.resistance.expect("fully set assignment");
            let decoded = decode(resistance, band_count);
            if !fills_digit_bands(resistance, band_count) {
                assert_short_value_keeps_unit_multiplier(resistance, band_count, &decoded);
                continue;
            }

            for (i, band) in bands.iter().enumerate() {
                assert_eq!(
                    decoded[i].color, band.color,
                    "band {} decoding {} Ω",
                    i, resistance
                );
            }
            assert_eq!(
                encode(band_count, &decoded).display,
                format_resistance(Some(resistance))
            );
        }
    }
}

#[test]
fn test_roundtrip_preserves_tolerance_and_tcr_when_merged() {
    let band_count = BandCount::Six;
    let bands: Vec<&ColorEntry> = [
        Color::Orange,
        Color::Orange,
        Color::Black,
        Color::Gold,
        Color::Green,
        Color::Blue,
    ]
    .iter()
    .map(|c| c.entry())
    .collect();

    let expected = encode(band_count, &bands);
    assert_eq!(expected.resistance, Some(33.0));

    let decoded = decode(33.0, band_count);
    let merged = resband::merge_decoded(band_count, &decoded, &bands);
    assert_eq!(encode(band_count, &merged), expected);
}

#[test]
fn test_decoded_digits_are_digit_colors() {
    for value in [0.1, 0.47, 1.0, 9.1, 56.0, 120.0, 4990.0, 33_000.0, 7.5e8] {
        for band_count in BandCount::ALL {
            let decoded = decode(value, band_count);
            let roles = band_count.roles();
            for (i, band) in decoded.iter().enumerate().take(band_count.digit_count()) {
                assert!(band.has_role(roles[i]), "{} band {} is {}", value, i, band);
                assert!(digit_entry(band.digit.unwrap_or(0)).is_some());
            }
            let multiplier = decoded[band_count.multiplier_index()];
            assert!(multiplier.has_role(BandRole::Multiplier));
            assert!(multiplier_entry(multiplier.multiplier_exp.unwrap_or(0)).is_some());
        }
    }
}
