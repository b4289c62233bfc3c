mod mode;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use resband::advisory::Series;
use resband::{BandCount, BandRole, Color};

use mode::{DecodeOptions, run_colors, run_decode, run_encode, run_format};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "resband",
    version,
    about = "Resistor color band calculator: band colors to resistance and back",
    after_help = "Examples:
  resband encode brown black red gold           1 kΩ ±5%
  resband encode brown black black brown brown red
                                                6-band with TCR
  resband decode 4k7                            Colors for 4.7 kΩ (4 bands)
  resband decode -b 5 --tolerance brown 4990    5-band with 1% tolerance
  resband decode --file values.txt              One value per line
  resband colors --role multiplier              Colors valid as multiplier
  resband format 1000000                        1 MΩ"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Suppress explanations and suggestions (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate resistance, tolerance and TCR from band colors
    Encode {
        /// Band colors, first band first (4, 5 or 6). Use "none" for an unset band.
        #[arg(value_name = "COLOR")]
        colors: Vec<Color>,

        /// Band count; with no colors, encodes the default 1 kΩ assignment
        #[arg(short, long, value_name = "COUNT")]
        bands: Option<BandCount>,
    },

    /// Find the band colors for resistance values (e.g. 4700, 4.7k, 4k7, 0R47)
    Decode {
        #[arg(
            value_name = "VALUE",
            allow_negative_numbers = true,
            required_unless_present = "file"
        )]
        values: Vec<String>,

        /// Number of bands (4, 5 or 6)
        #[arg(short, long, default_value = "4", value_name = "COUNT")]
        bands: BandCount,

        /// Tolerance band color
        #[arg(long, value_name = "COLOR")]
        tolerance: Option<Color>,

        /// TCR band color (6 bands only)
        #[arg(long, value_name = "COLOR")]
        tcr: Option<Color>,

        /// Read additional values from a file, one per line
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Preferred number series for suggestions (e6, e12, e24, e48, e96)
        #[arg(long, default_value = "e24", value_name = "SERIES")]
        series: Series,
    },

    /// List the color code table
    Colors {
        /// Only colors valid for this band (digit1, digit2, digit3, multiplier, tolerance, tcr)
        #[arg(short, long, value_name = "ROLE")]
        role: Option<BandRole>,
    },

    /// Format resistance values with SI suffixes
    Format {
        #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    let env = if args.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let result = match args.command {
        Command::Encode { colors, bands } => run_encode(&colors, bands, args.quiet),
        Command::Decode {
            values,
            bands,
            tolerance,
            tcr,
            file,
            series,
        } => {
            let options = DecodeOptions {
                band_count: bands,
                tolerance,
                tcr,
                series,
            };
            run_decode(&values, file.as_deref(), &options, args.quiet)
        }
        Command::Colors { role } => {
            run_colors(role, args.quiet);
            Ok(())
        }
        Command::Format { values } => run_format(&values),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
