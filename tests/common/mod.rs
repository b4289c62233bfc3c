//! Common test utilities

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the path to the resband binary
pub fn resband_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("resband");
    path
}

/// Run resband with the given arguments, colors disabled
pub fn run_resband(args: &[&str]) -> Output {
    Command::new(resband_bin())
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute resband")
}

/// Run resband without forcing --no-color
pub fn run_resband_raw(args: &[&str]) -> Output {
    Command::new(resband_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute resband")
}

/// Write one value per line to a file
pub fn write_values(path: &Path, lines: &[&str]) -> std::io::Result<()> {
    std::fs::write(path, lines.join("\n"))
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Band color names printed for each role, in order
pub fn band_names(stdout: &str) -> Vec<String> {
    const LABELS: [&str; 6] = [
        "1st Digit",
        "2nd Digit",
        "3rd Digit",
        "Multiplier",
        "Tolerance",
        "TCR",
    ];
    stdout
        .lines()
        .map(str::trim_start)
        .filter(|line| {
            LABELS
                .iter()
                .any(|l| line.strip_prefix(l).is_some_and(|rest| rest.starts_with(' ')))
        })
        .filter_map(|line| line.split_whitespace().last().map(str::to_string))
        .collect()
}
