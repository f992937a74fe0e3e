//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use brandmark::models::NamedColor;

/// Path to the brandmark binary.
pub fn brandmark_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandmark")
}

/// Creates a Command with an isolated config directory.
///
/// Every CLI test goes through this so a developer's real config never
/// leaks into assertions.
pub fn brandmark_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(brandmark_bin());
    cmd.env("BRANDMARK_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with an isolated config directory and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    brandmark_command(args, config_dir)
        .output()
        .expect("Failed to execute brandmark")
}

/// Standard output as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A small three-color brand palette.
pub fn sample_palette() -> Vec<NamedColor> {
    vec![
        NamedColor::parse("Brand Red", "#FF0000").unwrap(),
        NamedColor::parse("Deep Sea", "#003366").unwrap(),
        NamedColor::parse("Paper", "#FAFAFA").unwrap(),
    ]
}

/// Writes `colors` as a JSON palette file and returns its path.
pub fn write_palette_file(dir: &Path, colors: &[NamedColor]) -> PathBuf {
    let path = dir.join("palette.json");
    fs::write(&path, serde_json::to_string_pretty(colors).unwrap())
        .expect("Failed to write palette file");
    path
}
