//! End-to-end tests for `brandmark icon`, `logo` and `styles`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Icon Command Tests
// ============================================================================

#[test]
fn test_icon_default_style() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["icon", "acme"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr(&output)
    );
    let svg = stdout(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 100 100""#));
    assert!(svg.contains(">A</text>"));
}

#[test]
fn test_icon_hexagon_with_colors() {
    let config_dir = TempDir::new().unwrap();
    let output = run(
        &[
            "icon",
            "Acme",
            "--style",
            "geometric-hexagon",
            "--color",
            "#3b82f6",
            "--background",
            "#111111",
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let svg = stdout(&output);
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(svg.contains(r##"fill="#3B82F6""##));
    assert_eq!(
        svg.lines().nth(1).unwrap(),
        r##"  <rect width="100" height="100" fill="#111111"/>"##
    );
}

#[test]
fn test_icon_unknown_style_is_not_an_error() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["icon", "Acme", "--style", "decorative-leaf"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let svg = stdout(&output);
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(!svg.contains("<text"));
}

#[test]
fn test_icon_invalid_color_exit_code() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["icon", "Acme", "--color", "#GG0000"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid color format"));
}

#[test]
fn test_icon_data_url_to_file() {
    let config_dir = TempDir::new().unwrap();
    let out_file = config_dir.path().join("icon.txt");
    let output = run(
        &[
            "icon",
            "Acme",
            "--style",
            "modern-tech",
            "--data-url",
            "-o",
            out_file.to_str().unwrap(),
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());

    let url = fs::read_to_string(&out_file).unwrap();
    let encoded = url
        .trim()
        .strip_prefix("data:image/svg+xml;base64,")
        .expect("data URL prefix");
    let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
    assert!(svg.contains("stroke-width=\"4\""));
}

#[test]
fn test_icon_unwritable_output_exit_code() {
    let config_dir = TempDir::new().unwrap();
    let out_file = config_dir.path().join("missing").join("icon.svg");
    let output = run(
        &["icon", "Acme", "-o", out_file.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_icon_uses_configured_default_style() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[icon]\nstyle = \"abstract-dots\"\n",
    )
    .unwrap();

    let output = run(&["icon", "Acme"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).matches("<circle").count(), 25);
}

#[test]
fn test_icon_warns_about_broken_config() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("config.toml");
    fs::write(&config_file, "[export]\nformat = \"pdf\"\n").unwrap();

    let output = run(&["icon", "Acme"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(">A</text>"));
    assert!(stderr(&output).contains("Failed to load configuration, using defaults"));
    assert_eq!(
        fs::read_to_string(&config_file).unwrap(),
        "[export]\nformat = \"pdf\"\n"
    );
}

// ============================================================================
// Logo Command Tests
// ============================================================================

#[test]
fn test_logo_seeded_is_reproducible() {
    let config_dir = TempDir::new().unwrap();
    let args = ["logo", "Acme", "--style", "elegant", "--seed", "42"];

    let first = run(&args, config_dir.path());
    let second = run(&args, config_dir.path());

    assert_eq!(first.status.code(), Some(0));
    assert!(stdout(&first).starts_with("data:image/svg+xml;base64,"));
    assert_eq!(stdout(&first), stdout(&second));
    assert!(stderr(&first).contains("Style: classic"));
}

#[test]
fn test_logo_svg_output() {
    let config_dir = TempDir::new().unwrap();
    let output = run(
        &["logo", "Acme & Sons", "--svg", "--seed", "7"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let svg = stdout(&output);
    assert!(svg.contains(r#"viewBox="0 0 200 200""#));
    assert!(svg.contains("Acme &amp; Sons"));
}

// ============================================================================
// Styles Command Tests
// ============================================================================

#[test]
fn test_styles_json() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["styles", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let styles: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let styles = styles.as_array().unwrap();
    assert_eq!(styles.len(), 15);
    assert_eq!(styles[0]["token"], "initials-simple");
    assert!(styles.iter().all(|s| s["category"] != "decorative"));
}

#[test]
fn test_styles_human_readable() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["styles"], config_dir.path());

    let text = stdout(&output);
    assert!(text.contains("geometric: geometric-circle, geometric-square"));
    assert!(text.contains("decorative: (none)"));
}
