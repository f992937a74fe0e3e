//! Color science commands: contrast, accessibility and harmonies.

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::color::{color_accessibility_score, color_contrast_ratio, color_harmonies};
use crate::models::{AccessibilityLevel, RgbColor};
use clap::Args;
use serde::Serialize;

/// Compute the WCAG contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// First color as #RRGGBB
    #[arg(value_name = "A")]
    pub a: String,

    /// Second color as #RRGGBB
    #[arg(value_name = "B")]
    pub b: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Score a color's best contrast against white or black
#[derive(Debug, Clone, Args)]
pub struct AccessibilityArgs {
    /// Color as #RRGGBB
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Derive complementary, triadic and split-complementary schemes
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color as #RRGGBB
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ContrastOutput {
    a: RgbColor,
    b: RgbColor,
    ratio: f64,
    level: AccessibilityLevel,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let a = parse_color(&self.a)?;
        let b = parse_color(&self.b)?;
        let ratio = color_contrast_ratio(a, b);

        if self.json {
            print_json(&ContrastOutput {
                a,
                b,
                ratio,
                level: AccessibilityLevel::from_ratio(ratio),
            })
        } else {
            println!("{ratio:.2}:1 ({})", AccessibilityLevel::from_ratio(ratio));
            Ok(())
        }
    }
}

#[derive(Serialize, Debug)]
struct AccessibilityOutput {
    color: RgbColor,
    score: f64,
    level: AccessibilityLevel,
}

impl AccessibilityArgs {
    /// Execute the accessibility command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let result = color_accessibility_score(color);

        if self.json {
            print_json(&AccessibilityOutput {
                color,
                score: result.score,
                level: result.level,
            })
        } else {
            println!("{color}: {:.2} {}", result.score, result.level);
            Ok(())
        }
    }
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.color)?;
        let harmonies = color_harmonies(base);

        if self.json {
            return print_json(&harmonies);
        }

        let width = harmonies.iter().map(|h| h.name.len()).max().unwrap_or(0);
        for harmony in &harmonies {
            let colors: Vec<String> = harmony.colors.iter().map(RgbColor::to_hex).collect();
            println!("{:<width$}  {}", harmony.name, colors.join(" "));
        }
        Ok(())
    }
}
