//! Catalog listing commands: icon styles and font pairings.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::fonts::{FontCatalog, FontPairing};
use crate::models::{IconCategory, IconStyle, LogoStyle};
use clap::Args;
use serde::Serialize;

/// List the available icon style tokens
#[derive(Debug, Clone, Args)]
pub struct StylesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// List font pairings, optionally for one style family
#[derive(Debug, Clone, Args)]
pub struct FontsArgs {
    /// Style label; mapped to modern, classic, minimal or bold
    #[arg(short, long, value_name = "LABEL")]
    pub style: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct StyleEntry {
    token: String,
    category: &'static str,
    sub_style: &'static str,
}

impl StylesArgs {
    /// Execute the styles command
    pub fn execute(&self) -> CliResult<()> {
        let styles = IconStyle::all();

        if self.json {
            let entries: Vec<StyleEntry> = styles
                .iter()
                .map(|s| StyleEntry {
                    token: s.token(),
                    category: s.category().name(),
                    sub_style: s.sub_style(),
                })
                .collect();
            return print_json(&entries);
        }

        for category in IconCategory::ALL {
            let tokens: Vec<String> = styles
                .iter()
                .filter(|s| s.category() == category)
                .map(IconStyle::token)
                .collect();
            if tokens.is_empty() {
                println!("{}: (none)", category.name());
            } else {
                println!("{}: {}", category.name(), tokens.join(", "));
            }
        }
        Ok(())
    }
}

impl FontsArgs {
    /// Execute the fonts command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = FontCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load font catalog: {e}")))?;

        let pairings: Vec<&FontPairing> = match &self.style {
            Some(label) => catalog.pairings_for(LogoStyle::from_label(label)).collect(),
            None => catalog.all().iter().collect(),
        };

        if self.json {
            return print_json(&pairings);
        }

        for pairing in pairings {
            println!(
                "[{}] {} / {} - {}",
                pairing.family, pairing.heading, pairing.body, pairing.description
            );
        }
        Ok(())
    }
}
