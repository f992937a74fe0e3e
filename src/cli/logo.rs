//! Simple logo command.

use crate::cli::common::{load_config_or_default, write_or_print, CliResult};
use crate::config::Config;
use crate::logo::{generate_simple_logo_seeded, random_simple_logo, SimpleLogo};
use crate::models::LogoConfig;
use clap::Args;
use std::path::PathBuf;

/// Generate a randomized logo for a brand name
#[derive(Debug, Clone, Args)]
pub struct LogoArgs {
    /// Brand name shown in the logo
    #[arg(value_name = "BRAND")]
    pub brand: String,

    /// Style label, e.g. "modern", "elegant", "minimalist", "bold"
    #[arg(short, long, value_name = "LABEL")]
    pub style: Option<String>,

    /// Industry caption (shown by some templates)
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub industry: String,

    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Print SVG markup instead of a data URL
    #[arg(long)]
    pub svg: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LogoArgs {
    /// Execute the logo command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config_or_default();
        let logo = self.generate(&config);

        eprintln!(
            "Style: {}, template: {}",
            logo.style,
            logo.template.name()
        );

        let content = if self.svg {
            logo.svg
        } else {
            format!("{}\n", logo.to_data_url())
        };
        write_or_print(&content, self.output.as_deref())
    }

    fn generate(&self, config: &Config) -> SimpleLogo {
        let style = self
            .style
            .clone()
            .unwrap_or_else(|| config.logo.style.name().to_string());
        let request = LogoConfig::new(self.brand.clone(), style, self.industry.clone());

        match self.seed {
            Some(seed) => generate_simple_logo_seeded(&request, seed),
            None => random_simple_logo(&request),
        }
    }
}
