//! Icon generation command.

use crate::cli::common::{load_config_or_default, parse_color, write_or_print, CliResult};
use crate::config::Config;
use crate::icon::{generate_icon, svg_data_url, IconOptions};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Generate an SVG icon for a brand name
#[derive(Debug, Clone, Args)]
pub struct IconArgs {
    /// Brand name; its first character is used by initials styles
    #[arg(value_name = "BRAND")]
    pub brand: String,

    /// Style token, e.g. "geometric-hexagon" (see `brandmark styles`)
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Foreground color as #RRGGBB
    #[arg(short, long, value_name = "HEX")]
    pub color: Option<String>,

    /// Background color as #RRGGBB
    #[arg(short, long, value_name = "HEX")]
    pub background: Option<String>,

    /// Print a base64 data URL instead of SVG markup
    #[arg(long)]
    pub data_url: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl IconArgs {
    /// Execute the icon command
    pub fn execute(&self) -> CliResult<()> {
        let options = self.options(&load_config_or_default())?;
        debug!(brand = %self.brand, style = %options.style, "rendering icon");

        let svg = generate_icon(&self.brand, &options);
        let content = if self.data_url {
            format!("{}\n", svg_data_url(&svg))
        } else {
            svg
        };

        write_or_print(&content, self.output.as_deref())
    }

    /// Merges the flags over the configured defaults.
    fn options(&self, config: &Config) -> CliResult<IconOptions> {
        let mut options = IconOptions::with_style(
            self.style.clone().unwrap_or_else(|| config.icon.style.clone()),
        )
        .color(config.icon.color)
        .background_color(config.icon.background_color);

        if let Some(color) = &self.color {
            options = options.color(parse_color(color)?);
        }
        if let Some(background) = &self.background {
            options = options.background_color(parse_color(background)?);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;
    use crate::models::RgbColor;

    fn args() -> IconArgs {
        IconArgs {
            brand: "Acme".to_string(),
            style: None,
            color: None,
            background: None,
            data_url: false,
            output: None,
        }
    }

    #[test]
    fn test_options_fall_back_to_config() {
        let mut config = Config::new();
        config.icon.style = "modern-tech".to_string();
        config.icon.color = RgbColor::new(1, 2, 3);

        let options = args().options(&config).unwrap();
        assert_eq!(options.style, "modern-tech");
        assert_eq!(options.color, RgbColor::new(1, 2, 3));
        assert_eq!(options.background_color, RgbColor::WHITE);
    }

    #[test]
    fn test_flags_override_config() {
        let args = IconArgs {
            style: Some("geometric-circle".to_string()),
            background: Some("#000000".to_string()),
            ..args()
        };
        let options = args.options(&Config::new()).unwrap();
        assert_eq!(options.style, "geometric-circle");
        assert_eq!(options.background_color, RgbColor::BLACK);
    }

    #[test]
    fn test_bad_color_is_validation_error() {
        let args = IconArgs {
            color: Some("#12".to_string()),
            ..args()
        };
        assert_eq!(
            args.options(&Config::new()).unwrap_err().code,
            ExitCode::ValidationError
        );
    }
}
