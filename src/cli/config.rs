//! Configuration management CLI commands.

use crate::cli::common::{parse_color, print_json, CliError, CliResult};
use crate::config::Config;
use crate::export::PaletteFormat;
use crate::models::{IconStyle, LogoStyle};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default icon style token
    #[arg(long, value_name = "STYLE")]
    icon_style: Option<String>,

    /// Default icon foreground color
    #[arg(long, value_name = "HEX")]
    icon_color: Option<String>,

    /// Default icon background color
    #[arg(long, value_name = "HEX")]
    icon_background: Option<String>,

    /// Default logo style family (modern, classic, minimal or bold)
    #[arg(long, value_name = "STYLE")]
    logo_style: Option<String>,

    /// Default palette export format (css, scss or figma)
    #[arg(long, value_name = "FORMAT")]
    export_format: Option<String>,

    /// Directory `palette --save` writes to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Web server bind address
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.icon_style.is_none()
            && self.icon_color.is_none()
            && self.icon_background.is_none()
            && self.logo_style.is_none()
            && self.export_format.is_none()
            && self.output_dir.is_none()
            && self.host.is_none()
            && self.port.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified. See `brandmark config set --help`",
            ));
        }

        // Never overwrite a file we could not read.
        let mut config = Config::load().map_err(|e| {
            CliError::validation(format!(
                "Failed to load configuration, not saving: {e:#}"
            ))
        })?;
        self.apply(&mut config)?;

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }

    /// Validates each given value and writes it into `config`.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(style) = &self.icon_style {
            let parsed = IconStyle::parse(style).ok_or_else(|| {
                CliError::validation(format!(
                    "Unknown icon style '{style}'. Run `brandmark styles` for the list"
                ))
            })?;
            config.icon.style = parsed.token();
        }
        if let Some(color) = &self.icon_color {
            config.icon.color = parse_color(color)?;
        }
        if let Some(color) = &self.icon_background {
            config.icon.background_color = parse_color(color)?;
        }
        if let Some(style) = &self.logo_style {
            config.logo.style = LogoStyle::ALL
                .into_iter()
                .find(|s| s.name() == style.to_lowercase())
                .ok_or_else(|| {
                    CliError::validation(
                        "Invalid logo style. Must be 'modern', 'classic', 'minimal', or 'bold'",
                    )
                })?;
        }
        if let Some(format) = &self.export_format {
            let format: PaletteFormat = format.parse()?;
            config.export.format = format.name().to_string();
        }
        if let Some(path) = &self.output_dir {
            config.export.output_dir.clone_from(path);
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            if port == 0 {
                return Err(CliError::validation("Port must be between 1 and 65535"));
            }
            config.server.port = port;
        }
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Brandmark Configuration");
    println!("=======================");
    println!();

    println!("Icon:");
    println!("  Style: {}", config.icon.style);
    println!("  Color: {}", config.icon.color);
    println!("  Background: {}", config.icon.background_color);
    println!();

    println!("Logo:");
    println!("  Style: {}", config.logo.style);
    println!();

    println!("Export:");
    println!("  Format: {}", config.export.format);
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!();

    println!("Server:");
    println!("  Address: {}", config.bind_address());
}
