//! Palette export command.

use crate::cli::common::{load_config_or_default, write_or_print, CliError, CliResult};
use crate::export::{export_palette, suggested_filename, PaletteFormat};
use crate::models::NamedColor;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Export a palette as CSS, SCSS or Figma JSON
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette color as "Name=#RRGGBB" (repeatable)
    #[arg(short, long = "color", value_name = "NAME=HEX")]
    pub colors: Vec<String>,

    /// JSON file with an array of {"name", "hex"} objects
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format: css, scss or figma (defaults to the configured format)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write to the configured export directory as [name]_palette_[date].[ext]
    #[arg(long)]
    pub save: bool,

    /// Palette name used for the saved filename
    #[arg(long, value_name = "NAME", default_value = "brand")]
    pub name: String,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config_or_default();
        let format: PaletteFormat = match &self.format {
            Some(format) => format.parse()?,
            None => config
                .export_format()
                .map_err(|e| CliError::validation(format!("{e:#}")))?,
        };

        let colors = self.collect_colors()?;
        if colors.is_empty() {
            return Err(CliError::validation(
                "No colors given. Use --color \"Name=#RRGGBB\" or --input FILE",
            ));
        }

        let content = export_palette(&colors, format);

        if self.save {
            fs::create_dir_all(&config.export.output_dir).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    config.export.output_dir.display()
                ))
            })?;
            let date = chrono::Local::now().date_naive();
            let path = config
                .export
                .output_dir
                .join(suggested_filename(&self.name, format, date));
            return write_or_print(&content, Some(&path));
        }

        write_or_print(&content, self.output.as_deref())
    }

    /// Colors from `--input` first, then `--color` flags in order.
    fn collect_colors(&self) -> CliResult<Vec<NamedColor>> {
        let mut colors = match &self.input {
            Some(path) => read_palette_file(path)?,
            None => Vec::new(),
        };
        for arg in &self.colors {
            colors.push(parse_color_arg(arg)?);
        }
        Ok(colors)
    }
}

/// Parses `Name=#RRGGBB`. The name may contain spaces; the last `=` splits.
fn parse_color_arg(arg: &str) -> CliResult<NamedColor> {
    let (name, hex) = arg.rsplit_once('=').ok_or_else(|| {
        CliError::validation(format!("Invalid color '{arg}'. Expected NAME=#RRGGBB"))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::validation(format!(
            "Invalid color '{arg}'. Name cannot be empty"
        )));
    }
    Ok(NamedColor::parse(name, hex)?)
}

fn read_palette_file(path: &Path) -> CliResult<Vec<NamedColor>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!("Invalid palette file {}: {e}", path.display()))
    })
}
