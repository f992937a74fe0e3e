//! brandmark - brand icons, logos, palettes and color checks from the terminal.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brandmark::branding::APP_BINARY_NAME;
use brandmark::cli::{
    AccessibilityArgs, CliResult, ConfigArgs, ContrastArgs, FontsArgs, HarmonyArgs, IconArgs,
    LogoArgs, PaletteArgs, StylesArgs,
};

/// Generate brand icons, logos and palettes, and check color accessibility
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an SVG icon for a brand name
    Icon(IconArgs),
    /// Generate a randomized logo for a brand name
    Logo(LogoArgs),
    /// Compute the WCAG contrast ratio between two colors
    Contrast(ContrastArgs),
    /// Score a color's best contrast against white or black
    Accessibility(AccessibilityArgs),
    /// Derive harmony schemes from a base color
    Harmony(HarmonyArgs),
    /// Export a palette as CSS, SCSS or Figma JSON
    Palette(PaletteArgs),
    /// List icon style tokens
    Styles(StylesArgs),
    /// List font pairings
    Fonts(FontsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Icon(args) => args.execute(),
            Self::Logo(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Accessibility(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Palette(args) => args.execute(),
            Self::Styles(args) => args.execute(),
            Self::Fonts(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }
}
