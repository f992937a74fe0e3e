//! Randomized "simple logo" generation.
//!
//! Unlike the icon synthesizer, the simple logo generator picks its palette
//! and template at random. The random source is a parameter: production code
//! passes [`rand::rng()`], tests pass a seeded [`StdRng`].

mod templates;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

pub use templates::LogoTemplate;

use crate::icon::svg_data_url;
use crate::models::{ColorTriple, LogoConfig, LogoStyle};

/// A rendered simple logo and the random choices behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleLogo {
    /// Style family the request mapped to.
    pub style: LogoStyle,
    /// Template that was drawn.
    pub template: LogoTemplate,
    /// Palette that was used.
    pub palette: ColorTriple,
    /// SVG document.
    pub svg: String,
}

impl SimpleLogo {
    /// The logo as a `data:image/svg+xml;base64,...` URL.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        svg_data_url(&self.svg)
    }
}

/// Generates a logo, drawing palette and template uniformly from `rng`.
///
/// # Examples
///
/// ```
/// use brandmark::logo::generate_simple_logo;
/// use brandmark::models::{LogoConfig, LogoStyle};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = LogoConfig::new("Acme", "bold", "Retail");
/// let logo = generate_simple_logo(&config, &mut StdRng::seed_from_u64(7));
/// assert_eq!(logo.style, LogoStyle::Bold);
/// assert!(logo.to_data_url().starts_with("data:image/svg+xml;base64,"));
/// ```
pub fn generate_simple_logo<R: Rng + ?Sized>(config: &LogoConfig, rng: &mut R) -> SimpleLogo {
    let style = LogoStyle::from_label(&config.style);
    let palettes = style.palettes();
    let palette = palettes[rng.random_range(0..palettes.len())];
    let template = LogoTemplate::ALL[rng.random_range(0..LogoTemplate::ALL.len())];

    debug!(
        brand = %config.brand_name,
        style = %style,
        template = template.name(),
        "generating simple logo"
    );

    SimpleLogo {
        style,
        template,
        palette,
        svg: template.render(config, palette),
    }
}

/// Generates a logo from a fixed seed; the same seed and config always give
/// the same logo.
#[must_use]
pub fn generate_simple_logo_seeded(config: &LogoConfig, seed: u64) -> SimpleLogo {
    generate_simple_logo(config, &mut StdRng::seed_from_u64(seed))
}

/// Generates a logo from the thread-local random source.
#[must_use]
pub fn random_simple_logo(config: &LogoConfig) -> SimpleLogo {
    generate_simple_logo(config, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config() -> LogoConfig {
        LogoConfig::new("Acme", "classic", "Finance")
    }

    #[test]
    fn test_seeded_is_reproducible() {
        for seed in 0..20 {
            assert_eq!(
                generate_simple_logo_seeded(&config(), seed),
                generate_simple_logo_seeded(&config(), seed)
            );
        }
    }

    #[test]
    fn test_choices_come_from_the_family() {
        for seed in 0..50 {
            let logo = generate_simple_logo_seeded(&config(), seed);
            assert_eq!(logo.style, LogoStyle::Classic);
            assert!(LogoStyle::Classic.palettes().contains(&logo.palette));
            assert!(logo.svg.contains(&logo.palette.primary.to_hex()));
        }
    }

    #[test]
    fn test_all_templates_are_reachable() {
        let templates: HashSet<LogoTemplate> = (0..200)
            .map(|seed| generate_simple_logo_seeded(&config(), seed).template)
            .collect();
        assert_eq!(templates.len(), LogoTemplate::ALL.len());
    }

    #[test]
    fn test_data_url_decodes_to_svg() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let logo = generate_simple_logo_seeded(&config(), 3);
        let url = logo.to_data_url();
        let encoded = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, logo.svg);
    }

    #[test]
    fn test_random_logo_uses_mapped_style() {
        let logo = random_simple_logo(&LogoConfig::new("Zed", "minimal", ""));
        assert_eq!(logo.style, LogoStyle::Minimal);
        assert!(logo.svg.contains("Zed"));
    }
}
