//! Font pairing suggestions.
//!
//! The catalog is embedded in the binary at compile time. Each pairing
//! belongs to one logo style family; suggestions rotate through a family's
//! pairings without repeating a heading font within a session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::LogoStyle;
use crate::session::SessionAssets;

/// A heading/body font combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    /// Font family for headings and the wordmark
    pub heading: String,
    /// Font family for body text
    pub body: String,
    /// Style family the pairing suits
    pub family: LogoStyle,
    /// Short rationale shown next to the suggestion
    #[serde(default)]
    pub description: String,
}

/// Schema of `font_pairings.json`.
#[derive(Debug, Deserialize)]
struct FontCatalogFile {
    #[allow(dead_code)]
    version: String,
    pairings: Vec<FontPairing>,
}

/// The embedded font pairing catalog.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    pairings: Vec<FontPairing>,
}

impl FontCatalog {
    /// Loads the catalog from the embedded JSON file.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded file is malformed.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("data/font_pairings.json");
        let file: FontCatalogFile = serde_json::from_str(json_data)
            .context("Failed to parse embedded font_pairings.json")?;
        Ok(Self {
            pairings: file.pairings,
        })
    }

    /// Every pairing, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[FontPairing] {
        &self.pairings
    }

    /// Pairings for one style family, in catalog order.
    pub fn pairings_for(&self, style: LogoStyle) -> impl Iterator<Item = &FontPairing> {
        self.pairings.iter().filter(move |p| p.family == style)
    }

    /// Suggests the next pairing for `style` whose heading font the session
    /// has not used, and marks both of its fonts used.
    ///
    /// Once every pairing of the family is used, the session's fonts are
    /// cleared and the rotation starts again. Returns `None` only for a
    /// family without pairings.
    pub fn suggest_pairing(
        &self,
        style: LogoStyle,
        session: &mut SessionAssets,
    ) -> Option<&FontPairing> {
        let first = self.pairings_for(style).next()?;
        let unused = self
            .pairings_for(style)
            .find(|p| !session.is_font_used(&p.heading));
        let pairing = match unused {
            Some(pairing) => pairing,
            None => {
                debug!(style = %style, "all font pairings used, starting over");
                session.clear_fonts();
                first
            }
        };

        session.mark_font_used(pairing.heading.clone());
        session.mark_font_used(pairing.body.clone());
        Some(pairing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = FontCatalog::load().unwrap();
        assert!(!catalog.all().is_empty());
        for style in LogoStyle::ALL {
            assert_eq!(catalog.pairings_for(style).count(), 3, "{style}");
        }
    }

    #[test]
    fn test_suggestions_rotate_within_family() {
        let catalog = FontCatalog::load().unwrap();
        let mut session = SessionAssets::new();

        let headings: Vec<String> = (0..3)
            .map(|_| {
                catalog
                    .suggest_pairing(LogoStyle::Classic, &mut session)
                    .unwrap()
                    .heading
                    .clone()
            })
            .collect();
        assert_eq!(
            headings,
            ["Playfair Display", "Cormorant Garamond", "Libre Baskerville"]
        );
        assert!(session.is_font_used("Lato"));

        // exhausted: starts over and forgets the previous cycle
        let again = catalog
            .suggest_pairing(LogoStyle::Classic, &mut session)
            .unwrap();
        assert_eq!(again.heading, "Playfair Display");
        assert!(!session.is_font_used("Lato"));
    }

    #[test]
    fn test_body_font_shared_with_heading() {
        let catalog = FontCatalog::load().unwrap();
        let mut session = SessionAssets::new();
        // modern's second pairing uses Inter as body, minimal's first as heading
        catalog.suggest_pairing(LogoStyle::Modern, &mut session);
        catalog.suggest_pairing(LogoStyle::Modern, &mut session);
        let minimal = catalog
            .suggest_pairing(LogoStyle::Minimal, &mut session)
            .unwrap();
        assert_eq!(minimal.heading, "Work Sans");
    }
}
