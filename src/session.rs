//! Per-session record of the assets already shown to a user.
//!
//! Suggestions avoid repeating an icon style or a font until every option
//! has been used once, then start over. The state is an ordinary value
//! owned by whoever drives the session (the CLI for one run, the web
//! server per session id).

use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::IconStyle;

/// Icon styles and fonts already used in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionAssets {
    used_icon_styles: BTreeSet<String>,
    used_fonts: BTreeSet<String>,
}

impl SessionAssets {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an icon style token as used.
    pub fn mark_icon_style_used(&mut self, token: impl Into<String>) {
        self.used_icon_styles.insert(token.into());
    }

    /// Whether an icon style token was already used.
    #[must_use]
    pub fn is_icon_style_used(&self, token: &str) -> bool {
        self.used_icon_styles.contains(token)
    }

    /// Returns the first catalog style not used yet and marks it used.
    ///
    /// When every style has been used, the set is cleared and the cycle
    /// restarts from the first style.
    pub fn next_icon_style(&mut self) -> IconStyle {
        let styles = IconStyle::all();
        let next = styles
            .iter()
            .copied()
            .find(|style| !self.is_icon_style_used(&style.token()));

        let style = if let Some(style) = next {
            style
        } else {
            self.clear_icon_styles();
            styles.first().copied().unwrap_or_default()
        };
        self.mark_icon_style_used(style.token());
        style
    }

    /// Records a font family as used.
    pub fn mark_font_used(&mut self, font: impl Into<String>) {
        self.used_fonts.insert(font.into());
    }

    /// Whether a font family was already used.
    #[must_use]
    pub fn is_font_used(&self, font: &str) -> bool {
        self.used_fonts.contains(font)
    }

    /// Used icon style tokens, sorted.
    pub fn used_icon_styles(&self) -> impl Iterator<Item = &str> {
        self.used_icon_styles.iter().map(String::as_str)
    }

    /// Used font families, sorted.
    pub fn used_fonts(&self) -> impl Iterator<Item = &str> {
        self.used_fonts.iter().map(String::as_str)
    }

    /// Forgets every used icon style.
    pub fn clear_icon_styles(&mut self) {
        self.used_icon_styles.clear();
    }

    /// Forgets every used font.
    pub fn clear_fonts(&mut self) {
        self.used_fonts.clear();
    }

    /// Forgets everything.
    pub fn reset(&mut self) {
        self.clear_icon_styles();
        self.clear_fonts();
    }
}
