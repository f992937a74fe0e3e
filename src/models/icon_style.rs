//! Icon style tokens.
//!
//! A style token is a hyphen-joined `category-substyle` string such as
//! `geometric-hexagon`. Only the first hyphen separates the two parts.
//! Tokens that name an unknown category, or a substyle the category does not
//! implement, parse to `None`; the icon synthesizer then draws the background
//! only.

use std::fmt;

/// Top-level icon style family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    /// First letter of the brand name in a square
    Initials,
    /// A single centered shape
    Geometric,
    /// Procedural patterns
    Abstract,
    /// Flat compositions of a square and a circle
    Modern,
    /// Reserved family with no renderer yet; every substyle is empty
    Decorative,
}

impl IconCategory {
    /// All categories in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Initials,
        Self::Geometric,
        Self::Abstract,
        Self::Modern,
        Self::Decorative,
    ];

    /// Token prefix for this category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initials => "initials",
            Self::Geometric => "geometric",
            Self::Abstract => "abstract",
            Self::Modern => "modern",
            Self::Decorative => "decorative",
        }
    }

    /// Looks up a category by token prefix.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// How the initials square is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitialsStyle {
    /// Flat fill, sharp corners
    Simple,
    /// Flat fill, rounded corners
    Rounded,
    /// Gradient fill, rounded corners
    Gradient,
}

impl InitialsStyle {
    /// All substyles in catalog order.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Rounded, Self::Gradient];

    /// Substyle token.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Rounded => "rounded",
            Self::Gradient => "gradient",
        }
    }
}

/// Shape drawn by the geometric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometricShape {
    /// Circle
    Circle,
    /// Axis-aligned square
    Square,
    /// Regular hexagon with a vertex at 0 degrees
    Hexagon,
    /// Equilateral triangle, apex up
    Triangle,
    /// Square rotated 45 degrees
    Diamond,
}

impl GeometricShape {
    /// All shapes in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Circle,
        Self::Square,
        Self::Hexagon,
        Self::Triangle,
        Self::Diamond,
    ];

    /// Substyle token.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Hexagon => "hexagon",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
        }
    }
}

/// Pattern drawn by the abstract family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractPattern {
    /// One cubic Bezier wave across the canvas
    Waves,
    /// 5x5 grid of dots
    Dots,
    /// 4x4 cells of crossing translucent lines
    Mesh,
    /// Two-turn outward spiral
    Swirl,
}

impl AbstractPattern {
    /// All patterns in catalog order.
    pub const ALL: [Self; 4] = [Self::Waves, Self::Dots, Self::Mesh, Self::Swirl];

    /// Substyle token.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Waves => "waves",
            Self::Dots => "dots",
            Self::Mesh => "mesh",
            Self::Swirl => "swirl",
        }
    }
}

/// Composition drawn by the modern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModernStyle {
    /// Square with a knockout circle
    Minimal,
    /// Outlined square with a filled circle
    Tech,
    /// Diagonal gradient square
    Gradient,
}

impl ModernStyle {
    /// All substyles in catalog order.
    pub const ALL: [Self; 3] = [Self::Minimal, Self::Tech, Self::Gradient];

    /// Substyle token.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Tech => "tech",
            Self::Gradient => "gradient",
        }
    }
}

/// A renderable icon style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconStyle {
    /// `initials-*`
    Initials(InitialsStyle),
    /// `geometric-*`
    Geometric(GeometricShape),
    /// `abstract-*`
    Abstract(AbstractPattern),
    /// `modern-*`
    Modern(ModernStyle),
}

impl IconStyle {
    /// Token used when no style is given.
    pub const DEFAULT_TOKEN: &'static str = "initials-simple";

    /// Parses a style token.
    ///
    /// Matching is ASCII case-insensitive. A bare `initials` means
    /// `initials-simple`; every other category needs an explicit substyle.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandmark::models::{GeometricShape, IconStyle};
    ///
    /// assert_eq!(
    ///     IconStyle::parse("geometric-hexagon"),
    ///     Some(IconStyle::Geometric(GeometricShape::Hexagon))
    /// );
    /// assert_eq!(IconStyle::parse("unknown-thing"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        let (category, sub_style) = split_style_token(&token);

        match IconCategory::from_name(category)? {
            IconCategory::Initials => {
                if sub_style.is_empty() {
                    return Some(Self::Initials(InitialsStyle::Simple));
                }
                InitialsStyle::ALL
                    .into_iter()
                    .find(|s| s.name() == sub_style)
                    .map(Self::Initials)
            }
            IconCategory::Geometric => GeometricShape::ALL
                .into_iter()
                .find(|s| s.name() == sub_style)
                .map(Self::Geometric),
            IconCategory::Abstract => AbstractPattern::ALL
                .into_iter()
                .find(|s| s.name() == sub_style)
                .map(Self::Abstract),
            IconCategory::Modern => ModernStyle::ALL
                .into_iter()
                .find(|s| s.name() == sub_style)
                .map(Self::Modern),
            IconCategory::Decorative => None,
        }
    }

    /// Category of this style.
    #[must_use]
    pub const fn category(&self) -> IconCategory {
        match self {
            Self::Initials(_) => IconCategory::Initials,
            Self::Geometric(_) => IconCategory::Geometric,
            Self::Abstract(_) => IconCategory::Abstract,
            Self::Modern(_) => IconCategory::Modern,
        }
    }

    /// Substyle token.
    #[must_use]
    pub const fn sub_style(&self) -> &'static str {
        match self {
            Self::Initials(s) => s.name(),
            Self::Geometric(s) => s.name(),
            Self::Abstract(s) => s.name(),
            Self::Modern(s) => s.name(),
        }
    }

    /// Full `category-substyle` token.
    #[must_use]
    pub fn token(&self) -> String {
        format!("{}-{}", self.category().name(), self.sub_style())
    }

    /// Every renderable style, grouped by category in catalog order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut styles = Vec::new();
        styles.extend(InitialsStyle::ALL.map(Self::Initials));
        styles.extend(GeometricShape::ALL.map(Self::Geometric));
        styles.extend(AbstractPattern::ALL.map(Self::Abstract));
        styles.extend(ModernStyle::ALL.map(Self::Modern));
        styles
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self::Initials(InitialsStyle::Simple)
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category().name(), self.sub_style())
    }
}

/// Splits a style token at its first hyphen.
///
/// A token without a hyphen is all category with an empty substyle.
#[must_use]
pub fn split_style_token(token: &str) -> (&str, &str) {
    token.split_once('-').unwrap_or((token, ""))
}
