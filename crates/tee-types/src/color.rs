use serde::{Deserialize, Serialize};

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const ONYX: Swatch = Swatch { name: "onyx", hex: "#111113" };
pub const CHALK: Swatch = Swatch { name: "chalk", hex: "#f5f5f0" };
pub const GRAPHITE: Swatch = Swatch { name: "graphite", hex: "#3f3f46" };
pub const BONE: Swatch = Swatch { name: "bone", hex: "#ede3d1" };
pub const SAND: Swatch = Swatch { name: "sand", hex: "#d6c7a1" };
pub const MOSS: Swatch = Swatch { name: "moss", hex: "#4d5b3a" };
pub const OCEAN: Swatch = Swatch { name: "ocean", hex: "#0b7285" };
pub const COBALT: Swatch = Swatch { name: "cobalt", hex: "#1f4fd1" };
pub const EMBER: Swatch = Swatch { name: "ember", hex: "#d9480f" };
pub const BLUSH: Swatch = Swatch { name: "blush", hex: "#f4b6c2" };
pub const LILAC: Swatch = Swatch { name: "lilac", hex: "#b197fc" };
pub const VOLT: Swatch = Swatch { name: "volt", hex: "#c6f432" };
pub const GOLD: Swatch = Swatch { name: "gold", hex: "#c9a227" };

/// The fixed swatch palette offered next to the free hex input.
pub const PALETTE: &[Swatch] = &[
    ONYX, CHALK, GRAPHITE, BONE, SAND, MOSS, OCEAN, COBALT, EMBER, BLUSH, LILAC, VOLT, GOLD,
];

/// Look up a palette entry by name, ignoring case.
pub fn swatch(name: &str) -> Option<&'static Swatch> {
    PALETTE.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// A garment color: `#` followed by 3 or 6 hex digits.
///
/// Palette names are accepted on input and stored as their hex value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse free-text input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if is_hex_color(trimmed) {
            return Ok(Self(trimmed.to_string()));
        }
        swatch(trimmed)
            .map(Self::from)
            .ok_or_else(|| ColorError::Invalid {
                input: input.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The palette entry this color matches, if any.
    pub fn swatch(&self) -> Option<&'static Swatch> {
        PALETTE.iter().find(|s| s.hex.eq_ignore_ascii_case(&self.0))
    }
}

impl From<&Swatch> for Color {
    fn from(swatch: &Swatch) -> Self {
        Self(swatch.hex.to_string())
    }
}

impl From<Swatch> for Color {
    fn from(swatch: Swatch) -> Self {
        Self::from(&swatch)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `#` + exactly 3 or 6 hex digits.
pub fn is_hex_color(input: &str) -> bool {
    match input.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Errors from color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color {input:?}: expected #rgb, #rrggbb or a palette name")]
    Invalid { input: String },
}
