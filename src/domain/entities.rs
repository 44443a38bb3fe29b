use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Glyphs available to the dashboard. Names follow the Font Awesome 4 set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowUp,
    CreditCard,
    Bank,
    ArrowDown,
    User,
    LineChart,
}

impl Icon {
    pub fn glyph_name(&self) -> &'static str {
        match self {
            Icon::ArrowUp => "arrow-up",
            Icon::CreditCard => "credit-card",
            Icon::Bank => "bank",
            Icon::ArrowDown => "arrow-down",
            Icon::User => "user",
            Icon::LineChart => "line-chart",
        }
    }
}

/// Opaque RGB color used to tint icon badges and captions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Accent {
    rgb: [u8; 3],
}

impl Accent {
    /// Tailwind emerald-500, the app's brand color.
    pub const EMERALD: Accent = Accent::from_rgb(0x10, 0xb9, 0x81);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Accent { rgb: [r, g, b] }
    }

    /// Translucent form for badge backgrounds (`#rrggbb22`).
    pub fn tint(&self) -> String {
        format!("{self}22")
    }
}

impl Default for Accent {
    fn default() -> Self {
        Accent::EMERALD
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccentParseError {
    #[error("accent color must start with '#'")]
    MissingHash,
    #[error("accent color must have 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in accent color: {0}")]
    InvalidDigit(String),
}

impl FromStr for Accent {
    type Err = AccentParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or(AccentParseError::MissingHash)?;
        if digits.len() != 6 {
            return Err(AccentParseError::InvalidLength(digits.len()));
        }
        // `from_str_radix` tolerates a sign prefix, so check the digits up front.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AccentParseError::InvalidDigit(digits.to_string()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| AccentParseError::InvalidDigit(digits.to_string()))
        };

        Ok(Accent::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Accent {
    type Error = AccentParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emerald_displays_as_lowercase_hex() {
        assert_eq!(Accent::EMERALD.to_string(), "#10b981");
        assert_eq!(Accent::EMERALD.tint(), "#10b98122");
    }

    #[test]
    fn parses_mixed_case_hex() {
        let accent: Accent = "#10B981".parse().unwrap();
        assert_eq!(accent, Accent::EMERALD);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!("10b981".parse::<Accent>(), Err(AccentParseError::MissingHash));
        assert_eq!("#fff".parse::<Accent>(), Err(AccentParseError::InvalidLength(3)));
        assert!(matches!(
            "#zzb981".parse::<Accent>(),
            Err(AccentParseError::InvalidDigit(_))
        ));
        assert_eq!(
            "#+1+1+1".parse::<Accent>(),
            Err(AccentParseError::InvalidDigit("+1+1+1".to_string()))
        );
        // Multi-byte characters must not panic on slicing.
        assert!("#ééé".parse::<Accent>().is_err());
    }

    #[test]
    fn icons_map_to_font_awesome_names() {
        assert_eq!(Icon::Bank.glyph_name(), "bank");
        assert_eq!(Icon::LineChart.glyph_name(), "line-chart");
        assert_eq!(Icon::CreditCard.glyph_name(), "credit-card");
    }
}
