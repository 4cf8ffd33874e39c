//! Role color parsing: named colors or hex codes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Named colors accepted for team roles, normalized to lowercase with
/// underscores. A subset of the platform palette plus a few pastels.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("red", 0xe74c3c),
    ("dark_red", 0x992d22),
    ("green", 0x2ecc71),
    ("dark_green", 0x1f8b4c),
    ("blue", 0x3498db),
    ("dark_blue", 0x206694),
    ("purple", 0x9b59b6),
    ("dark_purple", 0x71368a),
    ("magenta", 0xe91e63),
    ("orange", 0xe67e22),
    ("dark_orange", 0xa84300),
    ("gold", 0xf1c40f),
    ("yellow", 0xf1c40f),
    ("teal", 0x1abc9c),
    ("dark_teal", 0x11806a),
    ("blurple", 0x5865f2),
    ("pink", 0xff69b4),
    ("light_blue", 0x87cefa),
    ("light_green", 0x90ee90),
    ("light_purple", 0xd8bfd8),
    ("light_orange", 0xffc87c),
];

/// A 24-bit RGB role color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColor(pub u32);

impl RoleColor {
    /// The platform's default (unset) role color.
    pub const DEFAULT: Self = Self(0);

    /// Default color used when bulk-provisioning roles.
    pub const ORANGE: Self = Self(0xe67e22);

    /// Comma-joined list of accepted color names, for error messages.
    pub fn available_names() -> String {
        NAMED_COLORS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for RoleColor {
    type Err = DomainError;

    /// Accepts a color name (spaces and dashes treated as underscores) or a
    /// hex code with optional leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace([' ', '-'], "_");
        if let Some((_, value)) = NAMED_COLORS.iter().find(|(name, _)| *name == normalized) {
            return Ok(Self(*value));
        }

        let hex = s.trim_start_matches('#');
        u32::from_str_radix(hex, 16).map(Self).map_err(|_| {
            DomainError::ValidationFailed(format!(
                "Invalid color \"{s}\". Use a color name ({}) or hex code (#ff6a00)",
                RoleColor::available_names()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        assert_eq!("red".parse::<RoleColor>().unwrap(), RoleColor(0xe74c3c));
        assert_eq!("Light Blue".parse::<RoleColor>().unwrap(), RoleColor(0x87cefa));
        assert_eq!("dark-teal".parse::<RoleColor>().unwrap(), RoleColor(0x11806a));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!("#ff6a00".parse::<RoleColor>().unwrap(), RoleColor(0xff6a00));
        assert_eq!("ff6a00".parse::<RoleColor>().unwrap(), RoleColor(0xff6a00));
    }

    #[test]
    fn test_invalid_color() {
        let err = "chartreuse-ish".parse::<RoleColor>().unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));
    }
}
