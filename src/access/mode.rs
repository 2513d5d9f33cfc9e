//! Permission modes
//!
//! A mode is chosen once at startup and never changes for the session.

use serde::Deserialize;
use std::fmt;

/// Capability tier. Ordered: `Basic < Elevated < Admin`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Basic,
    Elevated,
    Admin,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Elevated => "elevated",
            Mode::Admin => "admin",
        }
    }

    /// True when this mode carries at least the capabilities of `required`.
    pub fn satisfies(&self, required: Mode) -> bool {
        *self >= required
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn modes_are_ordered_by_capability() {
        assert!(Mode::Basic < Mode::Elevated);
        assert!(Mode::Elevated < Mode::Admin);
        assert!(Mode::Admin.satisfies(Mode::Elevated));
        assert!(!Mode::Basic.satisfies(Mode::Elevated));
    }

    #[test]
    fn only_three_names_parse() {
        assert_eq!(Mode::from_str("admin", false), Ok(Mode::Admin));
        assert_eq!(Mode::from_str("elevated", false), Ok(Mode::Elevated));
        assert!(Mode::from_str("root", false).is_err());
        assert!(Mode::from_str("Admin", false).is_err());
    }

    #[test]
    fn display_matches_the_command_line_name() {
        for mode in Mode::value_variants() {
            let name = mode.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(mode.to_string(), name);
            assert_eq!(mode.as_str(), name);
        }
    }
}
