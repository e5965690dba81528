//! User theme preference
//!
//! The preference is the user's stored intent. It is one of three values:
//! an explicit `light` or `dark` choice, or `system`, which defers to the
//! operating system's reported color scheme.

use crate::scheme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The user's stored theme intent
///
/// `System` is the default: a fresh install follows the OS until the user
/// makes an explicit choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// The literal string written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Resolve to a concrete scheme
    ///
    /// A concrete preference resolves to itself; `System` resolves to the
    /// latest OS-reported scheme.
    pub fn resolve(&self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => system,
        }
    }

    /// Whether this preference follows the OS signal
    pub fn is_system(&self) -> bool {
        matches!(self, ThemePreference::System)
    }
}

/// Error for strings that are not `light`, `dark`, or `system`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme preference: {0:?}")]
pub struct ParsePreferenceError(pub String);

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
