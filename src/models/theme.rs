// SPDX-License-Identifier: MIT

//! Theme mode selection and resolution against the host color scheme.
//!
//! The user picks `light`, `dark`, or `system`; `system` defers to whatever
//! scheme the host platform reports. The chosen mode is persisted through
//! [`crate::settings`], the host scheme never is.

use serde::{Deserialize, Serialize};

/// User-selected theme override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Color scheme reported by the host platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SystemScheme {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Stable storage string, also used for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parse a stored mode string; anything unrecognized is rejected so a
    /// tampered preference falls back to the default at the call site.
    pub fn parse(value: &str) -> Option<ThemeMode> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Whether the effective scheme is dark, resolving `System` against the
    /// host-reported scheme.
    pub fn is_dark(&self, system: SystemScheme) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system == SystemScheme::Dark,
        }
    }

    /// Flip the effective scheme. Toggling always lands on an explicit mode,
    /// never back on `System`.
    pub fn toggled(&self, system: SystemScheme) -> ThemeMode {
        if self.is_dark(system) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SystemScheme, ThemeMode};

    #[test]
    fn system_mode_follows_host_scheme() {
        assert!(ThemeMode::System.is_dark(SystemScheme::Dark));
        assert!(!ThemeMode::System.is_dark(SystemScheme::Light));
    }

    #[test]
    fn explicit_modes_ignore_host_scheme() {
        assert!(ThemeMode::Dark.is_dark(SystemScheme::Light));
        assert!(!ThemeMode::Light.is_dark(SystemScheme::Dark));
    }

    #[test]
    fn toggle_flips_effective_scheme_to_explicit_mode() {
        assert_eq!(
            ThemeMode::System.toggled(SystemScheme::Dark),
            ThemeMode::Light
        );
        assert_eq!(
            ThemeMode::System.toggled(SystemScheme::Light),
            ThemeMode::Dark
        );
        assert_eq!(ThemeMode::Dark.toggled(SystemScheme::Light), ThemeMode::Light);
    }

    #[test]
    fn storage_strings_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::parse("midnight"), None);
    }
}
