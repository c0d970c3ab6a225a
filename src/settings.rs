// SPDX-License-Identifier: MIT

//! Storage-backed user preferences.
//!
//! A single JSON file holds the small set of persisted settings (currently
//! just the theme override). The shell decides where the file lives; a
//! missing file simply means defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::theme::ThemeMode;

/// Persisted user settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Theme override, `system` unless the user picked one explicitly.
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Load preferences from `path`, falling back to defaults when the file
/// does not exist yet.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_preferences(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences file {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse preferences file {:?}", path))
}

/// Write preferences to `path`, creating parent directories as needed.
pub fn save_preferences(path: &Path, preferences: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create preferences directory {:?}", parent))?;
    }

    let json =
        serde_json::to_string_pretty(preferences).context("Failed to serialize preferences")?;
    fs::write(path, json).with_context(|| format!("Failed to write preferences file {:?}", path))
}
