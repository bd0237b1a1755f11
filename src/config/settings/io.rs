// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::bella_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(
                target: "bella.config",
                path = %path.display(),
                "settings file not found; using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path, merging into the existing file so
    /// keys this version does not know about survive.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let current = serde_json::to_value(self)?;
        let merged = match std::fs::read_to_string(path) {
            Ok(existing) => match serde_json::from_str::<Value>(&existing) {
                Ok(existing) => merge_json(existing, current),
                // Unreadable JSON is replaced outright.
                Err(_) => current,
            },
            Err(_) => current,
        };

        std::fs::write(path, serde_json::to_string_pretty(&merged)?)?;
        Ok(())
    }

    /// Get the bella home directory (~/.bella or $BELLA_HOME).
    pub fn bella_home() -> PathBuf {
        if let Ok(home) = std::env::var("BELLA_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bella")
    }
}

/// Overlay `update` onto `existing`, recursing into objects. Values from
/// `update` win; keys only present in `existing` are kept.
fn merge_json(existing: Value, update: Value) -> Value {
    match (existing, update) {
        (Value::Object(mut kept), Value::Object(incoming)) => {
            for (key, value) in incoming {
                let merged = match kept.remove(&key) {
                    Some(previous) => merge_json(previous, value),
                    None => value,
                };
                kept.insert(key, merged);
            }
            Value::Object(kept)
        }
        (_, update) => update,
    }
}
