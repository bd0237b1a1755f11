// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Bella
//!
//! Handles loading and saving settings from ~/.bella/settings.json

use serde::{Deserialize, Serialize};

use crate::chat::{ChatEvent, DEFAULT_CAPACITY, DEFAULT_WELCOME_MESSAGE};

mod io;
mod validation;

/// Main settings structure, stored in ~/.bella/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Chat log and proactive message settings
    #[serde(default)]
    pub chat: ChatConfig,

    /// Initial values relayed to the host when a session starts
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Chat log configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Maximum number of messages kept in the log
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,

    /// Message seeded into a fresh or cleared log
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,

    /// Lower bound (inclusive) of the proactive message delay
    #[serde(default = "default_proactive_delay_min_ms")]
    pub proactive_delay_min_ms: u64,

    /// Upper bound (exclusive) of the proactive message delay
    #[serde(default = "default_proactive_delay_max_ms")]
    pub proactive_delay_max_ms: u64,
}

/// Default settings for new sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Provider selected when the widget starts
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Emotion theme id
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether replies are read aloud
    #[serde(default)]
    pub voice_enabled: bool,

    /// Whether unsolicited check-in messages are allowed
    #[serde(default)]
    pub proactive_enabled: bool,

    /// Name the user asked to be called
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
            welcome_message: default_welcome_message(),
            proactive_delay_min_ms: default_proactive_delay_min_ms(),
            proactive_delay_max_ms: default_proactive_delay_max_ms(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            theme: default_theme(),
            voice_enabled: false,
            proactive_enabled: false,
            display_name: None,
        }
    }
}

impl DefaultsConfig {
    /// Fold a relayed event into the stored defaults. Returns true when a
    /// persisted value changed.
    pub fn record(&mut self, event: &ChatEvent) -> bool {
        match event {
            ChatEvent::DisplayNameSaved(name) => {
                if self.display_name.as_deref() == Some(name.as_str()) {
                    return false;
                }
                self.display_name = Some(name.clone());
                true
            }
            ChatEvent::VoiceToggled(enabled) => {
                std::mem::replace(&mut self.voice_enabled, *enabled) != *enabled
            }
            ChatEvent::ProactiveToggled(enabled) => {
                std::mem::replace(&mut self.proactive_enabled, *enabled) != *enabled
            }
            _ => false,
        }
    }
}

fn default_max_messages() -> usize {
    DEFAULT_CAPACITY
}

fn default_welcome_message() -> String {
    DEFAULT_WELCOME_MESSAGE.to_string()
}

fn default_proactive_delay_min_ms() -> u64 {
    2000
}

fn default_proactive_delay_max_ms() -> u64 {
    5000
}

fn default_provider() -> String {
    "claude".to_string()
}

fn default_theme() -> String {
    "default".to_string()
}
