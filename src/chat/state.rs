// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session state for the chat widget
//!
//! Visibility, relationship and mood indicators. The presentation layer reads
//! these to decide what to draw; nothing here touches the screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BellaError;

/// Heart icons indexed by `min(level - 1, 9)`
pub const HEART_ICONS: [&str; 10] = [
    "💔", "💝", "💖", "💕", "💓", "💗", "💘", "💞", "💟", "❤️‍🔥",
];

/// Mood shown next to Bella's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Excited,
    Thoughtful,
    Caring,
    Playful,
    #[default]
    Default,
}

impl Emotion {
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Excited => "excited",
            Emotion::Thoughtful => "thoughtful",
            Emotion::Caring => "caring",
            Emotion::Playful => "playful",
            Emotion::Default => "default",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Emotion::Happy | Emotion::Default => "😊",
            Emotion::Excited => "😍",
            Emotion::Thoughtful => "🤔",
            Emotion::Caring => "🥰",
            Emotion::Playful => "😄",
        }
    }

    /// Parse a name reported by the AI backend, falling back to `Default`.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Emotion {
    type Err = BellaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "excited" => Ok(Emotion::Excited),
            "thoughtful" => Ok(Emotion::Thoughtful),
            "caring" => Ok(Emotion::Caring),
            "playful" => Ok(Emotion::Playful),
            "default" => Ok(Emotion::Default),
            other => Err(BellaError::InvalidInput(format!("unknown emotion: {other}"))),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emotion theme applied to the chat container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Romantic,
    Caring,
    Playful,
    Supportive,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Default,
        Theme::Romantic,
        Theme::Caring,
        Theme::Playful,
        Theme::Supportive,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Romantic => "romantic",
            Theme::Caring => "caring",
            Theme::Playful => "playful",
            Theme::Supportive => "supportive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "Warm & friendly",
            Theme::Romantic => "Romantic",
            Theme::Caring => "Caring",
            Theme::Playful => "Playful",
            Theme::Supportive => "Supportive",
        }
    }

    /// Class added to the chat container; the default theme adds none.
    pub fn css_class(&self) -> Option<String> {
        match self {
            Theme::Default => None,
            other => Some(format!("{}-theme", other.id())),
        }
    }

    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = BellaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id() == wanted)
            .ok_or_else(|| BellaError::InvalidInput(format!("unknown theme: {wanted}")))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Transient UI-relevant state of a chat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub open: bool,
    /// Toggled independently of `open`; only `close()` couples the two.
    pub settings_open: bool,
    pub relationship_level: u32,
    pub emotion: Emotion,
    pub theme: Theme,
    pub typing: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            open: false,
            settings_open: false,
            relationship_level: 1,
            emotion: Emotion::Default,
            theme: Theme::Default,
            typing: false,
        }
    }
}

impl SessionState {
    pub fn heart_icon(&self) -> &'static str {
        heart_icon_for(self.relationship_level)
    }

    pub fn relationship_label(&self) -> String {
        format!("Relationship level {}", self.relationship_level)
    }
}

/// Heart icon for a relationship level; levels below 1 count as 1.
pub fn heart_icon_for(level: u32) -> &'static str {
    let index = (level.max(1) as usize - 1).min(HEART_ICONS.len() - 1);
    HEART_ICONS[index]
}
