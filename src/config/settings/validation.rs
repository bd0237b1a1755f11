// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use crate::chat::DelayWindow;
use crate::error::{BellaError, Result};

use super::Settings;

impl Settings {
    /// Check that the settings describe a usable session.
    pub fn validate(&self) -> Result<()> {
        if self.chat.max_messages == 0 {
            return Err(BellaError::Config(
                "chat.max_messages must be at least 1".to_string(),
            ));
        }

        if self.chat.proactive_delay_max_ms <= self.chat.proactive_delay_min_ms {
            return Err(BellaError::Config(format!(
                "chat.proactive_delay_max_ms ({}) must be greater than chat.proactive_delay_min_ms ({})",
                self.chat.proactive_delay_max_ms, self.chat.proactive_delay_min_ms
            )));
        }

        if self.defaults.provider.trim().is_empty() {
            return Err(BellaError::Config(
                "defaults.provider must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Delay window for proactive messages.
    pub fn proactive_delay(&self) -> DelayWindow {
        DelayWindow::new(
            Duration::from_millis(self.chat.proactive_delay_min_ms),
            Duration::from_millis(self.chat.proactive_delay_max_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut settings = Settings::default();
        settings.chat.max_messages = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("max_messages"));
    }

    #[test]
    fn test_inverted_delay_window_rejected() {
        let mut settings = Settings::default();
        settings.chat.proactive_delay_min_ms = 5000;
        settings.chat.proactive_delay_max_ms = 5000;
        assert!(matches!(settings.validate(), Err(BellaError::Config(_))));
    }

    #[test]
    fn test_blank_provider_rejected() {
        let mut settings = Settings::default();
        settings.defaults.provider = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_proactive_delay_from_settings() {
        let window = Settings::default().proactive_delay();
        assert_eq!(window.min(), Duration::from_millis(2000));
        assert_eq!(window.max(), Duration::from_millis(5000));
    }
}
