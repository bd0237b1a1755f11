// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Known AI providers
//!
//! The session relays provider names verbatim; this catalog only tells the
//! host what to offer and whether to ask for an API key.

/// A provider the settings panel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub requires_credential: bool,
}

pub const KNOWN_PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "local",
        label: "Local model",
        requires_credential: false,
    },
    ProviderInfo {
        id: "claude",
        label: "Claude (recommended)",
        requires_credential: true,
    },
    ProviderInfo {
        id: "openai",
        label: "OpenAI GPT-4",
        requires_credential: true,
    },
    ProviderInfo {
        id: "gemini",
        label: "Google Gemini",
        requires_credential: true,
    },
    ProviderInfo {
        id: "groq",
        label: "Groq (very fast)",
        requires_credential: true,
    },
    ProviderInfo {
        id: "qwen",
        label: "Qwen",
        requires_credential: true,
    },
    ProviderInfo {
        id: "ernie",
        label: "ERNIE Bot",
        requires_credential: true,
    },
    ProviderInfo {
        id: "glm",
        label: "Zhipu GLM",
        requires_credential: true,
    },
];

/// Look up a provider by id (case-insensitive)
pub fn find(id: &str) -> Option<&'static ProviderInfo> {
    let id = id.trim();
    KNOWN_PROVIDERS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Whether the host should ask for an API key. Unknown providers need one.
pub fn requires_credential(id: &str) -> bool {
    find(id).map(|p| p.requires_credential).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_needs_no_credential() {
        assert!(!requires_credential("local"));
        assert!(!requires_credential("LOCAL"));
    }

    #[test]
    fn test_remote_providers_need_credential() {
        assert!(requires_credential("claude"));
        assert!(requires_credential("glm"));
    }

    #[test]
    fn test_unknown_provider_needs_credential() {
        assert!(find("mystery").is_none());
        assert!(requires_credential("mystery"));
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in KNOWN_PROVIDERS.iter().enumerate() {
            for b in &KNOWN_PROVIDERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
