// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the chat session
//!
//! The session reports user intents to the host through a registry keyed by
//! event kind. Each kind has at most one handler; dispatching a kind with no
//! handler does nothing.

use std::collections::HashMap;
use std::fmt;

use super::state::Theme;

/// A credential entered by the user, redacted in debug output
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Severity of a passive notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
}

/// Short-lived toast the host may show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }
}

/// Kinds of events a host can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MessageSent,
    ProviderChanged,
    CredentialSaved,
    DisplayNameSaved,
    ThemeChanged,
    VoiceToggled,
    ProactiveToggled,
    HistoryCleared,
    Notification,
}

/// Events emitted by a chat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// User submitted a message (trimmed text)
    MessageSent(String),
    /// User picked a different AI provider
    ProviderChanged(String),
    /// User saved a credential for a provider
    CredentialSaved {
        provider: String,
        credential: Credential,
    },
    /// User told Bella their name
    DisplayNameSaved(String),
    ThemeChanged(Theme),
    VoiceToggled(bool),
    ProactiveToggled(bool),
    HistoryCleared,
    Notification(Notice),
}

impl ChatEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ChatEvent::MessageSent(_) => EventKind::MessageSent,
            ChatEvent::ProviderChanged(_) => EventKind::ProviderChanged,
            ChatEvent::CredentialSaved { .. } => EventKind::CredentialSaved,
            ChatEvent::DisplayNameSaved(_) => EventKind::DisplayNameSaved,
            ChatEvent::ThemeChanged(_) => EventKind::ThemeChanged,
            ChatEvent::VoiceToggled(_) => EventKind::VoiceToggled,
            ChatEvent::ProactiveToggled(_) => EventKind::ProactiveToggled,
            ChatEvent::HistoryCleared => EventKind::HistoryCleared,
            ChatEvent::Notification(_) => EventKind::Notification,
        }
    }
}

/// Handler invoked synchronously when an event is dispatched
pub type EventHandler = Box<dyn Fn(&ChatEvent) + Send + Sync>;

/// Mapping from event kind to its handler
#[derive(Default)]
pub struct CallbackRegistry {
    handlers: HashMap<EventKind, EventHandler>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous handler.
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&ChatEvent) + Send + Sync + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Remove the handler for `kind`. Returns whether one was registered.
    pub fn off(&mut self, kind: EventKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Invoke the handler for the event's kind, if any.
    pub fn dispatch(&self, event: &ChatEvent) {
        match self.handlers.get(&event.kind()) {
            Some(handler) => handler(event),
            None => tracing::trace!(
                target: "bella.chat.events",
                kind = ?event.kind(),
                "no handler registered"
            ),
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("kinds", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
