// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat session management
//!
//! `ChatSession` is the single source of truth for the widget: it owns the
//! bounded message log and the session state, and relays user intents to the
//! host through the callback registry. It never talks to an AI provider;
//! replies come back through [`ChatSession::append_assistant_message`].

use crate::config::{DefaultsConfig, Settings};

use super::events::{CallbackRegistry, ChatEvent, Credential, EventKind, Notice};
use super::log::{MessageLog, DEFAULT_CAPACITY};
use super::message::Message;
use super::proactive::{self, DelayWindow, DeliveryReceiver, DeliverySender, ProactiveDelivery};
use super::state::{Emotion, SessionState, Theme};

/// Greeting seeded into every fresh or cleared log
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hi! I'm Bella, your AI companion. It's lovely to meet you! What would you like to talk about?";

/// Notice shown when a proactive message lands while the chat is closed
pub const PROACTIVE_NOTICE: &str = "Bella wants to chat 💕";

/// Chat widget session: message log, visual state and host callbacks
#[derive(Debug)]
pub struct ChatSession {
    log: MessageLog,
    state: SessionState,
    callbacks: CallbackRegistry,
    welcome_message: String,
    proactive_delay: DelayWindow,
    proactive_tx: DeliverySender,
    proactive_rx: DeliveryReceiver,
}

/// Builder for creating ChatSession instances
pub struct ChatSessionBuilder {
    capacity: usize,
    welcome_message: String,
    proactive_delay: DelayWindow,
    theme: Theme,
    callbacks: CallbackRegistry,
}

impl ChatSessionBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            proactive_delay: DelayWindow::default(),
            theme: Theme::Default,
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Take capacity, welcome text, proactive delay and theme from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_capacity(settings.chat.max_messages)
            .with_welcome_message(settings.chat.welcome_message.clone())
            .with_proactive_delay(settings.proactive_delay())
            .with_theme(Theme::from_id_or_default(&settings.defaults.theme))
    }

    /// Set the maximum number of messages kept in the log
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the greeting seeded into the log
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Set the window proactive delays are drawn from
    pub fn with_proactive_delay(mut self, window: DelayWindow) -> Self {
        self.proactive_delay = window;
        self
    }

    /// Set the initial theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Register a handler for an event kind
    pub fn on<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&ChatEvent) + Send + Sync + 'static,
    {
        self.callbacks.on(kind, handler);
        self
    }

    /// Build the ChatSession, seeded with the welcome message
    pub fn build(self) -> ChatSession {
        let (proactive_tx, proactive_rx) = proactive::delivery_channel();
        let mut session = ChatSession {
            log: MessageLog::new(self.capacity),
            state: SessionState {
                theme: self.theme,
                ..SessionState::default()
            },
            callbacks: self.callbacks,
            welcome_message: self.welcome_message,
            proactive_delay: self.proactive_delay,
            proactive_tx,
            proactive_rx,
        };
        session.seed_welcome();
        session
    }
}

impl Default for ChatSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a session with default capacity and no handlers
    pub fn new() -> Self {
        ChatSessionBuilder::new().build()
    }

    /// Create a builder for constructing a ChatSession
    pub fn builder() -> ChatSessionBuilder {
        ChatSessionBuilder::new()
    }

    // ===== Handlers =====

    /// Register a handler for an event kind, replacing any previous one
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&ChatEvent) + Send + Sync + 'static,
    {
        self.callbacks.on(kind, handler);
    }

    /// Remove the handler for an event kind
    pub fn off(&mut self, kind: EventKind) -> bool {
        self.callbacks.off(kind)
    }

    fn emit(&self, event: ChatEvent) {
        self.callbacks.dispatch(&event);
    }

    fn notify(&self, notice: Notice) {
        self.emit(ChatEvent::Notification(notice));
    }

    // ===== Visibility =====

    pub fn open(&mut self) {
        self.state.open = true;
    }

    /// Close the chat; settings always close with it.
    pub fn close(&mut self) {
        self.state.open = false;
        self.state.settings_open = false;
    }

    pub fn toggle_open(&mut self) {
        if self.state.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open_settings(&mut self) {
        self.state.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.state.settings_open = false;
    }

    pub fn toggle_settings(&mut self) {
        self.state.settings_open = !self.state.settings_open;
    }

    // ===== Messages =====

    /// Record a user message and relay it to the host.
    ///
    /// Blank input is ignored. Returns whether the message was accepted.
    pub fn submit_user_message(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            tracing::trace!(target: "bella.chat.session", "ignoring blank user message");
            return false;
        }

        self.append(Message::user(text));
        self.emit(ChatEvent::MessageSent(text.to_string()));
        true
    }

    /// Record a reply from the AI backend.
    ///
    /// A recognized `emotion` updates the mood indicator; anything else resets
    /// it to the default.
    pub fn append_assistant_message(&mut self, content: impl Into<String>, emotion: Option<&str>) {
        self.state.typing = false;
        self.append(Message::assistant(content));
        if let Some(name) = emotion {
            self.state.emotion = Emotion::from_name_or_default(name);
        }
    }

    /// Schedule an unsolicited assistant message.
    ///
    /// The message lands after a random delay from the configured window and
    /// is applied by [`deliver_pending`](Self::deliver_pending) or
    /// [`next_proactive`](Self::next_proactive). Returns immediately.
    pub fn append_proactive_message(&self, content: impl Into<String>) {
        let delay = self.proactive_delay.sample();
        tracing::debug!(
            target: "bella.chat.proactive",
            delay_ms = delay.as_millis() as u64,
            "scheduled proactive message"
        );
        proactive::schedule(self.proactive_tx.clone(), content.into(), delay);
    }

    /// Apply every proactive message whose delay has elapsed. Never waits.
    /// Returns how many were applied.
    pub fn deliver_pending(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(delivery) = self.proactive_rx.try_recv() {
            self.apply_proactive(delivery);
            delivered += 1;
        }
        delivered
    }

    /// Wait for the next proactive message and apply it.
    ///
    /// The session holds its own sender, so this stays pending forever when
    /// nothing is scheduled. Use it as one branch of a `select!`.
    pub async fn next_proactive(&mut self) {
        if let Some(delivery) = self.proactive_rx.recv().await {
            self.apply_proactive(delivery);
        }
    }

    fn apply_proactive(&mut self, delivery: ProactiveDelivery) {
        self.state.typing = false;
        self.append(Message::assistant(delivery.content));
        self.state.emotion = Emotion::Caring;

        if !self.state.open {
            self.notify(Notice::info(PROACTIVE_NOTICE));
        }
    }

    /// Reset the log to the welcome message and close settings.
    pub fn clear_history(&mut self) {
        let dropped = self.log.len();
        self.log.clear();
        self.seed_welcome();
        tracing::info!(target: "bella.chat.session", dropped, "chat history cleared");

        self.emit(ChatEvent::HistoryCleared);
        self.close_settings();
    }

    fn seed_welcome(&mut self) {
        let welcome = Message::welcome(self.welcome_message.clone());
        self.append(welcome);
    }

    fn append(&mut self, message: Message) {
        let role = message.role();
        let evicted = self.log.push(message);
        tracing::debug!(
            target: "bella.chat.session",
            role = role.label(),
            len = self.log.len(),
            evicted,
            "appended message"
        );
    }

    // ===== Typing indicator =====

    pub fn show_typing(&mut self) {
        self.state.typing = true;
    }

    pub fn hide_typing(&mut self) {
        self.state.typing = false;
    }

    // ===== Settings relays =====

    /// Relay a provider choice. Blank names are ignored.
    pub fn set_provider(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        tracing::debug!(target: "bella.chat.session", provider = name, "provider changed");
        self.emit(ChatEvent::ProviderChanged(name.to_string()));
    }

    /// Relay the stored startup defaults: provider, voice, proactive care and
    /// the display name when one is saved.
    pub fn relay_defaults(&mut self, defaults: &DefaultsConfig) {
        self.set_provider(&defaults.provider);
        self.set_voice_enabled(defaults.voice_enabled);
        self.set_proactive_enabled(defaults.proactive_enabled);
        if let Some(name) = &defaults.display_name {
            self.save_display_name(name);
        }
    }

    /// Relay a credential for `provider`. Blank providers or secrets are ignored.
    pub fn save_credential(&mut self, provider: &str, secret: &str) {
        let provider = provider.trim();
        let secret = secret.trim();
        if provider.is_empty() || secret.is_empty() {
            return;
        }
        tracing::debug!(target: "bella.chat.session", provider, "credential saved");
        self.emit(ChatEvent::CredentialSaved {
            provider: provider.to_string(),
            credential: Credential::new(secret),
        });
        self.notify(Notice::success("API key saved"));
    }

    /// Relay the user's name. Blank names are ignored.
    pub fn save_display_name(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.emit(ChatEvent::DisplayNameSaved(name.to_string()));
        self.notify(Notice::success(format!("Nice to meet you, {name}!")));
    }

    /// Switch the emotion theme. Unknown ids fall back to the default theme;
    /// blank ids are ignored.
    pub fn set_theme(&mut self, theme_id: &str) {
        if theme_id.trim().is_empty() {
            return;
        }
        let theme = Theme::from_id_or_default(theme_id);
        self.state.theme = theme;
        self.emit(ChatEvent::ThemeChanged(theme));
        self.notify(Notice::success("Emotion theme updated"));
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.emit(ChatEvent::VoiceToggled(enabled));
        self.notify(Notice::success(if enabled {
            "Voice replies enabled 🔊"
        } else {
            "Voice replies disabled 🔇"
        }));
    }

    pub fn set_proactive_enabled(&mut self, enabled: bool) {
        self.emit(ChatEvent::ProactiveToggled(enabled));
        self.notify(Notice::success(if enabled {
            "Proactive care enabled 💕"
        } else {
            "Proactive care disabled"
        }));
    }

    /// Set the relationship level, clamped to at least 1.
    pub fn update_relationship_level(&mut self, level: i64) {
        self.state.relationship_level = u32::try_from(level.max(1)).unwrap_or(u32::MAX);
    }

    // ===== Queries =====

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_settings_open(&self) -> bool {
        self.state.settings_open
    }

    pub fn is_typing(&self) -> bool {
        self.state.typing
    }

    /// Owned copy of the log, oldest first
    pub fn messages(&self) -> Vec<Message> {
        self.log.snapshot()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn relationship_level(&self) -> u32 {
        self.state.relationship_level
    }

    pub fn emotion(&self) -> Emotion {
        self.state.emotion
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;

    #[test]
    fn test_new_session_has_welcome() {
        let session = ChatSession::new();
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_welcome());
        assert_eq!(messages[0].content(), DEFAULT_WELCOME_MESSAGE);
    }

    #[test]
    fn test_builder_from_settings() {
        let mut settings = Settings::default();
        settings.chat.max_messages = 3;
        settings.chat.welcome_message = "hey".to_string();
        settings.defaults.theme = "caring".to_string();

        let session = ChatSessionBuilder::from_settings(&settings).build();
        assert_eq!(session.log().capacity(), 3);
        assert_eq!(session.messages()[0].content(), "hey");
        assert_eq!(session.theme(), Theme::Caring);
    }

    #[test]
    fn test_toggle_settings_independent_of_open() {
        let mut session = ChatSession::new();
        session.toggle_settings();
        assert!(session.is_settings_open());
        assert!(!session.is_open());
        session.toggle_settings();
        assert!(!session.is_settings_open());
    }

    #[test]
    fn test_assistant_reply_hides_typing() {
        let mut session = ChatSession::new();
        session.show_typing();
        session.show_typing();
        assert!(session.is_typing());
        session.append_assistant_message("hello", Some("playful"));
        assert!(!session.is_typing());
        assert_eq!(session.emotion(), Emotion::Playful);
        assert_eq!(session.log().latest().unwrap().role(), Role::Assistant);
    }

    #[test]
    fn test_assistant_without_emotion_keeps_mood() {
        let mut session = ChatSession::new();
        session.append_assistant_message("a", Some("excited"));
        session.append_assistant_message("b", None);
        assert_eq!(session.emotion(), Emotion::Excited);
    }

    #[test]
    fn test_relationship_level_saturates() {
        let mut session = ChatSession::new();
        session.update_relationship_level(-4);
        assert_eq!(session.relationship_level(), 1);
        session.update_relationship_level(i64::MAX);
        assert_eq!(session.relationship_level(), u32::MAX);
    }

    #[test]
    fn test_blank_theme_ignored() {
        let mut session = ChatSession::new();
        session.set_theme("romantic");
        session.set_theme("   ");
        assert_eq!(session.theme(), Theme::Romantic);
    }
}
