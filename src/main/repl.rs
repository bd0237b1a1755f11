// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::collections::HashSet;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use bella::chat::{ChatEvent, ChatSession, ChatSessionBuilder, EventKind};
use bella::cli::{parse_input, ChatArgs, ReplCommand, HELP_TEXT};
use bella::config::Settings;
use bella::error::Result;
use bella::providers;

use super::render;

const ALL_KINDS: [EventKind; 9] = [
    EventKind::MessageSent,
    EventKind::ProviderChanged,
    EventKind::CredentialSaved,
    EventKind::DisplayNameSaved,
    EventKind::ThemeChanged,
    EventKind::VoiceToggled,
    EventKind::ProactiveToggled,
    EventKind::HistoryCleared,
    EventKind::Notification,
];

/// Host-side view of the relayed settings
struct Host {
    provider: String,
    credentialed: HashSet<String>,
    events: mpsc::UnboundedReceiver<ChatEvent>,
    /// Settings as loaded from disk, without command-line overrides
    stored: Settings,
    config_path: PathBuf,
}

impl Host {
    /// Print and react to everything the session relayed since the last call.
    fn drain_events(&mut self, session: &mut ChatSession) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            render::print_event(&event)?;
            match event {
                ChatEvent::MessageSent(_) => {
                    // Waiting on the backend; /reply answers for it here.
                    session.show_typing();
                }
                ChatEvent::ProviderChanged(name) => {
                    if providers::requires_credential(&name) && !self.credentialed.contains(&name)
                    {
                        println!("  {} needs an API key: /key <secret>", name);
                    }
                    self.provider = name;
                }
                ChatEvent::CredentialSaved { provider, .. } => {
                    self.credentialed.insert(provider);
                }
                other => {
                    if self.stored.defaults.record(&other) {
                        self.persist();
                    }
                }
            }
        }
        Ok(())
    }

    fn persist(&self) {
        match self.stored.save_to(&self.config_path) {
            Ok(()) => tracing::debug!(
                target: "bella.cli",
                path = %self.config_path.display(),
                "settings saved"
            ),
            Err(e) => tracing::warn!(
                target: "bella.cli",
                path = %self.config_path.display(),
                error = %e,
                "failed to save settings"
            ),
        }
    }
}

enum Input {
    Line(Option<String>),
    Proactive,
}

pub(super) async fn run_chat(
    mut settings: Settings,
    config_path: PathBuf,
    args: ChatArgs,
) -> Result<()> {
    let stored = settings.clone();
    if let Some(max_messages) = args.max_messages {
        settings.chat.max_messages = max_messages;
    }
    if let Some(theme) = args.theme {
        settings.defaults.theme = theme;
    }
    if let Some(provider) = args.provider {
        settings.defaults.provider = provider;
    }
    settings.validate()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let mut builder = ChatSessionBuilder::from_settings(&settings);
    for kind in ALL_KINDS {
        let tx = tx.clone();
        builder = builder.on(kind, move |event| {
            let _ = tx.send(event.clone());
        });
    }
    let mut session = builder.build();
    let mut host = Host {
        provider: settings.defaults.provider.clone(),
        credentialed: HashSet::new(),
        events: rx,
        stored,
        config_path,
    };

    if !args.closed {
        session.open();
    }
    tracing::info!(
        target: "bella.cli",
        provider = %host.provider,
        capacity = settings.chat.max_messages,
        "chat session started"
    );

    render::print_banner(&session)?;
    render::print_log(&session)?;
    session.relay_defaults(&settings.defaults);
    host.drain_events(&mut session)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        render::print_prompt()?;

        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            _ = session.next_proactive() => Input::Proactive,
        };

        match input {
            Input::Line(None) => break,
            Input::Line(Some(line)) => {
                if !handle_command(&mut session, &host, parse_input(&line))? {
                    break;
                }
            }
            Input::Proactive => {
                println!();
                if let Some(message) = session.log().latest() {
                    render::print_message(message)?;
                }
            }
        }

        host.drain_events(&mut session)?;
    }

    tracing::info!(target: "bella.cli", "chat session ended");
    Ok(())
}

/// Apply one command to the session. Returns false when the user quits.
fn handle_command(session: &mut ChatSession, host: &Host, command: ReplCommand) -> Result<bool> {
    match command {
        ReplCommand::Message(text) => {
            if session.submit_user_message(&text) {
                if let Some(message) = session.log().latest() {
                    render::print_message(message)?;
                }
            }
        }
        ReplCommand::Open => session.open(),
        ReplCommand::Close => session.close(),
        ReplCommand::Toggle => session.toggle_open(),
        ReplCommand::Settings => {
            session.toggle_settings();
            println!(
                "settings panel {}",
                if session.is_settings_open() {
                    "open"
                } else {
                    "closed"
                }
            );
        }
        ReplCommand::Provider(name) => session.set_provider(&name),
        ReplCommand::Key(secret) => session.save_credential(&host.provider, &secret),
        ReplCommand::Name(name) => session.save_display_name(&name),
        ReplCommand::Theme(theme) => session.set_theme(&theme),
        ReplCommand::Voice(enabled) => session.set_voice_enabled(enabled),
        ReplCommand::Proactive(enabled) => session.set_proactive_enabled(enabled),
        ReplCommand::Reply { text, emotion } => {
            session.append_assistant_message(text, emotion.as_deref());
            if let Some(message) = session.log().latest() {
                render::print_message(message)?;
            }
        }
        ReplCommand::Nudge(text) => {
            session.append_proactive_message(text);
            println!("proactive message scheduled");
        }
        ReplCommand::Typing => session.show_typing(),
        ReplCommand::Level(level) => {
            session.update_relationship_level(level);
            let state = session.state();
            println!("{} {}", state.heart_icon(), state.relationship_label());
        }
        ReplCommand::Clear => {
            session.clear_history();
            render::print_log(session)?;
        }
        ReplCommand::History => render::print_log(session)?,
        ReplCommand::Status => render::print_status(session, &host.provider)?,
        ReplCommand::Help => println!("{}", HELP_TEXT),
        ReplCommand::Quit => return Ok(false),
        ReplCommand::Usage(usage) => println!("usage: {}", usage),
        ReplCommand::Unknown(name) => println!("unknown command /{} (try /help)", name),
    }
    Ok(true)
}
