// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use bella::chat::{ChatEvent, ChatSession, Message, NoticeLevel, Role};
use bella::error::Result;
use bella::providers::KNOWN_PROVIDERS;

fn print_colored(color: Color, text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(color))?;
    println!("{}", text);
    stdout.execute(ResetColor)?;
    Ok(())
}

pub(super) fn print_banner(session: &ChatSession) -> Result<()> {
    print_colored(Color::Magenta, "💝 Bella")?;
    println!("Type /help for commands, /quit to leave.");
    if !session.is_open() {
        print_colored(Color::DarkGrey, "(chat window is closed; /open to show it)")?;
    }
    println!();
    Ok(())
}

pub(super) fn print_prompt() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    print!("> ");
    stdout.execute(ResetColor)?;
    stdout.flush()?;
    Ok(())
}

pub(super) fn print_message(message: &Message) -> Result<()> {
    let color = match message.role() {
        Role::User => Color::Green,
        Role::Assistant => Color::Magenta,
    };
    let header = format!(
        "[{}] {} {}:",
        message.clock_label(),
        message.role().avatar(),
        message.role().label()
    );
    print_colored(color, &header)?;
    for line in message.content().lines() {
        println!("  {}", line);
    }
    Ok(())
}

pub(super) fn print_log(session: &ChatSession) -> Result<()> {
    for message in session.log().iter() {
        print_message(message)?;
    }
    println!(
        "({} of {} messages)",
        session.log().len(),
        session.log().capacity()
    );
    Ok(())
}

pub(super) fn print_status(session: &ChatSession, provider: &str) -> Result<()> {
    let state = session.state();
    println!("chat window : {}", if state.open { "open" } else { "closed" });
    println!(
        "settings    : {}",
        if state.settings_open { "open" } else { "closed" }
    );
    println!("provider    : {}", provider);
    println!("{}    : {}", state.heart_icon(), state.relationship_label());
    println!("mood        : {} {}", state.emotion.icon(), state.emotion);
    println!(
        "theme       : {}{}",
        state.theme.label(),
        state
            .theme
            .css_class()
            .map(|class| format!(" ({})", class))
            .unwrap_or_default()
    );
    if state.typing {
        println!("Bella is typing…");
    }
    Ok(())
}

pub(super) fn print_event(event: &ChatEvent) -> Result<()> {
    match event {
        ChatEvent::MessageSent(text) => print_colored(
            Color::DarkGrey,
            &format!("→ relayed message ({} chars)", text.chars().count()),
        )?,
        ChatEvent::ProviderChanged(name) => {
            print_colored(Color::DarkGrey, &format!("→ provider set to {}", name))?
        }
        ChatEvent::CredentialSaved { provider, .. } => {
            print_colored(Color::DarkGrey, &format!("→ API key relayed for {}", provider))?
        }
        ChatEvent::DisplayNameSaved(name) => {
            print_colored(Color::DarkGrey, &format!("→ display name set to {}", name))?
        }
        ChatEvent::ThemeChanged(theme) => {
            print_colored(Color::DarkGrey, &format!("→ theme set to {}", theme))?
        }
        ChatEvent::VoiceToggled(enabled) => {
            print_colored(Color::DarkGrey, &format!("→ voice replies: {}", enabled))?
        }
        ChatEvent::ProactiveToggled(enabled) => {
            print_colored(Color::DarkGrey, &format!("→ proactive care: {}", enabled))?
        }
        ChatEvent::HistoryCleared => print_colored(Color::DarkGrey, "→ history cleared")?,
        ChatEvent::Notification(notice) => {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Info => Color::Yellow,
            };
            print_colored(color, &format!("🔔 {}", notice.text))?
        }
    }
    Ok(())
}

pub(super) fn print_providers() -> Result<()> {
    for provider in KNOWN_PROVIDERS {
        println!(
            "{:<8} {:<22} {}",
            provider.id,
            provider.label,
            if provider.requires_credential {
                "needs API key"
            } else {
                "no key needed"
            }
        );
    }
    Ok(())
}
