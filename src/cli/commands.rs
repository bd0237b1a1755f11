// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input parsing for the chat host
//!
//! Pure functions that turn a line typed at the prompt into a command. Plain
//! text is a chat message; lines starting with `/` are slash commands.

/// A parsed line of host input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text to submit as a user message
    Message(String),
    Open,
    Close,
    Toggle,
    Settings,
    Provider(String),
    Key(String),
    Name(String),
    Theme(String),
    Voice(bool),
    Proactive(bool),
    /// Stand-in for the AI backend's reply
    Reply {
        text: String,
        emotion: Option<String>,
    },
    Nudge(String),
    Typing,
    Level(i64),
    Clear,
    History,
    Status,
    Help,
    Quit,
    /// A slash command with a missing or malformed argument
    Usage(&'static str),
    Unknown(String),
}

/// Parse one line of input.
pub fn parse_input(input: &str) -> ReplCommand {
    let trimmed = input.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return ReplCommand::Message(input.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name.to_lowercase().as_str() {
        "open" => ReplCommand::Open,
        "close" => ReplCommand::Close,
        "toggle" => ReplCommand::Toggle,
        "settings" | "config" => ReplCommand::Settings,
        "provider" => required(arg, ReplCommand::Provider, "/provider <name>"),
        "key" => required(arg, ReplCommand::Key, "/key <secret>"),
        "name" => required(arg, ReplCommand::Name, "/name <your name>"),
        "theme" => required(arg, ReplCommand::Theme, "/theme <id>"),
        "voice" => switch(arg, ReplCommand::Voice, "/voice on|off"),
        "proactive" => switch(arg, ReplCommand::Proactive, "/proactive on|off"),
        "reply" => parse_reply(arg),
        "nudge" => required(arg, ReplCommand::Nudge, "/nudge <text>"),
        "typing" => ReplCommand::Typing,
        "level" => match arg.parse::<i64>() {
            Ok(level) => ReplCommand::Level(level),
            Err(_) => ReplCommand::Usage("/level <number>"),
        },
        "clear" => ReplCommand::Clear,
        "history" => ReplCommand::History,
        "status" => ReplCommand::Status,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_string()),
    }
}

fn required(
    arg: &str,
    build: fn(String) -> ReplCommand,
    usage: &'static str,
) -> ReplCommand {
    if arg.is_empty() {
        ReplCommand::Usage(usage)
    } else {
        build(arg.to_string())
    }
}

fn switch(arg: &str, build: fn(bool) -> ReplCommand, usage: &'static str) -> ReplCommand {
    match parse_switch(arg) {
        Some(enabled) => build(enabled),
        None => ReplCommand::Usage(usage),
    }
}

/// Parse an on/off style argument.
pub fn parse_switch(arg: &str) -> Option<bool> {
    match arg.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// `/reply <text> [#emotion]`: a trailing `#word` names the emotion.
fn parse_reply(arg: &str) -> ReplCommand {
    if arg.is_empty() {
        return ReplCommand::Usage("/reply <text> [#emotion]");
    }

    if let Some((text, tag)) = arg.rsplit_once(char::is_whitespace) {
        if let Some(emotion) = tag.strip_prefix('#').filter(|e| !e.is_empty()) {
            return ReplCommand::Reply {
                text: text.trim_end().to_string(),
                emotion: Some(emotion.to_string()),
            };
        }
    }

    ReplCommand::Reply {
        text: arg.to_string(),
        emotion: None,
    }
}

/// Help text listing the slash commands
pub const HELP_TEXT: &str = "\
Type a message and press Enter to send it.

  /open, /close, /toggle    show or hide the chat window
  /settings                 toggle the settings panel
  /provider <name>          choose the AI provider
  /key <secret>             save an API key for the current provider
  /name <your name>         tell Bella your name
  /theme <id>               default, romantic, caring, playful, supportive
  /voice on|off             voice replies
  /proactive on|off         proactive care
  /reply <text> [#emotion]  post an assistant reply
  /nudge <text>             schedule a proactive message
  /typing                   show the typing indicator
  /level <n>                set the relationship level
  /clear                    clear chat history
  /history                  print the message log
  /status                   print the session state
  /quit                     leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_message() {
        assert_eq!(
            parse_input("hello bella"),
            ReplCommand::Message("hello bella".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_message() {
        // The session itself rejects blank submissions.
        assert_eq!(parse_input("   "), ReplCommand::Message("   ".to_string()));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_input("/open"), ReplCommand::Open);
        assert_eq!(parse_input("  /CLOSE "), ReplCommand::Close);
        assert_eq!(parse_input("/config"), ReplCommand::Settings);
        assert_eq!(parse_input("/exit"), ReplCommand::Quit);
    }

    #[test]
    fn test_argument_commands() {
        assert_eq!(
            parse_input("/provider groq"),
            ReplCommand::Provider("groq".to_string())
        );
        assert_eq!(
            parse_input("/name  Ada Lovelace "),
            ReplCommand::Name("Ada Lovelace".to_string())
        );
        assert_eq!(parse_input("/provider"), ReplCommand::Usage("/provider <name>"));
    }

    #[test]
    fn test_switches() {
        assert_eq!(parse_input("/voice on"), ReplCommand::Voice(true));
        assert_eq!(parse_input("/proactive OFF"), ReplCommand::Proactive(false));
        assert_eq!(parse_input("/voice maybe"), ReplCommand::Usage("/voice on|off"));
    }

    #[test]
    fn test_reply_with_emotion() {
        assert_eq!(
            parse_input("/reply so glad to see you #excited"),
            ReplCommand::Reply {
                text: "so glad to see you".to_string(),
                emotion: Some("excited".to_string()),
            }
        );
    }

    #[test]
    fn test_reply_without_emotion() {
        assert_eq!(
            parse_input("/reply use C# today"),
            ReplCommand::Reply {
                text: "use C# today".to_string(),
                emotion: None,
            }
        );
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(parse_input("/level 7"), ReplCommand::Level(7));
        assert_eq!(parse_input("/level -2"), ReplCommand::Level(-2));
        assert_eq!(parse_input("/level lots"), ReplCommand::Usage("/level <number>"));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_input("/dance now"),
            ReplCommand::Unknown("dance".to_string())
        );
    }
}
