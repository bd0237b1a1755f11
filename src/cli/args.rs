// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Bella.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bella - chat session host for the Bella companion widget
#[derive(Parser, Debug)]
#[command(name = "bella")]
#[command(version, about = "Chat session host for the Bella companion widget")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.bella/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session (default when no command given)
    Chat(ChatArgs),

    /// List known AI providers
    Providers,

    /// Print the effective settings as JSON
    Settings,
}

/// Arguments for the chat command
#[derive(Args, Debug, Default, Clone)]
pub struct ChatArgs {
    /// Provider to relay at startup (overrides settings)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Emotion theme id (overrides settings)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Maximum number of messages kept in the log (overrides settings)
    #[arg(long)]
    pub max_messages: Option<usize>,

    /// Start with the chat window closed
    #[arg(long)]
    pub closed: bool,
}
