// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bella - chat session host
//!
//! Entry point for the Bella CLI application.

use clap::Parser;

use bella::cli::{ChatArgs, Cli, Commands};
use bella::config::Settings;
use bella::error::Result;

#[path = "main/render.rs"]
mod render;
#[path = "main/repl.rs"]
mod repl;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on debug output for the session targets; `RUST_LOG` still applies.
    if cli.verbose > 0 {
        for directive in [
            "bella.chat.session=debug",
            "bella.chat.proactive=debug",
            "bella.config=debug",
            "bella.cli=debug",
        ] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&config_path)?;

    match cli.command {
        None => repl::run_chat(settings, config_path, ChatArgs::default()).await?,
        Some(Commands::Chat(args)) => repl::run_chat(settings, config_path, args).await?,
        Some(Commands::Providers) => render::print_providers()?,
        Some(Commands::Settings) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
