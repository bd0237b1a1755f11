// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bella - bounded-history chat session for the Bella companion widget.
//!
//! The crate is the model behind a chat widget that talks to a selectable AI
//! provider. It records messages and emits events; rendering and the network
//! round trip belong to the host.
//!
//! - `chat`: message log, session state, callback registry, formatting
//! - `config`: settings persisted in `~/.bella/settings.json`
//! - `providers`: catalog of providers the settings panel offers
//! - `cli`: argument and input parsing for the terminal host

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod providers;

pub use error::{BellaError, Result};
