// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI module for Bella
//!
//! Handles command-line argument parsing and chat host input parsing.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::{parse_input, parse_switch, ReplCommand, HELP_TEXT};
