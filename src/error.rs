// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Bella
//!
//! Session operations never fail; these errors cover configuration loading,
//! name parsing and the terminal host.

use thiserror::Error;

/// Main error type for Bella operations
#[derive(Error, Debug)]
pub enum BellaError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Bella operations
pub type Result<T> = std::result::Result<T, BellaError>;
