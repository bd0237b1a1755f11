// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat session management
//!
//! This module provides the bounded message log, the widget's session state,
//! the host callback registry and display formatting.

pub mod events;
pub mod format;
mod log;
mod message;
mod proactive;
mod session;
mod state;

pub use events::{
    CallbackRegistry, ChatEvent, Credential, EventHandler, EventKind, Notice, NoticeLevel,
};
pub use format::{escape_html, format_message};
pub use log::{MessageLog, DEFAULT_CAPACITY};
pub use message::{Message, Role};
pub use proactive::{DelayWindow, ProactiveDelivery};
pub use session::{ChatSession, ChatSessionBuilder, DEFAULT_WELCOME_MESSAGE, PROACTIVE_NOTICE};
pub use state::{heart_icon_for, Emotion, SessionState, Theme, HEART_ICONS};
