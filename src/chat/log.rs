// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capacity-bounded message log
//!
//! Insertion order is the only ordering key. When an append pushes the log
//! past its capacity the oldest entries are dropped first.

use std::collections::VecDeque;

use super::message::Message;

/// Default number of messages kept in the log
pub const DEFAULT_CAPACITY: usize = 50;

/// Ordered, capacity-bounded record of chat messages
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    /// Create an empty log. A capacity of zero is raised to one so a
    /// welcome message always fits.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a message, evicting the oldest entries until the log fits.
    /// Returns how many messages were evicted.
    pub fn push(&mut self, message: Message) -> usize {
        self.entries.push_back(message);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// Newest message, if any
    pub fn latest(&self) -> Option<&Message> {
        self.entries.back()
    }

    /// Owned copy of the log, oldest first
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
