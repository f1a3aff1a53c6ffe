//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;
use std::time::Duration;

/// Severity level for status messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Run timer reading when the message was logged.
    pub at: Option<Duration>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, at: Option<Duration>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            at,
            level,
        }
    }
}

/// Circular buffer of status messages shown under the tracker.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    show_debug: bool,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            show_debug: false,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }

    /// Appends an entry, evicting the oldest one when full. Debug entries are
    /// dropped unless enabled.
    pub fn push(&mut self, entry: MessageEntry) {
        if entry.level == MessageLevel::Debug && !self.show_debug {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    pub fn push_level(&mut self, level: MessageLevel, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, level));
    }

    /// Newest entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
