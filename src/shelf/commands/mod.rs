//! # Command Layer
//!
//! One module per user operation. Every command takes the [`Library`] (and the
//! [`Persistence`](crate::store::Persistence) backend when it touches disk) as
//! explicit arguments, addresses books by 0-based index, and returns a
//! [`CmdResult`] describing what happened.
//!
//! Commands validate free text before it reaches the library. They never
//! print: user-facing text is returned as [`CmdMessage`]s for the UI to
//! render.
//!
//! [`Library`]: crate::library::Library

use crate::index::DisplayBook;
use chrono::{DateTime, Utc};

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod session;
pub mod sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created, changed or removed, at the position they had.
    pub affected_books: Vec<DisplayBook>,
    /// Books to show the user.
    pub listed_books: Vec<DisplayBook>,
    /// When the snapshot behind a resume was written.
    pub snapshot_saved_at: Option<DateTime<Utc>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

pub(crate) const EMPTY_LIBRARY: &str = "The library is empty.";
