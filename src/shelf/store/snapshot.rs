//! Session snapshot format.
//!
//! The snapshot is private to shelf: versioned JSON holding the full library.
//! Readers reject any version other than [`Snapshot::VERSION`].

use crate::error::{Result, ShelfError};
use crate::model::Book;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILENAME: &str = "library_data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub books: Vec<Book>,
}

impl Snapshot {
    pub const VERSION: u32 = 1;

    pub fn new(books: Vec<Book>) -> Self {
        Self {
            version: Self::VERSION,
            saved_at: Utc::now(),
            books,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.version == Self::VERSION
    }
}

pub fn encode(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub fn decode(content: &str) -> Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(content)?;
    if !snapshot.is_compatible() {
        return Err(ShelfError::IncompatibleSnapshot {
            found: snapshot.version,
            expected: Snapshot::VERSION,
        });
    }
    Ok(snapshot)
}
