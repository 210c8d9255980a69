//! # Persistence Layer
//!
//! Books reach the disk through two unrelated encodings, kept apart on purpose
//! because they mean different things:
//!
//! - **Text export/import** ([`text`]): one `title, author` line per book, in a
//!   file the user names. Meant to be read and edited by people. Importing
//!   *appends* to the library and silently drops lines it cannot parse.
//! - **Session snapshot** ([`snapshot`]): the whole library as versioned JSON
//!   in a fixed file. Only used to resume the previous session. Loading it
//!   *replaces* the library.
//!
//! The [`Persistence`] trait exposes both with distinct methods.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage on the local filesystem
//!   - Snapshot written atomically (temp file + rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - "Files" are entries in a map
//!   - No filesystem access
//!
//! ## Storage Format
//!
//! ```text
//! ./
//! ├── library_data.json   # Session snapshot (name configurable)
//! └── <anything>.txt      # Text exports, wherever the user puts them
//! ```

use crate::error::Result;
use crate::model::Book;
use std::path::Path;

pub mod fs;
pub mod memory;
pub mod snapshot;
pub mod text;

pub use snapshot::Snapshot;
pub use text::TextImport;

/// Abstract interface for saving and loading books.
pub trait Persistence {
    /// Write `books` as text lines to `path`, replacing any existing file.
    fn export_text(&mut self, path: &Path, books: &[Book]) -> Result<()>;

    /// Parse the text file at `path`. Fails with `NotFound` if it is missing.
    fn import_text(&self, path: &Path) -> Result<TextImport>;

    /// Write the whole library to the session snapshot.
    fn save_snapshot(&mut self, books: &[Book]) -> Result<()>;

    /// Read the session snapshot. `Ok(None)` means there is no prior session.
    fn load_snapshot(&self) -> Result<Option<Snapshot>>;

    /// Where the session snapshot lives.
    fn snapshot_path(&self) -> &Path;
}
