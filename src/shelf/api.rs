//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every front end.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the session's [`Library`] and its [`Persistence`] backend
//! - **Normalizes inputs**: 1-based [`Position`]s become 0-based indexes here
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic.
//!
//! ## Generic Over Persistence
//!
//! `ShelfApi<P: Persistence>`:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::{DisplayBook, Position};
use crate::library::Library;
use crate::model::{BookUpdate, Field};
use crate::store::Persistence;
use std::path::Path;

/// The main API facade for shelf operations.
pub struct ShelfApi<P: Persistence> {
    library: Library,
    store: P,
}

impl<P: Persistence> ShelfApi<P> {
    /// Starts with an empty library. Call [`resume`](Self::resume) to pick up
    /// the previous session.
    pub fn new(store: P) -> Self {
        Self {
            library: Library::new(),
            store,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    pub fn add_book(&mut self, title: &str, author: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.library, title, author)
    }

    pub fn list_books(&self) -> commands::CmdResult {
        commands::list::run(&self.library)
    }

    /// The book at `position`, as a snapshot.
    pub fn get_book(&self, position: Position) -> Result<DisplayBook> {
        let book = self.library.get_at(position.to_index())?.clone();
        Ok(DisplayBook { book, position })
    }

    pub fn edit_book(
        &mut self,
        position: Position,
        update: &BookUpdate,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.library, position.to_index(), update)
    }

    pub fn delete_book(&mut self, position: Position) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.library, position.to_index())
    }

    pub fn search_books(&self, field: Field, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, field, query)
    }

    /// Synchronous live filter, meant to be called on every keystroke.
    pub fn filter(&self, field: Field, query: &str) -> Vec<DisplayBook> {
        commands::search::filter(&self.library, field, query)
    }

    pub fn sort_books(&mut self) -> commands::CmdResult {
        commands::sort::run(&mut self.library)
    }

    pub fn export_text(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&mut self.store, &self.library, path)
    }

    pub fn import_text(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&self.store, &mut self.library, path)
    }

    pub fn resume(&mut self) -> commands::CmdResult {
        commands::session::resume(&self.store, &mut self.library)
    }

    pub fn save_session(&mut self) -> Result<commands::CmdResult> {
        commands::session::save(&mut self.store, &self.library)
    }

    pub fn snapshot_path(&self) -> &Path {
        self.store.snapshot_path()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
