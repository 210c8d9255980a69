use super::{snapshot, text, Persistence, Snapshot, TextImport};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Text files and the snapshot are kept in their encoded form, so tests go
/// through the same parsing as [`FileStore`](super::fs::FileStore).
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
    snapshot_path: PathBuf,
    snapshot: Option<String>,
    fail_writes: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            files: HashMap::new(),
            snapshot_path: PathBuf::from(snapshot::DEFAULT_FILENAME),
            snapshot: None,
            fail_writes: false,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents of a "file", as a test would inspect it on disk.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn put_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn raw_snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    pub fn put_raw_snapshot(&mut self, content: impl Into<String>) {
        self.snapshot = Some(content.into());
    }

    /// Makes every subsequent write fail, to exercise error paths.
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    fn check_writable(&self, path: &Path) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store"),
            ));
        }
        Ok(())
    }
}

impl Persistence for InMemoryStore {
    fn export_text(&mut self, path: &Path, books: &[Book]) -> Result<()> {
        self.check_writable(path)?;
        self.files.insert(path.to_path_buf(), text::encode(books));
        Ok(())
    }

    fn import_text(&self, path: &Path) -> Result<TextImport> {
        self.files
            .get(path)
            .map(|content| text::decode(content))
            .ok_or_else(|| ShelfError::NotFound(path.to_path_buf()))
    }

    fn save_snapshot(&mut self, books: &[Book]) -> Result<()> {
        self.check_writable(&self.snapshot_path)?;
        self.snapshot = Some(snapshot::encode(&Snapshot::new(books.to_vec()))?);
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        self.snapshot.as_deref().map(snapshot::decode).transpose()
    }

    fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::library::Library;

    /// A library plus backing store, pre-populated for command tests.
    pub struct ShelfFixture {
        pub library: Library,
        pub store: InMemoryStore,
    }

    impl Default for ShelfFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShelfFixture {
        pub fn new() -> Self {
            Self {
                library: Library::new(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, title: &str, author: &str) -> Self {
            self.library.add(Book::new(title, author));
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.library
                    .add(Book::new(format!("Book {}", i + 1), "Test Author"));
            }
            self
        }

        pub fn with_text_file(mut self, path: &str, content: &str) -> Self {
            self.store.put_file(path, content);
            self
        }

        pub fn with_snapshot(mut self, books: &[Book]) -> Self {
            self.store.save_snapshot(books).unwrap();
            self
        }
    }
}
