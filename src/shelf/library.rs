//! # Record store
//!
//! [`Library`] is the in-memory, ordered list of books for one session. It is
//! addressed by 0-based index and performs no validation: callers (the
//! command layer) are responsible for only handing it checked input.
//!
//! Readers receive clones or shared references. The only way to change an
//! existing record is [`Library::update_at`], which swaps in a new value.

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookUpdate, Field};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Appends many books, keeping their order.
    pub fn extend(&mut self, books: impl IntoIterator<Item = Book>) {
        self.books.extend(books);
    }

    /// Discards the current contents in favour of `books`.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    pub fn get_at(&self, index: usize) -> Result<&Book> {
        self.books.get(index).ok_or(ShelfError::IndexOutOfRange {
            index,
            len: self.books.len(),
        })
    }

    /// Applies `update` to the book at `index` and returns the new record.
    pub fn update_at(&mut self, index: usize, update: &BookUpdate) -> Result<Book> {
        let updated = update.apply(self.get_at(index)?);
        self.books[index] = updated.clone();
        Ok(updated)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<Book> {
        self.get_at(index)?;
        Ok(self.books.remove(index))
    }

    /// Case-insensitive substring search on one field. Hits come back in
    /// library order, each with its current index.
    pub fn search(&self, field: Field, query: &str) -> Vec<(usize, Book)> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .enumerate()
            .filter(|(_, book)| book.field(field).to_lowercase().contains(&needle))
            .map(|(i, book)| (i, book.clone()))
            .collect()
    }

    /// Stable sort by title, ignoring case.
    pub fn sort_by_title(&mut self) {
        self.books.sort_by(|a, b| compare_ignore_case(&a.title, &b.title));
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
