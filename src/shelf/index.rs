//! # User-facing positions
//!
//! Users address books by their 1-based place in the listing ("3" is the third
//! book). The [`Library`](crate::library::Library) works with plain 0-based
//! indexes. [`Position`] is the only place the two numbering schemes meet, so
//! the off-by-one lives here and nowhere else.
//!
//! Positions are only meaningful against the listing they were read from.
//! Deleting or sorting renumbers everything after the affected book.

use crate::model::Book;
use std::fmt;
use std::str::FromStr;

/// A 1-based position as shown to and typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// Returns `None` for 0, which is never a valid position.
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Position(n))
    }

    pub fn from_index(index: usize) -> Self {
        Position(index + 1)
    }

    pub fn to_index(self) -> usize {
        self.0 - 1
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let n: usize = trimmed
            .parse()
            .map_err(|_| format!("Not a book number: {}", trimmed))?;
        Position::new(n).ok_or_else(|| "Book numbers start at 1".to_string())
    }
}

/// A book paired with the position it currently occupies in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    pub book: Book,
    pub position: Position,
}

/// Numbers books in library order.
pub fn index_books(books: &[Book]) -> Vec<DisplayBook> {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| DisplayBook {
            book: book.clone(),
            position: Position::from_index(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_positions_and_indexes() {
        assert_eq!(Position::from_index(0).get(), 1);
        assert_eq!("3".parse::<Position>().unwrap().to_index(), 2);
        assert_eq!(Position::new(0), None);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<Position>().is_err());
        assert!("-1".parse::<Position>().is_err());
        assert!("two".parse::<Position>().is_err());
        assert_eq!(" 7 ".parse::<Position>().unwrap().get(), 7);
    }

    #[test]
    fn numbers_books_from_one() {
        let books = vec![Book::new("A", "X"), Book::new("B", "Y")];
        let indexed = index_books(&books);
        assert_eq!(indexed[0].position.to_string(), "1");
        assert_eq!(indexed[1].position.to_string(), "2");
        assert_eq!(indexed[1].book.title, "B");
    }
}
