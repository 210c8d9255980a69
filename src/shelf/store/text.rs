//! Plain text encoding: `title, author` per line.
//!
//! There is no quoting. A title containing a comma is written as-is and will
//! be rejected when read back, since the line then has more than two fields.
//! A line break inside either field splits the book over two lines, neither
//! of which parses.

use crate::model::{Book, Field};
use crate::validate::validate;
use tracing::debug;

pub const SEPARATOR: &str = ", ";

/// Result of parsing a text file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextImport {
    pub books: Vec<Book>,
    /// Non-blank lines that were dropped.
    pub skipped: usize,
}

pub fn format_line(book: &Book) -> String {
    format!("{}{}{}", book.title, SEPARATOR, book.author)
}

pub fn encode(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        out.push_str(&format_line(book));
        out.push('\n');
    }
    out
}

/// Parses one line. Returns `None` unless it splits on commas into exactly
/// two fields that are valid once trimmed.
pub fn parse_line(line: &str) -> Option<Book> {
    let mut parts = line.split(',');
    let title = parts.next()?.trim();
    let author = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }
    if validate(Field::Title, title).is_err() || validate(Field::Author, author).is_err() {
        return None;
    }
    Some(Book::new(title, author))
}

pub fn decode(content: &str) -> TextImport {
    let mut import = TextImport::default();
    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(book) => import.books.push(book),
            None => {
                debug!(line = n + 1, "skipping malformed line");
                import.skipped += 1;
            }
        }
    }
    import
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Books that would not survive a round trip through this format.
pub fn lossy_count(books: &[Book]) -> usize {
    books
        .iter()
        .filter(|b| {
            b.title.contains(',') || has_line_break(&b.title) || has_line_break(&b.author)
        })
        .count()
}
