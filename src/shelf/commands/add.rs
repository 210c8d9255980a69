use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::index::{DisplayBook, Position};
use crate::library::Library;
use crate::model::{Book, Field};
use crate::validate::validate;

pub fn run(library: &mut Library, title: &str, author: &str) -> Result<CmdResult> {
    let title = checked(Field::Title, title)?;
    let author = checked(Field::Author, author)?;

    let book = Book::new(title, author);
    library.add(book.clone());
    let position = Position::from_index(library.len() - 1);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        position, book
    )));
    Ok(result.with_affected_books(vec![DisplayBook { book, position }]))
}

/// Trims `text` and checks it against the policy for `field`.
pub(crate) fn checked(field: Field, text: &str) -> Result<String> {
    let trimmed = text.trim();
    validate(field, trimmed).map_err(|e| ShelfError::validation(field, e))?;
    Ok(trimmed.to_string())
}
