use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayBook, Position};
use crate::library::Library;

pub fn run(library: &mut Library, index: usize) -> Result<CmdResult> {
    let book = library.delete_at(index)?;
    let position = Position::from_index(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        position, book
    )));
    Ok(result.with_affected_books(vec![DisplayBook { book, position }]))
}
