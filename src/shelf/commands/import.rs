use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayBook, Position};
use crate::library::Library;
use crate::store::Persistence;
use std::path::Path;

/// Appends the books found in a text export. Unparseable lines are dropped
/// and only counted.
pub fn run<P: Persistence>(store: &P, library: &mut Library, path: &Path) -> Result<CmdResult> {
    let import = store.import_text(path)?;
    let first = library.len();
    let imported = import.books.len();

    let affected = import
        .books
        .iter()
        .enumerate()
        .map(|(i, book)| DisplayBook {
            book: book.clone(),
            position: Position::from_index(first + i),
        })
        .collect();
    library.extend(import.books);

    let mut result = CmdResult::default().with_affected_books(affected);
    result.add_message(CmdMessage::success(format!(
        "Loaded {} book(s) from {}",
        imported,
        path.display()
    )));
    if import.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} line(s) that were not \"title, author\".",
            import.skipped
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "The library now has {} book(s).",
        library.len()
    )));
    Ok(result)
}
