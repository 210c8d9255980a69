use crate::commands::add::checked;
use crate::commands::{CmdMessage, CmdResult, EMPTY_LIBRARY};
use crate::error::Result;
use crate::index::{index_books, DisplayBook, Position};
use crate::library::Library;
use crate::model::Field;
use crate::validate::validate;

/// Case-insensitive substring search on one field. The query must pass the
/// same validation as the field it searches.
pub fn run(library: &Library, field: Field, query: &str) -> Result<CmdResult> {
    let query = checked(field, query)?;
    let listed = matches(library, field, &query);

    let mut result = CmdResult::default();
    if library.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_LIBRARY));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books found with {} matching \"{}\".",
            field, query
        )));
    } else {
        result.add_message(CmdMessage::info(format!("Found {} book(s).", listed.len())));
    }
    Ok(result.with_listed_books(listed))
}

/// Live filter for as-you-type views. A blank query shows everything, and a
/// query with disallowed characters matches nothing instead of failing.
pub fn filter(library: &Library, field: Field, query: &str) -> Vec<DisplayBook> {
    let query = query.trim();
    if query.is_empty() {
        return index_books(library.books());
    }
    if validate(field, query).is_err() {
        return Vec::new();
    }
    matches(library, field, query)
}

fn matches(library: &Library, field: Field, query: &str) -> Vec<DisplayBook> {
    library
        .search(field, query)
        .into_iter()
        .map(|(index, book)| DisplayBook {
            book,
            position: Position::from_index(index),
        })
        .collect()
}
