use crate::commands::{CmdMessage, CmdResult, EMPTY_LIBRARY};
use crate::index::index_books;
use crate::library::Library;

pub fn run(library: &Library) -> CmdResult {
    let mut result = CmdResult::default().with_listed_books(index_books(library.books()));
    if library.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_LIBRARY));
    }
    result
}
