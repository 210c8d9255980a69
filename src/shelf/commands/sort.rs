use crate::commands::{CmdMessage, CmdResult, EMPTY_LIBRARY};
use crate::index::index_books;
use crate::library::Library;

pub fn run(library: &mut Library) -> CmdResult {
    let mut result = CmdResult::default();
    if library.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_LIBRARY));
        return result;
    }

    library.sort_by_title();
    result.add_message(CmdMessage::success(format!(
        "Sorted {} book(s) by title.",
        library.len()
    )));
    result.with_listed_books(index_books(library.books()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::memory::fixtures::ShelfFixture;

    #[test]
    fn sorts_and_lists_new_order() {
        let mut fx = ShelfFixture::new()
            .with_book("War and Peace", "Tolstoy")
            .with_book("1984", "Orwell");
        let result = run(&mut fx.library);

        assert_eq!(
            fx.library.books(),
            &[Book::new("1984", "Orwell"), Book::new("War and Peace", "Tolstoy")]
        );
        assert_eq!(result.listed_books[0].book.title, "1984");
    }

    #[test]
    fn empty_library_is_left_alone() {
        let mut fx = ShelfFixture::new();
        let result = run(&mut fx.library);
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, EMPTY_LIBRARY);
    }
}
