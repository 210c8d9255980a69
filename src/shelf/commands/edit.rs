use crate::commands::add::checked;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayBook, Position};
use crate::library::Library;
use crate::model::{BookUpdate, Field};

/// Applies `update` to the book at `index`. Blank fields are left as they
/// were; supplied fields must pass validation.
pub fn run(library: &mut Library, index: usize, update: &BookUpdate) -> Result<CmdResult> {
    library.get_at(index)?;

    let checked_update = BookUpdate::new(
        update
            .value(Field::Title)
            .map(|t| checked(Field::Title, t))
            .transpose()?,
        update
            .value(Field::Author)
            .map(|a| checked(Field::Author, a))
            .transpose()?,
    );

    let position = Position::from_index(index);
    let mut result = CmdResult::default();

    if checked_update.is_noop() {
        result.add_message(CmdMessage::info(format!(
            "Nothing changed ({}).",
            position
        )));
        return Ok(result);
    }

    let book = library.update_at(index, &checked_update)?;
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        position, book
    )));
    Ok(result.with_affected_books(vec![DisplayBook { book, position }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::Book;

    fn library() -> Library {
        Library::from_books(vec![
            Book::new("War and Peace", "Tolstoy"),
            Book::new("1984", "Orwell"),
        ])
    }

    #[test]
    fn blank_title_keeps_title_and_updates_author() {
        let mut library = library();
        run(
            &mut library,
            0,
            &BookUpdate::new(Some("".into()), Some("Leo Tolstoy".into())),
        )
        .unwrap();

        assert_eq!(
            library.get_at(0).unwrap(),
            &Book::new("War and Peace", "Leo Tolstoy")
        );
    }

    #[test]
    fn blank_author_keeps_author_and_updates_title() {
        let mut library = library();
        let result = run(&mut library, 1, &BookUpdate::title("Animal Farm")).unwrap();

        assert_eq!(library.get_at(1).unwrap(), &Book::new("Animal Farm", "Orwell"));
        assert_eq!(result.affected_books[0].position.get(), 2);
    }

    #[test]
    fn all_blank_reports_nothing_changed() {
        let mut library = library();
        let before = library.clone();
        let result = run(&mut library, 0, &BookUpdate::new(Some(" ".into()), None)).unwrap();

        assert_eq!(library, before);
        assert!(result.affected_books.is_empty());
        assert!(result.messages[0].content.contains("Nothing changed"));
    }

    #[test]
    fn invalid_field_rejects_the_whole_edit() {
        let mut library = library();
        let before = library.clone();
        let err = run(
            &mut library,
            0,
            &BookUpdate::new(Some("Anna Karenina".into()), Some("Tolstoy 2".into())),
        )
        .unwrap_err();

        assert!(matches!(err, ShelfError::Validation { field: Field::Author, .. }));
        assert_eq!(library, before);
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut library = library();
        assert!(matches!(
            run(&mut library, 5, &BookUpdate::title("X")),
            Err(ShelfError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }
}
