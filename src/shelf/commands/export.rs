use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::text::lossy_count;
use crate::store::Persistence;
use std::path::Path;

pub fn run<P: Persistence>(store: &mut P, library: &Library, path: &Path) -> Result<CmdResult> {
    store.export_text(path, library.books())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} book(s) to {}",
        library.len(),
        path.display()
    )));

    // The text format has no quoting, so commas and line breaks split these
    // books wrongly on the way back in.
    let lossy = lossy_count(library.books());
    if lossy > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} book(s) contain a comma or line break and will not load back correctly.",
            lossy
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::ShelfFixture;

    #[test]
    fn writes_one_line_per_book() {
        let mut fx = ShelfFixture::new()
            .with_book("War and Peace", "Tolstoy")
            .with_book("1984", "Orwell");
        let result = run(&mut fx.store, &fx.library, Path::new("books.txt")).unwrap();

        assert_eq!(
            fx.store.file("books.txt"),
            Some("War and Peace, Tolstoy\n1984, Orwell\n")
        );
        assert!(!result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn warns_about_titles_with_commas() {
        let mut fx = ShelfFixture::new().with_book("Eats, Shoots", "Truss");
        let result = run(&mut fx.store, &fx.library, Path::new("books.txt")).unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(fx.store.file("books.txt"), Some("Eats, Shoots, Truss\n"));
    }

    #[test]
    fn warns_about_line_breaks() {
        let mut fx = ShelfFixture::new()
            .with_book("War\nPeace", "Tolstoy")
            .with_book("1984", "Orwell");
        let result = run(&mut fx.store, &fx.library, Path::new("books.txt")).unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.starts_with("1 book(s) contain a comma or line break")));
    }

    #[test]
    fn write_failure_is_reported() {
        let mut fx = ShelfFixture::new().with_books(1);
        fx.store.fail_writes();

        assert!(matches!(
            run(&mut fx.store, &fx.library, Path::new("books.txt")),
            Err(ShelfError::Io { .. })
        ));
        assert_eq!(fx.store.file("books.txt"), None);
    }
}
