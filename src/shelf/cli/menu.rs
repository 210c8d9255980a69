//! # Interactive menu
//!
//! The line-driven console front end. Each action runs to completion before
//! the next choice is read. Failures are printed and the loop carries on:
//! nothing the user does here ends the session except choosing `0` or closing
//! the input.

use super::prompt::Prompter;
use super::render::{render_book, render_error, render_result};
use shelf::api::{CmdResult, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::ShelfError;
use shelf::model::{BookUpdate, Field};
use shelf::store::Persistence;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

const MENU: &str = "\
---- Menu ----
1. Add a book
2. Edit a book
3. Delete a book
4. List books
5. Search
6. Save to file
7. Load from file
8. Sort by title
0. Exit";

/// What to do after a search came back empty.
enum Retry {
    SameField,
    OtherField,
    Back,
}

pub struct Menu<'a, P: Persistence, R, W> {
    api: &'a mut ShelfApi<P>,
    config: &'a ShelfConfig,
    io: Prompter<R, W>,
}

impl<'a, P: Persistence, R: BufRead, W: Write> Menu<'a, P, R, W> {
    pub fn new(api: &'a mut ShelfApi<P>, config: &'a ShelfConfig, io: Prompter<R, W>) -> Self {
        Self { api, config, io }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.io.out, "\n{}", MENU)?;
            let Some(choice) = self.io.ask("Choose an action: ")? else {
                if self.exit()? {
                    return Ok(());
                }
                continue;
            };
            debug!(choice = %choice, "menu choice");
            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.edit()?,
                "3" => self.delete()?,
                "4" => self.list()?,
                "5" => self.search()?,
                "6" => self.export()?,
                "7" => self.import()?,
                "8" => self.sort()?,
                "0" => {
                    if self.exit()? {
                        return Ok(());
                    }
                }
                _ => self.io.error(&format!(
                    "unknown choice '{}'; enter a number from 0 to 8",
                    choice
                ))?,
            }
        }
    }

    fn show(&mut self, result: &CmdResult) -> io::Result<()> {
        write!(
            self.io.out,
            "{}",
            render_result(result, self.config.line_width)
        )
    }

    fn show_error(&mut self, error: &ShelfError) -> io::Result<()> {
        write!(self.io.out, "{}", render_error(error))
    }

    fn show_outcome(&mut self, outcome: shelf::error::Result<CmdResult>) -> io::Result<()> {
        match outcome {
            Ok(result) => self.show(&result),
            Err(e) => self.show_error(&e),
        }
    }

    /// Prints the list and returns false when there is nothing to act on.
    fn list_for_selection(&mut self) -> io::Result<bool> {
        let result = self.api.list_books();
        self.show(&result)?;
        Ok(!self.api.is_empty())
    }

    fn add(&mut self) -> io::Result<()> {
        writeln!(self.io.out, "\n--- Add a book ---")?;
        let Some(title) = self.io.ask_field(Field::Title, "Title: ", false)? else {
            return Ok(());
        };
        let Some(author) = self.io.ask_field(Field::Author, "Author: ", false)? else {
            return Ok(());
        };
        let outcome = self.api.add_book(&title, &author);
        self.show_outcome(outcome)
    }

    fn edit(&mut self) -> io::Result<()> {
        writeln!(self.io.out, "\n--- Edit a book ---")?;
        if !self.list_for_selection()? {
            return Ok(());
        }
        let Some(position) = self.io.ask_position("edit", self.api.len())? else {
            return Ok(());
        };
        let current = match self.api.get_book(position) {
            Ok(db) => db.book,
            Err(e) => return self.show_error(&e),
        };

        writeln!(
            self.io.out,
            "\nWhat do you want to change?\n1. Title only\n2. Author only\n3. Title and author"
        )?;
        let Some(choice) = self.io.ask_choice("Choose (1-3): ", &["1", "2", "3"])? else {
            return Ok(());
        };

        let mut update = BookUpdate::default();
        if choice == "1" || choice == "3" {
            let label = format!("New title [{}]: ", current.title);
            let Some(title) = self.io.ask_field(Field::Title, &label, true)? else {
                return Ok(());
            };
            if title.is_empty() {
                writeln!(self.io.out, "Title unchanged.")?;
            }
            update.title = Some(title);
        }
        if choice == "2" || choice == "3" {
            let label = format!("New author [{}]: ", current.author);
            let Some(author) = self.io.ask_field(Field::Author, &label, true)? else {
                return Ok(());
            };
            if author.is_empty() {
                writeln!(self.io.out, "Author unchanged.")?;
            }
            update.author = Some(author);
        }

        let outcome = self.api.edit_book(position, &update);
        self.show_outcome(outcome)
    }

    fn delete(&mut self) -> io::Result<()> {
        writeln!(self.io.out, "\n--- Delete a book ---")?;
        if !self.list_for_selection()? {
            return Ok(());
        }
        let Some(position) = self.io.ask_position("delete", self.api.len())? else {
            return Ok(());
        };

        if self.config.confirm_delete {
            match self.api.get_book(position) {
                Ok(db) => write!(self.io.out, "\n{}", render_book(&db))?,
                Err(e) => return self.show_error(&e),
            }
            match self.io.ask_yes_no("Delete this book? (y/n): ")? {
                Some(true) => {}
                Some(false) => {
                    writeln!(self.io.out, "Deletion cancelled.")?;
                    return Ok(());
                }
                None => return Ok(()),
            }
        }

        let outcome = self.api.delete_book(position);
        self.show_outcome(outcome)
    }

    fn list(&mut self) -> io::Result<()> {
        writeln!(self.io.out, "\n--- Books ---")?;
        let result = self.api.list_books();
        self.show(&result)
    }

    fn search(&mut self) -> io::Result<()> {
        writeln!(self.io.out, "\n--- Search ---")?;
        if self.api.is_empty() {
            let result = self.api.list_books();
            return self.show(&result);
        }

        let mut field = None;
        loop {
            let chosen = match field {
                Some(f) => f,
                None => {
                    writeln!(self.io.out, "1. By title\n2. By author")?;
                    match self.io.ask_choice("Search by (1 or 2): ", &["1", "2"])? {
                        Some(c) if c == "1" => Field::Title,
                        Some(_) => Field::Author,
                        None => return Ok(()),
                    }
                }
            };
            field = Some(chosen);

            let label = format!("Search {}: ", chosen);
            let Some(query) = self.io.ask_field(chosen, &label, false)? else {
                return Ok(());
            };

            let result = match self.api.search_books(chosen, &query) {
                Ok(result) => result,
                Err(e) => {
                    self.show_error(&e)?;
                    continue;
                }
            };
            self.show(&result)?;
            if !result.listed_books.is_empty() {
                return Ok(());
            }

            match self.ask_retry()? {
                Some(Retry::SameField) => {}
                Some(Retry::OtherField) => field = Some(chosen.other()),
                Some(Retry::Back) | None => return Ok(()),
            }
        }
    }

    fn ask_retry(&mut self) -> io::Result<Option<Retry>> {
        writeln!(
            self.io.out,
            "\nWhat next?\n1. Try another query\n2. Search a different field\n3. Back to the menu"
        )?;
        let choice = self.io.ask_choice("Choose (1-3): ", &["1", "2", "3"])?;
        Ok(choice.map(|c| match c.as_str() {
            "1" => Retry::SameField,
            "2" => Retry::OtherField,
            _ => Retry::Back,
        }))
    }

    fn ask_file_name(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            let Some(name) = self.io.ask(label)? else {
                return Ok(None);
            };
            if !name.is_empty() {
                return Ok(Some(name));
            }
            self.io.error("nothing was entered")?;
        }
    }

    fn export(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_file_name("File to save to: ")? else {
            return Ok(());
        };
        let outcome = self.api.export_text(Path::new(&name));
        self.show_outcome(outcome)
    }

    fn import(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_file_name("File to load from: ")? else {
            return Ok(());
        };
        let outcome = self.api.import_text(Path::new(&name));
        self.show_outcome(outcome)
    }

    fn sort(&mut self) -> io::Result<()> {
        let result = self.api.sort_books();
        self.show(&result)
    }

    /// Returns false when the session has to go on because saving failed.
    fn exit(&mut self) -> io::Result<bool> {
        if self.api.is_empty() {
            writeln!(self.io.out, "Goodbye!")?;
            return Ok(true);
        }

        writeln!(
            self.io.out,
            "\nThere are {} book(s) in this session.",
            self.api.len()
        )?;
        match self.io.ask_yes_no("Save before exiting? (y/n): ")? {
            Some(true) => match self.api.save_session() {
                Ok(result) => {
                    self.show(&result)?;
                    writeln!(self.io.out, "Goodbye!")?;
                    Ok(true)
                }
                Err(e) => {
                    self.show_error(&e)?;
                    writeln!(self.io.out, "The books are still here. Back to the menu.")?;
                    Ok(false)
                }
            },
            _ => {
                writeln!(self.io.out, "Session not saved. Goodbye!")?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::model::Book;
    use shelf::store::memory::InMemoryStore;

    fn run_menu(api: &mut ShelfApi<InMemoryStore>, input: &str) -> String {
        run_menu_with(api, &ShelfConfig::default(), input)
    }

    fn run_menu_with(
        api: &mut ShelfApi<InMemoryStore>,
        config: &ShelfConfig,
        input: &str,
    ) -> String {
        run_menu_raw(api, config, input.as_bytes())
    }

    fn run_menu_raw(
        api: &mut ShelfApi<InMemoryStore>,
        config: &ShelfConfig,
        input: &[u8],
    ) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        {
            let io = Prompter::new(input, &mut out);
            Menu::new(api, config, io).run().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    fn api_with(books: &[(&str, &str)]) -> ShelfApi<InMemoryStore> {
        let mut api = ShelfApi::new(InMemoryStore::new());
        for (title, author) in books {
            api.add_book(title, author).unwrap();
        }
        api
    }

    #[test]
    fn add_reprompts_until_valid_then_saves_on_exit() {
        let mut api = api_with(&[]);
        let out = run_menu(&mut api, "1\nC# in Depth\nDune\nHerbert\n0\ny\n");

        assert!(out.contains("character '#' is not allowed"));
        assert!(out.contains("Book added (1): Dune by Herbert"));
        assert!(out.contains("Session saved: 1 book(s)."));
        assert!(api.store().raw_snapshot().is_some());
    }

    #[test]
    fn unknown_choice_reprompts() {
        let mut api = api_with(&[]);
        let out = run_menu(&mut api, "9\nhello\n0\n");

        assert_eq!(out.matches("unknown choice").count(), 2);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn empty_library_exits_without_asking() {
        let mut api = api_with(&[]);
        let out = run_menu(&mut api, "0\n");

        assert!(!out.contains("Save before exiting"));
        assert!(api.store().raw_snapshot().is_none());
    }

    #[test]
    fn closed_input_declines_the_save() {
        let mut api = api_with(&[("Dune", "Herbert")]);
        let out = run_menu(&mut api, "");

        assert!(out.contains("Save before exiting?"));
        assert!(out.contains("Session not saved."));
        assert!(api.store().raw_snapshot().is_none());
    }

    #[test]
    fn edit_title_only_with_blank_keeps_it() {
        let mut api = api_with(&[("War and Peace", "Tolstoy")]);
        let out = run_menu(&mut api, "2\n1\n3\n\nLeo Tolstoy\n0\nn\n");

        assert!(out.contains("New title [War and Peace]: "));
        assert!(out.contains("Title unchanged."));
        assert_eq!(
            api.library().books(),
            &[Book::new("War and Peace", "Leo Tolstoy")]
        );
    }

    #[test]
    fn edit_rejects_out_of_range_number() {
        let mut api = api_with(&[("War and Peace", "Tolstoy")]);
        let out = run_menu(&mut api, "2\n5\n1\n1\nAnna Karenina\n0\nn\n");

        assert!(out.contains("enter a number from 1 to 1"));
        assert_eq!(api.library().books()[0].title, "Anna Karenina");
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let mut api = api_with(&[("War and Peace", "Tolstoy"), ("1984", "Orwell")]);
        let out = run_menu(&mut api, "3\n1\nmaybe\nнет\n3\n1\nда\n0\nn\n");

        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Book deleted (1): War and Peace by Tolstoy"));
        assert_eq!(api.library().books(), &[Book::new("1984", "Orwell")]);
    }

    #[test]
    fn delete_without_confirmation_when_disabled() {
        let mut api = api_with(&[("Dune", "Herbert")]);
        let config = ShelfConfig {
            confirm_delete: false,
            ..ShelfConfig::default()
        };
        let out = run_menu_with(&mut api, &config, "3\n1\n0\n");

        assert!(!out.contains("Delete this book?"));
        assert!(api.is_empty());
    }

    #[test]
    fn edit_and_delete_on_empty_library_say_so() {
        let mut api = api_with(&[]);
        let out = run_menu(&mut api, "2\n3\n5\n0\n");
        assert_eq!(out.matches("The library is empty.").count(), 3);
    }

    #[test]
    fn search_offers_retry_then_finds() {
        let mut api = api_with(&[("War and Peace", "Tolstoy"), ("1984", "Orwell")]);
        let out = run_menu(&mut api, "5\n1\nDune\n2\ntolstoy\n0\nn\n");

        assert!(out.contains("No books found with title matching \"Dune\"."));
        assert!(out.contains("Found 1 book(s)."));
        assert!(out.contains("War and Peace"));
    }

    #[test]
    fn search_back_to_menu() {
        let mut api = api_with(&[("War and Peace", "Tolstoy")]);
        let out = run_menu(&mut api, "5\n2\nOrwell\n3\n0\nn\n");

        assert!(out.contains("Back to the menu"));
        assert!(out.contains("Session not saved. Goodbye!"));
    }

    #[test]
    fn export_and_import_through_the_menu() {
        let mut api = api_with(&[("Dune", "Herbert")]);
        let out = run_menu(&mut api, "6\nbooks.txt\n7\nbooks.txt\n7\nmissing.txt\n0\nn\n");

        assert!(out.contains("Saved 1 book(s) to books.txt"));
        assert!(out.contains("Loaded 1 book(s) from books.txt"));
        assert!(out.contains("File not found: missing.txt"));
        assert_eq!(api.len(), 2);
    }

    #[test]
    fn sort_reorders_and_lists() {
        let mut api = api_with(&[("War and Peace", "Tolstoy"), ("1984", "Orwell")]);
        run_menu(&mut api, "8\n0\nn\n");

        assert_eq!(api.library().books()[0].title, "1984");
    }

    #[test]
    fn failed_save_on_exit_returns_to_the_menu() {
        let mut store = InMemoryStore::new();
        store.fail_writes();
        let mut api = ShelfApi::new(store);
        api.add_book("Dune", "Herbert").unwrap();

        let out = run_menu(&mut api, "0\ny\n4\n0\nn\n");
        assert!(out.contains("Error: IO error"));
        assert!(out.contains("Back to the menu."));
        assert_eq!(out.matches("Save before exiting?").count(), 2);
        assert!(out.ends_with("Session not saved. Goodbye!\n"));
        assert_eq!(api.len(), 1);
    }

    #[test]
    fn failed_save_then_closed_input_still_ends() {
        let mut store = InMemoryStore::new();
        store.fail_writes();
        let mut api = ShelfApi::new(store);
        api.add_book("Dune", "Herbert").unwrap();

        let out = run_menu(&mut api, "0\ny\n");
        assert!(out.contains("Error: IO error"));
        assert!(out.ends_with("Session not saved. Goodbye!\n"));
    }

    #[test]
    fn bytes_that_are_not_utf8_do_not_end_the_session() {
        let mut api = api_with(&[("Dune", "Herbert")]);
        let out = run_menu_raw(
            &mut api,
            &ShelfConfig::default(),
            b"\xff\xfe\n4\n0\ny\n",
        );

        assert!(out.contains("input is not valid UTF-8"));
        assert!(out.contains("1. Dune"));
        assert!(out.contains("Session saved: 1 book(s)."));
        assert!(api.store().raw_snapshot().is_some());
    }
}
