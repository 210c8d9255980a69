//! # Rendering
//!
//! Turns command results into terminal text. Everything here returns
//! `String`s so the menu can write them to whatever output it was given.

use chrono::{DateTime, Utc};
use colored::Colorize;
use shelf::api::{CmdMessage, CmdResult, MessageLevel};
use shelf::index::DisplayBook;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDEX_WIDTH: usize = 6;
const COLUMN_GAP: usize = 2;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(error: &dyn std::fmt::Display) -> String {
    render_messages(&[CmdMessage::error(format!("Error: {}", error))])
}

/// Numbered two-column listing, titles and authors truncated by display
/// width so Cyrillic and ASCII line up alike.
pub fn render_book_list(books: &[DisplayBook], line_width: usize) -> String {
    let available = line_width.saturating_sub(INDEX_WIDTH + COLUMN_GAP);
    let title_width = available * 3 / 5;
    let author_width = available - title_width;

    let mut out = String::new();
    for db in books {
        let idx = format!("{:>4}. ", db.position.get());
        let title = truncate_to_width(&db.book.title, title_width);
        let author = truncate_to_width(&db.book.author, author_width);
        let padding = title_width.saturating_sub(title.width()) + COLUMN_GAP;

        out.push_str(&format!(
            "{}{}{}{}\n",
            idx.yellow(),
            title.bold(),
            " ".repeat(padding),
            author.dimmed()
        ));
    }
    out
}

/// Listing first, then messages, with the resume timestamp if present.
pub fn render_result(result: &CmdResult, line_width: usize) -> String {
    let mut out = render_book_list(&result.listed_books, line_width);
    out.push_str(&render_messages(&result.messages));
    if let Some(saved_at) = result.snapshot_saved_at {
        out.push_str(&format!(
            "{}\n",
            format!("Last saved {}.", format_time_ago(saved_at)).dimmed()
        ));
    }
    out
}

pub fn render_book(db: &DisplayBook) -> String {
    format!(
        "{} {}\n  Title:  {}\n  Author: {}\n",
        format!("#{}", db.position).yellow(),
        "Selected book".bold(),
        db.book.title,
        db.book.author
    )
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
