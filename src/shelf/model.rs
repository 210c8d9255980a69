use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry. Books have no identity beyond their position in
/// the library, and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Title,
    Author,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::Title => Field::Author,
            Field::Author => Field::Title,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Author => write!(f, "author"),
        }
    }
}

/// A partial edit of a book. `None`, or a value that is blank after
/// trimming, leaves the corresponding field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookUpdate {
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self { title, author }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: None,
        }
    }

    pub fn author(author: impl Into<String>) -> Self {
        Self {
            title: None,
            author: Some(author.into()),
        }
    }

    /// The trimmed, non-empty new value for `field`, if any.
    pub fn value(&self, field: Field) -> Option<&str> {
        let raw = match field {
            Field::Title => self.title.as_deref(),
            Field::Author => self.author.as_deref(),
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn is_noop(&self) -> bool {
        self.value(Field::Title).is_none() && self.value(Field::Author).is_none()
    }

    /// Builds the replacement record for `book`.
    pub fn apply(&self, book: &Book) -> Book {
        Book {
            title: self
                .value(Field::Title)
                .map(str::to_string)
                .unwrap_or_else(|| book.title.clone()),
            author: self
                .value(Field::Author)
                .map(str::to_string)
                .unwrap_or_else(|| book.author.clone()),
        }
    }
}
