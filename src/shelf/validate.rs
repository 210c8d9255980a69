//! Character policy for book titles and authors.
//!
//! Titles may contain:
//! - Latin (`a-z`, `A-Z`) and Cyrillic (`а-я`, `А-Я`, `ё`, `Ё`) letters
//! - ASCII digits
//! - Whitespace
//! - The punctuation `? ! + : ; № " ' . , / -`
//!
//! Authors may contain letters, whitespace, `-` and `.` only.
//!
//! Both must be non-empty. Callers trim user input before validating.

use crate::model::Field;

const TITLE_PUNCTUATION: &[char] = &[
    '?', '!', '+', ':', ';', '№', '"', '\'', '.', ',', '/', '-',
];
const AUTHOR_PUNCTUATION: &[char] = &['-', '.'];

/// Returns true if `title` is non-empty and made only of permitted characters.
///
/// ```
/// use shelf::validate::is_valid_title;
///
/// assert!(is_valid_title("War and Peace"));
/// assert!(is_valid_title("Мастер и Маргарита"));
/// assert!(is_valid_title("1984: Part 1/3"));
///
/// assert!(!is_valid_title(""));
/// assert!(!is_valid_title("C# in Depth"));
/// ```
pub fn is_valid_title(title: &str) -> bool {
    validate(Field::Title, title).is_ok()
}

/// Returns true if `author` is non-empty and made only of letters,
/// whitespace, `-` and `.`.
///
/// ```
/// use shelf::validate::is_valid_author;
///
/// assert!(is_valid_author("L. N. Tolstoy"));
/// assert!(is_valid_author("Салтыков-Щедрин"));
///
/// assert!(!is_valid_author(""));
/// assert!(!is_valid_author("Orwell 2"));
/// ```
pub fn is_valid_author(author: &str) -> bool {
    validate(Field::Author, author).is_ok()
}

/// Checks `text` against the policy for `field`, reporting the first
/// offending character.
pub fn validate(field: Field, text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let allowed = match field {
        Field::Title => is_title_char,
        Field::Author => is_author_char,
    };

    match text.chars().find(|&ch| !allowed(ch)) {
        Some(ch) => Err(ValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

fn is_title_char(ch: char) -> bool {
    is_letter(ch) || ch.is_ascii_digit() || is_space(ch) || TITLE_PUNCTUATION.contains(&ch)
}

fn is_author_char(ch: char) -> bool {
    is_letter(ch) || is_space(ch) || AUTHOR_PUNCTUATION.contains(&ch)
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ('а'..='я').contains(&ch)
        || ('А'..='Я').contains(&ch)
        || ch == 'ё'
        || ch == 'Ё'
}

// Vertical tab and form feed count as whitespace alongside the usual set.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Error type for title and author validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered
    Empty,
    /// The text contains a character outside the field's policy
    InvalidCharacter(char),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "nothing was entered"),
            ValidationError::InvalidCharacter(ch) => {
                write!(f, "character '{}' is not allowed", ch)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Human-readable summary of what a field accepts, for prompts.
pub fn policy_hint(field: Field) -> &'static str {
    match field {
        Field::Title => {
            "titles may contain Latin and Cyrillic letters, digits, spaces and ? ! + : ; № \" ' . , / -"
        }
        Field::Author => "authors may contain Latin and Cyrillic letters, spaces, - and .",
    }
}
