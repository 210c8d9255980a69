//! Line-based prompting over any reader/writer pair.
//!
//! Every `ask_*` returns `Ok(None)` once input is exhausted, so callers can
//! abandon the current action and let the menu wind down.

use colored::Colorize;
use shelf::index::Position;
use shelf::model::Field;
use shelf::validate::{policy_hint, validate, ValidationError};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Prints `label` without a newline and reads one trimmed line. A line
    /// that is not valid UTF-8 is reported and asked again.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.out, "{}", label)?;
            self.out.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.out)?;
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line.trim().to_string())),
                Err(_) => self.error("input is not valid UTF-8; check the terminal encoding")?,
            }
        }
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("Error: {}", message).red())
    }

    /// Asks until the answer passes the policy for `field`. With
    /// `allow_blank`, an empty answer is returned as-is.
    pub fn ask_field(
        &mut self,
        field: Field,
        label: &str,
        allow_blank: bool,
    ) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            if answer.is_empty() && allow_blank {
                return Ok(Some(answer));
            }
            match validate(field, &answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(ValidationError::Empty) => self.error("nothing was entered")?,
                Err(e) => self.error(&format!("{}; {}", e, policy_hint(field)))?,
            }
        }
    }

    /// Asks for a book number between 1 and `len`.
    pub fn ask_position(&mut self, action: &str, len: usize) -> io::Result<Option<Position>> {
        let label = format!("Number of the book to {} (1-{}): ", action, len);
        loop {
            let Some(answer) = self.ask(&label)? else {
                return Ok(None);
            };
            match answer.parse::<Position>() {
                Ok(position) if position.get() <= len => return Ok(Some(position)),
                Ok(_) => self.error(&format!("enter a number from 1 to {}", len))?,
                Err(_) => self.error("enter a valid number")?,
            }
        }
    }

    /// Asks until one of `choices` is entered.
    pub fn ask_choice(&mut self, label: &str, choices: &[&str]) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            if choices.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            self.error(&format!("enter one of {}", choices.join(", ")))?;
        }
    }

    pub fn ask_yes_no(&mut self, label: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(Some(yes)),
                None => self.error("please answer 'y' or 'n'")?,
            }
        }
    }
}

/// Accepts English and Russian yes/no answers.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "д" | "да" => Some(true),
        "n" | "no" | "н" | "нет" => Some(false),
        _ => None,
    }
}
