//! # Console client
//!
//! Two ways in, one API underneath:
//!
//! - **Interactive** (`shelf`): the numbered menu in [`menu`], reading one
//!   line at a time until `0` or end of input. Bad input re-prompts; nothing
//!   ends the session early.
//! - **One-shot** (`shelf add ...`, `shelf list`, ...): resume the snapshot,
//!   run one operation, save the snapshot if the library changed, exit.
//!   Failures print `Error: <reason>` and exit with status 1.
//!
//! ## Module Structure
//!
//! - `commands`: Ambient setup, context wiring, per-command handlers
//! - `menu`: The interactive loop
//! - `prompt`: Line prompting with re-asking on invalid input
//! - `render`: Output formatting (listings, colored messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
