//! # Shelf CLI
//!
//! The binary is intentionally thin: the console client lives in `cli/`, and
//! this file only invokes `cli::run()` and handles process termination. All
//! catalog logic is in the `shelf` library crate; see its crate docs for the
//! layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
