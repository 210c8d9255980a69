//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book catalog library** with a console client. The
//! library keeps an ordered list of `(title, author)` records for one user,
//! validates everything that goes into it, and persists it between sessions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu and one-shot subcommands                │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Library and the Persistence backend             │
//! │  - Translates 1-based positions to 0-based indexes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and business logic, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (library.rs) + Persistence (store/)           │
//! │  - Library: ordered in-memory records                       │
//! │  - Persistence trait: FileStore, InMemoryStore (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; user-facing text comes back as
//! [`commands::CmdMessage`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`library`]: The in-memory record store
//! - [`store`]: Text export/import and session snapshot persistence
//! - [`validate`]: Character policy for titles and authors
//! - [`model`]: Core data types (`Book`, `BookUpdate`, `Field`)
//! - [`index`]: 1-based user positions
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod library;
pub mod model;
pub mod store;
pub mod validate;
