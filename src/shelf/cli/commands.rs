//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf, not the application
//! itself. It is the only place that knows about stdin/stdout, exit codes and
//! terminal colors.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Ambient Setup**: tracing subscriber, color override, configuration
//! 3. **Context Setup**: `AppContext` with the API over a `FileStore`
//! 4. **Dispatch**: the interactive menu, or one `ShelfApi` call per
//!    subcommand followed by a snapshot save when the library changed
//! 5. **Output**: `CmdResult`s rendered to stdout, errors bubbled to `main`
//!
//! ## One-shot safety
//!
//! A one-shot command that changes the library rewrites the snapshot. If the
//! existing snapshot could not be read, doing so would replace it with
//! whatever this one command produced, so mutating commands refuse instead.

use super::menu::Menu;
use super::prompt::Prompter;
use super::render::{render_messages, render_result};
use super::setup::{Cli, Commands};
use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use shelf::api::{CmdResult, MessageLevel, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::index::Position;
use shelf::model::{BookUpdate, Field};
use shelf::store::fs::FileStore;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Overrides the platform config directory.
const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";

struct AppContext {
    api: ShelfApi<FileStore>,
    config: ShelfConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let config_dir = config_dir();
    let config = load_config(config_dir.as_deref());

    // Config inspection doesn't touch the library
    if let Some(Commands::Config { init }) = &cli.command {
        return handle_config(config_dir.as_deref(), &config, *init);
    }

    let mut ctx = init_context(&cli, config);

    match cli.command {
        None => handle_menu(&mut ctx),
        Some(Commands::Add { title, author }) => handle_add(&mut ctx, &title, &author),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Search {
            title,
            author: _,
            query,
        }) => {
            let field = if title { Field::Title } else { Field::Author };
            handle_search(&mut ctx, field, &query)
        }
        Some(Commands::Edit {
            position,
            title,
            author,
        }) => handle_edit(&mut ctx, &position, BookUpdate::new(title, author)),
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, &position),
        Some(Commands::Sort) => handle_sort(&mut ctx),
        Some(Commands::Export { file }) => handle_export(&mut ctx, &file),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "shelf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
}

fn load_config(config_dir: Option<&Path>) -> ShelfConfig {
    let Some(dir) = config_dir else {
        debug!("no config directory, using defaults");
        return ShelfConfig::default();
    };
    match ShelfConfig::load(dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "ignoring config file, using defaults");
            ShelfConfig::default()
        }
    }
}

fn init_context(cli: &Cli, config: ShelfConfig) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let snapshot_path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| config.snapshot_path(&cwd));
    debug!(path = %snapshot_path.display(), "session snapshot");

    AppContext {
        api: ShelfApi::new(FileStore::new(snapshot_path)),
        config,
    }
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    print!("{}", render_result(result, ctx.config.line_width));
}

/// Loads the last session for a one-shot command. Only problems are shown;
/// the resume notice would just be noise in scripted output.
fn resume_quietly(ctx: &mut AppContext) -> bool {
    let result = ctx.api.resume();
    let problems: Vec<_> = result
        .messages
        .into_iter()
        .filter(|m| m.level == MessageLevel::Warning)
        .collect();
    eprint!("{}", render_messages(&problems));
    problems.is_empty()
}

/// Like [`resume_quietly`], but refuses to go on if the snapshot that is
/// about to be overwritten could not be read.
fn resume_for_update(ctx: &mut AppContext) -> Result<()> {
    if !resume_quietly(ctx) {
        bail!(
            "not changing the library while {} is unreadable; fix or remove it first",
            ctx.api.snapshot_path().display()
        );
    }
    Ok(())
}

fn save(ctx: &mut AppContext) -> Result<()> {
    ctx.api.save_session()?;
    debug!(count = ctx.api.len(), "snapshot updated");
    Ok(())
}

fn parse_position(input: &str) -> Result<Position> {
    input.parse::<Position>().map_err(anyhow::Error::msg)
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    writeln!(prompter.out, "{}", "=== Shelf: personal library ===".bold())?;
    let resumed = ctx.api.resume();
    write!(
        prompter.out,
        "{}",
        render_result(&resumed, ctx.config.line_width)
    )?;

    Menu::new(&mut ctx.api, &ctx.config, prompter).run()?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: &str, author: &str) -> Result<()> {
    resume_for_update(ctx)?;
    let result = ctx.api.add_book(title, author)?;
    save(ctx)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    resume_quietly(ctx);
    let result = ctx.api.list_books();
    print_result(ctx, &result);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, field: Field, query: &str) -> Result<()> {
    resume_quietly(ctx);
    let result = ctx.api.search_books(field, query)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: &str, update: BookUpdate) -> Result<()> {
    let position = parse_position(position)?;
    resume_for_update(ctx)?;
    let result = ctx.api.edit_book(position, &update)?;
    save(ctx)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: &str) -> Result<()> {
    let position = parse_position(position)?;
    resume_for_update(ctx)?;
    let result = ctx.api.delete_book(position)?;
    save(ctx)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_sort(ctx: &mut AppContext) -> Result<()> {
    resume_for_update(ctx)?;
    let result = ctx.api.sort_books();
    if !ctx.api.is_empty() {
        save(ctx)?;
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, file: &Path) -> Result<()> {
    resume_quietly(ctx);
    let result = ctx.api.export_text(file)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    resume_for_update(ctx)?;
    let result = ctx.api.import_text(file)?;
    save(ctx)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_config(config_dir: Option<&Path>, config: &ShelfConfig, init: bool) -> Result<()> {
    let Some(dir) = config_dir else {
        bail!(
            "could not determine a config directory; set {}",
            CONFIG_DIR_ENV
        );
    };
    let path = ShelfConfig::path(dir);

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
        } else {
            ShelfConfig::default().save(dir)?;
            println!("{}", format!("Wrote {}", path.display()).green());
        }
        return Ok(());
    }

    println!("{}", format!("# {}", path.display()).dimmed());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_from_arguments() {
        assert_eq!(parse_position("3").unwrap().get(), 3);
        assert_eq!(
            parse_position("0").unwrap_err().to_string(),
            "Book numbers start at 1"
        );
        assert_eq!(
            parse_position("three").unwrap_err().to_string(),
            "Not a book number: three"
        );
    }
}
