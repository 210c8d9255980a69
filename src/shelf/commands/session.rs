//! Session snapshot commands: resume on startup, save on exit.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::Persistence;
use tracing::warn;

/// Replaces the library with the last saved session, if there is one.
///
/// Never fails: an unreadable or corrupt snapshot is reported as a warning
/// and the session starts with an empty library.
pub fn resume<P: Persistence>(store: &P, library: &mut Library) -> CmdResult {
    let mut result = CmdResult::default();
    match store.load_snapshot() {
        Ok(Some(snapshot)) => {
            let count = snapshot.books.len();
            library.replace_all(snapshot.books);
            result.snapshot_saved_at = Some(snapshot.saved_at);
            result.add_message(CmdMessage::info(format!(
                "Resumed {} book(s) from the last session.",
                count
            )));
        }
        Ok(None) => {
            library.replace_all(Vec::new());
        }
        Err(e) => {
            warn!(path = %store.snapshot_path().display(), error = %e, "could not load snapshot");
            library.replace_all(Vec::new());
            result.add_message(CmdMessage::warning(format!(
                "Could not load the saved session ({}). Starting with an empty library.",
                e
            )));
        }
    }
    result
}

pub fn save<P: Persistence>(store: &mut P, library: &Library) -> Result<CmdResult> {
    store.save_snapshot(library.books())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Session saved: {} book(s).",
        library.len()
    )));
    Ok(result)
}
