use super::{snapshot, text, Persistence, Snapshot, TextImport};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    snapshot_path: PathBuf,
}

impl FileStore {
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .snapshot_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| snapshot::DEFAULT_FILENAME.into());
        name.push(".tmp");
        self.snapshot_path.with_file_name(name)
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ShelfError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

/// Writes `temp` with `write` and renames it over `target`, so a failed write
/// never clobbers what was there. The temp file is gone afterwards either way.
fn replace_via_temp(
    temp: &Path,
    target: &Path,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> Result<()> {
    let written = File::create(temp).and_then(|mut file| {
        write(&mut file)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(temp);
        return Err(ShelfError::io(temp, e));
    }
    if let Err(e) = fs::rename(temp, target) {
        let _ = fs::remove_file(temp);
        return Err(ShelfError::io(target, e));
    }
    Ok(())
}

impl Persistence for FileStore {
    fn export_text(&mut self, path: &Path, books: &[Book]) -> Result<()> {
        fs::write(path, text::encode(books)).map_err(|e| ShelfError::io(path, e))?;
        debug!(path = %path.display(), count = books.len(), "exported text");
        Ok(())
    }

    fn import_text(&self, path: &Path) -> Result<TextImport> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ShelfError::NotFound(path.to_path_buf()))
            }
            Err(e) => return Err(ShelfError::io(path, e)),
        };
        let import = text::decode(&content);
        debug!(
            path = %path.display(),
            imported = import.books.len(),
            skipped = import.skipped,
            "parsed text import"
        );
        Ok(import)
    }

    fn save_snapshot(&mut self, books: &[Book]) -> Result<()> {
        let content = snapshot::encode(&Snapshot::new(books.to_vec()))?;
        self.ensure_parent(&self.snapshot_path)?;

        let temp_path = self.temp_path();
        replace_via_temp(&temp_path, &self.snapshot_path, |file| {
            file.write_all(content.as_bytes())
        })?;

        debug!(path = %self.snapshot_path.display(), count = books.len(), "saved snapshot");
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        let content = match fs::read_to_string(&self.snapshot_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.snapshot_path.display(), "no snapshot found");
                return Ok(None);
            }
            Err(e) => return Err(ShelfError::io(&self.snapshot_path, e)),
        };
        let snapshot = snapshot::decode(&content)?;
        debug!(
            path = %self.snapshot_path.display(),
            count = snapshot.books.len(),
            "loaded snapshot"
        );
        Ok(Some(snapshot))
    }

    fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn failed_write_leaves_old_snapshot_and_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("library_data.json");
        let temp = dir.path().join("library_data.json.tmp");
        fs::write(&target, "previous").unwrap();

        let err = replace_via_temp(&temp, &target, |file| {
            file.write_all(b"half a snap")?;
            Err(io::Error::new(ErrorKind::Other, "No space left on device"))
        })
        .unwrap_err();

        assert!(matches!(err, ShelfError::Io { .. }));
        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "previous");
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        let temp = dir.path().join("occupied.tmp");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        assert!(replace_via_temp(&temp, &target, |file| file.write_all(b"{}")).is_err());
        assert!(!temp.exists());
    }
}
