use crate::error::{Result, ShelfError};
use crate::store::snapshot::DEFAULT_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 80;
const MIN_LINE_WIDTH: usize = 40;

/// Configuration for shelf, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Session snapshot file. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: PathBuf,

    /// Ask before deleting a book from the menu
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,

    /// Width listings are truncated to
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_snapshot_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILENAME)
}

fn default_confirm_delete() -> bool {
    true
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            snapshot_file: default_snapshot_file(),
            confirm_delete: default_confirm_delete(),
            line_width: default_line_width(),
        }
    }
}

impl ShelfConfig {
    /// The config file inside `config_dir`.
    pub fn path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| ShelfError::io(&config_path, e))?;
        let config: ShelfConfig = serde_json::from_str(&content)?;
        if config.line_width < MIN_LINE_WIDTH {
            return Err(ShelfError::Config(format!(
                "line_width must be at least {}",
                MIN_LINE_WIDTH
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| ShelfError::io(config_dir, e))?;
        }

        let config_path = Self::path(config_dir);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| ShelfError::io(&config_path, e))?;
        Ok(())
    }

    /// Snapshot path with relative paths anchored at `cwd`.
    pub fn snapshot_path(&self, cwd: &Path) -> PathBuf {
        if self.snapshot_file.is_absolute() {
            self.snapshot_file.clone()
        } else {
            cwd.join(&self.snapshot_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.snapshot_file, PathBuf::from("library_data.json"));
        assert!(config.confirm_delete);
        assert_eq!(config.line_width, 80);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("shelf");

        let config = ShelfConfig {
            snapshot_file: PathBuf::from("/var/lib/shelf/books.json"),
            confirm_delete: false,
            line_width: 120,
        };
        config.save(&dir).unwrap();

        let loaded = ShelfConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"confirm_delete": false}"#,
        )
        .unwrap();

        let loaded = ShelfConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.confirm_delete);
        assert_eq!(loaded.snapshot_file, default_snapshot_file());
    }

    #[test]
    fn test_rejects_narrow_line_width() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"line_width": 10}"#,
        )
        .unwrap();

        assert!(matches!(
            ShelfConfig::load(temp_dir.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn test_snapshot_path_resolution() {
        let cwd = Path::new("/home/reader");
        assert_eq!(
            ShelfConfig::default().snapshot_path(cwd),
            PathBuf::from("/home/reader/library_data.json")
        );

        let config = ShelfConfig {
            snapshot_file: PathBuf::from("/data/books.json"),
            ..ShelfConfig::default()
        };
        assert_eq!(config.snapshot_path(cwd), PathBuf::from("/data/books.json"));
    }
}
