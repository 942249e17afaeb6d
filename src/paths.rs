// paths.rs - Data Directory Resolution
//
// All persisted state (settings, window geometry, tasks, log) lives in one
// directory under the platform config dir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::files;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FOCUS_DATA_DIR";

/// Resolved data directory with helpers for each persisted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Use an explicit directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$FOCUS_DATA_DIR`, else `<config_dir>/FocusTool`, else the working directory.
    /// The directory is created if it doesn't exist yet.
    pub fn resolve() -> io::Result<Self> {
        let root = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .map(|dir| dir.join(files::APP_DIR))
                    .unwrap_or_else(|| PathBuf::from("."))
            });
        Self::create(root)
    }

    /// Use `root`, creating it first
    pub fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The working directory, used when the real data directory can't be created
    pub fn fallback() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> PathBuf {
        self.root.join(files::SETTINGS)
    }

    pub fn window_config(&self) -> PathBuf {
        self.root.join(files::WINDOW_CONFIG)
    }

    pub fn tasks(&self) -> PathBuf {
        self.root.join(files::TASKS)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(files::LOG)
    }
}

/// Write `contents` to `path`, creating parent directories as needed
pub(crate) fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_names_live_under_root() {
        let dir = DataDir::new("/tmp/focus");
        assert_eq!(dir.settings(), PathBuf::from("/tmp/focus/settings.json"));
        assert_eq!(dir.window_config(), PathBuf::from("/tmp/focus/window_config.json"));
        assert_eq!(dir.tasks(), PathBuf::from("/tmp/focus/tasks.json"));
        assert_eq!(dir.log_file(), PathBuf::from("/tmp/focus/focus_tool.log"));
    }

    #[test]
    fn test_create_makes_missing_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("FocusTool");
        let dir = DataDir::create(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(dir.root(), root.as_path());
    }

    #[test]
    fn test_create_reports_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        assert!(DataDir::create(blocker.join("FocusTool")).is_err());
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("deeper").join("x.json");
        write_file(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
