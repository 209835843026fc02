use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "jira-standup";

/// Platform data directory of the application.
///
/// - Windows: `%LOCALAPPDATA%\jira-standup`
/// - macOS: `~/Library/Application Support/jira-standup`
/// - other: `~/.local/share/jira-standup`
#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory. Nothing is created.
    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
