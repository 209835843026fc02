//! Optional configuration file for jira-standup.
//!
//! The file lives at `config.json` in the platform data directory (see
//! [`DataStorage`]) and provides defaults for the Jira instance URL and the
//! login name. Command-line flags and environment variables always win over
//! it. Passwords are never read from or written to this file.
//!
//! ```json
//! {
//!   "jira": {
//!     "login": "jdoe",
//!     "api_url": "https://jira.example.com"
//!   }
//! }
//! ```
//!
//! A missing file is the same as an empty configuration. A file that exists
//! but cannot be read or parsed is an error, reported before any network
//! call is made.

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME);
        let display_path = config_file_path.display().to_string();

        if !config_file_path.exists() {
            tracing::debug!(path = %display_path, "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let config_str =
            fs::read_to_string(&config_file_path).with_context(|| Message::ConfigReadError(display_path.clone()))?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(display_path.clone()))?;
        tracing::debug!(path = %display_path, "configuration loaded");
        Ok(config)
    }

    /// Jira login from the file, if configured and non-empty.
    pub fn jira_login(&self) -> Option<String> {
        self.jira.as_ref().map(|jira| jira.login.clone()).filter(|login| !login.is_empty())
    }

    /// Jira instance URL from the file, if configured and non-empty.
    pub fn jira_api_url(&self) -> Option<String> {
        self.jira.as_ref().map(|jira| jira.api_url.clone()).filter(|url| !url.is_empty())
    }
}
