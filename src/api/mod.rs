//! Issue tracker integration.
//!
//! The report only needs three things from a tracker: a session, a search
//! returning issues with their (possibly truncated) embedded worklogs, and a
//! way to fetch the complete worklog of a single issue. [`Tracker`] captures
//! exactly that, so the worklog aggregation can run against the real
//! [`jira::Jira`] client or against an in-memory fake in tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_standup::api::{jira::Jira, SearchOptions, Tracker};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let jira = Jira::new("https://jira.example.com")?;
//! jira.login("jdoe", "secret").await?;
//! let issues = jira
//!     .search("worklogDate = '2024-05-02' and worklogAuthor = jdoe", &SearchOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

pub mod jira;

pub use jira::{JiraConfig, JiraIssue, JiraWorklog, JiraWorklogRecord};

/// Default page size of a search call.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Paging parameters of a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub start_at: u32,
    pub max_results: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            start_at: 0,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Operations the worklog report needs from an issue tracker.
#[allow(async_fn_in_trait)]
pub trait Tracker {
    /// Establishes an authenticated session for subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker rejects the credentials or cannot be
    /// reached.
    async fn login(&self, username: &str, password: &str) -> Result<()>;

    /// Runs a query and returns the matching issues together with their
    /// embedded worklog summaries.
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<JiraIssue>>;

    /// Returns the complete worklog of one issue.
    async fn worklogs(&self, issue_key: &str) -> Result<Vec<JiraWorklogRecord>>;
}
