//! # jira-standup
//!
//! Reports how much time a user tracked against each Jira issue on a given
//! day, as an aligned table followed by a grand total.
//!
//! ## Flow
//!
//! 1. Resolve the date argument (explicit date, days ago, or yesterday)
//! 2. Authenticate against Jira
//! 3. Search the issues with worklogs by the user on that date
//! 4. Fetch the full worklog of issues whose embedded worklog is truncated
//! 5. Keep the user's entries inside the day and sum them per issue
//! 6. Print the rows sorted by issue key and the total
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_standup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu(&mut std::io::stdout()).await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
