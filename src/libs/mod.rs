//! Core library modules of jira-standup.
//!
//! - **Worklog aggregation**: per-issue sums of one author's worklogs for one day
//! - **Dates**: argument resolution and the day window
//! - **Presentation**: duration formatting and the aligned report
//! - **Infrastructure**: configuration file, data directory, messages

pub mod config;
pub mod data_storage;
pub mod date;
pub mod formatter;
pub mod messages;
pub mod view;
pub mod worklog;
