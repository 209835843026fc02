//! Display implementation for jira-standup messages.
//!
//! All message text is defined here so that wording stays consistent across
//! the command, the aggregator and the tests that assert on it. Stage
//! messages are short on purpose: they are chained as `anyhow` context and
//! printed with the alternate formatter, producing lines such as
//! `Unable to get durations: Unable to make search call: Request failed. Status code: 500`.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::MissingFlag(flag) => format!("You must specify --{}", flag),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigReadError(path) => format!("Failed to read configuration file {}", path),

            // === DATE MESSAGES ===
            Message::RelativeDateOutOfRange(days) => format!("Relative date of {} days is out of range", days),

            // === STAGE MESSAGES ===
            Message::UnableToGetClient => "Unable to get client".to_string(),
            Message::UnableToGetDurations => "Unable to get durations".to_string(),
            Message::UnableToSearch => "Unable to make search call".to_string(),
            Message::UnableToFetchWorklog => "Unable to make worklog call".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportTotal(total) => format!("Total: {}", total),
            Message::ReportForDate(author, date) => format!("Worklog of {} for {}", author, date),
            Message::FetchingFullWorklog(key, included, total) => {
                format!("Worklog of {} is truncated ({} of {}), fetching the full list", key, included, total)
            }
            Message::InvalidTimeSpent(key, seconds) => {
                format!("Skipping worklog entry of {} with out of range time spent: {}s", key, seconds)
            }
        };
        write!(f, "{}", text)
    }
}
