//! Duration formatting for the worklog report.
//!
//! Durations are printed in the compact hours/minutes/seconds form used by
//! the report, dropping leading units that are zero:
//!
//! - 0 seconds → `0s`
//! - 45 seconds → `45s`
//! - 90 seconds → `1m30s`
//! - 3 hours → `3h0m0s`
//!
//! Sub-second precision is dropped; worklogs are tracked in whole seconds.

use chrono::Duration;

/// Formats a duration as `XhYmZs`, omitting leading zero units.
///
/// # Examples
///
/// ```rust
/// use chrono::Duration;
/// use jira_standup::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(&Duration::hours(3)), "3h0m0s");
/// assert_eq!(format_duration(&Duration::minutes(61)), "1h1m0s");
/// assert_eq!(format_duration(&Duration::seconds(59)), "59s");
/// assert_eq!(format_duration(&Duration::zero()), "0s");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let seconds = total.unsigned_abs();

    let hours = seconds / 3600;
    let mins = seconds % 3600 / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, mins, secs)
    } else if mins > 0 {
        format!("{}{}m{}s", sign, mins, secs)
    } else {
        format!("{}{}s", sign, secs)
    }
}
