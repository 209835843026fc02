/// Every user-facing message produced by jira-standup.
///
/// Variants are grouped by the stage of the run that emits them. The text
/// for each variant lives in [`display`](super::display).
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    MissingFlag(&'static str), // flag name without dashes
    ConfigParseError(String),  // path
    ConfigReadError(String),   // path

    // === DATE MESSAGES ===
    RelativeDateOutOfRange(i64), // days

    // === STAGE MESSAGES ===
    UnableToGetClient,
    UnableToGetDurations,
    UnableToSearch,
    UnableToFetchWorklog,

    // === REPORT MESSAGES ===
    ReportTotal(String), // formatted duration
    ReportForDate(String, String), // author, date
    FetchingFullWorklog(String, u32, u32), // issue key, included, total
    InvalidTimeSpent(String, i64),         // issue key, seconds
}
