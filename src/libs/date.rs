//! Date argument resolution and the day window used to filter worklogs.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// Layout of explicit date arguments.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves the optional date argument of the command.
///
/// - an integer `N` means `N` days before `today` (negative values move forward)
/// - an empty argument means yesterday
/// - anything else must be a `YYYY-MM-DD` date
///
/// # Errors
///
/// A malformed date fails with chrono's parse error, unchanged. A relative
/// offset that leaves the representable date range fails as well.
pub fn resolve_date(arg: &str, today: NaiveDate) -> Result<NaiveDate> {
    if let Ok(days) = arg.parse::<i64>() {
        return Duration::try_days(days)
            .and_then(|offset| today.checked_sub_signed(offset))
            .ok_or_else(|| msg_error_anyhow!(Message::RelativeDateOutOfRange(days)));
    }

    if arg.is_empty() {
        return today
            .pred_opt()
            .ok_or_else(|| msg_error_anyhow!(Message::RelativeDateOutOfRange(1)));
    }

    Ok(NaiveDate::parse_from_str(arg, DATE_FORMAT)?)
}

/// The 24 hours of a calendar date, starting at midnight UTC.
///
/// Both ends are exclusive: an instant exactly at midnight of the date or
/// exactly at midnight of the following date is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    pub fn new(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.with_timezone(&Utc);
        instant > self.start && instant < self.end
    }
}
