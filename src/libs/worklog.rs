//! Worklog aggregation.
//!
//! Turns the issues returned by a worklog search into the time one author
//! tracked against each of them on one day. Embedded worklogs from the
//! search response are used when they are complete; truncated ones are
//! replaced by the full worklog fetched from the tracker.
//!
//! ## Rules
//!
//! - every issue of the search result appears in the output, with a zero
//!   duration when nothing matched
//! - an entry counts only if its author name equals the requested author
//!   exactly and its creation instant lies strictly inside the day window
//! - an entry whose time spent is out of range adds nothing
//! - any failure while fetching a full worklog aborts the aggregation and
//!   no partial result is returned

use crate::api::{JiraIssue, JiraWorklogRecord, Tracker};
use crate::libs::date::DayWindow;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use std::collections::btree_map::{self, BTreeMap};

/// Time tracked against one issue, with the summary kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDuration {
    pub summary: String,
    pub duration: Duration,
}

/// Tracked time per issue key, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDurations(BTreeMap<String, IssueDuration>);

impl IssueDurations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an issue with zero tracked time unless it is already known.
    pub fn seed(&mut self, key: &str, summary: &str) {
        self.0.entry(key.to_string()).or_insert_with(|| IssueDuration {
            summary: summary.to_string(),
            duration: Duration::zero(),
        });
    }

    /// Adds `duration` to a seeded issue. Unknown keys are ignored, and so
    /// is a duration that would overflow the issue's running sum.
    pub fn add(&mut self, key: &str, duration: Duration) {
        let Some(entry) = self.0.get_mut(key) else {
            return;
        };

        match entry.duration.checked_add(&duration) {
            Some(sum) => entry.duration = sum,
            None => tracing::debug!(key, seconds = duration.num_seconds(), "duration overflows issue sum, skipped"),
        }
    }

    pub fn get(&self, key: &str) -> Option<&IssueDuration> {
        self.0.get(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, IssueDuration> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum over all issues. An issue whose time would overflow the sum is
    /// left out.
    pub fn total(&self) -> Duration {
        self.0
            .values()
            .fold(Duration::zero(), |total, entry| total.checked_add(&entry.duration).unwrap_or(total))
    }
}

impl<'a> IntoIterator for &'a IssueDurations {
    type Item = (&'a String, &'a IssueDuration);
    type IntoIter = btree_map::Iter<'a, String, IssueDuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sums the time `author` tracked on `date` against each of `issues`.
///
/// Issues are processed in order. Each truncated embedded worklog costs one
/// call to [`Tracker::worklogs`].
///
/// # Errors
///
/// Fails with `Unable to make worklog call` as soon as a full worklog cannot
/// be fetched.
pub async fn aggregate<T: Tracker>(
    tracker: &T,
    issues: &[JiraIssue],
    author: &str,
    date: NaiveDate,
) -> Result<IssueDurations> {
    let window = DayWindow::new(date);
    let mut durations = IssueDurations::new();

    for issue in issues {
        durations.seed(&issue.key, &issue.fields.summary);

        let Some(worklog) = &issue.fields.worklog else {
            continue;
        };

        let fetched: Vec<JiraWorklogRecord>;
        let records = if worklog.is_complete() {
            &worklog.worklogs
        } else {
            msg_debug!(Message::FetchingFullWorklog(issue.key.clone(), worklog.max_results, worklog.total));
            fetched = tracker.worklogs(&issue.key).await.context(Message::UnableToFetchWorklog)?;
            &fetched
        };

        for record in records
            .iter()
            .filter(|record| record.author.name == author && window.contains(&record.created))
        {
            let Some(spent) = Duration::try_seconds(record.time_spent_seconds) else {
                msg_debug!(Message::InvalidTimeSpent(issue.key.clone(), record.time_spent_seconds));
                continue;
            };
            durations.add(&issue.key, spent);
        }
    }

    tracing::debug!(issues = durations.len(), total = durations.total().num_seconds(), "worklogs aggregated");
    Ok(durations)
}
