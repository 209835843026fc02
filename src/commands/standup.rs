//! The worklog report command.
//!
//! Validates the credentials, resolves the date, authenticates against Jira,
//! searches the issues the user logged work on, sums the matching worklogs
//! and prints the aligned report. The first error ends the run; nothing is
//! printed to the output before the whole report is known.

use crate::{
    api::{
        jira::{worklog_query, Jira},
        SearchOptions, Tracker, DEFAULT_MAX_RESULTS,
    },
    libs::{
        config::Config,
        date::resolve_date,
        messages::Message,
        view::View,
        worklog::{aggregate, IssueDurations},
    },
    msg_bail_anyhow, msg_debug,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::io::Write;

#[derive(Debug, Args)]
pub struct StandupArgs {
    /// Date to report: YYYY-MM-DD, or a number of days ago (default: yesterday)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// The Jira url
    #[arg(long, env = "JIRA_URL")]
    pub url: Option<String>,

    /// The Jira username for auth
    #[arg(long, env = "JIRA_USERNAME")]
    pub username: Option<String>,

    /// The Jira password for auth
    #[arg(long, env = "JIRA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Maximum number of issues returned by the search
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,
}

/// Validated connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl StandupArgs {
    /// Resolves url, username and password from the arguments, falling back
    /// to the configuration file for the url and username.
    ///
    /// # Errors
    ///
    /// `You must specify --<flag>` for the first missing value, checked in
    /// the order username, password, url.
    pub fn credentials(&self, config: &Config) -> Result<Credentials> {
        let username = non_empty(&self.username).or_else(|| config.jira_login());
        let Some(username) = username else {
            msg_bail_anyhow!(Message::MissingFlag("username"));
        };

        let Some(password) = non_empty(&self.password) else {
            msg_bail_anyhow!(Message::MissingFlag("password"));
        };

        let url = non_empty(&self.url).or_else(|| config.jira_api_url());
        let Some(url) = url else {
            msg_bail_anyhow!(Message::MissingFlag("url"));
        };

        Ok(Credentials { url, username, password })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|value| !value.is_empty())
}

/// Runs the report and writes it to `out`.
pub async fn cmd<W: Write + ?Sized>(args: StandupArgs, out: &mut W) -> Result<()> {
    let config = Config::read()?;
    let credentials = args.credentials(&config)?;
    let date = resolve_date(args.date.as_deref().unwrap_or_default(), Local::now().date_naive())?;
    msg_debug!(Message::ReportForDate(credentials.username.clone(), date.to_string()));

    let jira = get_client(&credentials).await.context(Message::UnableToGetClient)?;

    let options = SearchOptions {
        max_results: args.max_results,
        ..SearchOptions::default()
    };
    let durations = get_durations(&jira, &credentials.username, date, &options)
        .await
        .context(Message::UnableToGetDurations)?;

    View::durations(out, &durations)
}

async fn get_client(credentials: &Credentials) -> Result<Jira> {
    let jira = Jira::new(&credentials.url)?;
    jira.login(&credentials.username, &credentials.password).await?;
    Ok(jira)
}

/// Searches the issues `username` logged work on at `date` and sums the
/// matching worklogs.
pub async fn get_durations<T: Tracker>(
    tracker: &T,
    username: &str,
    date: NaiveDate,
    options: &SearchOptions,
) -> Result<IssueDurations> {
    let query = worklog_query(username, &date);
    let issues = tracker.search(&query, options).await.context(Message::UnableToSearch)?;

    aggregate(tracker, &issues, username, date).await
}
