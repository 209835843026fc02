use super::{SearchOptions, Tracker};
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const AUTH_URL: &str = "rest/auth/1/session";
const SEARCH_URL: &str = "rest/api/2/search";
const ISSUE_URL: &str = "rest/api/2/issue";

/// Timestamp layout of worklog records, e.g. `2016-03-25T12:00:00.000-0500`.
/// The fractional part is optional.
pub const JIRA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("parse {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("Auth at Jira instance failed. Status code: {0}")]
    Auth(u16),
    #[error("Request failed. Status code: {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize, Clone, Debug)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: JiraIssueFields,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub worklog: Option<JiraWorklog>,
}

/// Worklog page, either embedded in a search result or returned by the
/// dedicated worklog endpoint.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraWorklog {
    pub start_at: u32,
    pub max_results: u32,
    pub total: u32,
    pub worklogs: Vec<JiraWorklogRecord>,
}

impl JiraWorklog {
    /// Whether the page holds every worklog record of the issue.
    pub fn is_complete(&self) -> bool {
        self.max_results == self.total
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklogRecord {
    #[serde(default)]
    pub author: JiraUser,
    #[serde(deserialize_with = "deserialize_jira_time")]
    pub created: DateTime<FixedOffset>,
    pub time_spent_seconds: i64,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct JiraUser {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct JiraSearchResults {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

fn deserialize_jira_time<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    DateTime::parse_from_str(&value, JIRA_TIME_FORMAT).map_err(serde::de::Error::custom)
}

/// JQL selecting the issues `author` logged work on during `date`.
pub fn worklog_query(author: &str, date: &NaiveDate) -> String {
    format!("worklogDate = '{}' and worklogAuthor = {}", date.format("%Y-%m-%d"), author)
}

/// Jira REST client.
///
/// The session cookie handed out by the auth endpoint is kept in the
/// client's cookie store, so every call made after [`Tracker::login`]
/// is authenticated.
#[derive(Debug)]
pub struct Jira {
    client: Client,
    api_url: String,
}

impl Jira {
    pub fn new(api_url: &str) -> Result<Self, JiraError> {
        Url::parse(api_url).map_err(|e| JiraError::InvalidUrl {
            url: api_url.to_string(),
            message: e.to_string(),
        })?;
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn ensure_success(res: Response) -> Result<Response, JiraError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "Jira request failed");
        Err(JiraError::Status(status.as_u16()))
    }
}

impl Tracker for Jira {
    async fn login(&self, username: &str, password: &str) -> anyhow::Result<()> {
        let credentials = LoginCredentials {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let auth_url = self.url(AUTH_URL);
        tracing::debug!(url = %auth_url, username, "creating Jira session");

        let auth_res = self.client.post(auth_url).json(&credentials).send().await.map_err(JiraError::from)?;
        let status = auth_res.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Jira authentication failed");
            return Err(JiraError::Auth(status.as_u16()).into());
        }

        Ok(())
    }

    async fn search(&self, query: &str, options: &SearchOptions) -> anyhow::Result<Vec<JiraIssue>> {
        let url = self.url(SEARCH_URL);
        let start_at = options.start_at.to_string();
        let max_results = options.max_results.to_string();
        tracing::debug!(%url, jql = query, start_at = options.start_at, max_results = options.max_results, "searching Jira issues");

        let res = self
            .client
            .get(&url)
            .query(&[
                ("jql", query),
                ("startAt", start_at.as_str()),
                ("maxResults", max_results.as_str()),
                ("expand", ""),
                ("fields", "*all"),
            ])
            .send()
            .await
            .map_err(JiraError::from)?;
        let res = Self::ensure_success(res).await?;

        let search_results = res.json::<JiraSearchResults>().await.map_err(JiraError::from)?;
        tracing::debug!(issues = search_results.issues.len(), "search finished");
        Ok(search_results.issues)
    }

    async fn worklogs(&self, issue_key: &str) -> anyhow::Result<Vec<JiraWorklogRecord>> {
        let url = self.url(&format!("{}/{}/worklog", ISSUE_URL, issue_key));
        tracing::debug!(%url, issue = issue_key, "fetching full worklog");

        let res = self.client.get(&url).send().await.map_err(JiraError::from)?;
        let res = Self::ensure_success(res).await?;

        let worklog = res.json::<JiraWorklog>().await.map_err(JiraError::from)?;
        tracing::debug!(issue = issue_key, records = worklog.worklogs.len(), "worklog fetched");
        Ok(worklog.worklogs)
    }
}

/// Jira section of the configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub login: String,
    pub api_url: String,
}
