use crate::models::{GrowthRecord, RawGrowthRecord, ReportQuery};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::{header::ACCEPT, Client, Url};
use std::{env, time::Duration};
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v0/analytics/monthlygrowth";
const DEFAULT_API_KEY: &str = "special-key";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub url: String,
    pub api_key: String,
    pub neo4j: bool,
    pub timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("analytics request failed: {0}")]
    FetchFailed(String),
    #[error("analytics response was malformed: {0}")]
    MalformedResponse(String),
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            neo4j: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("MEETUP_API_URL").unwrap_or(defaults.url),
            api_key: env::var("MEETUP_API_KEY").unwrap_or(defaults.api_key),
            neo4j: parse_env("MEETUP_API_NEO4J").unwrap_or(defaults.neo4j),
            timeout: parse_env("MEETUP_API_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder().timeout(self.timeout).build()
    }

    pub fn request_url(&self, query: &ReportQuery) -> Result<Url, FetchError> {
        let neo4j = if self.neo4j { "true" } else { "false" };
        Url::parse_with_params(
            &self.url,
            [
                ("startDate", query.from.as_str()),
                ("endDate", query.to.as_str()),
                ("city", query.city.as_str()),
                ("topics", query.topics.as_str()),
                ("api_key", self.api_key.as_str()),
                ("neo4j", neo4j),
            ],
        )
        .map_err(|err| FetchError::FetchFailed(format!("invalid endpoint {}: {err}", self.url)))
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring invalid {name}={value:?}, using default");
            None
        }
    }
}

pub async fn fetch_growth(
    client: &Client,
    config: &UpstreamConfig,
    query: &ReportQuery,
) -> Result<Vec<GrowthRecord>, FetchError> {
    let url = config.request_url(query)?;
    debug!(endpoint = %config.url, city = %query.city, topics = %query.topics, "requesting monthly growth");

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|err| FetchError::FetchFailed(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::FetchFailed(format!("upstream returned {status}")));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| FetchError::FetchFailed(err.to_string()))?;
    decode_records(&body)
}

/// Decodes the upstream JSON array. A single unusable row rejects the whole body.
pub fn decode_records(body: &[u8]) -> Result<Vec<GrowthRecord>, FetchError> {
    let rows: Vec<RawGrowthRecord> = serde_json::from_slice(body)
        .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;

    rows.into_iter()
        .map(|row| {
            let month = parse_month(&row.month).ok_or_else(|| {
                FetchError::MalformedResponse(format!(
                    "group {:?} has unparseable month {:?}",
                    row.group, row.month
                ))
            })?;
            Ok(GrowthRecord {
                group: row.group,
                month,
                members: row.members,
            })
        })
        .collect()
}

/// Keeps the calendar date as written; time of day and offset are dropped.
pub fn parse_month(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}
