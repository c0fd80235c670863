use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the upstream monthly growth feed.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRecord {
    pub group: String,
    pub month: NaiveDate,
    pub members: u64,
}

/// Wire shape of an upstream row before the month is parsed.
#[derive(Debug, Deserialize)]
pub struct RawGrowthRecord {
    pub group: String,
    pub month: String,
    pub members: u64,
}

/// A single chart point: `[utc_millis, members]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint(pub i64, pub u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthRank {
    pub name: String,
    pub ratio: f64,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub topics: String,
}

#[derive(Debug, Serialize)]
pub struct RankingRow {
    pub name: String,
    pub ratio: f64,
    pub percent: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub range_months: u32,
    pub categories: Vec<NaiveDate>,
    pub series: Vec<TimeSeries>,
    pub ranking: Vec<RankingRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
