use crate::models::{GrowthRank, GrowthRecord, RankingRow, ReportResponse, SeriesPoint, TimeSeries};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

pub fn build_report(records: &[GrowthRecord], range_months: u32) -> ReportResponse {
    let (categories, series) = build_series(records);
    let ranking = rank_growth(&series, range_months)
        .into_iter()
        .map(|rank| RankingRow {
            percent: format_percent(rank.ratio),
            name: rank.name,
            ratio: rank.ratio,
        })
        .collect();

    ReportResponse {
        range_months,
        categories,
        series,
        ranking,
        notice: None,
    }
}

/// Splits the flat feed into one series per group.
///
/// Groups and categories keep first-seen order; points keep feed order.
pub fn build_series(records: &[GrowthRecord]) -> (Vec<NaiveDate>, Vec<TimeSeries>) {
    let mut seen_months = HashSet::new();
    let mut categories = Vec::new();
    let mut index_by_group: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<TimeSeries> = Vec::new();

    for record in records {
        if seen_months.insert(record.month) {
            categories.push(record.month);
        }

        let index = *index_by_group.entry(record.group.as_str()).or_insert_with(|| {
            series.push(TimeSeries {
                name: record.group.clone(),
                points: Vec::new(),
            });
            series.len() - 1
        });
        series[index]
            .points
            .push(SeriesPoint(utc_millis(record.month), record.members));
    }

    (categories, series)
}

/// Ranks groups observed for longer than the query window by
/// `(max - min) / max(min, 1)`, largest first.
pub fn rank_growth(series: &[TimeSeries], range_months: u32) -> Vec<GrowthRank> {
    let mut ranking: Vec<GrowthRank> = series
        .iter()
        .filter(|s| s.points.len() > range_months as usize)
        .filter_map(|s| {
            let counts = s.points.iter().map(|point| point.1);
            let max = counts.clone().max()?;
            let min = counts.min()?;
            Some(GrowthRank {
                name: s.name.clone(),
                ratio: (max - min) as f64 / min.max(1) as f64,
            })
        })
        .collect();

    ranking.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    ranking
}

pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

fn utc_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp_millis())
        .unwrap_or_default()
}
