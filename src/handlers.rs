use crate::errors::AppError;
use crate::models::{ReportQuery, ReportResponse};
use crate::range::{default_range, format_picker_date, month_diff, parse_picker_date};
use crate::state::AppState;
use crate::stats::build_report;
use crate::ui::render_index;
use crate::upstream::{fetch_growth, FetchError};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use tracing::{error, info, warn};

pub async fn index() -> Html<String> {
    let (from, to) = default_range(Local::now().date_naive());
    Html(render_index(&format_picker_date(from), &format_picker_date(to)))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let from = parse_picker_date(&query.from)
        .ok_or_else(|| AppError::bad_request(format!("invalid start date {:?}", query.from)))?;
    let to = parse_picker_date(&query.to)
        .ok_or_else(|| AppError::bad_request(format!("invalid end date {:?}", query.to)))?;
    let range_months = month_diff(from, to);

    let records = match fetch_growth(&state.client, &state.upstream, &query).await {
        Ok(records) => records,
        Err(FetchError::MalformedResponse(reason)) => {
            warn!(city = %query.city, topics = %query.topics, "discarding upstream data: {reason}");
            let mut report = build_report(&[], range_months);
            report.notice = Some("The analytics service returned unusable data.".to_string());
            return Ok(Json(report));
        }
        Err(err) => {
            error!(city = %query.city, topics = %query.topics, "{err}");
            return Err(err.into());
        }
    };

    let report = build_report(&records, range_months);
    info!(
        city = %query.city,
        topics = %query.topics,
        records = records.len(),
        series = report.series.len(),
        ranked = report.ranking.len(),
        range_months,
        "report built"
    );
    Ok(Json(report))
}
