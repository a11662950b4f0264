use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{routes::ApiError, service::RangeSummary, AppState};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "Inclusive YYYY-MM-DD lower bound"),
    ),
    responses(
        (status = OK, description = "Temperature summary for all dates on or after the start date", body = Vec<RangeSummary>),
        (status = NOT_FOUND, description = "Malformed start date", body = crate::routes::ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = crate::routes::ErrorBody)
    ))]
pub async fn range_stats_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<RangeSummary>>, ApiError> {
    let summary = state.service.range_stats(&start, None).await?;
    Ok(Json(vec![summary]))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Inclusive YYYY-MM-DD lower bound"),
        ("end" = String, Path, description = "Inclusive YYYY-MM-DD upper bound"),
    ),
    responses(
        (status = OK, description = "Temperature summary for all dates between the bounds, inclusive", body = Vec<RangeSummary>),
        (status = NOT_FOUND, description = "Malformed start or end date", body = crate::routes::ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = crate::routes::ErrorBody)
    ))]
pub async fn range_stats_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<RangeSummary>>, ApiError> {
    let summary = state.service.range_stats(&start, Some(&end)).await?;
    Ok(Json(vec![summary]))
}
