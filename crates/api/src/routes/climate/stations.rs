use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{routes::ApiError, service::StationRecord, AppState};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every monitoring station, ordered by id", body = Vec<StationRecord>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = crate::routes::ErrorBody)
    ))]
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationRecord>>, ApiError> {
    let stations = state.service.station_list().await?;
    Ok(Json(stations))
}
