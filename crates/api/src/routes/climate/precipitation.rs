use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    routes::ApiError,
    service::{Error, PrecipitationReading},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation readings for the most recent year of data, ordered by date", body = Vec<PrecipitationReading>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = crate::routes::ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationReading>>, ApiError> {
    match state.service.precipitation_series().await {
        Ok(series) => Ok(Json(series)),
        // A dataset with no measurements has nothing to list
        Err(Error::EmptyDataset) => Ok(Json(Vec::new())),
        Err(err) => Err(err.into()),
    }
}
