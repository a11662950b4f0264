use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    routes::ApiError,
    service::{Error, TemperatureReading},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station over the most recent year of data, ordered by date", body = Vec<TemperatureReading>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = crate::routes::ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
    match state.service.temperature_series().await {
        Ok(series) => Ok(Json(series)),
        Err(Error::EmptyDataset) => Ok(Json(Vec::new())),
        Err(err) => Err(err.into()),
    }
}
