use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    db::{ClimateStore, SqliteStore},
    index_handler, precipitation, range_stats_between, range_stats_from, routes,
    service::{self, QueryService},
    stations, tobs,
};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub service: Arc<QueryService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::precipitation::precipitation,
        routes::climate::stations::stations,
        routes::climate::tobs::tobs,
        routes::climate::range_stats::range_stats_from,
        routes::climate::range_stats::range_stats_between,
    ),
    components(
        schemas(
                service::PrecipitationReading,
                service::StationRecord,
                service::TemperatureReading,
                service::RangeSummary,
                routes::ErrorBody
            )
    ),
    tags(
        (name = "hawaii climate api", description = "a RESTful api serving aggregate precipitation and temperature statistics from the Hawaii station dataset")
    )
)]
struct ApiDoc;

pub async fn build_app_state(remote_url: String, database: String) -> Result<AppState, anyhow::Error> {
    let store: Arc<dyn ClimateStore> = Arc::new(
        SqliteStore::connect(&database)
            .await
            .map_err(|e| anyhow!("error opening dataset: {}", e))?,
    );

    Ok(AppState {
        remote_url,
        service: Arc::new(QueryService::new(store)),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        // Static segments take priority over the {start} capture below
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(range_stats_from))
        .route("/api/v1.0/{start}/{end}", get(range_stats_between))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
