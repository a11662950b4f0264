use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use climate_api::{PrecipitationReading, RangeSummary, StationRecord, TemperatureReading};
use hyper::{Method, StatusCode};
use serde_json::{from_slice, Value};
use tower::ServiceExt;

use crate::helpers::{
    measurement, sample_measurements, sample_stations, scan_store, spawn_app, MockClimateAccess,
};

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("Failed to execute request.");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn precipitation_returns_only_the_trailing_year() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let series: Vec<PrecipitationReading> = from_slice(&body).unwrap();
    assert_eq!(series.len(), 4);
    assert!(series
        .iter()
        .all(|r| r.date.as_str() >= "2016-08-23" && r.date.as_str() <= "2017-08-23"));

    // Ordered by date, and unrecorded rainfall survives as null
    let dates: Vec<&str> = series.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2016-08-23", "2017-02-01", "2017-08-23", "2017-08-23"]
    );
    assert!(series.iter().any(|r| r.prcp.is_none()));
}

#[tokio::test]
async fn precipitation_is_idempotent_for_unchanged_data() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (_, first) = get(test_app.app.clone(), "/api/v1.0/precipitation").await;
    let (_, second) = get(test_app.app, "/api/v1.0/precipitation").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn precipitation_on_an_empty_dataset_is_an_empty_array() {
    let store = scan_store(Vec::new(), Vec::new());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let series: Vec<Value> = from_slice(&body).unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn stations_lists_every_station_exactly_once() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);

    let stations: Vec<StationRecord> = from_slice(&body).unwrap();
    let codes: Vec<&str> = stations.iter().map(|s| s.station.as_str()).collect();
    // Ordered by id, and the measurement-less station is present
    assert_eq!(codes, vec!["USC00519397", "USC00516128", "USC00511918"]);
    assert_eq!(stations[0].name, "WAIKIKI 717.2, HI US");
    assert_eq!(stations[2].elevation, 0.9);
}

#[tokio::test]
async fn tobs_covers_the_most_active_station_within_the_window() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    let series: Vec<TemperatureReading> = from_slice(&body).unwrap();
    assert_eq!(
        series,
        vec![
            TemperatureReading {
                date: "2016-08-23".to_owned(),
                tobs: 72.0,
            },
            TemperatureReading {
                date: "2017-08-23".to_owned(),
                tobs: 81.0,
            },
        ]
    );
}

#[tokio::test]
async fn range_stats_counts_rows_in_the_inclusive_range() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/2016-08-23/2017-02-01").await;
    assert_eq!(status, StatusCode::OK);

    let summaries: Vec<RangeSummary> = from_slice(&body).unwrap();
    assert_eq!(
        summaries,
        vec![RangeSummary {
            min: Some(66.0),
            max: Some(72.0),
            avg: Some(69.0),
            count: 2,
        }]
    );
}

#[tokio::test]
async fn open_ended_range_equals_range_to_latest_date() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, open) = get(test_app.app.clone(), "/api/v1.0/2016-08-23").await;
    assert_eq!(status, StatusCode::OK);
    let (_, bounded) = get(test_app.app, "/api/v1.0/2016-08-23/2017-08-23").await;
    assert_eq!(open, bounded);

    let summaries: Vec<RangeSummary> = from_slice(&open).unwrap();
    assert_eq!(summaries[0].count, 4);
}

#[tokio::test]
async fn range_stats_rejects_a_malformed_start_date() {
    // No expectations set: reaching the store before validating would panic
    let store = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/2017-02-30").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: Value = from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("2017-02-30"));
}

#[tokio::test]
async fn range_stats_rejects_a_malformed_end_date() {
    let store = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/2017-01-01/not-a-date").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: Value = from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("not-a-date"));
}

#[tokio::test]
async fn range_with_no_matching_rows_is_marked_no_data() {
    let store = scan_store(sample_measurements(), sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/2020-01-01/2020-01-02").await;
    assert_eq!(status, StatusCode::OK);

    let summaries: Vec<Value> = from_slice(&body).unwrap();
    assert_eq!(summaries.len(), 1);
    assert!(summaries[0]["min"].is_null());
    assert!(summaries[0]["max"].is_null());
    assert!(summaries[0]["avg"].is_null());
    assert_eq!(summaries[0]["count"], 0);
}

#[tokio::test]
async fn duplicate_station_day_rows_all_count() {
    // Two rows for the same (station, date) pair
    let rows = vec![
        measurement("USC00519397", "2017-08-23", Some(0.0), 80.0),
        measurement("USC00519397", "2017-08-23", Some(0.1), 82.0),
    ];
    let store = scan_store(rows, sample_stations());
    let test_app = spawn_app(Arc::new(store));

    let (status, body) = get(test_app.app, "/api/v1.0/2017-08-23/2017-08-23").await;
    assert_eq!(status, StatusCode::OK);

    let summaries: Vec<RangeSummary> = from_slice(&body).unwrap();
    assert_eq!(
        summaries,
        vec![RangeSummary {
            min: Some(80.0),
            max: Some(82.0),
            avg: Some(81.0),
            count: 2,
        }]
    );
}
