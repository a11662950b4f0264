use std::sync::Arc;

use axum::Router;
use climate_api::{
    app, AppState, ClimateStore, Measurement, MeasurementFilter, QueryService, Station,
};
use mockall::mock;

mock! {
    pub ClimateAccess {}

    #[async_trait::async_trait]
    impl ClimateStore for ClimateAccess {
        async fn measurements(
            &self,
            filter: &MeasurementFilter,
        ) -> Result<Vec<Measurement>, climate_api::db::Error>;

        async fn stations(&self) -> Result<Vec<Station>, climate_api::db::Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub fn spawn_app(store: Arc<dyn ClimateStore>) -> TestApp {
    let app_state = AppState {
        remote_url: "http://localhost:5000".to_string(),
        service: Arc::new(QueryService::new(store)),
    };

    TestApp {
        app: app(app_state),
    }
}

/// Mock store that answers every fetch by filtering a fixed row set, the
/// same way the real store's SQL does.
pub fn scan_store(rows: Vec<Measurement>, stations: Vec<Station>) -> MockClimateAccess {
    let mut store = MockClimateAccess::new();
    store
        .expect_measurements()
        .returning(move |filter| Ok(filter_rows(&rows, filter)));
    store
        .expect_stations()
        .returning(move || Ok(stations.clone()));
    store
}

pub fn filter_rows(rows: &[Measurement], filter: &MeasurementFilter) -> Vec<Measurement> {
    let mut matching: Vec<Measurement> = rows
        .iter()
        .filter(|m| {
            filter
                .station_code
                .as_ref()
                .is_none_or(|code| &m.station_code == code)
                && filter.date_from.as_ref().is_none_or(|from| &m.date >= from)
                && filter.date_to.as_ref().is_none_or(|to| &m.date <= to)
        })
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.date.cmp(&b.date));
    matching
}

pub fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station_code: station.to_owned(),
        date: date.to_owned(),
        precipitation: prcp,
        temperature: tobs,
    }
}

/// Latest date 2017-08-23, so the trailing-year window starts 2016-08-23;
/// the first row falls just outside it. USC00519397 is the busiest station.
pub fn sample_measurements() -> Vec<Measurement> {
    vec![
        measurement("USC00519397", "2016-08-22", Some(1.2), 71.0),
        measurement("USC00519397", "2016-08-23", Some(0.1), 72.0),
        measurement("USC00516128", "2017-02-01", None, 66.0),
        measurement("USC00516128", "2017-08-23", Some(0.45), 76.0),
        measurement("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ]
}

pub fn sample_stations() -> Vec<Station> {
    vec![
        Station {
            id: 1,
            code: "USC00519397".to_owned(),
            name: "WAIKIKI 717.2, HI US".to_owned(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            id: 2,
            code: "USC00516128".to_owned(),
            name: "MANOA LYON ARBO 785.2, HI US".to_owned(),
            latitude: 21.3331,
            longitude: -157.8025,
            elevation: 152.4,
        },
        // No measurements reference this one
        Station {
            id: 3,
            code: "USC00511918".to_owned(),
            name: "HONOLULU OBSERVATORY 702.2, HI US".to_owned(),
            latitude: 21.3152,
            longitude: -157.9992,
            elevation: 0.9,
        },
    ]
}
