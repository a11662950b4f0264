use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ranking, stats, window, Aggregate, Error};
use crate::{
    dates,
    db::{ClimateStore, MeasurementFilter, Station},
};

/// One `{date, prcp}` point of the precipitation series. `prcp` is null for
/// days the station recorded no rainfall figure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One `{date, tobs}` point of the temperature-observation series.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StationRecord {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<Station> for StationRecord {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            station: station.code,
            name: station.name,
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
        }
    }
}

/// Temperature aggregate over a date range. A range matching zero rows
/// leaves the numeric fields null with `count` 0, never a defaulted zero
/// that could be mistaken for a measured value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RangeSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub count: u64,
}

impl From<Aggregate> for RangeSummary {
    fn from(aggregate: Aggregate) -> Self {
        match aggregate {
            Aggregate::Values {
                min,
                max,
                avg,
                count,
            } => Self {
                min: Some(min),
                max: Some(max),
                avg: Some(avg),
                count,
            },
            Aggregate::NoData => Self {
                min: None,
                max: None,
                avg: None,
                count: 0,
            },
        }
    }
}

/// The five user-facing read operations, orchestrating the window, ranking
/// and statistics layers over an explicit store handle.
pub struct QueryService {
    store: Arc<dyn ClimateStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn ClimateStore>) -> Self {
        Self { store }
    }

    /// Filter bounds for the trailing year, re-serialized so they compare
    /// consistently with the stored date strings.
    async fn trailing_year_filter(&self) -> Result<MeasurementFilter, Error> {
        let all = self.store.measurements(&MeasurementFilter::default()).await?;
        let (start, end) = window::trailing_year_window(&all)?;

        Ok(MeasurementFilter {
            date_from: Some(dates::format_date(start)?),
            date_to: Some(dates::format_date(end)?),
            ..MeasurementFilter::default()
        })
    }

    /// Precipitation readings for the trailing year of data, date ascending.
    pub async fn precipitation_series(&self) -> Result<Vec<PrecipitationReading>, Error> {
        let filter = self.trailing_year_filter().await?;
        let rows = self.store.measurements(&filter).await?;

        Ok(rows
            .into_iter()
            .map(|m| PrecipitationReading {
                date: m.date,
                prcp: m.precipitation,
            })
            .collect())
    }

    /// Every station exactly once, ordered by id, regardless of how many
    /// measurements reference it.
    pub async fn station_list(&self) -> Result<Vec<StationRecord>, Error> {
        Ok(self
            .store
            .stations()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Temperature observations of the most active station over the
    /// trailing year of data, date ascending.
    pub async fn temperature_series(&self) -> Result<Vec<TemperatureReading>, Error> {
        let all = self.store.measurements(&MeasurementFilter::default()).await?;
        let busiest = ranking::most_active_station(&all)?;
        let (start, end) = window::trailing_year_window(&all)?;

        let filter = MeasurementFilter {
            station_code: Some(busiest),
            date_from: Some(dates::format_date(start)?),
            date_to: Some(dates::format_date(end)?),
        };
        let rows = self.store.measurements(&filter).await?;

        Ok(rows
            .into_iter()
            .map(|m| TemperatureReading {
                date: m.date,
                tobs: m.temperature,
            })
            .collect())
    }

    /// Temperature aggregate over `[start, end]`, or `[start, ...]` when no
    /// end bound is given.
    ///
    /// Both bounds come from the request path and are validated before the
    /// store is touched, in the one-bound and two-bound variants alike.
    pub async fn range_stats(&self, start: &str, end: Option<&str>) -> Result<RangeSummary, Error> {
        if !dates::is_valid_date(start) {
            return Err(Error::InvalidDate(start.to_owned()));
        }
        if let Some(end) = end {
            if !dates::is_valid_date(end) {
                return Err(Error::InvalidDate(end.to_owned()));
            }
        }

        let filter = MeasurementFilter {
            date_from: Some(start.to_owned()),
            date_to: end.map(str::to_owned),
            ..MeasurementFilter::default()
        };
        let rows = self.store.measurements(&filter).await?;

        Ok(stats::aggregate(&rows, |m| Some(m.temperature)).into())
    }
}
