use async_trait::async_trait;
use sqlx::FromRow;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("dataset is missing table `{table}`")]
    MissingTable { table: String },
    #[error("dataset table `{table}` is missing required column `{column}`")]
    MissingColumn { table: String, column: String },
}

/// One climate observation. `(station_code, date)` is not assumed unique;
/// duplicates are tolerated by the ranking and statistics logic.
#[derive(FromRow, Clone, Debug, PartialEq)]
pub struct Measurement {
    pub station_code: String,
    /// Stored as zero-padded `YYYY-MM-DD`, so string order is date order.
    pub date: String,
    /// Absent when rainfall was not recorded that day.
    pub precipitation: Option<f64>,
    pub temperature: f64,
}

/// One fixed monitoring site. Immutable reference data.
#[derive(FromRow, Clone, Debug, PartialEq)]
pub struct Station {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Filter predicate for measurement fetches. All bounds are inclusive and
/// compared against the stored date strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementFilter {
    pub station_code: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Read-only access to the two record collections of the dataset.
///
/// Implementations must be safe for concurrent reads; the collections never
/// change for the lifetime of the process.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Measurements matching the filter, ordered by `date` ascending.
    async fn measurements(&self, filter: &MeasurementFilter) -> Result<Vec<Measurement>, Error>;
    /// All stations, ordered by `id`.
    async fn stations(&self) -> Result<Vec<Station>, Error>;
}
