pub mod queries;
pub mod ranking;
pub mod stats;
pub mod window;

pub use queries::{
    PrecipitationReading, QueryService, RangeSummary, StationRecord, TemperatureReading,
};
pub use ranking::most_active_station;
pub use stats::{aggregate, Aggregate};
pub use window::{latest_date, trailing_year_window};

use crate::{dates, db};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed caller-supplied date bound. A user error, never a 5xx.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// The dataset holds no measurements at all.
    #[error("no measurements in dataset")]
    EmptyDataset,
    /// A stored date failed to parse or format; the dataset invariant that
    /// every `date` is well-formed is broken.
    #[error(transparent)]
    Date(#[from] dates::Error),
    #[error(transparent)]
    Store(#[from] db::Error),
}
