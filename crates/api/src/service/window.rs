use hawaii_climate_core::TRAILING_WINDOW_DAYS;
use time::Date;

use super::Error;
use crate::{dates, db::Measurement};

/// Most recent date across all measurements.
///
/// The stored strings are zero-padded ISO dates, so the lexicographic
/// maximum is the chronological maximum.
pub fn latest_date(measurements: &[Measurement]) -> Result<Date, Error> {
    let max = measurements
        .iter()
        .map(|m| m.date.as_str())
        .max()
        .ok_or(Error::EmptyDataset)?;

    Ok(dates::parse_date(max)?)
}

/// Inclusive window `[latest - 365d, latest]` served by both series
/// endpoints. The single offset constant lives in the core crate so the two
/// callers cannot drift apart.
pub fn trailing_year_window(measurements: &[Measurement]) -> Result<(Date, Date), Error> {
    let latest = latest_date(measurements)?;
    Ok((dates::subtract_days(latest, TRAILING_WINDOW_DAYS), latest))
}
