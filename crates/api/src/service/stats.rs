use itertools::{Itertools, MinMaxResult};

use crate::db::Measurement;

/// Aggregate statistics over one numeric field of a measurement subset.
#[derive(Clone, Debug, PartialEq)]
pub enum Aggregate {
    Values {
        min: f64,
        max: f64,
        avg: f64,
        count: u64,
    },
    /// Zero records contributed a value. Distinct from contributing records
    /// that happen to hold zero values, so callers cannot misread an empty
    /// match as a measured zero.
    NoData,
}

/// Compute min/max/mean/count of `field` over `records`.
///
/// Records whose field is absent are excluded from the aggregate (they still
/// appear in plain listings, which do not go through here).
pub fn aggregate<F>(records: &[Measurement], field: F) -> Aggregate
where
    F: Fn(&Measurement) -> Option<f64>,
{
    let values: Vec<f64> = records.iter().filter_map(field).collect();

    let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return Aggregate::NoData,
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let sum: f64 = values.iter().sum();
    Aggregate::Values {
        min,
        max,
        avg: sum / values.len() as f64,
        count: values.len() as u64,
    }
}
