use time::{format_description::BorrowedFormatItem, macros::format_description, Date, Duration};

/// Calendar date format used throughout the dataset (`YYYY-MM-DD`).
///
/// Zero-padded, so the stored strings order lexicographically the same way
/// they order chronologically.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("`{input}` is not a valid YYYY-MM-DD date: {source}")]
    InvalidFormat {
        input: String,
        source: time::error::Parse,
    },
    #[error("failed to format date: {0}")]
    Format(#[from] time::error::Format),
}

/// Strictly parse a `YYYY-MM-DD` string.
///
/// Partial matches, trailing input, and impossible calendar dates
/// ("2017-02-30") are all rejected.
pub fn parse_date(input: &str) -> Result<Date, Error> {
    Date::parse(input, DATE_FORMAT).map_err(|source| Error::InvalidFormat {
        input: input.to_owned(),
        source,
    })
}

/// Non-throwing validation predicate over [`parse_date`].
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

/// Calendar subtraction, month/year rollover handled by `time`.
pub fn subtract_days(date: Date, days: i64) -> Date {
    date.saturating_sub(Duration::days(days))
}

/// Canonical re-serialization, used to build filter bounds that compare
/// consistently with the stored date strings.
pub fn format_date(date: Date) -> Result<String, Error> {
    Ok(date.format(DATE_FORMAT)?)
}
