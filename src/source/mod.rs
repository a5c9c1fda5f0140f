mod csv_source;
mod errors;
mod fixture;

use csv::StringRecord;

pub use csv_source::CsvRowSource;
pub use errors::SourceError;
pub use fixture::{ensure_default_fixture, DEFAULT_FIXTURE_ATTEMPTS, DEFAULT_FIXTURE_PATH};
#[cfg(test)]
pub use fixture::DEFAULT_FIXTURE;

/// A finite, pull-based sequence of delimited records.
///
/// The header is read once before any data row. `next_row` returns `None` once
/// the source is exhausted and keeps returning `None` afterwards. A
/// `SourceError::Malformed` affects only the row it was reported for; any other
/// error means the source cannot continue.
pub trait RowSource {
    fn header(&mut self) -> Result<StringRecord, SourceError>;
    fn next_row(&mut self) -> Option<Result<StringRecord, SourceError>>;
}
