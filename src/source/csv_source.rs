use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::source::errors::SourceError;
use crate::source::RowSource;

/// [`RowSource`] over comma-delimited text with a header row.
///
/// Every row must have as many fields as the header. A row that does not is
/// reported as `SourceError::Malformed` and the source moves on to the next one.
/// Fields are not trimmed.
pub struct CsvRowSource<R: Read> {
    reader: Reader<R>,
    exhausted: bool
}

impl<R: Read> CsvRowSource<R> {
    pub fn from_reader(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        Self {
            reader,
            exhausted: false
        }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn header(&mut self) -> Result<StringRecord, SourceError> {
        Ok(self.reader.headers()?.clone())
    }

    fn next_row(&mut self) -> Option<Result<StringRecord, SourceError>> {
        if self.exhausted {
            return None;
        }

        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Err(error) => {
                let error = SourceError::from(error);
                if error.is_fatal() {
                    self.exhausted = true;
                }
                Some(Err(error))
            }
        }
    }
}
