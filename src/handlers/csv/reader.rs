use crate::handler::{HandlerError, HandlerResult};
use crate::Record;
use csv::{Reader, StringRecord};
use std::collections::HashSet;
use std::io;

pub struct RecordIter<'r, R: 'r> {
    reader: &'r mut Reader<R>,
    record: StringRecord,
    headers: &'r StringRecord,
}

impl<'r, R: io::Read> RecordIter<'r, R> {
    fn new(reader: &'r mut CsvReader<R>) -> RecordIter<'r, R> {
        Self {
            reader: &mut reader.reader,
            record: StringRecord::new(),
            headers: &reader.headers,
        }
    }
}

impl<'r, R: io::Read> Iterator for RecordIter<'r, R> {
    type Item = HandlerResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Err(err) => Some(Err(err.into())),
            Ok(false) => None,
            Ok(true) => Some(Ok(self
                .headers
                .iter()
                .zip(self.record.iter())
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .collect())),
        }
    }
}

/// Reads records from delimited text whose first row holds the field names.
///
/// Every row must have as many fields as the header; a row that doesn't is reported as
/// [`HandlerError::Format`].
pub struct CsvReader<R> {
    reader: Reader<R>,
    headers: StringRecord,
}

impl<R> CsvReader<R>
where
    R: io::Read,
{
    pub fn try_new(reader: R, delimiter: u8) -> HandlerResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(delimiter)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut seen = HashSet::new();
        if let Some(duplicate) = headers.iter().find(|field| !seen.insert(*field)) {
            return Err(HandlerError::Format(format!("duplicate header field: {}", duplicate)));
        }
        Ok(Self { reader: csv_reader, headers })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&mut self) -> RecordIter<R> {
        RecordIter::new(self)
    }
}
