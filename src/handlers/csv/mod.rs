pub mod reader;
pub mod writer;

use crate::handler::{self, Handler, HandlerError, HandlerResult};
use crate::handlers::csv::reader::CsvReader;
use crate::handlers::csv::writer::CsvWriter;
use crate::{Record, Records};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

impl From<csv::Error> for HandlerError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return HandlerError::Format(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(err) => HandlerError::Io(err),
            kind => HandlerError::Format(format!("{:?}", kind)),
        }
    }
}

/// Handler for delimited text files whose first row names the fields of every following row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvHandler {
    delimiter: u8,
}

impl CsvHandler {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// A handler separating fields by `delimiter` instead of a comma.
    ///
    /// # Errors
    ///
    /// [`HandlerError::Format`] if `delimiter` is a record terminator (`\n` or `\r`).
    pub fn with_delimiter(delimiter: u8) -> HandlerResult<Self> {
        if matches!(delimiter, b'\n' | b'\r') {
            return Err(HandlerError::Format(format!(
                "delimiter {:?} is a record terminator", char::from(delimiter),
            )));
        }
        Ok(Self { delimiter })
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Default for CsvHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for CsvHandler {
    fn format_key(&self) -> &'static str {
        "csv"
    }

    fn load(&self, path: &Path) -> HandlerResult<Records> {
        let file = handler::open(path)?;
        let mut reader = CsvReader::try_new(BufReader::new(file), self.delimiter)?;
        let records = reader.records().collect::<HandlerResult<Records>>()?;
        debug!(path = %path.display(), records = records.len(), "loaded csv file");
        Ok(records)
    }

    fn save(&self, path: &Path, records: &[Record]) -> HandlerResult<()> {
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer, self.delimiter).write_records(records)?;
        handler::write(path, &buffer)?;
        debug!(path = %path.display(), records = records.len(), "saved csv file");
        Ok(())
    }
}
