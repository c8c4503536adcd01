use crate::handler::{HandlerError, HandlerResult};
use crate::Record;
use std::io;

/// Writes records as delimited text, preceded by a header row.
///
/// The header is taken from the fields of the first record. Every other record has to hold
/// exactly the same fields, though not necessarily in the same order.
pub struct CsvWriter<W>
where
    W: io::Write,
{
    writer: csv::Writer<W>,
}

impl<W> CsvWriter<W>
where
    W: io::Write,
{
    pub fn new(writer: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);
        Self { writer }
    }

    pub fn write_records(&mut self, records: &[Record]) -> HandlerResult<()> {
        let Some(first) = records.first() else {
            return Ok(self.writer.flush()?);
        };
        if first.is_empty() {
            return Err(HandlerError::Format("csv records must hold at least one field".into()));
        }

        // Readers drop a byte order mark at the very start of the input.
        if first.keys().next().is_some_and(|field| field.starts_with('\u{feff}')) {
            return Err(HandlerError::Format("first csv field name starts with a byte order mark".into()));
        }

        let headers = first.keys().collect::<Vec<_>>();
        self.writer.write_record(&headers)?;
        for (index, record) in records.iter().enumerate() {
            if record.len() != headers.len() {
                return Err(HandlerError::Format(format!(
                    "record {} has {} fields, but the header has {}",
                    index, record.len(), headers.len(),
                )));
            }
            let fields = headers
                .iter()
                .map(|field| {
                    record.get(*field).ok_or_else(|| HandlerError::Format(format!(
                        "record {} is missing field {}", index, field,
                    )))
                })
                .collect::<HandlerResult<Vec<_>>>()?;
            self.writer.write_record(fields)?;
        }
        Ok(self.writer.flush()?)
    }
}
