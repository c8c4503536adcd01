mod deserialize;

use crate::handler::{self, Handler, HandlerError, HandlerResult};
use crate::handlers::json::deserialize::UniqueFields;
use crate::{Record, Records};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            HandlerError::Io(err.into())
        } else {
            HandlerError::Format(err.to_string())
        }
    }
}

/// Handler for JSON files holding an array of objects with string values.
///
/// A field name repeated within one object is reported as [`HandlerError::Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonHandler {
    pretty: bool,
}

impl JsonHandler {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// A handler that writes the whole array on a single line.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for JsonHandler {
    fn format_key(&self) -> &'static str {
        "json"
    }

    fn load(&self, path: &Path) -> HandlerResult<Records> {
        let file = handler::open(path)?;
        let records = serde_json::from_reader::<_, Vec<UniqueFields>>(BufReader::new(file))?
            .into_iter()
            .map(|UniqueFields(record)| record)
            .collect::<Records>();
        debug!(path = %path.display(), records = records.len(), "loaded json file");
        Ok(records)
    }

    fn save(&self, path: &Path, records: &[Record]) -> HandlerResult<()> {
        let mut buffer = if self.pretty {
            serde_json::to_vec_pretty(records)?
        } else {
            serde_json::to_vec(records)?
        };
        buffer.push(b'\n');
        handler::write(path, &buffer)?;
        debug!(path = %path.display(), records = records.len(), "saved json file");
        Ok(())
    }
}
