// #![deny(clippy::missing_errors_doc)]
#![deny(clippy::cargo_common_metadata)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::missing_assert_message)]

use indexmap::IndexMap;

pub mod handler;
pub mod handlers;

pub use handler::{Handler, HandlerError, HandlerResult};
pub use handlers::{create_handler, create_handler_for_path, detect_format, supported_formats};

/// A single record: field names mapped to their values, in field order.
///
/// Two records are equal if they hold the same fields with the same values, regardless of the
/// order the fields are stored in.
pub type Record = IndexMap<String, String>;

/// The payload handled by every [`Handler`].
pub type Records = Vec<Record>;
