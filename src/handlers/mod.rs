use crate::handler::{Handler, HandlerError, HandlerResult};
use crate::handlers::csv::CsvHandler;
use crate::handlers::json::JsonHandler;
use std::path::Path;
use tracing::debug;

pub mod csv;
pub mod json;

type Constructor = fn() -> Box<dyn Handler>;

fn construct<H>() -> Box<dyn Handler>
where
    H: Handler + Default + 'static,
{
    Box::new(H::default())
}

/// Format keys and the handlers they resolve to. Keys are unique and matched case-sensitively.
///
/// Supporting another format takes a [`Handler`] implementation and one entry here.
static REGISTRY: &[(&str, Constructor)] = &[
    ("csv", construct::<CsvHandler>),
    ("json", construct::<JsonHandler>),
];

/// Returns the keys of all registered formats, in registration order.
pub fn supported_formats() -> impl Iterator<Item=&'static str> {
    REGISTRY.iter().map(|(key, _)| *key)
}

/// Creates a new handler for the format registered under `format_key`.
///
/// # Errors
///
/// [`HandlerError::UnsupportedFormat`] if no handler is registered under `format_key`.
pub fn create_handler(format_key: &str) -> HandlerResult<Box<dyn Handler>> {
    match REGISTRY.iter().find(|(key, _)| *key == format_key) {
        Some((_, constructor)) => Ok(constructor()),
        None => {
            debug!(format = format_key, "no handler registered for format");
            Err(HandlerError::UnsupportedFormat(format_key.into()))
        }
    }
}

/// Returns the registered format key matching the extension of `path`.
///
/// # Errors
///
/// [`HandlerError::UnsupportedFormat`] if `path` has no extension or no handler is registered
/// for it.
pub fn detect_format(path: &Path) -> HandlerResult<&'static str> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .ok_or_else(|| HandlerError::UnsupportedFormat(format!("{} has no file extension", path.display())))?;
    supported_formats()
        .find(|key| *key == extension)
        .ok_or_else(|| HandlerError::UnsupportedFormat(extension.into()))
}

/// Creates a new handler for the format matching the extension of `path`.
///
/// # Errors
///
/// See [`detect_format`].
pub fn create_handler_for_path(path: &Path) -> HandlerResult<Box<dyn Handler>> {
    create_handler(detect_format(path)?)
}
