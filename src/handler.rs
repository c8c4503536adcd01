use crate::{Record, Records};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    /// Indicates that no handler is registered for the requested format key.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Indicates that the file to load does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Indicates that file content could not be parsed into records, or that records could not be
    /// represented in the target format.
    #[error("invalid format: {0}")]
    Format(String),

    /// Any other I/O failure, such as missing permissions or a missing parent directory.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Loads and saves [`Records`] in one file format.
///
/// Handlers are obtained through [`create_handler`](crate::create_handler). Every call is
/// independent of any other; a handler holds nothing but its format options.
pub trait Handler: Send + Sync {
    /// The key this handler is registered under, e.g. `"csv"`.
    fn format_key(&self) -> &'static str;

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`HandlerError::NotFound`] if `path` does not exist, [`HandlerError::Format`] if its content
    /// cannot be parsed.
    fn load(&self, path: &Path) -> HandlerResult<Records>;

    /// Serializes `records` and writes them to `path`, replacing any existing content.
    ///
    /// The payload is serialized in full before the file is touched, so a
    /// [`HandlerError::Format`] leaves an existing file as it was.
    fn save(&self, path: &Path, records: &[Record]) -> HandlerResult<()>;
}

/// Opens `path` for reading, reporting a missing file as [`HandlerError::NotFound`].
pub(crate) fn open(path: &Path) -> HandlerResult<File> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => HandlerError::NotFound(path.to_path_buf()),
        _ => HandlerError::Io(err),
    })
}

/// Replaces the content of `path` with an already serialized payload.
pub(crate) fn write(path: &Path, contents: &[u8]) -> HandlerResult<()> {
    Ok(fs::write(path, contents)?)
}
