//! Error types for the workbook façade

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`crate::excel::Workbook`] operations
#[derive(Debug, Error)]
pub enum Error {
    /// The file at the bound path exists but could not be read as a workbook
    #[error("Unable to load workbook '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// `create_sheet` was called with a name that is already taken
    #[error("Sheet '{0}' already exists")]
    DuplicateSheet(String),

    /// An operation referenced a sheet that does not exist
    #[error("Sheet '{0}' does not exist")]
    UnknownSheet(String),

    /// The name cannot be stored as a worksheet name
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: &'static str },

    /// Bad row, column or A1 reference
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Malformed range bounds
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The number format string was rejected
    #[error("Invalid number format '{format}': {reason}")]
    InvalidFormat { format: String, reason: &'static str },

    /// The bound path is not writable
    #[error("No permission to write '{}'", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other failure while serializing or writing the workbook
    #[error("Failed to save workbook '{}': {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn address<S: Into<String>>(msg: S) -> Self {
        Error::InvalidAddress(msg.into())
    }

    pub(crate) fn range<S: Into<String>>(msg: S) -> Self {
        Error::InvalidRange(msg.into())
    }
}
