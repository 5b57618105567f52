//! # odm-cli
//!
//! Command line building blocks for an OverDrive/Libby audiobook loan tool:
//! the command and non-interactive option tokens, and the value validators
//! the argument parser runs before anything else happens.
//!
//! Validators are pure functions over the raw argument text. Each one either
//! returns the converted value or an [`OdmError::InvalidArgument`] whose
//! message echoes the offending input, ready to show to the user.

// Public API exports
pub mod cli;
pub mod format;
pub mod options;
pub mod validate;

pub use cli::{NoninteractiveOption, OdmCommand};
pub use format::{FormatError, FormatTemplate};
pub use options::NoninteractiveSettings;
pub use validate::{
    DEFAULT_BOOK_FILE_FORMAT, DEFAULT_BOOK_FOLDER_FORMAT, DEFAULT_FORMAT_FIELDS, positive_int,
    valid_book_folder_file_format, valid_book_format,
};

/// Result type alias for argument validation
pub type OdmResult<T> = Result<T, OdmError>;

/// Error type for argument validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OdmError {
    /// The message is shown to the user as is
    #[error("{0}")]
    InvalidArgument(String),
}

impl OdmError {
    /// Build an invalid-argument error from any message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        OdmError::InvalidArgument(message.into())
    }

    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            OdmError::InvalidArgument(message) => message,
        }
    }
}
