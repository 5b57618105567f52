//! Value validators for command line arguments
//!
//! Each validator takes the raw argument text and can be handed straight to
//! clap as a `value_parser`.

use crate::format::FormatTemplate;
use crate::{OdmError, OdmResult};

/// Fields a book folder/file name format may reference
pub const DEFAULT_FORMAT_FIELDS: [&str; 6] =
    ["Title", "Author", "Series", "ReadingOrder", "Edition", "ID"];

pub const DEFAULT_BOOK_FOLDER_FORMAT: &str = "%(Title)s - %(Author)s";
pub const DEFAULT_BOOK_FILE_FORMAT: &str = "%(Title)s - %(Author)s";

/// Ensure that the argument is a positive integer
pub fn positive_int(value: &str) -> OdmResult<u64> {
    value
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            tracing::debug!(value, "rejected non-positive integer");
            OdmError::invalid_argument(format!("\"{}\" is not a positive integer value", value))
        })
}

/// Ensure that a book folder/file name format only uses placeholders from `fields`.
///
/// Returns `value` unchanged on success; nothing is substituted here.
pub fn valid_book_folder_file_format(value: &str, fields: &[&str]) -> OdmResult<String> {
    match FormatTemplate::parse(value, fields) {
        Ok(template) => {
            tracing::debug!(
                value,
                fields = ?template.fields(),
                "accepted book folder/file name format"
            );
            Ok(template.into_string())
        }
        Err(err) => {
            tracing::debug!(value, error = %err, "rejected book folder/file name format");
            Err(OdmError::invalid_argument(format!(
                "\"{}\" is not a valid book folder/file name format: {}",
                value, err
            )))
        }
    }
}

/// [`valid_book_folder_file_format`] against [`DEFAULT_FORMAT_FIELDS`]
pub fn valid_book_format(value: &str) -> OdmResult<String> {
    valid_book_folder_file_format(value, &DEFAULT_FORMAT_FIELDS)
}
