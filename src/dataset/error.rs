//! Typed failures of the static datasets.

use std::path::PathBuf;

/// A dataset could not be loaded, prepared, or selected from.
///
/// These are wrapped into a [`color_eyre::eyre::Report`] as they propagate, use
/// [`downcast_ref`](color_eyre::eyre::Report::downcast_ref) to recover the variant.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DataError {
    // Loading
    #[error("Dataset file was not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Dataset file could not be parsed: {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    // Preparing
    #[error("Column '{column}' was not found in dataset: {path:?}")]
    MissingColumn { column: String, path: PathBuf },

    // Selecting
    #[error("There is no {what} to choose from.")]
    EmptySelection { what: String },

    #[error("Unknown {what}: {value:?}")]
    UnknownSelection { what: String, value: String },
}
