//! Error handling module for useeio-flows
//!
//! Every failure of the flow loader keeps the path of the offending file so
//! that callers can log it, even when they choose not to surface it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for flow loading and lookup
pub type Result<T> = std::result::Result<T, FlowError>;

/// Flow loading and lookup errors
#[derive(Error, Debug)]
pub enum FlowError {
    /// The flow file is missing or could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be turned into a flow
    #[error("error in {} (line {line}): {message}", path.display())]
    MalformedData {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// The requested id or uuid is absent from a loaded flow set
    #[error("no flow with id {id} found")]
    NotFoundInSet { id: String },
}

/// Coarse classification of a [`FlowError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IoError,
    MalformedData,
    NotFoundInSet,
}

impl FlowError {
    /// Create a new I/O error for the given file
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new malformed data error for a line of the given file
    pub fn malformed<P: Into<PathBuf>, M: Into<String>>(path: P, line: u64, message: M) -> Self {
        Self::MalformedData {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a new lookup miss
    pub fn not_found_in_set<S: Into<String>>(id: S) -> Self {
        Self::NotFoundInSet { id: id.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::IoError,
            Self::MalformedData { .. } => ErrorKind::MalformedData,
            Self::NotFoundInSet { .. } => ErrorKind::NotFoundInSet,
        }
    }

    /// The file this error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::MalformedData { path, .. } => Some(path.as_path()),
            Self::NotFoundInSet { .. } => None,
        }
    }

    /// Whether the underlying file simply does not exist
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
