use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Where a report came from; handed to the sample-name cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// Bare file name.
    pub filename: String,
    /// Directory holding the file, relative to the search root.
    pub root: PathBuf,
}

/// Why a single report file was rejected. Always recovered locally.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error while reading report: {source}")]
    Io {
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error("top-level JSON value is not an object")]
    NotAnObject,
    #[error("missing required fields: {}", missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
    #[error("field `{field}` has an unexpected value: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    pub(crate) fn io_err(source: io::Error) -> Self {
        Self::Io { source }
    }
    pub(crate) fn json_err(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

/// Errors surfaced to the host by a module run.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Nothing usable was found; the host should drop this module's section.
    #[error("no repaq samples found")]
    NoSamplesFound,
    #[error("invalid search pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to locate reports under {root:?}: {source}")]
    Locate {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write data file {path:?}: {source}")]
    DataFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ModuleError {
    pub fn is_no_samples(&self) -> bool {
        matches!(self, Self::NoSamplesFound)
    }
}
