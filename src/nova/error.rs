//! Error types for backup processing

use thiserror::Error;

/// Coarse failure category of a processing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The SQLite decoder could not be brought up
    DecoderInit,
    /// The backup container or its database does not have the expected shape
    Format,
    /// Rows were read but could not be turned into a layout
    Resolution,
}

#[derive(Error, Debug)]
pub enum NovaError {
    #[error("Failed to open the embedded database: {0}")]
    DecoderInit(#[source] rusqlite::Error),

    #[error("{0} not found in the backup file")]
    MissingDatabase(&'static str),

    #[error("Not a readable backup archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Query `{query}` failed: {source}")]
    Format {
        query: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Unexpected row in `{table}`: {source}")]
    Resolution {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NovaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DecoderInit(_) => ErrorKind::DecoderInit,
            Self::MissingDatabase(_) | Self::Archive(_) | Self::Format { .. } | Self::Io(_) => {
                ErrorKind::Format
            }
            Self::Resolution { .. } => ErrorKind::Resolution,
        }
    }
}

pub type Result<T> = std::result::Result<T, NovaError>;
