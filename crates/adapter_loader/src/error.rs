//! Trade loading error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading trades from a flat file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The trade file could not be opened
    #[error("failed to open trade file {path}: {source}")]
    Open {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// An I/O failure occurred mid-read
    #[error("I/O error while reading trade data: {0}")]
    Io(#[from] io::Error),

    /// A record could not be parsed into a trade
    #[error("malformed trade record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the source file
        line: u64,
        /// What made the record unparsable
        reason: String,
    },
}
