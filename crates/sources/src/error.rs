use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One line of an input file could not be turned into a record.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
