//! Line-oriented record reader shared by the GeoNames and JSON-lines readers.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Parses one non-blank line. `Ok(None)` drops the line silently.
pub(crate) type ParseLine<T> = fn(&str) -> Result<Option<T>, String>;

/// Iterator over the records of a local file.
///
/// Malformed lines are logged with their line number and skipped. A read
/// error ends the iteration.
pub struct RecordReader<T> {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line: usize,
    skipped: usize,
    parse: ParseLine<T>,
}

impl<T> RecordReader<T> {
    pub(crate) fn open(path: &Path, parse: ParseLine<T>) -> Result<Self, SourceError> {
        let file = File::open(path)
            .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;
        Ok(Self { path: path.to_path_buf(), lines: BufReader::new(file).lines(), line: 0, skipped: 0, parse })
    }

    /// Malformed lines skipped so far.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<T> Iterator for RecordReader<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(source) => {
                    let err = SourceError::Io { path: self.path.clone(), source };
                    tracing::error!(error = %err, line = self.line, "stopped reading source file");
                    return None;
                },
            };
            self.line = self.line.saturating_add(1);
            if raw.trim().is_empty() {
                continue;
            }
            match (self.parse)(&raw) {
                Ok(Some(record)) => return Some(record),
                Ok(None) => {},
                Err(reason) => {
                    self.skipped = self.skipped.saturating_add(1);
                    let err = SourceError::Malformed { line: self.line, reason };
                    tracing::warn!(path = %self.path.display(), error = %err, "skipping malformed record");
                },
            }
        }
    }
}
