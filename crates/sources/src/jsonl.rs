//! JSON-lines files of records produced by external adapters.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::lines::RecordReader;

/// One JSON document per line; blank lines are ignored.
pub fn read_jsonl<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<RecordReader<T>, SourceError> {
    RecordReader::open(path.as_ref(), parse_json::<T>)
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, String> {
    serde_json::from_str(raw).map(Some).map_err(|e| e.to_string())
}
