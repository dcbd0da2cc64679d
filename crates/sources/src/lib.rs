//! Readers for materialized source data
//!
//! Turns local GeoNames dumps, encyclopedia and trail-catalog exports and
//! report listings into the record types the resolver consumes. Fetching is done elsewhere.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod catalog;
mod error;
pub mod geonames;
mod jsonl;
pub mod labels;
mod lines;
pub mod wiki;

pub use catalog::{classify, CatalogEntry};
pub use error::SourceError;
pub use geonames::read_geonames;
pub use jsonl::read_jsonl;
pub use labels::ReportListing;
pub use lines::RecordReader;
pub use wiki::WikiArticle;
