//! Service layer for carpatlas
//!
//! Location resolution, route-stop resolution and report ingestion on top of
//! the storage backend, plus the batch scrape entry points used by the CLI.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod location_service;
mod name_locks;
mod report_service;
mod route_service;
mod scrape_service;

pub use error::ServiceError;
pub use location_service::{LocationDetails, LocationService, Resolution};
pub use name_locks::{NameGuard, NameLocks};
pub use report_service::{IngestOutcome, ReportService};
pub use route_service::{ResolvedRoute, RouteService};
pub use scrape_service::{ProgressSnapshot, ScrapeKind, ScrapeService, ScrapeSummary};
