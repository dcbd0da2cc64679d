//! Core types for carpatlas
//!
//! Domain types, geodesy, place matching rules and route-text parsing shared
//! by the storage, service and source crates. Nothing here performs I/O.

pub mod constants;
mod chain;
mod difficulty;
mod env_config;
mod error;
mod geo;
mod location;
mod matching;
mod report;
pub mod route_parser;

pub use chain::*;
pub use difficulty::*;
pub use env_config::*;
pub use error::*;
pub use geo::*;
pub use location::*;
pub use matching::*;
pub use report::*;
pub use route_parser::{parse_route, ParsedStop, StopDescriptor};
