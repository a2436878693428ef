#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! carinfo-core
//!
//! The ingestion contract for generated car profiles: query validation,
//! shape validation, placeholder synthesis and the name-keyed cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod ingest;
pub mod query;
pub mod schema;
pub mod traits;
pub mod types;

pub use cache::{normalize_key, CarCache};
pub use error::{Error, Result};
pub use fallback::fallback_record;
pub use ingest::{ingest, Ingested};
pub use query::CarQuery;
pub use schema::{validate, ValidationFailure, Violation, ViolationKind};
pub use types::{CarRecord, RecordSource, SearchResult};
