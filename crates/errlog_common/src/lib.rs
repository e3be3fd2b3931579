//! Shared library for errlog: error line search and Markdown reporting.
//!
//! Data flow: file list -> `source` -> `searcher` -> `aggregate` -> `report`,
//! driven by `pipeline`.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod searcher;
pub mod source;

pub use error::{Result, ScanError};
pub use pipeline::{Pipeline, ScanSummary};
pub use record::MatchRecord;
