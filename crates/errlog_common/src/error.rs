//! Error types for errlog.
//!
//! Only the file list and the report output are fatal. Per-file problems are
//! logged by the pipeline and counted in the scan summary instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read file list {}: {source}", .path.display())]
    ListUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
