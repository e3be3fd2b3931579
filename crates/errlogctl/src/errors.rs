//! Exit codes for errlogctl
//!
//! Each fatal failure class gets its own code so scripts can tell a broken
//! run apart from a clean run with zero matches.

use errlog_common::ScanError;

/// Exit code for success, including runs with zero matches
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the file list cannot be read
pub const EXIT_LIST_UNREADABLE: i32 = 66;

/// Exit code when the report cannot be written
pub const EXIT_OUTPUT_UNWRITABLE: i32 = 73;

/// Exit code for a bad config file or match pattern
pub const EXIT_CONFIG_ERROR: i32 = 78;

pub fn exit_code(err: &ScanError) -> i32 {
    match err {
        ScanError::ListUnreadable { .. } => EXIT_LIST_UNREADABLE,
        ScanError::OutputUnwritable { .. } => EXIT_OUTPUT_UNWRITABLE,
        ScanError::InvalidPattern(_) | ScanError::Config { .. } => EXIT_CONFIG_ERROR,
    }
}

/// Exit code for any error reaching `main`
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ScanError>()
        .map(exit_code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}
