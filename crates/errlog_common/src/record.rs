//! Match records and transient source files.

use serde::{Deserialize, Serialize};

/// One matched line.
///
/// `index` is 0 until the aggregator assigns the run-wide position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub index: u32,
    pub message: String,
    pub source_path: String,
    pub line_number: u32,
}

impl MatchRecord {
    pub fn new(
        message: impl Into<String>,
        source_path: impl Into<String>,
        line_number: u32,
    ) -> Self {
        Self {
            index: 0,
            message: message.into(),
            source_path: source_path.into(),
            line_number,
        }
    }
}

/// 1-based ordinal for a 0-based position, saturating at `u32::MAX`.
pub fn ordinal(pos: usize) -> u32 {
    u32::try_from(pos.saturating_add(1)).unwrap_or(u32::MAX)
}

/// Content of one listed file, alive only while it is being searched.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub relative_path: String,
    pub raw_content: String,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            raw_content: raw_content.into(),
        }
    }
}
