//! Error line search over one file's content

use crate::matcher::{LineMatcher, MarkerMatcher};
use crate::record::{ordinal, MatchRecord, SourceFile};

/// Scans text line by line with a pluggable match rule.
pub struct ErrorSearcher<M: LineMatcher = Box<dyn LineMatcher>> {
    matcher: M,
}

impl ErrorSearcher<MarkerMatcher> {
    /// Searcher using the default `error:` marker rule
    pub fn with_default_rule() -> Self {
        Self::new(MarkerMatcher::default())
    }
}

impl<M: LineMatcher> ErrorSearcher<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Find matching lines in `content`.
    ///
    /// Records come back in line order with `index` unset. Line numbers are
    /// 1-based; `\r\n` endings are handled like `\n`.
    pub fn search(&self, content: &str, source_label: &str) -> Vec<MatchRecord> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| self.matcher.is_match(line))
            .map(|(i, line)| MatchRecord::new(line.trim(), source_label, ordinal(i)))
            .collect()
    }

    pub fn search_file(&self, file: &SourceFile) -> Vec<MatchRecord> {
        self.search(&file.raw_content, &file.relative_path)
    }
}
