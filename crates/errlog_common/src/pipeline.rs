//! Scan pipeline
//!
//! Reads the file list, searches each listed source file in order, numbers
//! the matches and writes the report once at the end. Only the list read and
//! the report write are fatal; per-file problems are logged and counted.

use crate::aggregate::Aggregator;
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::matcher::LineMatcher;
use crate::record::{MatchRecord, SourceFile};
use crate::report;
use crate::searcher::ErrorSearcher;
use crate::source::{Candidate, FileLister, SourceFs};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Equal to the last assigned index, or 0
    pub total_matches: u32,
    pub files_listed: usize,
    pub files_scanned: usize,
    pub skipped_extension: usize,
    pub skipped_missing: usize,
    pub skipped_unreadable: usize,
}

impl ScanSummary {
    pub fn files_skipped(&self) -> usize {
        self.skipped_extension + self.skipped_missing + self.skipped_unreadable
    }
}

/// Indexed records plus counters, before anything is written
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub records: Vec<MatchRecord>,
    pub summary: ScanSummary,
}

pub struct Pipeline<'a, F: SourceFs + ?Sized, M: LineMatcher = Box<dyn LineMatcher>> {
    fs: &'a F,
    lister: FileLister,
    searcher: ErrorSearcher<M>,
    title: String,
}

impl<'a, F: SourceFs + ?Sized> Pipeline<'a, F> {
    /// Build from config. Fails if the configured rule does not compile.
    pub fn from_config(fs: &'a F, config: &ScanConfig) -> Result<Self> {
        let matcher = config.rule.compile()?;
        debug!("Match rule: {}", matcher.describe());
        Ok(Self::new(
            fs,
            FileLister::new(&config.base_dir, &config.extensions),
            ErrorSearcher::new(matcher),
            &config.title,
        ))
    }
}

impl<'a, F: SourceFs + ?Sized, M: LineMatcher> Pipeline<'a, F, M> {
    pub fn new(fs: &'a F, lister: FileLister, searcher: ErrorSearcher<M>, title: &str) -> Self {
        Self {
            fs,
            lister,
            searcher,
            title: title.to_string(),
        }
    }

    /// Search already-read list entries in order.
    pub fn scan_entries(&self, entries: &[String]) -> ScanResult {
        let mut summary = ScanSummary {
            files_listed: entries.len(),
            ..ScanSummary::default()
        };
        let mut aggregator = Aggregator::new();

        for listed in entries {
            match self.lister.classify(self.fs, listed) {
                Candidate::WrongExtension { label } => {
                    debug!("Skipping non-source file: {}", label);
                    summary.skipped_extension += 1;
                }
                Candidate::Missing { path, .. } => {
                    warn!("File not found: {}", path.display());
                    summary.skipped_missing += 1;
                }
                Candidate::Source { label, path } => match self.fs.read_to_string(&path) {
                    Ok(raw_content) => {
                        let file = SourceFile {
                            relative_path: label,
                            raw_content,
                        };
                        let added = aggregator.push_batch(self.searcher.search_file(&file));
                        debug!("{}: {} matches", file.relative_path, added);
                        summary.files_scanned += 1;
                    }
                    Err(e) => {
                        warn!("Failed to read {}: {}", listed, e);
                        summary.skipped_unreadable += 1;
                    }
                },
            }
        }

        summary.total_matches = aggregator.total();
        ScanResult {
            records: aggregator.finish(),
            summary,
        }
    }

    /// Read the file list and search every entry.
    pub fn scan(&self, list_path: &Path) -> Result<ScanResult> {
        let entries = self
            .fs
            .read_list(list_path)
            .map_err(|source| ScanError::ListUnreadable {
                path: list_path.to_path_buf(),
                source,
            })?;
        info!(
            "Scanning {} listed files under {}",
            entries.len(),
            self.lister.base_dir().display()
        );
        Ok(self.scan_entries(&entries))
    }

    /// Write the report for `records`, replacing any existing output.
    pub fn write(&self, output_path: &Path, records: &[MatchRecord]) -> Result<()> {
        let to_error = |source| ScanError::OutputUnwritable {
            path: output_path.to_path_buf(),
            source,
        };
        let sink = self.fs.create(output_path).map_err(to_error)?;
        report::write_report(sink, &self.title, records).map_err(to_error)
    }

    /// Full run: scan, then write the report once.
    pub fn run(&self, list_path: &Path, output_path: &Path) -> Result<ScanSummary> {
        let result = self.scan(list_path)?;
        self.write(output_path, &result.records)?;
        info!(
            "Wrote {} matches from {} files to {}",
            result.summary.total_matches,
            result.summary.files_scanned,
            output_path.display()
        );
        Ok(result.summary)
    }
}
