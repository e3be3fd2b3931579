//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic. Flags override the
//! matching fields of the config file.

use clap::Parser;
use errlog_common::config::ScanConfig;
use errlog_common::matcher::MatchRule;
use std::path::PathBuf;

/// errlog scanner CLI
#[derive(Parser, Debug)]
#[command(name = "errlogctl")]
#[command(about = "Collect error lines from listed source files into a Markdown table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File list, one path per line
    #[arg(short, long, default_value = "file_list.txt")]
    pub list: PathBuf,

    /// Markdown report to create (overwritten if present)
    #[arg(short, long, default_value = "error_summary.md")]
    pub output: PathBuf,

    /// Directory listed paths are resolved against
    #[arg(short, long)]
    pub base_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Match lines with a regular expression instead of a marker
    #[arg(long, conflicts_with = "marker")]
    pub pattern: Option<String>,

    /// Match lines containing this text (default "error:")
    #[arg(long)]
    pub marker: Option<String>,

    /// Do not ignore letter case when matching
    #[arg(long)]
    pub case_sensitive: bool,

    /// Source extension to scan, repeatable (default "go")
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Apply flag overrides on top of a loaded config
    pub fn apply_to(&self, config: &mut ScanConfig) {
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }

        if let Some(pattern) = &self.pattern {
            config.rule = MatchRule::Regex {
                pattern: pattern.clone(),
                case_sensitive: self.case_sensitive,
            };
        } else if let Some(marker) = &self.marker {
            config.rule = MatchRule::Marker {
                marker: marker.clone(),
                case_sensitive: self.case_sensitive,
            };
        } else if self.case_sensitive {
            config.rule.set_case_sensitive(true);
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
