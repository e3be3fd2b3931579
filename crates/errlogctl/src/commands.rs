//! Command execution

use crate::cli::Cli;
use anyhow::Result;
use errlog_common::config::ScanConfig;
use errlog_common::source::LocalFs;
use errlog_common::{Pipeline, ScanSummary};

/// Config file (if any) with CLI overrides applied
pub fn resolve_config(cli: &Cli) -> errlog_common::Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load_from_path(path)?,
        None => ScanConfig::default(),
    };
    cli.apply_to(&mut config);
    Ok(config)
}

/// Scan the listed files on disk and write the report
pub fn scan(cli: &Cli) -> errlog_common::Result<ScanSummary> {
    let config = resolve_config(cli)?;
    Pipeline::from_config(&LocalFs, &config)?.run(&cli.list, &cli.output)
}

pub fn format_summary(cli: &Cli, summary: &ScanSummary) -> Result<String> {
    if cli.json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }
    Ok(format!(
        "Found {} errors in {} files ({} skipped), report written to {}",
        summary.total_matches,
        summary.files_scanned,
        summary.files_skipped(),
        cli.output.display()
    ))
}

pub fn run(cli: &Cli) -> Result<()> {
    let summary = scan(cli)?;
    println!("{}", format_summary(cli, &summary)?);
    Ok(())
}
