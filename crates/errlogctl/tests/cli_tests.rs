//! CLI parsing and end-to-end command tests.

use clap::Parser;
use errlog_common::matcher::MatchRule;
use errlog_common::ScanError;
use errlogctl::cli::Cli;
use errlogctl::commands;
use errlogctl::errors::{
    exit_code, exit_code_for, EXIT_CONFIG_ERROR, EXIT_GENERAL_ERROR, EXIT_LIST_UNREADABLE,
    EXIT_OUTPUT_UNWRITABLE, EXIT_SUCCESS,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["errlogctl"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_defaults() {
    let cli = parse(&[]);
    assert_eq!(cli.list, PathBuf::from("file_list.txt"));
    assert_eq!(cli.output, PathBuf::from("error_summary.md"));
    assert!(cli.base_dir.is_none());
    assert!(!cli.json);
    assert_eq!(cli.log_level(), "info");

    let config = commands::resolve_config(&cli).unwrap();
    assert_eq!(config.rule, MatchRule::default());
    assert_eq!(config.extensions, vec!["go"]);
}

#[test]
fn test_pattern_and_marker_conflict() {
    let result = Cli::try_parse_from(["errlogctl", "--pattern", "x", "--marker", "y"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["errlogctl", "-v", "-q"]).is_err());
    assert_eq!(parse(&["-q"]).log_level(), "warn");
    assert_eq!(parse(&["--verbose"]).log_level(), "debug");
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("errlog.toml");
    fs::write(
        &config_path,
        "base_dir = \"/from/file\"\ntitle = \"From file\"\nextensions = [\"rs\"]\n",
    )
    .unwrap();

    let cli = parse(&[
        "-c",
        config_path.to_str().unwrap(),
        "--title",
        "From flag",
        "--ext",
        "go",
        "--ext",
        "py",
        "--marker",
        "FATAL",
        "--case-sensitive",
    ]);
    let config = commands::resolve_config(&cli).unwrap();

    assert_eq!(config.base_dir, PathBuf::from("/from/file"));
    assert_eq!(config.title, "From flag");
    assert_eq!(config.extensions, vec!["go", "py"]);
    assert_eq!(
        config.rule,
        MatchRule::Marker {
            marker: "FATAL".to_string(),
            case_sensitive: true
        }
    );
}

#[test]
fn test_case_sensitive_alone_keeps_rule_kind() {
    let config = commands::resolve_config(&parse(&["--case-sensitive"])).unwrap();
    assert_eq!(
        config.rule,
        MatchRule::Marker {
            marker: "error:".to_string(),
            case_sensitive: true
        }
    );
}

#[test]
fn test_case_sensitive_applies_inside_any_of() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("errlog.toml");
    fs::write(
        &config_path,
        "[rule]\nkind = \"any_of\"\n\n[[rule.rules]]\nkind = \"marker\"\n\n[[rule.rules]]\nkind = \"regex\"\npattern = \"panic\"\n",
    )
    .unwrap();

    let cli = parse(&["-c", config_path.to_str().unwrap(), "--case-sensitive"]);
    let config = commands::resolve_config(&cli).unwrap();

    assert_eq!(
        config.rule,
        MatchRule::AnyOf {
            rules: vec![
                MatchRule::Marker {
                    marker: "error:".to_string(),
                    case_sensitive: true
                },
                MatchRule::Regex {
                    pattern: "panic".to_string(),
                    case_sensitive: true
                },
            ]
        }
    );
}

#[test]
fn test_scan_command_end_to_end() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.go"), "line1\nERROR: bad thing\nline3").unwrap();
    fs::write(dir.path().join("b.txt"), "ERROR: skipped").unwrap();
    let list = dir.path().join("files.txt");
    fs::write(&list, "./a.go\nb.txt\nmissing.go\n").unwrap();
    let out = dir.path().join("errors.md");

    let cli = parse(&[
        "-l",
        list.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-b",
        dir.path().to_str().unwrap(),
        "--json",
    ]);
    let summary = commands::scan(&cli).unwrap();
    assert_eq!(summary.total_matches, 1);

    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with("# 相关错误信息汇总\n\n| 报错日志 | 文件路径 | 行号 |\n"));
    assert!(doc.ends_with("| ERROR: bad thing | a.go | 2 |\n"));

    let json: serde_json::Value =
        serde_json::from_str(&commands::format_summary(&cli, &summary).unwrap()).unwrap();
    assert_eq!(json["total_matches"], 1);
    assert_eq!(json["skipped_missing"], 1);
    assert_eq!(json["skipped_extension"], 1);
}

#[test]
fn test_text_summary() {
    let cli = parse(&["-o", "out.md"]);
    let summary = errlog_common::ScanSummary {
        total_matches: 4,
        files_scanned: 2,
        skipped_missing: 1,
        ..Default::default()
    };
    assert_eq!(
        commands::format_summary(&cli, &summary).unwrap(),
        "Found 4 errors in 2 files (1 skipped), report written to out.md"
    );
}

#[test]
fn test_exit_codes_by_failure() {
    let dir = TempDir::new().unwrap();
    let missing_list = parse(&["-l", dir.path().join("none.txt").to_str().unwrap()]);
    let err = commands::run(&missing_list).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_LIST_UNREADABLE);

    let bad_pattern = parse(&["--pattern", "(", "-l", "whatever.txt"]);
    let err = commands::run(&bad_pattern).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);

    let err = ScanError::OutputUnwritable {
        path: PathBuf::from("out.md"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(exit_code(&err), EXIT_OUTPUT_UNWRITABLE);

    assert_eq!(exit_code_for(&anyhow::anyhow!("other")), EXIT_GENERAL_ERROR);
    assert_ne!(EXIT_SUCCESS, EXIT_GENERAL_ERROR);
}
