//! Command-line interface for tblscan
//! This binary validates whitespace-delimited table files: it scans the named
//! file in line order and fails on the first row whose fields contain the
//! bad-data sentinel.
//!
//! Usage:
//!   tblscan `<datafile>` [--config `<file>`] [--format `<format>`] [--sentinel `<token>`]
//!   tblscan --list-formats

use clap::{Arg, ArgAction, Command};
use std::str::FromStr;
use tbl_config::{ConfigError, Loader, ReportStyle, TblConfig};
use tbl_scan::tbl::loader::TableLoader;
use tbl_scan::tbl::report::{render_json, render_text, ReportFormat, UnknownFormat, FORMATS};
use tbl_scan::tbl::scanner::{ScanOutcome, ScanRules};

fn main() {
    let matches = Command::new("tblscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating whitespace-delimited table files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the table file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format (default: the configured format)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("sentinel")
                .long("sentinel")
                .help("Override the bad-data marker token for this run"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available report formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches.get_one::<String>("format").unwrap();
    let config_path = matches.get_one::<String>("config");
    let sentinel = matches.get_one::<String>("sentinel");
    handle_scan_command(path, config_path, sentinel, format);
}

/// Handle the scan command
fn handle_scan_command(
    path: &str,
    config_path: Option<&String>,
    sentinel: Option<&String>,
    format: &str,
) {
    let config = build_config(config_path, sentinel).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let format = resolve_format(format, &config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable report formats:");
        for info in FORMATS.iter() {
            eprintln!("  {} - {}", info.name, info.description);
        }
        std::process::exit(1);
    });

    let loader = TableLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        std::process::exit(1);
    });

    let rules = ScanRules {
        sentinel: config.scan.sentinel.clone(),
        comment_prefix: config.scan.comment_prefix.clone(),
    };
    let outcome = loader.scan(&rules);

    match format {
        ReportFormat::Text => match &outcome {
            ScanOutcome::Clean(_) => println!("{}", render_text(&outcome)),
            ScanOutcome::BadData(_) => {
                eprintln!("{}", render_text(&outcome));
                std::process::exit(1);
            }
        },
        // JSON goes to stdout on both outcomes; the exit code still signals failure
        ReportFormat::Json => {
            let report = render_json(&outcome).unwrap_or_else(|e| {
                eprintln!("Error formatting report: {}", e);
                std::process::exit(1);
            });
            println!("{}", report);
            if !outcome.is_clean() {
                std::process::exit(1);
            }
        }
    }
}

/// Layer the configuration sources: embedded defaults, an optional
/// `tblscan.toml` in the working directory, the `--config` file, and finally
/// any `--sentinel` override.
fn build_config(
    config_path: Option<&String>,
    sentinel: Option<&String>,
) -> Result<TblConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file("tblscan.toml");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(token) = sentinel {
        loader = loader.set_override("scan.sentinel", token.as_str())?;
    }
    loader.build()
}

/// Resolve the `--format` flag against the configured default.
fn resolve_format(flag: &str, config: &TblConfig) -> Result<ReportFormat, UnknownFormat> {
    if flag == "auto" {
        return Ok(match config.report.format {
            ReportStyle::Text => ReportFormat::Text,
            ReportStyle::Json => ReportFormat::Json,
        });
    }
    ReportFormat::from_str(flag)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available report formats:\n");

    for info in FORMATS.iter() {
        println!("  {}", info.name);
        println!("    {}", info.description);
        println!();
    }
}
