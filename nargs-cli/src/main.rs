//! nargs CLI - unused function-parameter detector for Go source.
//!
//! Accepts files and directories; directories are expanded to every
//! `.go` file beneath them (skipping `vendor/`, `testdata/`, `.git/`).
//!
//! Exit codes:
//! - 0: ran clean, or findings exist but `--no-exit-status` was given
//! - 1: findings exist and the exit signal is enabled
//! - 2: a file could not be read or parsed

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use nargs_core::{
    gather_go_files, init_structured_logging, print_json, print_plain, run, Flags,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find unused function parameters in Go source")]
pub struct Cli {
    /// Go files or directories to analyze
    #[arg(default_value = ".")]
    paths: Vec<String>,

    /// Also check named return values
    #[arg(long)]
    named_returns: bool,

    /// Also check method receivers
    #[arg(long)]
    receivers: bool,

    /// Skip _test.go files
    #[arg(long)]
    skip_tests: bool,

    /// Report findings without signaling a nonzero exit status
    #[arg(long)]
    no_exit_status: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn flags(&self) -> Flags {
        Flags {
            include_named_returns: self.named_returns,
            include_receivers: self.receivers,
            include_tests: !self.skip_tests,
            set_exit_status: !self.no_exit_status,
        }
    }
}

/// Expand directory arguments into their .go files; keep file arguments
/// verbatim so a nonexistent path surfaces as an I/O error from the run.
fn resolve_paths(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        let path = Path::new(arg);
        if path.is_dir() {
            let found = gather_go_files(path)
                .with_context(|| format!("failed to scan directory {arg}"))?;
            files.extend(found);
        } else {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn main() {
    init_structured_logging();

    let cli = Cli::parse();
    let flags = cli.flags();

    let files = match resolve_paths(&cli.paths) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("nargs: {e:#}");
            process::exit(2);
        }
    };

    match run(&files, &flags) {
        Ok(analysis) => {
            if cli.json {
                print_json(&analysis.findings, analysis.exit_status);
            } else {
                print_plain(&analysis.lines);
            }
            if analysis.exit_status {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("nargs: {e}");
            process::exit(2);
        }
    }
}
