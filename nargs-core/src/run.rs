//! Whole-run orchestration: parse, extract, analyze, report.
//!
//! The run contract is all-or-nothing: the first file that cannot be read
//! or parsed fails the entire invocation and every finding gathered so far
//! is discarded. Files are independent, so they are analyzed in parallel
//! with rayon; results land in order-preserving per-file slots and the
//! error scan walks them in input order, which keeps both the output
//! ordering and the "first failing file" contract of the sequential
//! definition.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::NargsResult;
use crate::extract::{extract_units, is_test_file};
use crate::flags::Flags;
use crate::parse::parse_file;
use crate::report::{build_report, Finding, Report};
use crate::usage::find_unused;

/// Findings plus the aggregate exit signal for one successful run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// All findings in run order.
    pub findings: Vec<Finding>,
    /// Formatted diagnostic lines, one per finding.
    pub lines: Vec<String>,
    /// True only when `set_exit_status` is on and findings exist.
    pub exit_status: bool,
}

/// Analyze the given files and build the aggregate report.
///
/// `paths` must name files; directory expansion belongs to the caller
/// (see [`crate::scan::gather_go_files`]). Output order follows `paths`.
pub fn run(paths: &[PathBuf], flags: &Flags) -> NargsResult<Analysis> {
    let per_file: Vec<NargsResult<Vec<Finding>>> = paths
        .par_iter()
        .map(|path| analyze_file(path, flags))
        .collect();

    let mut findings = Vec::new();
    for result in per_file {
        findings.extend(result?);
    }

    info!(
        files = paths.len(),
        findings = findings.len(),
        "analysis complete"
    );

    let Report { lines, exit_status } = build_report(&findings, flags);
    Ok(Analysis {
        findings,
        lines,
        exit_status,
    })
}

/// Parse one file and collect its findings, in unit order.
fn analyze_file(path: &Path, flags: &Flags) -> NargsResult<Vec<Finding>> {
    let parsed = parse_file(path)?;
    let units = extract_units(&parsed, flags, is_test_file(path));

    let mut findings = Vec::new();
    for unit in &units {
        for parameter in find_unused(unit, &parsed.source) {
            findings.push(Finding {
                path: path.display().to_string(),
                line: unit.line,
                unit: unit.name.clone(),
                parameter,
            });
        }
    }

    debug!(
        path = %path.display(),
        units = units.len(),
        findings = findings.len(),
        "file analyzed"
    );
    Ok(findings)
}
