//! Finding aggregation and output formatting - plaintext and JSON.

use serde::Serialize;
use serde_json::json;

use crate::flags::Flags;

/// One unused checkable name, tied to its declaring unit and source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Input path of the file, as given by the caller.
    pub path: String,
    /// 1-based line of the declaring unit's signature.
    pub line: usize,
    /// Display name of the declaring unit.
    pub unit: String,
    /// The unused parameter, receiver, or named return.
    pub parameter: String,
}

impl Finding {
    /// The diagnostic line for this finding, trailing newline included.
    pub fn format(&self) -> String {
        format!(
            "{}:{} {} contains unused parameter {}\n",
            self.path, self.line, self.unit, self.parameter
        )
    }
}

/// The aggregate outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Formatted diagnostic lines, one per finding, in input-file order
    /// then declaration-line order then declared-name order. Empty (not a
    /// sentinel) when the run was clean.
    pub lines: Vec<String>,
    /// True only when `set_exit_status` is on and findings exist.
    pub exit_status: bool,
}

/// Build the final report from findings already in run order.
pub fn build_report(findings: &[Finding], flags: &Flags) -> Report {
    Report {
        lines: findings.iter().map(Finding::format).collect(),
        exit_status: flags.set_exit_status && !findings.is_empty(),
    }
}

/// Prints diagnostic lines as-is (each already carries its newline).
pub fn print_plain(lines: &[String]) {
    for line in lines {
        print!("{line}");
    }
}

/// Prints findings in JSON format.
///
/// Falls back to a plain dump if serialization fails, which cannot happen
/// for these field types but keeps the output channel total.
pub fn print_json(findings: &[Finding], exit_status: bool) {
    let value = json!({ "findings": findings, "exit_status": exit_status });
    match serde_json::to_string_pretty(&value) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {e}");
            println!("{findings:?}");
        }
    }
}
