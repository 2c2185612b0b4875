//! nargs-core: unused function-parameter detection for Go source.
//!
//! This library parses Go files and reports every function, method, or
//! closure parameter that is declared but never read inside its own body.
//!
//! # Features
//!
//! - **Functions, methods, and closures**: every callable unit is checked,
//!   including function literals nested arbitrarily deep
//! - **Policy flags**: named returns and receivers are opt-in inclusions;
//!   `_test.go` files can be skipped; the exit signal is configurable
//! - **Shadow-correct usage analysis**: an inner closure redeclaring an
//!   outer parameter's name never marks the outer one as used
//! - **Deterministic output**: findings are ordered by input file, then
//!   declaration line, then declaration order within the unit
//! - **All-or-nothing runs**: an unreadable or unparseable file fails the
//!   whole invocation with a typed error and zero findings
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use nargs_core::prelude::*;
//!
//! let analysis = run(&files, &Flags::default())?;
//! for line in &analysis.lines {
//!     print!("{line}");
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`parse`]: Go parsing via tree-sitter, with fail-fast syntax errors
//! - [`extract`]: callable-unit and checkable-name extraction
//! - [`usage`]: identifier-read analysis with explicit scope frames
//! - [`report`]: finding formatting and the aggregate exit signal
//! - [`run`]: whole-run orchestration
//! - [`scan`]: .go file discovery for directory arguments
//! - [`flags`]: policy configuration
//! - [`error`]: typed error handling

pub mod error;
pub mod extract;
pub mod flags;
pub mod logging;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod run;
pub mod scan;
pub mod usage;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, NargsError, NargsResult};

// Policy configuration
pub use flags::Flags;

// Parsing
pub use parse::{line_of, parse_file, parse_source, ParsedFile};

// Unit extraction
pub use extract::{
    extract_units, is_test_file, CallableUnit, CheckableName, Role, ANONYMOUS_UNIT,
};

// Usage analysis
pub use usage::find_unused;

// Reporting
pub use report::{build_report, print_json, print_plain, Finding, Report};

// Orchestration
pub use run::{run, Analysis};

// File discovery
pub use scan::gather_go_files;

// Logging
pub use logging::init_structured_logging;
