//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use nargs_core::prelude::*;
//! ```

// Core analysis entry point
pub use crate::run::{run, Analysis};

// Policy configuration
pub use crate::flags::Flags;

// Error types
pub use crate::error::{NargsError, NargsResult};

// Findings and reporting
pub use crate::report::{build_report, Finding, Report};

// File discovery
pub use crate::scan::gather_go_files;
