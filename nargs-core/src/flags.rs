//! Policy configuration for a single run.

/// Controls which declared names are eligible to be flagged and whether
/// findings drive a nonzero exit status.
///
/// One immutable value per run, passed explicitly into extraction and
/// reporting instead of being read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// Treat named return values as checkable. A named return that is only
    /// ever assigned to (a pure write) still counts as unused.
    pub include_named_returns: bool,
    /// Treat method receivers as checkable.
    pub include_receivers: bool,
    /// Analyze `_test.go` files. When false they contribute no units.
    pub include_tests: bool,
    /// Signal a nonzero exit status when at least one finding exists.
    pub set_exit_status: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            include_named_returns: false,
            include_receivers: false,
            include_tests: true,
            set_exit_status: true,
        }
    }
}
