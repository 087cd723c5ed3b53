//! Constants for sequence bounds, defaults, and display thresholds.

/// Maximum number of terms a single request may generate.
pub const MAX_TERM_COUNT: usize = 1000;

/// Default first term.
pub const DEFAULT_FIRST_TERM: f64 = 1.0;

/// Default common difference.
pub const DEFAULT_COMMON_DIFFERENCE: f64 = 1.0;

/// Default number of terms.
pub const DEFAULT_TERM_COUNT: i64 = 10;

/// Sequences up to this length are displayed inline; longer ones as a table.
pub const INLINE_DISPLAY_LIMIT: usize = 20;

/// Number of cells per table row.
pub const TABLE_COLUMNS: usize = 10;

/// Requests above this many terms log a slow-display warning.
pub const LARGE_SEQUENCE_WARNING: usize = 100;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error (I/O, serialization).
    pub const ERROR_GENERIC: i32 = 1;
    /// Parameters rejected by the sequence engine.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
}
