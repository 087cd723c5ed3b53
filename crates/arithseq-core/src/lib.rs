//! # arithseq-core
//!
//! Core library for the ArithSeq arithmetic sequence generator.
//! Generates `aₙ = a₁ + (n-1)·d`, derives summary statistics, and formats
//! terms for display and export.

pub mod constants;
pub mod engine;
pub mod format;
pub mod iterator;
pub mod options;
pub mod params;
pub mod presets;
pub mod sequence;
pub mod summary;

// Re-exports
pub use constants::{
    exit_codes, INLINE_DISPLAY_LIMIT, LARGE_SEQUENCE_WARNING, MAX_TERM_COUNT, TABLE_COLUMNS,
};
pub use engine::{SequenceEngine, SequenceError};
pub use format::{export_text, format_raw, format_term};
pub use options::Options;
pub use params::SequenceParameters;
pub use presets::{find_preset, Preset, PRESETS};
pub use sequence::Sequence;
pub use summary::{summarize_terms, SequenceSummary, Trend};

/// Generate an arithmetic sequence with the default term limit.
///
/// This is a convenience function for simple use cases. To change the
/// limit, build a [`SequenceEngine`] with custom [`Options`].
///
/// # Example
/// ```
/// let seq = arithseq_core::generate(2.0, 2.0, 5).unwrap();
/// assert_eq!(seq.terms(), [2.0, 4.0, 6.0, 8.0, 10.0]);
/// assert!(arithseq_core::generate(0.0, 0.0, 0).is_err());
/// ```
pub fn generate(
    first_term: f64,
    common_difference: f64,
    term_count: i64,
) -> Result<Sequence, SequenceError> {
    SequenceEngine::default().generate(SequenceParameters::new(
        first_term,
        common_difference,
        term_count,
    ))
}

/// Summarize a generated sequence.
///
/// # Example
/// ```
/// let seq = arithseq_core::generate(1.0, 1.0, 10).unwrap();
/// let summary = arithseq_core::summarize(&seq).unwrap();
/// assert_eq!(summary.sum, 55.0);
/// assert_eq!(summary.average, 5.5);
/// ```
pub fn summarize(sequence: &Sequence) -> Result<SequenceSummary, SequenceError> {
    SequenceEngine::default().summarize(sequence)
}
