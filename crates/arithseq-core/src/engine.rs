//! The sequence engine and its error type.
//!
//! `SequenceEngine` owns the generation limits; the crate-level
//! [`generate`](crate::generate) and [`summarize`](crate::summarize)
//! functions use an engine with default options.

use tracing::{debug, warn};

use crate::constants::LARGE_SEQUENCE_WARNING;
use crate::iterator::Terms;
use crate::options::Options;
use crate::params::SequenceParameters;
use crate::sequence::Sequence;
use crate::summary::{summarize_terms, SequenceSummary};

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// Inputs outside the engine's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Generates arithmetic sequences and their summaries.
#[derive(Debug, Clone, Default)]
pub struct SequenceEngine {
    opts: Options,
}

impl SequenceEngine {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    #[must_use]
    pub fn max_terms(&self) -> usize {
        self.opts.max_terms
    }

    /// Generate the terms described by `params`.
    pub fn generate(&self, params: SequenceParameters) -> Result<Sequence, SequenceError> {
        let count = params.validate(self.opts.max_terms)?;
        if count > LARGE_SEQUENCE_WARNING {
            warn!(
                count,
                "generating more than {} terms, display may be slow",
                LARGE_SEQUENCE_WARNING
            );
        }

        // The terms are linear in the index, so only the endpoints can overflow.
        let last = params.term(count - 1);
        if !last.is_finite() {
            return Err(SequenceError::InvalidArgument(format!(
                "term {count} overflows the floating-point range"
            )));
        }

        let terms: Vec<f64> = Terms::new(params, count).map(|(_, v)| v).collect();
        debug!(
            first = params.first_term,
            difference = params.common_difference,
            count,
            "generated arithmetic sequence"
        );
        Ok(Sequence::new(params, terms))
    }

    /// Summarize a generated sequence, taking the trend from its difference.
    pub fn summarize(&self, sequence: &Sequence) -> Result<SequenceSummary, SequenceError> {
        summarize_terms(sequence.terms(), Some(sequence.parameters().trend()))
    }
}
