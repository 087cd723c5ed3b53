//! A generated arithmetic sequence.

use serde::Serialize;

use crate::params::SequenceParameters;

/// Terms of an arithmetic sequence together with the parameters that
/// produced them.
///
/// Only the engine constructs a `Sequence`, so it always holds at least one
/// term and `terms.len() == parameters.term_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    parameters: SequenceParameters,
    terms: Vec<f64>,
}

impl Sequence {
    pub(crate) fn new(parameters: SequenceParameters, terms: Vec<f64>) -> Self {
        debug_assert!(!terms.is_empty());
        Self { parameters, terms }
    }

    #[must_use]
    pub fn parameters(&self) -> &SequenceParameters {
        &self.parameters
    }

    #[must_use]
    pub fn terms(&self) -> &[f64] {
        &self.terms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false` for engine-built sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> f64 {
        self.terms[0]
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.terms[self.terms.len() - 1]
    }

    /// `(position, value)` pairs, 1-indexed.
    pub fn positions(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.terms.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }
}
