//! Sequence parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMMON_DIFFERENCE, DEFAULT_FIRST_TERM, DEFAULT_TERM_COUNT};
use crate::engine::SequenceError;
use crate::summary::Trend;

/// The three scalar inputs describing an arithmetic sequence.
///
/// `term_count` is signed so that a front end can pass through whatever the
/// user typed; [`SequenceParameters::validate`] rejects anything below one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceParameters {
    /// First term `a₁`.
    pub first_term: f64,
    /// Constant difference `d` between consecutive terms.
    pub common_difference: f64,
    /// Number of terms to generate.
    pub term_count: i64,
}

impl SequenceParameters {
    #[must_use]
    pub const fn new(first_term: f64, common_difference: f64, term_count: i64) -> Self {
        Self {
            first_term,
            common_difference,
            term_count,
        }
    }

    /// Check the parameters against the engine domain and return the term
    /// count as a length.
    pub fn validate(&self, max_terms: usize) -> Result<usize, SequenceError> {
        if !self.first_term.is_finite() {
            return Err(SequenceError::InvalidArgument(format!(
                "first term must be a finite number, got {}",
                self.first_term
            )));
        }
        if !self.common_difference.is_finite() {
            return Err(SequenceError::InvalidArgument(format!(
                "common difference must be a finite number, got {}",
                self.common_difference
            )));
        }
        if self.term_count < 1 {
            return Err(SequenceError::InvalidArgument(format!(
                "term count must be at least 1, got {}",
                self.term_count
            )));
        }
        match usize::try_from(self.term_count) {
            Ok(count) if count <= max_terms => Ok(count),
            _ => Err(SequenceError::InvalidArgument(format!(
                "term count {} exceeds the maximum of {max_terms}",
                self.term_count
            ))),
        }
    }

    /// Value of the term at zero-based `index`: `a₁ + index × d`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn term(&self, index: usize) -> f64 {
        self.first_term + index as f64 * self.common_difference
    }

    /// Direction of the sequence, taken from the sign of the difference.
    #[must_use]
    pub fn trend(&self) -> Trend {
        Trend::from_difference(self.common_difference)
    }
}

impl Default for SequenceParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_FIRST_TERM,
            DEFAULT_COMMON_DIFFERENCE,
            DEFAULT_TERM_COUNT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_TERM_COUNT;

    #[test]
    fn default_parameters() {
        let params = SequenceParameters::default();
        assert_eq!(params.first_term, 1.0);
        assert_eq!(params.common_difference, 1.0);
        assert_eq!(params.term_count, 10);
    }

    #[test]
    fn validate_accepts_bounds() {
        assert_eq!(
            SequenceParameters::new(0.0, 0.0, 1)
                .validate(MAX_TERM_COUNT)
                .unwrap(),
            1
        );
        assert_eq!(
            SequenceParameters::new(0.0, 0.0, 1000)
                .validate(MAX_TERM_COUNT)
                .unwrap(),
            1000
        );
    }

    #[test]
    fn validate_rejects_zero_and_negative_counts() {
        for count in [0, -1, i64::MIN] {
            let err = SequenceParameters::new(1.0, 1.0, count)
                .validate(MAX_TERM_COUNT)
                .unwrap_err();
            assert!(err.to_string().contains("at least 1"), "{err}");
        }
    }

    #[test]
    fn validate_rejects_count_above_limit() {
        let err = SequenceParameters::new(1.0, 1.0, 1001)
            .validate(MAX_TERM_COUNT)
            .unwrap_err();
        assert!(err.to_string().contains("maximum of 1000"));
        assert!(SequenceParameters::new(1.0, 1.0, 11).validate(10).is_err());
    }

    #[test]
    fn validate_rejects_non_finite_inputs() {
        let bad = [
            SequenceParameters::new(f64::NAN, 1.0, 5),
            SequenceParameters::new(f64::INFINITY, 1.0, 5),
            SequenceParameters::new(1.0, f64::NEG_INFINITY, 5),
            SequenceParameters::new(1.0, f64::NAN, 5),
        ];
        for params in bad {
            assert!(params.validate(MAX_TERM_COUNT).is_err(), "{params:?}");
        }
    }

    #[test]
    fn term_by_index() {
        let params = SequenceParameters::new(100.0, -7.0, 15);
        assert_eq!(params.term(0), 100.0);
        assert_eq!(params.term(14), 2.0);
    }

    #[test]
    fn trend_from_difference_sign() {
        assert_eq!(SequenceParameters::new(0.0, 0.5, 3).trend(), Trend::Increasing);
        assert_eq!(SequenceParameters::new(0.0, -0.5, 3).trend(), Trend::Decreasing);
        assert_eq!(SequenceParameters::new(0.0, 0.0, 3).trend(), Trend::Constant);
    }
}
