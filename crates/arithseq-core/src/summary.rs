//! Summary statistics over a generated sequence.
//!
//! The sum uses Kahan compensated summation so that long sequences of
//! fractional terms keep their low-order bits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::SequenceError;

/// Direction of an arithmetic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Positive common difference.
    Increasing,
    /// Negative common difference.
    Decreasing,
    /// Zero common difference.
    Constant,
}

impl Trend {
    /// Classify a common difference by its sign.
    #[must_use]
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.0 {
            Self::Increasing
        } else if difference < 0.0 {
            Self::Decreasing
        } else {
            Self::Constant
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Constant => "constant",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived statistics of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceSummary {
    /// Sum of all terms.
    pub sum: f64,
    /// `sum / len`.
    pub average: f64,
    /// Smallest term.
    pub min: f64,
    /// Largest term.
    pub max: f64,
    /// Direction of the sequence.
    pub trend: Trend,
}

/// Summarize a bare slice of terms.
///
/// A known `trend` (from the generating difference) is used as is; otherwise
/// the trend comes from the sign of `terms[1] - terms[0]`, and a single term
/// is constant.
#[allow(clippy::cast_precision_loss)]
pub fn summarize_terms(
    terms: &[f64],
    trend: Option<Trend>,
) -> Result<SequenceSummary, SequenceError> {
    if terms.is_empty() {
        return Err(SequenceError::InvalidArgument(
            "cannot summarize an empty sequence".into(),
        ));
    }
    if let Some(bad) = terms.iter().find(|t| !t.is_finite()) {
        return Err(SequenceError::InvalidArgument(format!(
            "sequence contains a non-finite term: {bad}"
        )));
    }

    let sum = kahan_sum(terms);
    if !sum.is_finite() {
        return Err(SequenceError::InvalidArgument(
            "sum overflows the floating-point range".into(),
        ));
    }
    let (min, max) = terms
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        });
    let trend = trend.unwrap_or_else(|| match terms {
        [first, second, ..] => Trend::from_difference(second - first),
        _ => Trend::Constant,
    });

    Ok(SequenceSummary {
        sum,
        average: sum / terms.len() as f64,
        min,
        max,
        trend,
    })
}

fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &x in data {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_display() {
        assert_eq!(Trend::Increasing.to_string(), "increasing");
        assert_eq!(Trend::Decreasing.to_string(), "decreasing");
        assert_eq!(Trend::Constant.to_string(), "constant");
    }

    #[test]
    fn trend_from_negative_zero_is_constant() {
        assert_eq!(Trend::from_difference(-0.0), Trend::Constant);
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Decreasing).unwrap();
        assert_eq!(json, "\"decreasing\"");
    }

    #[test]
    fn summarize_one_to_ten() {
        let terms: Vec<f64> = (1..=10).map(f64::from).collect();
        let summary = summarize_terms(&terms, Some(Trend::Increasing)).unwrap();
        assert_eq!(summary.sum, 55.0);
        assert_eq!(summary.average, 5.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.trend, Trend::Increasing);
    }

    #[test]
    fn summarize_empty_fails() {
        let err = summarize_terms(&[], None).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidArgument(_)));
    }

    #[test]
    fn summarize_rejects_nan() {
        assert!(summarize_terms(&[1.0, f64::NAN], None).is_err());
    }

    #[test]
    fn trend_from_first_two_terms_without_difference() {
        let summary = summarize_terms(&[10.0, 7.0, 4.0], None).unwrap();
        assert_eq!(summary.trend, Trend::Decreasing);
        assert_eq!(summary.min, 4.0);
        assert_eq!(summary.max, 10.0);
    }

    #[test]
    fn single_term_is_constant() {
        let summary = summarize_terms(&[42.0], None).unwrap();
        assert_eq!(summary.trend, Trend::Constant);
        assert_eq!(summary.average, 42.0);
    }

    #[test]
    fn supplied_trend_wins_over_terms() {
        // A difference too small to register after rounding.
        let trend = Trend::from_difference(1.0e-10);
        let summary = summarize_terms(&[1.0e16, 1.0e16], Some(trend)).unwrap();
        assert_eq!(summary.trend, Trend::Increasing);
    }

    #[test]
    fn summarize_rejects_overflowing_sum() {
        let err = summarize_terms(&[1e308, 1e308, 1e308], Some(Trend::Constant)).unwrap_err();
        assert!(err.to_string().contains("sum overflows"), "{err}");
    }

    #[test]
    fn kahan_sum_recovers_low_bits() {
        let data = vec![0.1; 1000];
        assert!((kahan_sum(&data) - 100.0).abs() < 1e-12);
    }
}
