//! Bounded iterator over the terms of an arithmetic sequence.

use crate::params::SequenceParameters;

/// Iterator over the first `len` terms of a sequence.
///
/// Yields `(position, value)` pairs with 1-indexed positions. Each value is
/// computed directly as `a₁ + i × d` rather than by repeated addition, so no
/// rounding error accumulates along the sequence.
///
/// # Example
/// ```
/// use arithseq_core::iterator::Terms;
/// use arithseq_core::SequenceParameters;
/// let params = SequenceParameters::new(2.0, 3.0, 4);
/// let values: Vec<f64> = Terms::new(params, 4).map(|(_, v)| v).collect();
/// assert_eq!(values, [2.0, 5.0, 8.0, 11.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Terms {
    params: SequenceParameters,
    index: usize,
    len: usize,
}

impl Terms {
    #[must_use]
    pub fn new(params: SequenceParameters, len: usize) -> Self {
        Self {
            params,
            index: 0,
            len,
        }
    }
}

impl Iterator for Terms {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let value = self.params.term(self.index);
        self.index += 1;
        Some((self.index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Terms {}
