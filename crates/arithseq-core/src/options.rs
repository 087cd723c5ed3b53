//! Engine options.

use crate::constants::MAX_TERM_COUNT;

/// Options for sequence generation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Upper bound on the number of generated terms.
    pub max_terms: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_terms: MAX_TERM_COUNT,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_terms == 0 {
            self.max_terms = MAX_TERM_COUNT;
        }
        self
    }
}
