//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use arithseq_core::constants::{
    DEFAULT_COMMON_DIFFERENCE, DEFAULT_FIRST_TERM, DEFAULT_TERM_COUNT, MAX_TERM_COUNT,
};
use arithseq_core::{find_preset, Options, SequenceError, SequenceParameters};

const LONG_ABOUT: &str = "\
Generate an arithmetic sequence and its summary statistics.

What is an arithmetic sequence?
  A sequence of numbers where the difference between consecutive terms is
  constant. This difference is called the common difference.

  Formula: aₙ = a₁ + (n-1) × d

    aₙ  nth term
    a₁  first term
    d   common difference
    n   term position

  Example: 2, 5, 8, 11, 14... (first term = 2, common difference = 3)";

/// ArithSeq — arithmetic sequence generator.
#[derive(Parser, Debug)]
#[command(name = "arithseq", version, about, long_about = LONG_ABOUT)]
pub struct AppConfig {
    /// First term of the sequence (a₁).
    #[arg(
        short = 'a',
        long,
        default_value_t = DEFAULT_FIRST_TERM,
        allow_negative_numbers = true,
        env = "ARITHSEQ_FIRST_TERM"
    )]
    pub first_term: f64,

    /// Common difference between consecutive terms (d).
    #[arg(
        short = 'd',
        long = "difference",
        default_value_t = DEFAULT_COMMON_DIFFERENCE,
        allow_negative_numbers = true,
        env = "ARITHSEQ_DIFFERENCE"
    )]
    pub common_difference: f64,

    /// Number of terms to generate (n).
    #[arg(
        short = 'n',
        long = "terms",
        default_value_t = DEFAULT_TERM_COUNT,
        allow_negative_numbers = true,
        env = "ARITHSEQ_TERMS"
    )]
    pub term_count: i64,

    /// Use a named preset instead of the numeric parameters.
    #[arg(short, long, env = "ARITHSEQ_PRESET")]
    pub preset: Option<String>,

    /// Maximum number of terms allowed (0 = default).
    #[arg(long, default_value_t = MAX_TERM_COUNT, env = "ARITHSEQ_MAX_TERMS")]
    pub max_terms: usize,

    /// Quiet mode (only print the terms).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the result as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Write the terms as text to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the terms as text to the default file name.
    #[arg(long)]
    pub export: bool,

    /// List the built-in presets.
    #[arg(long)]
    pub list_presets: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the sequence parameters. A preset replaces all three values.
    pub fn parameters(&self) -> Result<SequenceParameters, SequenceError> {
        match &self.preset {
            Some(name) => {
                let preset = find_preset(name)?;
                tracing::info!(preset = preset.name, "using preset");
                Ok(preset.parameters)
            }
            None => Ok(SequenceParameters::new(
                self.first_term,
                self.common_difference,
                self.term_count,
            )),
        }
    }

    #[must_use]
    pub fn engine_options(&self) -> Options {
        Options {
            max_terms: self.max_terms,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("arithseq").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(
            config.parameters().unwrap(),
            SequenceParameters::new(1.0, 1.0, 10)
        );
        assert_eq!(config.engine_options().max_terms, 1000);
    }

    #[test]
    fn negative_values_parse() {
        let config = parse(&["-a", "100", "-d", "-7", "-n", "-3"]);
        assert_eq!(config.common_difference, -7.0);
        assert_eq!(config.term_count, -3);
    }

    #[test]
    fn preset_replaces_parameters() {
        let config = parse(&["-a", "9", "--preset", "even-numbers"]);
        assert_eq!(
            config.parameters().unwrap(),
            SequenceParameters::new(2.0, 2.0, 10)
        );
    }

    #[test]
    fn unknown_preset_is_error() {
        let config = parse(&["--preset", "primes"]);
        assert!(config.parameters().is_err());
    }

    #[test]
    fn zero_max_terms_normalizes() {
        let config = parse(&["--max-terms", "0"]);
        assert_eq!(config.engine_options().max_terms, 1000);
    }

    #[test]
    fn json_conflicts_with_quiet() {
        let result = AppConfig::try_parse_from(["arithseq", "--json", "-q"]);
        assert!(result.is_err());
    }
}
