//! Result presenters for text and JSON output.

use std::io::{self, Write};

use serde::Serialize;

use arithseq_core::{
    format_term, Sequence, SequenceParameters, SequenceSummary, INLINE_DISPLAY_LIMIT,
    TABLE_COLUMNS,
};

use crate::output::{format_formula, format_inline, format_number, format_table};
use crate::ui;

/// Trait for presenting a computed sequence to the user.
pub trait ResultPresenter {
    /// Present a sequence and its summary.
    fn present_result(&self, sequence: &Sequence, summary: &SequenceSummary) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Human-readable text presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, sequence: &Sequence, summary: &SequenceSummary) -> io::Result<()> {
        if self.quiet {
            return writeln!(io::stdout().lock(), "{}", format_inline(sequence.terms()));
        }

        ui::print_header("Arithmetic Sequence");
        let mut out = io::stdout().lock();
        for line in render_report(sequence, summary) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// JSON presenter: one object with parameters, terms, and summary.
pub struct JsonResultPresenter;

impl ResultPresenter for JsonResultPresenter {
    fn present_result(&self, sequence: &Sequence, summary: &SequenceSummary) -> io::Result<()> {
        let json = render_json(sequence, summary)?;
        writeln!(io::stdout().lock(), "{json}")
    }

    fn present_error(&self, error: &str) {
        let body = serde_json::json!({ "error": error });
        eprintln!("{body}");
    }
}

#[derive(Serialize)]
struct SequenceReport<'a> {
    parameters: &'a SequenceParameters,
    terms: &'a [f64],
    summary: &'a SequenceSummary,
}

/// Pretty-printed JSON report.
pub fn render_json(sequence: &Sequence, summary: &SequenceSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SequenceReport {
        parameters: sequence.parameters(),
        terms: sequence.terms(),
        summary,
    })
}

/// Text report: formula, metrics, terms, and properties.
#[must_use]
pub fn render_report(sequence: &Sequence, summary: &SequenceSummary) -> Vec<String> {
    let params = sequence.parameters();
    let mut lines = vec![
        format!("Formula: {}", format_formula(params)),
        format!("First term: {}", format_term(sequence.first())),
        format!("Last term: {}", format_term(sequence.last())),
        format!("Common difference: {}", format_term(params.common_difference)),
        format!("Total terms: {}", format_number(sequence.len())),
        String::new(),
        "Sequence:".to_string(),
    ];

    if sequence.len() <= INLINE_DISPLAY_LIMIT {
        lines.push(format_inline(sequence.terms()));
    } else {
        lines.extend(format_table(sequence.positions(), TABLE_COLUMNS));
    }

    lines.extend([
        String::new(),
        "Properties:".to_string(),
        format!("  Sum of all terms: {:.2}", summary.sum),
        format!("  Average value: {:.2}", summary.average),
        format!("  Range: {:.2} to {:.2}", summary.min, summary.max),
        format!("  Trend: {}", summary.trend),
    ]);
    lines
}
