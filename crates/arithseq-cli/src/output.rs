//! CLI output formatting and text export.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use arithseq_core::{export_text, format_raw, format_term, Preset, SequenceParameters};

/// Comma-separated list of display-formatted terms.
#[must_use]
pub fn format_inline(terms: &[f64]) -> String {
    terms
        .iter()
        .map(|&t| format_term(t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lay `(position, value)` pairs out as rows of `columns` cells, each
/// `a(<position>)=<value>`.
///
/// Cells are padded to a common width so the columns line up.
#[must_use]
pub fn format_table(
    positions: impl IntoIterator<Item = (usize, f64)>,
    columns: usize,
) -> Vec<String> {
    let cells: Vec<String> = positions
        .into_iter()
        .map(|(position, t)| format!("a({position})={}", format_term(t)))
        .collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);
    cells
        .chunks(columns.max(1))
        .map(|row| {
            let mut line = String::new();
            for cell in row {
                let _ = write!(line, "{cell:<width$}  ");
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// The general-term formula with the actual parameters substituted.
#[must_use]
pub fn format_formula(params: &SequenceParameters) -> String {
    format!(
        "aₙ = {} + (n-1) × {}",
        format_term(params.first_term),
        format_term(params.common_difference)
    )
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Default export file name, built from the raw parameter values.
#[must_use]
pub fn default_export_file_name(params: &SequenceParameters) -> String {
    format!(
        "arithmetic_sequence_{}_{}_{}.txt",
        format_raw(params.first_term),
        format_raw(params.common_difference),
        params.term_count
    )
}

/// One line per preset: name, parameters, label.
#[must_use]
pub fn format_presets(presets: &[Preset]) -> Vec<String> {
    let width = presets.iter().map(|p| p.name.len()).max().unwrap_or(0);
    presets
        .iter()
        .map(|p| {
            let params = &p.parameters;
            format!(
                "{:<width$}  a₁={}, d={}, n={}  {}",
                p.name,
                format_term(params.first_term),
                format_term(params.common_difference),
                params.term_count,
                p.label
            )
        })
        .collect()
}

/// Write the export text for `terms` to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_export(path: impl AsRef<Path>, terms: &[f64]) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)?;
    file.write_all(export_text(terms).as_bytes())?;
    tracing::debug!(path = %path.display(), lines = terms.len(), "wrote export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arithseq_core::{generate, PRESETS};

    #[test]
    fn inline_mixed_values() {
        assert_eq!(format_inline(&[1.0, 1.5, 2.0]), "1, 1.50, 2");
        assert_eq!(format_inline(&[5.0]), "5");
    }

    #[test]
    fn table_rows_of_ten() {
        let seq = generate(1.0, 1.0, 25).unwrap();
        let rows = format_table(seq.positions(), 10);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("a(1)=1 "));
        assert!(rows[0].ends_with("a(10)=10"));
        assert!(rows[2].starts_with("a(21)=21"));
        assert!(rows[2].ends_with("a(25)=25"));
    }

    #[test]
    fn table_cells_aligned() {
        let seq = generate(1.0, 1.0, 20).unwrap();
        let rows = format_table(seq.positions(), 10);
        assert_eq!(rows[0].find("a(2)="), rows[1].find("a(12)="));
    }

    #[test]
    fn table_zero_columns_does_not_panic() {
        assert_eq!(format_table([(1, 1.0), (2, 2.0)], 0).len(), 2);
    }

    #[test]
    fn formula_substitutes_parameters() {
        let params = SequenceParameters::new(100.0, -7.0, 15);
        assert_eq!(format_formula(&params), "aₙ = 100 + (n-1) × -7");
        let params = SequenceParameters::new(0.5, 0.25, 3);
        assert_eq!(format_formula(&params), "aₙ = 0.50 + (n-1) × 0.25");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(42), "42");
    }

    #[test]
    fn export_file_name_uses_raw_values() {
        let params = SequenceParameters::new(100.0, -7.0, 15);
        assert_eq!(
            default_export_file_name(&params),
            "arithmetic_sequence_100.0_-7.0_15.txt"
        );
        let params = SequenceParameters::new(1e16, 2.5e-7, 3);
        assert_eq!(
            default_export_file_name(&params),
            "arithmetic_sequence_1e+16_2.5e-07_3.txt"
        );
    }

    #[test]
    fn presets_listing() {
        let lines = format_presets(&PRESETS);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("decreasing"));
        assert!(lines[2].contains("a₁=100, d=-7, n=15"));
    }

    #[test]
    fn write_export_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("seq.txt");
        write_export(&path, &[2.0, 4.0]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Term 1: 2.0\nTerm 2: 4.0");
    }
}
