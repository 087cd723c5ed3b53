//! Display and export formatting for sequence terms.

/// Format a term for display.
///
/// Integral values render without a fractional part; everything else gets
/// exactly two decimals.
///
/// # Example
/// ```
/// use arithseq_core::format_term;
/// assert_eq!(format_term(5.0), "5");
/// assert_eq!(format_term(5.25), "5.25");
/// assert_eq!(format_term(-0.5), "-0.50");
/// ```
#[must_use]
pub fn format_term(value: f64) -> String {
    if value == value.trunc() {
        // Adding positive zero folds -0.0 into 0.0.
        format!("{}", value + 0.0)
    } else {
        format!("{value:.2}")
    }
}

/// Format a term in its raw form: the shortest representation that
/// round-trips, always with a decimal point (`1.0`, `2.5`).
///
/// Exponents carry an explicit sign and at least two digits (`1e+16`,
/// `2.5e-07`).
#[must_use]
pub fn format_raw(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// One export line: `Term <position>: <value>`.
#[must_use]
pub fn export_line(position: usize, value: f64) -> String {
    format!("Term {position}: {}", format_raw(value))
}

/// Export text for a whole sequence, one line per term, 1-indexed.
#[must_use]
pub fn export_text(terms: &[f64]) -> String {
    terms
        .iter()
        .enumerate()
        .map(|(i, &v)| export_line(i + 1, v))
        .collect::<Vec<_>>()
        .join("\n")
}
