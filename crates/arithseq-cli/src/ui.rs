//! Styled console messages.

use console::{style, Color};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// `[LABEL]`, bold and colored unless `NO_COLOR` is set.
fn tag(label: &str, color: Color) -> String {
    let plain = format!("[{label}]");
    if is_color_disabled() {
        plain
    } else {
        style(plain).fg(color).bold().to_string()
    }
}

/// Print a section header.
pub fn print_header(text: &str) {
    let line = format!("=== {text} ===");
    if is_color_disabled() {
        println!("{line}");
    } else {
        println!("{}", style(line).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{} {text}", tag("OK", Color::Green));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", Color::Red));
}
