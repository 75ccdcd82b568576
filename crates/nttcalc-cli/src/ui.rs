//! Styled status lines for the terminal.
//!
//! Styling is skipped when `NO_COLOR` is set; `console` also drops it on
//! its own when the stream is not a terminal.

use console::{style, Color};

/// Whether `NO_COLOR` asks for plain output.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn tag(label: &str, color: Color) -> String {
    let text = format!("[{label}]");
    if is_color_disabled() {
        text
    } else {
        style(text).fg(color).bold().to_string()
    }
}

/// `=== text ===`, bold cyan unless colors are disabled.
#[must_use]
pub fn header(text: &str) -> String {
    let line = format!("=== {text} ===");
    if is_color_disabled() {
        line
    } else {
        style(line).cyan().bold().to_string()
    }
}

/// Header on stdout.
pub fn print_header(text: &str) {
    println!("{}", header(text));
}

/// `[OK] text` on stdout.
pub fn print_success(text: &str) {
    println!("{} {text}", tag("OK", Color::Green));
}

/// `[ERROR] text` on stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", Color::Red));
}
