//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Keep this many digits at each end of a truncated product.
const EDGE_DIGITS: usize = 50;

/// Format a decimal product for display, truncating long values unless
/// `verbose` is set.
#[must_use]
pub fn format_result(value: &str, verbose: bool) -> String {
    if !verbose && value.len() > 2 * EDGE_DIGITS {
        format!(
            "{}...{} ({} digits)",
            &value[..EDGE_DIGITS],
            &value[value.len() - EDGE_DIGITS..],
            format_number(value.len() as u64)
        )
    } else {
        value.to_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut grouped = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Write a product to a file, newline-terminated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, product: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{product}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).ends_with("µs"));
        assert!(format_duration(Duration::from_millis(42)).ends_with("ms"));
        assert_eq!(format_duration(Duration::from_millis(3140)), "3.140s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(123_456), "123,456");
    }

    #[test]
    fn format_result_short() {
        assert_eq!(format_result("56088", false), "56088");
    }

    #[test]
    fn format_result_truncates_long_products() {
        let long = format!("{}{}", "1".repeat(100), "2".repeat(100));
        let s = format_result(&long, false);
        assert!(s.starts_with(&"1".repeat(50)));
        assert!(s.contains("..."));
        assert!(s.ends_with("(200 digits)"));
        assert_eq!(format_result(&long, true), long);
    }

    #[test]
    fn write_to_file_appends_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.txt");
        write_to_file(path.to_str().unwrap(), "56088").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "56088\n");
    }
}
