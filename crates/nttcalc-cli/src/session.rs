//! Interactive multiplication session.
//!
//! Reads whitespace-separated operand pairs from a line-oriented source and
//! writes one product line per pair. A pair may span several lines.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use nttcalc_core::calculator::Calculator;
use nttcalc_core::options::Options;
use nttcalc_core::DEFAULT_SENTINEL;

/// Prompt written before each query in interactive use.
pub const PROMPT: &str = "> ";

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// First-operand token that ends the session.
    pub sentinel: String,
    /// Write a banner and a prompt before each query.
    pub prompt: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            prompt: false,
        }
    }
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Queries answered with a product.
    pub products: usize,
    /// Queries rejected with an error.
    pub errors: usize,
}

/// Whitespace tokenizer over a buffered reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Lines are split as raw bytes; invalid UTF-8 becomes U+FFFD and is
    /// rejected later as a non-digit.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                self.line
                    .split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        Ok(self.pending.pop_front())
    }
}

/// Run a session until the sentinel or end of input.
///
/// Products go to `out`, one per line. A rejected query writes its error
/// to `err` and an empty line to `out`, then the session continues. A lone
/// operand at end of input is dropped.
///
/// # Errors
///
/// Returns an I/O error if reading `input` or writing either sink fails.
pub fn run_session<R: BufRead, W: Write, E: Write>(
    input: R,
    out: &mut W,
    err: &mut E,
    calculator: &dyn Calculator,
    opts: &Options,
    config: &SessionConfig,
) -> io::Result<SessionStats> {
    let mut tokens = Tokens::new(input);
    let mut stats = SessionStats::default();

    if config.prompt {
        writeln!(out, "Decimal multiplier, '{}' to quit", config.sentinel)?;
    }

    loop {
        if config.prompt && !tokens.has_pending() {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(first) = tokens.next_token()? else {
            break;
        };
        if first == config.sentinel {
            break;
        }
        let Some(second) = tokens.next_token()? else {
            tracing::debug!("unpaired operand at end of input");
            break;
        };

        match calculator.multiply(&first, &second, opts) {
            Ok(product) => {
                stats.products += 1;
                writeln!(out, "{product}")?;
            }
            Err(e) => {
                stats.errors += 1;
                tracing::debug!(error = %e, "query rejected");
                writeln!(err, "Error: {e}")?;
                writeln!(out)?;
            }
        }
        out.flush()?;
    }

    tracing::debug!(products = stats.products, errors = stats.errors, "session finished");
    Ok(stats)
}
