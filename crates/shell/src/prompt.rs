//! Line-oriented prompting over generic reader/writer pairs, so the
//! register loop can be driven by scripted input in tests.

use std::io::{BufRead, Write};

/// Write `text`, flush, and read one trimmed reply line.
///
/// Returns `None` when the input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
