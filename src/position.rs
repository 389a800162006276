//! Source coordinates and error-context rendering.
//!
//! The tokenizer hands out byte spans; everything user-facing wants
//! 1-based line/column pairs. Coordinates are derived lazily by scanning
//! the original buffer, so tokens and AST nodes never carry positions.

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Offsets past the end of the buffer clamp to the final position, which
/// keeps end-of-input diagnostics printable.
///
/// # Examples
///
/// ```rust
/// use pddlcheck::position::line_col;
///
/// assert_eq!(line_col("(a\n b)", 4), (2, 2));
/// ```
#[must_use]
pub fn line_col(src: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(src.len());
    let mut line = 1;
    let mut line_start = 0;
    for (idx, byte) in src.bytes().enumerate() {
        if idx >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = idx + 1;
        }
    }
    (line, offset - line_start + 1)
}

/// Render the caret context block for a diagnostic at `line`/`column`.
///
/// The offending source line is printed verbatim except that tabs become
/// single spaces, so the caret below lines up in fixed-width output:
///
/// ```text
///  line:2, col:5
/// (foo bar)
///     ^ --- parsing halted here
/// ```
#[must_use]
pub fn error_context(src: &str, line: usize, column: usize) -> String {
    let line_text = src
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
        .replace('\t', " ");
    let indent = " ".repeat(column.saturating_sub(1));
    format!(" line:{line}, col:{column}\n{line_text}\n{indent}^ --- parsing halted here\n")
}
