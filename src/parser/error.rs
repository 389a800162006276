//! Structured parse and validation errors.
//!
//! Every failure carries a category, a message and the 1-based source
//! position it was raised at. The first error aborts the entry point; the
//! caller receives it with enough information to render a caret context
//! against the original text.

use std::fmt;

use crate::position::error_context;

/// Category of a [`PddlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A grammar expectation failed or input remained unconsumed.
    Syntax,
    /// Unknown type, missing required type, or type-conformance failure.
    Type,
    /// Unknown predicate, arity mismatch, or nested predicate argument.
    Predicate,
    /// A referenced constant is not declared.
    Constant,
    /// A variable resolves to neither a parameter nor a bound quantifier
    /// variable.
    Parameter,
    /// A bare atom appeared where a compound expression is required.
    Expression,
    /// The grammar did not match but raised no structured error.
    Parser,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "Syntax Error",
            ErrorKind::Type => "Type Error",
            ErrorKind::Predicate => "Predicate Error",
            ErrorKind::Constant => "Constant Error",
            ErrorKind::Parameter => "Parameter Error",
            ErrorKind::Expression => "Expression Error",
            ErrorKind::Parser => "Parser Error",
        }
    }
}

/// An error raised while parsing or validating PDDL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PddlError {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based source line.
    pub line: usize,
    /// 1-based source column.
    pub column: usize,
}

impl PddlError {
    pub(crate) fn new(
        kind: ErrorKind,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    /// Render the caret context block for this error against `src`.
    ///
    /// `src` must be the text the failing entry point was invoked on; the
    /// error itself only stores coordinates.
    #[must_use]
    pub fn context(&self, src: &str) -> String {
        error_context(src, self.line, self.column)
    }
}

impl fmt::Display for PddlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at line:{}, col:{}",
            self.kind.label(),
            self.message,
            self.line,
            self.column
        )
    }
}

impl std::error::Error for PddlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_message_and_position() {
        let err = PddlError::new(ErrorKind::Predicate, 3, 7, "Unknown predicate: q");
        assert_eq!(
            err.to_string(),
            "Predicate Error: Unknown predicate: q at line:3, col:7"
        );
    }

    #[test]
    fn context_renders_against_the_source() {
        let src = "(define\n  (oops)";
        let err = PddlError::new(ErrorKind::Syntax, 2, 3, "expected name");
        let ctx = err.context(src);
        assert!(ctx.starts_with(" line:2, col:3\n  (oops)\n"));
        assert!(ctx.ends_with("  ^ --- parsing halted here\n"));
    }
}
