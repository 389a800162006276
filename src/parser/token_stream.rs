//! Token cursor with hard expectations.
//!
//! Wraps the trivia-free token slice produced by the tokenizer and gives
//! the grammar lookahead, consumption and expectation helpers. A failed
//! expectation becomes a positioned [`PddlError`] naming the token that
//! was required, which is the only error-reporting channel the grammar
//! uses for syntax failures.

use crate::parser::error::{ErrorKind, PddlError};
use crate::position::line_col;
use crate::{Span, SyntaxKind};

#[derive(Debug)]
pub(crate) struct TokenStream<'a> {
    tokens: &'a [(SyntaxKind, Span)],
    src: &'a str,
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(tokens: &'a [(SyntaxKind, Span)], src: &'a str) -> Self {
        Self {
            tokens,
            src,
            cursor: 0,
        }
    }

    pub(crate) fn peek(&self) -> Option<(SyntaxKind, Span)> {
        self.tokens.get(self.cursor).map(|(k, s)| (*k, s.clone()))
    }

    pub(crate) fn peek_kind(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.cursor).map(|(k, _)| *k)
    }

    /// Look one token past the current one without consuming anything.
    pub(crate) fn peek_second(&self) -> Option<(SyntaxKind, Span)> {
        self.tokens
            .get(self.cursor + 1)
            .map(|(k, s)| (*k, s.clone()))
    }

    /// Look `n` tokens past the current one without consuming anything.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.cursor + n).map(|(k, _)| *k)
    }

    pub(crate) fn advance(&mut self) -> Option<(SyntaxKind, Span)> {
        let tok = self.peek();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    pub(crate) fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Consume the next token, failing unless it has the given kind.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> Result<Span, PddlError> {
        match self.peek() {
            Some((k, span)) if k == kind => {
                self.cursor += 1;
                Ok(span)
            }
            _ => Err(self.expected(kind.display_name())),
        }
    }

    /// Consume a name token (a plain identifier or an identifier-shaped
    /// keyword) and return its text as written.
    pub(crate) fn expect_name(&mut self) -> Result<(String, Span), PddlError> {
        match self.peek() {
            Some((k, span)) if is_word(k) => {
                self.cursor += 1;
                Ok((self.slice(&span).to_string(), span))
            }
            _ => Err(self.expected("name")),
        }
    }

    /// Build a syntax error reporting that `what` was required here.
    pub(crate) fn expected(&self, what: &str) -> PddlError {
        let (found, span) = match self.peek() {
            Some((k, span)) => (k.display_name(), span),
            None => ("end of input", self.eof_span()),
        };
        self.error(
            ErrorKind::Syntax,
            &span,
            format!("expected {what} but found {found}"),
        )
    }

    /// Build an error of `kind` positioned at `span`.
    pub(crate) fn error(&self, kind: ErrorKind, span: &Span, message: impl Into<String>) -> PddlError {
        let (line, column) = line_col(self.src, span.start);
        PddlError::new(kind, line, column, message)
    }

    pub(crate) fn slice(&self, span: &Span) -> &'a str {
        &self.src[span.clone()]
    }

    pub(crate) fn eof_span(&self) -> Span {
        self.src.len()..self.src.len()
    }
}

/// True for tokens that can stand where a PDDL name is expected.
///
/// Keywords are matched at lex time, so name positions must accept the
/// identifier-shaped keyword kinds as well as `T_IDENT`.
pub(crate) fn is_word(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::T_IDENT
            | SyntaxKind::K_DEFINE
            | SyntaxKind::K_DOMAIN
            | SyntaxKind::K_PROBLEM
            | SyntaxKind::K_AND
            | SyntaxKind::K_OR
            | SyntaxKind::K_NOT
            | SyntaxKind::K_IMPLY
            | SyntaxKind::K_FORALL
            | SyntaxKind::K_EXISTS
            | SyntaxKind::K_WHEN
            | SyntaxKind::K_EITHER
            | SyntaxKind::K_INCREASE
            | SyntaxKind::K_DECREASE
            | SyntaxKind::K_ASSIGN
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn expect_consumes_matching_tokens() {
        let src = "(p)";
        let tokens = tokenize(src);
        let mut ts = TokenStream::new(&tokens, src);
        assert!(ts.expect(SyntaxKind::T_LPAREN).is_ok());
        let (name, _) = ts.expect_name().unwrap();
        assert_eq!(name, "p");
        assert!(ts.expect(SyntaxKind::T_RPAREN).is_ok());
        assert!(ts.at_end());
    }

    #[test]
    fn failed_expectation_names_both_sides() {
        let src = "(p";
        let tokens = tokenize(src);
        let mut ts = TokenStream::new(&tokens, src);
        ts.advance();
        ts.advance();
        let err = ts.expect(SyntaxKind::T_RPAREN).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.contains("')'"));
        assert!(err.message.contains("end of input"));
    }

    #[test]
    fn keywords_are_accepted_as_names() {
        let src = "domain";
        let tokens = tokenize(src);
        let mut ts = TokenStream::new(&tokens, src);
        let (name, _) = ts.expect_name().unwrap();
        assert_eq!(name, "domain");
    }
}
