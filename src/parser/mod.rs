//! PDDL parsing entry points.
//!
//! Three public operations cover the language: [`parse_domain`],
//! [`parse_problem`] and [`parse_formula`]. Each takes the complete
//! source text, demands that the grammar consume all of it, and returns
//! either the parsed root bundled with its warnings or the first
//! [`PddlError`] encountered. Parsing is all-or-nothing: no partial AST
//! ever escapes, and warnings gathered before an error sink with it.

pub mod ast;
pub mod error;

mod domain;
mod expression;
mod problem;
mod semantics;
mod token_stream;
mod typed_list;

pub use error::{ErrorKind, PddlError};

use crate::tokenize;
use ast::{Domain, Expression, Problem};
use token_stream::TokenStream;

/// Result of a successful parse: the root value plus collected warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    value: T,
    warnings: Vec<String>,
}

impl<T> Parsed<T> {
    fn new(value: T, warnings: Vec<String>) -> Self {
        Self { value, warnings }
    }

    /// Access the parsed root.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Warnings collected while parsing, in source order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Split into the root value and its warnings.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.warnings)
    }

    /// Take the root value, dropping the warnings.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Parse a PDDL domain.
///
/// # Errors
/// Returns the first syntax or semantic error, positioned at the
/// offending token.
///
/// # Examples
///
/// ```rust
/// let parsed = pddlcheck::parse_domain(
///     "(define (domain d) (:requirements :strips) (:predicates (p)))",
/// )
/// .unwrap();
/// assert_eq!(parsed.value().name, "d");
/// ```
pub fn parse_domain(src: &str) -> Result<Parsed<Domain>, PddlError> {
    let tokens = tokenize(src);
    let mut ts = TokenStream::new(&tokens, src);
    let (domain, warnings) = domain::parse_domain(&mut ts)?;
    expect_end(&ts)?;
    Ok(Parsed::new(domain, warnings))
}

/// Parse a PDDL problem.
///
/// # Errors
/// Returns the first syntax error, positioned at the offending token.
pub fn parse_problem(src: &str) -> Result<Parsed<Problem>, PddlError> {
    let tokens = tokenize(src);
    let mut ts = TokenStream::new(&tokens, src);
    let problem = problem::parse_problem(&mut ts)?;
    expect_end(&ts)?;
    Ok(Parsed::new(problem, Vec::new()))
}

/// Parse a single PDDL formula.
///
/// # Errors
/// Returns the first syntax error, positioned at the offending token.
///
/// # Examples
///
/// ```rust
/// use pddlcheck::ast::ExpressionKind;
///
/// let parsed = pddlcheck::parse_formula("(and (p ?x) (q))").unwrap();
/// assert_eq!(parsed.value().kind, ExpressionKind::Bool);
/// ```
pub fn parse_formula(src: &str) -> Result<Parsed<Expression>, PddlError> {
    let tokens = tokenize(src);
    let mut ts = TokenStream::new(&tokens, src);
    let formula = expression::parse_expression(&mut ts)?;
    expect_end(&ts)?;
    Ok(Parsed::new(formula, Vec::new()))
}

/// Fail unless the grammar consumed every non-trivia token.
fn expect_end(ts: &TokenStream<'_>) -> Result<(), PddlError> {
    if ts.at_end() {
        Ok(())
    } else {
        Err(ts.expected("end of input"))
    }
}
