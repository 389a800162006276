//! Library crate for pddlcheck.
//!
//! Parses PDDL domains, problems and standalone formulas into owned ASTs,
//! validating typing, predicate signatures and name resolution as it
//! goes. Errors carry 1-based source positions; warnings ride along with
//! every successful parse.

#![forbid(unsafe_code)]

pub mod language;
pub mod parser;
pub mod position;
pub mod tokenizer;

pub use language::SyntaxKind;
pub use parser::{ast, parse_domain, parse_formula, parse_problem, ErrorKind, Parsed, PddlError};
pub use tokenizer::{tokenize, tokenize_with_trivia, Span};
