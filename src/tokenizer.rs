//! Lexical analysis for PDDL source.
//!
//! This module exposes [`tokenize`] and [`tokenize_with_trivia`], which
//! convert raw source text into `(SyntaxKind, Span)` pairs. It uses the
//! `logos` crate to recognise tokens; PDDL keywords are matched
//! case-insensitively through `phf` maps while the underlying text keeps
//! the case the author wrote.

use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r";[^\n]*")]
    Comment,
    #[regex(r"[A-Za-z_][A-Za-z0-9_\-]*")]
    Ident,
    #[regex(r"\?[A-Za-z_][A-Za-z0-9_\-]*")]
    Variable,
    #[regex(r"[+-]?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    Number,
    #[regex(r":[A-Za-z][A-Za-z0-9_\-]*")]
    Section,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<=")]
    Lte,
    #[token(">=")]
    Gte,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
}

/// Maps identifier strings to their keyword `SyntaxKind`.
///
/// Keys are lowercase; callers look up the ASCII-lowercased identifier so
/// `AND`, `And` and `and` all resolve to the same keyword.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "define" => SyntaxKind::K_DEFINE,
    "domain" => SyntaxKind::K_DOMAIN,
    "problem" => SyntaxKind::K_PROBLEM,
    "and" => SyntaxKind::K_AND,
    "or" => SyntaxKind::K_OR,
    "not" => SyntaxKind::K_NOT,
    "imply" => SyntaxKind::K_IMPLY,
    "forall" => SyntaxKind::K_FORALL,
    "exists" => SyntaxKind::K_EXISTS,
    "when" => SyntaxKind::K_WHEN,
    "either" => SyntaxKind::K_EITHER,
    "increase" => SyntaxKind::K_INCREASE,
    "decrease" => SyntaxKind::K_DECREASE,
    "assign" => SyntaxKind::K_ASSIGN,
};

/// Maps `:name` tokens to section-keyword kinds.
///
/// Flags outside this map (for example `:strips` in a requirements list)
/// stay [`SyntaxKind::T_SECTION`] tokens.
static SECTION_KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    ":requirements" => SyntaxKind::K_REQUIREMENTS,
    ":types" => SyntaxKind::K_TYPES,
    ":constants" => SyntaxKind::K_CONSTANTS,
    ":predicates" => SyntaxKind::K_PREDICATES,
    ":functions" => SyntaxKind::K_FUNCTIONS,
    ":action" => SyntaxKind::K_ACTION,
    ":durative-action" => SyntaxKind::K_DURATIVE_ACTION,
    ":parameters" => SyntaxKind::K_PARAMETERS,
    ":precondition" => SyntaxKind::K_PRECONDITION,
    ":condition" => SyntaxKind::K_CONDITION,
    ":effect" => SyntaxKind::K_EFFECT,
    ":duration" => SyntaxKind::K_DURATION,
    ":cond-breakup" => SyntaxKind::K_COND_BREAKUP,
    ":temp-breakup" => SyntaxKind::K_TEMP_BREAKUP,
    ":domain" => SyntaxKind::K_DOMAIN_REF,
    ":objects" => SyntaxKind::K_OBJECTS,
    ":init" => SyntaxKind::K_INIT,
    ":goal" => SyntaxKind::K_GOAL,
};

fn keyword_kind(ident: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(ident.to_ascii_lowercase().as_str()).copied()
}

fn section_kind(flag: &str) -> Option<SyntaxKind> {
    SECTION_KEYWORDS
        .get(flag.to_ascii_lowercase().as_str())
        .copied()
}

fn tokenize_impl(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = &src[span.clone()];
        let Ok(token) = result else {
            out.push((SyntaxKind::T_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::Comment => SyntaxKind::T_COMMENT,
            Token::Ident => keyword_kind(text).unwrap_or(SyntaxKind::T_IDENT),
            Token::Variable => SyntaxKind::T_VARIABLE,
            Token::Number => SyntaxKind::T_NUMBER,
            Token::Section => section_kind(text).unwrap_or(SyntaxKind::T_SECTION),
            Token::LParen => SyntaxKind::T_LPAREN,
            Token::RParen => SyntaxKind::T_RPAREN,
            Token::Lte => SyntaxKind::T_LTE,
            Token::Gte => SyntaxKind::T_GTE,
            Token::Eq => SyntaxKind::T_EQ,
            Token::Lt => SyntaxKind::T_LT,
            Token::Gt => SyntaxKind::T_GT,
            Token::Plus => SyntaxKind::T_PLUS,
            Token::Minus => SyntaxKind::T_MINUS,
            Token::Star => SyntaxKind::T_STAR,
            Token::Slash => SyntaxKind::T_SLASH,
        };
        out.push((kind, span));
    }
    out
}

/// Tokenise the source, excluding whitespace and comments.
///
/// This is the token stream the grammar consumes; the lexical skipper is
/// realised by filtering trivia here so it can never fire inside a token.
///
/// # Examples
///
/// ```rust
/// use pddlcheck::{tokenize, SyntaxKind};
///
/// let tokens = tokenize("(p ?x) ; a comment");
/// assert!(!tokens.iter().any(|(k, _)| k.is_trivia()));
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
        .into_iter()
        .filter(|(k, _)| !k.is_trivia())
        .collect()
}

/// Tokenise the source, retaining whitespace and comment tokens.
///
/// # Examples
///
/// ```rust
/// use pddlcheck::{tokenize_with_trivia, SyntaxKind};
///
/// let tokens = tokenize_with_trivia("(and)");
/// assert_eq!(tokens[1].0, SyntaxKind::K_AND);
/// ```
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
}
