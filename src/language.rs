//! PDDL syntax kinds.
//!
//! This module defines the `SyntaxKind` enum covering every token the
//! tokenizer can emit: punctuation, literals, identifier keywords such as
//! `and` or `forall`, and section keywords such as `:action`. Keyword kinds
//! are produced by the tokenizer's keyword maps; the parser dispatches on
//! them directly.

/// Every possible token in a PDDL source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // Trivia
    T_COMMENT,
    T_WHITESPACE,
    // Tokens
    T_IDENT,
    T_VARIABLE,
    T_NUMBER,
    T_SECTION, // a `:name` flag that is not a recognised section keyword
    T_LPAREN,
    T_RPAREN,
    T_EQ,
    T_LT,
    T_GT,
    T_LTE,
    T_GTE,
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    // Identifier keywords
    K_DEFINE,
    K_DOMAIN,
    K_PROBLEM,
    K_AND,
    K_OR,
    K_NOT,
    K_IMPLY,
    K_FORALL,
    K_EXISTS,
    K_WHEN,
    K_EITHER,
    K_INCREASE,
    K_DECREASE,
    K_ASSIGN,
    // Section keywords
    K_REQUIREMENTS,
    K_TYPES,
    K_CONSTANTS,
    K_PREDICATES,
    K_FUNCTIONS,
    K_ACTION,
    K_DURATIVE_ACTION,
    K_PARAMETERS,
    K_PRECONDITION,
    K_CONDITION,
    K_EFFECT,
    K_DURATION,
    K_COND_BREAKUP,
    K_TEMP_BREAKUP,
    K_DOMAIN_REF,
    K_OBJECTS,
    K_INIT,
    K_GOAL,
    // Special
    T_ERROR,
}

impl SyntaxKind {
    /// True for whitespace and comment tokens, which the grammar skips.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::T_WHITESPACE | SyntaxKind::T_COMMENT)
    }

    /// Human-readable token name used in syntax error messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            SyntaxKind::T_COMMENT => "comment",
            SyntaxKind::T_WHITESPACE => "whitespace",
            SyntaxKind::T_IDENT => "name",
            SyntaxKind::T_VARIABLE => "variable",
            SyntaxKind::T_NUMBER => "number",
            SyntaxKind::T_SECTION => "requirement flag",
            SyntaxKind::T_LPAREN => "'('",
            SyntaxKind::T_RPAREN => "')'",
            SyntaxKind::T_EQ => "'='",
            SyntaxKind::T_LT => "'<'",
            SyntaxKind::T_GT => "'>'",
            SyntaxKind::T_LTE => "'<='",
            SyntaxKind::T_GTE => "'>='",
            SyntaxKind::T_PLUS => "'+'",
            SyntaxKind::T_MINUS => "'-'",
            SyntaxKind::T_STAR => "'*'",
            SyntaxKind::T_SLASH => "'/'",
            SyntaxKind::K_DEFINE => "'define'",
            SyntaxKind::K_DOMAIN => "'domain'",
            SyntaxKind::K_PROBLEM => "'problem'",
            SyntaxKind::K_AND => "'and'",
            SyntaxKind::K_OR => "'or'",
            SyntaxKind::K_NOT => "'not'",
            SyntaxKind::K_IMPLY => "'imply'",
            SyntaxKind::K_FORALL => "'forall'",
            SyntaxKind::K_EXISTS => "'exists'",
            SyntaxKind::K_WHEN => "'when'",
            SyntaxKind::K_EITHER => "'either'",
            SyntaxKind::K_INCREASE => "'increase'",
            SyntaxKind::K_DECREASE => "'decrease'",
            SyntaxKind::K_ASSIGN => "'assign'",
            SyntaxKind::K_REQUIREMENTS => "':requirements'",
            SyntaxKind::K_TYPES => "':types'",
            SyntaxKind::K_CONSTANTS => "':constants'",
            SyntaxKind::K_PREDICATES => "':predicates'",
            SyntaxKind::K_FUNCTIONS => "':functions'",
            SyntaxKind::K_ACTION => "':action'",
            SyntaxKind::K_DURATIVE_ACTION => "':durative-action'",
            SyntaxKind::K_PARAMETERS => "':parameters'",
            SyntaxKind::K_PRECONDITION => "':precondition'",
            SyntaxKind::K_CONDITION => "':condition'",
            SyntaxKind::K_EFFECT => "':effect'",
            SyntaxKind::K_DURATION => "':duration'",
            SyntaxKind::K_COND_BREAKUP => "':cond-breakup'",
            SyntaxKind::K_TEMP_BREAKUP => "':temp-breakup'",
            SyntaxKind::K_DOMAIN_REF => "':domain'",
            SyntaxKind::K_OBJECTS => "':objects'",
            SyntaxKind::K_INIT => "':init'",
            SyntaxKind::K_GOAL => "':goal'",
            SyntaxKind::T_ERROR => "unrecognised input",
        }
    }
}
