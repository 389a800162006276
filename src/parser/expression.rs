//! Expression grammar.
//!
//! Expressions are classified by their leading token: connectives build
//! `Bool` compounds, comparison and arithmetic operators build numeric
//! compounds, `forall`/`exists` build quantified formulas, and any other
//! head name is a predicate application. Leaves are names, variables and
//! numbers. The classification tag is fixed here and never revisited.
//!
//! The parsers in this module perform no semantic validation; action
//! bodies go through the checking variant in [`crate::parser::semantics`],
//! which reuses [`parse_compound_body`] for the forms it does not inspect.

use crate::parser::ast::{Expression, ExpressionKind, ExpressionNode, QuantifiedFormula};
use crate::parser::error::PddlError;
use crate::parser::token_stream::{is_word, TokenStream};
use crate::parser::typed_list::parse_typed_variables;
use crate::SyntaxKind;

/// Parse one expression: an atom leaf or a parenthesised compound.
pub(crate) fn parse_expression(ts: &mut TokenStream<'_>) -> Result<Expression, PddlError> {
    match ts.peek_kind() {
        Some(SyntaxKind::T_NUMBER) => {
            let span = ts.expect(SyntaxKind::T_NUMBER)?;
            Ok(Expression::atom(ExpressionKind::Value, ts.slice(&span)))
        }
        Some(SyntaxKind::T_VARIABLE) => {
            let span = ts.expect(SyntaxKind::T_VARIABLE)?;
            Ok(Expression::atom(ExpressionKind::Atom, ts.slice(&span)))
        }
        Some(k) if is_word(k) => {
            let (name, _) = ts.expect_name()?;
            Ok(Expression::atom(ExpressionKind::Atom, name))
        }
        Some(SyntaxKind::T_LPAREN) => {
            ts.advance();
            parse_compound_body(ts)
        }
        _ => Err(ts.expected("expression")),
    }
}

/// Parse a compound expression after its opening parenthesis, including
/// the closing one.
pub(crate) fn parse_compound_body(ts: &mut TokenStream<'_>) -> Result<Expression, PddlError> {
    let Some((head, head_span)) = ts.peek() else {
        return Err(ts.expected("expression"));
    };
    match head {
        SyntaxKind::K_AND | SyntaxKind::K_OR | SyntaxKind::K_NOT | SyntaxKind::K_IMPLY => {
            ts.advance();
            let function = ts.slice(&head_span).to_ascii_lowercase();
            let arguments = parse_arguments(ts)?;
            Ok(Expression::compound(ExpressionKind::Bool, function, arguments))
        }
        SyntaxKind::T_EQ
        | SyntaxKind::T_LT
        | SyntaxKind::T_GT
        | SyntaxKind::T_LTE
        | SyntaxKind::T_GTE => {
            ts.advance();
            let function = ts.slice(&head_span).to_string();
            let arguments = parse_arguments(ts)?;
            Ok(Expression::compound(
                ExpressionKind::NumericComp,
                function,
                arguments,
            ))
        }
        SyntaxKind::T_PLUS | SyntaxKind::T_MINUS | SyntaxKind::T_STAR | SyntaxKind::T_SLASH => {
            ts.advance();
            let function = ts.slice(&head_span).to_string();
            let arguments = parse_arguments(ts)?;
            Ok(Expression::compound(
                ExpressionKind::Numeric,
                function,
                arguments,
            ))
        }
        SyntaxKind::K_INCREASE | SyntaxKind::K_DECREASE | SyntaxKind::K_ASSIGN => {
            ts.advance();
            let function = ts.slice(&head_span).to_ascii_lowercase();
            let arguments = parse_arguments(ts)?;
            Ok(Expression::compound(
                ExpressionKind::NumericChange,
                function,
                arguments,
            ))
        }
        SyntaxKind::K_WHEN => {
            ts.advance();
            let arguments = parse_arguments(ts)?;
            Ok(Expression::compound(
                ExpressionKind::CondEffect,
                "when",
                arguments,
            ))
        }
        SyntaxKind::K_FORALL | SyntaxKind::K_EXISTS => {
            let quantified = parse_quantified(ts, parse_expression)?;
            Ok(quantified)
        }
        _ if is_word(head) => {
            if let Some(qualifier) = durative_qualifier(ts) {
                return parse_durative(ts, &qualifier);
            }
            ts.advance();
            let function = ts.slice(&head_span).to_string();
            let arguments = parse_arguments(ts)?;
            Ok(Expression::compound(
                ExpressionKind::Predicate,
                function,
                arguments,
            ))
        }
        _ => Err(ts.expected("expression")),
    }
}

/// Parse a `forall`/`exists` form after the opening parenthesis, using
/// `sub_parser` for the quantified body. The quantifier keyword is still
/// unconsumed on entry.
pub(crate) fn parse_quantified(
    ts: &mut TokenStream<'_>,
    sub_parser: impl FnOnce(&mut TokenStream<'_>) -> Result<Expression, PddlError>,
) -> Result<Expression, PddlError> {
    let head_span = match ts.peek() {
        Some((SyntaxKind::K_FORALL | SyntaxKind::K_EXISTS, span)) => span,
        _ => return Err(ts.expected("quantifier")),
    };
    ts.advance();
    let quantifier = ts.slice(&head_span).to_ascii_lowercase();
    ts.expect(SyntaxKind::T_LPAREN)?;
    let args = parse_typed_variables(ts, None)?;
    if args.is_empty() {
        return Err(ts.expected("variable"));
    }
    ts.expect(SyntaxKind::T_RPAREN)?;
    let sub_expr = sub_parser(ts)?;
    ts.expect(SyntaxKind::T_RPAREN)?;
    Ok(Expression {
        kind: ExpressionKind::Quantified,
        node: ExpressionNode::Quantified(Box::new(QuantifiedFormula {
            quantifier,
            args,
            sub_expr,
        })),
    })
}

/// Detect a temporal qualifier head without consuming anything: `at`
/// followed by the bare word `start` or `end`, or `over` followed by
/// `all`, with a wrapped expression still to come. Any other `at`/`over`
/// form is an ordinary predicate, including a unary `at` applied to an
/// object that happens to be called `start`.
pub(crate) fn durative_qualifier(ts: &TokenStream<'_>) -> Option<String> {
    let (head_kind, head_span) = ts.peek()?;
    if head_kind != SyntaxKind::T_IDENT {
        return None;
    }
    let (second_kind, second_span) = ts.peek_second()?;
    if second_kind != SyntaxKind::T_IDENT {
        return None;
    }
    if matches!(ts.peek_nth(2), Some(SyntaxKind::T_RPAREN) | None) {
        return None;
    }
    let head = ts.slice(&head_span).to_ascii_lowercase();
    let qualifier = ts.slice(&second_span).to_ascii_lowercase();
    match (head.as_str(), qualifier.as_str()) {
        ("at", "start" | "end") | ("over", "all") => Some(qualifier),
        _ => None,
    }
}

/// Parse `at start E` / `over all E` after the opening parenthesis, with
/// the head word still unconsumed.
pub(crate) fn parse_durative(
    ts: &mut TokenStream<'_>,
    qualifier: &str,
) -> Result<Expression, PddlError> {
    let (function, _) = ts.expect_name()?;
    ts.advance(); // the qualifier word, already classified
    let wrapped = parse_expression(ts)?;
    ts.expect(SyntaxKind::T_RPAREN)?;
    Ok(Expression::compound(
        ExpressionKind::Durative,
        function.to_ascii_lowercase(),
        vec![Expression::atom(ExpressionKind::Atom, qualifier), wrapped],
    ))
}

/// Parse argument expressions up to and including the closing parenthesis.
fn parse_arguments(ts: &mut TokenStream<'_>) -> Result<Vec<Expression>, PddlError> {
    let mut arguments = Vec::new();
    while !matches!(ts.peek_kind(), Some(SyntaxKind::T_RPAREN) | None) {
        arguments.push(parse_expression(ts)?);
    }
    ts.expect(SyntaxKind::T_RPAREN)?;
    Ok(arguments)
}
