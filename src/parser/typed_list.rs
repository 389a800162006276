//! Typed-list parsing.
//!
//! PDDL typed lists are flat sequences of names or variables where a
//! trailing `- type` annotation types the whole run of items before it:
//! `a b - truck c` types `a` and `b` and leaves `c` untyped. Constant and
//! object positions also allow `- (either t1 t2)`, which multiplies the
//! group out per variant type. All parsers here stop in front of the
//! closing parenthesis, which the caller owns.

use crate::parser::ast::{ConstantGroup, TypePair, TypedName};
use crate::parser::error::{ErrorKind, PddlError};
use crate::parser::token_stream::{is_word, TokenStream};
use crate::{Span, SyntaxKind};

/// Parse the body of a `:types` section into `(subtype, supertype)` pairs.
///
/// `truck car - vehicle obj` yields `(truck, vehicle)`, `(car, vehicle)`
/// and `(obj, "")`.
pub(crate) fn parse_type_pairs(ts: &mut TokenStream<'_>) -> Result<Vec<TypePair>, PddlError> {
    let mut pairs = Vec::new();
    while matches!(ts.peek_kind(), Some(k) if is_word(k)) {
        let mut names = Vec::new();
        while matches!(ts.peek_kind(), Some(k) if is_word(k)) {
            let (name, _) = ts.expect_name()?;
            names.push(name);
        }
        let supertype = if ts.peek_kind() == Some(SyntaxKind::T_MINUS) {
            ts.advance();
            let (parent, _) = ts.expect_name()?;
            parent
        } else {
            String::new()
        };
        for name in names {
            pairs.push(TypePair {
                name,
                supertype: supertype.clone(),
            });
        }
    }
    Ok(pairs)
}

/// Parse a typed variable list (`?x ?y - truck ?z`) into flat
/// `(name, type)` pairs, expanding `either` annotations variant-major:
/// `?a ?b - (either t1 t2)` yields `(a,t1) (b,t1) (a,t2) (b,t2)`.
///
/// `typing` carries the domain's typing switch; `Some(false)` rejects any
/// annotation, `None` skips the check where no domain context exists.
pub(crate) fn parse_typed_variables(
    ts: &mut TokenStream<'_>,
    typing: Option<bool>,
) -> Result<Vec<TypedName>, PddlError> {
    let mut params = Vec::new();
    while ts.peek_kind() == Some(SyntaxKind::T_VARIABLE) {
        let mut names = Vec::new();
        while ts.peek_kind() == Some(SyntaxKind::T_VARIABLE) {
            let span = ts.expect(SyntaxKind::T_VARIABLE)?;
            names.push(ts.slice(&span)[1..].to_string());
        }
        let variants = parse_annotation(ts, typing)?;
        match variants {
            Some((types, _)) => {
                for ty in &types {
                    for name in &names {
                        params.push(TypedName::new(name.clone(), ty.clone()));
                    }
                }
            }
            None => {
                for name in names {
                    params.push(TypedName::new(name, ""));
                }
            }
        }
    }
    Ok(params)
}

/// Parse a `:constants` / `:objects` body into declarations. Each
/// declaration holds one group per `either` variant (usually exactly one)
/// plus the span its semantic check should report at: the type token when
/// present, the first name otherwise. Variants of one declaration are
/// kept together so redeclaration checks do not compare them against each
/// other.
pub(crate) fn parse_constant_groups(
    ts: &mut TokenStream<'_>,
    typing: Option<bool>,
) -> Result<Vec<(Vec<ConstantGroup>, Span)>, PddlError> {
    let mut declarations = Vec::new();
    while matches!(ts.peek_kind(), Some(k) if is_word(k)) {
        let mut names = Vec::new();
        let mut first_span = ts.eof_span();
        while matches!(ts.peek_kind(), Some(k) if is_word(k)) {
            let (name, span) = ts.expect_name()?;
            if names.is_empty() {
                first_span = span;
            }
            names.push(name);
        }
        match parse_annotation(ts, typing)? {
            Some((types, type_span)) => {
                let groups = types
                    .into_iter()
                    .map(|ty| ConstantGroup {
                        names: names.clone(),
                        ty,
                    })
                    .collect();
                declarations.push((groups, type_span));
            }
            None => {
                declarations.push((
                    vec![ConstantGroup {
                        names,
                        ty: String::new(),
                    }],
                    first_span,
                ));
            }
        }
    }
    Ok(declarations)
}

/// Parse an optional `- type` or `- (either t1 t2 ...)` annotation.
///
/// Returns the variant types and the span of the first type token, or
/// `None` when the group is untyped. Raises a `TypeError` when typing is
/// known to be disabled and an annotation is present anyway.
fn parse_annotation(
    ts: &mut TokenStream<'_>,
    typing: Option<bool>,
) -> Result<Option<(Vec<String>, Span)>, PddlError> {
    if ts.peek_kind() != Some(SyntaxKind::T_MINUS) {
        return Ok(None);
    }
    ts.advance();
    let (types, span) = if ts.peek_kind() == Some(SyntaxKind::T_LPAREN) {
        ts.advance();
        let span = ts.expect(SyntaxKind::K_EITHER)?;
        let mut types = Vec::new();
        while matches!(ts.peek_kind(), Some(k) if is_word(k)) {
            let (name, _) = ts.expect_name()?;
            types.push(name);
        }
        if types.is_empty() {
            return Err(ts.expected("type name"));
        }
        ts.expect(SyntaxKind::T_RPAREN)?;
        (types, span)
    } else {
        let (name, span) = ts.expect_name().map_err(|_| ts.expected("type name"))?;
        (vec![name], span)
    };
    if typing == Some(false) {
        return Err(ts.error(
            ErrorKind::Type,
            &span,
            "Requirement typing disabled, unexpected type found.",
        ));
    }
    Ok(Some((types, span)))
}
