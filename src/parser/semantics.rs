//! Semantic checks interleaved with parsing.
//!
//! The domain grammar calls into this module as it goes: constant groups
//! are checked against the requirements list and the type table the
//! moment they are parsed, and action bodies are parsed by
//! [`parse_condition`], a checking twin of the plain expression parser.
//! Checking while parsing keeps every rejection positioned on the
//! offending token.
//!
//! Quantifier bindings are deliberately never popped: one `bound_vars`
//! list serves a whole action body, so sibling subexpressions see earlier
//! bindings and shadowing resolves to the first match.

use crate::parser::ast::{
    ConstantGroup, Domain, Expression, ExpressionKind, ExpressionNode, QuantifiedFormula,
    TypedName,
};
use crate::parser::error::{ErrorKind, PddlError};
use crate::parser::expression::{
    durative_qualifier, parse_compound_body, parse_durative, parse_expression,
};
use crate::parser::token_stream::{is_word, TokenStream};
use crate::parser::typed_list::parse_typed_variables;
use crate::{Span, SyntaxKind};

/// Requirement flags that switch typing on, compared case-sensitively.
const TYPING_FLAGS: [&str; 3] = ["typing", "adl", "ucpop"];

/// True when the domain's requirements enable typed declarations.
pub(crate) fn typing_enabled(domain: &Domain) -> bool {
    domain
        .requirements
        .iter()
        .any(|r| TYPING_FLAGS.contains(&r.as_str()))
}

/// A declared type is addressable as either side of a `(subtype,
/// supertype)` pair; `object` usually only shows up as a supertype.
fn type_known(domain: &Domain, ty: &str) -> bool {
    domain
        .types
        .iter()
        .any(|p| p.name == ty || p.supertype == ty)
}

/// Typing enabled demands a type, typing disabled forbids one.
pub(crate) fn check_type_vs_requirement(
    ts: &TokenStream<'_>,
    span: &Span,
    typing: bool,
    ty: &str,
) -> Result<(), PddlError> {
    if ty.is_empty() && typing {
        return Err(ts.error(ErrorKind::Type, span, "Missing type."));
    }
    if !ty.is_empty() && !typing {
        return Err(ts.error(
            ErrorKind::Type,
            span,
            "Requirement typing disabled, unexpected type found.",
        ));
    }
    Ok(())
}

/// Reflexive-transitive subtype conformance over `domain.types`.
///
/// The empty type stands for an untyped context and matches in either
/// position. Otherwise the `(subtype, supertype)` chain is followed
/// upward from `got` until it hits `expected` or runs out.
pub(crate) fn check_type(got: &str, expected: &str, domain: &Domain) -> bool {
    if got == expected || got.is_empty() || expected.is_empty() {
        return true;
    }
    match domain.types.iter().find(|p| p.name == got) {
        Some(pair) if !pair.supertype.is_empty() => check_type(&pair.supertype, expected, domain),
        _ => false,
    }
}

/// Validate one `:constants` group against the partially built domain and
/// collect redeclaration warnings. The conflicting declarations are both
/// retained by the caller.
pub(crate) fn check_constant_group(
    ts: &TokenStream<'_>,
    span: &Span,
    group: &ConstantGroup,
    domain: &Domain,
    warnings: &mut Vec<String>,
) -> Result<(), PddlError> {
    let typing = typing_enabled(domain);
    if typing && !type_known(domain, &group.ty) {
        return Err(ts.error(
            ErrorKind::Type,
            span,
            format!("Unknown type: {}", group.ty),
        ));
    }
    check_type_vs_requirement(ts, span, typing, &group.ty)?;
    for constant in &group.names {
        for existing in &domain.constants {
            if existing.ty != group.ty && existing.names.iter().any(|c| c == constant) {
                warnings.push(format!(
                    "Ambiguous type: {constant} type {} and {}",
                    group.ty, existing.ty
                ));
            }
        }
    }
    Ok(())
}

/// Validate a freshly parsed action parameter list: unique names, known
/// types when typing is on, and type/requirement agreement per parameter.
pub(crate) fn check_action_params(
    ts: &TokenStream<'_>,
    span: &Span,
    params: &[TypedName],
    domain: &Domain,
) -> Result<(), PddlError> {
    let typing = typing_enabled(domain);
    for (i, param) in params.iter().enumerate() {
        if params[..i].iter().any(|p| p.name == param.name) {
            return Err(ts.error(
                ErrorKind::Parameter,
                span,
                format!("Duplicate parameter ?{}", param.name),
            ));
        }
        if typing && !type_known(domain, &param.ty) {
            return Err(ts.error(
                ErrorKind::Type,
                span,
                format!("Unknown type: {} - {}", param.name, param.ty),
            ));
        }
        check_type_vs_requirement(ts, span, typing, &param.ty)?;
    }
    Ok(())
}

/// Context threaded through a checked action-body parse.
pub(crate) struct ConditionContext<'d> {
    pub(crate) domain: &'d Domain,
    pub(crate) action_params: &'d [TypedName],
    pub(crate) bound_vars: Vec<TypedName>,
}

impl<'d> ConditionContext<'d> {
    pub(crate) fn new(domain: &'d Domain, action_params: &'d [TypedName]) -> Self {
        Self {
            domain,
            action_params,
            bound_vars: Vec::new(),
        }
    }
}

/// Parse an action precondition or effect, validating predicate
/// applications on the way. Top-level and connective-argument positions
/// must be compound; a bare atom there is rejected.
pub(crate) fn parse_condition(
    ts: &mut TokenStream<'_>,
    ctx: &mut ConditionContext<'_>,
) -> Result<Expression, PddlError> {
    match ts.peek() {
        Some((SyntaxKind::T_LPAREN, _)) => {
            ts.advance();
            parse_condition_body(ts, ctx)
        }
        Some((k, span))
            if is_word(k) || k == SyntaxKind::T_VARIABLE || k == SyntaxKind::T_NUMBER =>
        {
            let text = ts.slice(&span).to_string();
            Err(ts.error(
                ErrorKind::Expression,
                &span,
                format!("Unexpected Atom in expression: {text}"),
            ))
        }
        _ => Err(ts.expected("expression")),
    }
}

fn parse_condition_body(
    ts: &mut TokenStream<'_>,
    ctx: &mut ConditionContext<'_>,
) -> Result<Expression, PddlError> {
    let Some((head, head_span)) = ts.peek() else {
        return Err(ts.expected("expression"));
    };
    match head {
        SyntaxKind::K_AND | SyntaxKind::K_OR | SyntaxKind::K_NOT | SyntaxKind::K_IMPLY => {
            ts.advance();
            let function = ts.slice(&head_span).to_ascii_lowercase();
            let mut arguments = Vec::new();
            while !matches!(ts.peek_kind(), Some(SyntaxKind::T_RPAREN) | None) {
                arguments.push(parse_condition(ts, ctx)?);
            }
            ts.expect(SyntaxKind::T_RPAREN)?;
            Ok(Expression::compound(
                ExpressionKind::Bool,
                function,
                arguments,
            ))
        }
        SyntaxKind::K_FORALL | SyntaxKind::K_EXISTS => {
            parse_checked_quantifier(ts, ctx)
        }
        // Fluent updates and conditional effects carry no predicate-level
        // checks even though their heads are word-shaped.
        SyntaxKind::K_WHEN
        | SyntaxKind::K_INCREASE
        | SyntaxKind::K_DECREASE
        | SyntaxKind::K_ASSIGN => parse_compound_body(ts),
        _ if is_word(head) => {
            if let Some(qualifier) = durative_qualifier(ts) {
                return parse_durative(ts, &qualifier);
            }
            parse_checked_predicate(ts, ctx, &head_span)
        }
        // Comparison and arithmetic operators likewise go unchecked.
        _ => parse_compound_body(ts),
    }
}

/// Like the plain quantifier rule, but the bindings join
/// `ctx.bound_vars` before the body parses, and the body is itself
/// checked.
fn parse_checked_quantifier(
    ts: &mut TokenStream<'_>,
    ctx: &mut ConditionContext<'_>,
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
    ctx.bound_vars.extend(args.iter().cloned());
    let sub_expr = parse_condition(ts, ctx)?;
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

fn parse_checked_predicate(
    ts: &mut TokenStream<'_>,
    ctx: &mut ConditionContext<'_>,
    head_span: &Span,
) -> Result<Expression, PddlError> {
    let domain = ctx.domain;
    let typing = typing_enabled(domain);
    let (function, _) = ts.expect_name()?;
    let Some(decl) = domain.predicates.iter().find(|p| p.name == function) else {
        return Err(ts.error(
            ErrorKind::Predicate,
            head_span,
            format!("Unknown predicate: {function}"),
        ));
    };
    let mut arguments = Vec::new();
    let mut spans = Vec::new();
    while !matches!(ts.peek_kind(), Some(SyntaxKind::T_RPAREN) | None) {
        let span = ts
            .peek()
            .map(|(_, s)| s)
            .unwrap_or_else(|| ts.eof_span());
        arguments.push(parse_expression(ts)?);
        spans.push(span);
    }
    ts.expect(SyntaxKind::T_RPAREN)?;
    if arguments.len() != decl.params.len() {
        return Err(ts.error(
            ErrorKind::Predicate,
            head_span,
            format!(
                "Predicate argument length mismatch, expected {} but got {}",
                decl.params.len(),
                arguments.len()
            ),
        ));
    }
    for (i, (arg, span)) in arguments.iter().zip(&spans).enumerate() {
        let ExpressionNode::Atom(text) = &arg.node else {
            return Err(ts.error(
                ErrorKind::Predicate,
                span,
                "Unexpected nested predicate.",
            ));
        };
        let expected = &decl.params[i].ty;
        if let Some(var) = text.strip_prefix('?') {
            let binding = ctx
                .bound_vars
                .iter()
                .find(|b| b.name == var)
                .or_else(|| ctx.action_params.iter().find(|p| p.name == var));
            let Some(binding) = binding else {
                return Err(ts.error(
                    ErrorKind::Parameter,
                    span,
                    format!("Unknown Parameter ?{var}"),
                ));
            };
            if typing && !check_type(&binding.ty, expected, domain) {
                return Err(ts.error(
                    ErrorKind::Type,
                    span,
                    format!(
                        "Type mismatch: Argument {i} of {function} expects {expected} but got {}",
                        binding.ty
                    ),
                ));
            }
        } else {
            let mut declared_types = Vec::new();
            let mut conforms = false;
            for group in &domain.constants {
                if group.names.iter().any(|c| c == text) {
                    conforms = conforms || check_type(&group.ty, expected, domain);
                    declared_types.push(group.ty.as_str());
                }
            }
            if declared_types.is_empty() {
                return Err(ts.error(
                    ErrorKind::Constant,
                    span,
                    format!("Unknown constant {text}"),
                ));
            }
            if typing && !conforms {
                return Err(ts.error(
                    ErrorKind::Type,
                    span,
                    format!(
                        "Type mismatch: Argument {i} of {function} expects {expected} but got {}",
                        declared_types.join(" ")
                    ),
                ));
            }
        }
    }
    Ok(Expression::compound(
        ExpressionKind::Predicate,
        function,
        arguments,
    ))
}
