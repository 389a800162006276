//! Domain grammar.
//!
//! A domain is `(define (domain <name>) <section>*)` where each section is
//! a parenthesised form introduced by its keyword. Sections may appear in
//! any order and repeat; repeated sections extend the earlier ones, which
//! is what lets a second `:constants` block redeclare a name under a new
//! type and earn the ambiguity warning instead of a hard error.
//!
//! Semantic checks run as soon as the checked construct has been parsed:
//! constant groups against the requirements and type table, action
//! parameter lists for uniqueness and known types, and action bodies
//! through the checking condition parser.

use crate::parser::ast::{Action, Domain, Expression, Function, PredicateDecl};
use crate::parser::error::PddlError;
use crate::parser::expression::parse_expression;
use crate::parser::semantics::{
    check_action_params, check_constant_group, parse_condition, typing_enabled, ConditionContext,
};
use crate::parser::token_stream::{is_word, TokenStream};
use crate::parser::typed_list::{parse_constant_groups, parse_type_pairs, parse_typed_variables};
use crate::SyntaxKind;

/// Parse a complete domain form, returning it with collected warnings.
pub(crate) fn parse_domain(ts: &mut TokenStream<'_>) -> Result<(Domain, Vec<String>), PddlError> {
    ts.expect(SyntaxKind::T_LPAREN)?;
    ts.expect(SyntaxKind::K_DEFINE)?;
    ts.expect(SyntaxKind::T_LPAREN)?;
    ts.expect(SyntaxKind::K_DOMAIN)?;
    let (name, _) = ts.expect_name()?;
    ts.expect(SyntaxKind::T_RPAREN)?;

    let mut domain = Domain {
        name,
        ..Domain::default()
    };
    let mut warnings = Vec::new();
    loop {
        match ts.peek_kind() {
            Some(SyntaxKind::T_RPAREN) => {
                ts.advance();
                break;
            }
            Some(SyntaxKind::T_LPAREN) => {
                ts.advance();
                parse_section(ts, &mut domain, &mut warnings)?;
            }
            _ => return Err(ts.expected("domain section or ')'")),
        }
    }
    Ok((domain, warnings))
}

/// Parse one domain section after its opening parenthesis, including the
/// closing one.
fn parse_section(
    ts: &mut TokenStream<'_>,
    domain: &mut Domain,
    warnings: &mut Vec<String>,
) -> Result<(), PddlError> {
    match ts.peek_kind() {
        Some(SyntaxKind::K_REQUIREMENTS) => {
            ts.advance();
            parse_requirements(ts, domain)
        }
        Some(SyntaxKind::K_TYPES) => {
            ts.advance();
            let pairs = parse_type_pairs(ts)?;
            domain.types.extend(pairs);
            ts.expect(SyntaxKind::T_RPAREN)?;
            Ok(())
        }
        Some(SyntaxKind::K_CONSTANTS) => {
            ts.advance();
            parse_constants(ts, domain, warnings)
        }
        Some(SyntaxKind::K_PREDICATES) => {
            ts.advance();
            let typing = typing_enabled(domain);
            while ts.peek_kind() == Some(SyntaxKind::T_LPAREN) {
                ts.advance();
                let (name, _) = ts.expect_name()?;
                let params = parse_typed_variables(ts, Some(typing))?;
                ts.expect(SyntaxKind::T_RPAREN)?;
                domain.predicates.push(PredicateDecl { name, params });
            }
            ts.expect(SyntaxKind::T_RPAREN)?;
            Ok(())
        }
        Some(SyntaxKind::K_FUNCTIONS) => {
            ts.advance();
            let typing = typing_enabled(domain);
            while ts.peek_kind() == Some(SyntaxKind::T_LPAREN) {
                ts.advance();
                let (name, _) = ts.expect_name()?;
                let object_params = parse_typed_variables(ts, Some(typing))?;
                ts.expect(SyntaxKind::T_RPAREN)?;
                domain.functions.push(Function {
                    name,
                    object_params,
                });
            }
            ts.expect(SyntaxKind::T_RPAREN)?;
            Ok(())
        }
        Some(SyntaxKind::K_ACTION) => {
            ts.advance();
            let action = parse_action(ts, domain, false)?;
            domain.actions.push(action);
            Ok(())
        }
        Some(SyntaxKind::K_DURATIVE_ACTION) => {
            ts.advance();
            let action = parse_action(ts, domain, true)?;
            domain.actions.push(action);
            Ok(())
        }
        _ => Err(ts.expected("domain section keyword")),
    }
}

/// `(:requirements :flag+)` — flags are stored without the leading colon.
fn parse_requirements(ts: &mut TokenStream<'_>, domain: &mut Domain) -> Result<(), PddlError> {
    let mut any = false;
    loop {
        match ts.peek() {
            Some((SyntaxKind::T_SECTION, span)) => {
                ts.advance();
                domain.requirements.push(ts.slice(&span)[1..].to_string());
                any = true;
            }
            Some((k, span)) if is_word(k) => {
                ts.advance();
                domain.requirements.push(ts.slice(&span).to_string());
                any = true;
            }
            _ => break,
        }
    }
    if !any {
        return Err(ts.expected("requirement flag"));
    }
    ts.expect(SyntaxKind::T_RPAREN)?;
    Ok(())
}

fn parse_constants(
    ts: &mut TokenStream<'_>,
    domain: &mut Domain,
    warnings: &mut Vec<String>,
) -> Result<(), PddlError> {
    let typing = typing_enabled(domain);
    let declarations = parse_constant_groups(ts, Some(typing))?;
    for (groups, span) in declarations {
        for group in &groups {
            check_constant_group(ts, &span, group, domain, warnings)?;
        }
        domain.constants.extend(groups);
    }
    ts.expect(SyntaxKind::T_RPAREN)?;
    Ok(())
}

/// Parse an `:action` or `:durative-action` body after its keyword,
/// including the closing parenthesis.
fn parse_action(
    ts: &mut TokenStream<'_>,
    domain: &Domain,
    durative: bool,
) -> Result<Action, PddlError> {
    let typing = typing_enabled(domain);
    let (name, name_span) = ts.expect_name()?;
    ts.expect(SyntaxKind::K_PARAMETERS)?;
    ts.expect(SyntaxKind::T_LPAREN)?;
    let action_params = parse_typed_variables(ts, Some(typing))?;
    ts.expect(SyntaxKind::T_RPAREN)?;
    check_action_params(ts, &name_span, &action_params, domain)?;

    let mut duration = Expression::default();
    let mut precondition = Expression::default();
    let mut effect = Expression::default();
    let mut cond_breakup = Expression::default();
    let mut temp_breakup = Expression::default();

    // One binding list per action body: quantifier bindings accumulate
    // across the precondition and into the effect.
    let mut ctx = ConditionContext::new(domain, &action_params);
    if durative {
        ts.expect(SyntaxKind::K_DURATION)?;
        duration = parse_expression(ts)?;
        ts.expect(SyntaxKind::K_CONDITION)?;
        precondition = parse_condition(ts, &mut ctx)?;
        ts.expect(SyntaxKind::K_EFFECT)?;
        effect = parse_condition(ts, &mut ctx)?;
    } else {
        if ts.peek_kind() == Some(SyntaxKind::K_PRECONDITION) {
            ts.advance();
            precondition = parse_condition(ts, &mut ctx)?;
        }
        if ts.peek_kind() == Some(SyntaxKind::K_EFFECT) {
            ts.advance();
            effect = parse_condition(ts, &mut ctx)?;
        }
    }
    if ts.peek_kind() == Some(SyntaxKind::K_COND_BREAKUP) {
        ts.advance();
        cond_breakup = parse_expression(ts)?;
    }
    if ts.peek_kind() == Some(SyntaxKind::K_TEMP_BREAKUP) {
        ts.advance();
        temp_breakup = parse_expression(ts)?;
    }
    ts.expect(SyntaxKind::T_RPAREN)?;

    Ok(Action {
        name,
        action_params,
        duration,
        precondition,
        effect,
        cond_breakup,
        temp_breakup,
    })
}
