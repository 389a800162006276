//! Problem grammar.
//!
//! A problem names its domain, declares objects, lists the initial facts
//! and states a goal. No semantic pass runs here: resolving `:init` and
//! `:goal` against the domain's declarations is a cross-file concern the
//! parser stays out of, so typed object lists are accepted without
//! consulting any requirements list.

use crate::parser::ast::Problem;
use crate::parser::error::PddlError;
use crate::parser::expression::parse_expression;
use crate::parser::token_stream::TokenStream;
use crate::parser::typed_list::parse_constant_groups;
use crate::SyntaxKind;

/// Parse a complete problem form.
pub(crate) fn parse_problem(ts: &mut TokenStream<'_>) -> Result<Problem, PddlError> {
    ts.expect(SyntaxKind::T_LPAREN)?;
    ts.expect(SyntaxKind::K_DEFINE)?;
    ts.expect(SyntaxKind::T_LPAREN)?;
    ts.expect(SyntaxKind::K_PROBLEM)?;
    let (name, _) = ts.expect_name()?;
    ts.expect(SyntaxKind::T_RPAREN)?;

    ts.expect(SyntaxKind::T_LPAREN)?;
    ts.expect(SyntaxKind::K_DOMAIN_REF)?;
    let (domain_name, _) = ts.expect_name()?;
    ts.expect(SyntaxKind::T_RPAREN)?;

    let mut problem = Problem {
        name,
        domain_name,
        ..Problem::default()
    };

    ts.expect(SyntaxKind::T_LPAREN)?;
    if ts.peek_kind() == Some(SyntaxKind::K_OBJECTS) {
        ts.advance();
        for (groups, _) in parse_constant_groups(ts, None)? {
            problem.objects.extend(groups);
        }
        ts.expect(SyntaxKind::T_RPAREN)?;
        ts.expect(SyntaxKind::T_LPAREN)?;
    }

    ts.expect(SyntaxKind::K_INIT)?;
    while !matches!(ts.peek_kind(), Some(SyntaxKind::T_RPAREN) | None) {
        problem.init.push(parse_expression(ts)?);
    }
    ts.expect(SyntaxKind::T_RPAREN)?;

    ts.expect(SyntaxKind::T_LPAREN)?;
    ts.expect(SyntaxKind::K_GOAL)?;
    problem.goal = parse_expression(ts)?;
    ts.expect(SyntaxKind::T_RPAREN)?;

    ts.expect(SyntaxKind::T_RPAREN)?;
    Ok(problem)
}
