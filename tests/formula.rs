//! Integration tests for the `parse_formula` entry point.

use pddlcheck::ast::{ExpressionKind, ExpressionNode};
use pddlcheck::{parse_formula, ErrorKind};
use rstest::rstest;

#[rstest]
#[case("(and (p) (q))", ExpressionKind::Bool)]
#[case("(or (p) (q))", ExpressionKind::Bool)]
#[case("(not (p))", ExpressionKind::Bool)]
#[case("(imply (p) (q))", ExpressionKind::Bool)]
#[case("(= (fuel ?t) 3)", ExpressionKind::NumericComp)]
#[case("(< 1 2)", ExpressionKind::NumericComp)]
#[case("(>= (fuel ?t) 0)", ExpressionKind::NumericComp)]
#[case("(+ 1 2)", ExpressionKind::Numeric)]
#[case("(- (fuel ?t) 1)", ExpressionKind::Numeric)]
#[case("(increase (cost) 1)", ExpressionKind::NumericChange)]
#[case("(assign (cost) 0)", ExpressionKind::NumericChange)]
#[case("(forall (?x) (p ?x))", ExpressionKind::Quantified)]
#[case("(exists (?x - thing) (p ?x))", ExpressionKind::Quantified)]
#[case("(when (p) (q))", ExpressionKind::CondEffect)]
#[case("(at start (p ?x))", ExpressionKind::Durative)]
#[case("(over all (p ?x))", ExpressionKind::Durative)]
#[case("(holding ?x)", ExpressionKind::Predicate)]
#[case("3.5", ExpressionKind::Value)]
#[case("?x", ExpressionKind::Atom)]
#[case("home", ExpressionKind::Atom)]
fn leading_token_fixes_the_kind(#[case] source: &str, #[case] expected: ExpressionKind) {
    let parsed = parse_formula(source).unwrap();
    assert_eq!(parsed.value().kind, expected);
    assert_ne!(parsed.value().kind, ExpressionKind::Unknown);
    assert!(parsed.warnings().is_empty());
}

#[test]
fn kind_and_payload_shape_agree() {
    let atom = parse_formula("home").unwrap();
    assert!(matches!(atom.value().node, ExpressionNode::Atom(_)));

    let quantified = parse_formula("(forall (?x) (p ?x))").unwrap();
    assert!(matches!(
        quantified.value().node,
        ExpressionNode::Quantified(_)
    ));

    let compound = parse_formula("(and (p))").unwrap();
    assert!(matches!(
        compound.value().node,
        ExpressionNode::Predicate(_)
    ));
}

#[test]
fn nested_formulas_build_owned_trees() {
    let parsed = parse_formula("(and (not (p ?x)) (imply (q) (r ?y home)))").unwrap();
    let ExpressionNode::Predicate(root) = &parsed.value().node else {
        panic!("expected a compound payload");
    };
    assert_eq!(root.function, "and");
    assert_eq!(root.arguments.len(), 2);
    let ExpressionNode::Predicate(not) = &root.arguments[0].node else {
        panic!("expected a compound payload");
    };
    assert_eq!(not.function, "not");
    assert_eq!(not.arguments[0].kind, ExpressionKind::Predicate);
}

#[test]
fn a_predicate_named_at_is_not_durative() {
    let parsed = parse_formula("(at ?pkg home)").unwrap();
    assert_eq!(parsed.value().kind, ExpressionKind::Predicate);
}

#[test]
fn trailing_input_is_a_syntax_error() {
    let err = parse_formula("(p ?x) garbage").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!((err.line, err.column), (1, 8));
    assert!(err.message.contains("end of input"));
}

#[test]
fn unbalanced_parens_point_at_the_gap() {
    let err = parse_formula("(and (p)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!((err.line, err.column), (1, 9));
}

#[test]
fn quantifier_requires_at_least_one_variable() {
    let err = parse_formula("(forall () (p))").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
}

#[test]
fn errors_point_past_crlf_lines_correctly() {
    let err = parse_formula("(and\r\n  (p)").unwrap_err();
    assert_eq!(err.line, 2);
}
