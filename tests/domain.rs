//! Integration tests for the `parse_domain` entry point.
//!
//! Covers the grammar of every section, the interleaved semantic checks
//! (typing, constants, predicate signatures, parameter resolution) and
//! the warning channel.

use pddlcheck::ast::ExpressionKind;
use pddlcheck::{parse_domain, ErrorKind};
use rstest::rstest;

#[test]
fn minimal_domain_with_empty_sections() {
    let parsed = parse_domain("(define (domain d) (:requirements :strips) (:predicates (p)))")
        .unwrap();
    let domain = parsed.value();
    assert_eq!(domain.name, "d");
    assert_eq!(domain.requirements, vec!["strips"]);
    assert_eq!(domain.predicates.len(), 1);
    assert_eq!(domain.predicates[0].name, "p");
    assert!(domain.predicates[0].params.is_empty());
    assert!(domain.actions.is_empty());
    assert!(parsed.warnings().is_empty());
}

#[test]
fn typed_constants_with_typing_enabled() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing) \
         (:constants a b - thing) (:predicates (p ?x - thing)))",
    )
    .unwrap();
    let domain = parsed.value();
    assert_eq!(domain.types.len(), 1);
    assert_eq!(domain.types[0].name, "thing");
    assert_eq!(domain.types[0].supertype, "");
    assert_eq!(domain.constants.len(), 1);
    assert_eq!(domain.constants[0].names, vec!["a", "b"]);
    assert_eq!(domain.constants[0].ty, "thing");
    assert!(parsed.warnings().is_empty());
}

#[test]
fn redeclared_constant_warns_about_ambiguous_type() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing object) \
         (:constants a - thing) (:constants a - object) (:predicates (p ?x - thing)))",
    )
    .unwrap();
    assert_eq!(
        parsed.warnings(),
        ["Ambiguous type: a type object and thing"]
    );
    assert_eq!(parsed.value().constants.len(), 2);
}

#[test]
fn unknown_predicate_in_precondition() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x))\n\
         (:action a :parameters (?x) :precondition (q ?x) :effect (p ?x)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Predicate);
    assert_eq!(err.message, "Unknown predicate: q");
    assert_eq!((err.line, err.column), (2, 44));
}

#[test]
fn predicate_arity_mismatch() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x ?y)) \
         (:action a :parameters (?x) :precondition (p ?x)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Predicate);
    assert_eq!(
        err.message,
        "Predicate argument length mismatch, expected 2 but got 1"
    );
}

#[test]
fn quantified_precondition_binds_its_variable() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing) \
         (:predicates (p ?x - thing)) \
         (:action a :parameters () :precondition (forall (?y - thing) (p ?y))))",
    )
    .unwrap();
    let action = &parsed.value().actions[0];
    assert!(action.action_params.is_empty());
    assert_eq!(action.precondition.kind, ExpressionKind::Quantified);
}

#[test]
fn quantifier_bindings_leak_into_sibling_scopes() {
    // Bindings are never popped, so a later conjunct still sees ?y.
    let parsed = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters () \
           :precondition (and (forall (?y) (p ?y)) (p ?y))))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[test]
fn unknown_variable_reference_is_a_parameter_error() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters (?x) :precondition (p ?z)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parameter);
    assert_eq!(err.message, "Unknown Parameter ?z");
}

#[test]
fn unknown_constant_reference_is_a_constant_error() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters () :precondition (p missing)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Constant);
    assert_eq!(err.message, "Unknown constant missing");
}

#[test]
fn nested_predicate_argument_is_rejected() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters (?x) :precondition (p (p ?x))))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Predicate);
    assert_eq!(err.message, "Unexpected nested predicate.");
}

#[test]
fn bare_atom_condition_is_an_expression_error() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters (?x) :precondition ?x))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Expression);
    assert_eq!(err.message, "Unexpected Atom in expression: ?x");
}

#[test]
fn argument_type_mismatch_is_reported_with_both_types() {
    let err = parse_domain(
        "(define (domain d) (:requirements :typing) (:types truck plane) \
         (:predicates (flies ?x - plane)) \
         (:action a :parameters (?t - truck) :precondition (flies ?t)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(
        err.message,
        "Type mismatch: Argument 0 of flies expects plane but got truck"
    );
}

#[test]
fn subtype_arguments_conform_through_the_chain() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) \
         (:types truck - vehicle vehicle - object) \
         (:predicates (moves ?x - vehicle)) \
         (:action a :parameters (?t - truck) :precondition (moves ?t)))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[test]
fn constant_argument_resolves_and_conforms() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing) \
         (:constants home - thing) (:predicates (p ?x - thing)) \
         (:action a :parameters () :effect (p home)))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[test]
fn parameter_shadowing_a_constant_wins() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing) \
         (:constants x - thing) (:predicates (p ?a - thing)) \
         (:action a :parameters (?x - thing) :precondition (p ?x)))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[rstest]
#[case("(define (domain d) (:requirements :typing) (:types thing) (:constants a))")]
#[case("(define (domain d) (:requirements :adl) (:types thing) (:constants a))")]
#[case("(define (domain d) (:requirements :ucpop) (:types thing) (:constants a))")]
fn typing_enabled_requires_constant_types(#[case] source: &str) {
    let err = parse_domain(source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "Missing type.");
}

#[test]
fn typing_disabled_rejects_constant_types() {
    let err =
        parse_domain("(define (domain d) (:requirements :strips) (:constants a - thing))")
            .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(
        err.message,
        "Requirement typing disabled, unexpected type found."
    );
}

#[test]
fn unknown_constant_type_is_rejected() {
    let err = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing) (:constants a - other))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "Unknown type: other");
}

#[test]
fn unknown_parameter_type_is_rejected() {
    let err = parse_domain(
        "(define (domain d) (:requirements :typing) (:types thing) (:predicates (p ?x - thing)) \
         (:action a :parameters (?x - other) :precondition (p ?x)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "Unknown type: x - other");
}

#[test]
fn duplicate_action_parameters_are_rejected() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters (?x ?x) :precondition (p ?x)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parameter);
    assert_eq!(err.message, "Duplicate parameter ?x");
}

#[test]
fn either_constants_expand_per_variant_without_warning() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types truck plane) \
         (:constants a b - (either truck plane)))",
    )
    .unwrap();
    let constants = &parsed.value().constants;
    assert_eq!(constants.len(), 2);
    assert_eq!(constants[0].ty, "truck");
    assert_eq!(constants[1].ty, "plane");
    assert_eq!(constants[1].names, vec!["a", "b"]);
    assert!(parsed.warnings().is_empty());
}

#[test]
fn functions_section_parses_typed_parameters() {
    let parsed = parse_domain(
        "(define (domain d) (:requirements :typing) (:types truck) \
         (:functions (fuel ?t - truck) (total-cost)))",
    )
    .unwrap();
    let functions = &parsed.value().functions;
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0].name, "fuel");
    assert_eq!(functions[0].object_params[0].ty, "truck");
    assert!(functions[1].object_params.is_empty());
}

#[test]
fn durative_action_requires_its_sections() {
    let parsed = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:durative-action a :parameters (?x) \
           :duration (= ?duration 10) \
           :condition (and (at start (p ?x))) \
           :effect (and (at end (p ?x)))))",
    )
    .unwrap();
    let action = &parsed.value().actions[0];
    assert_eq!(action.duration.kind, ExpressionKind::NumericComp);
    assert_eq!(action.precondition.kind, ExpressionKind::Bool);
}

#[test]
fn durative_action_without_duration_fails() {
    let err = parse_domain(
        "(define (domain d) (:predicates (p)) \
         (:durative-action a :parameters () :condition (p) :effect (p)))",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.message.contains(":duration"));
}

#[test]
fn numeric_conditions_are_not_predicate_checked() {
    // Comparisons and fluent updates fall outside predicate checking.
    let parsed = parse_domain(
        "(define (domain d) (:functions (fuel ?t)) (:predicates (p ?x)) \
         (:action a :parameters (?t) \
           :precondition (and (>= (fuel ?t) 10) (p ?t)) \
           :effect (and (decrease (fuel ?t) 10))))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[test]
fn cond_breakup_sections_are_kept() {
    let parsed = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters (?x) :precondition (p ?x) :effect (p ?x) \
          :cond-breakup (and (p ?x)) :temp-breakup (and (p ?x))))",
    )
    .unwrap();
    let action = &parsed.value().actions[0];
    assert_eq!(action.cond_breakup.kind, ExpressionKind::Bool);
    assert_eq!(action.temp_breakup.kind, ExpressionKind::Bool);
}

#[test]
fn temporal_qualifier_subtrees_are_not_predicate_checked() {
    // Durative-kind expressions fall outside the condition walker.
    let parsed = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:durative-action a :parameters (?x) \
           :duration (= ?duration 1) \
           :condition (and (at start (undeclared ?x))) \
           :effect (and (at end (p ?x)))))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[test]
fn conditional_effect_subtrees_are_not_predicate_checked() {
    let parsed = parse_domain(
        "(define (domain d) (:predicates (p ?x)) \
         (:action a :parameters (?x) \
           :effect (and (when (undeclared ?x) (p ?x)))))",
    )
    .unwrap();
    assert_eq!(parsed.value().actions.len(), 1);
}

#[test]
fn trailing_garbage_after_the_domain_fails() {
    let err = parse_domain("(define (domain d) (:predicates (p))) extra").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.message.contains("end of input"));
}

#[test]
fn comments_are_skipped_anywhere_between_tokens() {
    let parsed = parse_domain(
        "; a domain\n(define ; header\n (domain d) ; name\n (:predicates (p)))",
    )
    .unwrap();
    assert_eq!(parsed.value().name, "d");
}

#[test]
fn missing_parameters_keyword_is_a_hard_expectation() {
    let err = parse_domain("(define (domain d) (:action a :precondition (p)))").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.message.contains(":parameters"));
}
