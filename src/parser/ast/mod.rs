//! Typed AST for parsed PDDL domains and problems.
//!
//! All values here are plain owned data with structural equality. They are
//! built bottom-up during parsing; children are owned by parents and no
//! positions are retained. The `Display` impls print the structures back
//! as PDDL text, which the round-trip tests lean on.

mod expr;

pub use expr::{Expression, ExpressionKind, ExpressionNode, Predicate, QuantifiedFormula};

use std::fmt;

/// A name with an optional type; an empty type means untyped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypedName {
    pub name: String,
    pub ty: String,
}

impl TypedName {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A `(subtype, supertype)` pair from the `:types` section.
///
/// A type declared without a parent carries an empty supertype.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypePair {
    pub name: String,
    pub supertype: String,
}

/// One group of a `:constants` or `:objects` typed list.
///
/// `(:constants a b - truck)` yields one group; an `either` annotation
/// yields one group per variant type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstantGroup {
    pub names: Vec<String>,
    pub ty: String,
}

/// A predicate declaration from the `:predicates` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredicateDecl {
    pub name: String,
    pub params: Vec<TypedName>,
}

/// A numeric function declaration from the `:functions` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Function {
    pub name: String,
    pub object_params: Vec<TypedName>,
}

/// An `:action` or `:durative-action` definition.
///
/// Optional sections that were not written stay at their default, an
/// absent [`Expression`]. Durative actions keep their `:condition` in
/// `precondition`; a non-absent `duration` marks the action as durative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Action {
    pub name: String,
    pub action_params: Vec<TypedName>,
    pub duration: Expression,
    pub precondition: Expression,
    pub effect: Expression,
    pub cond_breakup: Expression,
    pub temp_breakup: Expression,
}

/// A parsed PDDL domain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Domain {
    pub name: String,
    /// Requirement flags without their leading colon.
    pub requirements: Vec<String>,
    pub types: Vec<TypePair>,
    pub constants: Vec<ConstantGroup>,
    pub predicates: Vec<PredicateDecl>,
    pub functions: Vec<Function>,
    pub actions: Vec<Action>,
}

/// A parsed PDDL problem.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Problem {
    pub name: String,
    pub domain_name: String,
    pub objects: Vec<ConstantGroup>,
    pub init: Vec<Expression>,
    pub goal: Expression,
}

fn write_params(f: &mut fmt::Formatter<'_>, params: &[TypedName]) -> fmt::Result {
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "?{}", p.name)?;
        if !p.ty.is_empty() {
            write!(f, " - {}", p.ty)?;
        }
    }
    Ok(())
}

impl fmt::Display for ConstantGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))?;
        if !self.ty.is_empty() {
            write!(f, " - {}", self.ty)?;
        }
        Ok(())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let durative = !self.duration.is_absent();
        let header = if durative { ":durative-action" } else { ":action" };
        writeln!(f, "  ({header} {}", self.name)?;
        write!(f, "    :parameters (")?;
        write_params(f, &self.action_params)?;
        writeln!(f, ")")?;
        if durative {
            writeln!(f, "    :duration {}", self.duration)?;
            writeln!(f, "    :condition {}", self.precondition)?;
        } else if !self.precondition.is_absent() {
            writeln!(f, "    :precondition {}", self.precondition)?;
        }
        if !self.effect.is_absent() {
            writeln!(f, "    :effect {}", self.effect)?;
        }
        if !self.cond_breakup.is_absent() {
            writeln!(f, "    :cond-breakup {}", self.cond_breakup)?;
        }
        if !self.temp_breakup.is_absent() {
            writeln!(f, "    :temp-breakup {}", self.temp_breakup)?;
        }
        write!(f, "  )")
    }
}

impl fmt::Display for Domain {
    /// Prints the domain back as PDDL text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(define (domain {})", self.name)?;
        if !self.requirements.is_empty() {
            write!(f, "  (:requirements")?;
            for r in &self.requirements {
                write!(f, " :{r}")?;
            }
            writeln!(f, ")")?;
        }
        if !self.types.is_empty() {
            write!(f, "  (:types")?;
            for t in &self.types {
                write!(f, " {}", t.name)?;
                if !t.supertype.is_empty() {
                    write!(f, " - {}", t.supertype)?;
                }
            }
            writeln!(f, ")")?;
        }
        if !self.constants.is_empty() {
            write!(f, "  (:constants")?;
            for group in &self.constants {
                write!(f, " {group}")?;
            }
            writeln!(f, ")")?;
        }
        if !self.predicates.is_empty() {
            write!(f, "  (:predicates")?;
            for p in &self.predicates {
                write!(f, " ({}", p.name)?;
                if !p.params.is_empty() {
                    f.write_str(" ")?;
                    write_params(f, &p.params)?;
                }
                write!(f, ")")?;
            }
            writeln!(f, ")")?;
        }
        if !self.functions.is_empty() {
            write!(f, "  (:functions")?;
            for func in &self.functions {
                write!(f, " ({}", func.name)?;
                if !func.object_params.is_empty() {
                    f.write_str(" ")?;
                    write_params(f, &func.object_params)?;
                }
                write!(f, ")")?;
            }
            writeln!(f, ")")?;
        }
        for action in &self.actions {
            writeln!(f, "{action}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Problem {
    /// Prints the problem back as PDDL text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(define (problem {})", self.name)?;
        writeln!(f, "  (:domain {})", self.domain_name)?;
        if !self.objects.is_empty() {
            write!(f, "  (:objects")?;
            for group in &self.objects {
                write!(f, " {group}")?;
            }
            writeln!(f, ")")?;
        }
        write!(f, "  (:init")?;
        for fact in &self.init {
            write!(f, " {fact}")?;
        }
        writeln!(f, ")")?;
        writeln!(f, "  (:goal {})", self.goal)?;
        write!(f, ")")
    }
}
