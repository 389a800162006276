//! Expression AST for PDDL formulas.
//!
//! An [`Expression`] pairs a semantic classification tag with one of three
//! payload shapes: a leaf atom, a predicate-shaped compound, or a
//! quantified formula. The tag is redundant for atoms but essential for
//! compounds, where `and`, `<=` and an ordinary predicate application all
//! share the [`Predicate`] payload with different meanings. Both are kept.

use std::fmt;

use super::TypedName;

/// Semantic classification of an [`Expression`], fixed at parse time by
/// the compound's leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpressionKind {
    /// Logical connective: `and`, `or`, `not`, `imply`.
    Bool,
    /// Comparison of numeric expressions: `=`, `<`, `>`, `<=`, `>=`.
    NumericComp,
    /// Atomic predicate application.
    Predicate,
    /// Arithmetic: `+`, `-`, `*`, `/`.
    Numeric,
    /// Fluent update: `increase`, `decrease`, `assign`.
    NumericChange,
    /// Numeric literal leaf.
    Value,
    /// Leaf name or variable reference.
    Atom,
    /// Temporal qualifier inside a durative action.
    Durative,
    /// `forall` or `exists` formula.
    Quantified,
    /// Conditional effect: `when`.
    CondEffect,
    /// Placeholder for an absent optional expression.
    #[default]
    Unknown,
}

/// A predicate-shaped compound: a head word and argument expressions.
///
/// This is not necessarily a PDDL predicate; for a conjunction the
/// function is `and` and the arguments are the subformulae.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    /// Head word of the compound, as written (keywords lowercased).
    pub function: String,
    /// Argument expressions, or subformulae for connectives.
    pub arguments: Vec<Expression>,
}

/// A `forall`/`exists` formula with its bound variables.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantifiedFormula {
    /// `"forall"` or `"exists"`.
    pub quantifier: String,
    /// Variables bound by the quantifier; never empty.
    pub args: Vec<TypedName>,
    /// The formula quantified over.
    pub sub_expr: Expression,
}

/// Payload of an [`Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    /// A leaf: constant name, number text, or `?variable` (with the `?`).
    Atom(String),
    Predicate(Predicate),
    Quantified(Box<QuantifiedFormula>),
}

impl Default for ExpressionNode {
    fn default() -> Self {
        ExpressionNode::Atom(String::new())
    }
}

/// A parsed PDDL expression: classification tag plus payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub node: ExpressionNode,
}

impl Expression {
    pub(crate) fn atom(kind: ExpressionKind, text: impl Into<String>) -> Self {
        Expression {
            kind,
            node: ExpressionNode::Atom(text.into()),
        }
    }

    pub(crate) fn compound(
        kind: ExpressionKind,
        function: impl Into<String>,
        arguments: Vec<Expression>,
    ) -> Self {
        Expression {
            kind,
            node: ExpressionNode::Predicate(Predicate {
                function: function.into(),
                arguments,
            }),
        }
    }

    /// True when this expression stands for an absent optional section.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.kind == ExpressionKind::Unknown
    }
}

fn write_bindings(f: &mut fmt::Formatter<'_>, args: &[TypedName]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "?{}", arg.name)?;
        if !arg.ty.is_empty() {
            write!(f, " - {}", arg.ty)?;
        }
    }
    Ok(())
}

impl fmt::Display for Expression {
    /// Prints the expression back as an s-expression.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            ExpressionNode::Atom(a) => f.write_str(a),
            ExpressionNode::Predicate(p) => {
                write!(f, "({}", p.function)?;
                for arg in &p.arguments {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            ExpressionNode::Quantified(q) => {
                write!(f, "({} (", q.quantifier)?;
                write_bindings(f, &q.args)?;
                write!(f, ") {})", q.sub_expr)
            }
        }
    }
}
