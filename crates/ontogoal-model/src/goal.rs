//! Host-facing goal shapes and the single-triple query pattern.

use serde::{Deserialize, Serialize};

use crate::term::{Iri, Term};

/// A raw goal argument as handed over by the host.
///
/// The host has already split the literal into relation and arguments, but
/// names are still in their external form: possibly quoted, possibly
/// prefixed. Normalization turns a `GoalArg` into a [`Term`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum GoalArg {
    /// An unbound query variable, named without the `?` sigil.
    Variable(String),
    /// A concept/individual name in external form.
    Name(String),
}

impl GoalArg {
    pub fn variable(name: impl Into<String>) -> Self {
        GoalArg::Variable(name.into())
    }

    pub fn name(raw: impl Into<String>) -> Self {
        GoalArg::Name(raw.into())
    }
}

/// A single relation literal with 2 or 3 arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Relation name in external form (possibly prefixed).
    pub relation: String,
    pub args: Vec<GoalArg>,
}

impl Goal {
    pub fn binary(relation: impl Into<String>, subject: GoalArg, object: GoalArg) -> Self {
        Self {
            relation: relation.into(),
            args: vec![subject, object],
        }
    }

    pub fn ternary(
        relation: impl Into<String>,
        task: GoalArg,
        instrument: GoalArg,
        patient: GoalArg,
    ) -> Self {
        Self {
            relation: relation.into(),
            args: vec![task, instrument, patient],
        }
    }
}

/// The one conjunctive pattern shape the evaluator ever issues: a single
/// triple with a bound predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriplePattern {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl TriplePattern {
    pub fn new(subject: Term, predicate: Iri, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}
