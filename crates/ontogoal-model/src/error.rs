//! Error types shared across the workspace.

use thiserror::Error;

use crate::term::Iri;

/// Name resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown prefix in name `{0}`")]
    UnknownPrefix(String),
    #[error("empty name")]
    Empty,
}

/// Failures reported by a description-logic engine.
///
/// `UnknownConcept` is special: for set-union query semantics the absence of
/// a concept is a valid outcome, so the evaluator absorbs it as an empty
/// result set rather than aborting the goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DlError {
    #[error("unknown concept `{0}`")]
    UnknownConcept(Iri),
    #[error("ontology not initialized")]
    NotInitialized,
}

/// Failures surfaced to the caller of `evaluate`.
///
/// All of these abort the goal; bindings already pushed before the failure
/// remain delivered.
#[derive(Debug, Error)]
pub enum GoalError {
    #[error("cannot resolve name `{name}`: {source}")]
    UnresolvableName {
        name: String,
        #[source]
        source: ResolveError,
    },
    #[error("unknown relation `{0}`")]
    UnknownRelation(Iri),
    #[error("relation `{relation}` takes {expected} arguments, goal has {found}")]
    ArityMismatch {
        relation: Iri,
        expected: usize,
        found: usize,
    },
    #[error("at least one argument of `{0}` must be bound")]
    UnderspecifiedGoal(Iri),
    #[error("the task argument of a useMatch goal must be bound")]
    TaskNotSpecified,
    #[error(transparent)]
    Dl(#[from] DlError),
}
