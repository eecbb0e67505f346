//! Collaborator traits consumed by the goal evaluator.
//!
//! These are abstract contracts, not wire formats: the evaluator only ever
//! issues single-triple patterns against the fact store and synchronous,
//! finite-result lookups against the DL engine.

use ahash::AHashSet;

use crate::binding::Binding;
use crate::error::{DlError, ResolveError};
use crate::goal::TriplePattern;
use crate::term::Iri;

/// A transient set of class identifiers. Never persisted.
pub type ClassSet = AHashSet<Iri>;

/// A transient set of individual identifiers. Never persisted.
pub type IndividualSet = AHashSet<Iri>;

/// Expands a possibly-prefixed external name to a fully-qualified identifier.
pub trait NameResolver {
    fn resolve(&self, raw: &str) -> Result<Iri, ResolveError>;
}

/// A store of asserted facts, queried one triple pattern at a time.
///
/// Matches are delivered through a push-style callback, once per match, in
/// unspecified order. The sequence is finite; exhaustion terminates the call.
pub trait FactSource {
    fn query(&self, pattern: &TriplePattern, push: &mut dyn FnMut(Binding));
}

/// A description-logic classification engine over a loaded taxonomy.
///
/// All lookups are synchronous and finite. Each fails with
/// [`DlError::UnknownConcept`] when given a name outside the loaded ontology.
/// The returned sets contain fully-qualified identifiers.
pub trait DlEngine {
    /// One-time load of the DL knowledge base. Must complete before any
    /// lookup; idempotent if called again.
    fn initialize(&mut self) -> Result<(), DlError>;

    /// All ancestor classes of `class`, including `class` itself.
    fn superclasses_of(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// All descendant classes of `class`, including `class` itself.
    fn subclasses_of(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Disposition classes borne by objects of `class`.
    fn dispositions_of(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Object classes bearing the disposition `class`.
    fn bearers_of_disposition(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Part classes of objects of `class`.
    fn part_types_of(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Object classes having a part of type `class`.
    fn wholes_with_part(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Constituent classes of objects of `class`.
    fn constituents_of(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Object classes having a constituent of type `class`.
    fn bearers_of_constituent(&self, class: &Iri) -> Result<ClassSet, DlError>;

    /// Object classes a tool of `tool_class` can perform `task` on.
    fn patients_for_tool_task(&self, task: &Iri, tool_class: &Iri)
        -> Result<ClassSet, DlError>;

    /// Tool classes that can perform `task` on objects of `patient_class`.
    fn tools_for_task_on_patient(
        &self,
        task: &Iri,
        patient_class: &Iri,
    ) -> Result<ClassSet, DlError>;
}
