//! Shared vocabulary for the Ontogoal knowledge base.
//!
//! A knowledge base here is split across two heterogeneous stores:
//!
//! - a **triple/graph store** holding asserted facts and `rdf:type`
//!   class-membership facts, and
//! - a **description-logic taxonomy engine** holding the class hierarchy and
//!   derived class-level facts (dispositions, part/constituent structure,
//!   tool-task affordances).
//!
//! This crate defines the types both sides exchange (`Iri`, `Term`,
//! `Binding`, `TriplePattern`, `Goal`) and the narrow collaborator traits
//! the goal evaluator consumes (`FactSource`, `DlEngine`, `NameResolver`).
//! It deliberately contains no evaluation logic and no storage.

pub mod binding;
pub mod error;
pub mod goal;
pub mod term;
pub mod traits;
pub mod vocab;

pub use binding::Binding;
pub use error::{DlError, GoalError, ResolveError};
pub use goal::{Goal, GoalArg, TriplePattern};
pub use term::{Iri, Term, Variable};
pub use traits::{ClassSet, DlEngine, FactSource, IndividualSet, NameResolver};
