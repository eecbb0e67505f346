//! Identifiers, variables, and the bound/unbound term split.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully-qualified identifier for a concept, individual, or relation.
///
/// Conceptually a URI. Equality is by string value; the value is assumed to
/// already be normalized (prefix expansion happens in the name resolver,
/// before an `Iri` is ever constructed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment/last path segment, for compact display.
    pub fn local_name(&self) -> &str {
        self.0.rsplit(['#', '/']).next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A query variable name, without any leading `?` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A normalized query argument.
///
/// The tag is decided once, when the raw argument is normalized, and never
/// changes afterwards. All call sites pattern-match on the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Term {
    Bound(Iri),
    Unbound(Variable),
}

impl Term {
    pub fn is_unbound(&self) -> bool {
        matches!(self, Term::Unbound(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Bound(iri) => Some(iri),
            Term::Unbound(_) => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Bound(_) => None,
            Term::Unbound(var) => Some(var),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Bound(iri) => iri.fmt(f),
            Term::Unbound(var) => var.fmt(f),
        }
    }
}
