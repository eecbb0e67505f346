//! Solution bindings: variable-to-identifier assignments.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::term::{Iri, Variable};

/// One solution to a goal: a mapping from variables to identifiers.
///
/// A binding is produced fresh per result and handed to the caller's push
/// callback; the evaluator never retains or reuses it. The empty binding is
/// meaningful: it signals "the fully-bound fact holds" without binding any
/// variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binding {
    slots: AHashMap<Variable, Iri>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: Variable, value: Iri) {
        self.slots.insert(var, value);
    }

    pub fn get(&self, var: &Variable) -> Option<&Iri> {
        self.slots.get(var)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Iri)> {
        self.slots.iter()
    }
}
