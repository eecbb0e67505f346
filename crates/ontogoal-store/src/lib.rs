//! In-memory triple store for asserted facts.
//!
//! The store holds `subject predicate object` triples over interned IRIs,
//! indexed in both directions so that a single triple pattern with one
//! variable resolves to a set lookup:
//!
//! - forward: `(subject, predicate) -> {objects}`
//! - backward: `(predicate, object) -> {subjects}`
//!
//! Matches are delivered through a push callback, once per match, in
//! unspecified order, as the [`FactSource`] contract requires.

mod interner;
pub mod ntriples;
pub mod prefix;

use ahash::AHashMap;
use ahash::AHashSet;

use ontogoal_model::{Binding, FactSource, Iri, Term, TriplePattern};

pub use interner::{Interner, StrId};
pub use ntriples::{load_ntriples, NtriplesError};
pub use prefix::PrefixMap;

/// An in-memory fact graph with forward and backward triple indexes.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    interner: Interner,
    /// `(subject, predicate) -> {objects}`
    forward: AHashMap<(StrId, StrId), AHashSet<StrId>>,
    /// `(predicate, object) -> {subjects}`
    backward: AHashMap<(StrId, StrId), AHashSet<StrId>>,
    len: usize,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, subject: &str, predicate: &str, object: &str) -> bool {
        let s = self.interner.intern(subject);
        let p = self.interner.intern(predicate);
        let o = self.interner.intern(object);
        let fresh = self.forward.entry((s, p)).or_default().insert(o);
        if fresh {
            self.backward.entry((p, o)).or_default().insert(s);
            self.len += 1;
        }
        fresh
    }

    /// Number of distinct triples.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_triple(&self, subject: &str, predicate: &str, object: &str) -> bool {
        let (Some(s), Some(p), Some(o)) = (
            self.interner.id_of(subject),
            self.interner.id_of(predicate),
            self.interner.id_of(object),
        ) else {
            return false;
        };
        self.forward
            .get(&(s, p))
            .is_some_and(|objects| objects.contains(&o))
    }

    fn objects(&self, s: StrId, p: StrId) -> impl Iterator<Item = StrId> + '_ {
        self.forward
            .get(&(s, p))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    fn subjects(&self, p: StrId, o: StrId) -> impl Iterator<Item = StrId> + '_ {
        self.backward
            .get(&(p, o))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}

impl FactSource for MemoryGraph {
    fn query(&self, pattern: &TriplePattern, push: &mut dyn FnMut(Binding)) {
        let Some(p) = self.interner.id_of(pattern.predicate.as_str()) else {
            return;
        };
        match (&pattern.subject, &pattern.object) {
            (Term::Bound(s), Term::Unbound(var)) => {
                let Some(s) = self.interner.id_of(s.as_str()) else {
                    return;
                };
                for o in self.objects(s, p) {
                    let mut binding = Binding::new();
                    binding.set(var.clone(), Iri::from(self.interner.lookup(o)));
                    push(binding);
                }
            }
            (Term::Unbound(var), Term::Bound(o)) => {
                let Some(o) = self.interner.id_of(o.as_str()) else {
                    return;
                };
                for s in self.subjects(p, o) {
                    let mut binding = Binding::new();
                    binding.set(var.clone(), Iri::from(self.interner.lookup(s)));
                    push(binding);
                }
            }
            (Term::Bound(s), Term::Bound(o)) => {
                if self.has_triple(s.as_str(), pattern.predicate.as_str(), o.as_str()) {
                    push(Binding::new());
                }
            }
            (Term::Unbound(s_var), Term::Unbound(o_var)) => {
                for (&(s, fact_p), objects) in &self.forward {
                    if fact_p != p {
                        continue;
                    }
                    for &o in objects {
                        let mut binding = Binding::new();
                        binding.set(s_var.clone(), Iri::from(self.interner.lookup(s)));
                        binding.set(o_var.clone(), Iri::from(self.interner.lookup(o)));
                        push(binding);
                    }
                }
            }
        }
    }
}
