//! Relation dispatch: the registry mapping relation identifiers to
//! evaluation strategies.
//!
//! The table is built once when a reasoner is constructed and is read-only
//! afterwards. Strategies are a tagged enum rather than stored closures, so
//! evaluation pattern-matches on the variant.

use ahash::AHashMap;

use ontogoal_model::{vocab, GoalError, Iri};

/// Which DL lookup pair a simple binary relation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryLookup {
    Disposition,
    Part,
    Constituent,
}

/// Evaluation strategy for a registered relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Single binary relation answered by the generic simple-goal algorithm.
    SimpleBinary { lookup: BinaryLookup },
    /// Declared inverse of a simple binary relation: answered by swapping
    /// subject and object, then evaluating the forward relation. The swap
    /// happens before the binding pattern is classified.
    InverseBinary { forward: Iri, lookup: BinaryLookup },
    /// Individual/class membership, answered by the class/individual bridge
    /// in both directions.
    InstanceOf,
    /// Taxonomy walk: superclasses of the subject or subclasses of the
    /// object, with no individual bridging.
    SubclassOf,
    /// The ternary tool/task/patient matching relation.
    UseMatch,
}

impl Strategy {
    pub fn arity(&self) -> usize {
        match self {
            Strategy::UseMatch => 3,
            _ => 2,
        }
    }
}

/// Immutable registry from relation identifier to strategy.
#[derive(Debug, Default)]
pub struct RelationTable {
    entries: AHashMap<Iri, Strategy>,
}

impl RelationTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard disposition/part/constituent/affordance vocabulary.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register_simple_pair(
            Iri::from(vocab::HAS_DISPOSITION),
            Iri::from(vocab::IS_DISPOSITION_OF),
            BinaryLookup::Disposition,
        );
        table.register_simple_pair(
            Iri::from(vocab::HAS_PART),
            Iri::from(vocab::IS_PART_OF),
            BinaryLookup::Part,
        );
        table.register_simple_pair(
            Iri::from(vocab::HAS_CONSTITUENT),
            Iri::from(vocab::IS_CONSTITUENT_OF),
            BinaryLookup::Constituent,
        );
        table.register(Iri::from(vocab::IS_INSTANCE_OF), Strategy::InstanceOf);
        table.register(Iri::from(vocab::IS_SUBCLASS_OF), Strategy::SubclassOf);
        table.register(Iri::from(vocab::USE_MATCH), Strategy::UseMatch);
        table
    }

    pub fn register(&mut self, relation: Iri, strategy: Strategy) {
        self.entries.insert(relation, strategy);
    }

    /// Register a forward simple binary relation together with its declared
    /// inverse.
    pub fn register_simple_pair(&mut self, forward: Iri, inverse: Iri, lookup: BinaryLookup) {
        self.register(forward.clone(), Strategy::SimpleBinary { lookup });
        self.register(inverse, Strategy::InverseBinary { forward, lookup });
    }

    pub fn dispatch(&self, relation: &Iri) -> Result<&Strategy, GoalError> {
        self.entries
            .get(relation)
            .ok_or_else(|| GoalError::UnknownRelation(relation.clone()))
    }

    pub fn relations(&self) -> impl Iterator<Item = &Iri> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
