//! The class/individual bridge: the join point between the triple store and
//! the taxonomy.
//!
//! Asserted `rdf:type` facts name an individual's most specific classes,
//! while dispositions, parts, and affordances attach higher in the taxonomy.
//! Going up (individual to classes) therefore generalizes each asserted type
//! to its full ancestor set, and going down (class to individuals) descends
//! to every subclass before re-querying the store for typed members.

use ontogoal_model::{
    ClassSet, DlEngine, DlError, FactSource, GoalError, IndividualSet, Iri, Term, TriplePattern,
    Variable,
};

/// Flatten "no such concept" into the empty set: absence of data is a valid
/// outcome under set-union semantics. Other DL failures propagate.
pub(crate) fn absorb_unknown(result: Result<ClassSet, DlError>) -> Result<ClassSet, GoalError> {
    match result {
        Ok(set) => Ok(set),
        Err(DlError::UnknownConcept(_)) => Ok(ClassSet::default()),
        Err(other) => Err(other.into()),
    }
}

pub(crate) struct Bridge<'a, S, D> {
    pub store: &'a S,
    pub dl: &'a D,
    /// Identifiers known to be classes. Immutable after reasoner
    /// construction.
    pub classes: &'a ClassSet,
    pub rdf_type: &'a Iri,
}

impl<S: FactSource, D: DlEngine> Bridge<'_, S, D> {
    /// The set of classes an entity belongs to.
    ///
    /// A known class is its own class set, so classes can play the role an
    /// individual normally fills. For an individual, every asserted type is
    /// generalized to its ancestors and the results are unioned; an entity
    /// with no type assertions yields the empty set.
    pub fn individual_to_classes(&self, entity: &Iri) -> Result<ClassSet, GoalError> {
        if self.classes.contains(entity) {
            let mut only = ClassSet::default();
            only.insert(entity.clone());
            return Ok(only);
        }

        let var = Variable::new("c");
        let pattern = TriplePattern::new(
            Term::Bound(entity.clone()),
            self.rdf_type.clone(),
            Term::Unbound(var.clone()),
        );
        let mut asserted: Vec<Iri> = Vec::new();
        self.store.query(&pattern, &mut |binding| {
            if let Some(class) = binding.get(&var) {
                asserted.push(class.clone());
            }
        });

        let mut out = ClassSet::default();
        for class in &asserted {
            out.extend(absorb_unknown(self.dl.superclasses_of(class))?);
        }
        Ok(out)
    }

    /// The set of individuals belonging to a class.
    ///
    /// An entity that is not a known class is treated as already being an
    /// individual and returned as a singleton. For a class, every subclass
    /// (reflexive) is re-queried in the store for typed members; a class
    /// with no members yields the empty set.
    pub fn class_to_individuals(&self, entity: &Iri) -> Result<IndividualSet, GoalError> {
        if !self.classes.contains(entity) {
            let mut only = IndividualSet::default();
            only.insert(entity.clone());
            return Ok(only);
        }

        let subclasses = absorb_unknown(self.dl.subclasses_of(entity))?;
        let var = Variable::new("x");
        let mut out = IndividualSet::default();
        for subclass in &subclasses {
            let pattern = TriplePattern::new(
                Term::Unbound(var.clone()),
                self.rdf_type.clone(),
                Term::Bound(subclass.clone()),
            );
            self.store.query(&pattern, &mut |binding| {
                if let Some(individual) = binding.get(&var) {
                    out.insert(individual.clone());
                }
            });
        }
        Ok(out)
    }
}
