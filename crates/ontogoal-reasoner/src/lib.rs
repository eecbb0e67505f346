//! Goal-driven relation evaluator over a split knowledge base.
//!
//! Given a relation name and zero, one, or two bound arguments, the
//! evaluator decides which direction to query, bridges between individuals
//! and their classes, reconciles results from the triple store and the DL
//! taxonomy engine, and streams result bindings back to the caller through a
//! push callback.
//!
//! Control flow: a goal arrives, the term normalizer resolves each argument,
//! the relation dispatch table selects a strategy, the strategy calls into
//! the class/individual bridge and the DL engine, and results flow through
//! the solution emitter back to the caller.
//!
//! Evaluation is single-threaded and synchronous: each goal runs to
//! completion on the calling context. The relation table and the taxonomy
//! cache are built once at construction and read-only afterwards, so `&self`
//! evaluation can be shared freely.

mod bridge;
pub mod emit;
pub mod normalize;
pub mod relations;

use ontogoal_model::{
    vocab, Binding, ClassSet, DlEngine, FactSource, Goal, GoalError, IndividualSet, Iri,
    NameResolver, Term,
};

use bridge::{absorb_unknown, Bridge};
use emit::{emit_check, emit_values};
pub use relations::{BinaryLookup, RelationTable, Strategy};

/// How a binary goal's candidate sets are computed.
#[derive(Debug, Clone, Copy)]
enum BinaryEval {
    /// A simple relation with a DL lookup pair.
    Simple(BinaryLookup),
    /// Membership: the bridge itself is the lookup pair.
    InstanceOf,
    /// Taxonomy walk without individual bridging.
    SubclassOf,
}

pub struct GoalReasoner<S, D, R> {
    store: S,
    dl: D,
    resolver: R,
    /// Identifiers known to be classes: the subclasses of `owl:Thing`,
    /// captured once at construction.
    classes: ClassSet,
    table: RelationTable,
    rdf_type: Iri,
}

impl<S, D, R> GoalReasoner<S, D, R>
where
    S: FactSource,
    D: DlEngine,
    R: NameResolver,
{
    /// Build a reasoner with the standard relation table.
    ///
    /// Initializes the DL engine and captures the taxonomy cache; both
    /// happen exactly once, before any goal is evaluated.
    pub fn new(store: S, dl: D, resolver: R) -> Result<Self, GoalError> {
        Self::with_table(store, dl, resolver, RelationTable::standard())
    }

    pub fn with_table(
        store: S,
        mut dl: D,
        resolver: R,
        table: RelationTable,
    ) -> Result<Self, GoalError> {
        dl.initialize()?;
        let thing = Iri::from(vocab::OWL_THING);
        let classes = absorb_unknown(dl.subclasses_of(&thing))?;
        tracing::debug!(classes = classes.len(), relations = table.len(), "reasoner ready");
        Ok(Self {
            store,
            dl,
            resolver,
            classes,
            table,
            rdf_type: Iri::from(vocab::RDF_TYPE),
        })
    }

    pub fn relation_table(&self) -> &RelationTable {
        &self.table
    }

    /// Identifiers the reasoner treats as classes.
    pub fn known_classes(&self) -> &ClassSet {
        &self.classes
    }

    fn bridge(&self) -> Bridge<'_, S, D> {
        Bridge {
            store: &self.store,
            dl: &self.dl,
            classes: &self.classes,
            rdf_type: &self.rdf_type,
        }
    }

    /// The classes an entity belongs to (see the bridge for semantics).
    pub fn individual_to_classes(&self, entity: &Iri) -> Result<ClassSet, GoalError> {
        self.bridge().individual_to_classes(entity)
    }

    /// The individuals belonging to a class (see the bridge for semantics).
    pub fn class_to_individuals(&self, entity: &Iri) -> Result<IndividualSet, GoalError> {
        self.bridge().class_to_individuals(entity)
    }

    /// Evaluate a single relation literal, pushing one binding per solution.
    ///
    /// Returns an error only on malformed goals: unknown relation, wrong
    /// arity, underspecified binding pattern, or an unbound task. A
    /// well-formed goal with no solutions returns `Ok(())` having pushed
    /// nothing. Bindings pushed before a late failure remain delivered.
    pub fn evaluate(
        &self,
        goal: &Goal,
        push: &mut dyn FnMut(Binding),
    ) -> Result<(), GoalError> {
        let relation = normalize::resolve_name(&goal.relation, &self.resolver)?;
        let strategy = self.table.dispatch(&relation)?;
        let expected = strategy.arity();
        if goal.args.len() != expected {
            return Err(GoalError::ArityMismatch {
                relation,
                expected,
                found: goal.args.len(),
            });
        }

        // A declared inverse is answered by the forward relation with the
        // roles swapped; the swap precedes binding-pattern classification.
        let (relation, kind, swapped) = match strategy {
            Strategy::UseMatch => {
                let task = normalize::normalize(&goal.args[0], &self.resolver)?;
                let instrument = normalize::normalize(&goal.args[1], &self.resolver)?;
                let patient = normalize::normalize(&goal.args[2], &self.resolver)?;
                tracing::debug!(%relation, %task, %instrument, %patient, "checking goal");
                return self.eval_use_match(&relation, &task, &instrument, &patient, push);
            }
            Strategy::SimpleBinary { lookup } => (relation, BinaryEval::Simple(*lookup), false),
            Strategy::InverseBinary { forward, lookup } => {
                (forward.clone(), BinaryEval::Simple(*lookup), true)
            }
            Strategy::InstanceOf => (relation, BinaryEval::InstanceOf, false),
            Strategy::SubclassOf => (relation, BinaryEval::SubclassOf, false),
        };

        let mut subject = normalize::normalize(&goal.args[0], &self.resolver)?;
        let mut object = normalize::normalize(&goal.args[1], &self.resolver)?;
        if swapped {
            std::mem::swap(&mut subject, &mut object);
        }
        tracing::debug!(%relation, %subject, %object, "checking goal");
        self.eval_binary(kind, &relation, &subject, &object, push)
    }

    // ------------------------------------------------------------------
    // Binary goals
    // ------------------------------------------------------------------

    fn eval_binary(
        &self,
        kind: BinaryEval,
        relation: &Iri,
        subject: &Term,
        object: &Term,
        push: &mut dyn FnMut(Binding),
    ) -> Result<(), GoalError> {
        match (subject, object) {
            (Term::Unbound(_), Term::Unbound(_)) => {
                Err(GoalError::UnderspecifiedGoal(relation.clone()))
            }
            (Term::Bound(subject), Term::Unbound(var)) => {
                let values = self.object_values(kind, subject)?;
                emit_values(var, values, push);
                Ok(())
            }
            (Term::Unbound(var), Term::Bound(object)) => {
                let candidates = self.subject_candidates(kind, object)?;
                emit_values(var, candidates, push);
                Ok(())
            }
            (Term::Bound(subject), Term::Bound(object)) => {
                let candidates = self.subject_candidates(kind, object)?;
                emit_check(candidates.contains(subject), push);
                Ok(())
            }
        }
    }

    /// Pattern (bound, unbound): values related to the subject, in the
    /// object direction.
    fn object_values(&self, kind: BinaryEval, subject: &Iri) -> Result<ClassSet, GoalError> {
        match kind {
            BinaryEval::Simple(lookup) => {
                let classes = self.bridge().individual_to_classes(subject)?;
                let mut values = ClassSet::default();
                for class in &classes {
                    values.extend(self.related_values(lookup, class)?);
                }
                Ok(values)
            }
            BinaryEval::InstanceOf => self.bridge().individual_to_classes(subject),
            BinaryEval::SubclassOf => absorb_unknown(self.dl.superclasses_of(subject)),
        }
    }

    /// Pattern (unbound, bound) and the fully-bound membership check: the
    /// candidate subjects for a bound object.
    fn subject_candidates(
        &self,
        kind: BinaryEval,
        object: &Iri,
    ) -> Result<IndividualSet, GoalError> {
        match kind {
            BinaryEval::Simple(lookup) => {
                let seeds = self.bridge().individual_to_classes(object)?;
                let mut bearer_classes = ClassSet::default();
                for class in &seeds {
                    bearer_classes.extend(self.related_bearers(lookup, class)?);
                }
                let mut individuals = IndividualSet::default();
                for class in &bearer_classes {
                    individuals.extend(self.bridge().class_to_individuals(class)?);
                }
                Ok(individuals)
            }
            BinaryEval::InstanceOf => self.bridge().class_to_individuals(object),
            BinaryEval::SubclassOf => absorb_unknown(self.dl.subclasses_of(object)),
        }
    }

    /// Object-direction DL lookup for a simple relation.
    fn related_values(&self, lookup: BinaryLookup, class: &Iri) -> Result<ClassSet, GoalError> {
        absorb_unknown(match lookup {
            BinaryLookup::Disposition => self.dl.dispositions_of(class),
            BinaryLookup::Part => self.dl.part_types_of(class),
            BinaryLookup::Constituent => self.dl.constituents_of(class),
        })
    }

    /// Subject-direction DL lookup for a simple relation.
    fn related_bearers(&self, lookup: BinaryLookup, class: &Iri) -> Result<ClassSet, GoalError> {
        absorb_unknown(match lookup {
            BinaryLookup::Disposition => self.dl.bearers_of_disposition(class),
            BinaryLookup::Part => self.dl.wholes_with_part(class),
            BinaryLookup::Constituent => self.dl.bearers_of_constituent(class),
        })
    }

    // ------------------------------------------------------------------
    // Ternary tool-use-match goals
    // ------------------------------------------------------------------

    fn eval_use_match(
        &self,
        relation: &Iri,
        task: &Term,
        instrument: &Term,
        patient: &Term,
        push: &mut dyn FnMut(Binding),
    ) -> Result<(), GoalError> {
        let Term::Bound(task) = task else {
            return Err(GoalError::TaskNotSpecified);
        };

        match (instrument, patient) {
            (Term::Unbound(_), Term::Unbound(_)) => {
                Err(GoalError::UnderspecifiedGoal(relation.clone()))
            }
            (Term::Bound(instrument), Term::Unbound(var)) => {
                let tool_classes = self.bridge().individual_to_classes(instrument)?;
                let mut patient_classes = ClassSet::default();
                for class in &tool_classes {
                    patient_classes
                        .extend(absorb_unknown(self.dl.patients_for_tool_task(task, class))?);
                }
                let mut individuals = IndividualSet::default();
                for class in &patient_classes {
                    individuals.extend(self.bridge().class_to_individuals(class)?);
                }
                emit_values(var, individuals, push);
                Ok(())
            }
            (instrument, Term::Bound(patient)) => {
                let patient_classes = self.bridge().individual_to_classes(patient)?;
                let mut tool_classes = ClassSet::default();
                for class in &patient_classes {
                    tool_classes
                        .extend(absorb_unknown(self.dl.tools_for_task_on_patient(task, class))?);
                }
                let mut individuals = IndividualSet::default();
                for class in &tool_classes {
                    individuals.extend(self.bridge().class_to_individuals(class)?);
                }
                match instrument {
                    Term::Unbound(var) => emit_values(var, individuals, push),
                    Term::Bound(instrument) => {
                        emit_check(individuals.contains(instrument), push);
                    }
                }
                Ok(())
            }
        }
    }
}
