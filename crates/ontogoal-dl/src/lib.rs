//! In-memory taxonomy engine.
//!
//! [`TaxonomyEngine`] is a reference implementation of the
//! [`DlEngine`](ontogoal_model::DlEngine) contract: a class/subclass
//! hierarchy with class-level fact tables for dispositions, part types,
//! constituents, and tool-task affordances.
//!
//! Declarations accumulate first; `initialize` then computes the
//! reflexive-transitive subclass closure in both directions. Re-initializing
//! rebuilds the closure from the stored declarations, so the call is
//! idempotent and doubles as a full reload after new declarations.
//!
//! Fact lookups generalize along the hierarchy: a fact attached to a class
//! is visible from every subclass (an engine queried for the dispositions of
//! `DrinkingCup` sees facts asserted on `Container`), and the inverted
//! direction descends (the bearers of `Containment` include classes asserted
//! with any of its subclasses).

pub mod onto;

use ahash::{AHashMap, AHashSet};

use ontogoal_model::{vocab, ClassSet, DlEngine, DlError, Iri};

pub use onto::{parse_onto, OntoDecl, OntoLoadError, OntoParseError};

// ============================================================================
// Class-level binary fact tables
// ============================================================================

/// A class-to-class fact table with its inverted index.
#[derive(Debug, Default, Clone)]
struct BinaryFacts {
    /// bearer class -> value classes
    forward: AHashMap<Iri, AHashSet<Iri>>,
    /// value class -> bearer classes
    inverse: AHashMap<Iri, AHashSet<Iri>>,
}

impl BinaryFacts {
    fn insert(&mut self, bearer: Iri, value: Iri) {
        self.inverse
            .entry(value.clone())
            .or_default()
            .insert(bearer.clone());
        self.forward.entry(bearer).or_default().insert(value);
    }

    /// Union of forward entries over a set of classes.
    fn values_over<'a>(&self, classes: impl Iterator<Item = &'a Iri>) -> ClassSet {
        let mut out = ClassSet::default();
        for class in classes {
            if let Some(values) = self.forward.get(class) {
                out.extend(values.iter().cloned());
            }
        }
        out
    }

    /// Union of inverted entries over a set of classes.
    fn bearers_over<'a>(&self, classes: impl Iterator<Item = &'a Iri>) -> ClassSet {
        let mut out = ClassSet::default();
        for class in classes {
            if let Some(bearers) = self.inverse.get(class) {
                out.extend(bearers.iter().cloned());
            }
        }
        out
    }
}

/// One declared tool-task affordance: a tool of `tool` can perform `task`
/// on objects of `patient`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Affordance {
    task: Iri,
    tool: Iri,
    patient: Iri,
}

// ============================================================================
// Engine
// ============================================================================

#[derive(Debug, Default)]
pub struct TaxonomyEngine {
    /// Every class mentioned in any declaration, plus `owl:Thing`.
    classes: AHashSet<Iri>,
    /// Direct subclass -> superclass edges.
    parents: AHashMap<Iri, AHashSet<Iri>>,
    dispositions: BinaryFacts,
    parts: BinaryFacts,
    constituents: BinaryFacts,
    affordances: Vec<Affordance>,

    /// Reflexive-transitive closures, rebuilt by `initialize`.
    ancestors: AHashMap<Iri, ClassSet>,
    descendants: AHashMap<Iri, ClassSet>,
    initialized: bool,
}

impl TaxonomyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn touch_class(&mut self, class: &Iri) {
        if self.classes.insert(class.clone()) {
            self.initialized = false;
        }
    }

    pub fn declare_class(&mut self, class: Iri) {
        self.touch_class(&class);
    }

    /// Declare `sub` a direct subclass of `sup`. Both become known classes.
    pub fn declare_subclass(&mut self, sub: Iri, sup: Iri) {
        self.touch_class(&sub);
        self.touch_class(&sup);
        self.parents.entry(sub).or_default().insert(sup);
        self.initialized = false;
    }

    pub fn declare_disposition(&mut self, class: Iri, disposition: Iri) {
        self.touch_class(&class);
        self.touch_class(&disposition);
        self.dispositions.insert(class, disposition);
        self.initialized = false;
    }

    pub fn declare_part(&mut self, class: Iri, part: Iri) {
        self.touch_class(&class);
        self.touch_class(&part);
        self.parts.insert(class, part);
        self.initialized = false;
    }

    pub fn declare_constituent(&mut self, class: Iri, constituent: Iri) {
        self.touch_class(&class);
        self.touch_class(&constituent);
        self.constituents.insert(class, constituent);
        self.initialized = false;
    }

    pub fn declare_affordance(&mut self, task: Iri, tool: Iri, patient: Iri) {
        self.touch_class(&task);
        self.touch_class(&tool);
        self.touch_class(&patient);
        self.affordances.push(Affordance { task, tool, patient });
        self.initialized = false;
    }

    /// Number of known classes (after initialization this includes
    /// `owl:Thing`).
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    fn require_initialized(&self) -> Result<(), DlError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DlError::NotInitialized)
        }
    }

    fn require_class(&self, class: &Iri) -> Result<(), DlError> {
        if self.classes.contains(class) {
            Ok(())
        } else {
            Err(DlError::UnknownConcept(class.clone()))
        }
    }

    /// Reflexive ancestor set of a known class.
    fn ancestors_of(&self, class: &Iri) -> &ClassSet {
        // Closures cover every known class once initialized.
        &self.ancestors[class]
    }

    fn descendants_of(&self, class: &Iri) -> &ClassSet {
        &self.descendants[class]
    }

    /// Affordance entries match a queried task when the declared task is an
    /// ancestor of it: a tool declared for `Cutting` also serves any of its
    /// subtypes.
    fn task_matches(&self, declared: &Iri, queried_task: &Iri) -> bool {
        self.ancestors_of(queried_task).contains(declared)
    }
}

impl DlEngine for TaxonomyEngine {
    fn initialize(&mut self) -> Result<(), DlError> {
        let thing = Iri::from(vocab::OWL_THING);
        self.classes.insert(thing.clone());

        self.ancestors.clear();
        self.descendants.clear();

        // Reflexive-transitive ancestor closure, iterative to stay safe on
        // malformed (cyclic) inputs.
        let classes: Vec<Iri> = self.classes.iter().cloned().collect();
        for class in &classes {
            let mut seen = ClassSet::default();
            let mut stack = vec![class.clone()];
            while let Some(current) = stack.pop() {
                if !seen.insert(current.clone()) {
                    continue;
                }
                if let Some(parents) = self.parents.get(&current) {
                    stack.extend(parents.iter().cloned());
                }
            }
            // Everything is a subclass of the universal class.
            seen.insert(thing.clone());
            self.ancestors.insert(class.clone(), seen);
        }

        for class in &classes {
            self.descendants
                .entry(class.clone())
                .or_default()
                .insert(class.clone());
        }
        for (class, ancestors) in &self.ancestors {
            for ancestor in ancestors {
                self.descendants
                    .entry(ancestor.clone())
                    .or_default()
                    .insert(class.clone());
            }
        }

        self.initialized = true;
        Ok(())
    }

    fn superclasses_of(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self.ancestors_of(class).clone())
    }

    fn subclasses_of(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self.descendants_of(class).clone())
    }

    fn dispositions_of(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self.dispositions.values_over(self.ancestors_of(class).iter()))
    }

    fn bearers_of_disposition(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self
            .dispositions
            .bearers_over(self.descendants_of(class).iter()))
    }

    fn part_types_of(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self.parts.values_over(self.ancestors_of(class).iter()))
    }

    fn wholes_with_part(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self.parts.bearers_over(self.descendants_of(class).iter()))
    }

    fn constituents_of(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self
            .constituents
            .values_over(self.ancestors_of(class).iter()))
    }

    fn bearers_of_constituent(&self, class: &Iri) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(class)?;
        Ok(self
            .constituents
            .bearers_over(self.descendants_of(class).iter()))
    }

    fn patients_for_tool_task(
        &self,
        task: &Iri,
        tool_class: &Iri,
    ) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(task)?;
        self.require_class(tool_class)?;
        let tool_ancestors = self.ancestors_of(tool_class);
        let mut out = ClassSet::default();
        for entry in &self.affordances {
            if self.task_matches(&entry.task, task) && tool_ancestors.contains(&entry.tool) {
                out.insert(entry.patient.clone());
            }
        }
        Ok(out)
    }

    fn tools_for_task_on_patient(
        &self,
        task: &Iri,
        patient_class: &Iri,
    ) -> Result<ClassSet, DlError> {
        self.require_initialized()?;
        self.require_class(task)?;
        self.require_class(patient_class)?;
        let patient_ancestors = self.ancestors_of(patient_class);
        let mut out = ClassSet::default();
        for entry in &self.affordances {
            if self.task_matches(&entry.task, task) && patient_ancestors.contains(&entry.patient) {
                out.insert(entry.tool.clone());
            }
        }
        Ok(out)
    }
}
