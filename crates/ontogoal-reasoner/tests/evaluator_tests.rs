//! Behavior tests for the goal evaluator, wired to the in-memory store and
//! taxonomy engine.

use ontogoal_dl::TaxonomyEngine;
use ontogoal_model::{vocab, Binding, Goal, GoalArg, GoalError, Iri, Variable};
use ontogoal_reasoner::GoalReasoner;
use ontogoal_store::{MemoryGraph, PrefixMap};

const TAXONOMY: &str = r#"
# cup scenario: Containment is asserted on two distinct ancestors of
# DrinkingCup, so results must still be deduplicated
subclass dfl:Container dfl:PhysicalObject
subclass dfl:Crockery dfl:PhysicalObject
subclass dfl:DrinkingCup dfl:Container
subclass dfl:DrinkingCup dfl:Crockery
subclass dfl:EspressoCup dfl:DrinkingCup
disposition dfl:Container dfl:Containment
disposition dfl:Crockery dfl:Containment
class dfl:Rollability
part dfl:DrinkingCup dfl:Handle

# cutting scenario
subclass dfl:Knife dfl:CuttingTool
subclass dfl:Apple dfl:Cuttable
affordance dfl:Cutting dfl:Knife dfl:Cuttable
"#;

fn dfl(local: &str) -> Iri {
    Iri::new(format!("{}{}", vocab::NS_DFL, local))
}

fn reasoner() -> GoalReasoner<MemoryGraph, TaxonomyEngine, PrefixMap> {
    let resolver = PrefixMap::standard();
    let dl = TaxonomyEngine::from_onto(TAXONOMY, &resolver).expect("taxonomy");

    let mut graph = MemoryGraph::new();
    graph.insert(dfl("Cup1").as_str(), vocab::RDF_TYPE, dfl("DrinkingCup").as_str());
    graph.insert(dfl("Cup2").as_str(), vocab::RDF_TYPE, dfl("EspressoCup").as_str());
    graph.insert(dfl("Apple1").as_str(), vocab::RDF_TYPE, dfl("Apple").as_str());
    graph.insert(dfl("Knife1").as_str(), vocab::RDF_TYPE, dfl("Knife").as_str());
    // An individual whose asserted type the taxonomy has never heard of.
    graph.insert(dfl("Mystery1").as_str(), vocab::RDF_TYPE, dfl("MysteryClass").as_str());

    GoalReasoner::new(graph, dl, resolver).expect("reasoner")
}

fn solutions(
    reasoner: &GoalReasoner<MemoryGraph, TaxonomyEngine, PrefixMap>,
    goal: &Goal,
) -> Vec<Binding> {
    let mut out = Vec::new();
    reasoner.evaluate(goal, &mut |b| out.push(b)).expect("evaluate");
    out
}

fn bound_values(results: &[Binding], var: &str) -> Vec<Iri> {
    let var = Variable::new(var);
    let mut values: Vec<Iri> = results
        .iter()
        .filter_map(|b| b.get(&var).cloned())
        .collect();
    values.sort();
    values
}

// ----------------------------------------------------------------------
// Simple binary goals
// ----------------------------------------------------------------------

#[test]
fn disposition_of_cup_is_pushed_exactly_once() {
    let r = reasoner();
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Cup1"),
        GoalArg::variable("d"),
    );
    let results = solutions(&r, &goal);
    // Containment is reachable through Container and through Crockery, and
    // must still show up once.
    assert_eq!(results.len(), 1);
    assert_eq!(bound_values(&results, "d"), vec![dfl("Containment")]);
}

#[test]
fn fully_bound_disposition_check() {
    let r = reasoner();
    let held = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Cup1"),
        GoalArg::name("dfl:Containment"),
    );
    let results = solutions(&r, &held);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_empty());

    let absent = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Cup1"),
        GoalArg::name("dfl:Rollability"),
    );
    assert!(solutions(&r, &absent).is_empty());
}

#[test]
fn bearer_enumeration_descends_to_subclass_members() {
    let r = reasoner();
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::variable("x"),
        GoalArg::name("dfl:Containment"),
    );
    let results = solutions(&r, &goal);
    // Cup2 is typed EspressoCup, two levels below Container.
    assert_eq!(bound_values(&results, "x"), vec![dfl("Cup1"), dfl("Cup2")]);
}

#[test]
fn membership_check_agrees_with_enumeration() {
    let r = reasoner();
    let enumerated = solutions(
        &r,
        &Goal::binary(
            "dfl:hasDisposition",
            GoalArg::variable("x"),
            GoalArg::name("dfl:Containment"),
        ),
    );
    for individual in bound_values(&enumerated, "x") {
        let check = Goal::binary(
            "dfl:hasDisposition",
            GoalArg::name(individual.as_str()),
            GoalArg::name("dfl:Containment"),
        );
        assert_eq!(solutions(&r, &check).len(), 1, "for {individual}");
    }
    // An individual outside the enumeration must fail the check.
    let apple_check = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Apple1"),
        GoalArg::name("dfl:Containment"),
    );
    assert!(solutions(&r, &apple_check).is_empty());
}

#[test]
fn a_class_can_fill_the_individual_role() {
    let r = reasoner();
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:DrinkingCup"),
        GoalArg::variable("d"),
    );
    assert_eq!(bound_values(&solutions(&r, &goal), "d"), vec![dfl("Containment")]);
}

#[test]
fn quoted_names_are_normalized() {
    let r = reasoner();
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("'dfl:Cup1'"),
        GoalArg::variable("d"),
    );
    assert_eq!(solutions(&r, &goal).len(), 1);
}

#[test]
fn part_goals_work_in_both_directions() {
    let r = reasoner();
    let parts = solutions(
        &r,
        &Goal::binary("dfl:hasPart", GoalArg::name("dfl:Cup1"), GoalArg::variable("p")),
    );
    assert_eq!(bound_values(&parts, "p"), vec![dfl("Handle")]);

    let wholes = solutions(
        &r,
        &Goal::binary("dfl:hasPart", GoalArg::variable("w"), GoalArg::name("dfl:Handle")),
    );
    assert_eq!(bound_values(&wholes, "w"), vec![dfl("Cup1"), dfl("Cup2")]);
}

// ----------------------------------------------------------------------
// Declared inverses
// ----------------------------------------------------------------------

#[test]
fn inverse_enumeration_matches_the_forward_relation() {
    let r = reasoner();
    let forward = solutions(
        &r,
        &Goal::binary(
            "dfl:hasDisposition",
            GoalArg::variable("x"),
            GoalArg::name("dfl:Containment"),
        ),
    );
    let inverse = solutions(
        &r,
        &Goal::binary(
            "dfl:isDispositionOf",
            GoalArg::name("dfl:Containment"),
            GoalArg::variable("x"),
        ),
    );
    assert_eq!(bound_values(&forward, "x"), bound_values(&inverse, "x"));
}

#[test]
fn inverse_fully_bound_check_matches_the_forward_relation() {
    let r = reasoner();
    let forward = Goal::binary(
        "dfl:hasPart",
        GoalArg::name("dfl:Cup1"),
        GoalArg::name("dfl:Handle"),
    );
    let inverse = Goal::binary(
        "dfl:isPartOf",
        GoalArg::name("dfl:Handle"),
        GoalArg::name("dfl:Cup1"),
    );
    assert_eq!(solutions(&r, &forward).len(), solutions(&r, &inverse).len());
    assert_eq!(solutions(&r, &inverse).len(), 1);
}

// ----------------------------------------------------------------------
// isInstanceOf / isSubclassOf
// ----------------------------------------------------------------------

#[test]
fn instance_of_enumerates_all_generalized_classes() {
    let r = reasoner();
    let classes = bound_values(
        &solutions(
            &r,
            &Goal::binary("dfl:isInstanceOf", GoalArg::name("dfl:Cup1"), GoalArg::variable("c")),
        ),
        "c",
    );
    for expected in ["DrinkingCup", "Container", "Crockery", "PhysicalObject"] {
        assert!(classes.contains(&dfl(expected)), "missing {expected}");
    }
    assert!(classes.contains(&Iri::from(vocab::OWL_THING)));
}

#[test]
fn instance_of_enumerates_members() {
    let r = reasoner();
    let members = bound_values(
        &solutions(
            &r,
            &Goal::binary(
                "dfl:isInstanceOf",
                GoalArg::variable("x"),
                GoalArg::name("dfl:DrinkingCup"),
            ),
        ),
        "x",
    );
    assert_eq!(members, vec![dfl("Cup1"), dfl("Cup2")]);
}

#[test]
fn instance_of_fully_bound_check() {
    let r = reasoner();
    let yes = Goal::binary(
        "dfl:isInstanceOf",
        GoalArg::name("dfl:Cup2"),
        GoalArg::name("dfl:Container"),
    );
    assert_eq!(solutions(&r, &yes).len(), 1);
    let no = Goal::binary(
        "dfl:isInstanceOf",
        GoalArg::name("dfl:Apple1"),
        GoalArg::name("dfl:Container"),
    );
    assert!(solutions(&r, &no).is_empty());
}

#[test]
fn subclass_of_walks_the_taxonomy_without_bridging() {
    let r = reasoner();
    let ups = bound_values(
        &solutions(
            &r,
            &Goal::binary(
                "dfl:isSubclassOf",
                GoalArg::name("dfl:EspressoCup"),
                GoalArg::variable("c"),
            ),
        ),
        "c",
    );
    assert!(ups.contains(&dfl("EspressoCup")));
    assert!(ups.contains(&dfl("Container")));

    let downs = bound_values(
        &solutions(
            &r,
            &Goal::binary(
                "dfl:isSubclassOf",
                GoalArg::variable("c"),
                GoalArg::name("dfl:Container"),
            ),
        ),
        "c",
    );
    assert_eq!(
        downs,
        vec![dfl("Container"), dfl("DrinkingCup"), dfl("EspressoCup")]
    );
}

#[test]
fn subclass_of_fully_bound_check() {
    let r = reasoner();
    let yes = Goal::binary(
        "dfl:isSubclassOf",
        GoalArg::name("dfl:EspressoCup"),
        GoalArg::name("dfl:PhysicalObject"),
    );
    assert_eq!(solutions(&r, &yes).len(), 1);
    let no = Goal::binary(
        "dfl:isSubclassOf",
        GoalArg::name("dfl:Container"),
        GoalArg::name("dfl:EspressoCup"),
    );
    assert!(solutions(&r, &no).is_empty());
}

// ----------------------------------------------------------------------
// Ternary useMatch goals
// ----------------------------------------------------------------------

#[test]
fn use_match_finds_patients_for_a_bound_instrument() {
    let r = reasoner();
    let goal = Goal::ternary(
        "dfl:useMatch",
        GoalArg::name("dfl:Cutting"),
        GoalArg::name("dfl:Knife1"),
        GoalArg::variable("patient"),
    );
    assert_eq!(bound_values(&solutions(&r, &goal), "patient"), vec![dfl("Apple1")]);
}

#[test]
fn use_match_finds_instruments_for_a_bound_patient() {
    let r = reasoner();
    let goal = Goal::ternary(
        "dfl:useMatch",
        GoalArg::name("dfl:Cutting"),
        GoalArg::variable("tool"),
        GoalArg::name("dfl:Apple1"),
    );
    assert_eq!(bound_values(&solutions(&r, &goal), "tool"), vec![dfl("Knife1")]);
}

#[test]
fn use_match_fully_bound_check() {
    let r = reasoner();
    let yes = Goal::ternary(
        "dfl:useMatch",
        GoalArg::name("dfl:Cutting"),
        GoalArg::name("dfl:Knife1"),
        GoalArg::name("dfl:Apple1"),
    );
    let results = solutions(&r, &yes);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_empty());

    let no = Goal::ternary(
        "dfl:useMatch",
        GoalArg::name("dfl:Cutting"),
        GoalArg::name("dfl:Cup1"),
        GoalArg::name("dfl:Apple1"),
    );
    assert!(solutions(&r, &no).is_empty());
}

#[test]
fn use_match_requires_a_bound_task() {
    let r = reasoner();
    let goal = Goal::ternary(
        "dfl:useMatch",
        GoalArg::variable("task"),
        GoalArg::name("dfl:Knife1"),
        GoalArg::name("dfl:Apple1"),
    );
    let mut pushed = 0usize;
    let err = r.evaluate(&goal, &mut |_| pushed += 1).expect_err("should fail");
    assert!(matches!(err, GoalError::TaskNotSpecified));
    assert_eq!(pushed, 0);
}

#[test]
fn use_match_rejects_two_unbound_participants() {
    let r = reasoner();
    let goal = Goal::ternary(
        "dfl:useMatch",
        GoalArg::name("dfl:Cutting"),
        GoalArg::variable("tool"),
        GoalArg::variable("patient"),
    );
    let mut pushed = 0usize;
    let err = r.evaluate(&goal, &mut |_| pushed += 1).expect_err("should fail");
    assert!(matches!(err, GoalError::UnderspecifiedGoal(_)));
    assert_eq!(pushed, 0);
}

// ----------------------------------------------------------------------
// Malformed goals and absent data
// ----------------------------------------------------------------------

#[test]
fn fully_unbound_binary_goals_are_rejected_before_any_lookup() {
    let r = reasoner();
    for relation in ["dfl:hasDisposition", "dfl:hasPart", "dfl:isInstanceOf", "dfl:isSubclassOf"] {
        let goal = Goal::binary(relation, GoalArg::variable("a"), GoalArg::variable("b"));
        let mut pushed = 0usize;
        let err = r.evaluate(&goal, &mut |_| pushed += 1).expect_err("should fail");
        assert!(matches!(err, GoalError::UnderspecifiedGoal(_)), "{relation}");
        assert_eq!(pushed, 0, "{relation}");
    }
}

#[test]
fn unknown_relations_fail_dispatch() {
    let r = reasoner();
    let goal = Goal::binary("dfl:neverDefined", GoalArg::name("dfl:Cup1"), GoalArg::variable("d"));
    let err = r.evaluate(&goal, &mut |_| {}).expect_err("should fail");
    assert!(matches!(err, GoalError::UnknownRelation(_)));
}

#[test]
fn unresolvable_names_abort_the_goal() {
    let r = reasoner();
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("nope:Cup1"),
        GoalArg::variable("d"),
    );
    let err = r.evaluate(&goal, &mut |_| {}).expect_err("should fail");
    assert!(matches!(err, GoalError::UnresolvableName { .. }));
}

#[test]
fn wrong_arity_is_rejected() {
    let r = reasoner();
    let mut goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Cup1"),
        GoalArg::variable("d"),
    );
    goal.args.push(GoalArg::variable("extra"));
    let err = r.evaluate(&goal, &mut |_| {}).expect_err("should fail");
    assert!(matches!(err, GoalError::ArityMismatch { expected: 2, found: 3, .. }));

    let short = Goal::binary(
        "dfl:useMatch",
        GoalArg::name("dfl:Cutting"),
        GoalArg::variable("p"),
    );
    let err = r.evaluate(&short, &mut |_| {}).expect_err("should fail");
    assert!(matches!(err, GoalError::ArityMismatch { expected: 3, found: 2, .. }));
}

#[test]
fn untyped_entities_yield_no_solutions_not_errors() {
    let r = reasoner();
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Ghost9"),
        GoalArg::variable("d"),
    );
    assert!(solutions(&r, &goal).is_empty());
}

#[test]
fn types_outside_the_taxonomy_are_absorbed_as_empty() {
    let r = reasoner();
    // Mystery1 is typed with a class the DL engine does not know.
    let goal = Goal::binary(
        "dfl:hasDisposition",
        GoalArg::name("dfl:Mystery1"),
        GoalArg::variable("d"),
    );
    assert!(solutions(&r, &goal).is_empty());
}
