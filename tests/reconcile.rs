//! Tests for restoring run selections after strategy edits.
mod common;
use common::*;
use kumiawase::prelude::*;
use serde_json::json;

fn runs_of(strategy: &Strategy) -> Vec<RunAssignment> {
    RunGenerator::new(&EngineConfig::default())
        .generate("pipeline", strategy)
        .unwrap()
        .runs
}

#[test]
fn test_restores_single_saved_run() {
    let runs = runs_of(&single_node_strategy("n", &[("A", "[1, 2]")]));
    let persisted = vec![structured("n", &[("A", json!(2))])];

    let result = SelectionReconciler::reconcile(&runs, &persisted);
    assert_eq!(result.selected, vec![1]);
    assert!(result.unmatched.is_empty());
}

#[test]
fn test_exact_subset_is_restored_exactly() {
    let runs = runs_of(&single_node_strategy("n", &[("a", "[1, 2, 3]"), ("b", "[\"x\", \"y\"]")]));
    let subset = [0, 3, 5];
    let persisted: Vec<_> = subset.iter().map(|&i| RunEncoder::encode(&runs[i])).collect();

    assert_eq!(SelectionReconciler::selected_indices(&runs, &persisted), subset);
}

#[test]
fn test_selection_survives_growing_strategy() {
    let before = runs_of(&single_node_strategy("n", &[("lr", "[0.1, 0.01]")]));
    let persisted = vec![RunEncoder::encode(&before[1])];

    // Adding candidates shifts indices; the saved run must follow its values.
    let after = runs_of(&single_node_strategy("n", &[("lr", "[0.5, 0.1, 0.05, 0.01]")]));
    let result = SelectionReconciler::reconcile(&after, &persisted);
    assert_eq!(result.selected, vec![3]);
}

#[test]
fn test_removed_candidates_are_dropped() {
    let before = runs_of(&single_node_strategy("n", &[("lr", "[0.1, 0.01, 0.001]")]));
    let persisted: Vec<_> = before.iter().map(RunEncoder::encode).collect();

    let after = runs_of(&single_node_strategy("n", &[("lr", "[0.001, 0.1]")]));
    let result = SelectionReconciler::reconcile(&after, &persisted);
    assert_eq!(result.selected, vec![0, 1]);
    assert_eq!(result.unmatched, vec![structured("n", &[("lr", json!(0.01))])]);
}

#[test]
fn test_new_parameter_invalidates_old_runs() {
    let before = runs_of(&single_node_strategy("n", &[("a", "[1]")]));
    let persisted = vec![RunEncoder::encode(&before[0])];

    let after = runs_of(&single_node_strategy("n", &[("a", "[1]"), ("b", "[2]")]));
    let result = SelectionReconciler::reconcile(&after, &persisted);
    assert!(result.selected.is_empty());
    assert_eq!(result.unmatched.len(), 1);
}

#[test]
fn test_duplicate_candidates_match_by_multiplicity() {
    // Duplicate candidates produce identical runs.
    let runs = runs_of(&single_node_strategy("n", &[("a", "[1, 1, 2, 1]")]));
    let one = structured("n", &[("a", json!(1))]);

    let result = SelectionReconciler::reconcile(&runs, &[one.clone(), one.clone()]);
    assert_eq!(result.selected, vec![0, 1]);

    let result =
        SelectionReconciler::reconcile(&runs, &[one.clone(), one.clone(), one.clone(), one]);
    assert_eq!(result.selected, vec![0, 1, 3]);
    assert_eq!(result.unmatched.len(), 1);
}

#[test]
fn test_key_order_is_part_of_identity() {
    let runs = runs_of(&single_node_strategy("n", &[("a", "[1]"), ("b", "[2]")]));
    let reordered = structured("n", &[("b", json!(2)), ("a", json!(1))]);

    assert!(SelectionReconciler::selected_indices(&runs, &[reordered]).is_empty());
}

#[test]
fn test_float_candidates_keep_their_serialized_form() {
    let runs = runs_of(&single_node_strategy("n", &[("lr", "[1.0]")]));
    assert_eq!(RunEncoder::signature(&runs[0]), r#"{"n":{"lr":1.0}}"#);
    assert_eq!(RunEncoder::label(&runs[0]), "lr: 1.0");

    // An integer-valued entry is a different run from the float candidate.
    let persisted = structured("n", &[("lr", json!(1))]);
    let result = SelectionReconciler::reconcile(&runs, &[persisted.clone()]);
    assert!(result.selected.is_empty());
    assert_eq!(result.unmatched, vec![persisted]);

    let persisted = structured("n", &[("lr", json!(1.0))]);
    assert_eq!(SelectionReconciler::selected_indices(&runs, &[persisted]), vec![0]);
}

#[test]
fn test_persisted_documents_from_json() {
    let runs = runs_of(&single_node_strategy("step", &[("n", "[1, 2]"), ("s#x", "[\"a\"]")]));
    let persisted: Vec<StructuredRun> =
        serde_json::from_str(r#"[{"step": {"n": 2, "s#x": "a"}}, {"step": {"n": 3, "s#x": "a"}}]"#)
            .unwrap();

    let result = SelectionReconciler::reconcile(&runs, &persisted);
    assert_eq!(result.selected, vec![1]);
    assert_eq!(result.unmatched, vec![persisted[1].clone()]);
}

#[test]
fn test_reconciliation_is_pure() {
    let runs = runs_of(&single_node_strategy("n", &[("a", "[1, 2, 1]")]));
    let persisted = vec![structured("n", &[("a", json!(1))])];

    let first = SelectionReconciler::reconcile(&runs, &persisted);
    let second = SelectionReconciler::reconcile(&runs, &persisted);
    assert_eq!(first, second);
    assert_eq!(persisted.len(), 1);
}
