//! Property tests for the expansion and reconciliation laws.
mod common;
use common::*;
use kumiawase::prelude::*;
use proptest::prelude::*;

/// Strategy with one parameter per entry; each parameter gets `size` distinct
/// integer candidates.
fn strategy_with_sizes(sizes: &[usize]) -> Strategy {
    let texts: Vec<(String, String)> = sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            let values: Vec<usize> = (0..size).collect();
            (format!("p{}", i), serde_json::to_string(&values).unwrap())
        })
        .collect();
    let params: Vec<(&str, &str)> = texts
        .iter()
        .map(|(name, text)| (name.as_str(), text.as_str()))
        .collect();
    single_node_strategy("node", &params)
}

fn generate(strategy: &Strategy) -> GeneratedRuns {
    RunGenerator::new(&EngineConfig::default().with_max_runs(0))
        .generate("pipeline", strategy)
        .unwrap()
}

proptest! {
    #[test]
    fn prop_run_count_is_product_of_domain_sizes(
        sizes in proptest::collection::vec(0..4usize, 0..5),
    ) {
        let generated = generate(&strategy_with_sizes(&sizes));
        let expected: usize = sizes.iter().product();
        prop_assert_eq!(generated.len(), expected);
        prop_assert_eq!(generated.rows.len(), expected);
    }

    #[test]
    fn prop_decode_inverts_encode(sizes in proptest::collection::vec(1..4usize, 0..4)) {
        let generated = generate(&strategy_with_sizes(&sizes));
        for run in &generated.runs {
            let decoded = RunEncoder::decode(&RunEncoder::encode(run));
            prop_assert!(decoded.same_pairs(run));
        }
    }

    #[test]
    fn prop_expansion_is_deterministic(sizes in proptest::collection::vec(0..4usize, 0..4)) {
        let strategy = strategy_with_sizes(&sizes);
        prop_assert_eq!(generate(&strategy), generate(&strategy));
    }

    #[test]
    fn prop_reconciling_a_saved_subset_restores_it(
        sizes in proptest::collection::vec(1..4usize, 0..4),
        picks in proptest::collection::vec(any::<bool>(), 64),
    ) {
        let generated = generate(&strategy_with_sizes(&sizes));
        let subset: Vec<usize> = (0..generated.len()).filter(|&i| picks[i % picks.len()]).collect();

        let mut persisted = generated.structured(&subset);
        persisted.reverse();

        let result = SelectionReconciler::reconcile(&generated.runs, &persisted);
        prop_assert_eq!(result.selected, subset);
        prop_assert!(result.unmatched.is_empty());
    }

    #[test]
    fn prop_flat_keys_split_on_first_separator(node in "[a-z0-9-]{1,8}", param in "[a-z#]{0,8}") {
        let key = make_flat_key(&node, &param);
        prop_assert_eq!(split_flat_key(&key), (node.as_str(), param.as_str()));
    }
}
