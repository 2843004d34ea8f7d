use crate::run::{RunAssignment, RunEncoder, StructuredRun};
use ahash::AHashMap;
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

/// Outcome of matching persisted runs onto a freshly generated sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// Generated indices to pre-select, ascending.
    pub selected: Vec<usize>,
    /// Persisted runs that matched no generated run, in their original order.
    pub unmatched: Vec<StructuredRun>,
}

/// Restores a previous run selection after the strategy changed.
///
/// Each generated run, in index order, consumes the first still-unconsumed
/// persisted run with the same signature. A persisted entry can therefore
/// select at most one generated run, and `k` identical persisted entries
/// select at most `k` identical generated runs.
pub struct SelectionReconciler;

impl SelectionReconciler {
    #[instrument(
        level = "debug",
        skip_all,
        fields(generated = generated.len(), persisted = persisted.len())
    )]
    pub fn reconcile(generated: &[RunAssignment], persisted: &[StructuredRun]) -> Reconciliation {
        // Pool of persisted positions per signature, front = first in the pool.
        let mut pool: AHashMap<String, VecDeque<usize>> = AHashMap::new();
        for (position, run) in persisted.iter().enumerate() {
            pool.entry(run.signature()).or_default().push_back(position);
        }

        let mut consumed = vec![false; persisted.len()];
        let mut selected = Vec::new();
        for (index, run) in generated.iter().enumerate() {
            let matched = pool
                .get_mut(&RunEncoder::signature(run))
                .and_then(VecDeque::pop_front);
            if let Some(position) = matched {
                consumed[position] = true;
                selected.push(index);
            }
        }

        let unmatched: Vec<StructuredRun> = persisted
            .iter()
            .zip(&consumed)
            .filter(|(_, consumed)| !**consumed)
            .map(|(run, _)| run.clone())
            .collect();

        if !unmatched.is_empty() {
            warn!(
                dropped = unmatched.len(),
                "persisted runs no longer match the strategy and were not restored"
            );
        }
        debug!(selected = selected.len(), "reconciled run selection");

        Reconciliation {
            selected,
            unmatched,
        }
    }

    /// Only the selected indices.
    pub fn selected_indices(
        generated: &[RunAssignment],
        persisted: &[StructuredRun],
    ) -> Vec<usize> {
        Self::reconcile(generated, persisted).selected
    }
}
