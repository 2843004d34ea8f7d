use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persistence shape of a run: `{ node: { param: value } }`.
///
/// Node and parameter order are insertion order and are part of the
/// signature, so two runs holding the same pairs in a different order are
/// different runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredRun(Map<String, Value>);

impl StructuredRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `self[node][param] = value`, creating the node entry on first use.
    pub fn insert(&mut self, node_id: &str, param_name: &str, value: Value) {
        let slot = self
            .0
            .entry(node_id)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(params) = slot {
            params.insert(param_name.to_string(), value);
        }
    }

    pub fn get(&self, node_id: &str, param_name: &str) -> Option<&Value> {
        self.0.get(node_id)?.get(param_name)
    }

    /// Iterates `(node, param, value)` triples in insertion order.
    ///
    /// Node entries that are not JSON objects hold no parameters and are
    /// skipped; they can only come from hand-edited persisted documents.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, &Value)> {
        self.0.iter().flat_map(|(node_id, params)| {
            params
                .as_object()
                .into_iter()
                .flat_map(move |params| {
                    params
                        .iter()
                        .map(move |(name, value)| (node_id.as_str(), name.as_str(), value))
                })
        })
    }

    pub fn node_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical signature used for equality during reconciliation: the
    /// compact JSON encoding.
    pub fn signature(&self) -> String {
        // Maps of string keys to JSON values always serialize.
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}
