//! Joining and splitting of flattened `node#parameter` keys.
//!
//! A node identifier never contains `#`, while a parameter name may. Keys are
//! therefore split on the **first** separator only and the remainder is kept
//! intact as the parameter name.

/// Separator between the node identifier and the parameter name.
pub const SEPARATOR: char = '#';

/// Builds the flattened key for a `(node, parameter)` pair.
pub fn make_flat_key(node_id: &str, param_name: &str) -> String {
    let mut key = String::with_capacity(node_id.len() + param_name.len() + 1);
    key.push_str(node_id);
    key.push(SEPARATOR);
    key.push_str(param_name);
    key
}

/// Splits a flattened key into `(node_id, param_name)`.
///
/// A key without any separator is treated as a node with an empty parameter
/// name; such keys are never produced by [`make_flat_key`].
pub fn split_flat_key(key: &str) -> (&str, &str) {
    key.split_once(SEPARATOR).unwrap_or((key, ""))
}

/// Returns `true` if `node_id` can be used as the node part of a flattened key.
pub fn is_valid_node_id(node_id: &str) -> bool {
    !node_id.contains(SEPARATOR)
}
