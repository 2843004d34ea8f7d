use crate::flat_key::make_flat_key;
use crate::strategy::{ParameterDomain, Strategy};

/// A strategy flattened into `(flat key, domain)` columns.
///
/// Column order is node order, then parameter order within each node. This is
/// the only source of combination order downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatTable {
    columns: Vec<(String, ParameterDomain)>,
}

impl FlatTable {
    pub fn new(columns: Vec<(String, ParameterDomain)>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[(String, ParameterDomain)] {
        &self.columns
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Turns the nested per-node strategy into a flat table.
pub struct ParameterFlattener;

impl ParameterFlattener {
    pub fn flatten(strategy: &Strategy) -> FlatTable {
        let columns = strategy
            .nodes()
            .iter()
            .flat_map(|node| {
                node.parameters().iter().map(move |param| {
                    (
                        make_flat_key(node.key(), param.name()),
                        param.domain().clone(),
                    )
                })
            })
            .collect();
        FlatTable { columns }
    }
}
