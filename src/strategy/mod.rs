//! The per-node table of candidate lists that drives run generation.
//!
//! A `Strategy` keeps its nodes and each node's parameters in explicit
//! vectors. Iteration order is therefore part of the value itself and not an
//! accident of whatever map type a document was parsed into.

use crate::error::StrategyError;
use crate::flat_key::is_valid_node_id;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod compiler;
pub mod domain;

pub use compiler::StrategyCompiler;
pub use domain::ParameterDomain;

/// One parameter of a node: the operator's candidate list text and its parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEntry {
    name: String,
    text: String,
    domain: ParameterDomain,
}

impl ParameterEntry {
    /// Validates `text` as a JSON array. The text is kept verbatim so that
    /// hand-written indentation survives a save.
    pub fn parse(name: &str, text: &str) -> Result<Self, StrategyError> {
        let domain = ParameterDomain::parse(name, text)?;
        Ok(Self {
            name: name.to_string(),
            text: text.to_string(),
            domain,
        })
    }

    pub fn from_domain(name: &str, domain: ParameterDomain) -> Self {
        Self {
            name: name.to_string(),
            text: domain.to_text(),
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn domain(&self) -> &ParameterDomain {
        &self.domain
    }
}

/// A pipeline-level or step-level entry of a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyNode {
    key: String,
    title: String,
    parameters: Vec<ParameterEntry>,
}

impl StrategyNode {
    pub fn new(key: &str, title: &str) -> Result<Self, StrategyError> {
        if !is_valid_node_id(key) {
            return Err(StrategyError::InvalidNodeId(key.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            title: title.to_string(),
            parameters: Vec::new(),
        })
    }

    /// Adds a parameter from candidate list text, replacing any existing
    /// parameter of the same name in place.
    pub fn with_parameter(mut self, name: &str, text: &str) -> Result<Self, StrategyError> {
        self.set_entry(ParameterEntry::parse(name, text)?);
        Ok(self)
    }

    pub fn with_domain(mut self, name: &str, domain: ParameterDomain) -> Self {
        self.set_entry(ParameterEntry::from_domain(name, domain));
        self
    }

    fn set_entry(&mut self, entry: ParameterEntry) {
        match self.parameters.iter_mut().find(|p| p.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.parameters.push(entry),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parameters(&self) -> &[ParameterEntry] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterEntry> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Ordered mapping of node identifier to its parameter candidate lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Strategy {
    nodes: Vec<StrategyNode>,
}

impl Strategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node. Node identifiers must be unique.
    pub fn push_node(&mut self, node: StrategyNode) -> Result<(), StrategyError> {
        if self.node(&node.key).is_some() {
            return Err(StrategyError::DuplicateNode(node.key));
        }
        self.nodes.push(node);
        Ok(())
    }

    pub fn with_node(mut self, node: StrategyNode) -> Result<Self, StrategyError> {
        self.push_node(node)?;
        Ok(self)
    }

    /// Replaces the candidate list text of one parameter, the operation behind
    /// an operator edit. Adds the parameter if the node does not have it yet.
    pub fn set_domain_text(
        &mut self,
        node_key: &str,
        parameter: &str,
        text: &str,
    ) -> Result<(), StrategyError> {
        let entry = ParameterEntry::parse(parameter, text)?;
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.key == node_key)
            .ok_or_else(|| StrategyError::NodeNotFound(node_key.to_string()))?;
        node.set_entry(entry);
        Ok(())
    }

    pub fn nodes(&self) -> &[StrategyNode] {
        &self.nodes
    }

    pub fn node(&self, key: &str) -> Option<&StrategyNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of `(node, parameter)` pairs.
    pub fn parameter_count(&self) -> usize {
        self.nodes.iter().map(|n| n.parameters.len()).sum()
    }

    pub fn from_json_str(json: &str) -> Result<Self, StrategyError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| StrategyError::MalformedDocument(e.to_string()))?;
        Self::from_value(value)
    }

    /// Reads the persisted document shape:
    ///
    /// ```text
    /// { "<node>": { "key": "<node>", "title": "...", "parameters": { "<name>": "<json text>" } } }
    /// ```
    pub fn from_value(value: Value) -> Result<Self, StrategyError> {
        let Value::Object(entries) = value else {
            return Err(StrategyError::MalformedDocument(
                "strategy must be a JSON object".to_string(),
            ));
        };

        let mut strategy = Strategy::new();
        for (key, node_value) in entries {
            let Value::Object(record) = node_value else {
                return Err(StrategyError::MalformedDocument(format!(
                    "entry for node '{}' must be an object",
                    key
                )));
            };
            let title = record.get("title").and_then(Value::as_str).unwrap_or("");
            let mut node = StrategyNode::new(&key, title)?;

            match record.get("parameters") {
                None | Some(Value::Null) => {}
                Some(Value::Object(parameters)) => {
                    for (name, text) in parameters {
                        let text = text.as_str().ok_or_else(|| {
                            StrategyError::MalformedDocument(format!(
                                "candidate list for '{}' of node '{}' must be stored as a string",
                                name, key
                            ))
                        })?;
                        node = node.with_parameter(name, text)?;
                    }
                }
                Some(_) => {
                    return Err(StrategyError::MalformedDocument(format!(
                        "parameters of node '{}' must be an object",
                        key
                    )));
                }
            }
            strategy.push_node(node)?;
        }
        Ok(strategy)
    }

    pub fn to_value(&self) -> Value {
        let mut document = Map::new();
        for node in &self.nodes {
            let parameters: Map<String, Value> = node
                .parameters
                .iter()
                .map(|p| (p.name.clone(), Value::String(p.text.clone())))
                .collect();

            let mut record = Map::new();
            record.insert("key".to_string(), Value::String(node.key.clone()));
            record.insert("parameters".to_string(), Value::Object(parameters));
            record.insert("title".to_string(), Value::String(node.title.clone()));
            document.insert(node.key.clone(), Value::Object(record));
        }
        Value::Object(document)
    }
}

impl TryFrom<Value> for Strategy {
    type Error = StrategyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Strategy> for Value {
    fn from(strategy: Strategy) -> Self {
        strategy.to_value()
    }
}
