use crate::error::StrategyError;
use serde_json::Value;

/// The ordered candidate values for one `(node, parameter)` pair.
///
/// A domain may be empty, in which case the whole strategy expands to zero runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDomain {
    values: Vec<Value>,
}

impl ParameterDomain {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// A domain holding exactly one candidate.
    pub fn singleton(value: Value) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Parses operator-entered candidate list text.
    ///
    /// The text must be a JSON array; anything else is rejected here so the
    /// expansion phases never see a malformed domain.
    pub fn parse(parameter: &str, text: &str) -> Result<Self, StrategyError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| StrategyError::InvalidDomainJson {
                parameter: parameter.to_string(),
                message: e.to_string(),
            })?;
        match value {
            Value::Array(values) => Ok(Self { values }),
            other => Err(StrategyError::DomainNotAList {
                parameter: parameter.to_string(),
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Compact JSON text for this domain, e.g. `[1,2]`.
    pub fn to_text(&self) -> String {
        Value::Array(self.values.clone()).to_string()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
