use serde_json::Value;

/// One concrete run: exactly one value per flattened key, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunAssignment {
    entries: Vec<(String, Value)>,
}

impl RunAssignment {
    pub fn new(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn get(&self, flat_key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == flat_key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order-insensitive comparison of the key/value pairs.
    pub fn same_pairs(&self, other: &RunAssignment) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl FromIterator<(String, Value)> for RunAssignment {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
