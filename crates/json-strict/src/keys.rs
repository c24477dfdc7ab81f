//! Top-level key set of a JSON object.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::de::IgnoredAny;

/// Keys present at the top level of a JSON object. Values are skipped
/// without being decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputKeys {
    keys: HashSet<String>,
}

impl InputKeys {
    /// Parses `input` as a single JSON object and keeps its keys.
    ///
    /// Any other top-level value, including `null`, is an error.
    pub fn parse(input: &[u8]) -> Result<Self, serde_json::Error> {
        let object: HashMap<String, IgnoredAny> = serde_json::from_slice(input)?;
        Ok(object.into_keys().collect())
    }

    /// Marks `key` as present.
    pub fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl FromIterator<String> for InputKeys {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
