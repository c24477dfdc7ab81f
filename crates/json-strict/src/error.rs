//! Error types.

use std::fmt;

use thiserror::Error;

use crate::descriptor::Kind;

/// Why a presence check failed.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The target, after following pointers, is not a struct.
    #[error("json-strict: non-struct {0}")]
    NotAStruct(Kind),
    /// The input is not a well-formed JSON object.
    #[error("json-strict: invalid input: {0}")]
    InvalidInput(#[source] serde_json::Error),
    #[error("{0}")]
    MissingFields(MissingFields),
}

impl CheckError {
    /// The missing field list, when that is why the check failed.
    pub fn missing_fields(&self) -> Option<&MissingFields> {
        match self {
            CheckError::MissingFields(missing) => Some(missing),
            _ => None,
        }
    }
}

/// Required fields absent from the input, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(Vec<String>);

impl MissingFields {
    /// Wraps names already in declaration order.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Reported names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of missing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is missing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `name` was reported missing.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing fields: [{}]", self.0.join(" "))
    }
}

impl IntoIterator for MissingFields {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MissingFields {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Failure of a strict decode: either the presence check or serde itself.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error("json-strict: decode: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_fields_display_matrix() {
        let one = MissingFields::new(vec!["d".into()]);
        assert_eq!(one.to_string(), "missing fields: [d]");

        let two = MissingFields::new(vec!["a".into(), "b".into()]);
        assert_eq!(two.to_string(), "missing fields: [a b]");
        assert_eq!(
            CheckError::MissingFields(two).to_string(),
            "missing fields: [a b]"
        );
    }

    #[test]
    fn not_a_struct_names_the_kind() {
        let err = CheckError::NotAStruct(Kind::Int);
        assert_eq!(err.to_string(), "json-strict: non-struct int");
        assert!(err.missing_fields().is_none());
    }

    #[test]
    fn invalid_input_keeps_parse_error_as_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CheckError::InvalidInput(parse);
        assert!(err.to_string().starts_with("json-strict: invalid input: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn decode_error_is_transparent_over_check() {
        let err = DecodeError::from(CheckError::NotAStruct(Kind::Map));
        assert_eq!(err.to_string(), "json-strict: non-struct map");
    }
}
