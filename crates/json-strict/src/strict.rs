//! Strict decoding: presence check first, serde second.
//!
//! The decoder only runs once every required key is known to be present,
//! so a failed check never yields a partially filled value.

use std::ops::{Deref, DerefMut};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::check::{check_keys, CheckOptions};
use crate::descriptor::{Describe, Shape, StructFields};
use crate::error::{CheckError, DecodeError};
use crate::keys::InputKeys;

/// Decodes `T` from `input` after checking its required fields.
///
/// ```
/// use json_strict::{describe, from_slice, DecodeError};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Foo {
///     #[serde(default)]
///     a: i64,
///     #[serde(default)]
///     b: String,
/// }
///
/// describe!(Foo { a: "a", b: "b" });
///
/// let foo: Foo = from_slice(br#"{"a": 10, "b": "foobar"}"#, &[]).unwrap();
/// assert_eq!(foo, Foo { a: 10, b: "foobar".into() });
///
/// let err = from_slice::<Foo>(br#"{"b": "foobar"}"#, &[]).unwrap_err();
/// assert!(matches!(err, DecodeError::Check(_)));
/// ```
pub fn from_slice<T>(input: &[u8], omit: &[&str]) -> Result<T, DecodeError>
where
    T: StructFields + DeserializeOwned,
{
    let keys = InputKeys::parse(input).map_err(CheckError::InvalidInput)?;
    let options = CheckOptions::new().omit_all(omit.iter().copied());
    check_keys(keys, T::FIELDS, &options)?;
    Ok(serde_json::from_slice(input)?)
}

/// [`from_slice`] for text input.
pub fn from_str<T>(input: &str, omit: &[&str]) -> Result<T, DecodeError>
where
    T: StructFields + DeserializeOwned,
{
    from_slice(input.as_bytes(), omit)
}

/// Deserializes `T` only if the object carries all of `T`'s required keys.
///
/// Useful for strict types nested inside otherwise lenient ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Strict<T>(pub T);

impl<T> Strict<T> {
    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Strict<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Strict<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Describe> Describe for Strict<T> {
    fn shape(&self) -> Shape<'_> {
        self.0.shape()
    }
}

impl<'de, T> Deserialize<'de> for Strict<T>
where
    T: StructFields + DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let keys: InputKeys = object.keys().cloned().collect();
        check_keys(keys, T::FIELDS, &CheckOptions::default()).map_err(D::Error::custom)?;
        serde_json::from_value(Value::Object(object))
            .map(Strict)
            .map_err(D::Error::custom)
    }
}
