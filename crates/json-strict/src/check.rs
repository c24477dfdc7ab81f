//! The presence check.

use crate::descriptor::{Describe, Field, Shape};
use crate::error::{CheckError, MissingFields};
use crate::keys::InputKeys;

/// How missing fields are named in [`MissingFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// The field's declared identifier.
    #[default]
    Identifier,
    /// The key the field is expected under in the input.
    WireName,
}

/// Options for [`check_with`].
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub report: ReportMode,
    /// Wire names treated as present regardless of the input.
    pub omit: Vec<String>,
}

impl CheckOptions {
    /// Identifier reporting, nothing omitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how missing fields are named.
    pub fn report(mut self, mode: ReportMode) -> Self {
        self.report = mode;
        self
    }

    /// Treats the wire key `name` as present.
    pub fn omit(mut self, name: impl Into<String>) -> Self {
        self.omit.push(name.into());
        self
    }

    /// [`CheckOptions::omit`] for each of `names`.
    pub fn omit_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.omit.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Checks that every required field of `target` has a key in the JSON
/// object encoded in `input`.
///
/// A field is required when its tag has a wire name, is not optional, and
/// the name is not in `omit`. Missing fields are reported by identifier, in
/// declaration order. Extra keys in the input are ignored.
///
/// ```
/// use json_strict::{check, describe};
///
/// struct Foo {
///     a: i64,
///     b: String,
/// }
///
/// describe!(Foo { a: "a", b: "b" });
///
/// let foo = Foo { a: 0, b: String::new() };
/// assert!(check(br#"{"a": 10, "b": "x"}"#, &foo, &[]).is_ok());
/// assert!(check(br#"{"b": "x"}"#, &foo, &["a"]).is_ok());
///
/// let err = check(br#"{"b": "x"}"#, &foo, &[]).unwrap_err();
/// assert_eq!(err.to_string(), "missing fields: [a]");
/// ```
pub fn check<T>(input: &[u8], target: &T, omit: &[&str]) -> Result<(), CheckError>
where
    T: Describe + ?Sized,
{
    let options = CheckOptions::new().omit_all(omit.iter().copied());
    check_with(input, target, &options)
}

/// [`check`] with explicit options.
pub fn check_with<T>(input: &[u8], target: &T, options: &CheckOptions) -> Result<(), CheckError>
where
    T: Describe + ?Sized,
{
    let fields = match target.shape() {
        Shape::Struct(fields) => fields,
        Shape::Other(kind) => return Err(CheckError::NotAStruct(kind)),
    };
    let keys = InputKeys::parse(input).map_err(CheckError::InvalidInput)?;
    check_keys(keys, fields, options)
}

/// Wire key `field` must appear under: `None` when the field is untagged,
/// optional, or its key is `omitted`.
fn required_key<'f>(field: &'f Field, omitted: impl Fn(&str) -> bool) -> Option<&'f str> {
    field.tag().required_name().filter(|name| !omitted(name))
}

pub(crate) fn check_keys(
    keys: InputKeys,
    fields: &[Field],
    options: &CheckOptions,
) -> Result<(), CheckError> {
    let omitted = |name: &str| options.omit.iter().any(|o| o.as_str() == name);

    let missing: Vec<String> = fields
        .iter()
        .filter_map(|field| {
            let name = required_key(field, &omitted)?;
            if keys.contains(name) {
                return None;
            }
            let reported = match options.report {
                ReportMode::Identifier => field.ident(),
                ReportMode::WireName => name,
            };
            Some(reported.to_string())
        })
        .collect();

    if missing.is_empty() {
        tracing::trace!(fields = fields.len(), keys = keys.len(), "required fields present");
        return Ok(());
    }
    tracing::debug!(?missing, "required fields missing from input");
    Err(CheckError::MissingFields(MissingFields::new(missing)))
}

/// Fields of `fields` that a check with `omit` would require, in
/// declaration order.
pub fn required_fields<'a>(
    fields: &'a [Field],
    omit: &'a [&'a str],
) -> impl Iterator<Item = &'a Field> + 'a {
    fields.iter().filter(move |field| {
        required_key(field, |name| omit.iter().any(|o| *o == name)).is_some()
    })
}
