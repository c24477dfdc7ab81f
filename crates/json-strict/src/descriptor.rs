//! Field metadata for checked types.
//!
//! A type takes part in presence checking by exposing a [`Shape`] through
//! [`Describe`]. Struct-shaped types carry a table of [`Field`]s, declared
//! once per type with [`describe!`](crate::describe) or built at runtime as a
//! [`StructSchema`]. Every other value reports its [`Kind`] so the checker
//! can reject it.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use crate::tag::FieldTag;

/// One declared field: its identifier and its wire tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    ident: Cow<'static, str>,
    tag: Cow<'static, str>,
}

impl Field {
    /// Builds a field from static strings, usable in `const` tables.
    pub const fn new(ident: &'static str, tag: &'static str) -> Self {
        Self {
            ident: Cow::Borrowed(ident),
            tag: Cow::Borrowed(tag),
        }
    }

    /// Builds a field from runtime strings.
    pub fn owned(ident: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            ident: Cow::Owned(ident.into()),
            tag: Cow::Owned(tag.into()),
        }
    }

    /// Identifier the field is declared with on the Rust side, without any
    /// `r#` raw-identifier prefix.
    pub fn ident(&self) -> &str {
        self.ident.strip_prefix("r#").unwrap_or(&self.ident)
    }

    /// The tag as declared, before parsing.
    pub fn raw_tag(&self) -> &str {
        &self.tag
    }

    /// Parsed view of the tag.
    pub fn tag(&self) -> FieldTag<'_> {
        FieldTag::parse(&self.tag)
    }

    /// Wire key, or `None` when the field is not serialized.
    pub fn wire_name(&self) -> Option<&str> {
        self.tag().name()
    }

    /// Whether the tag marks the field optional.
    pub fn is_optional(&self) -> bool {
        self.tag().is_optional()
    }
}

/// Kind of a described value, used to report non-struct targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `None` or JSON `null`: nothing to inspect.
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Unit,
    Slice,
    Array,
    Map,
    Set,
    Struct,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Unit => "unit",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Struct => "struct",
        };
        f.write_str(name)
    }
}

/// What a value looks like to the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A struct with its declared fields, in declaration order.
    Struct(&'a [Field]),
    Other(Kind),
}

impl Shape<'_> {
    /// Kind of the described value; [`Kind::Struct`] for struct shapes.
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Struct(_) => Kind::Struct,
            Shape::Other(kind) => *kind,
        }
    }
}

/// Value-level access to a target's shape.
///
/// Pointer-like types forward to their pointee, so a target reached through
/// any number of references or boxes is described the same as the value.
pub trait Describe {
    fn shape(&self) -> Shape<'_>;
}

/// Type-level field table, for when no value of the type exists yet.
pub trait StructFields {
    const FIELDS: &'static [Field];
}

macro_rules! describe_kind {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Other($kind)
                }
            }
        )+
    };
}

describe_kind!(Kind::Bool => bool);
describe_kind!(Kind::Int => i8, i16, i32, i64, i128, isize);
describe_kind!(Kind::Uint => u8, u16, u32, u64, u128, usize);
describe_kind!(Kind::Float => f32, f64);
describe_kind!(Kind::Char => char);
describe_kind!(Kind::String => str, String);
describe_kind!(Kind::Unit => ());

impl<T> Describe for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Slice)
    }
}

impl<T> Describe for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Slice)
    }
}

impl<T, const N: usize> Describe for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Array)
    }
}

impl<K, V, S> Describe for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Map)
    }
}

impl<K, V> Describe for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Map)
    }
}

impl<T, S> Describe for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Set)
    }
}

impl<T> Describe for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Set)
    }
}

impl Describe for serde_json::Map<String, Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Kind::Map)
    }
}

impl Describe for Value {
    fn shape(&self) -> Shape<'_> {
        let kind = match self {
            Value::Null => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) if n.is_u64() => Kind::Uint,
            Value::Number(n) if n.is_i64() => Kind::Int,
            Value::Number(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Slice,
            Value::Object(_) => Kind::Map,
        };
        Shape::Other(kind)
    }
}

impl<T: Describe> Describe for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Other(Kind::Invalid),
        }
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

/// A field table assembled at runtime.
///
/// ```
/// use json_strict::{check, StructSchema};
///
/// let schema = StructSchema::new()
///     .field("id", "id")
///     .field("note", "note,omitempty");
/// assert!(check(br#"{"id": 7}"#, &schema, &[]).is_ok());
/// assert!(check(br#"{"note": "x"}"#, &schema, &[]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructSchema {
    fields: Vec<Field>,
}

impl StructSchema {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    pub fn field(mut self, ident: impl Into<String>, tag: impl Into<String>) -> Self {
        self.fields.push(Field::owned(ident, tag));
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl FromIterator<Field> for StructSchema {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Describe for StructSchema {
    fn shape(&self) -> Shape<'_> {
        Shape::Struct(&self.fields)
    }
}

/// Declares the wire tags of a struct's fields.
///
/// Implements [`StructFields`] and [`Describe`] for the named type. Fields
/// are listed in declaration order as `ident: "tag"`; naming a field the
/// struct does not have is a compile error.
///
/// ```
/// use json_strict::{describe, StructFields};
///
/// struct Point {
///     x: i64,
///     y: i64,
///     label: Option<String>,
/// }
///
/// describe!(Point {
///     x: "x",
///     y: "y",
///     label: "label,omitempty",
/// });
///
/// assert_eq!(Point::FIELDS.len(), 3);
/// assert!(Point::FIELDS[2].is_optional());
/// ```
#[macro_export]
macro_rules! describe {
    ($ty:ty { $($field:ident : $tag:expr),* $(,)? }) => {
        impl $crate::StructFields for $ty {
            const FIELDS: &'static [$crate::Field] = &[
                $($crate::Field::new(stringify!($field), $tag)),*
            ];
        }

        impl $crate::Describe for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $(let _ = &self.$field;)*
                $crate::Shape::Struct(<Self as $crate::StructFields>::FIELDS)
            }
        }
    };
}
