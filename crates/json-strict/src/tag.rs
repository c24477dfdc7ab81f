//! Wire tags: the `name[,option]*` strings attached to each described field.
//!
//! Examples:
//! - `"a"` -> wire key `a`, required
//! - `"d,omitempty"` -> wire key `d`, optional
//! - `""` / `"-"` -> not part of the wire contract
//! - `"-,"` -> wire key `-`, required

/// Options that exempt a field from the presence check.
const OPTIONAL_OPTIONS: &[&str] = &["omitempty", "optional"];

/// A parsed field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag<'a> {
    name: Option<&'a str>,
    options: &'a str,
}

impl<'a> FieldTag<'a> {
    /// Splits a raw tag into its wire name and option list.
    pub fn parse(raw: &'a str) -> Self {
        if raw == "-" {
            return Self {
                name: None,
                options: "",
            };
        }
        let (name, options) = match raw.split_once(',') {
            Some((name, options)) => (name, options),
            None => (raw, ""),
        };
        let name = match name {
            "" => None,
            name => Some(name),
        };
        Self { name, options }
    }

    /// Key the field is expected under, `None` when the field is not serialized.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Non-empty options after the name, in tag order.
    pub fn options(&self) -> impl Iterator<Item = &'a str> {
        self.options.split(',').filter(|opt| !opt.is_empty())
    }

    /// Whether `option` is one of the tag's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options().any(|opt| opt == option)
    }

    /// Whether the field may be absent (`omitempty` or `optional`).
    pub fn is_optional(&self) -> bool {
        self.options().any(|opt| OPTIONAL_OPTIONS.contains(&opt))
    }

    /// Wire key of a field that must be present, if any.
    pub fn required_name(&self) -> Option<&'a str> {
        if self.is_optional() {
            return None;
        }
        self.name
    }
}
