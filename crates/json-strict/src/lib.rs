//! json-strict - required-field presence checks for JSON objects.
//!
//! `serde_json` with `#[serde(default)]` fields happily turns a missing key
//! into a zero value. This crate checks, before decoding, that every field a
//! type declares as required is present as a top-level key of the input.
//!
//! # Overview
//!
//! - [`describe!`] - declare each field's wire tag (`"name"`, `"name,omitempty"`, `""`)
//! - [`check`] / [`check_with`] - the presence check against any [`Describe`] target
//! - [`from_slice`] / [`from_str`] / [`Strict`] - check, then decode
//!
//! # Example
//!
//! ```
//! use json_strict::{check, describe, CheckError};
//!
//! struct Config {
//!     host: String,
//!     port: u16,
//!     comment: String,
//! }
//!
//! describe!(Config {
//!     host: "host",
//!     port: "port",
//!     comment: "comment,omitempty",
//! });
//!
//! let config = Config { host: String::new(), port: 0, comment: String::new() };
//!
//! assert!(check(br#"{"host": "localhost", "port": 80}"#, &config, &[]).is_ok());
//!
//! match check(br#"{"host": "localhost"}"#, &config, &[]) {
//!     Err(CheckError::MissingFields(missing)) => assert_eq!(missing.names(), ["port"]),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod check;
mod descriptor;
mod error;
mod keys;
mod strict;
mod tag;

pub use check::{check, check_with, required_fields, CheckOptions, ReportMode};
pub use descriptor::{Describe, Field, Kind, Shape, StructFields, StructSchema};
pub use error::{CheckError, DecodeError, MissingFields};
pub use keys::InputKeys;
pub use strict::{from_slice, from_str, Strict};
pub use tag::FieldTag;
