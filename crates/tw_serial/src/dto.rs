//! Runtime support for `#[derive(Dto)]`.
//!
//! A DTO is a struct with named fields that encodes as a JSON object, one
//! member per field, in declaration order:
//!
//! ```
//! use tw_serial::derive::Dto;
//!
//! #[derive(Dto, Debug, PartialEq)]
//! struct Reading {
//!     sensor: String,
//!     value: f64,
//!     #[dto(rename = "unit")]
//!     unit_name: Option<String>,
//! }
//!
//! let reading = Reading { sensor: "t1".into(), value: 21.5, unit_name: None };
//! let text = tw_serial::serialize(&reading);
//! assert_eq!(text, r#"{"sensor":"t1","value":21.5,"unit":null}"#);
//! assert_eq!(tw_serial::deserialize::<Reading>(&text).unwrap(), reading);
//! ```
//!
//! Unlike a bare optional, an optional field keeps absent (`null`) and empty
//! (`""`) apart. Fields that are sequences or maps encode fine, but decoding
//! them fails with [`UnsupportedCategory`](crate::Error::UnsupportedCategory).

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde_json::value::RawValue;
use thiserror::Error;

use crate::{Error, Serial, validate};

// -----------------------------------------------------------------------------
// Rules

/// A field constraint checked before a DTO is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The member is present and not `null`.
    NotNull,
    /// The member is present and neither `""`, `[]` nor `{}`.
    NotEmpty,
    /// The member is present and not only whitespace.
    NotBlank,
}

impl Rule {
    /// Checks the raw member text; `None` means missing or `null`.
    pub fn check(self, raw: Option<&str>) -> bool {
        match self {
            Self::NotNull => validate::not_null(raw),
            Self::NotEmpty => raw.is_some_and(validate::not_empty),
            Self::NotBlank => raw.is_some_and(validate::not_blank),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNull => f.pad("NotNull"),
            Self::NotEmpty => f.pad("NotEmpty"),
            Self::NotBlank => f.pad("NotBlank"),
        }
    }
}

/// One failed [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field `{}` violates {}", self.field, self.rule)
    }
}

// -----------------------------------------------------------------------------
// Error

/// Failures specific to DTO payloads.
///
/// Reported through [`Error::Custom`]; use
/// [`Error::downcast_custom`] to get it back.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DtoError {
    #[error("malformed object payload: {0}")]
    Malformed(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    let mut out = String::new();
    for (idx, violation) in violations.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&violation.to_string());
    }
    out
}

impl From<DtoError> for Error {
    #[inline]
    fn from(err: DtoError) -> Self {
        Error::custom(err)
    }
}

// -----------------------------------------------------------------------------
// ObjectWriter

/// Builds the `{"name":value,...}` text of a DTO.
///
/// Names are escaped; values are placed with the container rule
/// ([`Serial::place_into`]).
#[derive(Debug)]
pub struct ObjectWriter {
    out: String,
    empty: bool,
}

impl Default for ObjectWriter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectWriter {
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::from("{"),
            empty: true,
        }
    }

    fn key(&mut self, name: &str) {
        if !self.empty {
            self.out.push(',');
        }
        self.empty = false;
        tw_text::quote_into(name, &mut self.out);
        self.out.push(':');
    }

    /// Appends a required member.
    pub fn field<T: Serial + ?Sized>(&mut self, name: &str, value: &T) -> &mut Self {
        self.key(name);
        value.place_into(&mut self.out);
        self
    }

    /// Appends an optional member, `null` when absent.
    pub fn optional<T: Serial>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        self.key(name);
        match value {
            Some(value) => value.place_into(&mut self.out),
            None => self.out.push_str("null"),
        }
        self
    }

    /// Closes the object and returns its text.
    pub fn finish(mut self) -> String {
        self.out.push('}');
        self.out
    }
}

// -----------------------------------------------------------------------------
// Fields

/// The members of a parsed DTO payload.
///
/// Each member keeps its exact source text, so numbers reach their decoder
/// digit for digit.
#[derive(Debug)]
pub struct Fields {
    members: BTreeMap<String, Box<RawValue>>,
}

impl Fields {
    /// Parses `text` as a JSON object.
    pub fn parse(text: &str) -> Result<Self, DtoError> {
        let members = serde_json::from_str(text).map_err(|err| {
            log::debug!("DTO payload is not a JSON object: {err}");
            DtoError::Malformed(err.to_string())
        })?;

        Ok(Self { members })
    }

    /// The text of a member, as its decoder sees it.
    ///
    /// Strings are unescaped and unquoted, other values are passed as written.
    /// Missing and `null` members are `None`.
    pub fn raw(&self, name: &str) -> Option<Cow<'_, str>> {
        let text = self.members.get(name)?.get();
        match text.as_bytes().first() {
            Some(b'n') => None,
            Some(b'"') => Some(
                serde_json::from_str::<String>(text)
                    .map_or(Cow::Borrowed(text), Cow::Owned),
            ),
            _ => Some(Cow::Borrowed(text)),
        }
    }

    /// Decodes a member that must be present.
    pub fn required<T: Serial>(&self, name: &'static str) -> Result<T, Error> {
        let raw = self.raw(name).ok_or(DtoError::MissingField(name))?;
        crate::deserialize(&raw)
    }

    /// Decodes a member that may be missing or `null`.
    pub fn optional<T: Serial>(&self, name: &str) -> Result<Option<T>, Error> {
        self.raw(name)
            .map(|raw| crate::deserialize(&raw))
            .transpose()
    }

    /// Records a violation when `rule` does not hold for member `name`.
    pub fn check(&self, name: &'static str, rule: Rule, violations: &mut Vec<Violation>) {
        if !rule.check(self.raw(name).as_deref()) {
            violations.push(Violation { field: name, rule });
        }
    }

    /// Fails with every collected violation, if there are any.
    pub fn validated(&self, violations: Vec<Violation>) -> Result<(), DtoError> {
        if violations.is_empty() {
            return Ok(());
        }
        log::debug!("DTO payload failed {} rule(s)", violations.len());
        Err(DtoError::Validation(violations))
    }
}
