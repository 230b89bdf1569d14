//! Conversion of raw path segments into typed values.
//!
//! A parameter segment written as `{type|name}` carries a type tag. When a request segment is bound
//! to that parameter, the raw string is run through [`coerce`] with the tag:
//!
//! | Tag(s)                       | Result                                   |
//! |------------------------------|------------------------------------------|
//! | `int`, `integer`             | [`CoercedValue::Int`], numeric prefix     |
//! | `bool`, `boolean`            | [`CoercedValue::Bool`], false for `""`/`"0"` |
//! | `float`, `double`, `real`    | [`CoercedValue::Float`], numeric prefix   |
//! | `string`                     | [`CoercedValue::Str`]                     |
//! | `array`                      | [`CoercedValue::Array`] with one element  |
//! | `object`                     | [`CoercedValue::Object`] with a `scalar` field |
//! | anything else, or no tag     | [`CoercedValue::Str`], unchanged          |
//!
//! Tags are matched case-insensitively. Coercion never fails: a segment with no numeric prefix
//! becomes `0` (or `0.0`).

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::num::IntErrorKind;

lazy_static! {
    // Leading whitespace, optional sign, then an integer or decimal mantissa and an optional exponent.
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap();
}

/// The recognised type tags, grouped by the value they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Bool,
    Float,
    Str,
    Array,
    Object,
}

impl TypeTag {
    /// Parses a tag case-insensitively. Returns `None` for unrecognised tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use segroute::TypeTag;
    ///
    /// assert_eq!(TypeTag::parse("Integer"), Some(TypeTag::Int));
    /// assert_eq!(TypeTag::parse("real"), Some(TypeTag::Float));
    /// assert_eq!(TypeTag::parse("uuid"), None);
    /// ```
    pub fn parse(tag: &str) -> Option<TypeTag> {
        let tag = tag.to_ascii_lowercase();
        let parsed = match tag.as_str() {
            "int" | "integer" => TypeTag::Int,
            "bool" | "boolean" => TypeTag::Bool,
            "float" | "double" | "real" => TypeTag::Float,
            "string" => TypeTag::Str,
            "array" => TypeTag::Array,
            "object" => TypeTag::Object,
            _ => return None,
        };
        Some(parsed)
    }

    /// Returns `true` if `tag` names one of the recognised types.
    pub fn is_valid(tag: &str) -> bool {
        TypeTag::parse(tag).is_some()
    }

    /// Applies this tag to a raw segment.
    pub fn apply(self, raw: &str) -> CoercedValue {
        match self {
            TypeTag::Int => CoercedValue::Int(loose_int(raw)),
            TypeTag::Bool => CoercedValue::Bool(!(raw.is_empty() || raw == "0")),
            TypeTag::Float => CoercedValue::Float(loose_float(raw)),
            TypeTag::Str => CoercedValue::Str(raw.to_owned()),
            TypeTag::Array => CoercedValue::Array(vec![raw.to_owned()]),
            TypeTag::Object => CoercedValue::Object { scalar: raw.to_owned() },
        }
    }
}

/// A path parameter value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    Int(i64),
    Bool(bool),
    Float(f64),
    Str(String),
    /// A single-element sequence holding the raw segment.
    Array(Vec<String>),
    /// A boxed scalar: a record with one field named `scalar`.
    Object { scalar: String },
}

impl CoercedValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CoercedValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CoercedValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            CoercedValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string for `Str` values and the boxed scalar for `Object` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CoercedValue::Str(v) => Some(v.as_str()),
            CoercedValue::Object { scalar } => Some(scalar.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            CoercedValue::Array(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl Display for CoercedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CoercedValue::Int(v) => write!(f, "{}", v),
            CoercedValue::Bool(v) => write!(f, "{}", v),
            CoercedValue::Float(v) => write!(f, "{}", v),
            CoercedValue::Str(v) => f.write_str(v),
            CoercedValue::Array(v) => write!(f, "[{}]", v.join(", ")),
            CoercedValue::Object { scalar } => write!(f, "{{ scalar: {} }}", scalar),
        }
    }
}

/// Coerces `raw` according to `type_tag`.
///
/// An absent or unrecognised tag passes the raw string through untouched.
///
/// # Examples
///
/// ```
/// use segroute::{coerce, CoercedValue};
///
/// assert_eq!(coerce(Some("int"), "42"), CoercedValue::Int(42));
/// assert_eq!(coerce(Some("bool"), "0"), CoercedValue::Bool(false));
/// assert_eq!(coerce(Some("array"), "x"), CoercedValue::Array(vec!["x".into()]));
/// assert_eq!(coerce(Some("foo"), "x"), CoercedValue::Str("x".into()));
/// assert_eq!(coerce(None, "x"), CoercedValue::Str("x".into()));
/// ```
pub fn coerce(type_tag: Option<&str>, raw: &str) -> CoercedValue {
    match type_tag.and_then(TypeTag::parse) {
        Some(tag) => tag.apply(raw),
        None => CoercedValue::Str(raw.to_owned()),
    }
}

fn numeric_prefix(raw: &str) -> Option<&str> {
    NUMERIC_PREFIX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn loose_float(raw: &str) -> f64 {
    numeric_prefix(raw).and_then(|p| p.parse::<f64>().ok()).unwrap_or(0.0)
}

fn loose_int(raw: &str) -> i64 {
    let prefix = match numeric_prefix(raw) {
        Some(p) => p,
        None => return 0,
    };

    // An exponent makes the prefix a float literal; `as` saturates at the i64 bounds.
    if prefix.contains(['e', 'E']) {
        return prefix.parse::<f64>().map(|v| v as i64).unwrap_or(0);
    }

    let integral = prefix.split('.').next().unwrap_or("");
    match integral.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
