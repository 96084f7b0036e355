//! The `TType` sum type and value membership checks.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use serde_json::Value;

/// A boolean predicate over JSON values, used by [`TType::Refine`].
///
/// Wraps the closure so that types carrying predicates can still derive
/// `Debug` and `Clone`.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    pub fn new(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the predicate to a value.
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<predicate>")
    }
}

/// The unified enum covering all runtime type descriptions.
#[derive(Debug, Clone)]
pub enum TType {
    /// Accepts every value.
    Any,
    /// Accepts exactly JSON `null`. There is no "undefined" in JSON; field
    /// absence is handled by [`TType::Struct`], never here.
    Null,
    Bool,
    /// Any JSON number.
    Num,
    /// A JSON number with zero fractional part.
    Int,
    Str,
    /// Any plain JSON object.
    Obj,
    /// Any JSON array.
    Arr,
    /// A JSON string holding an RFC 3339 date-time or a `YYYY-MM-DD` date.
    Date,
    /// One of a fixed set of values.
    Enums(Vec<Value>),
    /// An object with declared, typed fields. Unknown keys are ignored.
    Struct {
        fields: IndexMap<String, TType>,
        name: Option<String>,
    },
    /// A homogeneous array.
    List(Box<TType>),
    /// A fixed-arity, positionally typed array.
    Tuple(Vec<TType>),
    /// First-match union over the alternatives, in order.
    Union(Vec<TType>),
    /// Accepts `null` in addition to the inner type; inside a struct the
    /// field may also be absent entirely.
    Maybe(Box<TType>),
    /// A base type narrowed by a predicate.
    Refine {
        base: Box<TType>,
        predicate: Predicate,
        name: Option<String>,
    },
}

impl TType {
    /// Returns the kind tag for this type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Num => "num",
            Self::Int => "int",
            Self::Str => "str",
            Self::Obj => "obj",
            Self::Arr => "arr",
            Self::Date => "date",
            Self::Enums(_) => "enums",
            Self::Struct { .. } => "struct",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Union(_) => "union",
            Self::Maybe(_) => "maybe",
            Self::Refine { .. } => "refinement",
        }
    }

    /// Tests whether `value` is a member of this type.
    pub fn is(&self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Null => value.is_null(),
            Self::Bool => value.is_boolean(),
            Self::Num => value.is_number(),
            Self::Int => is_integer(value),
            Self::Str => value.is_string(),
            Self::Obj => value.is_object(),
            Self::Arr => value.is_array(),
            Self::Date => value.as_str().is_some_and(is_date),
            Self::Enums(values) => values.contains(value),
            Self::Struct { fields, .. } => match value.as_object() {
                Some(obj) => fields.iter().all(|(key, t)| match obj.get(key) {
                    Some(v) => t.is(v),
                    None => t.accepts_absence(),
                }),
                None => false,
            },
            Self::List(t) => match value.as_array() {
                Some(items) => items.iter().all(|v| t.is(v)),
                None => false,
            },
            Self::Tuple(ts) => match value.as_array() {
                Some(items) => {
                    items.len() == ts.len() && ts.iter().zip(items).all(|(t, v)| t.is(v))
                }
                None => false,
            },
            Self::Union(ts) => ts.iter().any(|t| t.is(value)),
            Self::Maybe(t) => value.is_null() || t.is(value),
            Self::Refine {
                base, predicate, ..
            } => base.is(value) && predicate.test(value),
        }
    }

    /// Whether a struct field of this type may be left out entirely.
    fn accepts_absence(&self) -> bool {
        matches!(self, Self::Maybe(_) | Self::Any)
    }
}

impl fmt::Display for TType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct {
                name: Some(name), ..
            } => f.write_str(name),
            Self::Refine {
                name: Some(name), ..
            } => f.write_str(name),
            other => f.write_str(other.kind()),
        }
    }
}

fn is_integer(value: &Value) -> bool {
    match value.as_f64() {
        Some(n) => n.fract() == 0.0,
        None => false,
    }
}

fn is_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
