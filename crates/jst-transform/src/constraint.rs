//! Constraint fragments and the transform result shape.
//!
//! A constraint fragment is a declarative JSON object (`{"minimum": 2}`,
//! `{"presence": true}`, ...) describing a validation rule independently of
//! the runtime type it parallels. Fragments are consumed by `jst-validate`
//! and never influence which type is produced.

use indexmap::IndexMap;
use jst_types::TType;
use serde_json::{Map, Value};

/// The constraint half of a transform result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Constraint {
    /// No constraint recorded.
    #[default]
    None,
    /// A single fragment object.
    Single(Value),
    /// One optional fragment per declared property, in property order.
    Fields(IndexMap<String, Option<Value>>),
    /// One optional fragment per union alternative, in alternative order.
    Alternatives(Vec<Option<Value>>),
}

impl Constraint {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_single(&self) -> Option<&Value> {
        match self {
            Self::Single(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&IndexMap<String, Option<Value>>> {
        match self {
            Self::Fields(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_alternatives(&self) -> Option<&[Option<Value>]> {
        match self {
            Self::Alternatives(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse into a plain JSON value, for embedding a nested result's
    /// constraint into an enclosing one (per-field maps, union sequences).
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Single(v) => Some(v),
            Self::Fields(m) => Some(Value::Object(
                m.into_iter()
                    .map(|(k, v)| (k, v.unwrap_or(Value::Null)))
                    .collect(),
            )),
            Self::Alternatives(vs) => Some(Value::Array(
                vs.into_iter().map(|v| v.unwrap_or(Value::Null)).collect(),
            )),
        }
    }
}

/// Result of transforming one schema node: the runtime type, the parallel
/// constraint, and (for object nodes) per-field error lookups.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub type_: TType,
    pub constraint: Constraint,
    pub options: Option<StructOptions>,
}

impl TransformResult {
    pub fn new(type_: TType, constraint: Constraint) -> Self {
        Self {
            type_,
            constraint,
            options: None,
        }
    }
}

/// Per-field error lookups for a transformed object node.
#[derive(Debug, Clone, Default)]
pub struct StructOptions {
    pub fields: IndexMap<String, FieldValidator>,
}

/// One field's constraint fragment plus the lookup that turns a candidate
/// value into the first validation message for that field.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    constraint: Option<Value>,
}

impl FieldValidator {
    pub fn new(constraint: Option<Value>) -> Self {
        Self { constraint }
    }

    /// The fragment this validator applies, if any.
    pub fn constraint(&self) -> Option<&Value> {
        self.constraint.as_ref()
    }

    /// First validation message for `value` under this field's constraint,
    /// or `None` when the value passes (or no constraint applies).
    pub fn error(&self, value: &Value, field: &str) -> Option<String> {
        let fragment = self.constraint.as_ref()?;
        let mut record = Map::new();
        record.insert(field.to_string(), value.clone());
        jst_validate::validate_field(&record, field, fragment)
    }
}
