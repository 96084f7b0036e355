//! Schema node dispatch and the seven kind transformers.

use std::collections::HashSet;

use indexmap::IndexMap;
use jst_types::{Predicate, TType, TypeBuilder};
use serde_json::{json, Map, Value};

use crate::constraint::{Constraint, FieldValidator, StructOptions, TransformResult};
use crate::error::TransformError;
use crate::predicate;
use crate::registry::{self, FormatEntry};

/// The seven reserved schema kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Null,
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl SchemaKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// Transform a JSON Schema node into a runtime type plus the parallel
/// constraint tree.
///
/// A node without a `type` key means "accept anything". A `type` naming one
/// of the seven kinds dispatches to that kind's transformer; an array of
/// kind names produces a union; any other name is looked up in the custom
/// type registry.
///
/// # Errors
///
/// [`TransformError::Precondition`] when `schema` is not an object,
/// [`TransformError::Unsupported`] when `type` is unrecognized, and the
/// string transformer's [`TransformError::MissingFormat`] /
/// [`TransformError::InvalidPattern`].
pub fn transform(schema: &Value) -> Result<TransformResult, TransformError> {
    let Some(node) = schema.as_object() else {
        return Err(TransformError::Precondition(schema.to_string()));
    };
    let Some(type_field) = node.get("type") else {
        return Ok(TransformResult::new(TType::Any, Constraint::None));
    };
    match type_field {
        Value::String(name) => {
            if let Some(kind) = SchemaKind::from_name(name) {
                transform_kind(kind, node)
            } else if let Some(registered) = registry::lookup_type(name) {
                // Registered types are returned verbatim, untransformed.
                Ok(TransformResult::new(registered, Constraint::None))
            } else {
                Err(TransformError::Unsupported(schema.to_string()))
            }
        }
        Value::Array(names) => transform_union(names, node, schema),
        _ => Err(TransformError::Unsupported(schema.to_string())),
    }
}

/// A `type` holding a sequence of kind names. The whole node is re-used for
/// every alternative: sibling keywords apply to each kind that understands
/// them, never partitioned per alternative.
fn transform_union(
    names: &[Value],
    node: &Map<String, Value>,
    schema: &Value,
) -> Result<TransformResult, TransformError> {
    let t = TypeBuilder::new();
    let mut alternatives = Vec::with_capacity(names.len());
    let mut constraints = Vec::with_capacity(names.len());
    for name in names {
        let kind = name
            .as_str()
            .and_then(SchemaKind::from_name)
            .ok_or_else(|| TransformError::Unsupported(schema.to_string()))?;
        let result = transform_kind(kind, node)?;
        constraints.push(result.constraint.into_value());
        alternatives.push(result.type_);
    }
    Ok(TransformResult::new(
        t.union(alternatives),
        Constraint::Alternatives(constraints),
    ))
}

fn transform_kind(
    kind: SchemaKind,
    node: &Map<String, Value>,
) -> Result<TransformResult, TransformError> {
    let t = TypeBuilder::new();
    match kind {
        SchemaKind::String => transform_string(node),
        SchemaKind::Number => transform_numeric(node, t.num(), true),
        SchemaKind::Integer => transform_numeric(node, t.int(), false),
        SchemaKind::Boolean => Ok(TransformResult::new(t.bool(), Constraint::None)),
        SchemaKind::Object => transform_object(node),
        SchemaKind::Array => transform_array(node),
        SchemaKind::Null => Ok(TransformResult::new(t.null(), Constraint::None)),
    }
}

fn transform_string(node: &Map<String, Value>) -> Result<TransformResult, TransformError> {
    let t = TypeBuilder::new();

    // `enum` wins outright; no other string keyword is consulted.
    if let Some(enum_) = node.get("enum") {
        let values = match enum_ {
            Value::Array(vs) => vs.clone(),
            // A plain-object enum enumerates its values; the keys are labels.
            Value::Object(m) => m.values().cloned().collect(),
            _ => return Err(unsupported(node)),
        };
        let constraint = json!({ "inclusion": values });
        return Ok(TransformResult::new(
            t.enums(values),
            Constraint::Single(constraint),
        ));
    }

    let mut pred: Option<Predicate> = None;
    let mut constraint: Option<Value> = None;

    if let Some(min) = length_keyword(node, "minLength") {
        pred = predicate::and(pred, predicate::min_length(min));
        constraint = Some(json!({ "minimum": node["minLength"] }));
    }
    if let Some(max) = length_keyword(node, "maxLength") {
        pred = predicate::and(pred, predicate::max_length(max));
        constraint = Some(json!({ "maximum": node["maxLength"] }));
    }
    if let Some(pattern) = node.get("pattern").and_then(Value::as_str) {
        let re = jst_validate::compile_pattern(pattern)
            .ok_or_else(|| TransformError::InvalidPattern(pattern.to_string()))?;
        pred = predicate::and(pred, predicate::regexp(re));
        constraint = Some(match node.get("message") {
            Some(message) => json!({ "format": pattern, "message": message }),
            None => json!({ "format": pattern }),
        });
    }
    if let Some(format) = node.get("format").and_then(Value::as_str) {
        match registry::lookup_format(format) {
            None => return Err(TransformError::MissingFormat(format.to_string())),
            // A format registered as a full type replaces the string type
            // outright, keeping whatever constraint accumulated so far.
            Some(FormatEntry::Type(registered)) => {
                return Ok(TransformResult::new(registered, single(constraint)));
            }
            Some(FormatEntry::Predicate(p)) => pred = predicate::and(pred, p),
        }
    }

    let type_ = match pred {
        Some(p) => t.refine(t.str(), p, None),
        None => t.str(),
    };
    Ok(TransformResult::new(type_, single(constraint)))
}

/// Shared by the number and integer transformers; only the number kind
/// consults the `integer` keyword.
fn transform_numeric(
    node: &Map<String, Value>,
    base: TType,
    integer_keyword: bool,
) -> Result<TransformResult, TransformError> {
    let t = TypeBuilder::new();
    let mut pred: Option<Predicate> = None;
    let mut constraint: Option<Value> = None;

    if let Some(min) = node.get("minimum").and_then(Value::as_f64) {
        if truthy(node.get("exclusiveMinimum")) {
            pred = predicate::and(pred, predicate::gt(min));
            constraint = Some(json!({ "greaterThan": node["minimum"] }));
        } else {
            pred = predicate::and(pred, predicate::gte(min));
            constraint = Some(json!({ "greaterThanOrEqualTo": node["minimum"] }));
        }
    }
    if let Some(max) = node.get("maximum").and_then(Value::as_f64) {
        if truthy(node.get("exclusiveMaximum")) {
            pred = predicate::and(pred, predicate::lt(max));
            constraint = Some(json!({ "lessThan": node["maximum"] }));
        } else {
            pred = predicate::and(pred, predicate::lte(max));
            constraint = Some(json!({ "lessThanOrEqualTo": node["maximum"] }));
        }
    }
    if integer_keyword && truthy(node.get("integer")) {
        pred = predicate::and(pred, predicate::is_integer());
        constraint = Some(json!({ "onlyInteger": true }));
    }

    let type_ = match pred {
        Some(p) => t.refine(base, p, None),
        None => base,
    };
    Ok(TransformResult::new(type_, single(constraint)))
}

fn transform_object(node: &Map<String, Value>) -> Result<TransformResult, TransformError> {
    let t = TypeBuilder::new();
    let required: HashSet<&str> = node
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut props: IndexMap<String, TType> = IndexMap::new();
    let mut constraints: IndexMap<String, Option<Value>> = IndexMap::new();
    let mut fields: IndexMap<String, FieldValidator> = IndexMap::new();

    if let Some(properties) = node.get("properties").and_then(Value::as_object) {
        for (name, sub) in properties {
            let TransformResult {
                type_: sub_type,
                constraint: sub_constraint,
                ..
            } = transform(sub)?;
            let is_required = required.contains(name.as_str());
            // Boolean fields stay bare even when not listed in `required`.
            let bare = is_required || matches!(sub_type, TType::Bool);
            let field_type = if bare { sub_type } else { t.maybe(sub_type) };

            let mut fragment = sub_constraint.into_value();
            if is_required {
                let mut rules = match fragment.take() {
                    Some(Value::Object(m)) => m,
                    _ => Map::new(),
                };
                rules.insert("presence".to_string(), Value::Bool(true));
                fragment = Some(Value::Object(rules));
            }

            fields.insert(name.clone(), FieldValidator::new(fragment.clone()));
            constraints.insert(name.clone(), fragment);
            props.insert(name.clone(), field_type);
        }
    }

    let type_ = if props.is_empty() {
        t.obj()
    } else {
        t.struct_of(props, node.get("description").and_then(Value::as_str))
    };
    Ok(TransformResult {
        type_,
        constraint: Constraint::Fields(constraints),
        options: Some(StructOptions { fields }),
    })
}

fn transform_array(node: &Map<String, Value>) -> Result<TransformResult, TransformError> {
    let t = TypeBuilder::new();
    let mut type_ = t.arr();

    if let Some(items) = node.get("items") {
        match items {
            Value::Object(_) => type_ = t.list(transform(items)?.type_),
            Value::Array(seq) => {
                let mut members = Vec::with_capacity(seq.len());
                for item in seq {
                    members.push(transform(item)?.type_);
                }
                // Tuples have fixed arity; length bounds do not apply.
                return Ok(TransformResult::new(t.tuple(members), Constraint::None));
            }
            _ => return Err(unsupported(node)),
        }
    }

    let mut pred: Option<Predicate> = None;
    let mut constraint: Option<Value> = None;
    if let Some(min) = length_keyword(node, "minItems") {
        pred = predicate::and(pred, predicate::min_length(min));
        constraint = Some(json!({ "length": { "minimum": node["minItems"] } }));
    }
    if let Some(max) = length_keyword(node, "maxItems") {
        pred = predicate::and(pred, predicate::max_length(max));
        constraint = Some(json!({ "length": { "maximum": node["maxItems"] } }));
    }
    // Bounds refine whatever the items produced: with a single item schema
    // the refined inner type is the list, not the bare array.
    if let Some(p) = pred {
        type_ = t.refine(type_, p, None);
    }
    Ok(TransformResult::new(type_, single(constraint)))
}

fn single(constraint: Option<Value>) -> Constraint {
    constraint.map(Constraint::Single).unwrap_or_default()
}

fn unsupported(node: &Map<String, Value>) -> TransformError {
    TransformError::Unsupported(Value::Object(node.clone()).to_string())
}

fn truthy(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}

/// A length-ish keyword: a non-negative integer, also accepted in `2.0`
/// form since JSON does not distinguish the two.
fn length_keyword(node: &Map<String, Value>, key: &str) -> Option<u64> {
    let v = node.get(key)?;
    v.as_u64().or_else(|| {
        v.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    })
}
