//! `TypeBuilder` — factory for constructing `TType` values.

use indexmap::IndexMap;
use serde_json::Value;

use crate::types::{Predicate, TType};

/// Factory for constructing [`TType`] values.
///
/// All constructors are pure; the builder itself carries no state and exists
/// so call sites read as `t.str()`, `t.list(..)`, etc.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeBuilder;

impl TypeBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Primitives

    pub fn any(&self) -> TType {
        TType::Any
    }

    pub fn null(&self) -> TType {
        TType::Null
    }

    pub fn bool(&self) -> TType {
        TType::Bool
    }

    pub fn num(&self) -> TType {
        TType::Num
    }

    pub fn int(&self) -> TType {
        TType::Int
    }

    pub fn str(&self) -> TType {
        TType::Str
    }

    pub fn obj(&self) -> TType {
        TType::Obj
    }

    pub fn arr(&self) -> TType {
        TType::Arr
    }

    pub fn date(&self) -> TType {
        TType::Date
    }

    // ------------------------------------------------------------------
    // Composites

    /// Enumeration over a fixed set of values.
    pub fn enums(&self, values: Vec<Value>) -> TType {
        TType::Enums(values)
    }

    /// Object with declared fields, in insertion order.
    pub fn struct_of(
        &self,
        fields: impl IntoIterator<Item = (String, TType)>,
        name: Option<&str>,
    ) -> TType {
        TType::Struct {
            fields: IndexMap::from_iter(fields),
            name: name.map(str::to_string),
        }
    }

    /// Homogeneous array of `item`.
    pub fn list(&self, item: TType) -> TType {
        TType::List(Box::new(item))
    }

    /// Fixed-arity, positionally typed array.
    pub fn tuple(&self, items: Vec<TType>) -> TType {
        TType::Tuple(items)
    }

    /// First-match union over `alternatives`, order preserved.
    pub fn union(&self, alternatives: Vec<TType>) -> TType {
        TType::Union(alternatives)
    }

    /// Optional: accepts `null` (and absence, at the struct level).
    pub fn maybe(&self, inner: TType) -> TType {
        TType::Maybe(Box::new(inner))
    }

    /// Narrow `base` with `predicate`.
    pub fn refine(&self, base: TType, predicate: Predicate, name: Option<&str>) -> TType {
        TType::Refine {
            base: Box::new(base),
            predicate,
            name: name.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_shorthands() {
        let t = TypeBuilder::new();
        assert_eq!(t.str().kind(), "str");
        assert_eq!(t.maybe(t.num()).kind(), "maybe");
        assert_eq!(t.union(vec![t.num(), t.str()]).kind(), "union");
    }

    #[test]
    fn struct_of_preserves_field_order() {
        let t = TypeBuilder::new();
        let s = t.struct_of(
            [
                ("b".to_string(), t.num()),
                ("a".to_string(), t.str()),
            ],
            None,
        );
        let TType::Struct { fields, .. } = s else {
            panic!("expected struct");
        };
        let keys: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn refine_composes_with_base() {
        let t = TypeBuilder::new();
        let positive = t.refine(
            t.num(),
            Predicate::new(|v| v.as_f64().is_some_and(|n| n > 0.0)),
            None,
        );
        assert!(positive.is(&json!(1)));
        assert!(!positive.is(&json!(-1)));
    }
}
