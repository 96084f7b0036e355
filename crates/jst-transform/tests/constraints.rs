//! Tests for the constraint half of transform results: fragment shapes,
//! the keyword overwrite behavior, and per-field error lookups.

use jst_transform::{transform, Constraint};
use serde_json::{json, Value};

fn constraint_of(schema: Value) -> Constraint {
    transform(&schema).unwrap().constraint
}

// ── Fragment shapes ───────────────────────────────────────────────────────────

#[test]
fn string_keywords_produce_fragments() {
    assert_eq!(
        constraint_of(json!({ "type": "string", "minLength": 2 }))
            .as_single()
            .unwrap(),
        &json!({ "minimum": 2 })
    );
    assert_eq!(
        constraint_of(json!({ "type": "string", "maxLength": 5 }))
            .as_single()
            .unwrap(),
        &json!({ "maximum": 5 })
    );
    assert_eq!(
        constraint_of(json!({ "type": "string", "pattern": "^h" }))
            .as_single()
            .unwrap(),
        &json!({ "format": "^h" })
    );
    assert_eq!(
        constraint_of(json!({
            "type": "string",
            "pattern": "^h",
            "message": "must start with an h"
        }))
        .as_single()
        .unwrap(),
        &json!({ "format": "^h", "message": "must start with an h" })
    );
    assert_eq!(
        constraint_of(json!({ "type": "string", "enum": ["a", "b"] }))
            .as_single()
            .unwrap(),
        &json!({ "inclusion": ["a", "b"] })
    );
}

#[test]
fn numeric_keywords_produce_fragments() {
    assert_eq!(
        constraint_of(json!({ "type": "number", "minimum": 2 }))
            .as_single()
            .unwrap(),
        &json!({ "greaterThanOrEqualTo": 2 })
    );
    assert_eq!(
        constraint_of(json!({ "type": "number", "minimum": 2, "exclusiveMinimum": true }))
            .as_single()
            .unwrap(),
        &json!({ "greaterThan": 2 })
    );
    assert_eq!(
        constraint_of(json!({ "type": "integer", "maximum": 9, "exclusiveMaximum": true }))
            .as_single()
            .unwrap(),
        &json!({ "lessThan": 9 })
    );
    assert!(constraint_of(json!({ "type": "integer" })).is_none());
}

#[test]
fn array_bounds_produce_length_fragments() {
    assert_eq!(
        constraint_of(json!({ "type": "array", "minItems": 2 }))
            .as_single()
            .unwrap(),
        &json!({ "length": { "minimum": 2 } })
    );
    // bounds fragments are produced even when `items` builds a list type
    assert_eq!(
        constraint_of(json!({
            "type": "array",
            "minItems": 2,
            "items": { "type": "string" }
        }))
        .as_single()
        .unwrap(),
        &json!({ "length": { "minimum": 2 } })
    );
    // tuples carry no constraint
    assert!(constraint_of(json!({
        "type": "array",
        "items": [{ "type": "string" }]
    }))
    .is_none());
}

// ── Overwrite, not merge ──────────────────────────────────────────────────────

// Within one kind transformer, a later keyword's fragment replaces the
// earlier one wholesale. The type still enforces both bounds; only the
// recorded fragment narrows.

#[test]
fn constraint_overwrite_string_bounds() {
    assert_eq!(
        constraint_of(json!({ "type": "string", "minLength": 2, "maxLength": 5 }))
            .as_single()
            .unwrap(),
        &json!({ "maximum": 5 })
    );
}

#[test]
fn constraint_overwrite_number_bounds() {
    assert_eq!(
        constraint_of(json!({ "type": "number", "minimum": 1, "maximum": 5 }))
            .as_single()
            .unwrap(),
        &json!({ "lessThanOrEqualTo": 5 })
    );
    assert_eq!(
        constraint_of(json!({ "type": "number", "minimum": 1, "integer": true }))
            .as_single()
            .unwrap(),
        &json!({ "onlyInteger": true })
    );
}

#[test]
fn constraint_overwrite_array_bounds() {
    assert_eq!(
        constraint_of(json!({ "type": "array", "minItems": 1, "maxItems": 3 }))
            .as_single()
            .unwrap(),
        &json!({ "length": { "maximum": 3 } })
    );
}

// ── Object fragments and field validators ─────────────────────────────────────

#[test]
fn required_fields_gain_presence_merged_into_their_fragment() {
    let constraint = constraint_of(json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "minLength": 3 },
            "nick": { "type": "string", "minLength": 2 }
        },
        "required": ["name"]
    }));
    let fields = constraint.as_fields().unwrap();
    assert_eq!(
        fields["name"].as_ref().unwrap(),
        &json!({ "minimum": 3, "presence": true })
    );
    assert_eq!(fields["nick"].as_ref().unwrap(), &json!({ "minimum": 2 }));
}

#[test]
fn required_field_without_other_keywords_gets_a_bare_presence_fragment() {
    let constraint = constraint_of(json!({
        "type": "object",
        "properties": { "id": { "type": "string" } },
        "required": ["id"]
    }));
    let fields = constraint.as_fields().unwrap();
    assert_eq!(fields["id"].as_ref().unwrap(), &json!({ "presence": true }));
}

#[test]
fn empty_object_schema_has_empty_field_maps() {
    let result = transform(&json!({ "type": "object" })).unwrap();
    assert!(result.constraint.as_fields().unwrap().is_empty());
    assert!(result.options.unwrap().fields.is_empty());
}

#[test]
fn field_validators_report_messages() {
    let result = transform(&json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "minLength": 3 },
            "age": { "type": "number", "minimum": 0 }
        },
        "required": ["name"]
    }))
    .unwrap();
    let fields = result.options.unwrap().fields;

    assert_eq!(
        fields["name"].error(&json!(null), "name").as_deref(),
        Some("Name can't be blank")
    );
    assert_eq!(
        fields["name"].error(&json!("ab"), "name").as_deref(),
        Some("Name is too short (minimum is 3 characters)")
    );
    assert!(fields["name"].error(&json!("abc"), "name").is_none());

    // optional fields skip every rule when no value is provided
    assert!(fields["age"].error(&json!(null), "age").is_none());
    assert_eq!(
        fields["age"].error(&json!(-1), "age").as_deref(),
        Some("Age must be greater than or equal to 0")
    );
}

#[test]
fn field_validator_uses_the_custom_pattern_message() {
    let result = transform(&json!({
        "type": "object",
        "properties": {
            "code": {
                "type": "string",
                "pattern": "/^[A-Z]{3}$/",
                "message": "must be a three-letter code"
            }
        }
    }))
    .unwrap();
    let fields = result.options.unwrap().fields;
    assert_eq!(
        fields["code"].error(&json!("abc"), "code").as_deref(),
        Some("Code must be a three-letter code")
    );
    assert!(fields["code"].error(&json!("ABC"), "code").is_none());
}

// ── Union fragments ───────────────────────────────────────────────────────────

#[test]
fn union_collects_one_fragment_per_alternative_in_order() {
    let constraint = constraint_of(json!({ "type": ["number", "string"], "minimum": 2 }));
    let alternatives = constraint.as_alternatives().unwrap();
    assert_eq!(alternatives.len(), 2);
    assert_eq!(
        alternatives[0].as_ref().unwrap(),
        &json!({ "greaterThanOrEqualTo": 2 })
    );
    assert!(alternatives[1].is_none());
}

// ── End-to-end scenario ───────────────────────────────────────────────────────

#[test]
fn array_of_required_name_objects() {
    let result = transform(&json!({
        "type": "array",
        "minItems": 2,
        "items": {
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name"]
        }
    }))
    .unwrap();
    assert!(result.type_.is(&json!([{ "name": "a" }, { "name": "b" }])));
    assert!(!result.type_.is(&json!([])));
    assert!(!result.type_.is(&json!([{ "name": "a" }])));
}
