//! Constraint checking and message construction.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::pattern::compile_pattern;

/// Check a record of attributes against a record of constraint fragments.
///
/// Each entry in `constraints` is a field name mapped to a fragment object;
/// unknown rule keys inside a fragment are ignored. Messages are prefixed
/// with the prettified field name. Returns `None` when every field passed.
pub fn validate(
    attributes: &Map<String, Value>,
    constraints: &Map<String, Value>,
) -> Option<IndexMap<String, Vec<String>>> {
    let mut failures: IndexMap<String, Vec<String>> = IndexMap::new();
    for (field, fragment) in constraints {
        let Some(rules) = fragment.as_object() else {
            continue;
        };
        let messages = check_field(attributes.get(field), rules);
        if !messages.is_empty() {
            let label = prettify(field);
            failures.insert(
                field.clone(),
                messages
                    .into_iter()
                    .map(|m| format!("{label} {m}"))
                    .collect(),
            );
        }
    }
    if failures.is_empty() {
        None
    } else {
        Some(failures)
    }
}

/// Validate a single field and return its first message, if any.
pub fn validate_field(
    attributes: &Map<String, Value>,
    field: &str,
    fragment: &Value,
) -> Option<String> {
    let mut constraints = Map::new();
    constraints.insert(field.to_string(), fragment.clone());
    let mut failures = validate(attributes, &constraints)?;
    failures.shift_remove(field)?.into_iter().next()
}

fn check_field(value: Option<&Value>, rules: &Map<String, Value>) -> Vec<String> {
    let mut messages = Vec::new();

    if rules.get("presence").and_then(Value::as_bool) == Some(true) && is_blank(value) {
        messages.push("can't be blank".to_string());
    }

    // Absence is the presence rule's business; no other rule applies to a
    // missing or null value.
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => return messages,
    };

    if let Some(allowed) = rules.get("inclusion").and_then(Value::as_array) {
        if !allowed.contains(value) {
            messages.push("is not included in the list".to_string());
        }
    }

    if let Some(min) = rules.get("minimum").and_then(Value::as_u64) {
        check_min_length(value, min, &mut messages);
    }
    if let Some(max) = rules.get("maximum").and_then(Value::as_u64) {
        check_max_length(value, max, &mut messages);
    }
    if let Some(bounds) = rules.get("length").and_then(Value::as_object) {
        if let Some(min) = bounds.get("minimum").and_then(Value::as_u64) {
            check_min_length(value, min, &mut messages);
        }
        if let Some(max) = bounds.get("maximum").and_then(Value::as_u64) {
            check_max_length(value, max, &mut messages);
        }
    }

    if let Some(pattern) = rules.get("format").and_then(Value::as_str) {
        let matched = value.as_str().is_some_and(|s| {
            // An uncompilable pattern cannot be judged; let it pass.
            compile_pattern(pattern).map(|re| re.is_match(s)).unwrap_or(true)
        });
        if !matched {
            let message = rules
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("is invalid");
            messages.push(message.to_string());
        }
    }

    check_numeric(value, rules, &mut messages);
    messages
}

fn check_numeric(value: &Value, rules: &Map<String, Value>, messages: &mut Vec<String>) {
    const NUMERIC_RULES: [&str; 5] = [
        "greaterThan",
        "greaterThanOrEqualTo",
        "lessThan",
        "lessThanOrEqualTo",
        "onlyInteger",
    ];
    if !NUMERIC_RULES.iter().any(|k| rules.contains_key(*k)) {
        return;
    }
    let Some(n) = value.as_f64() else {
        messages.push("is not a number".to_string());
        return;
    };
    if let Some(bound) = rules.get("greaterThan").and_then(Value::as_f64) {
        if n <= bound {
            messages.push(format!("must be greater than {}", rules["greaterThan"]));
        }
    }
    if let Some(bound) = rules.get("greaterThanOrEqualTo").and_then(Value::as_f64) {
        if n < bound {
            messages.push(format!(
                "must be greater than or equal to {}",
                rules["greaterThanOrEqualTo"]
            ));
        }
    }
    if let Some(bound) = rules.get("lessThan").and_then(Value::as_f64) {
        if n >= bound {
            messages.push(format!("must be less than {}", rules["lessThan"]));
        }
    }
    if let Some(bound) = rules.get("lessThanOrEqualTo").and_then(Value::as_f64) {
        if n > bound {
            messages.push(format!(
                "must be less than or equal to {}",
                rules["lessThanOrEqualTo"]
            ));
        }
    }
    if rules.get("onlyInteger").and_then(Value::as_bool) == Some(true) && n.fract() != 0.0 {
        messages.push("must be an integer".to_string());
    }
}

fn check_min_length(value: &Value, min: u64, messages: &mut Vec<String>) {
    if let Some(len) = length_of(value) {
        if len < min {
            messages.push(format!("is too short (minimum is {min} characters)"));
        }
    }
}

fn check_max_length(value: &Value, max: u64, messages: &mut Vec<String>) {
    if let Some(len) = length_of(value) {
        if len > max {
            messages.push(format!("is too long (maximum is {max} characters)"));
        }
    }
}

/// Length of a string (character count) or array (element count).
fn length_of(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => Some(s.chars().count() as u64),
        Value::Array(items) => Some(items.len() as u64),
        _ => None,
    }
}

/// Blank means missing, null, empty or whitespace-only string, or an empty
/// array.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Turn a field name into a human label: `firstName` becomes `First name`.
fn prettify(field: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in field.chars() {
        if c == '_' || c == '-' || c == '.' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else {
            if c.is_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    let mut label = words.join(" ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}
