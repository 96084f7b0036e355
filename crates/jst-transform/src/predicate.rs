//! Reusable value predicates for building refinements.

use jst_types::Predicate;
use regex::Regex;
use serde_json::Value;

/// AND-compose an accumulator with the next predicate.
///
/// With no accumulator yet, the next predicate stands alone; otherwise the
/// composed predicate holds only when both components hold.
pub fn and(acc: Option<Predicate>, next: Predicate) -> Option<Predicate> {
    Some(match acc {
        Some(prev) => Predicate::new(move |v| prev.test(v) && next.test(v)),
        None => next,
    })
}

/// Length of a string (character count) or array (element count).
pub(crate) fn length_of(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => Some(s.chars().count() as u64),
        Value::Array(items) => Some(items.len() as u64),
        _ => None,
    }
}

/// String or array length at least `n`.
pub fn min_length(n: u64) -> Predicate {
    Predicate::new(move |v| length_of(v).is_some_and(|len| len >= n))
}

/// String or array length at most `n`.
pub fn max_length(n: u64) -> Predicate {
    Predicate::new(move |v| length_of(v).is_some_and(|len| len <= n))
}

/// Number strictly greater than `n`.
pub fn gt(n: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|x| x > n))
}

/// Number greater than or equal to `n`.
pub fn gte(n: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|x| x >= n))
}

/// Number strictly less than `n`.
pub fn lt(n: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|x| x < n))
}

/// Number less than or equal to `n`.
pub fn lte(n: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|x| x <= n))
}

/// Number with zero fractional part.
pub fn is_integer() -> Predicate {
    Predicate::new(|v| v.as_f64().is_some_and(|x| x.fract() == 0.0))
}

/// String matching the given expression.
pub fn regexp(re: Regex) -> Predicate {
    Predicate::new(move |v| v.as_str().is_some_and(|s| re.is_match(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn and_composition_is_conjunction() {
        let p = and(None, min_length(2));
        let p = and(p, max_length(4)).unwrap();
        assert!(!p.test(&json!("a")));
        assert!(p.test(&json!("abc")));
        assert!(!p.test(&json!("abcde")));
    }

    #[test]
    fn length_predicates_cover_strings_and_arrays() {
        assert!(min_length(2).test(&json!([1, 2])));
        assert!(!min_length(2).test(&json!([1])));
        assert!(max_length(2).test(&json!("ab")));
        assert!(!min_length(1).test(&json!(5)));
    }

    #[test]
    fn numeric_bounds() {
        assert!(gt(2.0).test(&json!(3)));
        assert!(!gt(2.0).test(&json!(2)));
        assert!(gte(2.0).test(&json!(2)));
        assert!(lt(2.0).test(&json!(1)));
        assert!(!lte(2.0).test(&json!(3)));
        assert!(!gte(2.0).test(&json!("2")));
    }

    #[test]
    fn integrality() {
        assert!(is_integer().test(&json!(1)));
        assert!(!is_integer().test(&json!(1.1)));
    }

    #[test]
    fn regexp_rejects_non_strings() {
        let p = regexp(Regex::new("^h").unwrap());
        assert!(p.test(&json!("hello")));
        assert!(!p.test(&json!("aaa")));
        assert!(!p.test(&json!(7)));
    }
}
