//! Field-level validation of JSON values against declarative constraint
//! fragments.
//!
//! A constraint fragment is a plain JSON object describing one field's rules
//! (`{"presence": true}`, `{"minimum": 2}`, `{"format": "/^H/i"}`, ...).
//! [`validate`] checks a record of attributes against a record of fragments
//! and returns human-readable messages per field; [`validate_field`] is the
//! single-field shortcut used by form layers.
//!
//! # Example
//!
//! ```
//! use serde_json::{json, Map};
//!
//! let mut attributes = Map::new();
//! attributes.insert("username".to_string(), json!(""));
//! let mut constraints = Map::new();
//! constraints.insert("username".to_string(), json!({ "presence": true }));
//!
//! let errors = jst_validate::validate(&attributes, &constraints).unwrap();
//! assert_eq!(errors["username"], ["Username can't be blank"]);
//! ```

pub mod pattern;
pub mod validate;

pub use pattern::compile_pattern;
pub use validate::{validate, validate_field};
