//! JSON Schema → runtime type transformation.
//!
//! [`transform`] converts a JSON Schema node into a structural runtime type
//! ([`TType`], from `jst-types`) together with a parallel constraint tree
//! consumed by the field-level validator in `jst-validate`. The two halves
//! are derived independently: constraints describe the same rules the type
//! enforces, but never influence which type is produced.
//!
//! Custom string formats and custom named types are supported through two
//! process-wide registries ([`register_format`], [`register_type`]).
//!
//! # Example
//!
//! ```
//! use jst_transform::transform;
//! use serde_json::json;
//!
//! let result = transform(&json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string", "minLength": 2 },
//!         "age": { "type": "integer", "minimum": 0 }
//!     },
//!     "required": ["name"]
//! }))
//! .unwrap();
//!
//! assert!(result.type_.is(&json!({ "name": "Ada", "age": 36 })));
//! assert!(result.type_.is(&json!({ "name": "Ada" })));
//! assert!(!result.type_.is(&json!({ "age": 36 })));
//!
//! let options = result.options.unwrap();
//! assert_eq!(
//!     options.fields["name"].error(&json!(null), "name").unwrap(),
//!     "Name can't be blank"
//! );
//! ```

pub mod constraint;
pub mod error;
pub mod predicate;
pub mod registry;
pub mod transform;

pub use constraint::{Constraint, FieldValidator, StructOptions, TransformResult};
pub use error::TransformError;
pub use registry::{register_format, register_type, reset_formats, reset_types, FormatEntry};
pub use transform::{transform, SchemaKind};

// The adapter types the transform results are built from.
pub use jst_types::{Predicate, TType, TypeBuilder};
