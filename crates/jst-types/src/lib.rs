//! Structural runtime types for JSON values.
//!
//! A [`TType`] describes the shape of a JSON value: the nine primitive types
//! (`any`, `null`, `bool`, `num`, `int`, `str`, `obj`, `arr`, `date`) plus
//! enumerations, structs, lists, tuples, unions, optionals, and predicate
//! refinements. Membership is tested with [`TType::is`].
//!
//! # Example
//!
//! ```
//! use jst_types::{TType, TypeBuilder};
//! use serde_json::json;
//!
//! let t = TypeBuilder::new();
//! let point = t.struct_of(
//!     [("x".to_string(), t.num()), ("y".to_string(), t.num())],
//!     Some("Point"),
//! );
//!
//! assert!(point.is(&json!({ "x": 1, "y": 2 })));
//! assert!(!point.is(&json!({ "x": 1 })));
//! assert_eq!(point.to_string(), "Point");
//! ```

pub mod builder;
pub mod types;

pub use builder::TypeBuilder;
pub use types::{Predicate, TType};
