//! Process-wide extension registries for custom formats and named types.
//!
//! Both tables are global to the process: a registration affects every
//! subsequent transform until the matching reset. Registration is expected
//! to complete at startup, before concurrent transform calls; the RwLock
//! keeps concurrent reads safe regardless.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use jst_types::{Predicate, TType};

use crate::error::TransformError;
use crate::transform::SchemaKind;

/// A registered format: either a predicate refining the base string type or
/// a full runtime type that replaces it outright.
#[derive(Debug, Clone)]
pub enum FormatEntry {
    Predicate(Predicate),
    Type(TType),
}

impl From<Predicate> for FormatEntry {
    fn from(p: Predicate) -> Self {
        Self::Predicate(p)
    }
}

impl From<TType> for FormatEntry {
    fn from(t: TType) -> Self {
        Self::Type(t)
    }
}

static FORMATS: LazyLock<RwLock<HashMap<String, FormatEntry>>> =
    LazyLock::new(Default::default);

static TYPES: LazyLock<RwLock<HashMap<String, TType>>> = LazyLock::new(Default::default);

/// Register a named format. A name may be registered at most once for the
/// lifetime of the process (or since the last [`reset_formats`]).
pub fn register_format(
    name: &str,
    entry: impl Into<FormatEntry>,
) -> Result<(), TransformError> {
    let mut formats = FORMATS.write().unwrap();
    if formats.contains_key(name) {
        return Err(TransformError::DuplicateFormat(name.to_string()));
    }
    formats.insert(name.to_string(), entry.into());
    Ok(())
}

/// Clear the format registry unconditionally.
pub fn reset_formats() {
    FORMATS.write().unwrap().clear();
}

pub(crate) fn lookup_format(name: &str) -> Option<FormatEntry> {
    FORMATS.read().unwrap().get(name).cloned()
}

/// Register a pre-built type under a custom name. The seven schema kind
/// names are reserved.
pub fn register_type(name: &str, type_: TType) -> Result<(), TransformError> {
    if SchemaKind::from_name(name).is_some() {
        return Err(TransformError::ReservedName(name.to_string()));
    }
    let mut types = TYPES.write().unwrap();
    if types.contains_key(name) {
        return Err(TransformError::DuplicateType(name.to_string()));
    }
    types.insert(name.to_string(), type_);
    Ok(())
}

/// Clear the custom type registry unconditionally.
pub fn reset_types() {
    TYPES.write().unwrap().clear();
}

pub(crate) fn lookup_type(name: &str) -> Option<TType> {
    TYPES.read().unwrap().get(name).cloned()
}
