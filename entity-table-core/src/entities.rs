//! Entity Data Model - Ordered Source Table
//!
//! The WHATWG `entities.json` lists most entities twice: once with the
//! trailing `;` and once as a bare legacy alias. Only the terminated form
//! is emitted.

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::generator::GeneratorError;

pub type EntityName = String;

/// Descriptor attached to an entity name. Kept as raw JSON: only
/// `characters` is read, and only for retained entries.
pub type EntityDescriptor = Value;

/// A semicolon-terminated entry, ready for escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredEntity<'a> {
    /// Name as it appears in the source document, e.g. `&amp;`
    pub name: &'a str,
    /// Emitted key, e.g. `amp`
    pub key: &'a str,
    pub characters: &'a str,
}

/// Entity table in source document order
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    entries: IndexMap<EntityName, EntityDescriptor>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Parse a JSON object of `name -> descriptor`.
    ///
    /// A repeated name keeps the position of its first occurrence and the
    /// value of its last.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let entries: IndexMap<EntityName, EntityDescriptor> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn load_from_path(path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|e| GeneratorError::InputError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_json_str(&content).map_err(|e| GeneratorError::InputError {
            path: path.to_path_buf(),
            reason: format!("invalid entity JSON: {}", e),
        })
    }

    pub fn insert(&mut self, name: impl Into<EntityName>, descriptor: EntityDescriptor) {
        self.entries.insert(name.into(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&EntityDescriptor> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityDescriptor)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), d))
    }

    /// Semicolon-terminated entries in document order.
    ///
    /// Bare aliases are skipped without looking at their descriptor; a
    /// retained entry without a string `characters` yields `DataError`.
    pub fn retained(&self) -> impl Iterator<Item = Result<FilteredEntity<'_>, GeneratorError>> {
        self.iter().filter_map(|(name, descriptor)| {
            let key = emitted_key(name)?;
            Some(characters_of(name, descriptor).map(|characters| FilteredEntity {
                name,
                key,
                characters,
            }))
        })
    }
}

fn characters_of<'a>(name: &str, descriptor: &'a Value) -> Result<&'a str, GeneratorError> {
    let data_error = |reason: &str| GeneratorError::DataError {
        entity: name.to_string(),
        reason: reason.to_string(),
    };
    match descriptor.get("characters") {
        Some(Value::String(characters)) => Ok(characters),
        None | Some(Value::Null) => Err(data_error("missing `characters` field")),
        Some(_) => Err(data_error("`characters` is not a string")),
    }
}

/// Strip one leading `&` (if any) and the trailing `;`.
///
/// Returns `None` for names that are not semicolon-terminated.
pub fn emitted_key(name: &str) -> Option<&str> {
    let stem = name.strip_suffix(';')?;
    Some(stem.strip_prefix('&').unwrap_or(stem))
}
