//! Enum value/key mapping
//!
//! Enum-valued fields are stored and displayed as human-readable strings
//! ("Black and White") but addressed in code and forms by symbolic keys
//! ("black_and_white"). This module is the seam between the two: given a
//! table describing which fields are enum-valued, [`convert_enum_values_to_keys`]
//! rewrites each such field from its display value to its key, recursing
//! into nested objects and arrays so embedded sub-records (e.g. a roll's
//! event log) are converted consistently.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One enum definition: an ordered mapping from symbolic key to display
/// value (e.g. `color` -> "Color").
///
/// Display values are expected to be unique within one definition; if they
/// are not, reverse lookup returns the first entry in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    entries: Vec<(String, String)>,
}

impl EnumDef {
    /// Build a definition from `(key, display)` pairs, preserving order.
    pub fn from_pairs<K, D>(pairs: impl IntoIterator<Item = (K, D)>) -> Self
    where
        K: Into<String>,
        D: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, d)| (k.into(), d.into()))
                .collect(),
        }
    }

    /// Reverse lookup: the symbolic key whose display value equals
    /// `display`. First match in definition order wins.
    pub fn key_for_display(&self, display: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, d)| d == display)
            .map(|(k, _)| k.as_str())
    }

    /// Forward lookup: the display value for a symbolic key.
    pub fn display_for_key(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The set of enum definitions, indexed by the record field name each
/// applies to. Field names are matched by name at every nesting level,
/// not by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTable {
    fields: BTreeMap<String, EnumDef>,
}

impl EnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a field's enum definition.
    pub fn with_field(mut self, field: impl Into<String>, def: EnumDef) -> Self {
        self.fields.insert(field.into(), def);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, def: EnumDef) {
        self.fields.insert(field.into(), def);
    }

    pub fn get(&self, field: &str) -> Option<&EnumDef> {
        self.fields.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

/// Rewrite every enum-valued field of `input` from its display value to
/// its symbolic key.
///
/// Pure and synchronous; `input` is never mutated and the result depends
/// only on the arguments. Shape is preserved:
///
/// - arrays convert element-wise, order and length intact;
/// - objects come back with every field present: fields named in `table`
///   get the matching key, other object/array fields recurse with the
///   same table, and everything else is copied as-is;
/// - primitives (including null) pass through unchanged.
///
/// A lookup miss - a value that equals no display value in the field's
/// definition, including any non-string value - degrades to JSON `null`
/// rather than an error; the field stays present. No input shape makes
/// this function fail.
///
/// Converting output a second time is NOT a no-op: symbolic keys are not
/// valid display values, so already-converted fields degrade to null.
pub fn convert_enum_values_to_keys(input: &Value, table: &EnumTable) -> Value {
    match input {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert_enum_values_to_keys(item, table))
                .collect(),
        ),
        Value::Object(fields) => {
            let mut out = Map::new();
            for (name, value) in fields {
                let converted = match table.get(name) {
                    Some(def) => key_from_display_value(def, value),
                    None if value.is_object() || value.is_array() => {
                        convert_enum_values_to_keys(value, table)
                    }
                    None => value.clone(),
                };
                out.insert(name.clone(), converted);
            }
            Value::Object(out)
        }
        primitive => primitive.clone(),
    }
}

fn key_from_display_value(def: &EnumDef, value: &Value) -> Value {
    match value.as_str().and_then(|display| def.key_for_display(display)) {
        Some(key) => Value::String(key.to_string()),
        None => Value::Null,
    }
}
