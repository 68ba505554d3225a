//! Add/edit form validation.
//!
//! Forms arrive as raw text keyed by field name. [`build_record`] turns them into a typed
//! record before any request is made, so a rejected form never reaches the network.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use entity::{Entity, FieldDef, FieldType};
use serde_json::{Map, Value};

use crate::error::{validation::ValidationError, Error};

/// Raw form values as typed by the user, keyed by camelCase or wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Value entered for `def`, under either of its names.
    pub fn get(&self, def: &FieldDef) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| {
                key.eq_ignore_ascii_case(def.name) || key.eq_ignore_ascii_case(def.wire_name)
            })
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut form = FormInput::new();
        for (field, value) in iter {
            form.insert(field, value);
        }
        form
    }
}

/// Builds a record of kind `E` with primary key `id` from `form`.
///
/// Text is trimmed. Every blank required field is reported at once. Numbers that fail to
/// parse become `0.0`. A primary-key value in the form is ignored: the key is always `id`.
///
/// # Returns
/// - `Ok(E)` - The validated record
/// - `Err(Error::ValidationError)` - Blank id, unknown form field or missing required fields
pub fn build_record<E: Entity>(id: &str, form: &FormInput) -> Result<E, Error> {
    let schema = E::KIND.schema();

    let id = id.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyId.into());
    }

    if let Some(unknown) = form.keys().find(|key| !schema.has_field(key)) {
        return Err(ValidationError::UnknownField {
            kind: E::KIND,
            field: unknown.to_string(),
        }
        .into());
    }

    let mut missing = Vec::new();
    let mut object = Map::new();

    for def in schema.fields {
        if def.name == schema.primary_key {
            object.insert(def.wire_name.to_string(), Value::String(id.to_string()));
            continue;
        }

        let raw = form.get(def).map(str::trim).unwrap_or_default();
        if def.required && raw.is_empty() {
            missing.push(def.name);
        }

        let value = match def.ty {
            FieldType::Text => Value::String(raw.to_string()),
            FieldType::Number => Value::from(parse_number(def, raw)),
        };
        object.insert(def.wire_name.to_string(), value);
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            kind: E::KIND,
            fields: missing,
        }
        .into());
    }

    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Parses a numeric form field, falling back to `0.0`.
fn parse_number(def: &FieldDef, raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!("{} is not a number ({:?}), using 0.0", def.name, raw);
            0.0
        }
    }
}
