//! The [`Entity`] trait implemented by every catalog record.

use std::{borrow::Cow, fmt::Debug};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::kind::EntityKind;

/// Borrowed value of a record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Text form of the value, as shown in a list row and matched by filters.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(number) => Some(number),
            FieldValue::Text(_) => None,
        }
    }
}

/// A catalog record with a designated, immutable primary key.
pub trait Entity:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    fn primary_key(&self) -> &str;

    /// Assigns the primary key. Only used when a new record receives its proposed id or
    /// when an edit payload is pinned to the id being edited.
    fn set_primary_key(&mut self, id: String);

    /// Value of the field with the given canonical camelCase name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Value of a field named in either camelCase or wire form.
    fn lookup(&self, name: &str) -> Option<FieldValue<'_>> {
        let def = Self::KIND.schema().field(name)?;
        self.field(def.name)
    }
}

/// Decodes `null` as the type's default. Used for every record field so that partially
/// populated backend rows still load.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
