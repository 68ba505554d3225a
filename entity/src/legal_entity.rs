use serde::{Deserialize, Serialize};

use crate::{
    kind::EntityKind,
    record::{null_as_default, Entity, FieldValue},
};

/// A legal entity registered with its LEI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalEntity {
    #[serde(rename = "LE_ID", deserialize_with = "null_as_default")]
    pub le_id: String,
    #[serde(rename = "LEI", deserialize_with = "null_as_default")]
    pub lei: String,
    #[serde(rename = "LEGAL_NAME", deserialize_with = "null_as_default")]
    pub legal_name: String,
    #[serde(rename = "JURISDICTION", deserialize_with = "null_as_default")]
    pub jurisdiction: String,
    #[serde(rename = "ENTITY_TYPE", deserialize_with = "null_as_default")]
    pub entity_type: String,
}

impl Entity for LegalEntity {
    const KIND: EntityKind = EntityKind::LegalEntity;

    fn primary_key(&self) -> &str {
        &self.le_id
    }

    fn set_primary_key(&mut self, id: String) {
        self.le_id = id;
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "leId" => &self.le_id,
            "lei" => &self.lei,
            "legalName" => &self.legal_name,
            "jurisdiction" => &self.jurisdiction,
            "entityType" => &self.entity_type,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }
}
