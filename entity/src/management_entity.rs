use serde::{Deserialize, Serialize};

use crate::{
    kind::EntityKind,
    record::{null_as_default, Entity, FieldValue},
};

/// A management company, owned by a legal entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagementEntity {
    #[serde(rename = "MGMT_ID", deserialize_with = "null_as_default")]
    pub mgmt_id: String,
    #[serde(rename = "LE_ID", deserialize_with = "null_as_default")]
    pub le_id: String,
    #[serde(rename = "REGISTRATION_NO", deserialize_with = "null_as_default")]
    pub registration_no: String,
    #[serde(rename = "DOMICILE", deserialize_with = "null_as_default")]
    pub domicile: String,
    #[serde(rename = "ENTITY_TYPE", deserialize_with = "null_as_default")]
    pub entity_type: String,
}

impl Entity for ManagementEntity {
    const KIND: EntityKind = EntityKind::ManagementEntity;

    fn primary_key(&self) -> &str {
        &self.mgmt_id
    }

    fn set_primary_key(&mut self, id: String) {
        self.mgmt_id = id;
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "mgmtId" => &self.mgmt_id,
            "leId" => &self.le_id,
            "registrationNo" => &self.registration_no,
            "domicile" => &self.domicile,
            "entityType" => &self.entity_type,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }
}
