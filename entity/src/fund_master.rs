use serde::{Deserialize, Serialize};

use crate::{
    kind::EntityKind,
    record::{null_as_default, Entity, FieldValue},
};

/// A fund, managed by a management entity on behalf of a legal entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundMaster {
    #[serde(rename = "FUND_ID", deserialize_with = "null_as_default")]
    pub fund_id: String,
    #[serde(rename = "MGMT_ID", deserialize_with = "null_as_default")]
    pub mgmt_id: String,
    #[serde(rename = "LE_ID", deserialize_with = "null_as_default")]
    pub le_id: String,
    #[serde(rename = "FUND_CODE", deserialize_with = "null_as_default")]
    pub fund_code: String,
    #[serde(rename = "FUND_NAME", deserialize_with = "null_as_default")]
    pub fund_name: String,
    #[serde(rename = "FUND_TYPE", deserialize_with = "null_as_default")]
    pub fund_type: String,
    #[serde(rename = "BASE_CURRENCY", deserialize_with = "null_as_default")]
    pub base_currency: String,
    #[serde(rename = "DOMICILE", deserialize_with = "null_as_default")]
    pub domicile: String,
    #[serde(rename = "ISIN_MASTER", deserialize_with = "null_as_default")]
    pub isin_master: String,
    #[serde(rename = "STATUS", deserialize_with = "null_as_default")]
    pub status: String,
}

impl Entity for FundMaster {
    const KIND: EntityKind = EntityKind::FundMaster;

    fn primary_key(&self) -> &str {
        &self.fund_id
    }

    fn set_primary_key(&mut self, id: String) {
        self.fund_id = id;
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "fundId" => &self.fund_id,
            "mgmtId" => &self.mgmt_id,
            "leId" => &self.le_id,
            "fundCode" => &self.fund_code,
            "fundName" => &self.fund_name,
            "fundType" => &self.fund_type,
            "baseCurrency" => &self.base_currency,
            "domicile" => &self.domicile,
            "isinMaster" => &self.isin_master,
            "status" => &self.status,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }
}
