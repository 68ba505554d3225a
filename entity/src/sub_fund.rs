use serde::{Deserialize, Serialize};

use crate::{
    kind::EntityKind,
    record::{null_as_default, Entity, FieldValue},
};

/// A compartment of a parent fund.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubFund {
    #[serde(rename = "SUBFUND_ID", deserialize_with = "null_as_default")]
    pub subfund_id: String,
    #[serde(rename = "PARENT_FUND_ID", deserialize_with = "null_as_default")]
    pub parent_fund_id: String,
    #[serde(rename = "LE_ID", deserialize_with = "null_as_default")]
    pub le_id: String,
    #[serde(rename = "MGMT_ID", deserialize_with = "null_as_default")]
    pub mgmt_id: String,
    #[serde(rename = "ISIN_SUB", deserialize_with = "null_as_default")]
    pub isin_sub: String,
    #[serde(rename = "CURRENCY", deserialize_with = "null_as_default")]
    pub currency: String,
}

impl Entity for SubFund {
    const KIND: EntityKind = EntityKind::SubFund;

    fn primary_key(&self) -> &str {
        &self.subfund_id
    }

    fn set_primary_key(&mut self, id: String) {
        self.subfund_id = id;
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "subfundId" => &self.subfund_id,
            "parentFundId" => &self.parent_fund_id,
            "leId" => &self.le_id,
            "mgmtId" => &self.mgmt_id,
            "isinSub" => &self.isin_sub,
            "currency" => &self.currency,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }
}
