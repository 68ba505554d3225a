use serde::{Deserialize, Serialize};

use crate::{
    kind::EntityKind,
    record::{null_as_default, Entity, FieldValue},
};

/// A share class of a fund, carrying fee and valuation figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareClass {
    #[serde(rename = "SC_ID", deserialize_with = "null_as_default")]
    pub sc_id: String,
    #[serde(rename = "FUND_ID", deserialize_with = "null_as_default")]
    pub fund_id: String,
    #[serde(rename = "ISIN_SC", deserialize_with = "null_as_default")]
    pub isin_sc: String,
    #[serde(rename = "CURRENCY", deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(rename = "DISTRIBUTION", deserialize_with = "null_as_default")]
    pub distribution: String,
    #[serde(rename = "FEE_MGMT", deserialize_with = "null_as_default")]
    pub fee_mgmt: f64,
    #[serde(rename = "PERF_FEE", deserialize_with = "null_as_default")]
    pub perf_fee: f64,
    #[serde(rename = "EXPENSE_RATIO", deserialize_with = "null_as_default")]
    pub expense_ratio: f64,
    #[serde(rename = "NAV", deserialize_with = "null_as_default")]
    pub nav: f64,
    #[serde(rename = "AUM", deserialize_with = "null_as_default")]
    pub aum: f64,
    #[serde(rename = "STATUS", deserialize_with = "null_as_default")]
    pub status: String,
}

impl Entity for ShareClass {
    const KIND: EntityKind = EntityKind::ShareClass;

    fn primary_key(&self) -> &str {
        &self.sc_id
    }

    fn set_primary_key(&mut self, id: String) {
        self.sc_id = id;
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "scId" => FieldValue::Text(&self.sc_id),
            "fundId" => FieldValue::Text(&self.fund_id),
            "isinSc" => FieldValue::Text(&self.isin_sc),
            "currency" => FieldValue::Text(&self.currency),
            "distribution" => FieldValue::Text(&self.distribution),
            "feeMgmt" => FieldValue::Number(self.fee_mgmt),
            "perfFee" => FieldValue::Number(self.perf_fee),
            "expenseRatio" => FieldValue::Number(self.expense_ratio),
            "nav" => FieldValue::Number(self.nav),
            "aum" => FieldValue::Number(self.aum),
            "status" => FieldValue::Text(&self.status),
            _ => return None,
        };
        Some(value)
    }
}
