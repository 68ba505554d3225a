//! Records populated with recognisable test values.
//!
//! Every factory takes the numeric part of the primary key and formats it the way the
//! backend does, e.g. `mock_fund(7, ..)` yields fund `F000007`.

use entity::{FundMaster, LegalEntity, ManagementEntity, ShareClass, SubFund};

pub fn le_id(n: u32) -> String {
    format!("LE{:06}", n)
}

pub fn mgmt_id(n: u32) -> String {
    format!("MG{:06}", n)
}

pub fn fund_id(n: u32) -> String {
    format!("F{:06}", n)
}

pub fn subfund_id(n: u32) -> String {
    format!("SF{:06}", n)
}

pub fn sc_id(n: u32) -> String {
    format!("SC{:06}", n)
}

/// Create a mock legal entity.
///
/// # Arguments
/// - `n` - Numeric part of the `leId`
///
/// # Returns
/// - `LegalEntity` - A Luxembourg SICAV with all required fields set
pub fn mock_legal_entity(n: u32) -> LegalEntity {
    LegalEntity {
        le_id: le_id(n),
        lei: format!("5493001KJTIIGC8Y{:04}", n),
        legal_name: format!("Autumn Capital {} S.A.", n),
        jurisdiction: "LU".to_string(),
        entity_type: "SICAV".to_string(),
    }
}

/// Create a mock management entity owned by legal entity `le`.
pub fn mock_management_entity(n: u32, le: u32) -> ManagementEntity {
    ManagementEntity {
        mgmt_id: mgmt_id(n),
        le_id: le_id(le),
        registration_no: format!("B{:06}", n),
        domicile: "LU".to_string(),
        entity_type: "ManCo".to_string(),
    }
}

/// Create a mock active fund managed by `mgmt` on behalf of `le`.
pub fn mock_fund(n: u32, mgmt: u32, le: u32) -> FundMaster {
    FundMaster {
        fund_id: fund_id(n),
        mgmt_id: mgmt_id(mgmt),
        le_id: le_id(le),
        fund_code: format!("FC{}", n),
        fund_name: format!("Global Equity {}", n),
        fund_type: "UCITS".to_string(),
        base_currency: "EUR".to_string(),
        domicile: "LU".to_string(),
        isin_master: format!("LU{:010}", n),
        status: "ACTIVE".to_string(),
    }
}

pub fn mock_sub_fund(n: u32, parent_fund: u32) -> SubFund {
    SubFund {
        subfund_id: subfund_id(n),
        parent_fund_id: fund_id(parent_fund),
        le_id: le_id(1),
        mgmt_id: mgmt_id(1),
        isin_sub: format!("LU9{:09}", n),
        currency: "EUR".to_string(),
    }
}

/// Create a mock share class of fund `fund`.
///
/// # Arguments
/// - `n` - Numeric part of the `scId`
/// - `fund` - Numeric part of the owning `fundId`
/// - `currency` - Share class currency
/// - `aum` - Assets under management
pub fn mock_share_class(n: u32, fund: u32, currency: &str, aum: f64) -> ShareClass {
    ShareClass {
        sc_id: sc_id(n),
        fund_id: fund_id(fund),
        isin_sc: format!("LU8{:09}", n),
        currency: currency.to_string(),
        distribution: "ACC".to_string(),
        fee_mgmt: 0.75,
        perf_fee: 10.0,
        expense_ratio: 0.9,
        nav: 100.0 + n as f64,
        aum,
        status: "ACTIVE".to_string(),
    }
}
