//! Catalog records and the static registry describing them.
//!
//! Each of the five entity kinds of the fund back office (legal entities, management
//! entities, funds, sub-funds and share classes) is a flat serializable record. The
//! [`kind`] module holds the schema table shared by every consumer: primary key field and
//! prefix, field list with wire names, foreign-key declarations, searchable fields and the
//! navigation links a list row exposes.

pub mod fund_master;
pub mod kind;
pub mod legal_entity;
pub mod management_entity;
pub mod record;
pub mod share_class;
pub mod sub_fund;

pub use fund_master::FundMaster;
pub use kind::{EntityKind, EntitySchema, FieldDef, FieldType, ForeignKey, Link, ParseKindError};
pub use legal_entity::LegalEntity;
pub use management_entity::ManagementEntity;
pub use record::{Entity, FieldValue};
pub use share_class::ShareClass;
pub use sub_fund::SubFund;

pub mod prelude {
    pub use crate::{
        Entity, EntityKind, FieldValue, FundMaster, LegalEntity, ManagementEntity, ShareClass,
        SubFund,
    };
}
