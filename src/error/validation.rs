use entity::EntityKind;
use thiserror::Error;

/// Input rejected locally; never retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind}: required fields missing: {}", .fields.join(", "))]
    MissingFields {
        kind: EntityKind,
        fields: Vec<&'static str>,
    },
    #[error("{kind} has no field named {field:?}")]
    UnknownField { kind: EntityKind, field: String },
    #[error("{kind} field {field:?} is not numeric and cannot be sorted")]
    NotNumeric { kind: EntityKind, field: &'static str },
    #[error("{kind} records have no status")]
    NoStatusField { kind: EntityKind },
    #[error("{from} field {field:?} does not lead to {target}")]
    NoNavigationTarget {
        from: EntityKind,
        field: String,
        target: EntityKind,
    },
    #[error("{kind} field {field:?} is not a foreign key")]
    NotForeignKey { kind: EntityKind, field: String },
    #[error("Please enter a Fund ID")]
    EmptyFundId,
    #[error("Identifier must not be empty")]
    EmptyId,
}
