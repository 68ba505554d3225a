//! Entity kinds and their static schema table.

use std::{fmt, str::FromStr};

/// One of the five catalog entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    LegalEntity,
    ManagementEntity,
    FundMaster,
    SubFund,
    ShareClass,
}

/// Storage type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
}

/// A single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// camelCase name used throughout the client
    pub name: &'static str,
    /// UPPER_SNAKE name used by the backend
    pub wire_name: &'static str,
    pub ty: FieldType,
    /// Whether an add/edit form must supply a non-blank value
    pub required: bool,
}

/// A string field whose value is expected to equal another kind's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub field: &'static str,
    pub target: EntityKind,
}

/// A tap target on a list row: tapping `field` opens `target` pre-filtered by its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub field: &'static str,
    pub target: EntityKind,
}

/// Static description of an entity kind.
#[derive(Debug)]
pub struct EntitySchema {
    pub kind: EntityKind,
    /// Human readable singular label, e.g. "Fund"
    pub label: &'static str,
    /// REST collection path, e.g. "funds"
    pub path: &'static str,
    pub primary_key: &'static str,
    pub prefix: &'static str,
    pub fields: &'static [FieldDef],
    pub foreign_keys: &'static [ForeignKey],
    /// Fields matched by free-text search
    pub searchable: &'static [&'static str],
    pub links: &'static [Link],
}

const fn text(name: &'static str, wire_name: &'static str) -> FieldDef {
    FieldDef {
        name,
        wire_name,
        ty: FieldType::Text,
        required: false,
    }
}

const fn required(name: &'static str, wire_name: &'static str) -> FieldDef {
    FieldDef {
        name,
        wire_name,
        ty: FieldType::Text,
        required: true,
    }
}

const fn number(name: &'static str, wire_name: &'static str) -> FieldDef {
    FieldDef {
        name,
        wire_name,
        ty: FieldType::Number,
        required: false,
    }
}

const fn fk(field: &'static str, target: EntityKind) -> ForeignKey {
    ForeignKey { field, target }
}

const fn link(field: &'static str, target: EntityKind) -> Link {
    Link { field, target }
}

static LEGAL_ENTITY: EntitySchema = EntitySchema {
    kind: EntityKind::LegalEntity,
    label: "Legal Entity",
    path: "legal_entities",
    primary_key: "leId",
    prefix: "LE",
    fields: &[
        text("leId", "LE_ID"),
        required("lei", "LEI"),
        required("legalName", "LEGAL_NAME"),
        required("jurisdiction", "JURISDICTION"),
        required("entityType", "ENTITY_TYPE"),
    ],
    foreign_keys: &[],
    searchable: &["legalName", "leId", "jurisdiction", "entityType", "lei"],
    links: &[
        link("leId", EntityKind::ManagementEntity),
        link("leId", EntityKind::FundMaster),
        link("leId", EntityKind::SubFund),
    ],
};

static MANAGEMENT_ENTITY: EntitySchema = EntitySchema {
    kind: EntityKind::ManagementEntity,
    label: "Management Entity",
    path: "management_entities",
    primary_key: "mgmtId",
    prefix: "MG",
    fields: &[
        text("mgmtId", "MGMT_ID"),
        required("leId", "LE_ID"),
        text("registrationNo", "REGISTRATION_NO"),
        text("domicile", "DOMICILE"),
        text("entityType", "ENTITY_TYPE"),
    ],
    foreign_keys: &[fk("leId", EntityKind::LegalEntity)],
    searchable: &["mgmtId", "leId", "registrationNo", "domicile", "entityType"],
    links: &[
        link("mgmtId", EntityKind::FundMaster),
        link("mgmtId", EntityKind::SubFund),
        link("leId", EntityKind::LegalEntity),
    ],
};

static FUND_MASTER: EntitySchema = EntitySchema {
    kind: EntityKind::FundMaster,
    label: "Fund",
    path: "funds",
    primary_key: "fundId",
    prefix: "F",
    fields: &[
        text("fundId", "FUND_ID"),
        text("mgmtId", "MGMT_ID"),
        text("leId", "LE_ID"),
        text("fundCode", "FUND_CODE"),
        required("fundName", "FUND_NAME"),
        text("fundType", "FUND_TYPE"),
        text("baseCurrency", "BASE_CURRENCY"),
        text("domicile", "DOMICILE"),
        text("isinMaster", "ISIN_MASTER"),
        text("status", "STATUS"),
    ],
    foreign_keys: &[
        fk("mgmtId", EntityKind::ManagementEntity),
        fk("leId", EntityKind::LegalEntity),
    ],
    searchable: &["fundName", "fundId", "mgmtId", "leId", "fundType"],
    links: &[
        link("fundId", EntityKind::SubFund),
        link("fundId", EntityKind::ShareClass),
        link("leId", EntityKind::LegalEntity),
        link("mgmtId", EntityKind::ManagementEntity),
    ],
};

static SUB_FUND: EntitySchema = EntitySchema {
    kind: EntityKind::SubFund,
    label: "Sub-Fund",
    path: "sub_funds",
    primary_key: "subfundId",
    prefix: "SF",
    fields: &[
        text("subfundId", "SUBFUND_ID"),
        required("parentFundId", "PARENT_FUND_ID"),
        text("leId", "LE_ID"),
        text("mgmtId", "MGMT_ID"),
        text("isinSub", "ISIN_SUB"),
        text("currency", "CURRENCY"),
    ],
    foreign_keys: &[
        fk("parentFundId", EntityKind::FundMaster),
        fk("leId", EntityKind::LegalEntity),
        fk("mgmtId", EntityKind::ManagementEntity),
    ],
    searchable: &[
        "subfundId",
        "parentFundId",
        "leId",
        "mgmtId",
        "isinSub",
        "currency",
    ],
    links: &[
        link("parentFundId", EntityKind::FundMaster),
        link("mgmtId", EntityKind::ManagementEntity),
        link("leId", EntityKind::LegalEntity),
        link("parentFundId", EntityKind::ShareClass),
    ],
};

static SHARE_CLASS: EntitySchema = EntitySchema {
    kind: EntityKind::ShareClass,
    label: "Share Class",
    path: "share_classes",
    primary_key: "scId",
    prefix: "SC",
    fields: &[
        text("scId", "SC_ID"),
        required("fundId", "FUND_ID"),
        text("isinSc", "ISIN_SC"),
        text("currency", "CURRENCY"),
        text("distribution", "DISTRIBUTION"),
        number("feeMgmt", "FEE_MGMT"),
        number("perfFee", "PERF_FEE"),
        number("expenseRatio", "EXPENSE_RATIO"),
        number("nav", "NAV"),
        number("aum", "AUM"),
        text("status", "STATUS"),
    ],
    foreign_keys: &[fk("fundId", EntityKind::FundMaster)],
    searchable: &["scId", "fundId", "currency"],
    links: &[link("fundId", EntityKind::FundMaster)],
};

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::LegalEntity,
        EntityKind::ManagementEntity,
        EntityKind::FundMaster,
        EntityKind::SubFund,
        EntityKind::ShareClass,
    ];

    pub fn schema(self) -> &'static EntitySchema {
        match self {
            EntityKind::LegalEntity => &LEGAL_ENTITY,
            EntityKind::ManagementEntity => &MANAGEMENT_ENTITY,
            EntityKind::FundMaster => &FUND_MASTER,
            EntityKind::SubFund => &SUB_FUND,
            EntityKind::ShareClass => &SHARE_CLASS,
        }
    }

    /// snake_case identifier of the kind, e.g. `fund_master`
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::LegalEntity => "legal_entity",
            EntityKind::ManagementEntity => "management_entity",
            EntityKind::FundMaster => "fund_master",
            EntityKind::SubFund => "sub_fund",
            EntityKind::ShareClass => "share_class",
        }
    }

    /// Resolves which field of `target` must be pinned when a user taps `field` of a
    /// `self` record.
    ///
    /// `field` identifies a referenced kind: `self` when it is the primary key, otherwise
    /// the foreign key's target. The pinned field is the target's primary key when the
    /// target is the referenced kind, or the target's foreign key pointing at it.
    ///
    /// # Returns
    /// - `Some(field)` - Canonical name of the field to pin on `target`
    /// - `None` - `field` is unknown or `target` holds no reference to the same kind
    pub fn resolve_link(self, field: &str, target: EntityKind) -> Option<&'static str> {
        let referenced = self.schema().referenced_kind(field)?;
        let target_schema = target.schema();

        if target == referenced {
            return Some(target_schema.primary_key);
        }

        target_schema
            .foreign_keys
            .iter()
            .find(|fk| fk.target == referenced)
            .map(|fk| fk.field)
    }
}

impl EntitySchema {
    /// Looks up a field by camelCase or wire name, ignoring case.
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|def| {
            def.name.eq_ignore_ascii_case(name) || def.wire_name.eq_ignore_ascii_case(name)
        })
    }

    pub fn primary_key_field(&self) -> &'static FieldDef {
        // Every schema lists its primary key first.
        &self.fields[0]
    }

    pub fn foreign_key(&self, field: &str) -> Option<&'static ForeignKey> {
        let def = self.field(field)?;
        self.foreign_keys.iter().find(|fk| fk.field == def.name)
    }

    /// Kind whose primary key the values of `field` hold.
    pub fn referenced_kind(&self, field: &str) -> Option<EntityKind> {
        let def = self.field(field)?;
        if def.name == self.primary_key {
            return Some(self.kind);
        }
        self.foreign_key(def.name).map(|fk| fk.target)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema().label)
    }
}

/// Error returned when a string names no entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown entity kind: {:?}", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for EntityKind {
    type Err = ParseKindError;

    /// Accepts the REST path (`funds`), the snake_case name (`fund_master`) or the label
    /// (`Fund`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                let schema = kind.schema();
                schema.path.eq_ignore_ascii_case(needle)
                    || kind.as_str().eq_ignore_ascii_case(needle)
                    || schema.label.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
