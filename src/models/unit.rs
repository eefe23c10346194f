use crate::models::UniqError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Names of every `Unit` field, keyed for lookup of requested field names.
static FIELD_LOOKUP: Lazy<HashMap<&'static str, Field>> =
    Lazy::new(|| Field::ALL.iter().map(|f| (f.as_str(), *f)).collect());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Unit {
    pub id: Value,
    pub name: Value,
    pub status: Value,
    pub sum: Value,
    pub data: Value,
    pub updated_at: Value,
}

/// A field value. JSON is read untagged, so variant order decides which
/// shape wins: integers past `i64::MAX` become `UInt` and objects with
/// exactly the unit fields become nested units. JSON strings always stay
/// `String`; `Timestamp` is only built in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    #[serde(skip_deserializing)]
    Timestamp(DateTime<Utc>),
    String(String),
    List(Vec<Value>),
    Unit(Box<Unit>),
    Map(BTreeMap<String, Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Name,
    Status,
    Sum,
    Data,
    UpdatedAt,
}

impl Field {
    /// Every field in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Status,
        Self::Sum,
        Self::Data,
        Self::UpdatedAt,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Status => "status",
            Self::Sum => "sum",
            Self::Data => "data",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// Exact, case-sensitive lookup of a field by its name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        FIELD_LOOKUP.get(name).copied()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Unit {
    #[must_use]
    pub const fn get(&self, field: Field) -> &Value {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Status => &self.status,
            Field::Sum => &self.sum,
            Field::Data => &self.data,
            Field::UpdatedAt => &self.updated_at,
        }
    }

    /// Keep the first unit of every group that agrees on `field_names`
    /// (all fields when empty), in input order.
    ///
    /// # Errors
    /// Returns `UniqError::UnknownFields` if a requested name is not a `Unit` field.
    pub fn uniq<'a, S: AsRef<str>>(
        units: &'a [Self],
        field_names: &[S],
    ) -> Result<Vec<&'a Self>, UniqError> {
        crate::services::uniq::uniq_units(units, field_names)
    }
}

impl Value {
    #[must_use]
    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Self::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Timestamp(dt)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<Unit> for Value {
    fn from(unit: Unit) -> Self {
        Self::Unit(Box::new(unit))
    }
}
