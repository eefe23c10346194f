//! Canonical encoding of unit projections.
//!
//! Every value is rendered as a type-tagged JSON tree, so two projections
//! get the same key exactly when they are structurally equal. Nested units
//! and maps compare by content, never by address.

use crate::models::{Field, Unit, Value};
use crate::services::uniq::FieldSet;
use chrono::SecondsFormat;
use serde_json::{json, Map, Value as Json};

/// Encode a single value as a tagged JSON tree.
///
/// Floats are keyed by their bit pattern, so `NaN` matches itself and
/// `-0.0` differs from `0.0`.
#[must_use]
pub fn canonical_value(value: &Value) -> Json {
    match value {
        Value::Null => json!(["null"]),
        Value::Bool(b) => json!(["bool", b]),
        Value::Int(n) => json!(["int", n]),
        Value::UInt(n) => json!(["uint", n]),
        Value::Float(f) => json!(["float", format!("{:016x}", f.to_bits())]),
        Value::Timestamp(dt) => json!(["time", dt.to_rfc3339_opts(SecondsFormat::Nanos, true)]),
        Value::String(s) => json!(["str", s]),
        Value::List(items) => {
            json!(["list", items.iter().map(canonical_value).collect::<Vec<_>>()])
        }
        Value::Map(map) => {
            let entries: Map<String, Json> = map
                .iter()
                .map(|(k, v)| (k.clone(), canonical_value(v)))
                .collect();
            json!(["map", entries])
        }
        Value::Unit(unit) => json!(["unit", project(unit, &Field::ALL)]),
    }
}

/// Key of `unit` restricted to `fields`.
#[must_use]
pub fn canonical_key(unit: &Unit, fields: &FieldSet) -> String {
    project(unit, fields.fields()).to_string()
}

fn project(unit: &Unit, fields: &[Field]) -> Json {
    Json::Array(
        fields
            .iter()
            .map(|field| json!([field.as_str(), canonical_value(unit.get(*field))]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::collections::BTreeMap;

    fn key(value: &Value) -> String {
        canonical_value(value).to_string()
    }

    #[test]
    fn test_scalars_are_tagged() {
        assert_ne!(key(&Value::Int(1)), key(&Value::Float(1.0)));
        assert_ne!(key(&Value::from("1")), key(&Value::Int(1)));
        assert_ne!(key(&Value::Null), key(&Value::from("null")));
        assert_ne!(key(&Value::Bool(false)), key(&Value::Null));
        assert_ne!(key(&Value::UInt(1)), key(&Value::Int(1)));
        assert_ne!(key(&Value::UInt(u64::MAX)), key(&Value::UInt(u64::MAX - 1)));
    }

    #[test]
    fn test_floats_by_bits() {
        assert_eq!(key(&Value::Float(f64::NAN)), key(&Value::Float(f64::NAN)));
        assert_ne!(key(&Value::Float(0.0)), key(&Value::Float(-0.0)));
        assert_ne!(
            key(&Value::Float(f64::INFINITY)),
            key(&Value::Float(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_timestamp_is_instant() {
        let a: DateTime<Utc> = "2024-05-01T10:00:00+02:00".parse().unwrap();
        let b: DateTime<Utc> = "2024-05-01T08:00:00Z".parse().unwrap();
        assert_eq!(key(&Value::from(a)), key(&Value::from(b)));
        assert_ne!(
            key(&Value::from(b)),
            key(&Value::from(b.to_rfc3339_opts(SecondsFormat::Nanos, true)))
        );
    }

    #[test]
    fn test_map_insertion_order_ignored() {
        let mut first = BTreeMap::new();
        first.insert("b".to_string(), Value::Int(2));
        first.insert("a".to_string(), Value::Int(1));
        let mut second = BTreeMap::new();
        second.insert("a".to_string(), Value::Int(1));
        second.insert("b".to_string(), Value::Int(2));
        assert_eq!(key(&Value::from(first)), key(&Value::from(second)));
    }

    #[test]
    fn test_list_order_matters() {
        let ab = Value::from(vec![Value::from("a"), Value::from("b")]);
        let ba = Value::from(vec![Value::from("b"), Value::from("a")]);
        assert_ne!(key(&ab), key(&ba));
    }

    #[test]
    fn test_nested_units_compare_by_content() {
        let inner = || Unit {
            id: "inner".into(),
            ..Unit::default()
        };
        let a = Value::from(vec![Value::from(inner())]);
        let b = Value::from(vec![Value::from(inner())]);
        assert_eq!(key(&a), key(&b));

        let mut changed = inner();
        changed.status = "other".into();
        let c = Value::from(vec![Value::from(changed)]);
        assert_ne!(key(&a), key(&c));
    }

    #[test]
    fn test_key_respects_field_selection() {
        let a = Unit {
            status: "s".into(),
            sum: Value::Int(1),
            ..Unit::default()
        };
        let b = Unit {
            status: "s".into(),
            sum: Value::Int(2),
            ..Unit::default()
        };
        let status = FieldSet::resolve(&["status"]).unwrap();
        assert_eq!(canonical_key(&a, &status), canonical_key(&b, &status));
        assert_ne!(
            canonical_key(&a, &FieldSet::all()),
            canonical_key(&b, &FieldSet::all())
        );
    }

    #[test]
    fn test_key_is_deterministic() {
        let unit = Unit {
            data: Value::from(vec![Value::Float(0.5), Value::Null]),
            ..Unit::default()
        };
        let fields = FieldSet::all();
        assert_eq!(canonical_key(&unit, &fields), canonical_key(&unit.clone(), &fields));
    }
}
