use crate::models::{Field, UniqError, Unit, Value};
use crate::services::canonical::canonical_key;
use crate::utils::dedupe_by_key;
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// Validated selection of unit fields, deduplicated and in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet(Vec<Field>);

impl FieldSet {
    #[must_use]
    pub fn all() -> Self {
        Self(Field::ALL.to_vec())
    }

    /// Resolve requested field names. An empty request selects every field.
    ///
    /// # Errors
    /// Returns `UniqError::UnknownFields` listing every name that is not a
    /// `Unit` field, once each, in the order first requested.
    pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Self, UniqError> {
        if names.is_empty() {
            return Ok(Self::all());
        }

        let mut selected = BTreeSet::new();
        let mut unknown = Vec::new();
        for name in names.iter().map(|name| name.as_ref()) {
            match Field::parse(name) {
                Some(field) => {
                    selected.insert(field);
                }
                None => unknown.push(name),
            }
        }

        if !unknown.is_empty() {
            let unknown = dedupe_by_key(&unknown, |name| *name)
                .into_iter()
                .map(|name| (*name).to_string())
                .collect();
            return Err(UniqError::UnknownFields(unknown));
        }

        Ok(Self(selected.into_iter().collect()))
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.0
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

/// Deduplicate `items` by `field_names` (every field when empty), keeping
/// the first unit of each group in input order.
///
/// The returned references point at the units inside `items`.
///
/// # Errors
/// Returns `UniqError::TypeMismatch` if any item is not a unit; otherwise
/// `UniqError::UnknownFields` if a requested name is not a `Unit` field.
pub fn uniq<'a, S: AsRef<str>>(
    items: &'a [Value],
    field_names: &[S],
) -> Result<Vec<&'a Unit>, UniqError> {
    let units = items
        .iter()
        .map(Value::as_unit)
        .collect::<Option<Vec<_>>>()
        .ok_or(UniqError::TypeMismatch)?;
    let fields = FieldSet::resolve(field_names)?;
    Ok(uniq_by_fields(&units, &fields))
}

/// Same as [`uniq`] for input that is already typed as units.
///
/// # Errors
/// Returns `UniqError::UnknownFields` if a requested name is not a `Unit` field.
pub fn uniq_units<'a, S: AsRef<str>>(
    units: &'a [Unit],
    field_names: &[S],
) -> Result<Vec<&'a Unit>, UniqError> {
    let fields = FieldSet::resolve(field_names)?;
    let units: Vec<&Unit> = units.iter().collect();
    Ok(uniq_by_fields(&units, &fields))
}

#[must_use]
pub fn uniq_by_fields<'a>(units: &[&'a Unit], fields: &FieldSet) -> Vec<&'a Unit> {
    let kept: Vec<&'a Unit> = dedupe_by_key(units, |unit| canonical_key(unit, fields))
        .into_iter()
        .copied()
        .collect();
    debug!(
        "kept {} of {} units comparing [{}]",
        kept.len(),
        units.len(),
        fields
    );
    kept
}
