//! Immutable form records.
//!
//! `FormValues` and `FieldErrors` always carry every [`Field`]. Updates go
//! through `with`, which returns a new record and leaves the receiver alone.

use std::collections::BTreeMap;

use crate::form::field::Field;
use crate::form::validator::validate_in_year;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<Field, String>,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            values: Field::ALL.into_iter().map(|f| (f, String::new())).collect(),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Copy of this record with `field` replaced by `value`, stored verbatim.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(field, value.into());
        Self { values }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Fields whose trimmed value is empty.
    pub fn blank_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    flags: BTreeMap<Field, bool>,
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self {
            flags: Field::ALL.into_iter().map(|f| (f, false)).collect(),
        }
    }
}

impl FieldErrors {
    pub fn is_invalid(&self, field: Field) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    pub fn with(&self, field: Field, invalid: bool) -> Self {
        let mut flags = self.flags.clone();
        flags.insert(field, invalid);
        Self { flags }
    }

    pub fn any(&self) -> bool {
        self.flags.values().any(|invalid| *invalid)
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        self.flags
            .iter()
            .filter(|(_, invalid)| **invalid)
            .map(|(field, _)| *field)
            .collect()
    }
}

/// What Cancel does with the error flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Reset every flag along with the values.
    #[default]
    ClearErrors,
    /// Leave flags as they were, so stale hints stay visible.
    KeepErrors,
}

/// Current values and their error flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormModel {
    pub values: FormValues,
    pub errors: FieldErrors,
}

impl FormModel {
    /// Store `value` for `field` and recompute that field's flag only.
    pub fn edit(&self, field: Field, value: impl Into<String>, current_year: i32) -> Self {
        let value = value.into();
        let invalid = validate_in_year(field, &value, current_year);
        Self {
            values: self.values.with(field, value),
            errors: self.errors.with(field, invalid),
        }
    }

    pub fn cancel(&self, policy: CancelPolicy) -> Self {
        let errors = match policy {
            CancelPolicy::ClearErrors => FieldErrors::default(),
            CancelPolicy::KeepErrors => self.errors.clone(),
        };
        Self {
            values: FormValues::default(),
            errors,
        }
    }
}
