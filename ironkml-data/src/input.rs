//! Argument shapes accepted by bulk assignment.
//!
//! `Schema` fields and `SchemaData` entries can be supplied as mappings,
//! positional tuples or ready values. Every shape is checked once here and
//! normalized to the canonical list before it reaches the object.

use crate::error::{DataError, Result};
use crate::types::SimpleField;
use std::collections::BTreeMap;

/// String-keyed mapping, the loose form of a field or entry.
pub type Mapping = BTreeMap<String, String>;

/// Field list given to `Schema` construction or bulk assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldsInput {
    /// No fields.
    #[default]
    Empty,
    /// A single field as a mapping with keys `type`, `name` and optionally
    /// `displayName`.
    Mapping(Mapping),
    /// Fields as mappings.
    Mappings(Vec<Mapping>),
    /// Fields as positional `[type, name]` or `[type, name, displayName]`.
    Positional(Vec<Vec<String>>),
    /// Already typed fields.
    Fields(Vec<SimpleField>),
}

impl FieldsInput {
    /// Validates the shape and every field type, producing the field list.
    ///
    /// # Errors
    /// Returns `DataError::InvalidFieldsArgument` for an unsupported shape
    /// and `DataError::InvalidFieldType` for an unknown type.
    pub fn into_fields(self) -> Result<Vec<SimpleField>> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Mapping(mapping) => Ok(vec![field_from_mapping(&mapping)?]),
            Self::Mappings(mappings) => mappings.iter().map(field_from_mapping).collect(),
            Self::Positional(rows) => rows.iter().map(|row| field_from_row(row)).collect(),
            Self::Fields(fields) => Ok(fields),
        }
    }
}

fn field_from_mapping(mapping: &Mapping) -> Result<SimpleField> {
    let mut field_type = None;
    let mut name = None;
    let mut display_name = None;

    for (key, value) in mapping {
        match key.as_str() {
            "type" => field_type = Some(value.as_str()),
            "name" => name = Some(value.as_str()),
            "displayName" | "display_name" => display_name = Some(value.as_str()),
            other => {
                return Err(DataError::invalid_fields(format!(
                    "unknown field key '{other}'"
                )));
            }
        }
    }

    let field_type =
        field_type.ok_or_else(|| DataError::invalid_fields("field mapping has no 'type'"))?;
    SimpleField::parse(field_type, name.unwrap_or_default(), display_name)
}

fn field_from_row(row: &[String]) -> Result<SimpleField> {
    match row {
        [field_type, name] => SimpleField::parse(field_type, name, None),
        [field_type, name, display_name] => {
            SimpleField::parse(field_type, name, Some(display_name))
        }
        _ => Err(DataError::invalid_fields(format!(
            "positional field needs 2 or 3 items, got {}",
            row.len()
        ))),
    }
}

impl From<Mapping> for FieldsInput {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Vec<Mapping>> for FieldsInput {
    fn from(mappings: Vec<Mapping>) -> Self {
        Self::Mappings(mappings)
    }
}

impl From<Vec<Vec<String>>> for FieldsInput {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::Positional(rows)
    }
}

impl From<Vec<SimpleField>> for FieldsInput {
    fn from(fields: Vec<SimpleField>) -> Self {
        Self::Fields(fields)
    }
}

impl<T: Into<String>, N: Into<String>> From<Vec<(T, N)>> for FieldsInput {
    fn from(pairs: Vec<(T, N)>) -> Self {
        Self::Positional(
            pairs
                .into_iter()
                .map(|(t, n)| vec![t.into(), n.into()])
                .collect(),
        )
    }
}

impl<T: Into<String>, N: Into<String>, D: Into<String>> From<Vec<(T, N, D)>> for FieldsInput {
    fn from(triples: Vec<(T, N, D)>) -> Self {
        Self::Positional(
            triples
                .into_iter()
                .map(|(t, n, d)| vec![t.into(), n.into(), d.into()])
                .collect(),
        )
    }
}

/// Entry list given to `SchemaData` construction or bulk assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataInput {
    /// No entries.
    #[default]
    Empty,
    /// Entries as positional `[name, value]`.
    Positional(Vec<Vec<String>>),
    /// Entries as mappings with exactly the keys `name` and `value`.
    Mappings(Vec<Mapping>),
}

impl DataInput {
    /// Validates the shape, producing `(name, value)` pairs in order.
    ///
    /// Names are not checked here; `SchemaData` checks them on append.
    ///
    /// # Errors
    /// Returns `DataError::InvalidDataArgument` for an unsupported shape.
    pub fn into_pairs(self) -> Result<Vec<(String, String)>> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Positional(rows) => rows
                .into_iter()
                .map(|row| match <[String; 2]>::try_from(row) {
                    Ok([name, value]) => Ok((name, value)),
                    Err(row) => Err(DataError::invalid_data(format!(
                        "positional entry needs 2 items, got {}",
                        row.len()
                    ))),
                })
                .collect(),
            Self::Mappings(mappings) => mappings.into_iter().map(pair_from_mapping).collect(),
        }
    }
}

fn pair_from_mapping(mut mapping: Mapping) -> Result<(String, String)> {
    let name = mapping
        .remove("name")
        .ok_or_else(|| DataError::invalid_data("entry mapping has no 'name'"))?;
    let value = mapping
        .remove("value")
        .ok_or_else(|| DataError::invalid_data("entry mapping has no 'value'"))?;
    if let Some(key) = mapping.keys().next() {
        return Err(DataError::invalid_data(format!("unknown entry key '{key}'")));
    }
    Ok((name, value))
}

impl From<Vec<Vec<String>>> for DataInput {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::Positional(rows)
    }
}

impl From<Vec<Mapping>> for DataInput {
    fn from(mappings: Vec<Mapping>) -> Self {
        Self::Mappings(mappings)
    }
}

impl<N: Into<String>, V: ToString> From<Vec<(N, V)>> for DataInput {
    fn from(pairs: Vec<(N, V)>) -> Self {
        Self::Positional(
            pairs
                .into_iter()
                .map(|(n, v)| vec![n.into(), v.to_string()])
                .collect(),
        )
    }
}
