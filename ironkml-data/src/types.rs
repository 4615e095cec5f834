//! Field type definitions.
//!
//! This module contains the closed set of KML custom field types and the
//! `SimpleField` declaration a `Schema` is made of.

use crate::error::{DataError, Result};
use std::fmt;

/// Type of a custom field declared by a `Schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Text.
    String,
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    Uint,
    /// Signed 16-bit integer.
    Short,
    /// Unsigned 16-bit integer.
    Ushort,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Bool,
}

impl FieldType {
    /// All field types, in the order KML lists them.
    pub const ALL: [FieldType; 8] = [
        Self::String,
        Self::Int,
        Self::Uint,
        Self::Short,
        Self::Ushort,
        Self::Float,
        Self::Double,
        Self::Bool,
    ];

    /// Returns the name used in the `type` attribute.
    #[must_use]
    pub const fn kml_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Short => "short",
            Self::Ushort => "ushort",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
        }
    }

    /// Parses a field type from its KML name. Matching is case-sensitive.
    #[must_use]
    pub fn from_kml_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "int" => Some(Self::Int),
            "uint" => Some(Self::Uint),
            "short" => Some(Self::Short),
            "ushort" => Some(Self::Ushort),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Returns true if this is an integer type.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Short | Self::Ushort)
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kml_name())
    }
}

/// Declaration of one custom field (`<SimpleField>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleField {
    /// Field type.
    pub field_type: FieldType,
    /// Field name. A field with an empty name is ignored.
    pub name: String,
    /// Name shown to the user instead of `name`.
    pub display_name: Option<String>,
}

impl SimpleField {
    /// Creates a field declaration.
    #[must_use]
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
            display_name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Creates a field declaration from a textual type.
    ///
    /// # Errors
    /// Returns `DataError::InvalidFieldType` if `field_type` is not a KML
    /// field type.
    pub fn parse(field_type: &str, name: &str, display_name: Option<&str>) -> Result<Self> {
        let parsed = FieldType::from_kml_name(field_type)
            .ok_or_else(|| DataError::invalid_field_type(name, field_type))?;
        Ok(Self {
            field_type: parsed,
            name: name.to_string(),
            display_name: display_name.map(str::to_string),
        })
    }

    /// Returns true if the field is declared completely and will be written.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.name.is_empty()
    }
}
