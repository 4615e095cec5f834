//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use ironkml::prelude::*;
//! ```

// Core types
pub use ironkml_core::config::{KML_NAMESPACE, Namespace, WriterConfig};
pub use ironkml_core::element::Element;
pub use ironkml_core::error::XmlError;
pub use ironkml_core::object::{KmlObject, ObjectBase};
pub use ironkml_core::reader::parse_element;
pub use ironkml_core::writer::write_element;

// Data types
pub use ironkml_data::{
    Data, DataError, DataInput, ExtendedData, ExtendedDataElement, FieldType, FieldsInput,
    Mapping, Schema, SchemaBuilder, SchemaData, SimpleData, SimpleField,
};
