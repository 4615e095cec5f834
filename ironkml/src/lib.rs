//! # IronKML
//!
//! Typed and untyped extended data for KML documents.
//!
//! IronKML maps KML's custom data elements to strongly typed Rust values
//! and back, keeping declaration order and enforcing the invariants KML
//! states for them.
//!
//! ## Features
//!
//! - **Schemas** - `Schema` / `SimpleField` with the closed set of KML field types
//! - **Untyped data** - free-form `Data` name/value pairs
//! - **Typed data** - `SchemaData` bound to a schema by URL
//! - **Containers** - `ExtendedData` mixing both kinds
//! - **XML round trip** - quick-xml based reading and writing, namespace aware
//!
//! ## Quick Start
//!
//! ```
//! use ironkml::prelude::*;
//!
//! let mut extended_data = ExtendedData::default();
//! extended_data.push(Data::new("temp", "20"));
//! extended_data.push(SchemaData::with_data("#s1", vec![("color", "red")])?);
//!
//! let xml = extended_data.to_xml_string(&WriterConfig::new())?;
//!
//! let mut read = ExtendedData::default();
//! read.read_xml_str(&xml)?;
//! assert_eq!(read.len(), 2);
//! # Ok::<(), ironkml::data::DataError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Element tree, XML reader/writer, configuration, object trait
//! - [`data`] - Schema, Data, SchemaData and ExtendedData objects

pub mod prelude;

/// Element tree, XML reading and writing, and the object codec trait.
pub mod core {
    pub use ironkml_core::*;
}

/// Extended data objects.
pub mod data {
    pub use ironkml_data::*;
}

// Re-export commonly used items at the crate root
pub use ironkml_core::{Element, KmlObject, Namespace, WriterConfig, XmlError};
pub use ironkml_data::{
    Data, DataError, ExtendedData, ExtendedDataElement, FieldType, Schema, SchemaData,
    SimpleData, SimpleField,
};
