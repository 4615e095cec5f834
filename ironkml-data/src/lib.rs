//! # IronKML Data
//!
//! Custom data for KML features.
//!
//! This crate provides:
//! - `Schema` and `SimpleField` declarations with the closed set of field types
//! - Untyped `Data` name/value pairs
//! - Typed `SchemaData` entries bound to a schema by URL
//! - The `ExtendedData` container mixing both
//! - Validated input shapes for bulk field and entry assignment
//!
//! Every object maps to and from one XML element through
//! [`KmlObject`](ironkml_core::KmlObject).

pub mod data;
pub mod error;
pub mod extended_data;
pub mod input;
pub mod schema;
pub mod schema_data;
pub mod types;

pub use data::Data;
pub use error::{DataError, Result};
pub use extended_data::{ExtendedData, ExtendedDataElement};
pub use input::{DataInput, FieldsInput, Mapping};
pub use schema::{Schema, SchemaBuilder};
pub use schema_data::{SchemaData, SimpleData};
pub use types::{FieldType, SimpleField};
