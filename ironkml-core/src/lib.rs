//! # IronKML Core
//!
//! XML plumbing shared by the IronKML object crates.
//!
//! This crate provides:
//! - An owned element tree with namespace-qualified tags
//! - quick-xml based parsing and writing of that tree
//! - Namespace and writer configuration
//! - The `KmlObject` codec trait and the `id`/`targetId` object base
//! - Error types for parsing and writing

pub mod config;
pub mod element;
pub mod error;
pub mod object;
pub mod reader;
pub mod writer;

pub use config::{KML_NAMESPACE, Namespace, WriterConfig};
pub use element::Element;
pub use error::{Result, XmlError};
pub use object::{KmlObject, ObjectBase};
pub use reader::parse_element;
pub use writer::write_element;
