//! `<SchemaData>`: typed name/value pairs bound to a `Schema` by URL.

use crate::error::{DataError, Result};
use crate::input::DataInput;
use ironkml_core::{Element, KmlObject, Namespace};

const SIMPLE_DATA: &str = "SimpleData";

/// One typed value (`<SimpleData>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleData {
    /// Field name, expected to match a `SimpleField` of the referenced schema.
    pub name: String,
    /// Value as text.
    pub value: String,
}

/// Typed custom data for a feature.
///
/// `schema_url` may be a full URL, a reference to a schema id in another
/// file, or `#id` for a schema in the same document. It is stored and
/// written verbatim; entries are not checked against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaData {
    ns: Namespace,
    schema_url: String,
    data: Vec<SimpleData>,
}

impl SchemaData {
    /// Creates an empty collection in the KML namespace.
    ///
    /// # Errors
    /// Returns `DataError::MissingSchemaUrl` if `schema_url` is empty.
    pub fn new(schema_url: impl Into<String>) -> Result<Self> {
        let schema_url = schema_url.into();
        if schema_url.is_empty() {
            return Err(DataError::MissingSchemaUrl);
        }
        Ok(Self {
            ns: Namespace::kml(),
            schema_url,
            data: Vec::new(),
        })
    }

    /// Creates a collection holding `data`.
    ///
    /// # Errors
    /// Returns `DataError::MissingSchemaUrl`, and the errors of
    /// [`set_data`](Self::set_data).
    pub fn with_data(schema_url: impl Into<String>, data: impl Into<DataInput>) -> Result<Self> {
        let mut schema_data = Self::new(schema_url)?;
        schema_data.set_data(data)?;
        Ok(schema_data)
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_ns(mut self, ns: Namespace) -> Self {
        self.ns = ns;
        self
    }

    /// Creates a collection by reading an element.
    ///
    /// # Errors
    /// Returns `DataError::MissingSchemaUrl` if the element has no
    /// `schemaUrl`, and any error [`read_element`](KmlObject::read_element)
    /// returns.
    pub fn from_element(ns: Namespace, element: &Element) -> Result<Self> {
        let schema_url = element.attribute("schemaUrl").unwrap_or_default();
        let mut schema_data = Self::new(schema_url)?.with_ns(ns);
        schema_data.read_element(element)?;
        Ok(schema_data)
    }

    /// Returns the schema reference.
    #[must_use]
    pub fn schema_url(&self) -> &str {
        &self.schema_url
    }

    /// Replaces the schema reference.
    ///
    /// # Errors
    /// Returns `DataError::MissingSchemaUrl` if `schema_url` is empty.
    pub fn set_schema_url(&mut self, schema_url: impl Into<String>) -> Result<()> {
        let schema_url = schema_url.into();
        if schema_url.is_empty() {
            return Err(DataError::MissingSchemaUrl);
        }
        self.schema_url = schema_url;
        Ok(())
    }

    /// Appends an entry. The value is stored as its text form.
    ///
    /// # Errors
    /// Returns `DataError::InvalidEntryName` if `name` is empty.
    pub fn append_data(&mut self, name: impl Into<String>, value: impl ToString) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(DataError::InvalidEntryName);
        }
        self.data.push(SimpleData {
            name,
            value: value.to_string(),
        });
        Ok(())
    }

    /// Replaces all entries.
    ///
    /// # Errors
    /// Returns `DataError::InvalidDataArgument` for an unsupported shape and
    /// `DataError::InvalidEntryName` for an empty name; the current entries
    /// are kept on error.
    pub fn set_data(&mut self, data: impl Into<DataInput>) -> Result<()> {
        let pairs = data.into().into_pairs()?;
        let mut next = Self {
            ns: self.ns.clone(),
            schema_url: self.schema_url.clone(),
            data: Vec::with_capacity(pairs.len()),
        };
        for (name, value) in pairs {
            next.append_data(name, value)?;
        }
        self.data = next.data;
        Ok(())
    }

    /// Returns all entries in order.
    #[must_use]
    pub fn data(&self) -> &[SimpleData] {
        &self.data
    }

    /// Returns the value of the first entry with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }
}

impl KmlObject for SchemaData {
    const TAG: &'static str = "SchemaData";
    type Error = DataError;

    fn ns(&self) -> &Namespace {
        &self.ns
    }

    fn to_element(&self) -> Element {
        let mut element = self
            .new_element()
            .with_attribute("schemaUrl", self.schema_url.as_str());
        for entry in &self.data {
            element.push_child(
                Element::new(self.ns.qualify(SIMPLE_DATA))
                    .with_attribute("name", entry.name.as_str())
                    .with_text(entry.value.as_str()),
            );
        }
        element
    }

    fn read_element(&mut self, element: &Element) -> Result<()> {
        self.check_tag(element)?;

        let schema_url = element.attribute("schemaUrl").unwrap_or_default();
        let mut next = Self::new(schema_url)?.with_ns(self.ns.clone());
        for entry in element.find_all(&self.ns.qualify(SIMPLE_DATA)) {
            next.append_data(
                entry.attribute("name").unwrap_or_default(),
                entry.text().unwrap_or_default(),
            )?;
        }

        tracing::trace!(
            "read SchemaData {} with {} entries",
            next.schema_url,
            next.data.len()
        );
        *self = next;
        Ok(())
    }
}
