//! `<ExtendedData>`: the container attaching custom data to a feature.

use crate::data::Data;
use crate::error::{DataError, Result};
use crate::schema_data::SchemaData;
use ironkml_core::{Element, KmlObject, Namespace};

/// One entry of an [`ExtendedData`] container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedDataElement {
    /// Untyped name/value pair.
    Data(Data),
    /// Typed values bound to a schema.
    SchemaData(SchemaData),
}

impl ExtendedDataElement {
    /// Builds the element for this entry.
    #[must_use]
    pub fn to_element(&self) -> Element {
        match self {
            Self::Data(d) => d.to_element(),
            Self::SchemaData(s) => s.to_element(),
        }
    }

    /// Returns the untyped entry, if this is one.
    #[must_use]
    pub fn as_data(&self) -> Option<&Data> {
        match self {
            Self::Data(d) => Some(d),
            Self::SchemaData(_) => None,
        }
    }

    /// Returns the typed collection, if this is one.
    #[must_use]
    pub fn as_schema_data(&self) -> Option<&SchemaData> {
        match self {
            Self::SchemaData(s) => Some(s),
            Self::Data(_) => None,
        }
    }
}

impl From<Data> for ExtendedDataElement {
    fn from(data: Data) -> Self {
        Self::Data(data)
    }
}

impl From<SchemaData> for ExtendedDataElement {
    fn from(schema_data: SchemaData) -> Self {
        Self::SchemaData(schema_data)
    }
}

/// Ordered mix of untyped and typed custom data.
///
/// Entries are written in stored order. Reading collects every `Data`
/// child first and every `SchemaData` child after, each group in document
/// order, so an interleaved document comes back grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtendedData {
    /// Namespace of the container and of the entries it reads.
    pub ns: Namespace,
    /// Entries in order.
    pub elements: Vec<ExtendedDataElement>,
}

impl ExtendedData {
    /// Creates a container in the KML namespace.
    #[must_use]
    pub fn new(elements: Vec<ExtendedDataElement>) -> Self {
        Self {
            ns: Namespace::kml(),
            elements,
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_ns(mut self, ns: Namespace) -> Self {
        self.ns = ns;
        self
    }

    /// Creates a container by reading an element.
    ///
    /// # Errors
    /// Returns any error [`read_element`](KmlObject::read_element) returns.
    pub fn from_element(ns: Namespace, element: &Element) -> Result<Self> {
        let mut extended_data = Self::default().with_ns(ns);
        extended_data.read_element(element)?;
        Ok(extended_data)
    }

    /// Appends an entry.
    pub fn push(&mut self, element: impl Into<ExtendedDataElement>) {
        self.elements.push(element.into());
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the untyped entries.
    pub fn data(&self) -> impl Iterator<Item = &Data> {
        self.elements.iter().filter_map(ExtendedDataElement::as_data)
    }

    /// Iterates over the typed collections.
    pub fn schema_data(&self) -> impl Iterator<Item = &SchemaData> {
        self.elements
            .iter()
            .filter_map(ExtendedDataElement::as_schema_data)
    }
}

impl KmlObject for ExtendedData {
    const TAG: &'static str = "ExtendedData";
    type Error = DataError;

    fn ns(&self) -> &Namespace {
        &self.ns
    }

    fn to_element(&self) -> Element {
        let mut element = self.new_element();
        for entry in &self.elements {
            element.push_child(entry.to_element());
        }
        element
    }

    fn read_element(&mut self, element: &Element) -> Result<()> {
        self.check_tag(element)?;

        let mut elements = Vec::new();
        for child in element.find_all(&self.ns.qualify(Data::TAG)) {
            elements.push(Data::from_element(self.ns.clone(), child)?.into());
        }
        for child in element.find_all(&self.ns.qualify(SchemaData::TAG)) {
            elements.push(SchemaData::from_element(self.ns.clone(), child)?.into());
        }

        tracing::debug!("read ExtendedData with {} entries", elements.len());
        self.elements = elements;
        Ok(())
    }
}
