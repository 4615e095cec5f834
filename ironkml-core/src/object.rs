//! The codec trait shared by every KML object, and the identity attributes
//! carried by objects derived from `kml:AbstractObjectGroup`.

use crate::config::{Namespace, WriterConfig};
use crate::element::Element;
use crate::error::XmlError;
use crate::reader::parse_element;
use crate::writer::write_element;

/// Bidirectional mapping between an in-memory object and one XML element.
///
/// Reading happens in place: `read_element` resets the object and
/// repopulates it from the element, so an instance can be read any number
/// of times.
pub trait KmlObject {
    /// Local (unqualified) element tag.
    const TAG: &'static str;

    /// Error returned when reading fails.
    type Error: From<XmlError>;

    /// Namespace prepended to every tag this object reads or writes.
    fn ns(&self) -> &Namespace;

    /// Builds the element representing this object.
    fn to_element(&self) -> Element;

    /// Resets this object from an element.
    ///
    /// # Errors
    /// Returns an error if the element has the wrong tag or violates the
    /// object's invariants.
    fn read_element(&mut self, element: &Element) -> Result<(), Self::Error>;

    /// Returns the namespace-qualified tag.
    fn tag(&self) -> String {
        self.ns().qualify(Self::TAG)
    }

    /// Creates an empty element carrying this object's tag.
    fn new_element(&self) -> Element {
        Element::new(self.tag())
    }

    /// Fails unless `element` carries this object's qualified tag.
    ///
    /// # Errors
    /// Returns `XmlError::UnexpectedElement` on mismatch.
    fn check_tag(&self, element: &Element) -> Result<(), XmlError> {
        let expected = self.tag();
        if element.tag() != expected {
            return Err(XmlError::unexpected(expected, element.tag()));
        }
        Ok(())
    }

    /// Serializes this object to an XML string.
    ///
    /// # Errors
    /// Returns `XmlError` if writing fails.
    fn to_xml_string(&self, config: &WriterConfig) -> Result<String, XmlError> {
        write_element(&self.to_element(), config)
    }

    /// Parses `xml` and resets this object from its root element.
    ///
    /// # Errors
    /// Returns an error if the XML is malformed or `read_element` fails.
    fn read_xml_str(&mut self, xml: &str) -> Result<(), Self::Error> {
        let element = parse_element(xml)?;
        self.read_element(&element)
    }
}

/// Namespace and identity attributes (`id`, `targetId`) of a KML object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectBase {
    /// Namespace of the object.
    pub ns: Namespace,
    /// Object identifier.
    pub id: Option<String>,
    /// Identifier of the object this one updates.
    pub target_id: Option<String>,
}

impl ObjectBase {
    /// Creates an object base without identity attributes.
    #[must_use]
    pub fn new(ns: Namespace) -> Self {
        Self {
            ns,
            id: None,
            target_id: None,
        }
    }

    /// Sets the object identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the target identifier.
    #[must_use]
    pub fn with_target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Writes `id` and `targetId` when set and non-empty.
    pub fn write_attributes(&self, element: &mut Element) {
        if let Some(id) = self.id.as_deref().filter(|s| !s.is_empty()) {
            element.set_attribute("id", id);
        }
        if let Some(target_id) = self.target_id.as_deref().filter(|s| !s.is_empty()) {
            element.set_attribute("targetId", target_id);
        }
    }

    /// Reads `id` and `targetId`; absent or empty attributes keep the
    /// current values.
    pub fn read_attributes(&mut self, element: &Element) {
        if let Some(id) = element.attribute("id").filter(|s| !s.is_empty()) {
            self.id = Some(id.to_string());
        }
        if let Some(target_id) = element.attribute("targetId").filter(|s| !s.is_empty()) {
            self.target_id = Some(target_id.to_string());
        }
    }
}
