//! `<Data>`: an untyped name/value pair.

use crate::error::{DataError, Result};
use ironkml_core::{Element, KmlObject, Namespace};

const VALUE: &str = "value";
const DISPLAY_NAME: &str = "displayName";

/// Untyped name/value pair with an optional display name.
///
/// Nothing is validated: any name and value, including empty ones, is
/// accepted and written as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Data {
    /// Namespace of the element.
    pub ns: Namespace,
    /// Entry name.
    pub name: String,
    /// Entry value.
    pub value: String,
    /// Name shown to the user instead of `name`.
    pub display_name: Option<String>,
}

impl Data {
    /// Creates an entry in the KML namespace.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ns: Namespace::kml(),
            name: name.into(),
            value: value.into(),
            display_name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_ns(mut self, ns: Namespace) -> Self {
        self.ns = ns;
        self
    }

    /// Creates an entry by reading an element.
    ///
    /// # Errors
    /// Returns an error if the element is not a `Data` element in `ns`.
    pub fn from_element(ns: Namespace, element: &Element) -> Result<Self> {
        let mut data = Self::default().with_ns(ns);
        data.read_element(element)?;
        Ok(data)
    }
}

impl KmlObject for Data {
    const TAG: &'static str = "Data";
    type Error = DataError;

    fn ns(&self) -> &Namespace {
        &self.ns
    }

    fn to_element(&self) -> Element {
        let mut element = self.new_element().with_attribute("name", self.name.as_str());
        element.push_child(Element::new(self.ns.qualify(VALUE)).with_text(self.value.as_str()));
        if let Some(display_name) = self.display_name.as_deref().filter(|d| !d.is_empty()) {
            element.push_child(Element::new(self.ns.qualify(DISPLAY_NAME)).with_text(display_name));
        }
        element
    }

    fn read_element(&mut self, element: &Element) -> Result<()> {
        self.check_tag(element)?;

        self.name = element.attribute("name").unwrap_or_default().to_string();
        if let Some(value) = element.find_text(&self.ns.qualify(VALUE)) {
            self.value = value.to_string();
        }
        if let Some(display_name) = element.find_text(&self.ns.qualify(DISPLAY_NAME)) {
            self.display_name = Some(display_name.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironkml_core::{WriterConfig, parse_element};

    #[test]
    fn test_to_element() {
        let data = Data::new("holeNumber", "1").with_display_name("Hole Number");
        let el = data.to_element();
        let ns = Namespace::kml();

        assert_eq!(el.tag(), ns.qualify("Data"));
        assert_eq!(el.attribute("name"), Some("holeNumber"));
        assert_eq!(el.find_text(&ns.qualify("value")), Some("1"));
        assert_eq!(el.find_text(&ns.qualify("displayName")), Some("Hole Number"));
    }

    #[test]
    fn test_empty_value_is_written() {
        let data = Data::new("", "").with_ns(Namespace::none());
        let xml = data
            .to_xml_string(&WriterConfig::compact())
            .expect("Failed to write data");

        assert_eq!(xml, r#"<Data name=""><value/></Data>"#);
    }

    #[test]
    fn test_read_element() {
        let xml = r#"<Data xmlns="http://www.opengis.net/kml/2.2" name="holeYardage">
    <displayName><![CDATA[<b><i>The yardage is </i></b>]]></displayName>
    <value>234</value>
</Data>"#;
        let mut data = Data::default();
        data.read_xml_str(xml).expect("Failed to read data");

        assert_eq!(data.name, "holeYardage");
        assert_eq!(data.value, "234");
        assert_eq!(
            data.display_name.as_deref(),
            Some("<b><i>The yardage is </i></b>")
        );
    }

    #[test]
    fn test_read_element_missing_parts() {
        let el = parse_element(r#"<Data xmlns="http://www.opengis.net/kml/2.2"/>"#)
            .expect("Failed to parse");
        let data = Data::from_element(Namespace::kml(), &el).expect("Failed to read data");

        assert_eq!(data, Data::new("", ""));
    }

    #[test]
    fn test_read_element_keeps_unset_value() {
        let mut data = Data::new("a", "kept");
        data.read_xml_str(r#"<Data xmlns="http://www.opengis.net/kml/2.2" name="b"/>"#)
            .expect("Failed to read data");

        assert_eq!(data.name, "b");
        assert_eq!(data.value, "kept");
    }

    #[test]
    fn test_read_element_other_namespace() {
        let mut data = Data::default();
        let result = data.read_xml_str(r#"<Data xmlns="urn:other" name="x"/>"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_string() {
        let data = Data::new("temp", "a < b & c").with_display_name("Temperature");
        let xml = data
            .to_xml_string(&WriterConfig::new())
            .expect("Failed to write data");

        let mut read = Data::default();
        read.read_xml_str(&xml).expect("Failed to read data");
        assert_eq!(read, data);
    }
}
