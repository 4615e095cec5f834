//! Element tree to XML text.

use crate::config::{WriterConfig, split_qualified};
use crate::element::Element;
use crate::error::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Serializes an element tree to an XML string.
///
/// Element namespaces are written as default `xmlns` declarations wherever
/// the namespace changes from the parent; attribute and text values are
/// escaped by the writer.
///
/// # Errors
/// Returns `XmlError` if writing fails.
pub fn write_element(element: &Element, config: &WriterConfig) -> Result<String> {
    let mut writer = match config.indentation() {
        Some((ch, width)) => Writer::new_with_indent(Vec::new(), ch, width),
        None => Writer::new(Vec::new()),
    };

    if config.writes_declaration() {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_node(&mut writer, element, None)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Writes one element and its subtree.
fn write_node(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    parent_ns: Option<&str>,
) -> Result<()> {
    let (uri, local) = split_qualified(element.tag());
    let mut start = BytesStart::new(local);

    if uri != parent_ns {
        start.push_attribute(("xmlns", uri.unwrap_or_default()));
    }

    let mut prefixed = 0usize;
    for (key, value) in element.attributes() {
        match split_qualified(key) {
            (None, name) => start.push_attribute((name, value.as_str())),
            (Some(XML_NAMESPACE), name) => {
                start.push_attribute((format!("xml:{name}").as_str(), value.as_str()));
            }
            (Some(attr_ns), name) => {
                let prefix = format!("ns{prefixed}");
                prefixed += 1;
                start.push_attribute((format!("xmlns:{prefix}").as_str(), attr_ns));
                start.push_attribute((format!("{prefix}:{name}").as_str(), value.as_str()));
            }
        }
    }

    let text = element.text().filter(|t| !t.is_empty());
    if element.children().is_empty() && text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_node(writer, child, uri)?;
    }
    writer.write_event(Event::End(BytesEnd::new(local)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_element;

    fn sample() -> Element {
        let mut el = Element::new("{urn:k}Data").with_attribute("name", "a<b");
        el.push_child(Element::new("{urn:k}value").with_text("1 & 2"));
        el
    }

    #[test]
    fn test_write_compact() {
        let xml = write_element(&sample(), &WriterConfig::compact()).expect("Failed to write");
        assert_eq!(
            xml,
            r#"<Data xmlns="urn:k" name="a&lt;b"><value>1 &amp; 2</value></Data>"#
        );
    }

    #[test]
    fn test_write_empty_element() {
        let el = Element::new("value");
        let xml = write_element(&el, &WriterConfig::compact()).expect("Failed to write");
        assert_eq!(xml, "<value/>");
    }

    #[test]
    fn test_write_declaration() {
        let config = WriterConfig::compact().xml_declaration(true);
        let xml = write_element(&Element::new("kml"), &config).expect("Failed to write");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }

    #[test]
    fn test_write_then_parse_preserves_tree() {
        let mut el = sample();
        el.set_attribute("{urn:other}ref", "r");
        el.push_child(Element::new("{urn:other}extra"));

        for config in [WriterConfig::new(), WriterConfig::compact()] {
            let xml = write_element(&el, &config).expect("Failed to write");
            let parsed = parse_element(&xml).expect("Failed to parse");
            assert_eq!(parsed, el);
        }
    }
}
