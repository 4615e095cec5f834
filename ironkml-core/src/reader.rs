//! XML text to element tree.
//!
//! Uses quick-xml's namespace-aware reader so that every tag comes out in
//! Clark notation, independent of the prefixes the document happened to use.

use crate::element::Element;
use crate::error::{Result, XmlError};
use quick_xml::NsReader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

/// Parses an XML document (or fragment with a single root) into an element tree.
///
/// # Arguments
/// * `xml` - XML content
///
/// # Returns
/// The root element.
///
/// # Errors
/// Returns `XmlError` if the XML is malformed, uses an undeclared prefix or
/// has no root element.
pub fn parse_element(xml: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        let (resolved, event) = reader.read_resolved_event_into(&mut buf)?;
        let uri = resolved_uri(resolved)?;

        match event {
            Event::Start(ref e) => {
                let element = open_element(&reader, uri, e)?;
                stack.push(element);
            }
            Event::Empty(ref e) => {
                let element = open_element(&reader, uri, e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| XmlError::unbalanced("end tag without start tag"))?;
                if !element.children().is_empty()
                    && element.text().is_some_and(|t| t.trim().is_empty())
                {
                    element.clear_text();
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref t) => {
                let raw = std::str::from_utf8(t.as_ref())?;
                push_text(&mut stack, &unescape(raw)?);
            }
            Event::CData(ref c) => {
                let raw = std::str::from_utf8(c.as_ref())?;
                push_text(&mut stack, raw);
            }
            Event::GeneralRef(ref r) => {
                let name = std::str::from_utf8(r.as_ref())?;
                push_text(&mut stack, &unescape(&format!("&{name};"))?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::unbalanced(format!(
            "element '{}' is not closed",
            open.tag()
        )));
    }

    root.ok_or(XmlError::NoRootElement)
}

/// Converts a resolved namespace into an owned URI.
fn resolved_uri(resolved: ResolveResult<'_>) -> Result<Option<String>> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(std::str::from_utf8(ns.as_ref())?.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(XmlError::UnknownPrefix {
            prefix: String::from_utf8_lossy(&prefix).into_owned(),
        }),
    }
}

/// Joins an optional namespace URI and a local name into Clark notation.
fn clark(uri: Option<String>, local: &[u8]) -> Result<String> {
    let local = std::str::from_utf8(local)?;
    Ok(match uri {
        Some(uri) => format!("{{{uri}}}{local}"),
        None => local.to_string(),
    })
}

/// Builds an element from a start tag, resolving attribute prefixes.
fn open_element(
    reader: &NsReader<&[u8]>,
    uri: Option<String>,
    e: &BytesStart<'_>,
) -> Result<Element> {
    let mut element = Element::new(clark(uri, e.local_name().as_ref())?);

    for attr in e.attributes().flatten() {
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, local) = reader.resolver().resolve_attribute(attr.key);
        let key = clark(resolved_uri(resolved)?, local.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        element.set_attribute(key, unescape(raw)?);
    }

    tracing::trace!("opened element {}", element.tag());
    Ok(element)
}

/// Hangs a finished element under its parent, or makes it the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::unbalanced(format!(
            "second root element '{}'",
            element.tag()
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Appends text to the innermost open element.
///
/// Only text preceding the first child is kept; text between or after
/// children is dropped.
fn push_text(stack: &mut [Element], text: &str) {
    if let Some(top) = stack.last_mut() {
        if top.children().is_empty() {
            top.append_text(text);
        }
    }
}
