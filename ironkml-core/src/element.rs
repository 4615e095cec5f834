//! Owned XML element tree.
//!
//! The tree is deliberately small: tags and attribute keys are plain strings
//! (namespace-qualified tags use Clark notation, see [`Namespace`]), and an
//! element carries at most one text run, the one preceding its first child.
//!
//! [`Namespace`]: crate::config::Namespace

/// A single XML element with its attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Returns the element tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets an attribute, replacing any previous value under the same key.
    ///
    /// New keys keep insertion order.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Removes the text content.
    pub fn clear_text(&mut self) {
        self.text = None;
    }

    /// Builder form of [`set_text`](Self::set_text).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub(crate) fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Returns the direct children.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a new empty child and returns a mutable reference to it.
    pub fn sub_element(&mut self, tag: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns all direct children with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Element> + 'a {
        let tag = tag.to_owned();
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Returns the first direct child with the given tag.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Returns the text of the first direct child with the given tag.
    ///
    /// `None` when there is no such child; `Some("")` when the child exists
    /// but has no text.
    #[must_use]
    pub fn find_text(&self, tag: &str) -> Option<&str> {
        self.find(tag).map(|c| c.text().unwrap_or_default())
    }

    /// Returns true if the element has neither text nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().is_none_or(str::is_empty)
    }
}
