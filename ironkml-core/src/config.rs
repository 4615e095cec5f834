//! Namespace and writer configuration.

/// KML 2.2 namespace URI.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// XML namespace that prefixes every tag an object reads or writes.
///
/// Tags are kept in Clark notation (`{uri}local`), so two elements with the
/// same local name in different namespaces never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    uri: Option<String>,
}

impl Namespace {
    /// Creates a namespace from a URI.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            uri: (!uri.is_empty()).then_some(uri),
        }
    }

    /// Returns the KML 2.2 namespace.
    #[must_use]
    pub fn kml() -> Self {
        Self::new(KML_NAMESPACE)
    }

    /// Returns the empty namespace: tags are used unqualified.
    #[must_use]
    pub const fn none() -> Self {
        Self { uri: None }
    }

    /// Returns the namespace URI, if any.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Prepends the namespace to a local tag name.
    #[must_use]
    pub fn qualify(&self, local: &str) -> String {
        match &self.uri {
            Some(uri) => format!("{{{uri}}}{local}"),
            None => local.to_string(),
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::kml()
    }
}

/// Splits a Clark-notation tag into its namespace URI and local name.
#[must_use]
pub fn split_qualified(tag: &str) -> (Option<&str>, &str) {
    if let Some(rest) = tag.strip_prefix('{') {
        if let Some(end) = rest.find('}') {
            return (Some(&rest[..end]), &rest[end + 1..]);
        }
    }
    (None, tag)
}

/// Output settings for [`write_element`](crate::writer::write_element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    indent: Option<(u8, usize)>,
    xml_declaration: bool,
}

impl WriterConfig {
    /// Creates a writer configuration with default settings
    /// (two-space indentation, no XML declaration).
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: Some((b' ', 2)),
            xml_declaration: false,
        }
    }

    /// Creates a configuration that writes everything on one line.
    #[must_use]
    pub fn compact() -> Self {
        Self::new().no_indent()
    }

    /// Sets the indentation character and width per nesting level.
    #[must_use]
    pub fn indent(mut self, ch: u8, width: usize) -> Self {
        self.indent = Some((ch, width));
        self
    }

    /// Disables indentation.
    #[must_use]
    pub fn no_indent(mut self) -> Self {
        self.indent = None;
        self
    }

    /// Sets whether an `<?xml ...?>` declaration is written first.
    #[must_use]
    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Returns the indentation setting.
    #[must_use]
    pub fn indentation(&self) -> Option<(u8, usize)> {
        self.indent
    }

    /// Returns true if an XML declaration is written.
    #[must_use]
    pub fn writes_declaration(&self) -> bool {
        self.xml_declaration
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}
