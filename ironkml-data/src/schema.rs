//! `<Schema>`: declaration of the typed custom fields used by `SchemaData`.

use crate::error::{DataError, Result};
use crate::input::FieldsInput;
use crate::types::SimpleField;
use ironkml_core::{Element, KmlObject, Namespace, ObjectBase};

const SIMPLE_FIELD: &str = "SimpleField";
const DISPLAY_NAME: &str = "displayName";

/// Custom schema declaring named, typed fields.
///
/// The `id` is required and must be unique within the document; `SchemaData`
/// refers to a schema through it. Fields keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    base: ObjectBase,
    /// Schema name.
    pub name: Option<String>,
    fields: Vec<SimpleField>,
}

impl Schema {
    /// Creates an empty schema in the KML namespace.
    ///
    /// # Errors
    /// Returns `DataError::MissingIdentity` if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        Self::builder().id(id).build()
    }

    /// Returns a builder for a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Creates a schema by reading an element.
    ///
    /// # Errors
    /// Returns `DataError::MissingIdentity` if the element has no `id`, and
    /// any error [`read_element`](KmlObject::read_element) returns.
    pub fn from_element(ns: Namespace, element: &Element) -> Result<Self> {
        let id = element
            .attribute("id")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DataError::missing_identity("Schema"))?;
        let mut schema = Self::builder().ns(ns).id(id).build()?;
        schema.read_element(element)?;
        Ok(schema)
    }

    /// Returns the schema identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.base.id.as_deref().unwrap_or_default()
    }

    /// Replaces the schema identifier.
    ///
    /// # Errors
    /// Returns `DataError::MissingIdentity` if `id` is empty; the current
    /// identifier is kept.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(DataError::missing_identity("Schema"));
        }
        self.base.id = Some(id);
        Ok(())
    }

    /// Returns the target identifier.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        self.base.target_id.as_deref()
    }

    /// Sets the target identifier.
    pub fn set_target_id(&mut self, target_id: Option<String>) {
        self.base.target_id = target_id;
    }

    /// Appends a field declaration.
    ///
    /// Only the type is checked. The name is stored as given; a field with an
    /// empty name is kept but never listed by [`fields`](Self::fields) and
    /// never written.
    ///
    /// # Errors
    /// Returns `DataError::InvalidFieldType` if `field_type` is not a KML
    /// field type. Nothing is appended in that case.
    pub fn append_field(
        &mut self,
        field_type: &str,
        name: &str,
        display_name: Option<&str>,
    ) -> Result<()> {
        let field = SimpleField::parse(field_type, name, display_name)?;
        self.push_field(field);
        Ok(())
    }

    /// Appends an already typed field declaration.
    pub fn push_field(&mut self, field: SimpleField) {
        if !field.is_visible() {
            tracing::debug!(
                "Schema {}: {} field without a name will be ignored",
                self.id(),
                field.field_type
            );
        }
        self.fields.push(field);
    }

    /// Replaces all field declarations.
    ///
    /// # Errors
    /// Returns `DataError::InvalidFieldsArgument` or
    /// `DataError::InvalidFieldType`; the current fields are kept on error.
    pub fn set_fields(&mut self, fields: impl Into<FieldsInput>) -> Result<()> {
        let fields = fields.into().into_fields()?;
        self.fields.clear();
        for field in fields {
            self.push_field(field);
        }
        Ok(())
    }

    /// Returns the complete field declarations in order.
    pub fn fields(&self) -> impl Iterator<Item = &SimpleField> {
        self.fields.iter().filter(|f| f.is_visible())
    }

    /// Returns every stored declaration, including ignored ones.
    #[must_use]
    pub fn stored_fields(&self) -> &[SimpleField] {
        &self.fields
    }

    /// Looks up a complete field declaration by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&SimpleField> {
        self.fields().find(|f| f.name == name)
    }

    fn field_element(&self, field: &SimpleField) -> Element {
        let mut element = Element::new(self.ns().qualify(SIMPLE_FIELD))
            .with_attribute("type", field.field_type.kml_name())
            .with_attribute("name", field.name.as_str());
        if let Some(display_name) = field.display_name.as_deref().filter(|d| !d.is_empty()) {
            element.push_child(Element::new(self.ns().qualify(DISPLAY_NAME)).with_text(display_name));
        }
        element
    }
}

impl KmlObject for Schema {
    const TAG: &'static str = "Schema";
    type Error = DataError;

    fn ns(&self) -> &Namespace {
        &self.base.ns
    }

    fn to_element(&self) -> Element {
        let mut element = self.new_element();
        self.base.write_attributes(&mut element);
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            element.set_attribute("name", name);
        }
        for field in self.fields() {
            element.push_child(self.field_element(field));
        }
        element
    }

    fn read_element(&mut self, element: &Element) -> Result<()> {
        self.check_tag(element)?;

        let mut next = Self {
            base: self.base.clone(),
            name: element.attribute("name").map(str::to_string),
            fields: Vec::new(),
        };
        next.base.read_attributes(element);

        let display_tag = self.ns().qualify(DISPLAY_NAME);
        for field in element.find_all(&self.ns().qualify(SIMPLE_FIELD)) {
            next.append_field(
                field.attribute("type").unwrap_or_default(),
                field.attribute("name").unwrap_or_default(),
                field.find_text(&display_tag),
            )?;
        }

        tracing::trace!("read Schema {} with {} fields", next.id(), next.fields.len());
        *self = next;
        Ok(())
    }
}

/// Builder for configuring and creating a [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    ns: Namespace,
    id: Option<String>,
    target_id: Option<String>,
    name: Option<String>,
    fields: FieldsInput,
}

impl SchemaBuilder {
    /// Creates a schema builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace.
    #[must_use]
    pub fn ns(mut self, ns: Namespace) -> Self {
        self.ns = ns;
        self
    }

    /// Sets the schema identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the target identifier.
    #[must_use]
    pub fn target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Sets the schema name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the field declarations.
    #[must_use]
    pub fn fields(mut self, fields: impl Into<FieldsInput>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    /// Returns `DataError::MissingIdentity` if no non-empty id was set, and
    /// the errors of [`Schema::set_fields`] for the field declarations.
    pub fn build(self) -> Result<Schema> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DataError::missing_identity("Schema"))?;

        let mut base = ObjectBase::new(self.ns).with_id(id);
        base.target_id = self.target_id;

        let mut schema = Schema {
            base,
            name: self.name,
            fields: Vec::new(),
        };
        schema.set_fields(self.fields)?;
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Mapping;
    use crate::types::FieldType;
    use ironkml_core::{WriterConfig, parse_element};

    const TRAIL_SCHEMA: &str = r#"<Schema xmlns="http://www.opengis.net/kml/2.2" name="TrailHeadType" id="TrailHeadTypeId">
    <SimpleField type="string" name="TrailHeadName">
        <displayName><![CDATA[<b>Trail Head Name</b>]]></displayName>
    </SimpleField>
    <SimpleField type="double" name="TrailLength">
        <displayName>Length in miles</displayName>
    </SimpleField>
    <SimpleField type="int" name="ElevationGain"/>
</Schema>"#;

    fn trail_schema() -> Schema {
        Schema::builder()
            .id("TrailHeadTypeId")
            .name("TrailHeadType")
            .fields(vec![
                ("string", "TrailHeadName", "Trail Head Name"),
                ("double", "TrailLength", "Length in miles"),
            ])
            .build()
            .expect("Failed to build schema")
    }

    #[test]
    fn test_missing_identity() {
        assert!(matches!(
            Schema::builder().name("x").build(),
            Err(DataError::MissingIdentity { .. })
        ));
        assert!(matches!(
            Schema::new(""),
            Err(DataError::MissingIdentity { .. })
        ));
        assert!(Schema::new("x").is_ok());
    }

    #[test]
    fn test_append_field_keeps_order() {
        let mut schema = Schema::new("s").expect("Failed to create schema");
        for (i, field_type) in FieldType::ALL.iter().enumerate() {
            schema
                .append_field(field_type.kml_name(), &format!("f{i}"), None)
                .expect("Failed to append field");
        }

        let names: Vec<_> = schema.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7"]);
        assert_eq!(schema.field("f3").map(|f| f.field_type), Some(FieldType::Short));
    }

    #[test]
    fn test_append_invalid_type_leaves_fields() {
        let mut schema = trail_schema();
        let before: Vec<_> = schema.fields().cloned().collect();

        let result = schema.append_field("bogus", "n", None);
        assert!(matches!(result, Err(DataError::InvalidFieldType { .. })));
        assert_eq!(schema.fields().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_append_field_accepts_duplicate_and_empty_names() {
        let mut schema = Schema::new("s").expect("Failed to create schema");
        schema.append_field("int", "a", None).expect("Failed to append");
        schema.append_field("int", "a", None).expect("Failed to append");
        schema.append_field("int", "", None).expect("Failed to append");

        assert_eq!(schema.fields().count(), 2);
        assert_eq!(schema.stored_fields().len(), 3);
    }

    #[test]
    fn test_mapping_without_name_is_hidden() {
        let mut mapping = Mapping::new();
        mapping.insert("type".to_string(), "string".to_string());
        let schema = Schema::builder()
            .id("s")
            .fields(mapping)
            .build()
            .expect("Failed to build schema");

        assert_eq!(schema.stored_fields().len(), 1);
        assert_eq!(schema.fields().count(), 0);
        assert!(schema.to_element().children().is_empty());
    }

    #[test]
    fn test_set_fields_is_atomic() {
        let mut schema = trail_schema();
        let result = schema.set_fields(vec![("int", "ok"), ("nope", "bad")]);

        assert!(matches!(result, Err(DataError::InvalidFieldType { .. })));
        assert_eq!(schema.fields().count(), 2);
    }

    #[test]
    fn test_to_element() {
        let mut schema = trail_schema();
        schema.set_target_id(Some("t1".to_string()));
        let el = schema.to_element();
        let ns = Namespace::kml();

        assert_eq!(el.tag(), ns.qualify("Schema"));
        assert_eq!(el.attribute("id"), Some("TrailHeadTypeId"));
        assert_eq!(el.attribute("targetId"), Some("t1"));
        assert_eq!(el.attribute("name"), Some("TrailHeadType"));

        let fields: Vec<_> = el.find_all(&ns.qualify("SimpleField")).collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].attribute("type"), Some("string"));
        assert_eq!(fields[0].attribute("name"), Some("TrailHeadName"));
        assert_eq!(
            fields[1].find_text(&ns.qualify("displayName")),
            Some("Length in miles")
        );
    }

    #[test]
    fn test_to_element_omits_empty_name_and_display_name() {
        let schema = Schema::builder()
            .id("s")
            .name("")
            .fields(vec![SimpleField::new(FieldType::Bool, "open").with_display_name("")])
            .build()
            .expect("Failed to build schema");
        let el = schema.to_element();

        assert_eq!(el.attribute("name"), None);
        assert!(el.children()[0].children().is_empty());
    }

    #[test]
    fn test_read_element() {
        let mut schema = Schema::new("placeholder").expect("Failed to create schema");
        schema.read_xml_str(TRAIL_SCHEMA).expect("Failed to read schema");

        assert_eq!(schema.id(), "TrailHeadTypeId");
        assert_eq!(schema.name.as_deref(), Some("TrailHeadType"));
        let fields: Vec<_> = schema.fields().collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields[0].display_name.as_deref(),
            Some("<b>Trail Head Name</b>")
        );
        assert_eq!(fields[1].field_type, FieldType::Double);
        assert_eq!(fields[2].display_name, None);
    }

    #[test]
    fn test_read_element_rejects_invalid_type() {
        let mut schema = trail_schema();
        let before = schema.clone();
        let xml = r#"<Schema xmlns="http://www.opengis.net/kml/2.2" id="x" name="changed">
    <SimpleField type="int" name="a"/>
    <SimpleField type="date" name="b"/>
</Schema>"#;

        let result = schema.read_xml_str(xml);
        assert!(matches!(result, Err(DataError::InvalidFieldType { .. })));
        assert_eq!(schema, before);
    }

    #[test]
    fn test_read_element_wrong_tag() {
        let mut schema = trail_schema();
        let result = schema.read_xml_str(r#"<Data xmlns="http://www.opengis.net/kml/2.2"/>"#);
        assert!(matches!(
            result,
            Err(DataError::Xml(ironkml_core::XmlError::UnexpectedElement { .. }))
        ));
    }

    #[test]
    fn test_read_element_resets_fields() {
        let mut schema = trail_schema();
        let xml = r#"<Schema xmlns="http://www.opengis.net/kml/2.2" id="s2"/>"#;
        schema.read_xml_str(xml).expect("Failed to read schema");

        assert_eq!(schema.id(), "s2");
        assert_eq!(schema.name, None);
        assert_eq!(schema.stored_fields().len(), 0);
    }

    #[test]
    fn test_from_element_requires_id() {
        let el = parse_element(r#"<Schema xmlns="http://www.opengis.net/kml/2.2" name="n"/>"#)
            .expect("Failed to parse");
        assert!(matches!(
            Schema::from_element(Namespace::kml(), &el),
            Err(DataError::MissingIdentity { .. })
        ));

        let el = parse_element(TRAIL_SCHEMA).expect("Failed to parse");
        let schema = Schema::from_element(Namespace::kml(), &el).expect("Failed to read schema");
        assert_eq!(schema.fields().count(), 3);
    }

    #[test]
    fn test_round_trip_string() {
        let schema = trail_schema();
        let xml = schema
            .to_xml_string(&WriterConfig::new())
            .expect("Failed to write schema");

        let mut read = Schema::new("other").expect("Failed to create schema");
        read.read_xml_str(&xml).expect("Failed to read schema");
        assert_eq!(read, schema);
    }

    #[test]
    fn test_unqualified_namespace() {
        let schema = Schema::builder()
            .ns(Namespace::none())
            .id("s")
            .fields(vec![("int", "n")])
            .build()
            .expect("Failed to build schema");
        let xml = schema
            .to_xml_string(&WriterConfig::compact())
            .expect("Failed to write schema");

        assert_eq!(xml, r#"<Schema id="s"><SimpleField type="int" name="n"/></Schema>"#);
    }
}
