//! Example: declare a schema, attach typed and untyped data, write and read back.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example extended_data
//! ```

use ironkml::prelude::*;

fn main() -> Result<(), DataError> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let schema = Schema::builder()
        .id("TrailHeadTypeId")
        .name("TrailHeadType")
        .fields(vec![
            ("string", "TrailHeadName", "<b>Trail Head Name</b>"),
            ("double", "TrailLength", "<i>Length in miles</i>"),
            ("int", "ElevationGain", "<i>Change in altitude</i>"),
        ])
        .build()?;

    let mut trail = SchemaData::new(format!("#{}", schema.id()))?;
    trail.append_data("TrailHeadName", "Pi in the sky")?;
    trail.append_data("TrailLength", 3.5)?;
    trail.append_data("ElevationGain", 10)?;

    let mut extended_data = ExtendedData::default();
    extended_data.push(trail);
    extended_data.push(Data::new("holeNumber", "1").with_display_name("Hole"));

    let config = WriterConfig::new().xml_declaration(true);
    println!("{}", schema.to_xml_string(&config)?);

    let xml = extended_data.to_xml_string(&config)?;
    println!("{xml}");

    let mut read = ExtendedData::default();
    read.read_xml_str(&xml)?;
    for entry in &read.elements {
        match entry {
            ExtendedDataElement::Data(data) => {
                println!("untyped {} = {}", data.name, data.value);
            }
            ExtendedDataElement::SchemaData(typed) => {
                for value in typed.data() {
                    let field_type = schema
                        .field(&value.name)
                        .map_or("unknown", |f| f.field_type.kml_name());
                    println!("typed {} ({field_type}) = {}", value.name, value.value);
                }
            }
        }
    }

    Ok(())
}
