use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder, TimeUnit};

use super::columns;
use super::constants::{KEY_FORMAT_VERSION, USERFORMATS_FORMAT_VERSION};

/// Arrow type used for every timestamp column.
pub fn timestamp_type() -> DataType {
    DataType::Timestamp(TimeUnit::Microsecond, None)
}

/// Creates a non-nullable Field annotated with a human-readable description
fn described_field(name: &str, data_type: DataType, description: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert("description".to_string(), description.to_string());
    Field::new(name, data_type, false).with_metadata(metadata)
}

/// Creates the Arrow schema for the user table.
///
/// Column order is fixed and matches [`columns::ALL`].
///
/// # Example
///
/// ```
/// use userformats::schema::create_user_schema;
///
/// let schema = create_user_schema();
/// assert_eq!(schema.fields().len(), 12);
/// ```
pub fn create_user_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(described_field(columns::ID, DataType::Utf8, "random UUID v4"));
    builder.push(described_field(
        columns::CREATED_AT,
        timestamp_type(),
        "account creation time",
    ));
    builder.push(described_field(
        columns::UPDATED_AT,
        timestamp_type(),
        "last account update time",
    ));
    builder.push(described_field(columns::FIRSTNAME, DataType::Utf8, "given name"));
    builder.push(described_field(columns::LASTNAME, DataType::Utf8, "family name"));
    builder.push(described_field(columns::BIRTHDAY, timestamp_type(), "date of birth"));
    builder.push(described_field(columns::EMAIL, DataType::Utf8, "e-mail address"));
    builder.push(described_field(columns::USERNAME, DataType::Utf8, "login name"));
    builder.push(described_field(columns::PASSWORD, DataType::Utf8, "password"));
    builder.push(described_field(columns::PHONENUMBER, DataType::Utf8, "phone number"));
    builder.push(described_field(columns::COUNTRY, DataType::Utf8, "country name"));
    builder.push(described_field(columns::CITY, DataType::Utf8, "city name"));

    let mut schema_metadata = HashMap::new();
    schema_metadata.insert(
        KEY_FORMAT_VERSION.to_string(),
        USERFORMATS_FORMAT_VERSION.to_string(),
    );

    builder.finish().with_metadata(schema_metadata)
}

/// Creates the user schema wrapped in an Arc
pub fn create_user_schema_arc() -> Arc<Schema> {
    Arc::new(create_user_schema())
}
