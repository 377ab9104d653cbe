use super::*;
use arrow::datatypes::{DataType, Field, Schema};

#[test]
fn test_schema_creation() {
    let schema = create_user_schema();
    assert_eq!(schema.fields().len(), 12);

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, columns::ALL.to_vec());

    assert!(schema.fields().iter().all(|f| !f.is_nullable()));
}

#[test]
fn test_timestamp_columns() {
    let schema = create_user_schema();
    for name in columns::TIMESTAMPS {
        let field = schema.field_with_name(name).unwrap();
        assert_eq!(field.data_type(), &timestamp_type());
    }
    assert_eq!(
        schema.field_with_name(columns::EMAIL).unwrap().data_type(),
        &DataType::Utf8
    );
}

#[test]
fn test_schema_validation() {
    let schema = create_user_schema();
    assert!(validate_schema(&schema).is_ok());
}

#[test]
fn test_format_version_metadata() {
    let schema = create_user_schema();
    assert_eq!(
        schema.metadata().get(KEY_FORMAT_VERSION).map(String::as_str),
        Some(USERFORMATS_FORMAT_VERSION)
    );
}

#[test]
fn test_validation_missing_column() {
    let schema = Schema::new(vec![Field::new(columns::ID, DataType::Utf8, false)]);
    assert_eq!(
        validate_schema(&schema),
        Err(SchemaMismatch::MissingColumn(columns::CREATED_AT.to_string()))
    );
}

#[test]
fn test_validation_wrong_type() {
    let fields: Vec<Field> = columns::ALL
        .iter()
        .map(|name| Field::new(*name, DataType::Utf8, false))
        .collect();
    let schema = Schema::new(fields);

    match validate_schema(&schema) {
        Err(SchemaMismatch::WrongType { column, .. }) => assert_eq!(column, columns::CREATED_AT),
        other => panic!("expected type mismatch, got {:?}", other),
    }
}

#[test]
fn test_validation_extra_column() {
    let mut fields: Vec<Field> = create_user_schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    fields.push(Field::new("age", DataType::Int32, false));
    let schema = Schema::new(fields);

    assert_eq!(
        validate_schema(&schema),
        Err(SchemaMismatch::UnexpectedColumn("age".to_string()))
    );
}
