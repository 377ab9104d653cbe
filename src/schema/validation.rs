use arrow::datatypes::{DataType, Schema};

use super::builders::timestamp_type;
use super::columns;

/// Validates that a schema has the shape of the user table.
///
/// Every column of [`columns::ALL`] must be present with the expected type.
/// Extra columns are rejected as well, since a dataset carries exactly the
/// twelve user fields.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaMismatch> {
    for name in columns::ALL {
        let expected_type = expected_type(name);
        match schema.field_with_name(name) {
            Ok(field) => {
                if field.data_type() != &expected_type {
                    return Err(SchemaMismatch::WrongType {
                        column: name.to_string(),
                        expected: format!("{:?}", expected_type),
                        found: format!("{:?}", field.data_type()),
                    });
                }
            }
            Err(_) => {
                return Err(SchemaMismatch::MissingColumn(name.to_string()));
            }
        }
    }

    if let Some(extra) = schema
        .fields()
        .iter()
        .find(|f| !columns::ALL.contains(&f.name().as_str()))
    {
        return Err(SchemaMismatch::UnexpectedColumn(extra.name().clone()));
    }

    Ok(())
}

fn expected_type(column: &str) -> DataType {
    if columns::TIMESTAMPS.contains(&column) {
        timestamp_type()
    } else {
        DataType::Utf8
    }
}

/// Ways in which tabular input can differ from the user table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaMismatch {
    /// A required column is missing
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A column that is not part of the user table
    #[error("unexpected column: {0}")]
    UnexpectedColumn(String),

    /// A column has an incorrect data type
    #[error("type mismatch for column '{column}': expected {expected}, found {found}")]
    WrongType {
        /// Name of the column with the type mismatch
        column: String,
        /// Expected data type
        expected: String,
        /// Actual data type found
        found: String,
    },

    /// A column contains null values
    #[error("column '{0}' contains nulls")]
    NullValues(String),
}
