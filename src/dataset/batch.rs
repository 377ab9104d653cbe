use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, StringArray, StringBuilder, TimestampMicrosecondArray,
    TimestampMicrosecondBuilder,
};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDateTime};

use super::types::{Dataset, Record};
use crate::schema::{columns, create_user_schema_arc, validate_schema, SchemaMismatch};

impl Dataset {
    /// Build a single Arrow batch holding every record.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let n = self.len();

        let mut ids = StringBuilder::with_capacity(n, n * 36);
        let mut created_at = TimestampMicrosecondBuilder::with_capacity(n);
        let mut updated_at = TimestampMicrosecondBuilder::with_capacity(n);
        let mut firstnames = StringBuilder::with_capacity(n, n * 16);
        let mut lastnames = StringBuilder::with_capacity(n, n * 16);
        let mut birthdays = TimestampMicrosecondBuilder::with_capacity(n);
        let mut emails = StringBuilder::with_capacity(n, n * 24);
        let mut usernames = StringBuilder::with_capacity(n, n * 16);
        let mut passwords = StringBuilder::with_capacity(n, n * 10);
        let mut phones = StringBuilder::with_capacity(n, n * 18);
        let mut countries = StringBuilder::with_capacity(n, n * 16);
        let mut cities = StringBuilder::with_capacity(n, n * 16);

        for record in self.iter() {
            ids.append_value(&record.id);
            created_at.append_value(to_micros(&record.created_at));
            updated_at.append_value(to_micros(&record.updated_at));
            firstnames.append_value(&record.firstname);
            lastnames.append_value(&record.lastname);
            birthdays.append_value(to_micros(&record.birthday));
            emails.append_value(&record.email);
            usernames.append_value(&record.username);
            passwords.append_value(&record.password);
            phones.append_value(&record.phonenumber);
            countries.append_value(&record.country);
            cities.append_value(&record.city);
        }

        let arrays: Vec<ArrayRef> = vec![
            Arc::new(ids.finish()),
            Arc::new(created_at.finish()),
            Arc::new(updated_at.finish()),
            Arc::new(firstnames.finish()),
            Arc::new(lastnames.finish()),
            Arc::new(birthdays.finish()),
            Arc::new(emails.finish()),
            Arc::new(usernames.finish()),
            Arc::new(passwords.finish()),
            Arc::new(phones.finish()),
            Arc::new(countries.finish()),
            Arc::new(cities.finish()),
        ];

        RecordBatch::try_new(create_user_schema_arc(), arrays)
    }

    /// Rebuild a dataset from an Arrow batch.
    ///
    /// Fails with [`SchemaMismatch`] when the batch is not shaped like the user
    /// table (missing, extra or mistyped columns, nulls).
    pub fn try_from_batch(batch: &RecordBatch) -> Result<Self, SchemaMismatch> {
        validate_schema(batch.schema().as_ref())?;

        let ids = string_column(batch, columns::ID)?;
        let created_at = timestamp_column(batch, columns::CREATED_AT)?;
        let updated_at = timestamp_column(batch, columns::UPDATED_AT)?;
        let firstnames = string_column(batch, columns::FIRSTNAME)?;
        let lastnames = string_column(batch, columns::LASTNAME)?;
        let birthdays = timestamp_column(batch, columns::BIRTHDAY)?;
        let emails = string_column(batch, columns::EMAIL)?;
        let usernames = string_column(batch, columns::USERNAME)?;
        let passwords = string_column(batch, columns::PASSWORD)?;
        let phones = string_column(batch, columns::PHONENUMBER)?;
        let countries = string_column(batch, columns::COUNTRY)?;
        let cities = string_column(batch, columns::CITY)?;

        let mut dataset = Dataset::with_capacity(batch.num_rows());
        for i in 0..batch.num_rows() {
            dataset.push(Record {
                id: ids.value(i).to_string(),
                created_at: from_micros(columns::CREATED_AT, created_at.value(i))?,
                updated_at: from_micros(columns::UPDATED_AT, updated_at.value(i))?,
                firstname: firstnames.value(i).to_string(),
                lastname: lastnames.value(i).to_string(),
                birthday: from_micros(columns::BIRTHDAY, birthdays.value(i))?,
                email: emails.value(i).to_string(),
                username: usernames.value(i).to_string(),
                password: passwords.value(i).to_string(),
                phonenumber: phones.value(i).to_string(),
                country: countries.value(i).to_string(),
                city: cities.value(i).to_string(),
            });
        }

        Ok(dataset)
    }
}

fn to_micros(value: &NaiveDateTime) -> i64 {
    value.and_utc().timestamp_micros()
}

fn from_micros(column: &str, micros: i64) -> Result<NaiveDateTime, SchemaMismatch> {
    DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| SchemaMismatch::WrongType {
            column: column.to_string(),
            expected: "timestamp within the supported calendar range".to_string(),
            found: micros.to_string(),
        })
}

fn string_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<&'a StringArray, SchemaMismatch> {
    let array = batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<StringArray>())
        .ok_or_else(|| SchemaMismatch::MissingColumn(name.to_string()))?;
    reject_nulls(array, name)?;
    Ok(array)
}

fn timestamp_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<&'a TimestampMicrosecondArray, SchemaMismatch> {
    let array = batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<TimestampMicrosecondArray>())
        .ok_or_else(|| SchemaMismatch::MissingColumn(name.to_string()))?;
    reject_nulls(array, name)?;
    Ok(array)
}

fn reject_nulls(array: &dyn Array, name: &str) -> Result<(), SchemaMismatch> {
    if array.null_count() > 0 {
        return Err(SchemaMismatch::NullValues(name.to_string()));
    }
    Ok(())
}
