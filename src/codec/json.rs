use std::collections::HashMap;
use std::io::{BufReader, Write};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::dataset::{timestamp, Dataset, Record};
use crate::schema::columns;

use super::artifact::{open_artifact, write_atomically};
use super::{Codec, CodecError, EncodeStats, FormatKind, JsonOrient};

/// Row-oriented text codec producing a single JSON document.
///
/// With [`JsonOrient::Columns`] the document maps each column name to an
/// object keyed by row index, timestamps as epoch milliseconds:
///
/// ```text
/// {"id":{"0":"4f0c...","1":"9a7e..."},"created_at":{"0":1609459200000,...},...}
/// ```
///
/// With [`JsonOrient::Records`] the document is an array of record objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    orient: JsonOrient,
    pretty: bool,
}

impl JsonCodec {
    /// Create a codec writing the given layout
    pub fn new(orient: JsonOrient) -> Self {
        Self {
            orient,
            pretty: false,
        }
    }

    /// Indent the output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Document layout
    pub fn orient(&self) -> JsonOrient {
        self.orient
    }

    fn write_value<W: Write, T: Serialize + ?Sized>(
        &self,
        out: W,
        value: &T,
    ) -> Result<(), CodecError> {
        if self.pretty {
            serde_json::to_writer_pretty(out, value)?;
        } else {
            serde_json::to_writer(out, value)?;
        }
        Ok(())
    }
}

impl Codec for JsonCodec {
    fn kind(&self) -> FormatKind {
        FormatKind::RowOrientedText
    }

    fn encode(&self, dataset: &Dataset, destination: &Path) -> Result<EncodeStats, CodecError> {
        let bytes_written = write_atomically(destination, |out| match self.orient {
            JsonOrient::Columns => self.write_value(out, &ColumnsLayout(dataset)),
            JsonOrient::Records => self.write_value(out, dataset.records()),
        })?;

        Ok(EncodeStats {
            rows_written: dataset.len(),
            bytes_written,
        })
    }

    fn decode(&self, source: &Path) -> Result<Dataset, CodecError> {
        let reader = BufReader::new(open_artifact(source)?);
        match self.orient {
            JsonOrient::Columns => {
                let document: Value =
                    serde_json::from_reader(reader).map_err(|e| CodecError::malformed(source, e))?;
                ColumnTable::from_document(document)
                    .and_then(ColumnTable::into_dataset)
                    .map_err(|reason| CodecError::malformed(source, reason))
            }
            JsonOrient::Records => {
                let records: Vec<Record> =
                    serde_json::from_reader(reader).map_err(|e| CodecError::malformed(source, e))?;
                Ok(Dataset::from_records(records))
            }
        }
    }
}

struct ColumnsLayout<'a>(&'a Dataset);

impl Serialize for ColumnsLayout<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(columns::ALL.len()))?;
        for column in columns::ALL {
            map.serialize_entry(
                column,
                &ColumnCells {
                    dataset: self.0,
                    column,
                },
            )?;
        }
        map.end()
    }
}

struct ColumnCells<'a> {
    dataset: &'a Dataset,
    column: &'static str,
}

impl Serialize for ColumnCells<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.dataset.len()))?;
        for (index, record) in self.dataset.iter().enumerate() {
            let key = index.to_string();
            match record.timestamp(self.column) {
                Some(ts) => map.serialize_entry(&key, &ts.and_utc().timestamp_millis())?,
                None => map.serialize_entry(&key, record.text(self.column).unwrap_or_default())?,
            }
        }
        map.end()
    }
}

/// Column-oriented document unpacked into per-column cell vectors
struct ColumnTable {
    rows: usize,
    cells: HashMap<&'static str, Vec<Value>>,
}

impl ColumnTable {
    fn from_document(document: Value) -> Result<Self, String> {
        let Value::Object(mut table) = document else {
            return Err("expected an object of columns".to_string());
        };

        let mut rows = None;
        let mut cells = HashMap::with_capacity(columns::ALL.len());
        for column in columns::ALL {
            let Some(Value::Object(by_index)) = table.remove(column) else {
                return Err(format!("missing column object '{}'", column));
            };

            let n = by_index.len();
            if *rows.get_or_insert(n) != n {
                return Err(format!(
                    "column '{}' has {} rows, expected {}",
                    column,
                    n,
                    rows.unwrap_or(0)
                ));
            }

            let mut slots: Vec<Option<Value>> = vec![None; n];
            for (key, value) in by_index {
                let index = key
                    .parse::<usize>()
                    .ok()
                    .filter(|i| *i < n)
                    .ok_or_else(|| format!("invalid row index '{}' in column '{}'", key, column))?;
                slots[index] = Some(value);
            }
            let values = slots
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| format!("duplicate row index in column '{}'", column))?;
            cells.insert(column, values);
        }

        if let Some(extra) = table.keys().next() {
            return Err(format!("unexpected column '{}'", extra));
        }

        Ok(Self {
            rows: rows.unwrap_or(0),
            cells,
        })
    }

    fn into_dataset(mut self) -> Result<Dataset, String> {
        let mut dataset = Dataset::with_capacity(self.rows);
        for row in 0..self.rows {
            dataset.push(Record {
                id: self.text(columns::ID, row)?,
                created_at: self.timestamp(columns::CREATED_AT, row)?,
                updated_at: self.timestamp(columns::UPDATED_AT, row)?,
                firstname: self.text(columns::FIRSTNAME, row)?,
                lastname: self.text(columns::LASTNAME, row)?,
                birthday: self.timestamp(columns::BIRTHDAY, row)?,
                email: self.text(columns::EMAIL, row)?,
                username: self.text(columns::USERNAME, row)?,
                password: self.text(columns::PASSWORD, row)?,
                phonenumber: self.text(columns::PHONENUMBER, row)?,
                country: self.text(columns::COUNTRY, row)?,
                city: self.text(columns::CITY, row)?,
            });
        }
        Ok(dataset)
    }

    fn take(&mut self, column: &'static str, row: usize) -> Value {
        self.cells
            .get_mut(column)
            .and_then(|values| values.get_mut(row))
            .map(std::mem::take)
            .unwrap_or(Value::Null)
    }

    fn text(&mut self, column: &'static str, row: usize) -> Result<String, String> {
        match self.take(column, row) {
            Value::String(s) => Ok(s),
            other => Err(format!("expected text in '{}' row {}, found {}", column, row, other)),
        }
    }

    fn timestamp(&mut self, column: &'static str, row: usize) -> Result<NaiveDateTime, String> {
        let parsed = match self.take(column, row) {
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.naive_utc()),
            Value::String(s) => timestamp::parse(&s),
            _ => None,
        };
        parsed.ok_or_else(|| format!("invalid timestamp in '{}' row {}", column, row))
    }
}
