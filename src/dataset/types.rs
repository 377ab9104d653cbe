use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::schema::columns;

/// One synthetic user.
///
/// Field order matches [`crate::schema::columns::ALL`]; serde derives rely on it
/// for the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Hyphenated random UUID
    pub id: String,

    /// Account creation time
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,

    /// Last account update time (not ordered relative to `created_at`)
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,

    /// Given name
    pub firstname: String,

    /// Family name
    pub lastname: String,

    /// Date of birth
    #[serde(with = "timestamp")]
    pub birthday: NaiveDateTime,

    /// E-mail address
    pub email: String,

    /// Login name
    pub username: String,

    /// Password
    pub password: String,

    /// Phone number
    pub phonenumber: String,

    /// Country name
    pub country: String,

    /// City name
    pub city: String,
}

impl Record {
    /// Every field rendered as text, in schema order.
    pub fn to_text_row(&self) -> [String; 12] {
        [
            self.id.clone(),
            timestamp::format(&self.created_at),
            timestamp::format(&self.updated_at),
            self.firstname.clone(),
            self.lastname.clone(),
            timestamp::format(&self.birthday),
            self.email.clone(),
            self.username.clone(),
            self.password.clone(),
            self.phonenumber.clone(),
            self.country.clone(),
            self.city.clone(),
        ]
    }

    /// Value of a text column, `None` for timestamp or unknown columns.
    pub fn text(&self, column: &str) -> Option<&str> {
        let value = match column {
            columns::ID => &self.id,
            columns::FIRSTNAME => &self.firstname,
            columns::LASTNAME => &self.lastname,
            columns::EMAIL => &self.email,
            columns::USERNAME => &self.username,
            columns::PASSWORD => &self.password,
            columns::PHONENUMBER => &self.phonenumber,
            columns::COUNTRY => &self.country,
            columns::CITY => &self.city,
            _ => return None,
        };
        Some(value)
    }

    /// Value of a timestamp column, `None` for text or unknown columns.
    pub fn timestamp(&self, column: &str) -> Option<&NaiveDateTime> {
        match column {
            columns::CREATED_AT => Some(&self.created_at),
            columns::UPDATED_AT => Some(&self.updated_at),
            columns::BIRTHDAY => Some(&self.birthday),
            _ => None,
        }
    }

    /// The nine text-typed fields, in schema order.
    pub fn text_fields(&self) -> [&str; 9] {
        [
            &self.id,
            &self.firstname,
            &self.lastname,
            &self.email,
            &self.username,
            &self.password,
            &self.phonenumber,
            &self.country,
            &self.city,
        ]
    }
}

/// Ordered, schema-uniform collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dataset with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Wrap existing records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Borrow the records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Append all records of another dataset
    pub fn append(&mut self, other: Dataset) {
        self.records.extend(other.records);
    }

    /// Number of distinct `id` values.
    ///
    /// Equal to [`len`](Self::len) unless two identifiers collided.
    pub fn distinct_ids(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Dataset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
