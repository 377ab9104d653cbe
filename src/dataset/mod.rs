//! # Dataset Module
//!
//! In-memory model of the user table:
//!
//! - [`Record`]: one synthetic user with twelve fixed, typed fields
//! - [`Dataset`]: an ordered collection of records sharing that shape
//!
//! A dataset converts losslessly to and from an Arrow [`RecordBatch`] with the
//! schema from [`crate::schema::create_user_schema`]. The conversion from a
//! batch is the only place where a shape mismatch can arise, since a
//! `Vec<Record>` is homogeneous by construction.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use userformats::dataset::{Dataset, Record};
//!
//! let at = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let record = Record {
//!     id: "0b8f3a52-6a8e-4c5e-9d1b-2f3c4d5e6f70".to_string(),
//!     created_at: at,
//!     updated_at: at,
//!     firstname: "Анна".to_string(),
//!     lastname: "Иванова".to_string(),
//!     birthday: at,
//!     email: "anna@example.org".to_string(),
//!     username: "anna_ivanova".to_string(),
//!     password: "s3cr3t!Pass".to_string(),
//!     phonenumber: "+7 912 345 67 89".to_string(),
//!     country: "Россия".to_string(),
//!     city: "Казань".to_string(),
//! };
//!
//! let dataset = Dataset::from_records(vec![record]);
//! let batch = dataset.to_record_batch()?;
//! assert_eq!(Dataset::try_from_batch(&batch)?, dataset);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`RecordBatch`]: arrow::record_batch::RecordBatch

mod batch;
pub mod timestamp;
mod types;


pub use types::{Dataset, Record};
