//! # User Table Schema
//!
//! This module defines the fixed Arrow schema shared by every format.
//!
//! ## Schema Columns
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | id | Utf8 | Hyphenated random UUID |
//! | created_at | Timestamp(µs) | Account creation time, 2020..2026 |
//! | updated_at | Timestamp(µs) | Last update time, 2020..2026 |
//! | firstname | Utf8 | Given name |
//! | lastname | Utf8 | Family name |
//! | birthday | Timestamp(µs) | Date of birth, 1945..2026 |
//! | email | Utf8 | E-mail address |
//! | username | Utf8 | Login name |
//! | password | Utf8 | Plain-text password |
//! | phonenumber | Utf8 | Phone number |
//! | country | Utf8 | Country name |
//! | city | Utf8 | City name |
//!
//! All columns are non-nullable. Timestamps carry no timezone; the text formats
//! render them with [`TIMESTAMP_FORMAT`].

mod builders;
/// User table column name constants.
pub mod columns;
mod constants;
mod validation;

#[cfg(test)]
mod tests;

pub use builders::{create_user_schema, create_user_schema_arc, timestamp_type};
pub use constants::*;
pub use validation::{validate_schema, SchemaMismatch};
