//! # Record Generator
//!
//! Produces a [`Dataset`] of synthetic users from a [`ValueSource`].
//!
//! ```rust
//! use userformats::generator::{RandomValueSource, RecordGenerator};
//!
//! let mut generator = RecordGenerator::new(RandomValueSource::seeded(42));
//! let dataset = generator.generate(3)?;
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset.distinct_ids(), 3);
//! # Ok::<(), userformats::generator::GeneratorError>(())
//! ```

mod pools;
mod source;

use chrono::{NaiveDate, NaiveDateTime};

use crate::dataset::{Dataset, Record};

pub use source::{RandomValueSource, ValueSource, PASSWORD_LENGTH};

/// Errors that can occur during generation
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Requested record count is negative
    #[error("Invalid argument: record count must be non-negative, got {count}")]
    InvalidArgument {
        /// The rejected count
        count: i64,
    },
}

/// Half-open timestamp range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRange {
    /// Inclusive lower bound
    pub start: NaiveDateTime,
    /// Exclusive upper bound
    pub end: NaiveDateTime,
}

impl TimestampRange {
    /// Range between midnight of two calendar years' first days
    pub fn years(start_year: i32, end_year: i32) -> Self {
        Self {
            start: new_year(start_year),
            end: new_year(end_year),
        }
    }

    /// Whether `value` falls inside the range
    pub fn contains(&self, value: &NaiveDateTime) -> bool {
        *value >= self.start && *value < self.end
    }
}

fn new_year(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Default range for `created_at` and `updated_at`
pub fn default_activity_range() -> TimestampRange {
    TimestampRange::years(2020, 2026)
}

/// Default range for `birthday`
pub fn default_birthday_range() -> TimestampRange {
    TimestampRange::years(1945, 2026)
}

/// Upper bound on the records reserved up front by [`RecordGenerator::generate`]
pub const MAX_PREALLOCATED_RECORDS: usize = 1 << 16;

/// Synthesizes user records.
///
/// `created_at`, `updated_at` and `birthday` are sampled independently; no
/// ordering between them is enforced.
pub struct RecordGenerator<S: ValueSource> {
    source: S,
    activity_range: TimestampRange,
    birthday_range: TimestampRange,
}

impl<S: ValueSource> RecordGenerator<S> {
    /// Create a generator with the default timestamp ranges
    pub fn new(source: S) -> Self {
        Self {
            source,
            activity_range: default_activity_range(),
            birthday_range: default_birthday_range(),
        }
    }

    /// Override the range for `created_at` / `updated_at`
    pub fn with_activity_range(mut self, range: TimestampRange) -> Self {
        self.activity_range = range;
        self
    }

    /// Override the range for `birthday`
    pub fn with_birthday_range(mut self, range: TimestampRange) -> Self {
        self.birthday_range = range;
        self
    }

    /// Generate exactly `count` records.
    ///
    /// A negative count fails with [`GeneratorError::InvalidArgument`]; zero
    /// yields an empty dataset.
    pub fn generate(&mut self, count: i64) -> Result<Dataset, GeneratorError> {
        let count = usize::try_from(count).map_err(|_| GeneratorError::InvalidArgument { count })?;

        let mut dataset = Dataset::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
        for _ in 0..count {
            dataset.push(self.next_record());
        }
        Ok(dataset)
    }

    /// Generate a single record
    pub fn next_record(&mut self) -> Record {
        let source = &mut self.source;
        Record {
            id: source.uuid().to_string(),
            created_at: source
                .timestamp_between(self.activity_range.start, self.activity_range.end),
            updated_at: source
                .timestamp_between(self.activity_range.start, self.activity_range.end),
            firstname: source.first_name(),
            lastname: source.last_name(),
            birthday: source.timestamp_between(self.birthday_range.start, self.birthday_range.end),
            email: source.email(),
            username: source.user_name(),
            password: source.password(),
            phonenumber: source.phone_number(),
            country: source.country(),
            city: source.city(),
        }
    }

    /// Borrow the underlying value source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    #[test]
    fn test_generate_count() {
        let mut generator = RecordGenerator::new(RandomValueSource::seeded(42));
        let dataset = generator.generate(3).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.distinct_ids(), 3);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let mut generator = RecordGenerator::new(RandomValueSource::seeded(42));
        let dataset = generator.generate(0).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let mut generator = RecordGenerator::new(RandomValueSource::seeded(42));
        let result = generator.generate(-1);
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidArgument { count: -1 })
        ));
    }

    #[test]
    fn test_fields_within_ranges() {
        let mut generator = RecordGenerator::new(RandomValueSource::seeded(5));
        let dataset = generator.generate(100).unwrap();

        let activity = default_activity_range();
        let birthdays = default_birthday_range();
        for record in &dataset {
            assert!(Uuid::parse_str(&record.id).is_ok());
            assert!(activity.contains(&record.created_at));
            assert!(activity.contains(&record.updated_at));
            assert!(birthdays.contains(&record.birthday));
            assert!(record.email.contains('@'));
            assert!(!record.firstname.is_empty());
            assert!(!record.city.is_empty());
        }
    }

    #[test]
    fn test_custom_ranges() {
        let range = TimestampRange::years(2023, 2024);
        let mut generator = RecordGenerator::new(RandomValueSource::seeded(5))
            .with_activity_range(range)
            .with_birthday_range(TimestampRange::years(1990, 1991));

        let record = generator.next_record();
        assert!(range.contains(&record.created_at));
        assert!(TimestampRange::years(1990, 1991).contains(&record.birthday));
    }

    /// Scripted source for checking that every field comes from the source
    struct FixedSource {
        counter: u128,
    }

    impl ValueSource for FixedSource {
        fn uuid(&mut self) -> Uuid {
            self.counter += 1;
            Uuid::from_u128(self.counter)
        }
        fn timestamp_between(
            &mut self,
            start: NaiveDateTime,
            _end: NaiveDateTime,
        ) -> NaiveDateTime {
            start
        }
        fn first_name(&mut self) -> String {
            "first".into()
        }
        fn last_name(&mut self) -> String {
            "last".into()
        }
        fn email(&mut self) -> String {
            "e@x".into()
        }
        fn user_name(&mut self) -> String {
            "user".into()
        }
        fn password(&mut self) -> String {
            "pw".into()
        }
        fn phone_number(&mut self) -> String {
            "000".into()
        }
        fn country(&mut self) -> String {
            "country".into()
        }
        fn city(&mut self) -> String {
            "city".into()
        }
    }

    #[test]
    fn test_fields_come_from_source() {
        let mut generator = RecordGenerator::new(FixedSource { counter: 0 });
        let dataset = generator.generate(2).unwrap();

        let first = &dataset.records()[0];
        assert_eq!(first.id, Uuid::from_u128(1).to_string());
        assert_eq!(first.created_at, default_activity_range().start);
        assert_eq!(first.birthday, default_birthday_range().start);
        assert_eq!(first.username, "user");
        assert_eq!(dataset.records()[1].id, Uuid::from_u128(2).to_string());
    }

    /// Source that gives up after a few ids
    struct ExhaustibleSource {
        inner: FixedSource,
        remaining: usize,
    }

    impl ValueSource for ExhaustibleSource {
        fn uuid(&mut self) -> Uuid {
            if self.remaining == 0 {
                panic!("source exhausted");
            }
            self.remaining -= 1;
            self.inner.uuid()
        }
        fn timestamp_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
            self.inner.timestamp_between(start, end)
        }
        fn first_name(&mut self) -> String {
            self.inner.first_name()
        }
        fn last_name(&mut self) -> String {
            self.inner.last_name()
        }
        fn email(&mut self) -> String {
            self.inner.email()
        }
        fn user_name(&mut self) -> String {
            self.inner.user_name()
        }
        fn password(&mut self) -> String {
            self.inner.password()
        }
        fn phone_number(&mut self) -> String {
            self.inner.phone_number()
        }
        fn country(&mut self) -> String {
            self.inner.country()
        }
        fn city(&mut self) -> String {
            self.inner.city()
        }
    }

    #[test]
    fn test_huge_count_does_not_reserve_everything_up_front() {
        let result = std::panic::catch_unwind(|| {
            let source = ExhaustibleSource {
                inner: FixedSource { counter: 0 },
                remaining: 3,
            };
            RecordGenerator::new(source).generate(i64::MAX)
        });

        // Generation got as far as the source allowed instead of failing to allocate
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"source exhausted"));
    }

    proptest! {
        #[test]
        fn prop_generate_exact_count_and_unique_ids(count in 0i64..300, seed in any::<u64>()) {
            let mut generator = RecordGenerator::new(RandomValueSource::seeded(seed));
            let dataset = generator.generate(count).unwrap();
            prop_assert_eq!(dataset.len() as i64, count);
            prop_assert_eq!(dataset.distinct_ids() as i64, count);
        }

        #[test]
        fn prop_negative_counts_fail(count in i64::MIN..0) {
            let mut generator = RecordGenerator::new(RandomValueSource::seeded(0));
            prop_assert!(generator.generate(count).is_err());
        }
    }
}
