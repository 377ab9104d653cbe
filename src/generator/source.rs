//! Randomized field values.

use chrono::{DateTime, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use super::pools;

/// Supplier of one randomized value per field kind.
///
/// The generator only depends on this trait; distributions are entirely up to
/// the implementation. Every method is infallible.
pub trait ValueSource {
    /// 128-bit random identifier
    fn uuid(&mut self) -> Uuid;

    /// Timestamp drawn from `[start, end)`. Returns `start` when the range is empty.
    fn timestamp_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime;

    /// Given name
    fn first_name(&mut self) -> String;

    /// Family name
    fn last_name(&mut self) -> String;

    /// E-mail address
    fn email(&mut self) -> String;

    /// Login name
    fn user_name(&mut self) -> String;

    /// Password
    fn password(&mut self) -> String;

    /// Phone number
    fn phone_number(&mut self) -> String;

    /// Country name
    fn country(&mut self) -> String;

    /// City name, including a settlement-type prefix
    fn city(&mut self) -> String;
}

/// Length of generated passwords.
pub const PASSWORD_LENGTH: usize = 10;

/// `rand`-backed [`ValueSource`] producing ru_RU-style values.
#[derive(Debug, Clone)]
pub struct RandomValueSource {
    rng: StdRng,
}

impl RandomValueSource {
    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Source with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool[self.rng.random_range(0..pool.len())]
    }

    fn pick_byte(&mut self, pool: &[u8]) -> u8 {
        pool[self.rng.random_range(0..pool.len())]
    }

    fn fill_digits(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| {
                if c == '#' {
                    char::from(b'0' + self.rng.random_range(0..10u8))
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for RandomValueSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ValueSource for RandomValueSource {
    fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    fn timestamp_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
        let start_ts = start.and_utc().timestamp();
        let end_ts = end.and_utc().timestamp();

        if start_ts >= end_ts {
            return start;
        }

        let random_ts = self.rng.random_range(start_ts..end_ts);
        DateTime::from_timestamp(random_ts, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or(start)
    }

    fn first_name(&mut self) -> String {
        self.pick(pools::FIRST_NAMES).to_string()
    }

    fn last_name(&mut self) -> String {
        self.pick(pools::LAST_NAMES).to_string()
    }

    fn email(&mut self) -> String {
        let local = self.user_name();
        let domain = self.pick(pools::EMAIL_DOMAINS);
        format!("{}@{}", local, domain)
    }

    fn user_name(&mut self) -> String {
        let first = self.pick(pools::LATIN_STEMS);
        match self.rng.random_range(0..4u8) {
            0 => first.to_string(),
            1 => format!("{}{}", first, self.rng.random_range(1..2000u32)),
            2 => {
                let second = self.pick(pools::LATIN_STEMS);
                format!("{}.{}", first, second)
            }
            _ => {
                let second = self.pick(pools::LATIN_STEMS);
                format!("{}_{}", first, second)
            }
        }
    }

    fn password(&mut self) -> String {
        // One character from each class, the rest from all of them
        let mut chars: Vec<u8> = vec![
            self.pick_byte(pools::PASSWORD_SPECIALS),
            self.pick_byte(pools::PASSWORD_DIGITS),
            self.pick_byte(pools::PASSWORD_UPPER),
            self.pick_byte(pools::PASSWORD_LOWER),
        ];
        let classes = [
            pools::PASSWORD_SPECIALS,
            pools::PASSWORD_DIGITS,
            pools::PASSWORD_UPPER,
            pools::PASSWORD_LOWER,
        ];
        while chars.len() < PASSWORD_LENGTH {
            let class = classes[self.rng.random_range(0..classes.len())];
            chars.push(self.pick_byte(class));
        }
        chars.shuffle(&mut self.rng);
        chars.into_iter().map(char::from).collect()
    }

    fn phone_number(&mut self) -> String {
        let pattern = self.pick(pools::PHONE_FORMATS);
        self.fill_digits(pattern)
    }

    fn country(&mut self) -> String {
        self.pick(pools::COUNTRIES).to_string()
    }

    fn city(&mut self) -> String {
        let prefix = self.pick(pools::CITY_PREFIXES);
        let name = self.pick(pools::CITY_NAMES);
        format!("{} {}", prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_uuid_is_v4() {
        let mut source = RandomValueSource::seeded(42);
        let id = source.uuid();
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, source.uuid());
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RandomValueSource::seeded(7);
        let mut b = RandomValueSource::seeded(7);
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.city(), b.city());
    }

    #[test]
    fn test_timestamp_in_range() {
        let mut source = RandomValueSource::seeded(1);
        for _ in 0..200 {
            let ts = source.timestamp_between(at(2020), at(2026));
            assert!(ts >= at(2020) && ts < at(2026));
        }
    }

    #[test]
    fn test_empty_timestamp_range() {
        let mut source = RandomValueSource::seeded(1);
        assert_eq!(source.timestamp_between(at(2026), at(2020)), at(2026));
    }

    #[test]
    fn test_password_classes() {
        let mut source = RandomValueSource::seeded(3);
        for _ in 0..50 {
            let password = source.password();
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.bytes().any(|b| pools::PASSWORD_SPECIALS.contains(&b)));
        }
    }

    #[test]
    fn test_phone_number_has_no_placeholders() {
        let mut source = RandomValueSource::seeded(9);
        for _ in 0..50 {
            let phone = source.phone_number();
            assert!(!phone.contains('#'));
            assert!(phone.starts_with('+') || phone.starts_with('8'));
        }
    }

    #[test]
    fn test_email_shape() {
        let mut source = RandomValueSource::seeded(11);
        let email = source.email();
        let (local, domain) = email.split_once('@').unwrap();
        assert!(!local.is_empty());
        assert!(pools::EMAIL_DOMAINS.contains(&domain));
    }
}
