//! Client generated keys that let the expense store deduplicate retried submissions.

use std::fmt::Display;

use rand::Rng;
use time::OffsetDateTime;

/// The request header that carries the [IdempotencyKey].
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// A token sent with each create request, e.g. `key-1704067200000-42`.
///
/// The key is made of the current Unix time in milliseconds and a random
/// integer in the range `[0, 1000)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Create a fresh key from the current time and a random number.
    pub fn generate() -> Self {
        let epoch_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let random = rand::rng().random_range(0..1000);

        Self::from_parts(epoch_millis, random)
    }

    pub(crate) fn from_parts(epoch_millis: i128, random: u32) -> Self {
        Self(format!("key-{epoch_millis}-{random}"))
    }

    /// The key as sent in the request header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IdempotencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IdempotencyKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::IdempotencyKey;

    #[test]
    fn formats_key_from_parts() {
        let key = IdempotencyKey::from_parts(1_704_067_200_000, 42);

        assert_eq!(key.as_str(), "key-1704067200000-42");
        assert_eq!(key.to_string(), "key-1704067200000-42");
    }

    #[test]
    fn generated_key_has_timestamp_and_random_component() {
        let before = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let key = IdempotencyKey::generate();
        let after = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        let parts: Vec<&str> = key.as_str().split('-').collect();
        assert_eq!(parts.len(), 3, "want three parts in {key}");
        assert_eq!(parts[0], "key");

        let millis: i128 = parts[1].parse().expect("timestamp should be an integer");
        assert!(
            (before..=after).contains(&millis),
            "want timestamp between {before} and {after}, got {millis}"
        );

        let random: u32 = parts[2].parse().expect("random part should be an integer");
        assert!(random < 1000, "want random part below 1000, got {random}");
    }
}
