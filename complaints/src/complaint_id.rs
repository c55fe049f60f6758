use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "COMP";
const SUFFIX_LEN: usize = 4;
const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Human-shareable reference handed back to the person filing a complaint,
/// e.g. `COMP-MVDRWQO0-7K2Q`.
///
/// Made of the submission time in milliseconds and a short random suffix.
/// Good enough to tell support tickets apart, not to be used as a secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(String);

impl ComplaintId {
    pub fn generate<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let millis = now.timestamp_millis().max(0) as u64;
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())] as char)
            .collect();

        ComplaintId(format!("{}-{}-{}", PREFIX, to_base36(millis), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComplaintId {
    fn from(value: &str) -> Self {
        ComplaintId(value.to_string())
    }
}

impl From<String> for ComplaintId {
    fn from(value: String) -> Self {
        ComplaintId(value)
    }
}

pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn base36_matches_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn id_has_prefix_timestamp_and_suffix() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let id = ComplaintId::generate(now, &mut StdRng::seed_from_u64(7));

        let shape = Regex::new(r"^COMP-[0-9A-Z]+-[0-9A-Z]{4}$").unwrap();
        assert!(shape.is_match(id.as_str()), "unexpected id {}", id);
        assert!(id.as_str().starts_with("COMP-MVDRWQO0-"));
    }

    #[test]
    fn ids_differ_across_timestamps() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let second = first + chrono::Duration::milliseconds(1);

        let a = ComplaintId::generate(first, &mut rng);
        let b = ComplaintId::generate(second, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn ids_differ_across_random_draws_at_the_same_instant() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let ids: HashSet<ComplaintId> = (0..50)
            .map(|_| ComplaintId::generate(now, &mut rng))
            .collect();
        assert!(ids.len() >= 49);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ComplaintId::from("COMP-1-ABCD");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"COMP-1-ABCD\"");
    }
}
