//! City identifiers

use serde::Serialize;

/// Canonical city identifier: ASCII letters only, lower-cased.
///
/// Raw names that differ only in case, spacing or punctuation map to the
/// same key, e.g. `"Ber lin"` and `"BERLIN"` both become `"berlin"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CityKey(String);

impl CityKey {
    /// Strip every character that is not an ASCII letter and lower-case the rest.
    pub fn normalize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_lowercases() {
        assert_eq!(CityKey::normalize("Ber lin").as_str(), "berlin");
        assert_eq!(CityKey::normalize("BERLIN").as_str(), "berlin");
        assert_eq!(CityKey::normalize("San-Francisco 94!").as_str(), "sanfrancisco");
        assert_eq!(CityKey::normalize("München").as_str(), "mnchen");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["Ber lin", "  New York ", "x_Y-z", "", "123"] {
            let once = CityKey::normalize(raw);
            let twice = CityKey::normalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_to_empty() {
        assert!(CityKey::normalize("42 / !").is_empty());
    }
}
