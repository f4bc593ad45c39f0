use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact phone number that only shows its last digits in Debug and Display output.
///
/// Listing cards keep seller phones hidden until the buyer reveals them, and the
/// same number must never leak through `tracing::info!("{:?}", contact)`.
/// Serialization writes the full value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

const VISIBLE_DIGITS: usize = 3;

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// The full number, for an explicit reveal.
    pub fn reveal(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= VISIBLE_DIGITS {
            return "*".repeat(chars.len());
        }
        let hidden = chars.len() - VISIBLE_DIGITS;
        let tail: String = chars[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), tail)
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.masked())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(PhoneNumber::new)
    }
}

impl From<&str> for PhoneNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_all_but_last_digits() {
        let phone = PhoneNumber::new("0501234567");
        assert_eq!(format!("{}", phone), "*******567");
        assert_eq!(format!("{:?}", phone), "PhoneNumber(*******567)");
        assert_eq!(phone.reveal(), "0501234567");
    }

    #[test]
    fn test_serializes_full_value() {
        let phone = PhoneNumber::new(" 0559876543 ");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0559876543\"");
    }

    #[test]
    fn test_short_numbers_are_fully_masked() {
        assert_eq!(PhoneNumber::new("12").to_string(), "**");
        assert!(PhoneNumber::new("   ").is_blank());
    }
}
