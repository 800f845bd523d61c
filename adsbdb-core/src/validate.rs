//! Identifier validation — Mode-S codes, N-Numbers, and bounded input strings.
//!
//! `ModeSCode` and `NNumber` can only be obtained through `parse`, so holding
//! one means the grammar has already been checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{AdsbdbError, Result};

pub const MODE_S_FORMAT_ERROR: &str = "Mode-S code must be exactly 6 hexadecimal characters.";

pub const N_NUMBER_FORMAT_ERROR: &str =
    "Invalid N-Number format. It must start with 'N', not begin with zero, and use valid characters.";

// Characters for N-number suffix (A-Z excluding I and O)
const NNUM_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

const MODE_S_LEN: usize = 6;
const N_NUMBER_MAX_DIGITS: usize = 5;
const N_NUMBER_MAX_LETTERS: usize = 2;

// ---------------------------------------------------------------------------
// Generic string checks
// ---------------------------------------------------------------------------

/// Reject empty or all-whitespace input, and input longer than `max_len`
/// characters when a bound is given. `name` is used in the error message.
pub fn validate_str(value: &str, name: &str, max_len: Option<usize>) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdsbdbError::Format(format!(
            "{name} must be a non-empty string."
        )));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(AdsbdbError::Format(format!(
                "{name} must be at most {max} characters long."
            )));
        }
    }
    Ok(())
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Mode-S code
// ---------------------------------------------------------------------------

/// 24-bit ICAO transponder address as 6 hex characters, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModeSCode(String);

impl ModeSCode {
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != MODE_S_LEN || !bytes.iter().all(|&c| hex_digit(c).is_some()) {
            return Err(AdsbdbError::Format(MODE_S_FORMAT_ERROR.into()));
        }
        Ok(ModeSCode(s.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address as a 24-bit integer.
    pub fn to_u32(&self) -> u32 {
        self.0
            .bytes()
            .filter_map(hex_digit)
            .fold(0u32, |acc, d| (acc << 4) | d as u32)
    }
}

// ---------------------------------------------------------------------------
// N-Number
// ---------------------------------------------------------------------------

/// FAA registration: `N`, a nonzero digit, up to 4 more digits, then up to
/// 2 letters from A-Z without I and O.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NNumber(String);

impl NNumber {
    pub fn parse(s: &str) -> Result<Self> {
        if !is_n_number(s) {
            return Err(AdsbdbError::Format(N_NUMBER_FORMAT_ERROR.into()));
        }
        Ok(NNumber(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_n_number(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('N') else {
        return false;
    };
    let bytes = rest.as_bytes();

    let digits = bytes.iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits > N_NUMBER_MAX_DIGITS || bytes[0] == b'0' {
        return false;
    }

    let letters = &bytes[digits..];
    letters.len() <= N_NUMBER_MAX_LETTERS && letters.iter().all(|c| NNUM_CHARS.contains(c))
}

// ---------------------------------------------------------------------------
// Trait impls shared by both identifiers
// ---------------------------------------------------------------------------

macro_rules! identifier_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = AdsbdbError;

            fn from_str(s: &str) -> Result<Self> {
                $ty::parse(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                $ty::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

identifier_impls!(ModeSCode);
identifier_impls!(NNumber);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_validate_str_empty() {
        let err = validate_str("", "Identifier", None).unwrap_err();
        assert_eq!(err.to_string(), "Identifier must be a non-empty string.");
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_validate_str_whitespace() {
        let err = validate_str("   \t", "Callsign", None).unwrap_err();
        assert_eq!(err.to_string(), "Callsign must be a non-empty string.");
    }

    #[test]
    fn test_validate_str_max_len() {
        assert!(validate_str("TST", "Airline code", Some(3)).is_ok());
        let err = validate_str("TEST", "Airline code", Some(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Airline code must be at most 3 characters long."
        );
    }

    #[test]
    fn test_validate_str_counts_chars_not_bytes() {
        assert!(validate_str("ÄÖÜ", "Airline code", Some(3)).is_ok());
    }

    #[test]
    fn test_mode_s_normalizes_case() {
        let code = ModeSCode::parse("a1b2c3").unwrap();
        assert_eq!(code.as_str(), "A1B2C3");
        assert_eq!(code.to_string(), "A1B2C3");
    }

    #[test]
    fn test_mode_s_to_u32() {
        assert_eq!(ModeSCode::parse("A00001").unwrap().to_u32(), 0xA00001);
        assert_eq!(ModeSCode::parse("4840d6").unwrap().to_u32(), 0x4840D6);
    }

    #[test]
    fn test_mode_s_rejects() {
        for bad in ["", "12345", "1234567", "12345G", "A1B2C ", "ÄÄÄ"] {
            let err = ModeSCode::parse(bad).unwrap_err();
            assert_eq!(err.to_string(), MODE_S_FORMAT_ERROR, "input {bad:?}");
        }
    }

    #[test]
    fn test_n_number_accepts() {
        for good in ["N1", "N12345", "N1A", "N123AB", "N9999Z", "N12345HZ"] {
            assert!(NNumber::parse(good).is_ok(), "input {good:?}");
        }
    }

    #[test]
    fn test_n_number_rejects() {
        for bad in [
            "", "N", "n123", "01234Z", "N0123", "N123I", "N123O", "N123ABC", "N123456", "N12A3",
            "N12a", "123",
        ] {
            let err = NNumber::parse(bad).unwrap_err();
            assert_eq!(err.to_string(), N_NUMBER_FORMAT_ERROR, "input {bad:?}");
        }
    }

    #[test]
    fn test_n_number_chars_no_i_or_o() {
        assert!(!NNUM_CHARS.contains(&b'I'));
        assert!(!NNUM_CHARS.contains(&b'O'));
        assert_eq!(NNUM_CHARS.len(), 24);
    }

    #[test]
    fn test_from_str_and_serde() {
        let code: ModeSCode = "abcdef".parse().unwrap();
        assert_eq!(serde_json::to_value(&code).unwrap(), "ABCDEF");

        let n: NNumber = serde_json::from_value(serde_json::json!("N12345")).unwrap();
        assert_eq!(n.as_ref(), "N12345");
        assert!(serde_json::from_value::<NNumber>(serde_json::json!("N0")).is_err());
    }

    proptest! {
        #[test]
        fn prop_mode_s_valid(s in "[0-9A-Fa-f]{6}") {
            let code = ModeSCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
            prop_assert_eq!(ModeSCode::parse(code.as_str()).unwrap(), code);
        }

        #[test]
        fn prop_mode_s_bad_length(s in "[0-9A-F]{0,5}|[0-9A-F]{7,12}") {
            prop_assert!(ModeSCode::parse(&s).is_err());
        }

        #[test]
        fn prop_mode_s_bad_alphabet(s in "[0-9A-F]{5}[G-Zg-z]") {
            prop_assert!(ModeSCode::parse(&s).is_err());
        }

        #[test]
        fn prop_n_number_valid(s in "N[1-9][0-9]{0,4}[A-HJ-NP-Z]{0,2}") {
            let number = NNumber::parse(&s).unwrap();
            prop_assert_eq!(number.as_str(), s.as_str());
        }

        #[test]
        fn prop_n_number_leading_zero(s in "N0[0-9]{0,4}[A-HJ-NP-Z]{0,2}") {
            prop_assert!(NNumber::parse(&s).is_err());
        }

        #[test]
        fn prop_n_number_lowercase_leader(s in "n[1-9][0-9]{0,4}[A-HJ-NP-Z]{0,2}") {
            prop_assert!(NNumber::parse(&s).is_err());
        }

        #[test]
        fn prop_n_number_i_or_o(s in "N[1-9][0-9]{0,3}[A-HJ-NP-Z]?[IO]") {
            prop_assert!(NNumber::parse(&s).is_err());
        }
    }
}
