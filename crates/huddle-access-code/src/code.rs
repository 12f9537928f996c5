use std::fmt;
use std::str::FromStr;

use crate::error::AccessCodeError;

/// Total length of an access code.
pub const CODE_LEN: usize = 8;

/// Length of each of the two fixed fields.
const FIELD_LEN: usize = 4;

/// Time digits repeat with this period, in minutes (~6.94 days).
pub const TIME_DIGITS_MODULUS: i64 = 10_000;

/// An 8-digit access code: `BaseDigits (4) ++ TimeDigits (4)`.
///
/// Only constructible through [`AccessCode::parse`] or the generator, so the
/// length and digit invariants always hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessCode(String);

impl AccessCode {
    /// Accept exactly 8 ASCII digits, nothing else (no trimming, no separators).
    pub fn parse(input: &str) -> Result<Self, AccessCodeError> {
        if input.len() == CODE_LEN && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_owned()))
        } else {
            Err(AccessCodeError::InvalidFormat)
        }
    }

    pub(crate) fn from_fields(base_digits: u16, time_digits: u16) -> Self {
        Self(format!("{base_digits:04}{time_digits:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keyed checksum field (first four digits).
    pub fn base_digits(&self) -> &str {
        &self.0[..FIELD_LEN]
    }

    /// Meeting minute modulo 10000 (last four digits).
    pub fn time_digits(&self) -> u16 {
        self.0.as_bytes()[FIELD_LEN..]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccessCode {
    type Err = AccessCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for AccessCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lower-case the label and keep only alphanumeric characters (Unicode-aware).
///
/// `"Acme Corp."` and `"acme-corp"` both normalize to `"acmecorp"`; `"Zürich Ärzte"`
/// to `"zürichärzte"`.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
