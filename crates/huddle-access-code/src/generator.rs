use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::code::{AccessCode, TIME_DIGITS_MODULUS, normalize_label};
use crate::error::AccessCodeError;
use crate::hash::{base_digits, rolling_hash};
use crate::time::{canonical_minute, minutes_since_epoch, truncate_to_minute};
use crate::window::ValidityWindow;

/// Shared secret folded into every derivation seed.
///
/// Loaded once at start-up and never mutated. `Debug` does not print the value.
#[derive(Clone)]
pub struct CodeSecret(Arc<str>);

impl CodeSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CodeSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CodeSecret(..)")
    }
}

/// Output of [`CodeGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub code: AccessCode,
    /// Meeting start truncated to the minute; seconds are not recoverable from a code.
    pub meeting_start: DateTime<Utc>,
    pub window: ValidityWindow,
}

impl GeneratedCode {
    /// The zero-padded time field, i.e. the part of the code that encodes the meeting minute.
    pub fn encoded_timestamp(&self) -> String {
        format!("{:04}", self.code.time_digits())
    }
}

/// Derives access codes from a meeting time, a client label and the shared secret.
///
/// Pure: the same inputs always yield the same code and window.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    secret: CodeSecret,
}

impl CodeGenerator {
    pub fn new(secret: CodeSecret) -> Self {
        Self { secret }
    }

    pub fn generate(
        &self,
        label: &str,
        meeting_time: DateTime<Utc>,
    ) -> Result<GeneratedCode, AccessCodeError> {
        let meeting_start = truncate_to_minute(meeting_time)?;
        let window = ValidityWindow::for_meeting(meeting_start)?;
        let code = self.derive(&normalize_label(label), meeting_start);
        Ok(GeneratedCode {
            code,
            meeting_start,
            window,
        })
    }

    /// Derive the code for a minute-aligned meeting start and an already-normalized label.
    pub(crate) fn derive(&self, normalized_label: &str, meeting_start: DateTime<Utc>) -> AccessCode {
        let seed = self.seed(normalized_label, meeting_start);
        let base = base_digits(rolling_hash(&seed));
        // rem_euclid keeps pre-epoch minutes in 0..10000
        let time = minutes_since_epoch(meeting_start).rem_euclid(TIME_DIGITS_MODULUS) as u16;
        AccessCode::from_fields(base, time)
    }

    fn seed(&self, normalized_label: &str, meeting_start: DateTime<Utc>) -> String {
        format!(
            "{}{}{}",
            canonical_minute(meeting_start),
            normalized_label,
            self.secret.expose()
        )
    }
}
