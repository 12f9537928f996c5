//! Recovering a meeting start from a bare access code.
//!
//! The time digits pin the meeting minute down modulo 10000. The resolver walks
//! every minute with those digits inside `[now - lookback, now + 3min]`, newest
//! first, and accepts the first candidate whose window contains `now` and whose
//! regenerated code equals the input. The walk is at most a handful of steps
//! for the default lookback, so there is no early-exit budget beyond the range.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::code::{AccessCode, TIME_DIGITS_MODULUS, normalize_label};
use crate::generator::CodeGenerator;
use crate::time::{minute_start, minutes_since_epoch};
use crate::window::{EARLY_ENTRY_MINUTES, ValidityWindow};

/// How far back the sweep looks for a meeting start: 7 days.
///
/// Wider than one time-digit period (10000 minutes), so two candidates can share
/// the same digits and the regenerated-code check is what tells them apart.
pub const DEFAULT_LOOKBACK_MINUTES: i64 = 7 * 24 * 60;

/// Upper bound for [`CodeResolver::with_lookback_minutes`]: two time-digit periods,
/// so a sweep never checks more than three candidates.
pub const MAX_LOOKBACK_MINUTES: i64 = 2 * TIME_DIGITS_MODULUS;

/// Why a code was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    /// Not exactly 8 ASCII digits. No search was performed.
    InvalidFormat,
    /// No candidate meeting had a window containing `now`.
    OutsideWindow,
    /// A candidate window contained `now`, but the regenerated code differed.
    CodeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Valid {
        meeting_start: DateTime<Utc>,
        window: ValidityWindow,
    },
    Invalid(RejectReason),
}

impl Resolution {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

#[derive(Debug, Clone)]
pub struct CodeResolver {
    generator: CodeGenerator,
    lookback_minutes: i64,
}

impl CodeResolver {
    pub fn new(generator: CodeGenerator) -> Self {
        Self {
            generator,
            lookback_minutes: DEFAULT_LOOKBACK_MINUTES,
        }
    }

    /// Override the sweep depth, clamped to `0..=MAX_LOOKBACK_MINUTES`.
    pub fn with_lookback_minutes(mut self, minutes: i64) -> Self {
        self.lookback_minutes = minutes.clamp(0, MAX_LOOKBACK_MINUTES);
        self
    }

    pub fn validate(&self, code: &str, label: &str, now: DateTime<Utc>) -> Resolution {
        let Ok(code) = AccessCode::parse(code) else {
            return Resolution::Invalid(RejectReason::InvalidFormat);
        };
        let label = normalize_label(label);

        let mut saw_open_window = false;
        for minute in self.candidate_minutes(code.time_digits(), now) {
            let Some(meeting_start) = minute_start(minute) else {
                continue;
            };
            let Ok(window) = ValidityWindow::for_meeting(meeting_start) else {
                continue;
            };
            if !window.contains(now) {
                continue;
            }
            saw_open_window = true;
            if self.generator.derive(&label, meeting_start) == code {
                tracing::debug!(%meeting_start, "access code resolved");
                return Resolution::Valid {
                    meeting_start,
                    window,
                };
            }
        }

        let reason = if saw_open_window {
            RejectReason::CodeMismatch
        } else {
            RejectReason::OutsideWindow
        };
        tracing::debug!(?reason, "access code rejected");
        Resolution::Invalid(reason)
    }

    /// Minutes congruent to `time_digits` mod 10000, newest first, within the sweep range.
    fn candidate_minutes(&self, time_digits: u16, now: DateTime<Utc>) -> impl Iterator<Item = i64> {
        let now_minute = minutes_since_epoch(now);
        // a meeting can start up to EARLY_ENTRY_MINUTES after `now` and still be open
        let latest = now_minute.saturating_add(EARLY_ENTRY_MINUTES);
        let earliest = now_minute.saturating_sub(self.lookback_minutes);
        let first = latest - (latest - i64::from(time_digits)).rem_euclid(TIME_DIGITS_MODULUS);

        std::iter::successors(Some(first), |m| m.checked_sub(TIME_DIGITS_MODULUS))
            .take_while(move |m| *m >= earliest)
    }
}
