use chrono::{DateTime, TimeDelta, Utc};

use crate::error::AccessCodeError;

/// Minutes before the meeting start at which a code becomes usable.
pub const EARLY_ENTRY_MINUTES: i64 = 3;

/// Minutes after the meeting start at which a code stops being usable.
pub const MEETING_LENGTH_MINUTES: i64 = 120;

/// Interval `[meeting - 3min, meeting + 2h]` during which a code is accepted.
///
/// Both ends are inclusive. The window is always anchored on the minute-truncated
/// meeting start, so a generator and a resolver agree on it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ValidityWindow {
    /// Fails when either end falls outside chrono's representable range.
    pub fn for_meeting(meeting_start: DateTime<Utc>) -> Result<Self, AccessCodeError> {
        let start = meeting_start.checked_sub_signed(TimeDelta::minutes(EARLY_ENTRY_MINUTES));
        let end = meeting_start.checked_add_signed(TimeDelta::minutes(MEETING_LENGTH_MINUTES));
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(AccessCodeError::InvalidMeetingTime),
        }
    }

    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }
}
