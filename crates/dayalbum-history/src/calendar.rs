//! Calendar-date arithmetic for day numbering.
//!
//! All dates are plain `NaiveDate`s: no time of day and no time zone, so
//! daylight-saving shifts can never move an album onto a neighbouring day.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::HistoryError;

/// Wire format of scheduled dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a scheduled date from the backend.
///
/// Accepts `YYYY-MM-DD`, and tolerates a trailing time component
/// (`2026-01-26T00:00:00` or `2026-01-26 00:00:00`), which is dropped.
pub fn parse_scheduled_date(raw: &str) -> Result<NaiveDate, HistoryError> {
    let trimmed = raw.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);

    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|source| HistoryError::Parse {
        value: raw.to_string(),
        source,
    })
}

/// 1-based day number of `date` relative to the campaign `start`.
///
/// The start date is day 1. Dates before the start clamp to 1 rather than
/// going to zero or negative.
pub fn compute_day_number(date: NaiveDate, start: NaiveDate) -> u32 {
    let elapsed = date.signed_duration_since(start).num_days();
    u32::try_from(elapsed.saturating_add(1).max(1)).unwrap_or(u32::MAX)
}

/// Whole days from `start` to `today`, zero if `today` is before `start`.
pub fn days_elapsed(today: NaiveDate, start: NaiveDate) -> u32 {
    let elapsed = today.signed_duration_since(start).num_days();
    u32::try_from(elapsed.max(0)).unwrap_or(u32::MAX)
}

/// `count` consecutive dates beginning at `start`.
pub fn consecutive_days(start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
    (0..u64::from(count)).map_while(move |offset| start.checked_add_days(Days::new(offset)))
}

/// Which day is the last one shown in the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CutoffPolicy {
    /// Only days that have fully ended; today's album stays on the game page.
    #[default]
    Yesterday,
    /// Include today's album as well.
    Today,
}

impl CutoffPolicy {
    /// The last date (inclusive) visible when the current date is `today`.
    pub fn cutoff_for(self, today: NaiveDate) -> NaiveDate {
        match self {
            CutoffPolicy::Today => today,
            CutoffPolicy::Yesterday => today.pred_opt().unwrap_or(today),
        }
    }
}

impl fmt::Display for CutoffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffPolicy::Yesterday => write!(f, "yesterday"),
            CutoffPolicy::Today => write!(f, "today"),
        }
    }
}

impl FromStr for CutoffPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yesterday" => Ok(CutoffPolicy::Yesterday),
            "today" => Ok(CutoffPolicy::Today),
            _ => Err(format!(
                "invalid cutoff policy '{}', expected 'yesterday' or 'today'",
                s
            )),
        }
    }
}
