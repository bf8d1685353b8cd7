//! History builder configuration.

use chrono::NaiveDate;

use crate::CutoffPolicy;

/// Minimum number of placeholder days synthesized on fallback.
pub const DEFAULT_PLACEHOLDER_DAYS: u32 = 30;

/// Settings that stay fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Campaign start date; this day is day 1.
    pub start_date: NaiveDate,
    /// Last day visible in the history.
    pub cutoff: CutoffPolicy,
    /// Lower bound on the placeholder list length.
    pub min_placeholder_days: u32,
}

impl HistoryConfig {
    /// Default campaign start date, 2026-01-26.
    pub fn default_start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 26).expect("2026-01-26 is a valid date")
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            start_date: Self::default_start_date(),
            cutoff: CutoffPolicy::default(),
            min_placeholder_days: DEFAULT_PLACEHOLDER_DAYS,
        }
    }
}
