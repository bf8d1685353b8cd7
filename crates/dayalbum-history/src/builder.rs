//! Building the day-button list from scheduled entries.

use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::calendar::{self, compute_day_number, parse_scheduled_date};
use crate::{
    DisplayItem, EntrySource, HistoryConfig, HistoryList, HistorySource, ScheduleEntry,
};

/// An entry whose scheduled date parsed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedEntry<'a> {
    pub date: NaiveDate,
    pub entry: &'a ScheduleEntry,
}

/// Turns the backend's schedule into the history page's list of days.
///
/// Holds only immutable configuration; every call recomputes from its inputs.
#[derive(Debug, Clone, Default)]
pub struct HistoryListBuilder {
    config: HistoryConfig,
}

impl HistoryListBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Last date visible when the current date is `today`.
    pub fn cutoff_date(&self, today: NaiveDate) -> NaiveDate {
        self.config.cutoff.cutoff_for(today)
    }

    /// Day number of `date` in this campaign.
    pub fn day_number(&self, date: NaiveDate) -> u32 {
        compute_day_number(date, self.config.start_date)
    }

    /// Load the history from `source` as of the current UTC date.
    pub async fn load(&self, source: &dyn EntrySource) -> HistoryList {
        self.load_at(source, Utc::now().date_naive()).await
    }

    /// Load the history from `source` as of `today`.
    ///
    /// One fetch, no retries. Any fetch failure, or an empty listing,
    /// yields the placeholder list instead.
    pub async fn load_at(&self, source: &dyn EntrySource, today: NaiveDate) -> HistoryList {
        match source.fetch_entries().await {
            Ok(entries) if entries.is_empty() => {
                info!("album history is empty, using placeholder days");
                self.placeholder_list(today)
            }
            Ok(entries) => HistoryList {
                source: HistorySource::Remote,
                items: self.build_display_list(&entries, today),
            },
            Err(e) => {
                warn!(error = %e, "failed to load album history, using placeholder days");
                self.placeholder_list(today)
            }
        }
    }

    /// Keep entries scheduled on or before `cutoff`, in input order.
    ///
    /// Entries with an unparseable date are logged and dropped.
    pub fn filter_past_entries<'a>(
        &self,
        entries: &'a [ScheduleEntry],
        cutoff: NaiveDate,
    ) -> Vec<DatedEntry<'a>> {
        dated_entries(entries)
            .filter(|dated| dated.date <= cutoff)
            .collect()
    }

    /// Sorted, filtered and numbered display list for `entries` as of `today`.
    ///
    /// Sorting is stable, so entries sharing a date keep their input order.
    pub fn build_display_list(&self, entries: &[ScheduleEntry], today: NaiveDate) -> Vec<DisplayItem> {
        let cutoff = self.cutoff_date(today);
        let mut past = self.filter_past_entries(entries, cutoff);
        past.sort_by_key(|dated| dated.date);

        debug!(
            received = entries.len(),
            shown = past.len(),
            cutoff = %cutoff,
            "built album history"
        );

        self.number(past)
    }

    /// One completed entry per day, ending at the cutoff date.
    ///
    /// Covers every unlocked day since the campaign start, padded backwards to
    /// at least `min_placeholder_days` days (and never fewer than one). Padded
    /// days before the start all number as day 1.
    pub fn synthesize_placeholder_entries(&self, today: NaiveDate) -> Vec<ScheduleEntry> {
        let start = self.config.start_date;
        let cutoff = self.cutoff_date(today);
        let unlocked = if cutoff < start {
            0
        } else {
            calendar::days_elapsed(cutoff, start).saturating_add(1)
        };
        let count = unlocked.max(self.config.min_placeholder_days).max(1);
        let first = cutoff
            .checked_sub_days(Days::new(u64::from(count - 1)))
            .unwrap_or(NaiveDate::MIN);

        calendar::consecutive_days(first, count)
            .map(ScheduleEntry::placeholder)
            .collect()
    }

    /// Placeholder list. Never empty, and never past the cutoff.
    pub fn placeholder_list(&self, today: NaiveDate) -> HistoryList {
        let entries = self.synthesize_placeholder_entries(today);
        let items = self.number(dated_entries(&entries).collect());

        HistoryList {
            source: HistorySource::Placeholder,
            items,
        }
    }

    fn number(&self, dated: Vec<DatedEntry<'_>>) -> Vec<DisplayItem> {
        dated
            .into_iter()
            .map(|DatedEntry { date, entry }| DisplayItem {
                scheduled_date: date,
                day_number: self.day_number(date),
                completed: entry.completed.unwrap_or(true),
                total_images: entry.total_images,
            })
            .collect()
    }
}

fn dated_entries(entries: &[ScheduleEntry]) -> impl Iterator<Item = DatedEntry<'_>> {
    entries.iter().filter_map(|entry| {
        let Some(raw) = entry.scheduled_date.as_deref() else {
            warn!(?entry, "skipping album without scheduled date");
            return None;
        };

        match parse_scheduled_date(raw) {
            Ok(date) => Some(DatedEntry { date, entry }),
            Err(e) => {
                warn!(error = %e, "skipping album with invalid scheduled date");
                None
            }
        }
    })
}
