//! Wire and display types for the album history.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calendar::DATE_FORMAT;

/// Images in a full album; placeholder days claim a complete set.
pub const ALBUM_IMAGE_COUNT: u32 = 6;

/// One scheduled album as listed by the backend.
///
/// The date stays raw text here; it is parsed per entry when the display
/// list is built so that one bad row cannot reject the whole response.
/// A missing or `null` date decodes to `None`, any other non-string value
/// to its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Scheduled date, `YYYY-MM-DD`.
    #[serde(
        rename = "fecha_programada",
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_date: Option<String>,
    /// Number of images scheduled for the day.
    #[serde(rename = "total_imagenes", default, skip_serializing_if = "Option::is_none")]
    pub total_images: Option<u32>,
    /// Whether the album is complete.
    #[serde(rename = "completado", default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Optional title of the album's first image.
    #[serde(rename = "primer_titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ScheduleEntry {
    /// Create an entry with only a scheduled date.
    pub fn new(scheduled_date: impl Into<String>) -> Self {
        Self {
            scheduled_date: Some(scheduled_date.into()),
            total_images: None,
            completed: None,
            title: None,
        }
    }

    /// Create a synthesized, completed entry for `date`.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            scheduled_date: Some(date.format(DATE_FORMAT).to_string()),
            total_images: Some(ALBUM_IMAGE_COUNT),
            completed: Some(true),
            title: None,
        }
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(raw) => Some(raw),
        other => Some(other.to_string()),
    })
}

/// Body of `GET /api/historial-completo`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(rename = "albumes", default)]
    pub entries: Option<Vec<ScheduleEntry>>,
    #[serde(default)]
    pub total: Option<u64>,
    /// Informational note from the backend.
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    /// Error the backend recovered from (or failed with, when `success` is false).
    #[serde(default)]
    pub error: Option<String>,
}

/// One day button in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub scheduled_date: NaiveDate,
    /// 1-based day number relative to the campaign start.
    pub day_number: u32,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_images: Option<u32>,
}

/// Where a history list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistorySource {
    /// Built from the backend's listing.
    Remote,
    /// Synthesized because the backend failed or returned nothing.
    Placeholder,
}

/// Result of loading the history: the items plus their provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryList {
    pub source: HistorySource,
    pub items: Vec<DisplayItem>,
}

impl HistoryList {
    /// Item for a given day number, if it is in the list.
    pub fn find_by_day(&self, day_number: u32) -> Option<&DisplayItem> {
        self.items.iter().find(|item| item.day_number == day_number)
    }

    /// Item for a given scheduled date, if it is in the list.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&DisplayItem> {
        self.items.iter().find(|item| item.scheduled_date == date)
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == HistorySource::Placeholder
    }
}
