//! Past-days history list for the daily album game.
//!
//! This crate turns the backend's schedule listing into the list of day
//! buttons shown on the history page:
//! - Fetches scheduled albums from `/api/historial-completo`
//! - Keeps only albums whose day has already been unlocked
//! - Numbers each album relative to the campaign start date
//! - Falls back to synthesized placeholder days when the backend is unusable
//!
//! Rendering and navigation are plain data transformations so the whole
//! pipeline runs without a browser.

mod builder;
pub mod calendar;
mod client;
mod config;
mod error;
mod navigation;
mod types;
pub mod view;

pub use builder::{DatedEntry, HistoryListBuilder};
pub use calendar::{CutoffPolicy, compute_day_number, parse_scheduled_date};
pub use client::{EntrySource, HISTORY_PATH, HistoryClient};
pub use config::{DEFAULT_PLACEHOLDER_DAYS, HistoryConfig};
pub use error::HistoryError;
pub use navigation::{GAME_PAGE, GameLink, GamePage, Navigator};
pub use types::*;
pub use view::{DayButton, HistoryView, render};
