//! Subcommand implementations.

use chrono::NaiveDate;
use dayalbum_history::{
    DisplayItem, EntrySource, GameLink, GamePage, HistoryList, HistoryListBuilder, Navigator,
    render,
};
use miette::Result;
use tracing::info;

/// Which day `play` should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    Number(u32),
    Date(NaiveDate),
}

impl DaySelector {
    fn find<'a>(&self, list: &'a HistoryList) -> Option<&'a DisplayItem> {
        match *self {
            DaySelector::Number(day) => list.find_by_day(day),
            DaySelector::Date(date) => list.find_by_date(date),
        }
    }
}

/// Navigates by printing the game page URL to stdout.
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&self, link: &GameLink) {
        println!("{}", link);
    }
}

/// Print the history page.
pub async fn history(
    builder: &HistoryListBuilder,
    source: &dyn EntrySource,
    page: &GamePage,
    json: bool,
) -> Result<()> {
    let list = builder.load(source).await;
    info!(days = list.items.len(), placeholder = list.is_placeholder(), "album history loaded");

    let view = render(&list, page);
    if json {
        let out = serde_json::to_string_pretty(&view)
            .map_err(|e| miette::miette!("failed to serialize history: {}", e))?;
        println!("{}", out);
    } else {
        print!("{}", view.to_text());
    }

    Ok(())
}

/// Activate one day of the history page.
pub async fn play(
    builder: &HistoryListBuilder,
    source: &dyn EntrySource,
    page: &GamePage,
    selector: DaySelector,
) -> Result<()> {
    let list = builder.load(source).await;

    let item = selector.find(&list).ok_or_else(|| match selector {
        DaySelector::Number(day) => miette::miette!("day {} is not unlocked yet", day),
        DaySelector::Date(date) => miette::miette!("no unlocked album for {}", date),
    })?;

    page.on_item_activated(item, &StdoutNavigator);
    Ok(())
}
