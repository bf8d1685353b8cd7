//! Links from the history page to the game page.

use std::fmt;

use chrono::NaiveDate;
use tracing::info;
use url::Url;

use crate::calendar::DATE_FORMAT;
use crate::{DisplayItem, HistoryError};

/// Game page, relative to the history page.
pub const GAME_PAGE: &str = "index.html";

/// Where a day button leads: the game page for one album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLink {
    pub date: NaiveDate,
    pub day_number: u32,
    url: Url,
}

impl GameLink {
    /// Absolute URL of the game page for this day.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Link relative to the history page, `index.html?album=<date>&dia=<n>`.
    pub fn relative(&self) -> String {
        format!(
            "{}?album={}&dia={}",
            GAME_PAGE,
            self.date.format(DATE_FORMAT),
            self.day_number
        )
    }
}

impl fmt::Display for GameLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Performs the actual navigation when a day is activated.
pub trait Navigator {
    fn navigate(&self, link: &GameLink);
}

/// The game page, resolved against the URL of the history page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePage {
    url: Url,
}

impl GamePage {
    /// Resolve the game page the way a browser resolves a relative link
    /// from `history_page_url`.
    pub fn parse(history_page_url: &str) -> Result<Self, HistoryError> {
        let url = Url::parse(history_page_url)?.join(GAME_PAGE)?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Link to the game page for `item`.
    pub fn link_for(&self, item: &DisplayItem) -> GameLink {
        let mut url = self.url.clone();
        url.set_fragment(None);
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("album", &item.scheduled_date.format(DATE_FORMAT).to_string())
            .append_pair("dia", &item.day_number.to_string());

        GameLink {
            date: item.scheduled_date,
            day_number: item.day_number,
            url,
        }
    }

    /// Send the user to the game page for `item`.
    pub fn on_item_activated(&self, item: &DisplayItem, navigator: &dyn Navigator) {
        let link = self.link_for(item);
        info!(date = %link.date, day = link.day_number, url = %link, "opening album");
        navigator.navigate(&link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn item(y: i32, m: u32, d: u32, day_number: u32) -> DisplayItem {
        DisplayItem {
            scheduled_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            day_number,
            completed: true,
            total_images: Some(6),
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, link: &GameLink) {
            self.visited.borrow_mut().push(link.to_string());
        }
    }

    #[test]
    fn test_relative_link() {
        let page = GamePage::parse("http://localhost:5000").unwrap();
        let link = page.link_for(&item(2026, 2, 3, 9));
        assert_eq!(link.relative(), "index.html?album=2026-02-03&dia=9");
    }

    #[test]
    fn test_link_resolves_like_a_browser() {
        let page = GamePage::parse("https://albums.example.com/juego/historial.html").unwrap();
        let link = page.link_for(&item(2026, 2, 3, 9));
        assert_eq!(
            link.url().as_str(),
            "https://albums.example.com/juego/index.html?album=2026-02-03&dia=9"
        );

        let root = GamePage::parse("http://localhost:5000").unwrap();
        assert_eq!(root.url().as_str(), "http://localhost:5000/index.html");
    }

    #[test]
    fn test_link_drops_history_query() {
        let page = GamePage::parse("https://albums.example.com/historial.html?x=1#top").unwrap();
        let link = page.link_for(&item(2026, 1, 26, 1));
        assert_eq!(
            link.to_string(),
            "https://albums.example.com/index.html?album=2026-01-26&dia=1"
        );
    }

    #[test]
    fn test_invalid_page_url() {
        assert!(matches!(
            GamePage::parse("not a url"),
            Err(HistoryError::Url(_))
        ));
    }

    #[test]
    fn test_on_item_activated_navigates() {
        let page = GamePage::parse("http://localhost:5000/historial.html").unwrap();
        let navigator = RecordingNavigator::default();

        page.on_item_activated(&item(2026, 1, 27, 2), &navigator);

        assert_eq!(
            navigator.visited.into_inner(),
            vec!["http://localhost:5000/index.html?album=2026-01-27&dia=2".to_string()]
        );
    }
}
