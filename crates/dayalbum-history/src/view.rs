//! View model for the history page.
//!
//! Rendering is a pure function of the history list, so the page can be
//! drawn by any front end (the CLI prints it as text or JSON).

use chrono::NaiveDate;
use serde::Serialize;

use crate::{GamePage, HistoryList, HistorySource};

/// Shown when no album has been unlocked yet.
pub const EMPTY_NOTICE: &str = "No past albums yet. Come back tomorrow!";

/// One button on the history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayButton {
    /// Text on the button: the day number.
    pub label: String,
    pub day_number: u32,
    pub date: NaiveDate,
    pub completed: bool,
    /// Target of the button.
    pub href: String,
}

/// Everything the history page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HistoryView {
    /// No day to show.
    Empty { notice: String },
    /// One button per past day, oldest first.
    Days {
        source: HistorySource,
        buttons: Vec<DayButton>,
    },
}

/// Build the page's view model.
pub fn render(list: &HistoryList, page: &GamePage) -> HistoryView {
    if list.items.is_empty() {
        return HistoryView::Empty {
            notice: EMPTY_NOTICE.to_string(),
        };
    }

    let buttons = list
        .items
        .iter()
        .map(|item| DayButton {
            label: item.day_number.to_string(),
            day_number: item.day_number,
            date: item.scheduled_date,
            completed: item.completed,
            href: page.link_for(item).relative(),
        })
        .collect();

    HistoryView::Days {
        source: list.source,
        buttons,
    }
}

impl HistoryView {
    /// Number of buttons on the page.
    pub fn len(&self) -> usize {
        match self {
            HistoryView::Empty { .. } => 0,
            HistoryView::Days { buttons, .. } => buttons.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plain-text rendering, one line per button.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            HistoryView::Empty { notice } => {
                out.push_str(notice);
                out.push('\n');
            }
            HistoryView::Days { source, buttons } => {
                if *source == HistorySource::Placeholder {
                    out.push_str("(backend unavailable, showing placeholder days)\n");
                }
                for button in buttons {
                    let marker = if button.completed { "*" } else { " " };
                    out.push_str(&format!(
                        "[{:>4}] {} {}  {}\n",
                        button.label, button.date, marker, button.href
                    ));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayItem;
    use pretty_assertions::assert_eq;

    fn page() -> GamePage {
        GamePage::parse("http://localhost:5000/historial.html").unwrap()
    }

    fn item(d: u32, day_number: u32, completed: bool) -> DisplayItem {
        DisplayItem {
            scheduled_date: NaiveDate::from_ymd_opt(2026, 1, d).unwrap(),
            day_number,
            completed,
            total_images: None,
        }
    }

    #[test]
    fn test_render_empty() {
        let list = HistoryList {
            source: HistorySource::Remote,
            items: vec![],
        };
        let view = render(&list, &page());

        assert!(view.is_empty());
        assert_eq!(view.to_text(), format!("{EMPTY_NOTICE}\n"));
    }

    #[test]
    fn test_render_buttons() {
        let list = HistoryList {
            source: HistorySource::Remote,
            items: vec![item(26, 1, true), item(27, 2, false)],
        };
        let view = render(&list, &page());

        let HistoryView::Days { source, buttons } = &view else {
            panic!("expected days view");
        };
        assert_eq!(*source, HistorySource::Remote);
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "1");
        assert_eq!(buttons[1].href, "index.html?album=2026-01-27&dia=2");
        assert!(!buttons[1].completed);
    }

    #[test]
    fn test_text_output() {
        let list = HistoryList {
            source: HistorySource::Placeholder,
            items: vec![item(26, 1, true), item(27, 2, false)],
        };
        let text = render(&list, &page()).to_text();

        assert_eq!(
            text,
            "(backend unavailable, showing placeholder days)\n\
             [   1] 2026-01-26 *  index.html?album=2026-01-26&dia=1\n\
             [   2] 2026-01-27    index.html?album=2026-01-27&dia=2\n"
        );
    }

    #[test]
    fn test_json_output() {
        let list = HistoryList {
            source: HistorySource::Remote,
            items: vec![item(26, 1, true)],
        };
        let json = serde_json::to_value(render(&list, &page())).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "state": "days",
                "source": "remote",
                "buttons": [{
                    "label": "1",
                    "day_number": 1,
                    "date": "2026-01-26",
                    "completed": true,
                    "href": "index.html?album=2026-01-26&dia=1"
                }]
            })
        );
    }
}
