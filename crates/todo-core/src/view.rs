//! View Projection
//!
//! Pure render of a [`TodoList`] into what the page shows: rows, counters,
//! the empty-state flags and the toggle button label.

use serde::{Deserialize, Serialize};

use crate::domain::{DisplayMode, ItemId, TodoList};

/// User-facing strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Toggle label while finished items are hidden
    pub show_finished: String,
    /// Toggle label while finished items are shown
    pub hide_finished: String,
    pub empty: String,
    pub clear_all: String,
    pub clear_confirm: String,
    pub delete: String,
    pub add_placeholder: String,
    pub add_button: String,
    pub finished: String,
    pub unfinished: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show_finished: "Show finished".to_string(),
            hide_finished: "Hide finished".to_string(),
            empty: "Nothing to do".to_string(),
            clear_all: "Clear list".to_string(),
            clear_confirm: "Are you sure you want to clear the list?".to_string(),
            delete: "🗑️".to_string(),
            add_placeholder: "Add an item...".to_string(),
            add_button: "Add".to_string(),
            finished: "Finished".to_string(),
            unfinished: "Unfinished".to_string(),
        }
    }
}

impl Labels {
    pub fn icelandic() -> Self {
        Self {
            show_finished: "Sýna kláruð atriði".to_string(),
            hide_finished: "Fela kláruð atriði".to_string(),
            empty: "Engin atriði á lista".to_string(),
            clear_all: "Hreinsa lista".to_string(),
            clear_confirm: "Ertu viss um að þú viljir hreinsa lista?".to_string(),
            delete: "🗑️".to_string(),
            add_placeholder: "Nýtt atriði...".to_string(),
            add_button: "Bæta við".to_string(),
            finished: "Kláruð".to_string(),
            unfinished: "Ókláruð".to_string(),
        }
    }

    /// The toggle button offers the opposite of the current mode
    pub fn toggle_label(&self, mode: DisplayMode) -> &str {
        match mode {
            DisplayMode::ShowFinished => &self.hide_finished,
            DisplayMode::HideFinished => &self.show_finished,
        }
    }
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: ItemId,
    pub text: String,
    pub checked: bool,
    pub hidden: bool,
    pub finished: bool,
}

impl RowView {
    /// CSS classes for the row element
    pub fn class(&self) -> &'static str {
        match (self.finished, self.hidden) {
            (true, true) => "finished hidden",
            (true, false) => "finished",
            (false, true) => "hidden",
            (false, false) => "",
        }
    }
}

/// Everything the page needs to draw the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub finished_count: usize,
    pub unfinished_count: usize,
    pub empty_indicator_visible: bool,
    pub sequence_hidden: bool,
    pub toggle_label: String,
}

impl TodoList {
    pub fn render(&self, labels: &Labels) -> ListView {
        let rows = self
            .items()
            .iter()
            .map(|item| RowView {
                id: item.id(),
                text: item.text().to_string(),
                checked: item.is_completed(),
                hidden: !item.is_visible(),
                finished: item.finished_marker(),
            })
            .collect();
        let stats = self.stats();
        let empty_state = self.empty_state();
        ListView {
            rows,
            finished_count: stats.finished,
            unfinished_count: stats.unfinished,
            empty_indicator_visible: empty_state.indicator_visible,
            sequence_hidden: empty_state.sequence_hidden,
            toggle_label: labels.toggle_label(self.mode()).to_string(),
        }
    }
}
