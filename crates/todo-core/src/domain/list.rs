//! List Entity
//!
//! Ordered items plus the list-level display mode and the derived
//! counters / empty-state flags the view reads.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};

/// Whether completed items are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Completed items stay on screen
    #[default]
    ShowFinished,
    /// Completed items are hidden as soon as they are checked
    HideFinished,
}

impl DisplayMode {
    pub fn from_show_finished(show_finished: bool) -> Self {
        if show_finished {
            DisplayMode::ShowFinished
        } else {
            DisplayMode::HideFinished
        }
    }

    pub fn show_finished(self) -> bool {
        matches!(self, DisplayMode::ShowFinished)
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::ShowFinished => DisplayMode::HideFinished,
            DisplayMode::HideFinished => DisplayMode::ShowFinished,
        }
    }
}

/// Finished / unfinished counters as last written by `recompute_stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub finished: usize,
    pub unfinished: usize,
}

impl Stats {
    pub fn total(&self) -> usize {
        self.finished + self.unfinished
    }
}

/// Empty-state flags as last written by `refresh_empty_state`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// The "nothing to show" message is displayed
    pub indicator_visible: bool,
    /// The item sequence itself is hidden
    pub sequence_hidden: bool,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            indicator_visible: true,
            sequence_hidden: true,
        }
    }
}

/// The todo list: single owner of its items
///
/// Mutation goes through the operations in [`controller`](crate::controller);
/// each one leaves `stats` and `empty_state` consistent with `items`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TodoList {
    pub(crate) items: Vec<Item>,
    pub(crate) mode: DisplayMode,
    pub(crate) next_id: u32,
    pub(crate) stats: Stats,
    pub(crate) empty_state: EmptyState,
}

impl TodoList {
    /// Empty list in the default mode, already settled
    pub fn new() -> Self {
        Self::with_mode(DisplayMode::default())
    }

    pub fn with_mode(mode: DisplayMode) -> Self {
        let mut list = Self {
            mode,
            ..Self::default()
        };
        list.settle();
        list
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn show_finished(&self) -> bool {
        self.mode.show_finished()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn empty_state(&self) -> EmptyState {
        self.empty_state
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }

    pub(crate) fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    pub(crate) fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::ShowFinished.toggled(), DisplayMode::HideFinished);
        assert_eq!(DisplayMode::HideFinished.toggled(), DisplayMode::ShowFinished);
        assert!(DisplayMode::from_show_finished(true).show_finished());
        assert!(!DisplayMode::from_show_finished(false).show_finished());
    }

    #[test]
    fn test_display_mode_serialization() {
        let mode: DisplayMode = serde_json::from_str("\"hide_finished\"").unwrap();
        assert_eq!(mode, DisplayMode::HideFinished);
        assert_eq!(serde_json::to_string(&DisplayMode::ShowFinished).unwrap(), "\"show_finished\"");
    }

    #[test]
    fn test_new_list_is_settled_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert_eq!(list.stats(), Stats::default());
        assert!(list.empty_state().indicator_visible);
        assert!(list.empty_state().sequence_hidden);
        assert!(list.show_finished());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = TodoList::new();
        let a = list.allocate_id();
        let b = list.allocate_id();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
