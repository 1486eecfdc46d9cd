//! List State Controller
//!
//! Every state transition of a [`TodoList`] and its items. Each mutating
//! operation finishes by recomputing the counters and then the empty state,
//! in that order.

use log::{debug, trace};

use crate::domain::{DisplayMode, Item, ItemId, ItemText, Stats, TodoList};

impl TodoList {
    /// Append a new unfinished item
    ///
    /// Blank or whitespace-only text is ignored and returns `None`.
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        let text = match ItemText::parse(text) {
            Ok(text) => text,
            Err(err) => {
                debug!("add_item ignored: {}", err);
                return None;
            }
        };
        let id = self.allocate_id();
        debug!("add_item {} {:?}", id, text.as_str());
        self.items.push(Item::new(id, text, self.show_finished()));
        self.empty_state.sequence_hidden = false;
        self.settle();
        Some(id)
    }

    /// Apply a checkbox change to `id`
    ///
    /// `show_finished` must be the mode currently on screen, not the one
    /// being switched to. Returns `false` if the item is not in this list.
    pub fn set_item_completion(&mut self, id: ItemId, checked: bool, show_finished: bool) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("set_item_completion ignored: {} not in list", id);
            return false;
        };
        item.completed = checked;
        item.sync_visibility(show_finished);
        debug!(
            "set_item_completion {} completed={} visible={}",
            id, item.completed, item.visible
        );
        self.settle();
        true
    }

    /// [`set_item_completion`](Self::set_item_completion) using the list's own mode
    pub fn set_item_checked(&mut self, id: ItemId, checked: bool) -> bool {
        let show_finished = self.show_finished();
        self.set_item_completion(id, checked, show_finished)
    }

    /// Detach `id` from the list; a second call is a no-op returning `false`
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("remove_item ignored: {} not in list", id);
            return false;
        };
        self.items.remove(index);
        debug!("remove_item {}", id);
        self.settle();
        true
    }

    /// Flip between showing and hiding finished items
    ///
    /// Only completed items change visibility. Returns the new
    /// `show_finished` value.
    pub fn toggle_show_finished(&mut self) -> bool {
        self.set_mode(self.mode.toggled());
        self.show_finished()
    }

    /// Switch to `mode`, re-syncing completed items
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        let show_finished = mode.show_finished();
        for item in self.items.iter_mut().filter(|item| item.completed) {
            item.sync_visibility(show_finished);
        }
        debug!("display mode now {:?}", mode);
        self.settle();
    }

    /// Drop every item
    pub fn clear_all(&mut self) {
        debug!("clear_all: removing {} items", self.items.len());
        self.items.clear();
        self.settle();
    }

    /// Rewrite the finished / unfinished counters from the items
    pub fn recompute_stats(&mut self) {
        let total = self.items.len();
        let finished = self.items.iter().filter(|item| item.completed).count();
        self.stats = Stats {
            finished,
            unfinished: total - finished,
        };
        trace!("stats finished={} unfinished={}", finished, total - finished);
    }

    /// Show the empty message and hide the sequence iff nothing is visible
    pub fn refresh_empty_state(&mut self) {
        let nothing_visible = !self.items.iter().any(|item| item.visible);
        self.empty_state.indicator_visible = nothing_visible;
        self.empty_state.sequence_hidden = nothing_visible;
        trace!("empty state indicator_visible={}", nothing_visible);
    }

    pub(crate) fn settle(&mut self) {
        self.recompute_stats();
        self.refresh_empty_state();
    }
}

/// Counter refresh that tolerates a list that is not attached yet
pub fn recompute_stats(list: Option<&mut TodoList>) {
    match list {
        Some(list) => list.recompute_stats(),
        None => trace!("recompute_stats skipped: no list"),
    }
}

/// Empty-state refresh that tolerates a list that is not attached yet
pub fn refresh_empty_state(list: Option<&mut TodoList>) {
    match list {
        Some(list) => list.refresh_empty_state(),
        None => trace!("refresh_empty_state skipped: no list"),
    }
}
