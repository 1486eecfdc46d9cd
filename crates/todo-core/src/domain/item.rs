//! Item Entity
//!
//! A single todo row: immutable text plus completion and visibility flags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};

/// Handle to an item inside its owning list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trimmed, non-empty item text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemText(String);

impl ItemText {
    /// Trim `raw` and reject it if nothing is left
    pub fn parse(raw: &str) -> ListResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyText);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item owned by a [`TodoList`](crate::TodoList)
///
/// `completed` and `visible` only change through the list's operations, so
/// `visible == !completed || show_finished` holds for the owning list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) text: ItemText,
    pub(crate) completed: bool,
    pub(crate) visible: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, text: ItemText, show_finished: bool) -> Self {
        let mut item = Self {
            id,
            text,
            completed: false,
            visible: true,
        };
        item.sync_visibility(show_finished);
        item
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The "finished" marker rendered on completed rows
    pub fn finished_marker(&self) -> bool {
        self.completed
    }

    pub(crate) fn sync_visibility(&mut self, show_finished: bool) {
        self.visible = !self.completed || show_finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_text() {
        let text = ItemText::parse("  buy milk \n").unwrap();
        assert_eq!(text.as_str(), "buy milk");
    }

    #[test]
    fn test_parse_rejects_blank_text() {
        assert!(matches!(ItemText::parse(""), Err(ListError::EmptyText)));
        assert!(matches!(ItemText::parse(" \t\n "), Err(ListError::EmptyText)));
    }

    #[test]
    fn test_new_item_is_pending_and_visible() {
        let text = ItemText::parse("Test item").unwrap();
        let item = Item::new(ItemId(1), text, false);
        assert_eq!(item.id().get(), 1);
        assert_eq!(item.text(), "Test item");
        assert!(!item.is_completed());
        assert!(item.is_visible());
        assert!(!item.finished_marker());
    }

    #[test]
    fn test_sync_visibility_hides_completed_only_when_hiding() {
        let mut item = Item::new(ItemId(1), ItemText::parse("x").unwrap(), true);
        item.completed = true;
        item.sync_visibility(false);
        assert!(!item.is_visible());
        item.sync_visibility(true);
        assert!(item.is_visible());
    }
}
