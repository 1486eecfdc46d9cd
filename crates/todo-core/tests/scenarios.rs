//! End-to-end list scenarios
//!
//! Each test drives the list through the operations the page wires to user
//! events and checks what the page would show.

use todo_core::{DisplayMode, Labels, TodoList};

fn hiding_list() -> TodoList {
    TodoList::with_mode(DisplayMode::HideFinished)
}

#[test]
fn add_single_item() {
    let mut list = hiding_list();
    list.add_item("buy milk").unwrap();

    let view = list.render(&Labels::default());
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].text, "buy milk");
    assert_eq!(view.unfinished_count, 1);
    assert_eq!(view.finished_count, 0);
    assert!(!view.empty_indicator_visible);
}

#[test]
fn completing_while_hiding_empties_the_view() {
    let mut list = hiding_list();
    let id = list.add_item("buy milk").unwrap();
    list.set_item_completion(id, true, false);

    let view = list.render(&Labels::default());
    assert!(view.rows[0].hidden);
    assert_eq!(view.finished_count, 1);
    assert_eq!(view.unfinished_count, 0);
    assert!(view.empty_indicator_visible);
    assert!(view.sequence_hidden);
}

#[test]
fn toggling_reveals_finished_items() {
    let mut list = hiding_list();
    let id = list.add_item("buy milk").unwrap();
    list.set_item_completion(id, true, false);

    assert!(list.toggle_show_finished());

    let labels = Labels::default();
    let view = list.render(&labels);
    assert!(!view.rows[0].hidden);
    assert!(!view.empty_indicator_visible);
    assert_eq!(view.toggle_label, labels.hide_finished);
}

#[test]
fn deleting_one_of_two() {
    let mut list = TodoList::new();
    let first = list.add_item("first").unwrap();
    let second = list.add_item("second").unwrap();
    list.set_item_checked(first, true);

    list.remove_item(first);

    assert_eq!(list.len(), 1);
    assert!(list.contains(second));
    let stats = list.stats();
    assert_eq!(stats.finished, 0);
    assert_eq!(stats.unfinished, 1);
}

#[test]
fn clearing_three_items() {
    let mut list = TodoList::new();
    for text in ["a", "b", "c"] {
        list.add_item(text);
    }
    list.clear_all();

    let view = list.render(&Labels::default());
    assert!(view.rows.is_empty());
    assert_eq!(view.finished_count, 0);
    assert_eq!(view.unfinished_count, 0);
    assert!(view.empty_indicator_visible);
}

#[test]
fn whitespace_submission_is_dropped() {
    let mut list = TodoList::new();
    list.add_item("keep");
    let before = list.clone();

    assert!(list.add_item(" \t ").is_none());

    assert_eq!(list, before);
    assert_eq!(list.render(&Labels::default()).rows.len(), 1);
}
