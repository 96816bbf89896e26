//! Scenario: more options than screen rows
//!
//! Journey: a long list is shown through a window that follows the cursor.

use treepick::{Options, PickOutcome, Picker, PickerConfig};

use crate::common::*;

fn titled() -> PickerConfig {
    PickerConfig {
        title: Some("Select:".to_string()),
        ..Default::default()
    }
}

#[test]
fn scenario_window_follows_cursor_down() {
    // 70 rows; 12 screen rows minus margin and two title lines leaves 9
    let mut picker: Picker = Picker::new(Options::tree(wide_tree(69)), titled()).unwrap();
    let mut keys: Vec<_> = std::iter::repeat_with(down).take(12).collect();
    keys.push(enter());
    let mut backend = ScriptedBackend::new(keys).with_size(80, 12);

    let outcome = picker.run(&mut backend).unwrap();

    let first = &backend.frames[0];
    assert_eq!(first.rows.len(), 9);
    assert_eq!(first.rows[0].index, 0);

    let last = backend.last_frame();
    assert_eq!(last.rows.first().map(|r| r.index), Some(4));
    assert_eq!(last.rows.last().map(|r| r.index), Some(12));
    assert_eq!(last.cursor_line(), Some(10));

    let PickOutcome::Picked(picked) = outcome else {
        panic!("expected a pick, got {:?}", outcome);
    };
    let picks = picked.into_vec();
    assert_eq!(picks[0].name(), "foo.bar12.baz");
    assert_eq!(picks[0].index(), Some(12));
}

#[test]
fn scenario_window_scrolls_back_up_minimally() {
    let config = PickerConfig {
        default_index: 40,
        ..titled()
    };
    let mut picker: Picker = Picker::new(Options::tree(wide_tree(69)), config).unwrap();
    let mut keys: Vec<_> = std::iter::repeat_with(up).take(9).collect();
    keys.push(enter());
    let mut backend = ScriptedBackend::new(keys).with_size(80, 12);

    picker.run(&mut backend).unwrap();

    // starts with the cursor on the bottom line
    assert_eq!(backend.frames[0].rows.first().map(|r| r.index), Some(32));
    // cursor 31 after nine moves: top follows it exactly
    let last = backend.last_frame();
    assert_eq!(last.rows.first().map(|r| r.index), Some(31));
    assert_eq!(last.cursor_line(), Some(2));
}

#[test]
fn scenario_window_never_passes_the_end() {
    let config = PickerConfig {
        default_index: 69,
        ..titled()
    };
    let mut picker: Picker = Picker::new(Options::tree(wide_tree(69)), config).unwrap();
    let mut backend = ScriptedBackend::new([down(), down(), enter()]).with_size(80, 12);

    picker.run(&mut backend).unwrap();

    for frame in &backend.frames {
        assert_eq!(frame.rows.first().map(|r| r.index), Some(61));
        assert_eq!(frame.rows.last().map(|r| r.index), Some(69));
    }
}

#[test]
fn scenario_short_tree_is_not_padded() {
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), titled()).unwrap();
    let mut backend = ScriptedBackend::new([enter()]).with_size(80, 40);

    picker.run(&mut backend).unwrap();

    assert_eq!(backend.frames[0].rows.len(), 3);
    assert_eq!(backend.frames[0].lines()[0], "Select:");
}
