//! Scenario: pick one entry
//!
//! Journey: the user moves the cursor and presses ENTER; the picker returns
//! the row under the cursor in the configured output format.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use treepick::{
    Node, Options, OutputFormat, Pick, PickError, PickOutcome, Picked, Picker, PickerConfig,
};

use crate::common::*;

fn name_index() -> PickerConfig {
    PickerConfig {
        output_format: OutputFormat::NameIndex,
        ..Default::default()
    }
}

#[test]
fn scenario_down_then_enter_picks_first_child() {
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), name_index()).unwrap();
    let mut backend = ScriptedBackend::new([down(), enter()]);

    let outcome = picker.run(&mut backend).unwrap();

    assert_eq!(
        outcome,
        PickOutcome::Picked(Picked::One(Pick::NameIndex("child1".to_string(), 1)))
    );
    assert_eq!(backend.frames.len(), 2);
    assert_eq!(backend.remaining(), 0);
}

#[test]
fn scenario_enter_immediately_picks_default_index() {
    let config = PickerConfig {
        default_index: 2,
        output_format: OutputFormat::NodeOnly,
        ..Default::default()
    };
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), config).unwrap();
    let mut backend = ScriptedBackend::new([enter()]);

    let outcome = picker.run(&mut backend).unwrap();

    assert_eq!(
        outcome,
        PickOutcome::Picked(Picked::One(Pick::Node(Node::new("child2"))))
    );
    assert_eq!(backend.last_frame().cursor_line(), Some(2));
}

#[test]
fn scenario_include_children_returns_subtree() {
    let config = PickerConfig {
        singleselect_output_include_children: true,
        output_format: OutputFormat::NameOnly,
        ..Default::default()
    };
    let mut picker: Picker = Picker::new(Options::tree(languages_tree()), config).unwrap();
    // cursor to "Imperative"
    let mut backend = ScriptedBackend::new([down(), down(), down(), down(), enter()]);

    let names: Vec<String> = picker
        .run(&mut backend)
        .unwrap()
        .picked()
        .unwrap()
        .into_vec()
        .iter()
        .map(|p| p.name().to_string())
        .collect();

    assert_eq!(names, vec!["Imperative", "C", "Go"]);
}

#[test]
fn scenario_include_children_leaves_only() {
    let config = PickerConfig {
        singleselect_output_include_children: true,
        output_leaves_only: true,
        output_format: OutputFormat::NameIndex,
        ..Default::default()
    };
    let mut picker: Picker = Picker::new(Options::tree(languages_tree()), config).unwrap();
    let mut backend = ScriptedBackend::new([down(), enter()]);

    let outcome = picker.run(&mut backend).unwrap();

    assert_eq!(
        outcome,
        PickOutcome::Picked(Picked::Many(vec![
            Pick::NameIndex("Erlang".to_string(), 2),
            Pick::NameIndex("Haskell".to_string(), 3),
        ]))
    );
}

#[test]
fn scenario_space_is_ignored_in_single_select() {
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), name_index()).unwrap();
    let mut backend = ScriptedBackend::new([space(), down(), space(), enter()]);

    picker.run(&mut backend).unwrap();

    assert!(backend.frames.iter().all(|f| f.rows.iter().all(|r| !r.marked)));
    assert_eq!(picker.session().selection().marked_count(), 0);
}

#[test]
fn scenario_cursor_stops_at_edges() {
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), name_index()).unwrap();
    let mut backend = ScriptedBackend::new([up(), down(), down(), down(), down(), enter()]);

    let outcome = picker.run(&mut backend).unwrap();

    assert_eq!(
        outcome,
        PickOutcome::Picked(Picked::One(Pick::NameIndex("child2".to_string(), 2)))
    );
}

#[test]
fn scenario_vim_keys_move_cursor() {
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), name_index()).unwrap();
    let mut backend = ScriptedBackend::new([
        key(KeyCode::Char('j')),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('k')),
        enter(),
    ]);

    let outcome = picker.run(&mut backend).unwrap();

    assert_eq!(
        outcome,
        PickOutcome::Picked(Picked::One(Pick::NameIndex("child1".to_string(), 1)))
    );
}

#[test]
fn scenario_quit_keys_cancel() {
    for quit in [
        key(KeyCode::Esc),
        key(KeyCode::Char('q')),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut picker: Picker = Picker::new(Options::tree(parent_tree()), name_index()).unwrap();
        let mut backend = ScriptedBackend::new([down(), quit, enter()]);

        let outcome = picker.run(&mut backend).unwrap();

        assert!(outcome.is_cancelled(), "{:?} should cancel", quit.code);
        assert_eq!(backend.remaining(), 1);
    }
}

#[test]
fn scenario_default_index_out_of_range_fails_before_drawing() {
    let config = PickerConfig {
        default_index: 5,
        ..Default::default()
    };

    let err = Picker::<()>::new(Options::tree(parent_tree()), config)
        .err()
        .expect("default_index 5 must be rejected for 3 rows");

    assert!(matches!(err, PickError::Configuration(_)), "{err}");
    assert!(err.to_string().contains("default_index"));
}

#[test]
fn scenario_leaves_only_without_children_is_rejected() {
    let config = PickerConfig {
        output_leaves_only: true,
        ..Default::default()
    };

    let result = Picker::<()>::new(Options::tree(parent_tree()), config);

    assert!(matches!(result, Err(PickError::Configuration(_))));
}

#[test]
fn scenario_terminal_too_small_fails_before_reading_keys() {
    let config = PickerConfig {
        title: Some("Pick one".to_string()),
        ..Default::default()
    };
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), config).unwrap();
    let mut backend = ScriptedBackend::new([enter()]).with_size(80, 3);

    let err = picker.run(&mut backend).unwrap_err();

    assert!(matches!(err, PickError::Configuration(_)), "{err}");
    assert!(backend.frames.is_empty());
    assert_eq!(backend.remaining(), 1);
}

#[test]
fn scenario_exhausted_input_is_io_error() {
    let mut picker: Picker = Picker::new(Options::tree(parent_tree()), name_index()).unwrap();
    let mut backend = ScriptedBackend::new([down()]);

    let err = picker.run(&mut backend).unwrap_err();

    assert!(matches!(err, PickError::Io(_)));
}

#[test]
fn scenario_list_options_with_root_name() {
    let config = PickerConfig {
        root_name: Some("EVERYTHING".to_string()),
        output_format: OutputFormat::NameIndex,
        ..Default::default()
    };
    let mut picker: Picker =
        Picker::new(Options::strings(vec!["option1", "option2"]), config).unwrap();
    let mut backend = ScriptedBackend::new([enter()]);

    let outcome = picker.run(&mut backend).unwrap();

    assert_eq!(
        outcome,
        PickOutcome::Picked(Picked::One(Pick::NameIndex("EVERYTHING".to_string(), 0)))
    );
    assert_eq!(backend.frames[0].lines()[0], "(*)  EVERYTHING");
}

#[test]
fn scenario_empty_list_is_invalid_tree() {
    let result = Picker::<()>::new(Options::<String>::strings(Vec::new()), PickerConfig::default());
    assert!(matches!(result, Err(PickError::InvalidTree(_))));

    let result = Picker::<()>::new(Options::unmapped(vec!["a", "b"]), PickerConfig::default());
    assert!(matches!(result, Err(PickError::InvalidTree(_))));
}
