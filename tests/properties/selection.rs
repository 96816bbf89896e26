//! Property tests for marking and answer resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use treepick::picker::{ActionOutcome, FlatTree, OutputPolicy, PickAction, SelectMode, Selection};
use treepick::{PickerConfig, Session};

use crate::strategies::tree;

fn apply_toggles(flat: &FlatTree, picks: &[usize]) -> Selection {
    let mut selection = Selection::new(SelectMode::Multi);
    for &p in picks {
        selection.toggle(p % flat.len(), flat);
    }
    selection
}

fn marked(selection: &Selection) -> BTreeSet<usize> {
    selection.marked().collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Toggling a row sets it and its whole subtree to one state
    /// and leaves every other row alone.
    #[test]
    fn property_toggle_affects_exactly_the_subtree(
        root in tree(),
        history in proptest::collection::vec(0usize..512, 0..12),
        target in 0usize..512,
    ) {
        let flat = FlatTree::new(root);
        let mut selection = apply_toggles(&flat, &history);
        let target = target % flat.len();
        let range = flat.rows()[target].subtree();
        let before = marked(&selection);

        let now_marked = selection.toggle(target, &flat);
        let after = marked(&selection);

        prop_assert_eq!(now_marked, !before.contains(&target));
        for i in 0..flat.len() {
            if range.contains(&i) {
                prop_assert_eq!(after.contains(&i), now_marked);
            } else {
                prop_assert_eq!(after.contains(&i), before.contains(&i));
            }
        }
    }

    /// PROPERTY: Toggling twice restores a subtree that was uniformly
    /// marked or unmarked.
    #[test]
    fn property_double_toggle_restores_uniform_subtree(
        root in tree(),
        history in proptest::collection::vec(0usize..512, 0..12),
        target in 0usize..512,
    ) {
        let flat = FlatTree::new(root);
        let mut selection = apply_toggles(&flat, &history);
        let target = target % flat.len();
        let before = marked(&selection);

        let range = flat.rows()[target].subtree();
        let uniform = range.clone().all(|i| before.contains(&i))
            || range.clone().all(|i| !before.contains(&i));
        prop_assume!(uniform);

        selection.toggle(target, &flat);
        selection.toggle(target, &flat);

        prop_assert_eq!(marked(&selection), before);
    }

    /// PROPERTY: Resolved answers are strictly ascending and respect
    /// the leaves-only filter.
    #[test]
    fn property_resolve_is_ascending(
        root in tree(),
        history in proptest::collection::vec(0usize..512, 0..12),
        leaves_only in any::<bool>(),
    ) {
        let flat = FlatTree::new(root);
        let selection = apply_toggles(&flat, &history);
        let policy = OutputPolicy { include_children: false, leaves_only };

        let resolved = selection.resolve(&flat, 0, policy);

        prop_assert!(resolved.windows(2).all(|w| w[0] < w[1]));
        for &i in &resolved {
            prop_assert!(selection.is_marked(i));
            if leaves_only {
                prop_assert!(flat.rows()[i].is_leaf);
            }
        }
    }

    /// PROPERTY: ENTER ends a multiselect session exactly when enough rows
    /// are marked.
    #[test]
    fn property_confirm_respects_minimum(
        root in tree(),
        history in proptest::collection::vec(0usize..512, 0..12),
        min in 0usize..8,
    ) {
        let row_count = root.subtree_len();
        prop_assume!(min <= row_count);
        let config = PickerConfig {
            multiselect: true,
            min_selection_count: min,
            ..Default::default()
        };
        let mut session = Session::new(root, config).unwrap();
        for &p in &history {
            session.toggle(p % row_count);
        }

        let outcome = session.handle_action(PickAction::Confirm);

        let expected = if session.selection().marked_count() >= min {
            ActionOutcome::Confirmed
        } else {
            ActionOutcome::Continue
        };
        prop_assert_eq!(outcome, expected);
    }
}
