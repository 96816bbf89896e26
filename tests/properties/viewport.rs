//! Property tests for the scrolling window.

use proptest::prelude::*;

use treepick::picker::{recompute, PickAction};
use treepick::{PickerConfig, Session};

use crate::strategies::tree;

fn move_action() -> impl Strategy<Value = PickAction> {
    prop_oneof![Just(PickAction::Up), Just(PickAction::Down)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The recomputed top keeps the cursor visible and stays in
    /// range.
    #[test]
    fn property_recompute_keeps_cursor_visible(
        row_count in 1usize..300,
        height in 1usize..60,
        cursor in 0usize..300,
        top in 0usize..300,
    ) {
        let cursor = cursor % row_count;
        let top = top % row_count;

        let new_top = recompute(cursor, top, height, row_count);

        prop_assert!(new_top <= cursor);
        prop_assert!(cursor < new_top + height);
        prop_assert!(new_top <= row_count.saturating_sub(height));
    }

    /// PROPERTY: Recompute is a no-op when the cursor is already visible
    /// and the window is within bounds.
    #[test]
    fn property_recompute_is_minimal(
        row_count in 1usize..300,
        height in 1usize..60,
        top in 0usize..300,
        offset in 0usize..60,
    ) {
        let top = top % row_count.saturating_sub(height).max(1);
        prop_assume!(top + height <= row_count);
        let cursor = top + offset % height;

        prop_assert_eq!(recompute(cursor, top, height, row_count), top);
    }

    /// PROPERTY: Across any sequence of moves the session's window holds
    /// the cursor.
    #[test]
    fn property_session_window_follows_cursor(
        root in tree(),
        screen_rows in 2u16..30,
        moves in proptest::collection::vec(move_action(), 0..64),
    ) {
        let mut session = Session::new(root, PickerConfig::default()).unwrap();
        session.fit_viewport(screen_rows).unwrap();

        for action in moves {
            session.handle_action(action);
            let viewport = session.viewport();
            let range = viewport.range(session.row_count());

            prop_assert!(range.contains(&session.cursor()));
            prop_assert!(viewport.top <= session.row_count().saturating_sub(viewport.height));
            prop_assert!(range.len() <= viewport.height);
        }
    }
}
