#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::{Node, PickerConfig, Session};

fuzz_target!(|data: &[u8]| {
    let Ok(root) = serde_json::from_slice::<Node>(data) else {
        return;
    };
    let config = PickerConfig {
        multiselect: true,
        ..Default::default()
    };
    let Ok(mut session) = Session::new(root, config) else {
        return;
    };

    // Toggle every row and render; neither may panic
    for i in 0..session.row_count() {
        session.toggle(i);
        session.set_cursor(i);
    }
    let _ = session.option_lines(true);
    let _ = session.option_lines(false);
    let _ = session.selected();
});
