#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::PickerConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and validation should never panic
        if let Ok(config) = PickerConfig::from_toml_str(content) {
            let _ = config.validate(16);
            let _ = config.title_lines();
        }
    }
});
