#![no_main]

use libfuzzer_sys::fuzz_target;
use transit_net_editor::EdgeKey;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(key) = input.parse::<EdgeKey>() {
        assert!(key.low() < key.high());
        assert_eq!(key.to_string().parse::<EdgeKey>().ok(), Some(key));
    }
});
