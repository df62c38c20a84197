#![no_main]

use libfuzzer_sys::fuzz_target;
use transit_net_editor::WaypointToken;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Geparste Tokens müssen sich verlustfrei wieder darstellen lassen
    if let Ok(tokens) = WaypointToken::parse_list(input) {
        for token in tokens {
            let reparsed: WaypointToken = token
                .to_string()
                .parse()
                .expect("dargestelltes Token muss parsebar sein");
            assert_eq!(reparsed, token);
        }
    }
});
