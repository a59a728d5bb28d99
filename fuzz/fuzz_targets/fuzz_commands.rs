#![no_main]

//! Command parser fuzzer.
//!
//! Feeds arbitrary text to a session line by line. Parsing and execution
//! must never panic, and every line either succeeds or leaves the game
//! untouched.

use fun_finance::game::check_invariants;
use fun_finance::{GameConfig, Session};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let config = GameConfig {
        seed: Some(0),
        ..GameConfig::default()
    };
    let mut session = Session::new(&config);

    for line in text.lines().take(1000) {
        let before = session.state().clone();
        if session.execute_line(line).is_err() {
            let after = session.state();
            assert_eq!(before.players, after.players);
            assert_eq!(before.board, after.board);
            assert_eq!(before.log(), after.log());
        }
        assert!(check_invariants(session.state()).is_empty());
    }
});
