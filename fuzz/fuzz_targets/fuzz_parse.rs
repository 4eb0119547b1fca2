#![no_main]

use libfuzzer_sys::fuzz_target;

// Parsing must never panic, whatever the input. Valid parses must uphold the
// sorted-unique-in-range invariant on every field.
fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(schedule) = cronspell_schedule::Schedule::parse(line) {
        for (_, values) in schedule.fields() {
            for pair in values.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }
});
