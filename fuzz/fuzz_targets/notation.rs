#![no_main]

use checkers::{notation, BoardSize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, text)) = data.split_first() else {
        return;
    };
    let size = BoardSize::ALL[usize::from(first) % BoardSize::ALL.len()];
    let Ok(m) = notation::parse_move_ascii(text, size) else {
        return;
    };
    assert!(size.contains(m.from) && size.contains(m.to));
    let roundtripped = notation::parse_move(&m.to_string(), size).expect("roundtrip");
    assert_eq!(m, roundtripped);
});
