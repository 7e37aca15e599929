#![no_main]
use libfuzzer_sys::fuzz_target;
use oxirune::text;

fuzz_target!(|data: &[u8]| {
    // Scan arbitrary bytes to completion. The decoder must never panic and
    // must advance at least one byte per call.
    let mut rest = data;
    let mut steps = 0usize;
    while !rest.is_empty() {
        let before = rest.len();
        let _ = text::advance_flags(&mut rest);
        assert!(rest.len() < before);
        steps += 1;
    }
    assert!(steps <= data.len());

    // On valid UTF-8 the scan must agree with the standard library.
    if let Ok(s) = std::str::from_utf8(data) {
        let mut rest = data;
        for expected in s.chars() {
            let (cp, flags) = text::advance_flags(&mut rest);
            assert_eq!(cp, u32::from(expected));
            assert!(flags.is_empty());
        }
    }
});
