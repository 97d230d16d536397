#![no_main]
use libfuzzer_sys::fuzz_target;

use bt3zip::{parse, parse_segmented, reconstruct, Strategy};

fuzz_target!(|data: &[u8]| {
    // First byte picks the strategy, the rest is the input.
    let Some((&selector, input)) = data.split_first() else {
        return;
    };
    let strategy = Strategy::for_level(1 + (selector % 9) as u32);

    let tokens = parse(input, strategy);
    let rebuilt = reconstruct(&tokens).expect("parse produced an unresolvable copy");
    assert_eq!(rebuilt, input, "{} round-trip mismatch", strategy);

    let tokens = parse_segmented(input, strategy, 4096);
    assert_eq!(reconstruct(&tokens).as_deref(), Some(input), "segmented {} mismatch", strategy);
});
