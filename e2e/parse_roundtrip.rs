// e2e/parse_roundtrip.rs — library-level parse round trips over realistic data.
//
// Uses the public API only: parse every input with every strategy and segment
// size, rebuild it, and compare checksums.

use bt3zip::{parse, parse_segmented, reconstruct, Strategy, Summary};
use xxhash_rust::xxh64::xxh64;

fn corpus() -> Vec<(&'static str, Vec<u8>)> {
    let mut v = Vec::new();

    // Source-code-like text.
    let src: String = (0..2_000)
        .map(|i| format!("    let value_{} = compute({}, &buffer[{}..]);\n", i % 37, i, i * 3 % 101))
        .collect();
    v.push(("source", src.into_bytes()));

    // Binary table with structure.
    let table: Vec<u8> = (0u32..60_000).flat_map(|i| (i / 7).to_le_bytes()).collect();
    v.push(("table", table));

    // Runs of every byte value.
    let runs: Vec<u8> = (0..=255u8).flat_map(|b| std::iter::repeat(b).take(b as usize + 1)).collect();
    v.push(("runs", runs));

    // Long-range repeat just inside the window.
    let mut far = Vec::new();
    let block: Vec<u8> = (0..1_000u32).map(|i| (i * 31 % 251) as u8).collect();
    far.extend_from_slice(&block);
    far.extend((0..31_000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8));
    far.extend_from_slice(&block);
    v.push(("far", far));

    v
}

#[test]
fn every_strategy_rebuilds_every_input() {
    for (name, data) in corpus() {
        let expected = xxh64(&data, 0);
        for strategy in [Strategy::Greedy, Strategy::Lazy, Strategy::Best] {
            for segment in [0usize, 4_096, 65_536] {
                let tokens = parse_segmented(&data, strategy, segment);
                let rebuilt = reconstruct(&tokens).expect("valid token stream");
                assert_eq!(xxh64(&rebuilt, 0), expected, "{} / {} / {}", name, strategy, segment);
            }
        }
    }
}

#[test]
fn structured_inputs_shrink() {
    // "far" is mostly incompressible filler.
    for (name, data) in corpus().into_iter().filter(|(n, _)| *n != "far") {
        let s = Summary::from_tokens(&parse(&data, Strategy::Lazy), data.len());
        assert!(s.savings() > 0, "{}: {:?}", name, s);
    }
}
