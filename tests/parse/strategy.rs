// Strategies end to end: every parse must rebuild its input.

use crate::common::{noise, sample};
use bt3zip::config::BEST_BLOCK_SIZE;
use bt3zip::parse::strategy::{greedy, lazy};
use bt3zip::parse::{parse, parse_segmented, reconstruct, token_bits, Strategy, Summary, Token};
use bt3zip::MatchFinder;

const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::Lazy, Strategy::Best];

fn inputs() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        b"a".to_vec(),
        b"ab".to_vec(),
        b"abc".to_vec(),
        b"aaaa".to_vec(),
        sample(10_000, 1),
        sample(3 * BEST_BLOCK_SIZE + 123, 2),
        noise(5_000, 3),
        vec![0u8; 100_000],
    ]
}

#[test]
fn every_strategy_round_trips() {
    for data in inputs() {
        for s in ALL {
            let tokens = parse(&data, s);
            assert_eq!(reconstruct(&tokens).as_deref(), Some(&data[..]), "{} on {} bytes", s, data.len());
            let covered: usize = tokens.iter().map(Token::span).sum();
            assert_eq!(covered, data.len());
        }
    }
}

#[test]
fn segmented_parse_round_trips_and_stays_inside_segments() {
    let data = sample(50_000, 7);
    for segment in [4_096, 10_000, 49_999, 50_000, 0] {
        for s in ALL {
            let tokens = parse_segmented(&data, s, segment);
            assert_eq!(reconstruct(&tokens).as_deref(), Some(&data[..]));
            if segment != 0 {
                // No copy reaches back across a segment boundary.
                let mut offset = 0;
                for t in &tokens {
                    let seg_start = offset - offset % segment;
                    if let Token::Copy { len, dist } = *t {
                        assert!(dist as usize <= offset - seg_start, "copy at {}", offset);
                        assert!(offset + len as usize <= seg_start + segment, "copy at {}", offset);
                    }
                    offset += t.span();
                }
            }
        }
    }
}

#[test]
fn segmented_equals_concatenated_parses() {
    let data = sample(30_000, 8);
    let segment = 8_192;
    let expected: Vec<Token> = data.chunks(segment).flat_map(|c| parse(c, Strategy::Lazy)).collect();
    assert_eq!(parse_segmented(&data, Strategy::Lazy, segment), expected);
}

#[test]
fn repetitive_input_compresses() {
    let data = sample(40_000, 4);
    for s in ALL {
        let summary = Summary::from_tokens(&parse(&data, s), data.len());
        assert!(summary.estimated_bytes() < data.len() as u64 / 2, "{}: {:?}", s, summary);
    }
}

#[test]
fn lazy_is_no_worse_than_greedy_on_deferred_matches() {
    // Greedy takes "abc" at distance 11; lazy waits for "bcdefgh".
    let data = b"abcQbcdefghabcdefgh";
    let g = parse(data, Strategy::Greedy);
    let l = parse(data, Strategy::Lazy);
    assert!(token_bits(&l) <= token_bits(&g));
    assert!(l.contains(&Token::Copy { len: 7, dist: 8 }));
}

#[test]
fn best_never_prices_above_both_single_block_parses() {
    // One block: best must equal the cheaper of greedy and lazy.
    let data = sample(BEST_BLOCK_SIZE / 2, 6);
    let g = token_bits(&parse(&data, Strategy::Greedy));
    let l = token_bits(&parse(&data, Strategy::Lazy));
    let b = token_bits(&parse(&data, Strategy::Best));
    assert_eq!(b, g.min(l));
}

#[test]
fn drivers_stop_at_or_after_the_requested_offset() {
    let data = sample(20_000, 10);
    for stop in [1, 500, 7_777] {
        let mut mf = MatchFinder::new(&data);
        let mut tokens = Vec::new();
        greedy(&mut mf, stop, &mut tokens);
        assert!(mf.offset() >= stop);
        assert_eq!(tokens.iter().map(Token::span).sum::<usize>(), mf.offset());

        let mut mf = MatchFinder::new(&data);
        let mut tokens = Vec::new();
        lazy(&mut mf, stop, &mut tokens);
        assert!(mf.offset() >= stop);
        assert_eq!(tokens.iter().map(Token::span).sum::<usize>(), mf.offset());
    }
}

#[test]
fn levels_select_strategies() {
    assert_eq!(Strategy::for_level(1), Strategy::Greedy);
    assert_eq!(Strategy::for_level(5), Strategy::Lazy);
    assert_eq!(Strategy::for_level(9), Strategy::Best);
    assert_eq!(Strategy::Best.to_string(), "best");
}
