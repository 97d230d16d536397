#![no_main]
use libfuzzer_sys::fuzz_target;

use bt3zip::config::{MAX_MATCH, WINDOW_SIZE};
use bt3zip::mf::{Match, MatchFinder, MATCH_BUFFER_LEN};

fuzz_target!(|data: &[u8]| {
    let mut mf = MatchFinder::new(data);
    let mut skipper = MatchFinder::new(data);
    let mut out = [0u16; MATCH_BUFFER_LEN];

    while mf.remaining() > 0 {
        let p = mf.offset();
        let limit = mf.remaining().min(MAX_MATCH);
        let n = mf.get_matches(&mut out);
        let found: Vec<Match> = Match::pairs(&out[..2 * n]).collect();

        for w in found.windows(2) {
            assert!(w[0].len < w[1].len, "lengths not increasing at {}: {:?}", p, found);
            assert_ne!(w[0].group(), w[1].group(), "repeated group at {}: {:?}", p, found);
        }
        for m in &found {
            let (len, dist) = (m.len as usize, m.dist as usize);
            assert!(len >= 3 && len <= limit, "bad length at {}: {:?}", p, m);
            assert!(dist >= 1 && dist < WINDOW_SIZE && dist <= p, "bad distance at {}: {:?}", p, m);
            assert_eq!(data[p..p + len], data[p - dist..p - dist + len], "false match at {}", p);
        }
    }

    skipper.skip(data.len());
    assert_eq!(mf.fingerprint(), skipper.fingerprint(), "skip diverged from get_matches");
});
