// Distance groups, the context hash, and match decoding.

use bt3zip::config::{HASH_SIZE, WINDOW_SIZE};
use bt3zip::mf::types::{
    dist_group, dist_group_extra_bits, hash3, Match, CRC_TABLE, DIST_GROUPS, MATCH_BUFFER_LEN, NIL,
    NO_GROUP, START_POSITION,
};

#[test]
fn positions_start_one_window_in() {
    assert_eq!(NIL, 0);
    assert_eq!(START_POSITION as usize, WINDOW_SIZE);
}

#[test]
fn every_window_distance_has_a_group() {
    let mut prev = 0;
    for dist in 1..WINDOW_SIZE as u32 {
        let g = dist_group(dist);
        assert!((g as usize) < DIST_GROUPS, "dist {} -> group {}", dist, g);
        assert!(g >= prev, "groups must not decrease");
        prev = g;
    }
    assert_eq!(prev, 29);
    assert_ne!(prev, NO_GROUP);
}

#[test]
fn group_extra_bits_cover_group_width() {
    // A group's width is 2^extra_bits distances.
    let mut count = [0u32; DIST_GROUPS];
    for dist in 1..=WINDOW_SIZE as u32 {
        count[dist_group(dist) as usize] += 1;
    }
    for (g, &n) in count.iter().enumerate() {
        assert_eq!(n, 1 << dist_group_extra_bits(g as u32), "group {}", g);
    }
}

#[test]
fn match_buffer_holds_one_pair_per_group() {
    assert_eq!(MATCH_BUFFER_LEN, 2 * DIST_GROUPS);
}

#[test]
fn hash_mixes_first_and_last_byte_with_crc_of_middle() {
    assert_eq!(hash3(0, 0, 0), 0);
    assert_eq!(hash3(1, 0, 2), 0x0102);
    assert_eq!(hash3(0, 1, 0), (CRC_TABLE[1] & 0xFFFF) as usize);
    assert_eq!(
        hash3(0x12, 0x34, 0x56),
        ((0x56 | (0x12 << 8)) ^ CRC_TABLE[0x34]) as usize & (HASH_SIZE - 1)
    );
}

#[test]
fn pairs_decode_flat_buffer() {
    let flat = [3u16, 1, 7, 12, 258, 30_000];
    let decoded: Vec<Match> = Match::pairs(&flat).collect();
    assert_eq!(
        decoded,
        vec![
            Match { len: 3, dist: 1 },
            Match { len: 7, dist: 12 },
            Match { len: 258, dist: 30_000 },
        ]
    );
    assert!(decoded.iter().all(Match::is_well_formed));
    assert_eq!(decoded[1].group(), dist_group(12));
}

#[test]
fn malformed_matches_are_detected() {
    assert!(!Match { len: 2, dist: 1 }.is_well_formed());
    assert!(!Match { len: 259, dist: 1 }.is_well_formed());
    assert!(!Match { len: 3, dist: 0 }.is_well_formed());
    assert!(!Match { len: 3, dist: WINDOW_SIZE as u16 }.is_well_formed());
}
