//! Shared match-finder types, constant tables, and the 3-byte context hash.
//!
//! Contents:
//!   - [`Position`] / [`NIL`] — absolute stream positions and the "no node" sentinel
//!   - [`Node`] — one arena entry of the suffix tree (two child positions)
//!   - [`Match`] — a decoded `(length, distance)` pair
//!   - [`MatchBuffer`] — the flat `u16` output buffer filled by the collector
//!   - [`CRC_TABLE`] / [`hash3`] — the byte-scramble table and bucket hash
//!   - [`dist_group`] — the distance-group classifier

use crate::config::{HASH_SIZE, MAX_MATCH, MIN_MATCH, WINDOW_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Positions
// ─────────────────────────────────────────────────────────────────────────────

/// Absolute position in the input stream.
///
/// The first byte of a stream sits at `WINDOW_SIZE`, so `pos - distance`
/// never underflows for any distance inside the window and position `0` is
/// free to act as the sentinel.
pub type Position = u32;

/// "No node" sentinel stored in hash heads and child links.
///
/// Because live positions start at `WINDOW_SIZE`, a walk that reaches `NIL`
/// always sees a delta of at least `WINDOW_SIZE` and stops there.
pub const NIL: Position = 0;

/// Position assigned to byte offset 0 of a freshly constructed finder.
pub const START_POSITION: Position = WINDOW_SIZE as Position;

// ─────────────────────────────────────────────────────────────────────────────
// Distance groups
// ─────────────────────────────────────────────────────────────────────────────

/// Number of distance groups (the DEFLATE distance alphabet for a 32 KiB window).
pub const DIST_GROUPS: usize = 30;

/// Sentinel group that never equals a real one.
pub const NO_GROUP: u32 = DIST_GROUPS as u32;

/// Worst-case number of `u16` values written by one collector call:
/// one `(length, distance)` pair per distance group.
pub const MATCH_BUFFER_LEN: usize = 2 * DIST_GROUPS;

/// Flat output buffer: `[len0, dist0, len1, dist1, ...]`.
pub type MatchBuffer = [u16; MATCH_BUFFER_LEN];

/// Classify `dist` into its distance group.
///
/// The group is the DEFLATE distance symbol: distances 1–4 map to themselves
/// minus one, and every further power-of-two range is split into two halves.
/// `dist` must be in `1..=WINDOW_SIZE`.
#[inline]
pub const fn dist_group(dist: u32) -> u32 {
    debug_assert!(dist >= 1);
    if dist < 5 {
        dist - 1
    } else {
        let d_log = (dist - 1).ilog2();
        let r = ((dist - 1) >> (d_log - 1)) & 1;
        d_log * 2 + r
    }
}

/// Number of extra bits a distance in `group` carries in a DEFLATE stream.
#[inline]
pub const fn dist_group_extra_bits(group: u32) -> u32 {
    if group < 4 {
        0
    } else {
        (group - 2) / 2
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte-scramble table and context hash
// ─────────────────────────────────────────────────────────────────────────────

const fn build_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut r = i as u32;
        let mut k = 0;
        while k < 8 {
            r = if r & 1 != 0 { (r >> 1) ^ 0xEDB8_8320 } else { r >> 1 };
            k += 1;
        }
        table[i] = r;
        i += 1;
    }
    table
}

/// Reflected CRC-32 byte table used to scramble the middle context byte.
pub static CRC_TABLE: [u32; 256] = build_crc_table();

/// Fold a 3-byte context into a 16-bit hash bucket.
///
/// Collisions are expected; the tree walk sorts them out by comparing bytes.
#[inline(always)]
pub fn hash3(b0: u8, b1: u8, b2: u8) -> usize {
    ((b2 as u32 | ((b0 as u32) << 8)) ^ CRC_TABLE[b1 as usize]) as usize & (HASH_SIZE - 1)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree arena entry
// ─────────────────────────────────────────────────────────────────────────────

/// One suffix-tree node, addressed by the cyclic index of its position.
///
/// `low` holds the subtree of suffixes that compare smaller than this node's
/// suffix, `high` the larger ones.  Either may be [`NIL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Node {
    pub low: Position,
    pub high: Position,
}

impl Node {
    /// A node with no children.
    pub const EMPTY: Node = Node { low: NIL, high: NIL };
}

/// Which child field of a node a link refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Low,
    High,
}

/// A writable child slot: `side` of the node stored at arena index `slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub slot: usize,
    pub side: Side,
}

impl Link {
    #[inline(always)]
    pub const fn low(slot: usize) -> Self {
        Link { slot, side: Side::Low }
    }

    #[inline(always)]
    pub const fn high(slot: usize) -> Self {
        Link { slot, side: Side::High }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoded matches
// ─────────────────────────────────────────────────────────────────────────────

/// A repeat of the upcoming `len` bytes found `dist` bytes earlier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pub len: u16,
    pub dist: u16,
}

impl Match {
    /// Decode the flat `[len, dist, len, dist, ...]` prefix written by the collector.
    ///
    /// A trailing odd element is ignored.
    pub fn pairs(flat: &[u16]) -> impl Iterator<Item = Match> + '_ {
        flat.chunks_exact(2).map(|p| Match { len: p[0], dist: p[1] })
    }

    /// The last (and therefore longest) pair of a collector result, if any.
    pub fn longest(flat: &[u16], pairs: usize) -> Option<Match> {
        if pairs == 0 {
            return None;
        }
        let i = 2 * (pairs - 1);
        Some(Match { len: flat[i], dist: flat[i + 1] })
    }

    /// Distance group of this match.
    #[inline]
    pub fn group(&self) -> u32 {
        dist_group(self.dist as u32)
    }

    /// `true` when both fields lie in the ranges the finder can emit.
    pub fn is_well_formed(&self) -> bool {
        (MIN_MATCH..=MAX_MATCH).contains(&(self.len as usize))
            && self.dist >= 1
            && (self.dist as usize) < WINDOW_SIZE
    }
}
