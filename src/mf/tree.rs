//! Binary suffix-tree arena and the search/insert walk.
//!
//! The arena has one [`Node`] per window slot.  Taken together the nodes
//! form many independent binary search trees, one per hash bucket, each keyed
//! by byte-wise comparison of the suffix starting at the node's position.
//! Children are always older than their parent, so every walk moves strictly
//! back in time and stops at the first node that has left the window.
//!
//! Each walk does two things at once:
//!
//! 1. **Insertion** — the current position becomes the new root of the
//!    bucket's tree.  Every visited candidate is hung off the current node's
//!    `low` or `high` frontier, depending on how it compares.
//! 2. **Emission** — every candidate whose common length beats the best so
//!    far is offered to a [`MatchSink`].  [`SuffixTree::collect`] keeps one
//!    pair per distance group; [`SuffixTree::skip`] discards them.
//!
//! When a candidate matches all the way to the length limit nothing below it
//! can be longer, so the candidate is spliced out: its two children move onto
//! the current node's frontiers and the walk ends.

use super::cursor::Cursor;
use super::types::{dist_group, Link, MatchBuffer, Node, Position, Side, NIL, NO_GROUP};
use crate::config::{MIN_MATCH, WINDOW_MASK, WINDOW_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Match sinks
// ─────────────────────────────────────────────────────────────────────────────

/// Receives `(length, distance)` candidates in walk order.
///
/// Candidates arrive with strictly increasing distance because every step of
/// the walk goes to an older node.
pub(crate) trait MatchSink {
    fn offer(&mut self, len: usize, delta: usize);
}

/// Sink used by the skip walk.
struct Discard;

impl MatchSink for Discard {
    #[inline(always)]
    fn offer(&mut self, _len: usize, _delta: usize) {}
}

/// Sink used by the collect walk: strictly increasing lengths, one pair per
/// distance group.
struct Collector<'o> {
    out: &'o mut MatchBuffer,
    used: usize,
    best: usize,
    last_group: u32,
}

impl<'o> Collector<'o> {
    fn new(out: &'o mut MatchBuffer) -> Self {
        Collector {
            out,
            used: 0,
            best: MIN_MATCH - 1,
            last_group: NO_GROUP,
        }
    }

    fn pairs(&self) -> usize {
        self.used / 2
    }
}

impl MatchSink for Collector<'_> {
    #[inline]
    fn offer(&mut self, len: usize, delta: usize) {
        if len <= self.best {
            return;
        }
        self.best = len;
        let group = dist_group(delta as u32);
        if group == self.last_group {
            // Same group as the previous pair: the longer match replaces it.
            self.out[self.used - 2] = len as u16;
            self.out[self.used - 1] = delta as u16;
        } else {
            self.out[self.used] = len as u16;
            self.out[self.used + 1] = delta as u16;
            self.used += 2;
        }
        self.last_group = group;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte comparison
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
fn read_le64(data: &[u8], i: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&data[i..i + 8]);
    u64::from_le_bytes(b)
}

/// Length of the common prefix of `data[cur..]` and `data[cand..]`, starting
/// the scan at `len` and never exceeding `limit`.
///
/// The caller guarantees `cand < cur` and `cur + limit <= data.len()`.
#[inline(always)]
pub fn common_length(data: &[u8], cand: usize, cur: usize, mut len: usize, limit: usize) -> usize {
    const STEP: usize = 8;
    while len + STEP <= limit {
        let diff = read_le64(data, cur + len) ^ read_le64(data, cand + len);
        if diff != 0 {
            return len + (diff.trailing_zeros() / 8) as usize;
        }
        len += STEP;
    }
    while len < limit && data[cand + len] == data[cur + len] {
        len += 1;
    }
    len
}

// ─────────────────────────────────────────────────────────────────────────────
// Arena
// ─────────────────────────────────────────────────────────────────────────────

/// `WINDOW_SIZE` tree nodes indexed by cyclic slot.
#[derive(Clone, PartialEq, Eq)]
pub struct SuffixTree {
    nodes: Box<[Node]>,
}

impl SuffixTree {
    /// An arena of childless nodes.
    pub fn new() -> Self {
        SuffixTree {
            nodes: vec![Node::EMPTY; WINDOW_SIZE].into_boxed_slice(),
        }
    }

    /// Node stored at `slot`.
    #[inline(always)]
    pub fn node(&self, slot: usize) -> Node {
        self.nodes[slot]
    }

    /// Raw view of the whole arena, in slot order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Drop both children of the node at `slot`.
    #[inline]
    pub fn clear(&mut self, slot: usize) {
        self.nodes[slot] = Node::EMPTY;
    }

    #[inline(always)]
    fn set(&mut self, link: Link, value: Position) {
        let node = &mut self.nodes[link.slot];
        match link.side {
            Side::Low => node.low = value,
            Side::High => node.high = value,
        }
    }

    /// Search the tree rooted at `root` for matches of the bytes under `at`,
    /// inserting `at`'s position as the new root on the way.
    ///
    /// Writes `(length, distance)` pairs to `out` with strictly increasing
    /// lengths and at most one pair per distance group, and returns the number
    /// of pairs.  Requires at least `MIN_MATCH` bytes before the sentinel.
    pub fn collect(&mut self, data: &[u8], at: &Cursor, root: Position, out: &mut MatchBuffer) -> usize {
        debug_assert!(at.remaining() >= MIN_MATCH);
        let mut sink = Collector::new(out);
        self.walk(data, at, root, &mut sink);
        sink.pairs()
    }

    /// Insert `at`'s position exactly as [`collect`](Self::collect) would,
    /// without reporting any match.
    pub fn skip(&mut self, data: &[u8], at: &Cursor, root: Position) {
        debug_assert!(at.remaining() >= MIN_MATCH);
        self.walk(data, at, root, &mut Discard);
    }

    /// Blind insertion: give `slot` the children of the slot just before it.
    ///
    /// No bytes are compared, so the resulting tree is only search-correct
    /// when the two positions start inside the same single-byte run.  See
    /// [`MatchFinder::skip_run`](super::finder::MatchFinder::skip_run) for the
    /// precondition.
    #[inline]
    pub fn copy_previous(&mut self, slot: usize) {
        self.nodes[slot] = self.nodes[(slot + WINDOW_SIZE - 1) & WINDOW_MASK];
    }

    fn walk<S: MatchSink>(&mut self, data: &[u8], at: &Cursor, root: Position, sink: &mut S) {
        let cur = at.offset();
        let len_limit = at.len_limit();
        let mut cur_match = root;
        // Frontiers: where the next smaller / larger candidate gets attached.
        let mut low_link = Link::low(at.cyclic());
        let mut high_link = Link::high(at.cyclic());
        // Common length already confirmed on each side of the descent.
        let mut low_len = 0usize;
        let mut high_len = 0usize;

        loop {
            let delta = at.pos().wrapping_sub(cur_match) as usize;
            if delta >= WINDOW_SIZE {
                self.set(low_link, NIL);
                self.set(high_link, NIL);
                return;
            }

            let slot = (at.cyclic() + WINDOW_SIZE - delta) & WINDOW_MASK;
            let cand = cur - delta;
            let mut len = low_len.min(high_len);

            if data[cand + len] == data[cur + len] {
                len = common_length(data, cand, cur, len + 1, len_limit);
                sink.offer(len, delta);
                if len == len_limit {
                    let node = self.nodes[slot];
                    self.set(low_link, node.low);
                    self.set(high_link, node.high);
                    return;
                }
            }

            if data[cand + len] < data[cur + len] {
                self.set(low_link, cur_match);
                low_link = Link::high(slot);
                cur_match = self.nodes[slot].high;
                low_len = len;
            } else {
                self.set(high_link, cur_match);
                high_link = Link::low(slot);
                cur_match = self.nodes[slot].low;
                high_len = len;
            }
        }
    }
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SuffixTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let linked = self.nodes.iter().filter(|n| **n != Node::EMPTY).count();
        f.debug_struct("SuffixTree").field("linked_nodes", &linked).finish()
    }
}
