//! The match-finder facade: hash heads + suffix tree + cursor over one input.
//!
//! Per input byte the caller performs exactly one search-or-skip followed by
//! one advance.  Two granularities are offered:
//!
//! - step API: [`MatchFinder::find`] / [`MatchFinder::insert`], then
//!   [`MatchFinder::advance`];
//! - per-byte helpers that do both: [`MatchFinder::get_matches`] and
//!   [`MatchFinder::skip`].
//!
//! `Clone` produces a fully independent finder (fresh arenas, same cursor),
//! so a caller can try several continuations from one point in history.

use xxhash_rust::xxh64::Xxh64;

use super::cursor::Cursor;
use super::hash_index::HashIndex;
use super::tree::SuffixTree;
use super::types::{MatchBuffer, Position};
use crate::config::MIN_MATCH;

/// Binary-tree match finder over a borrowed input buffer.
#[derive(Clone)]
pub struct MatchFinder<'a> {
    data: &'a [u8],
    hash: HashIndex,
    tree: SuffixTree,
    cursor: Cursor,
}

impl<'a> MatchFinder<'a> {
    /// Finder over all of `data`, positioned at its first byte.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_end(data, data.len())
    }

    /// Finder over `data` whose end-of-data sentinel is `end`.
    ///
    /// Bytes at or past `end` are never read; `end` is clamped to `data.len()`.
    pub fn with_end(data: &'a [u8], end: usize) -> Self {
        MatchFinder {
            data,
            hash: HashIndex::new(),
            tree: SuffixTree::new(),
            cursor: Cursor::new(end.min(data.len())),
        }
    }

    /// The input buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Current cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Byte offset of the cursor into the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Absolute stream position of the cursor.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.pos()
    }

    /// Bytes left before the end-of-data sentinel.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn hash_index(&self) -> &HashIndex {
        &self.hash
    }

    pub fn tree(&self) -> &SuffixTree {
        &self.tree
    }

    #[inline(always)]
    fn context(&self) -> [u8; 3] {
        let i = self.cursor.offset();
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Step API
    // ─────────────────────────────────────────────────────────────────────

    /// Collect matches for the byte under the cursor and insert it into the
    /// tree.  Does not advance.
    ///
    /// Returns the number of `(length, distance)` pairs written to `out`.
    /// With fewer than `MIN_MATCH` bytes left nothing is inserted, the
    /// cursor's slot is cleared, and 0 is returned.
    pub fn find(&mut self, out: &mut MatchBuffer) -> usize {
        if self.cursor.remaining() < MIN_MATCH {
            self.tree.clear(self.cursor.cyclic());
            return 0;
        }
        let root = self.hash.insert(self.context(), self.cursor.pos());
        self.tree.collect(self.data, &self.cursor, root, out)
    }

    /// Insert the byte under the cursor without collecting matches.  Does not
    /// advance.
    ///
    /// Leaves the hash heads and tree exactly as [`find`](Self::find) would.
    pub fn insert(&mut self) {
        if self.cursor.remaining() < MIN_MATCH {
            self.tree.clear(self.cursor.cyclic());
            return;
        }
        let root = self.hash.insert(self.context(), self.cursor.pos());
        self.tree.skip(self.data, &self.cursor, root);
    }

    /// Move the cursor forward `n` bytes (clamped to the sentinel).
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.cursor.advance(n);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Per-byte helpers
    // ─────────────────────────────────────────────────────────────────────

    /// [`find`](Self::find) followed by a one-byte advance.
    ///
    /// At the end-of-data sentinel this is a no-op that returns 0.
    pub fn get_matches(&mut self, out: &mut MatchBuffer) -> usize {
        if self.cursor.remaining() == 0 {
            return 0;
        }
        let pairs = self.find(out);
        self.cursor.advance(1);
        pairs
    }

    /// Insert and advance over `num` bytes (stops early at the sentinel).
    pub fn skip(&mut self, num: usize) {
        for _ in 0..num.min(self.cursor.remaining()) {
            self.insert();
            self.cursor.advance(1);
        }
    }

    /// Bulk-skip `num` bytes of a single-byte run without comparing anything.
    ///
    /// Each skipped slot receives a copy of the previous slot's children, and
    /// the hash bucket of the run's 3-byte context ends up pointing at the
    /// last skipped position.
    ///
    /// # Precondition
    ///
    /// The `num` bytes under the cursor must all equal one byte value, and
    /// the previous position must already be in the tree (normally the run's
    /// first byte, inserted by [`find`](Self::find) or [`skip`](Self::skip)).
    /// The tree this leaves behind is not generally search-correct: lookups
    /// that land inside the run may miss candidates.  Emitted matches are
    /// still genuine because lengths are always measured by comparison.  Use
    /// it only for positions whose candidates will not be queried, never as a
    /// general replacement for [`skip`](Self::skip).
    pub fn skip_run(&mut self, num: usize) {
        let num = num.min(self.cursor.remaining());
        if num == 0 {
            return;
        }
        let start = self.cursor.offset();
        let run = self.data[start];
        debug_assert!(
            self.data[start..start + num].iter().all(|&b| b == run),
            "skip_run over bytes that are not a single-byte run"
        );
        for _ in 0..num {
            self.tree.copy_previous(self.cursor.cyclic());
            self.cursor.advance(1);
        }
        self.hash.update([run; 3], self.cursor.pos().wrapping_sub(1));
    }

    /// Digest of the complete search state (hash heads, tree arena, cursor).
    ///
    /// Two finders with equal fingerprints will produce identical output for
    /// identical future calls.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Xxh64::new(0);
        for head in self.hash.heads() {
            h.update(&head.to_le_bytes());
        }
        for node in self.tree.nodes() {
            h.update(&node.low.to_le_bytes());
            h.update(&node.high.to_le_bytes());
        }
        h.update(&self.cursor.pos().to_le_bytes());
        h.update(&(self.cursor.offset() as u64).to_le_bytes());
        h.update(&(self.cursor.end() as u64).to_le_bytes());
        h.digest()
    }
}

impl std::fmt::Debug for MatchFinder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchFinder")
            .field("len", &self.data.len())
            .field("cursor", &self.cursor)
            .field("hash", &self.hash)
            .field("tree", &self.tree)
            .finish()
    }
}
