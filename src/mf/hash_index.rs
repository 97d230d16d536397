//! Hash heads: the most recent position seen for each 3-byte context bucket.
//!
//! A lookup only names the root of a search; the tree rooted there may hold
//! positions from any context that shares the bucket.

use super::types::{hash3, Position, NIL};
use crate::config::HASH_SIZE;

/// Table of `HASH_SIZE` hash heads.
#[derive(Clone, PartialEq, Eq)]
pub struct HashIndex {
    heads: Box<[Position]>,
}

impl HashIndex {
    /// A table with every bucket set to [`NIL`].
    pub fn new() -> Self {
        HashIndex {
            heads: vec![NIL; HASH_SIZE].into_boxed_slice(),
        }
    }

    /// Bucket of a 3-byte context.
    #[inline(always)]
    pub fn bucket(ctx: [u8; 3]) -> usize {
        hash3(ctx[0], ctx[1], ctx[2])
    }

    /// Most recent position stored for `ctx`'s bucket, or [`NIL`].
    #[inline]
    pub fn lookup(&self, ctx: [u8; 3]) -> Position {
        self.heads[Self::bucket(ctx)]
    }

    /// Record `pos` as the most recent position for `ctx`'s bucket.
    #[inline]
    pub fn update(&mut self, ctx: [u8; 3], pos: Position) {
        self.heads[Self::bucket(ctx)] = pos;
    }

    /// Replace the head of `ctx`'s bucket with `pos`, returning the old head.
    #[inline]
    pub fn insert(&mut self, ctx: [u8; 3], pos: Position) -> Position {
        std::mem::replace(&mut self.heads[Self::bucket(ctx)], pos)
    }

    /// Raw view of all heads, in bucket order.
    pub fn heads(&self) -> &[Position] {
        &self.heads
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HashIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.heads.iter().filter(|&&h| h != NIL).count();
        f.debug_struct("HashIndex").field("used_buckets", &used).finish()
    }
}
