//! Stream cursor: absolute position, cyclic slot, and byte offset into the input.

use super::types::{Position, START_POSITION};
use crate::config::{MAX_MATCH, WINDOW_MASK};

/// Where the match finder currently stands in its input.
///
/// `pos`, `cyclic` and `offset` always move together; `cyclic == pos & WINDOW_MASK`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pos: Position,
    cyclic: usize,
    offset: usize,
    end: usize,
}

impl Cursor {
    /// Cursor at byte 0 of an input whose end-of-data sentinel is `end`.
    pub fn new(end: usize) -> Self {
        Cursor {
            pos: START_POSITION,
            cyclic: START_POSITION as usize & WINDOW_MASK,
            offset: 0,
            end,
        }
    }

    /// Absolute stream position of the byte under the cursor.
    #[inline(always)]
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Tree arena slot of the byte under the cursor.
    #[inline(always)]
    pub fn cyclic(&self) -> usize {
        self.cyclic
    }

    /// Byte offset into the input buffer.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// End-of-data sentinel.
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Bytes left before the sentinel.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.end - self.offset
    }

    /// Longest match allowed at the cursor.
    #[inline(always)]
    pub fn len_limit(&self) -> usize {
        self.remaining().min(MAX_MATCH)
    }

    /// Move forward by `n` bytes, never past the sentinel.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining(), "advance past end of data");
        let n = n.min(self.remaining());
        self.offset += n;
        self.pos = self.pos.wrapping_add(n as Position);
        self.cyclic = (self.cyclic + n) & WINDOW_MASK;
    }
}
