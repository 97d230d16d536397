//! Binary-tree LZ77 match finder.
//!
//! For each input position the finder walks a binary search tree of earlier
//! suffixes that share the position's 3-byte hash bucket, returning a short
//! list of `(length, distance)` candidates and inserting the position into the
//! tree as it goes.
//!
//! - [`types`]      — positions, nodes, matches, hash and distance-group tables
//! - [`hash_index`] — [`HashIndex`], bucket → most recent position
//! - [`cursor`]     — [`Cursor`], absolute/cyclic/byte position bookkeeping
//! - [`tree`]       — [`SuffixTree`], the node arena and the search/insert walk
//! - [`finder`]     — [`MatchFinder`], the facade tying the three together

pub mod cursor;
pub mod finder;
pub mod hash_index;
pub mod tree;
pub mod types;

pub use cursor::Cursor;
pub use finder::MatchFinder;
pub use hash_index::HashIndex;
pub use tree::SuffixTree;
pub use types::{dist_group, Match, MatchBuffer, Position, DIST_GROUPS, MATCH_BUFFER_LEN, NIL};
