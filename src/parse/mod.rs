//! LZ77 parsing on top of the match finder.
//!
//! - [`cost`]     — fixed-Huffman DEFLATE code lengths used to price tokens
//! - [`token`]    — [`Token`], [`reconstruct`], and [`Summary`]
//! - [`strategy`] — [`Strategy`] and the greedy / lazy / best drivers

pub mod cost;
pub mod strategy;
pub mod token;

use rayon::prelude::*;

use crate::mf::MatchFinder;

pub use strategy::Strategy;
pub use token::{reconstruct, token_bits, Summary, Token};

/// Parse all of `data` with one match finder.
pub fn parse(data: &[u8], strategy: Strategy) -> Vec<Token> {
    let mut mf = MatchFinder::new(data);
    let mut tokens = Vec::with_capacity(data.len() / 4);
    strategy::drive(strategy, &mut mf, data.len(), &mut tokens);
    tokens
}

/// Parse `data` as independent `segment`-byte pieces in parallel.
///
/// Each piece gets its own finder, so no copy reaches across a piece
/// boundary.  `segment == 0` parses the whole input in one piece.
pub fn parse_segmented(data: &[u8], strategy: Strategy, segment: usize) -> Vec<Token> {
    if segment == 0 || data.len() <= segment {
        return parse(data, strategy);
    }
    data.par_chunks(segment)
        .map(|chunk| parse(chunk, strategy))
        .collect::<Vec<_>>()
        .concat()
}
