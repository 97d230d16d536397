//! Parsing drivers: greedy, one-step lazy, and best-of-both per block.
//!
//! Every driver consumes a [`MatchFinder`] from its current offset up to (at
//! least) `stop` and appends tokens.  The last token may run past `stop`;
//! the caller continues from wherever the finder ended up.

use std::fmt;

use crate::config::BEST_BLOCK_SIZE;
use crate::mf::{Match, MatchBuffer, MatchFinder, MATCH_BUFFER_LEN};

use super::token::{token_bits, Token};

/// How tokens are chosen from the finder's candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Take the longest match at every position.
    Greedy,
    /// Defer a match by one byte when the next position has a longer one.
    Lazy,
    /// Per block, keep whichever of greedy and lazy prices lower.
    Best,
}

impl Strategy {
    /// Strategy for analysis level `level` (1..=9, clamped).
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=3 => Strategy::Greedy,
            4..=6 => Strategy::Lazy,
            _ => Strategy::Best,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Lazy => "lazy",
            Strategy::Best => "best",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn copy_token(m: Match) -> Token {
    Token::Copy { len: m.len, dist: m.dist }
}

// ─────────────────────────────────────────────────────────────────────────────
// Greedy
// ─────────────────────────────────────────────────────────────────────────────

/// Longest match wins; the rest of its span is skipped.
pub fn greedy(mf: &mut MatchFinder<'_>, stop: usize, tokens: &mut Vec<Token>) {
    let data = mf.data();
    let mut out: MatchBuffer = [0; MATCH_BUFFER_LEN];
    while mf.offset() < stop && mf.remaining() > 0 {
        let p = mf.offset();
        let n = mf.get_matches(&mut out);
        match Match::longest(&out, n) {
            Some(m) => {
                tokens.push(copy_token(m));
                mf.skip(m.len as usize - 1);
            }
            None => tokens.push(Token::Literal(data[p])),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lazy
// ─────────────────────────────────────────────────────────────────────────────

/// One-step lazy evaluation.
///
/// A match found at `p` is held while position `p + 1` is searched.  If the
/// later match is longer, `data[p]` goes out as a literal and the later match
/// is held instead.
pub fn lazy(mf: &mut MatchFinder<'_>, stop: usize, tokens: &mut Vec<Token>) {
    let data = mf.data();
    let mut out: MatchBuffer = [0; MATCH_BUFFER_LEN];
    // Match starting one byte before the cursor.
    let mut pending: Option<Match> = None;

    loop {
        let p = mf.offset();
        if mf.remaining() == 0 || (p >= stop && pending.is_none()) {
            break;
        }
        let n = mf.get_matches(&mut out);
        let here = Match::longest(&out, n);
        match (pending.take(), here) {
            (Some(prev), Some(m)) if m.len > prev.len => {
                tokens.push(Token::Literal(data[p - 1]));
                pending = Some(m);
            }
            (Some(prev), _) => {
                tokens.push(copy_token(prev));
                // `p` is already inserted; `p - 1` started the copy.
                mf.skip(prev.len as usize - 2);
            }
            (None, Some(m)) => pending = Some(m),
            (None, None) => tokens.push(Token::Literal(data[p])),
        }
    }

    if let Some(prev) = pending {
        tokens.push(copy_token(prev));
        mf.skip(prev.len as usize - 1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Best of both
// ─────────────────────────────────────────────────────────────────────────────

/// Parse `BEST_BLOCK_SIZE` blocks, branching the finder at every block start.
///
/// Greedy runs on `mf`, lazy on a clone of it.  The parse with the lower
/// estimated bits per input byte is kept, together with its finder state.
pub fn best(mf: &mut MatchFinder<'_>, stop: usize, tokens: &mut Vec<Token>) {
    let mut g = Vec::new();
    let mut l = Vec::new();
    while mf.offset() < stop && mf.remaining() > 0 {
        let start = mf.offset();
        let block_stop = stop.min(start + BEST_BLOCK_SIZE);

        let mut alt = mf.clone();
        g.clear();
        l.clear();
        greedy(mf, block_stop, &mut g);
        lazy(&mut alt, block_stop, &mut l);

        let g_span = (mf.offset() - start) as u64;
        let l_span = (alt.offset() - start) as u64;
        // l_bits / l_span < g_bits / g_span, without division.
        if token_bits(&l) * g_span < token_bits(&g) * l_span {
            *mf = alt;
            tokens.extend_from_slice(&l);
        } else {
            tokens.extend_from_slice(&g);
        }
    }
}

/// Run `strategy` from the finder's offset up to `stop`.
pub fn drive(strategy: Strategy, mf: &mut MatchFinder<'_>, stop: usize, tokens: &mut Vec<Token>) {
    match strategy {
        Strategy::Greedy => greedy(mf, stop, tokens),
        Strategy::Lazy => lazy(mf, stop, tokens),
        Strategy::Best => best(mf, stop, tokens),
    }
}
