//! LZ77 tokens, reconstruction, and parse summaries.

use super::cost::{copy_bits, literal_bits, BLOCK_OVERHEAD_BITS};

/// One step of an LZ77 parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single byte emitted as-is.
    Literal(u8),
    /// Repeat `len` bytes starting `dist` bytes back.
    Copy { len: u16, dist: u16 },
}

impl Token {
    /// Number of input bytes this token covers.
    #[inline]
    pub fn span(&self) -> usize {
        match *self {
            Token::Literal(_) => 1,
            Token::Copy { len, .. } => len as usize,
        }
    }

    /// Fixed-code cost of this token in bits.
    #[inline]
    pub fn bits(&self) -> u32 {
        match *self {
            Token::Literal(b) => literal_bits(b),
            Token::Copy { len, dist } => copy_bits(len, dist),
        }
    }
}

/// Total fixed-code cost of a token run, excluding block overhead.
pub fn token_bits(tokens: &[Token]) -> u64 {
    tokens.iter().map(|t| t.bits() as u64).sum()
}

/// Rebuild the bytes a token stream describes.
///
/// Returns `None` if a copy reaches back before the start of the output.
pub fn reconstruct(tokens: &[Token]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(tokens.iter().map(Token::span).sum());
    for token in tokens {
        match *token {
            Token::Literal(b) => out.push(b),
            Token::Copy { len, dist } => {
                let dist = dist as usize;
                if dist == 0 || dist > out.len() {
                    return None;
                }
                let from = out.len() - dist;
                // Byte-wise: overlapping copies (dist < len) replicate the run.
                for i in 0..len as usize {
                    let b = out[from + i];
                    out.push(b);
                }
            }
        }
    }
    Some(out)
}

/// Counters describing one parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub input_len: u64,
    pub literals: u64,
    pub copies: u64,
    pub copied_bytes: u64,
    pub longest_copy: u16,
    pub bits: u64,
}

impl Summary {
    /// Tally `tokens`, which must describe `input_len` bytes.
    pub fn from_tokens(tokens: &[Token], input_len: usize) -> Self {
        let mut s = Summary {
            input_len: input_len as u64,
            bits: BLOCK_OVERHEAD_BITS as u64,
            ..Summary::default()
        };
        for token in tokens {
            match *token {
                Token::Literal(_) => s.literals += 1,
                Token::Copy { len, .. } => {
                    s.copies += 1;
                    s.copied_bytes += len as u64;
                    s.longest_copy = s.longest_copy.max(len);
                }
            }
            s.bits += token.bits() as u64;
        }
        s
    }

    /// Estimated output size in whole bytes.
    pub fn estimated_bytes(&self) -> u64 {
        self.bits.div_ceil(8)
    }

    /// Bytes saved against the input (negative when the estimate is larger).
    pub fn savings(&self) -> i64 {
        self.input_len as i64 - self.estimated_bytes() as i64
    }
}
