//! Fixed-Huffman DEFLATE code lengths, used to price a parse.
//!
//! These are the static code lengths from RFC 1951 §3.2.6.  A parse priced
//! with them gives a stable, table-free size estimate that is good enough to
//! compare two parses of the same bytes.

use crate::mf::types::{dist_group, dist_group_extra_bits};

/// First match length of each length symbol (symbols 257..=285).
const LENGTH_BASE: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115,
    131, 163, 195, 227, 258,
];

/// Extra bits carried by each length symbol.
const LENGTH_EXTRA: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Bits of the fixed distance code.
pub const DIST_CODE_BITS: u32 = 5;

/// Bits of the end-of-block symbol plus the 3-bit block header.
pub const BLOCK_OVERHEAD_BITS: u32 = 7 + 3;

/// Fixed code length of literal/length symbol `sym` (0..=287).
#[inline]
pub const fn litlen_code_bits(sym: u16) -> u32 {
    match sym {
        0..=143 => 8,
        144..=255 => 9,
        256..=279 => 7,
        _ => 8,
    }
}

/// Length symbol (257..=285) and extra-bit count for a match length.
#[inline]
pub fn length_symbol(len: u16) -> (u16, u32) {
    debug_assert!((3..=258).contains(&len));
    let i = LENGTH_BASE.partition_point(|&base| base <= len) - 1;
    (257 + i as u16, LENGTH_EXTRA[i] as u32)
}

/// Cost in bits of one literal byte.
#[inline]
pub const fn literal_bits(byte: u8) -> u32 {
    litlen_code_bits(byte as u16)
}

/// Cost in bits of one `(len, dist)` copy.
#[inline]
pub fn copy_bits(len: u16, dist: u16) -> u32 {
    let (sym, extra) = length_symbol(len);
    litlen_code_bits(sym) + extra + DIST_CODE_BITS + dist_group_extra_bits(dist_group(dist as u32))
}
