//! Size parsing (`64K`, `1MiB`) and human-readable size formatting.

use crate::cli::constants::{GB, KB, MB};

/// Parse a leading decimal number with an optional `K`/`M`/`G` suffix
/// (each optionally followed by `i` and/or `B`).
///
/// Returns the value and the unparsed rest of the string, or `None` if `s`
/// does not start with a digit or the value overflows.
pub fn read_u64_from_str(s: &str) -> Option<(u64, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut value: u64 = s[..digits].parse().ok()?;
    let mut rest = &s[digits..];

    let shift = match rest.as_bytes().first() {
        Some(b'K') => 10,
        Some(b'M') => 20,
        Some(b'G') => 30,
        _ => 0,
    };
    if shift != 0 {
        value = value.checked_mul(1 << shift)?;
        rest = &rest[1..];
        rest = rest.strip_prefix('i').unwrap_or(rest);
        rest = rest.strip_prefix('B').unwrap_or(rest);
    }
    Some((value, rest))
}

/// [`read_u64_from_str`] narrowed to `u32`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let (value, rest) = read_u64_from_str(s)?;
    Some((u32::try_from(value).ok()?, rest))
}

/// `clap` value parser for byte sizes: the whole argument must be consumed.
pub fn parse_size(s: &str) -> Result<u64, String> {
    match read_u64_from_str(s) {
        Some((value, "")) => Ok(value),
        Some((_, rest)) => Err(format!("unexpected trailing characters '{}'", rest)),
        None => Err(format!("'{}' is not a size", s)),
    }
}

/// Scale `bytes` down by 1024 until it fits, returning the value and unit prefix.
///
/// Mirrors the classic savings report: no decimals for plain bytes, two
/// decimals once scaled.
pub fn format_size(bytes: u64) -> String {
    let (value, unit) = if bytes > GB {
        (bytes as f64 / GB as f64, "G")
    } else if bytes > MB {
        (bytes as f64 / MB as f64, "M")
    } else if bytes > KB {
        (bytes as f64 / KB as f64, "K")
    } else {
        return format!("{}B", bytes);
    };
    format!("{:.2}{}B", value, unit)
}
