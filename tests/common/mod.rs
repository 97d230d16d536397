// Shared test-data generators.
#![allow(dead_code)]

/// Deterministic xorshift64* stream.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// Text-like input: words from a small vocabulary, with occasional noise
/// bytes and long single-byte runs.
pub fn sample(len: usize, seed: u64) -> Vec<u8> {
    const WORDS: [&[u8]; 12] = [
        b"the ", b"match ", b"finder ", b"window ", b"tree ", b"hash ", b"abc", b"abcabc",
        b"deflate ", b"\n", b"zzzz", b"0123456789",
    ];
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(len + 16);
    while out.len() < len {
        match rng.below(20) {
            0 => out.push(rng.next() as u8),
            1 => {
                let b = rng.next() as u8;
                let n = 4 + rng.below(400) as usize;
                out.extend(std::iter::repeat(b).take(n));
            }
            _ => out.extend_from_slice(WORDS[rng.below(WORDS.len() as u64) as usize]),
        }
    }
    out.truncate(len);
    out
}

/// Uniformly random bytes.
pub fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = Rng::new(seed);
    (0..len).map(|_| rng.next() as u8).collect()
}
