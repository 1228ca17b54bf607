/*!
Population count over packed `u64` words

The reduction works 4 words at a time: the pair and nibble sums of
independent words are merged before the horizontal byte reduction, so
masking is shared between lanes. Leftover words (0 to 3) go through the
single word version.

```
use dutycycle::popcount::count_ones;

assert_eq!(count_ones(&[u64::MAX, 1, 0, 0b1011, 7]), 64 + 1 + 3 + 3);
```
*/

const C1: u64 = 0x5555_5555_5555_5555; // 2-bit fields
const C2: u64 = 0x3333_3333_3333_3333; // 4-bit fields
const C3: u64 = 0x0F0F_0F0F_0F0F_0F0F; // byte fields
const C4: u64 = 0x0000_00FF_0000_00FF; // byte 0 & byte 4

/// Counts the set bits of a single word
#[inline(always)]
pub fn pop(mut x: u64) -> u32 {
    x -= (x >> 1) & C1;
    x = (x & C2) + ((x >> 2) & C2);
    x = (x & C3) + ((x >> 4) & C3);

    // every byte is <= 8, no carries between bytes
    x += x >> 8;
    x += x >> 16;
    x += x >> 32;
    (x & 0xFF) as u32
}

/// Counts the set bits of 4 words at once
#[inline(always)]
pub fn pop4(mut x: u64, mut y: u64, mut z: u64, mut w: u64) -> u32 {
    x -= (x >> 1) & C1;
    y -= (y >> 1) & C1;
    z -= (z >> 1) & C1;
    w -= (w >> 1) & C1;

    x = (x & C2) + ((x >> 2) & C2);
    y = (y & C2) + ((y >> 2) & C2);
    z = (z & C2) + ((z >> 2) & C2);
    w = (w & C2) + ((w >> 2) & C2);

    // nibbles are <= 8 after merging
    x += y;
    z += w;

    x = (x & C3) + ((x >> 4) & C3);
    z = (z & C3) + ((z >> 4) & C3);

    // bytes are <= 32
    x += z;

    x += x >> 8;
    x += x >> 16;
    x &= C4;
    x += x >> 32;
    (x & 0x1FF) as u32 // up to 256 needs 9 bits
}

/// Counts the set bits of a word slice
pub fn count_ones(words: &[u64]) -> usize {
    if cfg!(feature = "native_popcount") {
        return words.iter().map(|w| w.count_ones() as usize).sum();
    }

    let chunks = words.chunks_exact(4);
    let rem = chunks.remainder();

    let mut cnt = 0;
    for c in chunks {
        cnt += pop4(c[0], c[1], c[2], c[3]) as usize;
    }
    for &w in rem {
        cnt += pop(w) as usize;
    }
    cnt
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{count_ones, pop, pop4};

    fn naive(words: &[u64]) -> usize {
        let mut cnt = 0;
        for &w in words {
            for i in 0..u64::BITS {
                cnt += ((w >> i) & 1) as usize;
            }
        }
        cnt
    }

    #[test]
    fn pop_edges() {
        assert_eq!(pop(0), 0);
        assert_eq!(pop(u64::MAX), 64);
        assert_eq!(pop(1 << 63), 1);
        assert_eq!(pop(0xAAAA_AAAA_AAAA_AAAA), 32);
        assert_eq!(pop(0x8000_0000_0000_0001), 2);
    }

    #[test]
    fn pop4_edges() {
        assert_eq!(pop4(0, 0, 0, 0), 0);
        // max sum needs the 9th bit
        assert_eq!(pop4(u64::MAX, u64::MAX, u64::MAX, u64::MAX), 256);
        assert_eq!(pop4(u64::MAX, 0, u64::MAX, 0), 128);
        assert_eq!(pop4(1, 1 << 63, 0xFF, 0xF0F0), 1 + 1 + 8 + 8);
    }

    #[test]
    fn pop_random() {
        let mut rng = StdRng::seed_from_u64(0xD0C7);
        for _ in 0..10_000 {
            let x: u64 = rng.gen();
            assert_eq!(pop(x), x.count_ones());
        }
    }

    #[test]
    fn pop4_random() {
        let mut rng = StdRng::seed_from_u64(0x4444);
        for _ in 0..10_000 {
            let (x, y, z, w) = rng.gen::<(u64, u64, u64, u64)>();
            let expected = x.count_ones() + y.count_ones() + z.count_ones() + w.count_ones();
            assert_eq!(pop4(x, y, z, w), expected);
        }
    }

    #[test]
    fn count_ones_matches_naive() {
        // 1..=10 words covers grouped only (4, 8), remainder only (1..=3) and both
        let mut rng = StdRng::seed_from_u64(42);
        for len in 1..=10 {
            for density in [0.0, 0.1, 0.5, 0.9, 1.0] {
                let words: Vec<u64> = (0..len)
                    .map(|_| {
                        (0..u64::BITS).fold(0, |w, i| w | (u64::from(rng.gen_bool(density)) << i))
                    })
                    .collect();
                assert_eq!(count_ones(&words), naive(&words), "len: {len}, density: {density}");
            }
        }
    }

    #[test]
    fn count_ones_empty() {
        assert_eq!(count_ones(&[]), 0);
    }
}
