use std::{hint::black_box, io::Result, time::Instant};
use tracing::{info, warn};

use dutycycle::{
    helpers::{init_tracing, per_unit},
    popcount::{count_ones, pop},
    usize,
};

const ROUNDS: usize = 1 << 10;

fn main() -> Result<()> {
    init_tracing();

    // xorshift, any bit pattern will do
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let words: Vec<u64> = (0..1 << 14)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect();

    // lengths hitting the remainder path as well
    for len in [1, 3, 4, 7, 16, 255, 1 << 10, 1 << 14] {
        let words = &words[..len];
        let swar = bench("swar4", words, count_ones);
        let native = bench("native", words, |w| w.iter().map(|x| usize!(x.count_ones())).sum());
        let scalar = bench("pop", words, |w| w.iter().map(|&x| usize!(pop(x))).sum());
        let naive = bench("naive", words, |w| {
            w.iter().map(|&x| (0..u64::BITS).filter(|i| (x >> i) & 1 == 1).count()).sum()
        });
        if swar != native || swar != scalar || swar != naive {
            warn!(len, swar, native, scalar, naive, "popcount mismatch");
        }
    }

    Ok(())
}

fn bench(name: &str, words: &[u64], count: impl Fn(&[u64]) -> usize) -> usize {
    let timer = Instant::now();
    let mut cnt = 0;
    for _ in 0..ROUNDS {
        cnt = count(black_box(words));
    }
    let time = timer.elapsed();
    info!(
        "[{:6}] words: {:5}, ones: {:6}, time: {:?} ({:?} per word)",
        name,
        words.len(),
        cnt,
        time.div_f64(ROUNDS as f64),
        per_unit(time, ROUNDS * words.len()).unwrap_or_default()
    );
    cnt
}
