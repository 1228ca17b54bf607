use std::{
    io::{self, ErrorKind, Result},
    time::{Duration, Instant},
};
use rayon::prelude::*;
use tracing::{info, warn};

use dutycycle::{
    helpers::{init_tracing, per_unit},
    RingBitCounter,
};

fn main() -> Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| io::Error::new(ErrorKind::InvalidInput, "usage: duty-sweep <file>"))?;
    let buf = std::fs::read(&path)?;
    if buf.is_empty() {
        warn!(path = %path, "empty input, nothing to record");
        return Ok(());
    }
    info!(path = %path, bytes = buf.len(), "sweeping capacities");

    // 1 and a few odd sizes, then powers of 2 up to 2^24
    let mut capacities = vec![1, 7, 100, 1000];
    capacities.extend((6..=24).map(|bits| 1usize << bits));

    let results: Vec<_> = capacities
        .into_par_iter()
        .map(|capacity| (capacity, exec(&buf, capacity)))
        .collect();

    for (capacity, result) in results {
        let (fraction, ones, time) =
            result.map_err(|err| io::Error::new(ErrorKind::InvalidInput, err))?;
        info!(
            "[cap: {:8}] duty: {:.6} ({} on), ctime: {:?} ({:?} per bit)",
            capacity,
            fraction,
            ones,
            time,
            per_unit(time, buf.len() * 8).unwrap_or_default()
        );
    }

    Ok(())
}

fn exec(
    buf: &[u8],
    capacity: usize,
) -> std::result::Result<(f64, usize, Duration), dutycycle::Error> {
    let timer = Instant::now();
    let mut dc = RingBitCounter::new(capacity)?;
    for &byte in buf {
        dc.record_byte(byte);
    }
    let fraction = dc.fraction();
    Ok((fraction, dc.ones(), timer.elapsed()))
}
