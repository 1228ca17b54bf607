/*!
Moving duty cycle over the last N observations

States are stored as bits in `u64` words, so a window of a million
observations takes 125 KiB. The fraction is recomputed lazily with the
4-word popcount reduction, so capacities that are a multiple of 256 keep
the whole array on the fast path.

```
use dutycycle::RingBitCounter;

let mut dc = RingBitCounter::new(1024).unwrap();
dc.record_on();
dc.record_off();
dc.record_on();
dc.record_on();
assert_eq!(dc.fraction(), 0.75);
```

The counter is a plain owned value. `fraction` takes `&mut self` since it
fills the cache, so sharing one between threads needs a `Mutex` around it.
*/


use tracing::{debug, trace};

use crate::{error::Error, popcount::count_ones, unroll_for};

const WORD_BITS: usize = u64::BITS as usize;

/// Memoized fraction, dropped on every mutation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cache {
    Stale,
    Fresh(f64),
}

/// Fixed capacity circular bit buffer counting the fraction of "on" states
#[derive(Debug, Clone)]
pub struct RingBitCounter {
    words: Box<[u64]>,
    cursor: usize,   // next bit to write
    observed: usize, // saturates at capacity
    capacity: usize,
    cache: Cache,
}

impl RingBitCounter {
    /// Creates a counter remembering the last `capacity` states.
    ///
    /// Fails with `Error::InvalidCapacity` when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        let words = vec![0; capacity.div_ceil(WORD_BITS)].into_boxed_slice();
        debug!(capacity, words = words.len(), "new duty cycle counter");
        Ok(Self { words, cursor: 0, observed: 0, capacity, cache: Cache::Stale })
    }

    /// Records one state, overwriting the oldest one once full
    pub fn record(&mut self, on: bool) {
        // MSB first within each word
        let mask = 1u64 << (WORD_BITS - 1 - self.cursor % WORD_BITS);
        let word = &mut self.words[self.cursor / WORD_BITS];
        match on {
            true => *word |= mask,
            false => *word &= !mask,
        }
        self.step();
    }

    /// Records an "on" state, same as `record(true)`
    pub fn record_on(&mut self) {
        self.record(true);
    }

    /// Records an "off" state, same as `record(false)`
    pub fn record_off(&mut self) {
        self.record(false);
    }

    /// Records the 8 bits of `byte` as states, MSB first
    pub fn record_byte(&mut self, byte: u8) {
        unroll_for!(bit in byte, {
            self.record(bit);
        });
    }

    fn step(&mut self) {
        self.cursor += 1;
        if self.cursor == self.capacity {
            self.cursor = 0;
        }
        if self.observed != self.capacity {
            self.observed += 1;
        }
        self.cache = Cache::Stale;
    }

    /// Returns the duty cycle in the range [0; 1]
    ///
    /// Before anything is recorded this is `0.0`, which can't be told apart
    /// from all states being off. Use [`Self::try_fraction`] to tell them apart.
    pub fn fraction(&mut self) -> f64 {
        self.try_fraction().unwrap_or(0.0)
    }

    /// Returns the duty cycle or `Error::Uninitialized` if nothing was recorded
    pub fn try_fraction(&mut self) -> Result<f64, Error> {
        if let Cache::Fresh(fraction) = self.cache {
            return Ok(fraction);
        }
        if self.observed == 0 {
            return Err(Error::Uninitialized);
        }

        let ones = self.ones();
        let fraction = ones as f64 / self.observed as f64;
        trace!(ones, observed = self.observed, fraction, "recomputed duty cycle");
        self.cache = Cache::Fresh(fraction);
        Ok(fraction)
    }

    /// Number of "on" states in the window
    pub fn ones(&self) -> usize {
        // unwritten slots and padding bits are always clear
        count_ones(&self.words)
    }

    /// Number of states observed, at most `capacity`
    pub fn len(&self) -> usize {
        self.observed
    }

    pub fn is_empty(&self) -> bool {
        self.observed == 0
    }

    /// True once `capacity` states were recorded, new ones overwrite the oldest
    pub fn is_full(&self) -> bool {
        self.observed == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forgets all states, keeping the allocation
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.cursor = 0;
        self.observed = 0;
        self.cache = Cache::Stale;
    }
}

impl Extend<bool> for RingBitCounter {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for on in iter {
            self.record(on);
        }
    }
}
