// Injectable randomness for tie-breaks and response sampling

use rand::Rng;

/// Source of uniform "pick one of N" choices
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..n`. Callers guarantee `n >= 1`.
    fn pick(&self, n: usize) -> usize;
}

/// Production source backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Choose one element uniformly, or `None` for an empty slice
pub fn choose<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    match items.len() {
        0 => None,
        1 => items.first(),
        n => items.get(rng.pick(n)),
    }
}
