use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the index of the winning slice for a pool of `len` entries.
///
/// The engine never touches an ambient random source; whatever is plugged
/// in here decides the outcome, which is what makes spins reproducible in
/// tests. Returned values at or above `len` are wrapped by the engine.
pub trait IndexSource {
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> IndexSource for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform draw from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomIndex<R> {
    rng: R,
}

impl<R: Rng> RandomIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIndex<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> IndexSource for RandomIndex<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always lands on the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}
