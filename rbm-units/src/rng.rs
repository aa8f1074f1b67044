// Host side randomness for sampling. We expose a function that sets the seed; if no seed is
// set we start from 0 so runs are reproducible by default. In-graph randomness (layer init)
// goes through candle's device rng instead, seedable with `Device::set_seed`.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;
use std::cell::RefCell;

thread_local! {
    pub static RNG: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(0));
}

pub fn set_seed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
}

/// `len` draws from uniform [0, 1).
pub fn uniform(len: usize) -> Vec<f32> {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        (0..len).map(|_| rng.random::<f32>()).collect()
    })
}

/// `len` draws from the standard normal.
pub fn standard_normal(len: usize) -> Vec<f32> {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        (0..len).map(|_| rng.sample(StandardNormal)).collect()
    })
}
