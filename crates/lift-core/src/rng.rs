//! Seeded random streams.
//!
//! Nothing in the simulator owns a global generator.  Whoever needs
//! randomness (the arrival sampler, a random policy) is handed a
//! `&mut SimRng` by the episode driver, which derives one stream per
//! consumer from the master seed with [`SimRng::child`].  Same seed, same
//! episode.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Odd 64-bit constant (fractional part of the golden ratio) used to spread
/// stream offsets across the seed space.
const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded `SmallRng`.  Cloning copies the position in the stream.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  The parent advances by one draw,
    /// so children taken in the same order from the same seed always match.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let base: u64 = self.0.r#gen();
        SimRng::new(base ^ stream.wrapping_mul(STREAM_SPREAD))
    }

    /// The underlying generator, for sampling `rand`/`rand_distr`
    /// distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform pick from `items`; `None` when empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
