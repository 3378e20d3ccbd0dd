use super::RandSource;
use ::rand::{Rng, rng};

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// The type does not store the RNG; it reaches for the current thread's
/// generator on each call, so it is `Send + Sync` and free to share.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&self) -> u32 {
        rng().random()
    }
}

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_vary() {
        let rng = ThreadRandom;
        let draws: [u64; 4] = core::array::from_fn(|_| rng.rand());
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn usable_through_a_reference() {
        fn seed(r: impl RandSource<u32>) -> u32 {
            r.rand()
        }
        let rng = ThreadRandom;
        let _ = seed(&rng);
    }
}
