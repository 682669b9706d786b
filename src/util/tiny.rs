use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A small, fast rng seeded from `seed`, so games and tests can be reproduced.
pub fn seeded_rng(seed: u64) -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(seed)
}

pub fn consistent_rng() -> impl Rng {
    seeded_rng(0)
}
