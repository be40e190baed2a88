use rand::{rngs::StdRng, SeedableRng};

/// Fixed seed in debug builds so test runs and bug reports replay exactly
#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    const SEED: u64 = 63;
    StdRng::seed_from_u64(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    StdRng::from_os_rng()
}
