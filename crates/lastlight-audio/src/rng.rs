//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the synthesis pipeline flows through this module.
//! Every asset draws from its own stream, derived from the base seed and
//! the asset's catalog name, so regenerating one asset never perturbs the
//! noise consumed by another.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named asset from the base seed.
///
/// Hashes the base seed concatenated with the asset name using BLAKE3 and
/// truncates to 32 bits, producing an independent seed per asset.
pub fn derive_asset_seed(base_seed: u32, name: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + name.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(name.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named asset.
pub fn create_asset_rng(base_seed: u32, name: &str) -> Pcg32 {
    create_rng(derive_asset_seed(base_seed, name))
}
