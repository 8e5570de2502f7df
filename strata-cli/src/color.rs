//! A deterministic biome id -> RGB mapping for the viewer. Not the
//! reference's curated palette (static lookup data, out of scope here) —
//! just enough structure that adjacent biome ids don't collide and the
//! ocean/mesa/snow families read as visually related.

use strata_core::biome::{self, BiomeId};

/// Color for `id`, biased by a few recognizable families before falling
/// back to a hash-derived color so every id gets something distinct.
#[must_use]
pub fn biome_color(id: BiomeId) -> [u8; 3] {
    if biome::is_deep_ocean(id) {
        return [16, 48, 120];
    }
    if biome::is_oceanic(id) {
        return [52, 96, 176];
    }
    if biome::is_mesa(id) {
        return [176, 96, 52];
    }
    if biome::is_snowy(id) {
        return [232, 240, 248];
    }
    if id == BiomeId::THE_VOID {
        return [0, 0, 0];
    }

    let h = hash32(id.0 as u32);
    [
        64 + (h & 0xFF) as u8 / 2,
        64 + ((h >> 8) & 0xFF) as u8 / 2,
        64 + ((h >> 16) & 0xFF) as u8 / 2,
    ]
}

/// A cheap integer mixer (the `splitmix32` finalizer) — deterministic,
/// unrelated to any of the generator's own noise seeding.
fn hash32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}
