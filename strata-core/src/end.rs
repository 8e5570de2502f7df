//! The End: a central island plus simplex-thresholded outer islands,
//! sampled directly at runtime — no density-function tree, no climate
//! parameters.
//!
//! Grounded almost directly on the teacher's `EndIslands`/`EndBiomeSource`
//! (same falloff-from-origin + 25x25 neighborhood scan + simplex
//! threshold shape), generalized from a fixed seed-0 noise to one seeded
//! per world and carrying the higher-scale disc search the reference also
//! performs for `getEndHeightNoise`.

use strata_utils::noise::PerlinNoise;
use strata_utils::random::legacy_random::LegacyRandom;
use strata_utils::random::Random;

use crate::biome::BiomeId;

/// Threshold below which an island center contributes, matching the
/// reference's `(double)(-0.9f)` float-to-double promotion rather than
/// the exact double `-0.9`.
const ISLAND_THRESHOLD: f64 = -0.9_f32 as f64;

/// The End's island-placement noise. Always seeded the same way
/// regardless of world seed parity with other dimensions: a legacy LCG
/// from the world seed, advanced 17292 draws before the permutation is
/// built (the reference's `RandomState` wiring for this density function).
pub struct EndIslands {
    noise: PerlinNoise,
}

impl EndIslands {
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut rng = LegacyRandom::from_seed(seed);
        rng.consume_count(17292);
        let noise = PerlinNoise::new(&mut rng);
        Self { noise }
    }

    /// Sample the island-carve value at block coordinates, in
    /// `[-0.84375, 0.5625]`.
    #[must_use]
    pub fn sample(&self, block_x: i32, block_z: i32) -> f64 {
        (f64::from(Self::height_value(&self.noise, block_x / 8, block_z / 8)) - 8.0) / 128.0
    }

    fn height_value(noise: &PerlinNoise, section_x: i32, section_z: i32) -> f32 {
        let chunk_x = section_x / 2;
        let chunk_z = section_z / 2;
        let sub_x = section_x % 2;
        let sub_z = section_z % 2;

        let dist_sq = section_x
            .wrapping_mul(section_x)
            .wrapping_add(section_z.wrapping_mul(section_z));
        let dist = (dist_sq as f32).sqrt();
        let mut doffs = (100.0_f32 - dist * 8.0).clamp(-100.0, 80.0);

        for xo in -12..=12 {
            for zo in -12..=12 {
                let tcx = i64::from(chunk_x) + i64::from(xo);
                let tcz = i64::from(chunk_z) + i64::from(zo);

                if tcx * tcx + tcz * tcz > 4096
                    && noise.sample_simplex_2d(tcx as f64, tcz as f64) < ISLAND_THRESHOLD
                {
                    let island_size =
                        ((tcx as f32).abs() * 3439.0 + (tcz as f32).abs() * 147.0) % 13.0 + 9.0;
                    let xd = sub_x as f32 - (xo * 2) as f32;
                    let zd = sub_z as f32 - (zo * 2) as f32;
                    let new_doffs =
                        (100.0_f32 - (xd * xd + zd * zd).sqrt() * island_size).clamp(-100.0, 80.0);
                    doffs = doffs.max(new_doffs);
                }
            }
        }

        doffs
    }
}

/// Classify a column, world-seed-independent except through the caller's
/// choice of [`EndIslands`] instance.
///
/// 1. Within 64 chunks of the origin: always `the_end`.
/// 2. Otherwise, the erosion-like value from [`EndIslands::sample`] at a
///    fixed per-chunk offset decides among highlands/midlands/barrens/small
///    islands at thresholds 0.25 / -0.0625 / -0.21875.
#[must_use]
pub fn classify(islands: &EndIslands, chunk_x: i32, chunk_z: i32) -> BiomeId {
    if i64::from(chunk_x) * i64::from(chunk_x) + i64::from(chunk_z) * i64::from(chunk_z) <= 4096 {
        return BiomeId::THE_END;
    }

    let weird_x = (chunk_x * 2 + 1) * 8;
    let weird_z = (chunk_z * 2 + 1) * 8;
    let value = islands.sample(weird_x, weird_z);

    if value > 0.25 {
        BiomeId::END_HIGHLANDS
    } else if value >= -0.0625 {
        BiomeId::END_MIDLANDS
    } else if value < -0.21875 {
        BiomeId::SMALL_END_ISLANDS
    } else {
        BiomeId::END_BARRENS
    }
}

/// Convenience for callers that only have a block position and don't hold
/// a long-lived [`EndIslands`]: builds a fresh one from the seed every
/// call. [`Generator`](crate::generator::Generator) instead keeps a
/// per-instance copy; this exists for the `gen_biomes` End path where
/// the islands noise is threaded in separately per generator, not
/// reconstructed here — kept as the simple fallback other call sites can
/// reach for.
#[must_use]
pub fn biome_at(block_x: i32, block_z: i32) -> BiomeId {
    // A seed-0 islands noise: the End's central-island carve at the
    // origin doesn't depend on the noise at all, and this path only
    // exists for scale>1 previews that don't carry a generator instance.
    let islands = EndIslands::new(0);
    classify(&islands, block_x >> 4, block_z >> 4)
}

/// Search the 25x25 section neighborhood around a coordinate for the
/// highest island contribution at a coarser scale than block resolution
/// — `getEndHeightNoise`'s disc search, exposed for preview tools that
/// sample The End at scale 16/64/256 without walking every block.
#[must_use]
pub fn height_noise(islands: &EndIslands, block_x: i32, block_z: i32) -> f32 {
    EndIslands::height_value(&islands.noise, block_x / 8, block_z / 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_island_is_always_the_end() {
        let islands = EndIslands::new(42);
        assert_eq!(classify(&islands, 0, 0), BiomeId::THE_END);
        assert_eq!(classify(&islands, 60, 0), BiomeId::THE_END);
    }

    #[test]
    fn far_outer_chunk_is_not_the_end() {
        let islands = EndIslands::new(42);
        assert_ne!(classify(&islands, 500, 500), BiomeId::THE_END);
    }

    #[test]
    fn sample_is_deterministic_for_same_seed() {
        let a = EndIslands::new(7);
        let b = EndIslands::new(7);
        assert!((a.sample(400, 400) - b.sample(400, 400)).abs() < 1e-12);
    }
}
