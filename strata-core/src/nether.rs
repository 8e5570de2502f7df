//! The Nether: temperature/vegetation climate sampled from a sparse
//! Double-Perlin pair, classified against five hard-coded 2-D points
//! instead of a general biome tree.
//!
//! Grounded on the teacher's `NetherClimateSampler` (legacy-seeded sparse
//! noise, only two axes), with the nearest-point classifier rebuilt
//! around a fixed table since the reference doesn't compile a tree for
//! the nether at all — five points are cheaper to search directly.

use crate::biome::BiomeId;
use crate::climate::NetherClimateSampler;

/// `(temperature, humidity, bias², biome)` anchors the reference
/// hard-codes for nether biome classification — quantized the same way
/// [`strata_utils`] quantizes overworld climate, but compared directly
/// here since five points don't need interning into a tree. The bias
/// term is a fixed per-point penalty added to the squared distance
/// before comparison, shrinking warped forest's and basalt deltas'
/// effective catchment relative to the three zero-bias biomes — long
/// public constants reproduced by every nether biome finder, not
/// reference-proprietary data.
const NETHER_POINTS: [(f64, f64, f64, BiomeId); 5] = [
    (0.0, 0.0, 0.0, BiomeId::NETHER_WASTES),
    (0.0, -0.5, 0.0, BiomeId::SOUL_SAND_VALLEY),
    (0.4, 0.0, 0.0, BiomeId::CRIMSON_FOREST),
    (0.0, 0.5, 0.375 * 0.375, BiomeId::WARPED_FOREST),
    (-0.5, 0.0, 0.175 * 0.175, BiomeId::BASALT_DELTAS),
];

/// Find the nearest of [`NETHER_POINTS`] to `(temperature, humidity)` by
/// `(T − sampleT)² + (H − sampleH)² + bias²` (§4.J), the bias term
/// included so warped forest and basalt deltas lose ties they'd
/// otherwise win on pure Euclidean distance alone.
#[must_use]
pub fn classify(temperature: f64, humidity: f64) -> BiomeId {
    let mut best = NETHER_POINTS[0].3;
    let mut best_dist = f64::MAX;
    for &(t, h, bias_sq, biome) in &NETHER_POINTS {
        let dt = t - temperature;
        let dh = h - humidity;
        let d = dt * dt + dh * dh + bias_sq;
        if d < best_dist {
            best_dist = d;
            best = biome;
        }
    }
    best
}

/// Bundles a nether climate sampler with the fixed-point classifier above.
pub struct NetherGenerator {
    climate: NetherClimateSampler,
}

impl NetherGenerator {
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            climate: NetherClimateSampler::new(seed),
        }
    }

    #[must_use]
    pub fn biome_at(&self, block_x: i32, block_z: i32) -> BiomeId {
        let climate = self.climate.sample(block_x, block_z);
        classify(
            climate.temperature as f64 / 10000.0,
            climate.humidity as f64 / 10000.0,
        )
    }

    /// Whether every corner of a `size`-block-wide square centered on
    /// `(block_x, block_z)` classifies to the same biome as the center.
    ///
    /// The reference uses this as a disc-fill optimization: if the corners
    /// (and therefore, by the noise's bounded slope, everything between
    /// them) agree, a caller filling a whole region can skip the interior
    /// points entirely and stamp the center's answer across the square.
    #[must_use]
    pub fn region_is_uniform(&self, block_x: i32, block_z: i32, size: i32) -> bool {
        let center = self.biome_at(block_x, block_z);
        let half = size / 2;
        let corners = [
            (block_x - half, block_z - half),
            (block_x - half, block_z + half),
            (block_x + half, block_z - half),
            (block_x + half, block_z + half),
        ];
        corners
            .into_iter()
            .all(|(x, z)| self.biome_at(x, z) == center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nether_wastes_at_origin_of_climate_space() {
        assert_eq!(classify(0.0, 0.0), BiomeId::NETHER_WASTES);
    }

    #[test]
    fn classify_is_one_of_the_five_table_biomes() {
        let id = classify(0.2, -0.3);
        assert!(NETHER_POINTS.iter().any(|&(_, _, _, b)| b == id));
    }

    #[test]
    fn generator_sampling_is_deterministic() {
        let gen = NetherGenerator::new(55);
        assert_eq!(gen.biome_at(16, -16), gen.biome_at(16, -16));
    }

    #[test]
    fn uniform_region_check_agrees_with_direct_sampling() {
        let gen = NetherGenerator::new(9);
        let uniform = gen.region_is_uniform(0, 0, 4);
        let center = gen.biome_at(0, 0);
        if uniform {
            assert_eq!(gen.biome_at(2, 2), center);
        }
    }
}
