//! Region-grid → chunk offset arithmetic (§4.K) and the population-seed
//! variant used by decorator features (end gateways, geodes, wells).

use strata_utils::random::legacy_random::LegacyRandom;
use strata_utils::random::Random;

use super::config::StructureConfig;
use super::Pos;

/// The per-region LCG seed: `seed + rX·341873128712 + rZ·132897987541 +
/// salt`, scrambled by [`LegacyRandom::from_seed`] exactly as `new
/// Random(s)` scrambles its argument — so this function returns the
/// *unscrambled* sum and callers always reach it through
/// [`LegacyRandom::from_seed`], never XOR the multiplier in twice.
#[must_use]
pub fn region_seed(world_seed: i64, salt: i64, region_x: i64, region_z: i64) -> i64 {
    world_seed
        .wrapping_add(region_x.wrapping_mul(341_873_128_712))
        .wrapping_add(region_z.wrapping_mul(132_897_987_541))
        .wrapping_add(salt)
}

/// Draw one axis offset within `[0, chunk_range)`, averaging two draws for
/// `large` structures to bias toward the region's center (a triangular
/// rather than uniform distribution).
fn draw_offset(rng: &mut LegacyRandom, chunk_range: i32, large: bool) -> i32 {
    let a = rng.next_i32_bounded(chunk_range);
    if large {
        let b = rng.next_i32_bounded(chunk_range);
        (a + b) / 2
    } else {
        a
    }
}

/// Find the chunk a structure of `config` occupies within region
/// `(region_x, region_z)`, in block coordinates.
///
/// # Panics
/// If `config.region_size == 0` — that marks
/// [`crate::structures::StructureType::Stronghold`], which isn't
/// region-placed at all; see [`crate::structures::stronghold`].
#[must_use]
pub fn get_structure_pos(world_seed: i64, config: StructureConfig, region_x: i64, region_z: i64) -> Pos {
    assert!(config.region_size > 0, "this structure type has no region grid");

    let seed = region_seed(world_seed, config.salt, region_x, region_z);
    let mut rng = LegacyRandom::from_seed(seed);

    let chunk_x = draw_offset(&mut rng, config.chunk_range, config.large);
    let chunk_z = draw_offset(&mut rng, config.chunk_range, config.large);

    Pos::new(
        ((region_x * i64::from(config.region_size) + i64::from(chunk_x)) << 4) as i32,
        ((region_z * i64::from(config.region_size) + i64::from(chunk_z)) << 4) as i32,
    )
}

/// The region `(rX, rZ)` a block position falls into for a structure type
/// with the given region size, using floor division so negative
/// coordinates land in the region to their west/north rather than
/// truncating toward zero.
#[must_use]
pub fn region_of(block_x: i32, block_z: i32, region_size: i32) -> (i64, i64) {
    let chunk_x = i64::from(block_x >> 4);
    let chunk_z = i64::from(block_z >> 4);
    (
        chunk_x.div_euclid(i64::from(region_size)),
        chunk_z.div_euclid(i64::from(region_size)),
    )
}

/// The population seed for one chunk: two odd LCG draws from the world
/// seed, linearly combined with the chunk's block coordinates.
///
/// Decorator features (end gateways, amethyst geodes, desert wells) key
/// their own per-chunk RNG off this rather than a region grid, since they
/// can appear in every chunk rather than spaced ones.
#[must_use]
pub fn population_seed(world_seed: i64, block_x: i32, block_z: i32) -> i64 {
    let mut rng = LegacyRandom::from_seed(world_seed);
    let a = rng.next_i64() | 1;
    let b = rng.next_i64() | 1;
    (i64::from(block_x).wrapping_mul(a) ^ i64::from(block_z).wrapping_mul(b)) ^ world_seed
}

/// A decorator feature's per-chunk roll: `true` if the feature should
/// generate in this chunk, at the given `chance` in `[0, 1)`.
///
/// Used for amethyst geodes, desert wells, and other every-chunk-eligible
/// decorations keyed off [`population_seed`] rather than the region grid.
#[must_use]
pub fn decorator_feature_roll(world_seed: i64, block_x: i32, block_z: i32, salt: i64, chance: f64) -> bool {
    let seed = population_seed(world_seed, block_x, block_z) ^ salt;
    let mut rng = LegacyRandom::from_seed(seed);
    rng.next_f64() < chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::config::StructureType;

    #[test]
    fn structure_pos_is_deterministic() {
        let cfg = StructureType::Village.config();
        let a = get_structure_pos(12345, cfg, 0, 0);
        let b = get_structure_pos(12345, cfg, 0, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn structure_pos_stays_within_its_region() {
        let cfg = StructureType::Village.config();
        let pos = get_structure_pos(12345, cfg, 0, 0);
        let max_block = cfg.region_size * 16;
        assert!((0..max_block).contains(&pos.x));
        assert!((0..max_block).contains(&pos.z));
    }

    #[test]
    fn large_structure_uses_triangular_draw() {
        let cfg = StructureType::OceanMonument.config();
        assert!(cfg.large);
        let pos = get_structure_pos(1, cfg, 3, -2);
        let max_block = cfg.region_size * 16;
        let region_origin_x = (3 * cfg.region_size as i64 * 16) as i32;
        assert!((region_origin_x..region_origin_x + max_block).contains(&pos.x));
    }

    #[test]
    fn region_of_round_trips_for_positive_and_negative_coords() {
        assert_eq!(region_of(0, 0, 34), (0, 0));
        assert_eq!(region_of(-1, -1, 34), (-1, -1));
        assert_eq!(region_of(34 * 16, 0, 34), (1, 0));
    }

    #[test]
    fn population_seed_is_deterministic_and_seed_dependent() {
        let a = population_seed(1, 16, -16);
        let b = population_seed(1, 16, -16);
        assert_eq!(a, b);
        assert_ne!(a, population_seed(2, 16, -16));
    }

    #[test]
    fn decorator_roll_rate_is_plausible_over_many_chunks() {
        let hits = (0..2000)
            .filter(|&i| decorator_feature_roll(999, i * 16, 0, 0xABCD, 0.1))
            .count();
        assert!((100..400).contains(&hits), "unexpected hit rate: {hits}/2000");
    }
}
