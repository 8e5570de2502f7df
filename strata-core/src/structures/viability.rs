//! Structure viability (§4.L): biome allow-lists consulted at a
//! structure's chunk center, plus the handful of boolean/region
//! predicates (slime chunks, mineshafts, end islands) that don't fit the
//! region-grid model at all.

use crate::biome::BiomeId;
use crate::generator::Generator;
use crate::structures::config::{StructureConfig, StructureType};
use crate::structures::placement::{get_structure_pos, region_of};
use crate::structures::Pos;
use strata_utils::random::legacy_random::LegacyRandom;
use strata_utils::random::Random;

/// The horizontal scale a structure type's viability check samples the
/// biome at: most structures check at quart resolution (scale 4), End
/// City checks at scale 16 (its allow-list only cares about broad biome
/// category), and Fortress checks at block resolution (scale 1) since its
/// complement-of-Bastion rule needs the exact biome tree answer the
/// Bastion check used.
#[must_use]
pub const fn viability_scale(ty: StructureType) -> i32 {
    match ty {
        StructureType::EndCity => 16,
        StructureType::NetherFortress => 1,
        _ => 4,
    }
}

/// Whether `biome` is one this structure type is willing to generate in.
///
/// [`StructureType::NetherFortress`] is handled by
/// [`is_viable_structure_pos`] instead, via the Bastion-complement rule —
/// fortresses have no biome allow-list of their own.
#[must_use]
pub fn is_viable_feature_biome(ty: StructureType, biome: BiomeId) -> bool {
    match ty {
        StructureType::DesertPyramid => biome == BiomeId::DESERT,
        StructureType::JungleTemple => matches!(biome, BiomeId::JUNGLE | BiomeId::BAMBOO_JUNGLE),
        StructureType::SwampHut => matches!(biome, BiomeId::SWAMP),
        StructureType::Igloo => matches!(
            biome,
            BiomeId::SNOWY_PLAINS | BiomeId::SNOWY_TAIGA | BiomeId::ICE_SPIKES
        ),
        StructureType::Village => matches!(
            biome,
            BiomeId::PLAINS
                | BiomeId::DESERT
                | BiomeId::SAVANNA
                | BiomeId::TAIGA
                | BiomeId::SNOWY_PLAINS
                | BiomeId::MEADOW
        ),
        StructureType::OceanRuinWarm => matches!(
            biome,
            BiomeId::WARM_OCEAN | BiomeId::LUKEWARM_OCEAN | BiomeId::DEEP_LUKEWARM_OCEAN
        ),
        StructureType::OceanRuinCold => matches!(
            biome,
            BiomeId::OCEAN | BiomeId::COLD_OCEAN | BiomeId::DEEP_OCEAN | BiomeId::DEEP_COLD_OCEAN
        ),
        StructureType::Shipwreck => crate::biome::is_oceanic(biome) || biome == BiomeId::BEACH,
        StructureType::OceanMonument => crate::biome::is_deep_ocean(biome),
        StructureType::WoodlandMansion => matches!(
            biome,
            BiomeId::DARK_FOREST | BiomeId::DARK_FOREST_HILLS
        ),
        StructureType::PillagerOutpost => matches!(
            biome,
            BiomeId::PLAINS | BiomeId::DESERT | BiomeId::SAVANNA | BiomeId::TAIGA | BiomeId::SNOWY_PLAINS
        ),
        StructureType::RuinedPortalOverworld => !crate::biome::is_deep_ocean(biome),
        StructureType::RuinedPortalNether => matches!(
            biome,
            BiomeId::NETHER_WASTES
                | BiomeId::SOUL_SAND_VALLEY
                | BiomeId::CRIMSON_FOREST
                | BiomeId::WARPED_FOREST
                | BiomeId::BASALT_DELTAS
        ),
        StructureType::BastionRemnant => matches!(
            biome,
            BiomeId::NETHER_WASTES | BiomeId::SOUL_SAND_VALLEY | BiomeId::CRIMSON_FOREST | BiomeId::WARPED_FOREST
        ),
        StructureType::NetherFossil => biome == BiomeId::SOUL_SAND_VALLEY,
        StructureType::EndCity => matches!(
            biome,
            BiomeId::END_HIGHLANDS | BiomeId::END_MIDLANDS | BiomeId::SMALL_END_ISLANDS
        ),
        StructureType::AncientCity => biome == BiomeId::DEEP_DARK,
        StructureType::BuriedTreasure => biome == BiomeId::BEACH,
        StructureType::TrailRuins => matches!(
            biome,
            BiomeId::TAIGA | BiomeId::OLD_GROWTH_PINE_TAIGA | BiomeId::SNOWY_TAIGA
        ),
        StructureType::TrialChambers => true,
        StructureType::Mineshaft => true,
        StructureType::NetherFortress | StructureType::Stronghold => true,
    }
}

/// Whether a structure of type `ty` actually generates at its placed
/// region `(region_x, region_z)`: the placement math always returns *a*
/// chunk, but the game only keeps it if the biome at its center passes
/// [`is_viable_feature_biome`] (or, for fortresses, the Bastion-complement
/// rule).
///
/// # Errors
/// Propagates [`crate::error::GenError`] from the generator's biome
/// sampling (invalid scale, out-of-range Y).
pub fn is_viable_structure_pos(
    ty: StructureType,
    generator: &Generator,
    world_seed: i64,
    region_x: i64,
    region_z: i64,
) -> crate::error::Result<bool> {
    if ty == StructureType::NetherFortress {
        // Fortresses occupy the complement of Bastions within a region:
        // check Bastion viability first, and a fortress is only viable
        // where a Bastion is not.
        let bastion_viable = is_viable_structure_pos(
            StructureType::BastionRemnant,
            generator,
            world_seed,
            region_x,
            region_z,
        )?;
        return Ok(!bastion_viable);
    }

    let cfg: StructureConfig = ty.config();
    let pos: Pos = get_structure_pos(world_seed, cfg, region_x, region_z);
    let scale = viability_scale(ty);
    let biome = generator.get_biome_at(
        scale,
        pos.x.div_euclid(scale),
        0,
        pos.z.div_euclid(scale),
    )?;
    Ok(is_viable_feature_biome(ty, biome))
}

/// Find the region a block position falls into for `ty` and check its
/// viability — the caller-facing counterpart of
/// [`is_viable_structure_pos`] for callers that start from a block
/// position rather than a region index.
///
/// # Errors
/// See [`is_viable_structure_pos`].
pub fn is_viable_structure_pos_at(
    ty: StructureType,
    generator: &Generator,
    world_seed: i64,
    block_x: i32,
    block_z: i32,
) -> crate::error::Result<bool> {
    let (rx, rz) = region_of(block_x, block_z, ty.config().region_size.max(1));
    is_viable_structure_pos(ty, generator, world_seed, rx, rz)
}

/// Whether `(chunk_x, chunk_z)` is a slime chunk for `world_seed`: the
/// well-known public formula, a one-in-ten chance per chunk independent
/// of the region grid.
#[must_use]
pub fn is_slime_chunk(world_seed: i64, chunk_x: i32, chunk_z: i32) -> bool {
    let cx = i64::from(chunk_x);
    let cz = i64::from(chunk_z);
    let seed = world_seed
        .wrapping_add(cx.wrapping_mul(cx).wrapping_mul(0x4c1906))
        .wrapping_add(cx.wrapping_mul(0x5ac0db))
        .wrapping_add(cz.wrapping_mul(cz).wrapping_mul(0x4307a7))
        .wrapping_add(cz.wrapping_mul(0x5f24f))
        ^ 0x3ad8025f;
    let mut rng = LegacyRandom::from_seed(seed);
    rng.next_i32_bounded(10) == 0
}

/// Scan `[chunk_x, chunk_x + width) x [chunk_z, chunk_z + length)` for
/// mineshaft seams, returning the chunk coordinates that hold one.
///
/// Mineshafts don't use the region grid (they're dense enough to appear
/// in most chunks): each chunk independently rolls a legacy LCG seeded
/// from its own [`crate::structures::population_seed`] against a fixed
/// base rarity.
#[must_use]
pub fn get_mineshafts(world_seed: i64, chunk_x: i32, chunk_z: i32, width: i32, length: i32) -> Vec<(i32, i32)> {
    const BASE_RARITY: f64 = 0.004;
    let mut out = Vec::new();
    for dz in 0..length {
        for dx in 0..width {
            let cx = chunk_x + dx;
            let cz = chunk_z + dz;
            let seed = crate::structures::placement::population_seed(world_seed, cx << 4, cz << 4)
                ^ StructureType::Mineshaft.config().salt;
            let mut rng = LegacyRandom::from_seed(seed);
            if rng.next_f64() < BASE_RARITY {
                out.push((cx, cz));
            }
        }
    }
    out
}

/// Scan `[chunk_x, chunk_x + width) x [chunk_z, chunk_z + length)` of End
/// chunks for ones the outer-island noise considers land (the elytra-loot
/// "small end islands" scatter, not the four named biome bands), via
/// [`crate::end::height_noise`].
#[must_use]
pub fn get_end_islands(
    islands: &crate::end::EndIslands,
    chunk_x: i32,
    chunk_z: i32,
    width: i32,
    length: i32,
) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for dz in 0..length {
        for dx in 0..width {
            let cx = chunk_x + dx;
            let cz = chunk_z + dz;
            if cx * cx + cz * cz <= 4096 {
                continue;
            }
            let block_x = (cx * 2 + 1) * 8;
            let block_z = (cz * 2 + 1) * 8;
            if crate::end::height_noise(islands, block_x, block_z) > 0.0 {
                out.push((cx, cz));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{Dimension, McVersion};

    #[test]
    fn desert_pyramid_only_wants_desert() {
        assert!(is_viable_feature_biome(StructureType::DesertPyramid, BiomeId::DESERT));
        assert!(!is_viable_feature_biome(StructureType::DesertPyramid, BiomeId::PLAINS));
    }

    #[test]
    fn ancient_city_only_wants_deep_dark() {
        assert!(is_viable_feature_biome(StructureType::AncientCity, BiomeId::DEEP_DARK));
        assert!(!is_viable_feature_biome(StructureType::AncientCity, BiomeId::PLAINS));
    }

    #[test]
    fn slime_chunk_rate_is_plausible_over_10000_chunks() {
        let mut count = 0;
        for x in 0..100 {
            for z in 0..100 {
                if is_slime_chunk(12345, x, z) {
                    count += 1;
                }
            }
        }
        assert!((500..1500).contains(&count), "slime chunk count out of range: {count}");
    }

    #[test]
    fn slime_chunk_is_deterministic() {
        assert_eq!(is_slime_chunk(42, 3, -7), is_slime_chunk(42, 3, -7));
    }

    #[test]
    fn fortress_viability_is_bastion_complement() {
        let gen = Generator::new(1, McVersion::NEWEST, Dimension::Nether).unwrap();
        let bastion = is_viable_structure_pos(StructureType::BastionRemnant, &gen, 1, 0, 0).unwrap();
        let fortress = is_viable_structure_pos(StructureType::NetherFortress, &gen, 1, 0, 0).unwrap();
        assert_eq!(fortress, !bastion);
    }

    #[test]
    fn mineshaft_scan_is_deterministic() {
        let a = get_mineshafts(7, 0, 0, 20, 20);
        let b = get_mineshafts(7, 0, 0, 20, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn end_islands_scan_excludes_the_central_island() {
        let islands = crate::end::EndIslands::new(1);
        let hits = get_end_islands(&islands, -2, -2, 4, 4);
        assert!(!hits.contains(&(0, 0)));
    }
}
