//! Biome identifiers and the static predicates (oceanic, snowy, mesa, ...)
//! used by structure viability and the Voronoi-adjacent classifiers.
//!
//! Ids and discriminants follow the reference's numbering exactly,
//! including ids for biomes later removed from worldgen (kept so that a
//! saved seed's ids never shift) and the `+128` "mutated variant" ids
//! produced by some scale-4 callers.

use crate::version::McVersion;

/// A biome identifier. A thin wrapper over the reference's integer ids
/// rather than a field-less enum — the id space is sparse (gaps at
/// 51..126, legacy ids kept for numbering continuity, `+128` variants)
/// and callers often want to carry an id through without matching on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BiomeId(pub i32);

impl BiomeId {
    pub const NONE: Self = Self(-1);

    pub const OCEAN: Self = Self(0);
    pub const PLAINS: Self = Self(1);
    pub const DESERT: Self = Self(2);
    pub const WINDSWEPT_HILLS: Self = Self(3);
    pub const FOREST: Self = Self(4);
    pub const TAIGA: Self = Self(5);
    pub const SWAMP: Self = Self(6);
    pub const RIVER: Self = Self(7);
    pub const NETHER_WASTES: Self = Self(8);
    pub const THE_END: Self = Self(9);
    pub const FROZEN_OCEAN: Self = Self(10);
    pub const FROZEN_RIVER: Self = Self(11);
    pub const SNOWY_PLAINS: Self = Self(12);
    pub const SNOWY_MOUNTAINS: Self = Self(13);
    pub const MUSHROOM_FIELDS: Self = Self(14);
    pub const MUSHROOM_FIELD_SHORE: Self = Self(15);
    pub const BEACH: Self = Self(16);
    pub const DESERT_HILLS: Self = Self(17);
    pub const WOODED_HILLS: Self = Self(18);
    pub const TAIGA_HILLS: Self = Self(19);
    pub const MOUNTAIN_EDGE: Self = Self(20);
    pub const JUNGLE: Self = Self(21);
    pub const JUNGLE_HILLS: Self = Self(22);
    pub const SPARSE_JUNGLE: Self = Self(23);
    pub const DEEP_OCEAN: Self = Self(24);
    pub const STONY_SHORE: Self = Self(25);
    pub const SNOWY_BEACH: Self = Self(26);
    pub const BIRCH_FOREST: Self = Self(27);
    pub const BIRCH_FOREST_HILLS: Self = Self(28);
    pub const DARK_FOREST: Self = Self(29);
    pub const SNOWY_TAIGA: Self = Self(30);
    pub const SNOWY_TAIGA_HILLS: Self = Self(31);
    pub const OLD_GROWTH_PINE_TAIGA: Self = Self(32);
    pub const GIANT_TREE_TAIGA_HILLS: Self = Self(33);
    pub const WINDSWEPT_FOREST: Self = Self(34);
    pub const SAVANNA: Self = Self(35);
    pub const SAVANNA_PLATEAU: Self = Self(36);
    pub const BADLANDS: Self = Self(37);
    pub const WOODED_BADLANDS_PLATEAU: Self = Self(38);
    pub const BADLANDS_PLATEAU: Self = Self(39);
    pub const SMALL_END_ISLANDS: Self = Self(40);
    pub const END_MIDLANDS: Self = Self(41);
    pub const END_HIGHLANDS: Self = Self(42);
    pub const END_BARRENS: Self = Self(43);
    pub const WARM_OCEAN: Self = Self(44);
    pub const LUKEWARM_OCEAN: Self = Self(45);
    pub const COLD_OCEAN: Self = Self(46);
    pub const DEEP_WARM_OCEAN: Self = Self(47);
    pub const DEEP_LUKEWARM_OCEAN: Self = Self(48);
    pub const DEEP_COLD_OCEAN: Self = Self(49);
    pub const DEEP_FROZEN_OCEAN: Self = Self(50);

    pub const THE_VOID: Self = Self(127);

    pub const SUNFLOWER_PLAINS: Self = Self(129);
    pub const DESERT_LAKES: Self = Self(130);
    pub const GRAVELLY_MOUNTAINS: Self = Self(131);
    pub const FLOWER_FOREST: Self = Self(132);
    pub const TAIGA_MOUNTAINS: Self = Self(133);
    pub const SWAMP_HILLS: Self = Self(134);
    pub const ICE_SPIKES: Self = Self(140);
    pub const MODIFIED_JUNGLE: Self = Self(149);
    pub const MODIFIED_JUNGLE_EDGE: Self = Self(151);
    pub const TALL_BIRCH_FOREST: Self = Self(155);
    pub const TALL_BIRCH_HILLS: Self = Self(156);
    pub const DARK_FOREST_HILLS: Self = Self(157);
    pub const SNOWY_TAIGA_MOUNTAINS: Self = Self(158);
    pub const GIANT_SPRUCE_TAIGA: Self = Self(160);
    pub const GIANT_SPRUCE_TAIGA_HILLS: Self = Self(161);
    pub const MODIFIED_GRAVELLY_MOUNTAINS: Self = Self(162);
    pub const SHATTERED_SAVANNA: Self = Self(163);
    pub const SHATTERED_SAVANNA_PLATEAU: Self = Self(164);
    pub const ERODED_BADLANDS: Self = Self(165);
    pub const MODIFIED_WOODED_BADLANDS_PLATEAU: Self = Self(166);
    pub const MODIFIED_BADLANDS_PLATEAU: Self = Self(167);

    pub const BAMBOO_JUNGLE: Self = Self(168);
    pub const BAMBOO_JUNGLE_HILLS: Self = Self(169);
    pub const SOUL_SAND_VALLEY: Self = Self(170);
    pub const CRIMSON_FOREST: Self = Self(171);
    pub const WARPED_FOREST: Self = Self(172);
    pub const BASALT_DELTAS: Self = Self(173);
    pub const DRIPSTONE_CAVES: Self = Self(174);
    pub const LUSH_CAVES: Self = Self(175);
    pub const MEADOW: Self = Self(177);
    pub const GROVE: Self = Self(178);
    pub const SNOWY_SLOPES: Self = Self(179);
    pub const JAGGED_PEAKS: Self = Self(180);
    pub const FROZEN_PEAKS: Self = Self(181);
    pub const STONY_PEAKS: Self = Self(182);
    pub const DEEP_DARK: Self = Self(183);
    pub const MANGROVE_SWAMP: Self = Self(184);
    pub const CHERRY_GROVE: Self = Self(185);
    pub const PALE_GARDEN: Self = Self(186);

    /// `+128` mutated-variant id, if this biome id is less than 128.
    #[must_use]
    pub fn mutated(self) -> Self {
        Self(self.0 + 128)
    }
}

/// Whether `id` is a real biome in `version` (gates version-introduced ids
/// like [`BiomeId::DEEP_DARK`] and version-removed legacy ids).
#[must_use]
pub fn biome_exists(version: McVersion, id: BiomeId) -> bool {
    match id {
        BiomeId::DEEP_DARK | BiomeId::MANGROVE_SWAMP => version.is_at_least(McVersion::V1_19_2),
        BiomeId::CHERRY_GROVE => version.is_at_least(McVersion::V1_20_6),
        BiomeId::PALE_GARDEN => version.is_at_least(McVersion::V1_21Wd),
        _ => (0..=186).contains(&id.0) && id.0 != 176,
    }
}

/// Whether `id` can appear in the Overworld's biome tree (excludes nether
/// and end biomes, which live in their own engines).
#[must_use]
pub fn is_overworld(version: McVersion, id: BiomeId) -> bool {
    biome_exists(version, id)
        && !matches!(
            id,
            BiomeId::NETHER_WASTES
                | BiomeId::SOUL_SAND_VALLEY
                | BiomeId::CRIMSON_FOREST
                | BiomeId::WARPED_FOREST
                | BiomeId::BASALT_DELTAS
                | BiomeId::THE_END
                | BiomeId::SMALL_END_ISLANDS
                | BiomeId::END_MIDLANDS
                | BiomeId::END_HIGHLANDS
                | BiomeId::END_BARRENS
        )
}

#[must_use]
pub fn get_dimension(id: BiomeId) -> crate::version::Dimension {
    use crate::version::Dimension;
    match id {
        BiomeId::NETHER_WASTES
        | BiomeId::SOUL_SAND_VALLEY
        | BiomeId::CRIMSON_FOREST
        | BiomeId::WARPED_FOREST
        | BiomeId::BASALT_DELTAS => Dimension::Nether,
        BiomeId::THE_END
        | BiomeId::SMALL_END_ISLANDS
        | BiomeId::END_MIDLANDS
        | BiomeId::END_HIGHLANDS
        | BiomeId::END_BARRENS => Dimension::End,
        _ => Dimension::Overworld,
    }
}

#[must_use]
pub fn is_oceanic(id: BiomeId) -> bool {
    matches!(
        id,
        BiomeId::OCEAN
            | BiomeId::FROZEN_OCEAN
            | BiomeId::DEEP_OCEAN
            | BiomeId::WARM_OCEAN
            | BiomeId::LUKEWARM_OCEAN
            | BiomeId::COLD_OCEAN
            | BiomeId::DEEP_WARM_OCEAN
            | BiomeId::DEEP_LUKEWARM_OCEAN
            | BiomeId::DEEP_COLD_OCEAN
            | BiomeId::DEEP_FROZEN_OCEAN
    )
}

#[must_use]
pub fn is_shallow_ocean(id: BiomeId) -> bool {
    matches!(
        id,
        BiomeId::OCEAN
            | BiomeId::FROZEN_OCEAN
            | BiomeId::WARM_OCEAN
            | BiomeId::LUKEWARM_OCEAN
            | BiomeId::COLD_OCEAN
    )
}

#[must_use]
pub fn is_deep_ocean(id: BiomeId) -> bool {
    is_oceanic(id) && !is_shallow_ocean(id)
}

#[must_use]
pub fn is_snowy(id: BiomeId) -> bool {
    matches!(
        id,
        BiomeId::SNOWY_PLAINS
            | BiomeId::SNOWY_MOUNTAINS
            | BiomeId::SNOWY_BEACH
            | BiomeId::SNOWY_TAIGA
            | BiomeId::SNOWY_TAIGA_HILLS
            | BiomeId::SNOWY_TAIGA_MOUNTAINS
            | BiomeId::FROZEN_OCEAN
            | BiomeId::FROZEN_RIVER
            | BiomeId::ICE_SPIKES
            | BiomeId::DEEP_FROZEN_OCEAN
            | BiomeId::GROVE
            | BiomeId::SNOWY_SLOPES
            | BiomeId::JAGGED_PEAKS
            | BiomeId::FROZEN_PEAKS
    )
}

#[must_use]
pub fn is_mesa(id: BiomeId) -> bool {
    matches!(
        id,
        BiomeId::BADLANDS
            | BiomeId::WOODED_BADLANDS_PLATEAU
            | BiomeId::BADLANDS_PLATEAU
            | BiomeId::ERODED_BADLANDS
            | BiomeId::MODIFIED_WOODED_BADLANDS_PLATEAU
            | BiomeId::MODIFIED_BADLANDS_PLATEAU
    )
}

/// Whether `a` and `b` should be treated as interchangeable for the
/// purposes of structure-spacing "don't place near a similar biome"
/// checks: identical ids, or one is the `+128` mutated variant of the
/// other.
#[must_use]
pub fn are_similar(version: McVersion, a: BiomeId, b: BiomeId) -> bool {
    if a == b {
        return true;
    }
    if !biome_exists(version, a) || !biome_exists(version, b) {
        return false;
    }
    let base = |id: BiomeId| if id.0 >= 128 { BiomeId(id.0 - 128) } else { id };
    base(a) == base(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_dark_gated_by_version() {
        assert!(!biome_exists(McVersion::V1_18, BiomeId::DEEP_DARK));
        assert!(biome_exists(McVersion::V1_19_2, BiomeId::DEEP_DARK));
    }

    #[test]
    fn oceanic_predicates_partition_correctly() {
        assert!(is_shallow_ocean(BiomeId::OCEAN));
        assert!(!is_deep_ocean(BiomeId::OCEAN));
        assert!(is_deep_ocean(BiomeId::DEEP_OCEAN));
        assert!(!is_oceanic(BiomeId::PLAINS));
    }

    #[test]
    fn mutated_variant_is_similar_to_base() {
        assert!(are_similar(
            McVersion::NEWEST,
            BiomeId::PLAINS,
            BiomeId::SUNFLOWER_PLAINS
        ));
        assert!(!are_similar(
            McVersion::NEWEST,
            BiomeId::PLAINS,
            BiomeId::DESERT
        ));
    }

    #[test]
    fn overworld_excludes_nether_and_end() {
        assert!(is_overworld(McVersion::NEWEST, BiomeId::PLAINS));
        assert!(!is_overworld(McVersion::NEWEST, BiomeId::NETHER_WASTES));
        assert!(!is_overworld(McVersion::NEWEST, BiomeId::THE_END));
    }
}
