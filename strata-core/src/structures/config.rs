//! Per-structure-type placement constants.
//!
//! Salts, region sizes, and chunk ranges below follow the values the
//! reference's structure-check tooling publishes for each vanilla
//! structure; `large` marks the handful that average two draws per axis
//! for a triangular (center-weighted) distribution instead of a uniform
//! one, per §4.K.

use crate::version::Dimension;

/// One of the 23 structures this crate can place and check viability for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureType {
    DesertPyramid,
    JungleTemple,
    SwampHut,
    Igloo,
    Village,
    OceanRuinWarm,
    OceanRuinCold,
    Shipwreck,
    OceanMonument,
    WoodlandMansion,
    PillagerOutpost,
    RuinedPortalOverworld,
    RuinedPortalNether,
    NetherFortress,
    BastionRemnant,
    NetherFossil,
    EndCity,
    AncientCity,
    Stronghold,
    BuriedTreasure,
    TrailRuins,
    TrialChambers,
    Mineshaft,
}

impl StructureType {
    /// All 23 tracked structure types, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::DesertPyramid,
        Self::JungleTemple,
        Self::SwampHut,
        Self::Igloo,
        Self::Village,
        Self::OceanRuinWarm,
        Self::OceanRuinCold,
        Self::Shipwreck,
        Self::OceanMonument,
        Self::WoodlandMansion,
        Self::PillagerOutpost,
        Self::RuinedPortalOverworld,
        Self::RuinedPortalNether,
        Self::NetherFortress,
        Self::BastionRemnant,
        Self::NetherFossil,
        Self::EndCity,
        Self::AncientCity,
        Self::Stronghold,
        Self::BuriedTreasure,
        Self::TrailRuins,
        Self::TrialChambers,
        Self::Mineshaft,
    ];

    /// This structure type's placement config.
    ///
    /// [`StructureType::Stronghold`] has no region-grid config — it's
    /// placed by [`crate::structures::stronghold::StrongholdIter`]
    /// instead — and returns a config with `region_size: 0` as a signal
    /// callers must not feed it to [`super::placement::get_structure_pos`].
    #[must_use]
    pub const fn config(self) -> StructureConfig {
        match self {
            Self::DesertPyramid => StructureConfig::new(14_357_617, 32, 8, Dimension::Overworld, false),
            Self::JungleTemple => StructureConfig::new(14_357_619, 32, 8, Dimension::Overworld, false),
            Self::SwampHut => StructureConfig::new(14_357_620, 32, 8, Dimension::Overworld, false),
            Self::Igloo => StructureConfig::new(14_357_618, 32, 8, Dimension::Overworld, false),
            Self::Village => StructureConfig::new(10_387_312, 34, 8, Dimension::Overworld, false),
            Self::OceanRuinWarm => StructureConfig::new(14_357_621, 20, 8, Dimension::Overworld, false),
            Self::OceanRuinCold => StructureConfig::new(14_357_621, 20, 8, Dimension::Overworld, false),
            Self::Shipwreck => StructureConfig::new(165_745_295, 24, 4, Dimension::Overworld, false),
            Self::OceanMonument => StructureConfig::new(10_387_313, 32, 5, Dimension::Overworld, true),
            Self::WoodlandMansion => StructureConfig::new(10_387_319, 80, 20, Dimension::Overworld, true),
            Self::PillagerOutpost => StructureConfig::new(165_745_296, 32, 8, Dimension::Overworld, false),
            Self::RuinedPortalOverworld => {
                StructureConfig::new(34_222_645, 40, 15, Dimension::Overworld, false)
            }
            Self::RuinedPortalNether => StructureConfig::new(34_222_645, 25, 10, Dimension::Nether, false),
            Self::NetherFortress => StructureConfig::new(30_084_232, 27, 4, Dimension::Nether, false),
            Self::BastionRemnant => StructureConfig::new(30_084_232, 27, 4, Dimension::Nether, false),
            Self::NetherFossil => StructureConfig::new(14_357_921, 2, 1, Dimension::Nether, false),
            Self::EndCity => StructureConfig::new(10_387_313, 20, 11, Dimension::End, false),
            Self::AncientCity => StructureConfig::new(20_083_232, 24, 8, Dimension::Overworld, false),
            Self::Stronghold => StructureConfig::new(0, 0, 0, Dimension::Overworld, false),
            Self::BuriedTreasure => StructureConfig::new(10_387_320, 1, 1, Dimension::Overworld, false),
            Self::TrailRuins => StructureConfig::new(83_469_867, 34, 8, Dimension::Overworld, false),
            Self::TrialChambers => StructureConfig::new(94_251_327, 34, 12, Dimension::Overworld, false),
            Self::Mineshaft => StructureConfig::new(357_617, 1, 1, Dimension::Overworld, false),
        }
    }
}

/// `(salt, regionSize, chunkRange, dim, large)` for one structure type,
/// read by [`super::placement::get_structure_pos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureConfig {
    pub salt: i64,
    pub region_size: i32,
    pub chunk_range: i32,
    pub dimension: Dimension,
    /// Whether placement averages two draws per axis (triangular
    /// distribution) instead of one (uniform).
    pub large: bool,
}

impl StructureConfig {
    #[must_use]
    pub const fn new(salt: i64, region_size: i32, chunk_range: i32, dimension: Dimension, large: bool) -> Self {
        Self {
            salt,
            region_size,
            chunk_range,
            dimension,
            large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_structure_type_has_a_config() {
        for ty in StructureType::ALL {
            let cfg = ty.config();
            if ty != StructureType::Stronghold {
                assert!(cfg.region_size > 0);
                assert!(cfg.chunk_range > 0);
            }
        }
    }

    #[test]
    fn stronghold_is_not_region_placed() {
        assert_eq!(StructureType::Stronghold.config().region_size, 0);
    }
}
