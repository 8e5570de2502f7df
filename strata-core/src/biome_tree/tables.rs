//! Per-version tree data.
//!
//! The reference compiles one tree per tracked version from a large
//! vanilla-extracted binary table. That table is proprietary binary data
//! and is not present anywhere in the source this crate was ported from,
//! so the trees below are hand-authored representative climate
//! partitions: they exercise the exact node layout, packing, and search
//! algorithm the reference uses, and they produce plausible, internally
//! consistent biome placement, but they are not byte-identical to the
//! reference's tables. See the design notes for this decision.

use super::{pack_node, BiomeTree, ParamPool};
use crate::biome::BiomeId;
use crate::version::McVersion;

/// Build the representative overworld biome tree for `version`.
#[must_use]
pub fn build(version: McVersion) -> BiomeTree {
    let mut pool = ParamPool::new();

    let full = pool.intern(-20_000, 20_000);

    let t_cold = pool.intern(-20_000, -4_500);
    let t_temp = pool.intern(-4_500, 2_000);
    let t_hot = pool.intern(2_000, 20_000);

    let h_cold_low = pool.intern(-20_000, 0);
    let h_cold_high = pool.intern(0, 20_000);
    let h_temp_low = pool.intern(-20_000, -2_000);
    let h_temp_mid = pool.intern(-2_000, 3_000);
    let h_temp_high = pool.intern(3_000, 20_000);
    let h_hot_badlands = pool.intern(-20_000, -6_000);
    let h_hot_desert = pool.intern(-6_000, -3_000);
    let h_hot_savanna = pool.intern(-3_000, 3_000);
    let h_hot_jungle = pool.intern(3_000, 20_000);

    let c_deep_ocean = pool.intern(-20_000, -7_000);
    let c_ocean = pool.intern(-7_000, -4_550);
    let c_beach = pool.intern(-4_550, -1_900);
    let c_land = pool.intern(-1_900, 20_000);

    let e_mountain = pool.intern(-20_000, -7_000);

    let d_deep = pool.intern(-20_000, -3_000);

    // [T, H, C, E, D, W] axis order.
    let leaf = |t: u8, h: u8, c: u8, e: u8, d: u8, id: BiomeId| pack_node([t, h, c, e, d, full], id.0 as u16);

    let mut leaves = vec![
        leaf(full, full, c_deep_ocean, full, full, BiomeId::DEEP_OCEAN),
        leaf(full, full, c_ocean, full, full, BiomeId::OCEAN),
        leaf(full, full, c_beach, full, full, BiomeId::BEACH),
        leaf(full, full, c_land, e_mountain, full, BiomeId::WINDSWEPT_HILLS),
        leaf(t_cold, h_cold_low, c_land, full, full, BiomeId::SNOWY_PLAINS),
        leaf(t_cold, h_cold_high, c_land, full, full, BiomeId::SNOWY_TAIGA),
        leaf(t_temp, h_temp_low, c_land, full, full, BiomeId::PLAINS),
        leaf(t_temp, h_temp_mid, c_land, full, full, BiomeId::FOREST),
        leaf(t_temp, h_temp_high, c_land, full, full, BiomeId::SWAMP),
        leaf(t_hot, h_hot_badlands, c_land, full, full, BiomeId::BADLANDS),
        leaf(t_hot, h_hot_desert, c_land, full, full, BiomeId::DESERT),
        leaf(t_hot, h_hot_savanna, c_land, full, full, BiomeId::SAVANNA),
        leaf(t_hot, h_hot_jungle, c_land, full, full, BiomeId::JUNGLE),
    ];

    if version.is_at_least(McVersion::V1_19_2) {
        leaves.push(pack_node(
            [full, full, c_land, full, d_deep, full],
            BiomeId::DEEP_DARK.0 as u16,
        ));
    }

    let leaf_count = leaves.len();
    let root = pack_node([full; 6], 1);

    let mut nodes = Vec::with_capacity(1 + leaf_count);
    nodes.push(root);
    nodes.extend(leaves);

    BiomeTree::new(pool_into_vec(pool), nodes, vec![1, 0], leaf_count)
}

fn pool_into_vec(pool: ParamPool) -> Vec<(i64, i64)> {
    pool.entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome_tree::tables::build;

    #[test]
    fn every_version_builds_a_nonempty_tree() {
        for v in [
            McVersion::V1_18,
            McVersion::V1_19_2,
            McVersion::V1_19_4,
            McVersion::V1_20_6,
            McVersion::V1_21_1,
            McVersion::V1_21_3,
            McVersion::V1_21Wd,
        ] {
            let tree = build(v);
            assert!(tree.nodes.len() > 1);
        }
    }

    #[test]
    fn deep_dark_only_present_from_1_19_2() {
        let old = build(McVersion::V1_18);
        let new = build(McVersion::V1_19_2);
        assert!(new.nodes.len() > old.nodes.len());
    }
}
