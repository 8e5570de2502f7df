//! The scaled-volume generator: the entry point that ties climate
//! sampling, the Voronoi upsampler, and the biome tree together into
//! "what biome is at this coordinate, at this resolution".
//!
//! Grounded on the teacher's `OverworldBiomeSource`/`ChunkBiomeSampler`
//! split — a long-lived source holding the seeded noise state, and a
//! cheap per-call path that reuses it — generalized from per-chunk quart
//! sampling to an arbitrary caller-chosen scale and volume.

use rayon::prelude::*;

use crate::biome::BiomeId;
use crate::biome_tree::{self, BiomeTree};
use crate::climate::{ClimateSampler, NetherClimateSampler};
use crate::error::{GenError, Result};
use crate::version::{Dimension, McVersion};
use crate::voronoi::{self, VoronoiKey};

/// The horizontal/vertical scales the generator supports: 1 (block), 4
/// (quart, the overworld's native climate resolution), 16 (biome-chunk),
/// 64, and 256 (region-level preview).
pub const VALID_SCALES: [i32; 5] = [1, 4, 16, 64, 256];

/// A rectangular column range to fill, plus a vertical slice, all in
/// units of `scale` blocks.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub scale: i32,
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub length: i32,
    pub y: i32,
    pub height: i32,
}

impl Range {
    #[must_use]
    pub fn new(scale: i32, x: i32, z: i32, width: i32, length: i32, y: i32, height: i32) -> Self {
        Self {
            scale,
            x,
            z,
            width,
            length,
            y,
            height,
        }
    }

    #[must_use]
    pub fn volume(&self) -> usize {
        (self.width as usize) * (self.length as usize) * (self.height as usize)
    }
}

/// A seeded, version-pinned biome generator. Immutable after construction
/// and safe to share across threads — every sampling method only reads
/// the noise/tree state built in [`Generator::new`].
pub struct Generator {
    seed: i64,
    version: McVersion,
    dimension: Dimension,
    overworld_climate: Option<ClimateSampler>,
    nether_climate: Option<NetherClimateSampler>,
    end_islands: Option<crate::end::EndIslands>,
    tree: BiomeTree,
    voronoi: Option<VoronoiKey>,
}

impl Generator {
    /// Build a generator for one seed, version, and dimension.
    ///
    /// # Errors
    /// Returns [`GenError::UnsupportedVersion`] if no biome tree can be
    /// compiled for `version` (never actually fails for the versions this
    /// crate tracks; kept as a real error path for forward compatibility).
    pub fn new(seed: i64, version: McVersion, dimension: Dimension) -> Result<Self> {
        let tree = biome_tree::tables::build(version);
        if tree.is_empty() {
            return Err(GenError::UnsupportedVersion(version));
        }
        tracing::debug!(?version, ?dimension, "building generator");

        let (overworld_climate, nether_climate, end_islands, voronoi) = match dimension {
            Dimension::Overworld => (
                Some(ClimateSampler::new(seed, version)),
                None,
                None,
                Some(VoronoiKey::new(seed)),
            ),
            Dimension::Nether => (
                None,
                Some(NetherClimateSampler::new(seed)),
                None,
                Some(VoronoiKey::new(seed)),
            ),
            Dimension::End => (None, None, Some(crate::end::EndIslands::new(seed)), None),
        };

        Ok(Self {
            seed,
            version,
            dimension,
            overworld_climate,
            nether_climate,
            end_islands,
            tree,
            voronoi,
        })
    }

    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    #[must_use]
    pub fn version(&self) -> McVersion {
        self.version
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Sample a single biome at `(x, y, z)` expressed in units of `scale`
    /// blocks.
    ///
    /// # Errors
    /// [`GenError::InvalidScale`] if `scale` isn't one of
    /// [`VALID_SCALES`]. [`GenError::YOutOfRange`] if `scale == 1` and `y`
    /// falls outside the overworld's build height.
    pub fn get_biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> Result<BiomeId> {
        if !VALID_SCALES.contains(&scale) {
            return Err(GenError::InvalidScale(scale));
        }

        match self.dimension {
            Dimension::End => {
                let islands = self
                    .end_islands
                    .as_ref()
                    .expect("end generator always builds an end islands noise");
                let chunk_x = (x * scale) >> 4;
                let chunk_z = (z * scale) >> 4;
                Ok(crate::end::classify(islands, chunk_x, chunk_z))
            }
            Dimension::Nether => {
                // The nether's climate has no vertical axis: every y
                // samples the same column, so fix y to 0 before the
                // Voronoi upsampler ever sees it.
                let (qx, _qy, qz) = self.to_quart_aligned(scale, x, 0, z)?;
                let climate = self
                    .nether_climate
                    .as_ref()
                    .expect("nether generator always builds a nether climate sampler")
                    .sample(qx, qz);
                let (id, _) = self.tree.lookup(&climate, None);
                Ok(id)
            }
            Dimension::Overworld => {
                let (qx, qy, qz) = self.to_quart_aligned(scale, x, y, z)?;
                let climate = self
                    .overworld_climate
                    .as_ref()
                    .expect("overworld generator always builds an overworld climate sampler")
                    .sample(qx, qy, qz);
                let (id, _) = self.tree.lookup(&climate, None);
                Ok(id)
            }
        }
    }

    /// Resolve `(x, y, z)` at `scale` down to the quart-resolution
    /// coordinates the climate samplers operate on (§4.G's formulas are
    /// written in terms of the quart grid directly, not block
    /// coordinates).
    ///
    /// At scale 1, `(x, y, z)` are block coordinates: route through the
    /// Voronoi upsampler (§4.H) to find the winning quart cell, whose
    /// index *is* already the quart coordinate — no further scaling.
    ///
    /// At scale >= 4, `(x, y, z)` are cell indices at that scale; §4.I's
    /// cell-center formula `(x_i * s/4 + s/8, y_j, z_k * s/4 + s/8)`
    /// (integer division) converts horizontal indices to quart
    /// coordinates, while `y` is already expressed in quart (1:4) units
    /// per §3's `Range` contract and passes through unchanged.
    fn to_quart_aligned(&self, scale: i32, x: i32, y: i32, z: i32) -> Result<(i32, i32, i32)> {
        if scale == 1 {
            if !(-64..=319).contains(&y) {
                return Err(GenError::YOutOfRange { y });
            }
            let key = self
                .voronoi
                .as_ref()
                .expect("overworld/nether generators always build a voronoi key");
            return Ok(voronoi::nearest_quart_cell(key, x, y, z));
        }

        let step = scale / 4;
        let half = scale / 8;
        Ok((x * step + half, y, z * step + half))
    }

    /// Fill every column (and, for scale 1 in the overworld, Y-stack) in
    /// `range`, in row-major `(y, z, x)` order, matching the reference's
    /// output buffer layout.
    ///
    /// Uses `rayon` to fill independent rows in parallel: the generator is
    /// read-only after construction, so concurrent sampling across
    /// disjoint rows is always safe.
    ///
    /// # Errors
    /// Propagates [`GenError::InvalidScale`]/[`GenError::YOutOfRange`]
    /// from the first out-of-range column encountered, and
    /// [`GenError::OutOfMemory`] if the requested volume exceeds a 64M
    /// element cap.
    pub fn gen_biomes(&self, range: Range) -> Result<Vec<BiomeId>> {
        const CAP: usize = 64 * 1024 * 1024;
        let volume = range.volume();
        tracing::trace!(scale = range.scale, volume, "filling biome range");
        if volume > CAP {
            return Err(GenError::OutOfMemory {
                requested: volume,
                limit: CAP,
            });
        }
        if !VALID_SCALES.contains(&range.scale) {
            return Err(GenError::InvalidScale(range.scale));
        }

        let rows: Vec<Result<Vec<BiomeId>>> = (0..range.height)
            .into_par_iter()
            .flat_map(|dy| (0..range.length).into_par_iter().map(move |dz| (dy, dz)))
            .map(|(dy, dz)| {
                let y = range.y + dy;
                let z = range.z + dz;
                (0..range.width)
                    .map(|dx| self.get_biome_at(range.scale, range.x + dx, y, z))
                    .collect::<Result<Vec<_>>>()
            })
            .collect();

        let mut out = Vec::with_capacity(volume);
        for row in rows {
            out.extend(row?);
        }
        Ok(out)
    }

    /// Minimum buffer capacity, in elements, [`Generator::gen_biomes`]
    /// needs for `range` — exactly `range.volume()`, exposed separately so
    /// callers can preallocate before building the range.
    #[must_use]
    pub fn min_cache_size(range: &Range) -> usize {
        range.volume()
    }

    /// Where a structure of `ty` lands in region `(region_x, region_z)`,
    /// in block coordinates. Delegates to
    /// [`crate::structures::get_structure_pos`] with this generator's
    /// seed; doesn't check viability — see
    /// [`Generator::is_viable_structure_pos`].
    ///
    /// # Panics
    /// If `ty` is [`crate::structures::StructureType::Stronghold`], which
    /// has no region grid; use [`Generator::init_first_stronghold`].
    #[must_use]
    pub fn get_structure_pos(
        &self,
        ty: crate::structures::StructureType,
        region_x: i64,
        region_z: i64,
    ) -> crate::structures::Pos {
        crate::structures::get_structure_pos(self.seed, ty.config(), region_x, region_z)
    }

    /// Whether the structure placed by [`Generator::get_structure_pos`]
    /// for `ty` at `(region_x, region_z)` actually generates there, per
    /// its biome allow-list (or, for fortresses, the Bastion-complement
    /// rule).
    ///
    /// # Errors
    /// Propagates biome-sampling errors from the underlying
    /// [`Generator::get_biome_at`] call.
    pub fn is_viable_structure_pos(
        &self,
        ty: crate::structures::StructureType,
        region_x: i64,
        region_z: i64,
    ) -> Result<bool> {
        crate::structures::viability::is_viable_structure_pos(ty, self, self.seed, region_x, region_z)
    }

    /// Start the stronghold ring iterator and return its first position,
    /// using this generator to skip oceanic candidates. See
    /// [`crate::structures::StrongholdIter`].
    #[must_use]
    pub fn init_first_stronghold(&self) -> (crate::structures::StrongholdIter, crate::structures::Pos) {
        crate::structures::StrongholdIter::init_first(self.seed, Some(self))
    }

    /// Whether `(chunk_x, chunk_z)` is a slime chunk for this generator's
    /// seed. Independent of dimension and version.
    #[must_use]
    pub fn is_slime_chunk(&self, chunk_x: i32, chunk_z: i32) -> bool {
        crate::structures::is_slime_chunk(self.seed, chunk_x, chunk_z)
    }

    /// Scan a chunk rectangle for mineshaft seams. See
    /// [`crate::structures::get_mineshafts`].
    #[must_use]
    pub fn get_mineshafts(&self, chunk_x: i32, chunk_z: i32, width: i32, length: i32) -> Vec<(i32, i32)> {
        crate::structures::get_mineshafts(self.seed, chunk_x, chunk_z, width, length)
    }

    /// Scan a chunk rectangle of this (End) generator for outer-island
    /// chunks. See [`crate::structures::get_end_islands`].
    ///
    /// # Panics
    /// If this generator's dimension isn't [`Dimension::End`].
    #[must_use]
    pub fn get_end_islands(&self, chunk_x: i32, chunk_z: i32, width: i32, length: i32) -> Vec<(i32, i32)> {
        let islands = self
            .end_islands
            .as_ref()
            .expect("get_end_islands only applies to an End generator");
        crate::structures::get_end_islands(islands, chunk_x, chunk_z, width, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_scale() {
        let gen = Generator::new(1, McVersion::NEWEST, Dimension::Overworld).unwrap();
        assert!(matches!(
            gen.get_biome_at(3, 0, 64, 0),
            Err(GenError::InvalidScale(3))
        ));
    }

    #[test]
    fn rejects_out_of_range_y_at_scale_one() {
        let gen = Generator::new(1, McVersion::NEWEST, Dimension::Overworld).unwrap();
        assert!(matches!(
            gen.get_biome_at(1, 0, 1000, 0),
            Err(GenError::YOutOfRange { .. })
        ));
    }

    #[test]
    fn quart_scale_sampling_is_deterministic() {
        let gen = Generator::new(123, McVersion::NEWEST, Dimension::Overworld).unwrap();
        let a = gen.get_biome_at(4, 10, 16, -5).unwrap();
        let b = gen.get_biome_at(4, 10, 16, -5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn gen_biomes_fills_the_requested_volume() {
        let gen = Generator::new(7, McVersion::NEWEST, Dimension::Overworld).unwrap();
        let range = Range::new(16, 0, 0, 4, 4, 4, 1);
        let biomes = gen.gen_biomes(range).unwrap();
        assert_eq!(biomes.len(), Generator::min_cache_size(&range));
    }

    #[test]
    fn end_dimension_ignores_climate() {
        let gen = Generator::new(1, McVersion::NEWEST, Dimension::End).unwrap();
        let id = gen.get_biome_at(16, 0, 64, 0).unwrap();
        assert_eq!(id, BiomeId::THE_END);
    }
}
