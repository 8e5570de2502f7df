//! Version-aware biome, structure, and world-layout engine.
//!
//! This crate reproduces the biome and structure *placement* layer of the
//! world generator bit-for-bit: given a seed, version, and dimension it
//! answers "what biome is here" and "where does structure X land", without
//! touching block-level terrain, entity spawning, or save I/O — those stay
//! out of scope, see the module docs on [`generator`] for the boundary.

pub mod biome;
pub mod biome_tree;
pub mod climate;
pub mod end;
pub mod error;
pub mod generator;
pub mod nether;
pub mod spline_tower;
pub mod structures;
pub mod version;
pub mod voronoi;

pub use biome::BiomeId;
pub use error::{GenError, Result};
pub use generator::Generator;
pub use version::{Dimension, McVersion};
