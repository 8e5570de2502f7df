//! Seed-hunter: scans a contiguous seed range for one whose structure
//! placement is viable at a chosen region, reporting every hit.

use anyhow::{bail, Result};
use clap::Args;
use rayon::prelude::*;
use strata_core::structures::StructureType;
use strata_core::version::{Dimension, McVersion};
use strata_core::Generator;

use crate::VersionArg;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum StructureArg {
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
    BuriedTreasure,
    TrailRuins,
    TrialChambers,
    Mineshaft,
}

impl From<StructureArg> for StructureType {
    fn from(s: StructureArg) -> Self {
        match s {
            StructureArg::DesertPyramid => StructureType::DesertPyramid,
            StructureArg::JungleTemple => StructureType::JungleTemple,
            StructureArg::SwampHut => StructureType::SwampHut,
            StructureArg::Igloo => StructureType::Igloo,
            StructureArg::Village => StructureType::Village,
            StructureArg::OceanRuinWarm => StructureType::OceanRuinWarm,
            StructureArg::OceanRuinCold => StructureType::OceanRuinCold,
            StructureArg::Shipwreck => StructureType::Shipwreck,
            StructureArg::OceanMonument => StructureType::OceanMonument,
            StructureArg::WoodlandMansion => StructureType::WoodlandMansion,
            StructureArg::PillagerOutpost => StructureType::PillagerOutpost,
            StructureArg::RuinedPortalOverworld => StructureType::RuinedPortalOverworld,
            StructureArg::RuinedPortalNether => StructureType::RuinedPortalNether,
            StructureArg::NetherFortress => StructureType::NetherFortress,
            StructureArg::BastionRemnant => StructureType::BastionRemnant,
            StructureArg::NetherFossil => StructureType::NetherFossil,
            StructureArg::EndCity => StructureType::EndCity,
            StructureArg::AncientCity => StructureType::AncientCity,
            StructureArg::BuriedTreasure => StructureType::BuriedTreasure,
            StructureArg::TrailRuins => StructureType::TrailRuins,
            StructureArg::TrialChambers => StructureType::TrialChambers,
            StructureArg::Mineshaft => StructureType::Mineshaft,
        }
    }
}

#[derive(Args)]
pub struct HuntArgs {
    /// First seed to check (inclusive).
    #[arg(long)]
    from: i64,
    /// Last seed to check (inclusive).
    #[arg(long)]
    to: i64,
    /// Game version the biome tree and structure tables are drawn from.
    #[arg(long, value_enum, default_value = "v1-21-1")]
    version: VersionArg,
    /// Structure type to search for.
    #[arg(long, value_enum)]
    structure: StructureArg,
    /// Region grid X coordinate to check (in the structure's own region
    /// size, not blocks).
    #[arg(long, default_value_t = 0)]
    region_x: i64,
    /// Region grid Z coordinate to check.
    #[arg(long, default_value_t = 0)]
    region_z: i64,
    /// Stop after this many seeds have been scanned (guards against an
    /// unbounded `--from`/`--to` typo bringing down the box).
    #[arg(long, default_value_t = 50_000_000)]
    max_scan: u64,
}

pub fn run(args: HuntArgs) -> Result<()> {
    if args.to < args.from {
        bail!("--to ({}) must not be before --from ({})", args.to, args.from);
    }
    let span = (args.to - args.from) as u64 + 1;
    if span > args.max_scan {
        bail!(
            "requested range spans {span} seeds, over the --max-scan cap of {}",
            args.max_scan
        );
    }

    let version: McVersion = args.version.into();
    let structure: StructureType = args.structure.into();
    let dimension: Dimension = structure.config().dimension;

    tracing::info!(
        from = args.from,
        to = args.to,
        ?dimension,
        "scanning for viable structure placements"
    );

    let hits: Vec<i64> = (args.from..=args.to)
        .into_par_iter()
        .filter(|&seed| {
            let Ok(gen) = Generator::new(seed, version, dimension) else {
                return false;
            };
            gen.is_viable_structure_pos(structure, args.region_x, args.region_z)
                .unwrap_or(false)
        })
        .collect();

    let mut hits = hits;
    hits.sort_unstable();
    for seed in &hits {
        println!("{seed}");
    }
    tracing::info!(found = hits.len(), scanned = span, "hunt complete");
    Ok(())
}
