//! Viewer: renders a rectangle of biomes to a PNG, one pixel per sampled
//! column, using [`crate::color::biome_color`].

use anyhow::{bail, Result};
use clap::Args;
use image::{ImageBuffer, Rgb};
use strata_core::generator::Range;
use strata_core::version::McVersion;
use strata_core::Generator;

use crate::color::biome_color;
use crate::{DimensionArg, VersionArg};

#[derive(Args)]
pub struct ViewArgs {
    /// World seed to render.
    #[arg(long)]
    seed: i64,
    /// Game version the biome tree is drawn from.
    #[arg(long, value_enum, default_value = "v1-21-1")]
    version: VersionArg,
    /// Dimension to render.
    #[arg(long, value_enum, default_value = "overworld")]
    dimension: DimensionArg,
    /// Horizontal scale to sample at: 1, 4, 16, 64, or 256.
    #[arg(long, default_value_t = 4)]
    scale: i32,
    /// Northwest corner X, in units of `scale` blocks.
    #[arg(long, default_value_t = -128)]
    x: i32,
    /// Northwest corner Z, in units of `scale` blocks.
    #[arg(long, default_value_t = -128)]
    z: i32,
    /// Width in sampled columns.
    #[arg(long, default_value_t = 256)]
    width: i32,
    /// Length in sampled columns.
    #[arg(long, default_value_t = 256)]
    length: i32,
    /// Y level to sample at (ignored for scale != 1 and for Nether/End).
    #[arg(long, default_value_t = 64)]
    y: i32,
    /// Output PNG path.
    #[arg(long, default_value = "biomes.png")]
    out: std::path::PathBuf,
}

/// Matches [`strata_core::Generator::gen_biomes`]'s own cap: guards the
/// `image::ImageBuffer` allocation the same way the generator guards its
/// own scratch buffer.
const MAX_PIXELS: u64 = 64 * 1024 * 1024;

pub fn run(args: ViewArgs) -> Result<()> {
    if args.width <= 0 || args.length <= 0 {
        bail!("--width and --length must be positive");
    }
    let pixels = u64::from(args.width as u32) * u64::from(args.length as u32);
    if pixels > MAX_PIXELS {
        bail!("requested canvas is {pixels} pixels, over the {MAX_PIXELS}-pixel cap");
    }

    let version: McVersion = args.version.into();
    let dimension = args.dimension.into();
    let gen = Generator::new(args.seed, version, dimension)?;

    let range = Range::new(args.scale, args.x, args.z, args.width, args.length, args.y, 1);
    let biomes = gen.gen_biomes(range)?;

    tracing::info!(width = args.width, length = args.length, out = %args.out.display(), "rendering biome map");

    let mut img = ImageBuffer::<Rgb<u8>, Vec<u8>>::new(args.width as u32, args.length as u32);
    for (i, biome) in biomes.iter().enumerate() {
        let ix = (i % args.width as usize) as u32;
        let iz = (i / args.width as usize) as u32;
        img.put_pixel(ix, iz, Rgb(biome_color(*biome)));
    }

    img.save(&args.out)?;
    Ok(())
}
