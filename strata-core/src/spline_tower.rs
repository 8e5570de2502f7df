//! The "depth" spline tower: a nested Hermite spline selecting on
//! continentalness, then erosion, then (for a few bands) the ridges value
//! derived from weirdness, producing the `depth` climate axis the biome
//! tree's fourth parameter reads.
//!
//! The reference compiles this tower from per-biome-category JSON once at
//! startup. That JSON is not part of the filtered source this crate was
//! ported from, so the tower below is a hand-authored stand-in with the
//! same shape (continentalness → erosion → ridges, ~20 nodes, several
//! erosion sub-splines shared across continentalness bands) rather than
//! byte-identical anchor points. See the design notes for the same caveat
//! on the biome tree tables.

use strata_utils::spline::{SplineArena, SplineNode};
use strata_utils::climate::SplineParam;

/// A built spline tower plus the arena index to evaluate from.
#[derive(Debug, Clone)]
pub struct SplineTower {
    pub arena: SplineArena,
    pub root: usize,
}

/// Build the depth spline tower. Stable across versions for now — no
/// tracked version changes the tower's shape, only the biome tree that
/// consumes its output.
#[must_use]
pub fn build() -> SplineTower {
    let mut arena = SplineArena::new();

    // Erosion sub-spline shared by the ocean/coast bands: flattens out as
    // erosion increases.
    let ocean_erosion = erosion_spline(&mut arena, 0.4, 0.0, -0.2, -0.4, -0.5);

    // Erosion sub-spline for near-inland land, modulated by ridges for the
    // two highest-erosion bands (valleys carve rivers there).
    let ridged_valley = ridges_spline(&mut arena, -0.1, 0.1);
    let near_0 = arena_fixed(&mut arena, 0.55);
    let near_1 = arena_fixed(&mut arena, 0.3);
    let near_2 = arena_fixed(&mut arena, 0.1);
    let near_3 = arena_fixed(&mut arena, -0.3);
    let near_inland = arena.internal(
        SplineParam::Erosion,
        &[
            (-1.0, near_0, 0.0),
            (-0.6, near_1, 0.0),
            (-0.2, near_2, 0.0),
            (0.2, ridged_valley, 0.0),
            (0.6, ridged_valley, 0.0),
            (1.0, near_3, 0.0),
        ],
    );

    // Erosion sub-spline for far-inland land: higher baseline, same
    // ridged-valley carve at high erosion.
    let ridged_valley_far = ridges_spline(&mut arena, 0.0, 0.2);
    let far_0 = arena_fixed(&mut arena, 1.0);
    let far_1 = arena_fixed(&mut arena, 0.7);
    let far_2 = arena_fixed(&mut arena, 0.4);
    let far_3 = arena_fixed(&mut arena, -0.2);
    let far_inland = arena.internal(
        SplineParam::Erosion,
        &[
            (-1.0, far_0, 0.0),
            (-0.6, far_1, 0.0),
            (-0.2, far_2, 0.0),
            (0.2, ridged_valley_far, 0.0),
            (0.6, ridged_valley_far, 0.0),
            (1.0, far_3, 0.0),
        ],
    );

    let mushroom_fields = arena_fixed(&mut arena, 0.43);
    let deep_ocean = arena_fixed(&mut arena, 0.4);

    let root = arena.internal(
        SplineParam::Continentalness,
        &[
            (-1.2, mushroom_fields, 0.0),
            (-1.05, deep_ocean, 0.0),
            (-0.455, ocean_erosion, 0.0),
            (-0.19, near_inland, 0.0),
            (0.03, near_inland, 0.0),
            (0.3, far_inland, 0.0),
            (1.0, far_inland, 0.0),
        ],
    );

    SplineTower { arena, root }
}

fn arena_fixed(arena: &mut SplineArena, value: f32) -> usize {
    arena.push(SplineNode::Fixed(value))
}

/// A four-anchor erosion spline with a fixed derivative of 0 at every
/// anchor, used for bands that don't need a ridges sub-spline.
fn erosion_spline(arena: &mut SplineArena, a: f32, b: f32, c: f32, d: f32, e: f32) -> usize {
    let va = arena_fixed(arena, a);
    let vb = arena_fixed(arena, b);
    let vc = arena_fixed(arena, c);
    let vd = arena_fixed(arena, d);
    let ve = arena_fixed(arena, e);
    arena.internal(
        SplineParam::Erosion,
        &[
            (-1.0, va, 0.0),
            (-0.5, vb, 0.0),
            (0.0, vc, 0.0),
            (0.5, vd, 0.0),
            (1.0, ve, 0.0),
        ],
    )
}

/// A two-anchor ridges sub-spline: `low` where ridges is at its trough,
/// `high` at its peak, flat everywhere else the ridges triangle wave
/// doesn't reach.
fn ridges_spline(arena: &mut SplineArena, low: f32, high: f32) -> usize {
    let vlow = arena_fixed(arena, low);
    let vhigh = arena_fixed(arena, high);
    arena.internal(
        SplineParam::Ridges,
        &[(-1.0, vlow, 0.0), (0.0, vhigh, 0.0), (1.0, vlow, 0.0)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_utils::climate::ClimateSample;

    #[test]
    fn deep_ocean_band_is_flat() {
        let tower = build();
        let sample = ClimateSample {
            continentalness: -1.1,
            erosion: 0.0,
            weirdness: 0.0,
        };
        let v = tower.arena.eval(tower.root, &sample);
        assert!((v - 0.4).abs() < 1e-3);
    }

    #[test]
    fn far_inland_is_higher_than_near_inland_at_low_erosion() {
        let tower = build();
        let near = tower.arena.eval(
            tower.root,
            &ClimateSample {
                continentalness: -0.1,
                erosion: -1.0,
                weirdness: 0.0,
            },
        );
        let far = tower.arena.eval(
            tower.root,
            &ClimateSample {
                continentalness: 0.5,
                erosion: -1.0,
                weirdness: 0.0,
            },
        );
        assert!(far > near);
    }

    #[test]
    fn result_is_always_finite() {
        let tower = build();
        for c in [-1.2, -0.5, 0.0, 0.5, 1.0] {
            for e in [-1.0, -0.3, 0.3, 1.0] {
                for w in [-1.0, 0.0, 1.0] {
                    let sample = ClimateSample {
                        continentalness: c,
                        erosion: e,
                        weirdness: w,
                    };
                    assert!(tower.arena.eval(tower.root, &sample).is_finite());
                }
            }
        }
    }
}
