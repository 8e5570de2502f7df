//! The stronghold ring iterator (§4.K): up to 128 positions spiraling
//! outward in rings of growing size, each ring's entries evenly spaced in
//! angle with a per-ring random start.

use std::f64::consts::TAU;

use strata_utils::random::legacy_random::LegacyRandom;
use strata_utils::random::Random;

use crate::biome::is_oceanic;
use crate::generator::Generator;
use crate::structures::Pos;

/// Chunk-radius of ring 0: `32 * 1.5` chunks from the origin.
const RING0_DISTANCE_CHUNKS: f64 = 32.0 * 1.5;
/// Chunk-radius growth applied to every ring after the first.
const RING_DISTANCE_STEP_CHUNKS: f64 = 32.0 * 3.0;
/// Upper bound on both total positions produced and oceanic-avoidance
/// rotations per position, matching the reference's two independent
/// 128-iteration caps.
const MAX_STEPS: u32 = 128;

/// How many stronghold slots ring `n` holds: 3, 6, 10, then +10 per ring.
#[must_use]
fn ring_max(ring: u32) -> u32 {
    match ring {
        0 => 3,
        1 => 6,
        2 => 10,
        n => 10 + 10 * (n - 2),
    }
}

/// Stateful cursor over stronghold positions, advanced by
/// [`StrongholdIter::next`]. Construct with
/// [`StrongholdIter::init_first`].
#[derive(Debug, Clone)]
pub struct StrongholdIter {
    rng: LegacyRandom,
    total_emitted: u32,
    ring_num: u32,
    ring_max: u32,
    ring_idx: u32,
    angle: f64,
    distance_chunks: f64,
}

impl StrongholdIter {
    /// Start the iterator and immediately produce the first stronghold
    /// position (`ring_num == 0`, consuming `ring_idx` 0 → 1).
    #[must_use]
    pub fn init_first(seed: i64, generator: Option<&Generator>) -> (Self, Pos) {
        let mut rng = LegacyRandom::from_seed(seed);
        let angle = rng.next_f64() * TAU;
        let mut iter = Self {
            rng,
            total_emitted: 0,
            ring_num: 0,
            ring_max: ring_max(0),
            ring_idx: 0,
            angle,
            distance_chunks: RING0_DISTANCE_CHUNKS,
        };
        let pos = iter
            .next(generator)
            .expect("ring 0 always has at least one slot");
        (iter, pos)
    }

    #[must_use]
    pub fn ring_num(&self) -> u32 {
        self.ring_num
    }

    #[must_use]
    pub fn ring_idx(&self) -> u32 {
        self.ring_idx
    }

    #[must_use]
    pub fn ring_max_size(&self) -> u32 {
        self.ring_max
    }

    /// Advance to the next stronghold, rolling over to a new ring when the
    /// current one is exhausted. Returns `None` once
    /// [`MAX_STEPS`] total positions have been emitted.
    ///
    /// When `generator` is supplied, a candidate whose chunk center is
    /// [`is_oceanic`] is rejected and retried after rotating the angle by
    /// `2π / ring_max`, bounded at [`MAX_STEPS`] rotations so a
    /// pathologically ocean-heavy seed can't loop forever.
    pub fn next(&mut self, generator: Option<&Generator>) -> Option<Pos> {
        if self.total_emitted >= MAX_STEPS {
            return None;
        }

        if self.ring_idx >= self.ring_max {
            self.ring_idx = 0;
            self.ring_num += 1;
            self.ring_max = ring_max(self.ring_num);
            self.distance_chunks += RING_DISTANCE_STEP_CHUNKS;
            self.angle = self.rng.next_f64() * TAU;
        }

        let slot_angle = self.angle + TAU * f64::from(self.ring_idx) / f64::from(self.ring_max);
        let jitter = (self.rng.next_f64() - 0.5) * 0.3;
        let distance = self.distance_chunks + jitter;

        let mut rotations = 0;
        let mut try_angle = slot_angle;
        let pos = loop {
            let chunk_x = (distance * try_angle.cos()).round() as i32;
            let chunk_z = (distance * try_angle.sin()).round() as i32;
            let pos = Pos::new((chunk_x << 4) + 8, (chunk_z << 4) + 8);

            let viable = generator.is_none_or(|gen| {
                let scale4_x = pos.x.div_euclid(4);
                let scale4_z = pos.z.div_euclid(4);
                gen.get_biome_at(4, scale4_x, 0, scale4_z)
                    .is_ok_and(|biome| !is_oceanic(biome))
            });

            if viable || rotations >= MAX_STEPS {
                break pos;
            }
            rotations += 1;
            try_angle += TAU / f64::from(self.ring_max);
        };

        self.ring_idx += 1;
        self.total_emitted += 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_zero_has_three_slots() {
        assert_eq!(ring_max(0), 3);
        assert_eq!(ring_max(1), 6);
        assert_eq!(ring_max(2), 10);
        assert_eq!(ring_max(3), 20);
        assert_eq!(ring_max(4), 30);
    }

    #[test]
    fn after_first_stronghold_and_two_more_ring_is_full() {
        let (mut iter, _first) = StrongholdIter::init_first(12345, None);
        iter.next(None).unwrap();
        iter.next(None).unwrap();
        assert_eq!(iter.ring_num(), 0);
        assert_eq!(iter.ring_idx(), 3);
        assert_eq!(iter.ring_idx(), iter.ring_max_size());
    }

    #[test]
    fn fourth_call_rolls_over_to_ring_one() {
        let (mut iter, _first) = StrongholdIter::init_first(12345, None);
        iter.next(None).unwrap();
        iter.next(None).unwrap();
        iter.next(None).unwrap();
        assert_eq!(iter.ring_num(), 1);
        assert_eq!(iter.ring_idx(), 1);
    }

    #[test]
    fn iteration_is_deterministic_for_same_seed() {
        let (mut a, first_a) = StrongholdIter::init_first(42, None);
        let (mut b, first_b) = StrongholdIter::init_first(42, None);
        assert_eq!(first_a, first_b);
        for _ in 0..10 {
            assert_eq!(a.next(None), b.next(None));
        }
    }

    #[test]
    fn stops_after_max_steps() {
        let (mut iter, _first) = StrongholdIter::init_first(7, None);
        let mut count = 1;
        while iter.next(None).is_some() {
            count += 1;
        }
        assert_eq!(count, 128);
    }
}
