//! Random spawn policy
//!
//! Lane selection is a repeating shuffle of a fixed 3-lane pool, not
//! naive uniform sampling: any 3 consecutive spawns cover all 3 lanes.
//! Kind selection forces a laser on every 3rd draw. Seeded so tests
//! can pin the sequence.

use glam::{Vec2, Vec3};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::FallingKind;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    rng: Pcg32,
    lanes: [f32; 3],
    lane_index: usize,
    kind_count: u32,
}

impl SpawnPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            lanes: SPAWN_LANES,
            lane_index: 0,
            kind_count: 0,
        }
    }

    /// Every 3rd draw is a laser; the rest are uniform over the seven
    /// non-laser kinds (the draw skips the laser's slot)
    pub fn next_kind(&mut self) -> FallingKind {
        self.kind_count += 1;
        if self.kind_count % 3 == 0 {
            return FallingKind::Laser;
        }
        let mut n: usize = self.rng.random_range(0..7);
        if n >= 4 {
            n += 1;
        }
        FallingKind::DRAW_ORDER[n]
    }

    /// Next lane from the shuffled pool, plus uniform jitter
    pub fn next_position(&mut self, kind: FallingKind) -> Vec3 {
        if self.lane_index == 0 {
            self.lanes.shuffle(&mut self.rng);
        }
        let lane = self.lanes[self.lane_index];
        self.lane_index = (self.lane_index + 1) % 3;

        let jitter = self.rng.random_range(-LANE_JITTER..=LANE_JITTER);
        Vec3::new(lane + jitter, kind.spawn_y(), SPAWN_Z)
    }

    /// Screen-space offset for the Devil capture box
    pub fn next_capture_offset(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(CAPTURE_X_RANGE) as f32,
            self.rng.random_range(CAPTURE_Y_RANGE) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_third_kind_is_a_laser() {
        let mut policy = SpawnPolicy::new(1);
        for i in 1..=60u32 {
            let kind = policy.next_kind();
            assert_eq!(
                kind == FallingKind::Laser,
                i % 3 == 0,
                "draw {i} was {kind:?}"
            );
        }
    }

    #[test]
    fn non_laser_draws_cover_all_seven_kinds() {
        let mut policy = SpawnPolicy::new(2);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let kind = policy.next_kind();
            if kind != FallingKind::Laser {
                seen.insert(kind);
            }
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn consecutive_positions_cover_all_three_lanes() {
        let mut policy = SpawnPolicy::new(3);
        for _ in 0..20 {
            let mut hit = [false; 3];
            for _ in 0..3 {
                let pos = policy.next_position(FallingKind::Croissant);
                let lane = SPAWN_LANES
                    .iter()
                    .position(|&l| (pos.x - l).abs() <= LANE_JITTER + 1e-5)
                    .expect("position not within jitter of any lane");
                hit[lane] = true;
            }
            assert_eq!(hit, [true; 3], "a lane repeated within a window of 3");
        }
    }

    #[test]
    fn spawn_heights_depend_on_kind() {
        let mut policy = SpawnPolicy::new(4);
        let laser = policy.next_position(FallingKind::Laser);
        assert_eq!(laser.y, LASER_SPAWN_Y);
        assert_eq!(laser.z, SPAWN_Z);

        let muffin = policy.next_position(FallingKind::Muffin);
        assert_eq!(muffin.y, FOOD_SPAWN_Y);
        assert_eq!(muffin.z, SPAWN_Z);
    }

    #[test]
    fn capture_offsets_stay_in_range() {
        let mut policy = SpawnPolicy::new(5);
        for _ in 0..100 {
            let offset = policy.next_capture_offset();
            assert!((570.0..=770.0).contains(&offset.x), "x = {}", offset.x);
            assert!((30.0..=570.0).contains(&offset.y), "y = {}", offset.y);
        }
    }
}
