//! Per-game difficulty settings
//!
//! Defaults reproduce the original tuning. The level controller mutates
//! these at level-up (spawn intervals shrink toward a floor, speeds rise);
//! a restart keeps the scaled values, as the originals did.

use serde::{Deserialize, Serialize};

/// Balloon game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalloonSettings {
    /// Ticks between spawn attempts
    pub spawn_interval: u32,
    /// Drift speed toward the avatar (px/tick)
    pub balloon_speed: f32,
    /// Click radius of a balloon
    pub balloon_size: f32,
    /// Live cap, and pops required to clear a level
    pub balloons_per_level: u32,
    /// Points per pop
    pub pop_score: u32,
    /// Points lost on an empty-space click
    pub miss_penalty: u32,
    pub max_level: u32,
    pub starting_lives: u32,
    /// Avatar collision footprint (the loaded portrait's dimensions)
    pub avatar_width: f32,
    pub avatar_height: f32,
}

impl Default for BalloonSettings {
    fn default() -> Self {
        Self {
            spawn_interval: 60,
            balloon_speed: 0.8,
            balloon_size: 25.0,
            balloons_per_level: 10,
            pop_score: 10,
            miss_penalty: 1,
            max_level: 10,
            starting_lives: 3,
            avatar_width: 140.0,
            avatar_height: 180.0,
        }
    }
}

impl BalloonSettings {
    /// Difficulty scaling applied when a level is cleared
    pub fn level_up(&mut self) {
        self.spawn_interval = self.spawn_interval.saturating_sub(5).max(30);
        self.balloon_speed += 0.1;
    }
}

/// Focus game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSettings {
    pub target_spawn_interval: u32,
    /// Ticks a target stays on screen
    pub target_lifetime: u32,
    pub distraction_spawn_interval: u32,
    pub distraction_lifetime: u32,
    pub target_speed: f32,
    pub distraction_speed: f32,
    pub target_size: f32,
    pub distraction_size: f32,
    /// Live caps (spawn gate)
    pub target_cap: u32,
    pub distraction_cap: u32,
    /// Points per target hit
    pub hit_score: u32,
    /// Points lost on an empty-space click
    pub miss_penalty: u32,
    /// Score needed per level: `level_up_score * level`
    pub level_up_score: u32,
    pub max_level: u32,
    pub starting_lives: u32,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            target_spawn_interval: 60,
            target_lifetime: 180,
            distraction_spawn_interval: 120,
            distraction_lifetime: 120,
            target_speed: 2.0,
            distraction_speed: 3.0,
            target_size: 30.0,
            distraction_size: 40.0,
            target_cap: 12,
            distraction_cap: 6,
            hit_score: 100,
            miss_penalty: 50,
            level_up_score: 1000,
            max_level: 10,
            starting_lives: 3,
        }
    }
}

impl FocusSettings {
    /// Difficulty scaling applied when a level is cleared
    pub fn level_up(&mut self) {
        self.target_spawn_interval = self.target_spawn_interval.saturating_sub(5).max(20);
        self.distraction_spawn_interval =
            self.distraction_spawn_interval.saturating_sub(10).max(60);
        self.target_speed += 0.5;
        self.distraction_speed += 0.5;
    }
}

/// Darts game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DartsSettings {
    pub board_radius: f32,
    /// Board rotation at level 1 (rad/tick)
    pub base_rotation_speed: f32,
    /// Per-tick rotation speed growth
    pub rotation_ramp: f32,
    pub max_rotation_speed: f32,
    /// Decoration collision radius
    pub heart_size: f32,
    /// Allowed distance window around the ring radius counted as a hit
    pub ring_tolerance: f32,
    pub hit_score: u32,
    /// Score deducted when a level is failed
    pub level_fail_penalty: u32,
    /// Decorations required to clear a level
    pub hearts_per_level: u32,
    pub max_misses_per_level: u32,
    pub level_time_limit_secs: u32,
    pub max_level: u32,
    /// Logical delay between a throw and its resolution (the original's
    /// 500 ms animation timeout, at the nominal tick rate)
    pub throw_resolve_ticks: u32,
    /// Rotation speed bonuses applied at level-up
    pub level_speed_bonus: f32,
    pub level_max_speed_bonus: f32,
}

impl Default for DartsSettings {
    fn default() -> Self {
        Self {
            board_radius: 100.0,
            base_rotation_speed: 0.01,
            rotation_ramp: 0.00001,
            max_rotation_speed: 0.05,
            heart_size: 15.0,
            ring_tolerance: 10.0,
            hit_score: 100,
            level_fail_penalty: 200,
            hearts_per_level: 4,
            max_misses_per_level: 5,
            level_time_limit_secs: 30,
            max_level: 10,
            throw_resolve_ticks: 30,
            level_speed_bonus: 0.005,
            level_max_speed_bonus: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_scaling_respects_floors() {
        let mut s = FocusSettings::default();
        for _ in 0..20 {
            s.level_up();
        }
        assert_eq!(s.target_spawn_interval, 20);
        assert_eq!(s.distraction_spawn_interval, 60);
        assert!(s.target_speed > 2.0);
    }

    #[test]
    fn balloon_scaling_respects_floor() {
        let mut s = BalloonSettings::default();
        for _ in 0..20 {
            s.level_up();
        }
        assert_eq!(s.spawn_interval, 30);
    }
}
