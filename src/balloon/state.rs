//! Balloon game state
//!
//! Everything needed to reproduce a session deterministically lives here:
//! the seeded RNG, the live balloons, and the session counters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::geom::{self, Footprint};
use crate::play_center;
use crate::session::{Hud, Message, Phase};
use crate::settings::BalloonSettings;

/// Palette slots the renderer maps to balloon colors
pub const BALLOON_COLOR_VARIANTS: u8 = 10;
/// Palette slots for ambient hearts
pub const HEART_COLOR_VARIANTS: u8 = 8;

/// Decorative hearts drifting behind the action
pub const AMBIENT_HEART_COUNT: usize = 50;

/// Cap on live pop-burst particles
pub const MAX_PARTICLES: usize = 256;

/// A drifting hero balloon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balloon {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Click radius
    pub size: f32,
    /// Palette index for the renderer
    pub color: u8,
}

/// Pop-burst particle (visual only, never gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Frames left to live
    pub life: u32,
    pub max_life: u32,
    pub color: u8,
}

/// Background heart, wrapping around the play area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbientHeart {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u8,
    pub opacity: f32,
}

/// One balloon-game play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalloonSession {
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: BalloonSettings,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    /// Monotonic frame counter
    pub ticks: u64,
    /// Pops toward the current level's quota
    pub popped: u32,
    /// Balloons spawned over the whole session
    pub spawned: u32,
    pub balloons: Vec<Balloon>,
    pub particles: Vec<Particle>,
    pub ambient: Vec<AmbientHeart>,
    pub message: Message,
    /// Avatar center, fixed at the middle of the play area
    pub avatar: Vec2,
}

impl BalloonSession {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, BalloonSettings::default())
    }

    pub fn with_settings(seed: u64, settings: BalloonSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ambient = seed_ambient(&mut rng);
        Self {
            seed,
            rng,
            settings,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lives: 0,
            ticks: 0,
            popped: 0,
            spawned: 0,
            balloons: Vec::new(),
            particles: Vec::new(),
            ambient,
            message: Message::default(),
            avatar: play_center(),
        }
    }

    /// Full in-memory reset into `Running`
    pub fn start(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.ambient = seed_ambient(&mut self.rng);
        self.phase = Phase::Running;
        self.score = 0;
        self.level = 1;
        self.lives = self.settings.starting_lives;
        self.ticks = 0;
        self.popped = 0;
        self.spawned = 0;
        self.balloons.clear();
        self.particles.clear();
        self.message.arm("Level 1", LEVEL_MESSAGE_TICKS);
    }

    /// Avatar contact rectangle
    pub fn avatar_footprint(&self) -> Footprint {
        Footprint::new(
            self.avatar,
            self.settings.avatar_width,
            self.settings.avatar_height,
        )
    }

    /// Spawn one balloon on a random edge, aimed at the avatar
    pub(crate) fn spawn_balloon(&mut self) {
        let pos = geom::edge_spawn(&mut self.rng, PLAY_WIDTH, PLAY_HEIGHT);
        let vel = geom::aim(pos, self.avatar, self.settings.balloon_speed);
        let color = self.rng.random_range(0..BALLOON_COLOR_VARIANTS);
        self.balloons.push(Balloon {
            pos,
            vel,
            size: self.settings.balloon_size,
            color,
        });
        self.spawned += 1;
    }

    /// Emit a pop burst at a balloon's last position
    pub(crate) fn burst(&mut self, at: Vec2, color: u8) {
        for _ in 0..20 {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            let dir = geom::random_direction(&mut self.rng, 1.0);
            let speed = self.rng.random_range(1.0..4.0);
            let life = self.rng.random_range(20..50);
            self.particles.push(Particle {
                pos: at,
                vel: dir * speed,
                size: self.rng.random_range(2.0..7.0),
                life,
                max_life: life,
                color,
            });
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            lines: vec![
                ("Points".into(), self.score.to_string()),
                ("Level".into(), self.level.to_string()),
                ("Lives".into(), self.lives.to_string()),
                (
                    "Balloons".into(),
                    format!("{}/{}", self.popped, self.settings.balloons_per_level),
                ),
            ],
            message: self.message.visible().map(str::to_owned),
        }
    }
}

fn seed_ambient(rng: &mut Pcg32) -> Vec<AmbientHeart> {
    (0..AMBIENT_HEART_COUNT)
        .map(|_| AmbientHeart {
            pos: Vec2::new(
                rng.random_range(0.0..PLAY_WIDTH),
                rng.random_range(0.0..PLAY_HEIGHT),
            ),
            vel: Vec2::new(rng.random_range(-0.25..0.25), rng.random_range(-0.25..0.25)),
            size: rng.random_range(10.0..30.0),
            color: rng.random_range(0..HEART_COLOR_VARIANTS),
            opacity: rng.random_range(0.3..0.8),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let s = BalloonSession::new(42);
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.balloons.is_empty());
        assert_eq!(s.ambient.len(), AMBIENT_HEART_COUNT);
    }

    #[test]
    fn start_resets_counters_and_arms_banner() {
        let mut s = BalloonSession::new(42);
        s.start();
        s.score = 120;
        s.popped = 4;
        s.ticks = 99;
        s.balloons.push(Balloon {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 25.0,
            color: 0,
        });

        s.start();
        assert_eq!(s.phase, Phase::Running);
        assert_eq!((s.score, s.popped, s.ticks), (0, 0, 0));
        assert_eq!(s.lives, s.settings.starting_lives);
        assert!(s.balloons.is_empty());
        assert_eq!(s.message.visible(), Some("Level 1"));
    }

    #[test]
    fn restarts_replay_the_same_spawn_sequence() {
        let mut a = BalloonSession::new(7);
        a.start();
        a.spawn_balloon();
        let first = a.balloons[0].pos;

        a.start();
        a.spawn_balloon();
        assert_eq!(a.balloons[0].pos, first);
    }

    #[test]
    fn burst_respects_particle_cap() {
        let mut s = BalloonSession::new(1);
        s.start();
        for _ in 0..20 {
            s.burst(Vec2::new(100.0, 100.0), 3);
        }
        assert!(s.particles.len() <= MAX_PARTICLES);
    }
}
