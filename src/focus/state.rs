//! Focus game state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::play_center;
use crate::session::{Hud, Message, Phase};
use crate::settings::FocusSettings;

/// A green target worth points, aimed at the player marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Click radius
    pub size: f32,
    /// Frames left before it fades out
    pub lifetime: u32,
}

/// A red distraction that costs a life when clicked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distraction {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub lifetime: u32,
}

/// One focus-game play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: FocusSettings,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    /// Monotonic frame counter
    pub ticks: u64,
    /// Targets hit over the whole session
    pub targets_hit: u32,
    /// Distractions clicked over the whole session
    pub distractions_hit: u32,
    pub targets: Vec<Target>,
    pub distractions: Vec<Distraction>,
    pub message: Message,
    /// Player marker, fixed at the middle of the play area
    pub player: Vec2,
}

impl FocusSession {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, FocusSettings::default())
    }

    pub fn with_settings(seed: u64, settings: FocusSettings) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lives: 0,
            ticks: 0,
            targets_hit: 0,
            distractions_hit: 0,
            targets: Vec::new(),
            distractions: Vec::new(),
            message: Message::default(),
            player: play_center(),
        }
    }

    /// Full in-memory reset into `Running`
    pub fn start(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = Phase::Running;
        self.score = 0;
        self.level = 1;
        self.lives = self.settings.starting_lives;
        self.ticks = 0;
        self.targets_hit = 0;
        self.distractions_hit = 0;
        self.targets.clear();
        self.distractions.clear();
        self.message.arm("Level 1", LEVEL_MESSAGE_TICKS);
    }

    /// Score needed to clear the current level
    pub fn level_threshold(&self) -> u32 {
        self.settings.level_up_score * self.level
    }

    pub fn hud(&self) -> Hud {
        let mut lines = vec![
            ("Score".into(), self.score.to_string()),
            ("Level".into(), self.level.to_string()),
            ("Lives".into(), self.lives.to_string()),
            ("Targets".into(), self.targets_hit.to_string()),
            ("Distractions".into(), self.distractions_hit.to_string()),
        ];
        if self.level < self.settings.max_level {
            lines.push(("Next Level".into(), self.level_threshold().to_string()));
        }
        Hud {
            lines,
            message: self.message.visible().map(str::to_owned),
        }
    }
}
