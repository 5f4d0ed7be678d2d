//! Darts game state
//!
//! The board rotates continuously; stuck hearts are not simulated on their
//! own, their world positions are recomputed from the board's current
//! rotation every time they are needed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::play_center;
use crate::session::{Hud, Message, Phase};
use crate::settings::DartsSettings;

/// The rotating board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub center: Vec2,
    pub radius: f32,
    /// Current rotation (radians, unbounded)
    pub rotation: f32,
    /// Current rotation speed (rad/tick), ramped each frame toward the max
    pub rotation_speed: f32,
    pub base_speed: f32,
    pub max_speed: f32,
}

impl Board {
    fn from_settings(settings: &DartsSettings) -> Self {
        Self {
            center: play_center(),
            radius: settings.board_radius,
            rotation: 0.0,
            rotation_speed: settings.base_rotation_speed,
            base_speed: settings.base_rotation_speed,
            max_speed: settings.max_rotation_speed,
        }
    }
}

/// A heart stuck to the board: its board angle plus the rotation at attach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StuckHeart {
    pub angle: f32,
    pub rotation_offset: f32,
}

impl StuckHeart {
    /// Current world position, recomputed from the board's rotation
    pub fn position(&self, board: &Board) -> Vec2 {
        let theta = self.angle + (board.rotation - self.rotation_offset);
        board.center + Vec2::from_angle(theta) * board.radius
    }
}

/// A throw awaiting its delayed resolution
///
/// Only one may be in flight; the input handler refuses clicks while this
/// is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingThrow {
    pub origin: Vec2,
    /// Terminal position the throw is resolved against
    pub target: Vec2,
    /// Session tick at which the throw resolves
    pub resolve_at: u64,
    /// 0..=1 animation progress for the renderer
    pub progress: f32,
}

/// One darts play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DartsSession {
    pub settings: DartsSettings,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    /// Successful throws over the whole session
    pub hits: u32,
    /// Misses within the current level
    pub misses: u32,
    /// Monotonic frame counter
    pub ticks: u64,
    /// Tick the current level's time budget started
    pub level_started_at: u64,
    pub board: Board,
    pub stuck: Vec<StuckHeart>,
    pub throw: Option<PendingThrow>,
    pub message: Message,
    /// Resting heart position, bottom center
    pub heart_rest: Vec2,
}

impl Default for DartsSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DartsSession {
    pub fn new() -> Self {
        Self::with_settings(DartsSettings::default())
    }

    pub fn with_settings(settings: DartsSettings) -> Self {
        let board = Board::from_settings(&settings);
        Self {
            settings,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            hits: 0,
            misses: 0,
            ticks: 0,
            level_started_at: 0,
            board,
            stuck: Vec::new(),
            throw: None,
            message: Message::default(),
            heart_rest: Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT - 50.0),
        }
    }

    /// Full in-memory reset into `Running`
    pub fn start(&mut self) {
        self.board = Board::from_settings(&self.settings);
        self.phase = Phase::Running;
        self.score = 0;
        self.level = 1;
        self.hits = 0;
        self.misses = 0;
        self.ticks = 0;
        self.level_started_at = 0;
        self.stuck.clear();
        self.throw = None;
        self.message.arm("Level 1", LEVEL_MESSAGE_TICKS);
    }

    /// Seconds left in the current level's time budget
    pub fn time_remaining_secs(&self) -> u32 {
        let elapsed = ((self.ticks - self.level_started_at) / u64::from(TICKS_PER_SECOND)) as u32;
        self.settings.level_time_limit_secs.saturating_sub(elapsed)
    }

    pub fn hud(&self) -> Hud {
        let speed_pct =
            ((self.board.rotation_speed / self.board.max_speed) * 100.0).floor() as u32;
        Hud {
            lines: vec![
                (
                    "Level".into(),
                    format!("{}/{}", self.level, self.settings.max_level),
                ),
                (
                    "Hearts".into(),
                    format!("{}/{}", self.stuck.len(), self.settings.hearts_per_level),
                ),
                ("Score".into(), self.score.to_string()),
                ("Hits".into(), self.hits.to_string()),
                (
                    "Misses".into(),
                    format!("{}/{}", self.misses, self.settings.max_misses_per_level),
                ),
                ("Time".into(), format!("{}s", self.time_remaining_secs())),
                ("Speed".into(), format!("{speed_pct}%")),
            ],
            message: self.message.visible().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stuck_hearts_ride_the_rotation() {
        let mut s = DartsSession::new();
        s.start();
        let heart = StuckHeart {
            angle: 0.0,
            rotation_offset: s.board.rotation,
        };
        let before = heart.position(&s.board);
        assert!((before - (s.board.center + Vec2::new(s.board.radius, 0.0))).length() < 1e-4);

        s.board.rotation += std::f32::consts::FRAC_PI_2;
        let after = heart.position(&s.board);
        assert!((after - (s.board.center + Vec2::new(0.0, s.board.radius))).length() < 1e-3);
    }

    #[test]
    fn time_budget_counts_down_from_the_level_start() {
        let mut s = DartsSession::new();
        s.start();
        assert_eq!(s.time_remaining_secs(), 30);

        s.ticks = 5 * 60;
        assert_eq!(s.time_remaining_secs(), 25);

        s.level_started_at = s.ticks;
        assert_eq!(s.time_remaining_secs(), 30);
    }
}
