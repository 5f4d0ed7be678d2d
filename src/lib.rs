//! Vibe Arcade - three single-screen casual games on one simulation core
//!
//! Core modules:
//! - `balloon`, `focus`, `darts`: the game simulations (state + tick + render)
//! - `geom`: hit tests and spawn geometry shared by the games
//! - `session`: controller phases, transient messages, HUD values
//! - `settings`: per-game difficulty bundles
//! - `surface`: abstract immediate-mode drawing sink
//! - `runner`: single-threaded tick driver with a pointer-click queue
//! - `leaderboard`: in-memory session bests
//!
//! The crate is platform-agnostic: the host feeds pointer clicks and frame
//! ticks, reads HUD values, and consumes draw commands. Everything is
//! deterministic for a given seed and input sequence.

pub mod balloon;
pub mod darts;
pub mod focus;
pub mod geom;
pub mod leaderboard;
pub mod runner;
pub mod session;
pub mod settings;
pub mod shapes;
pub mod surface;

pub use leaderboard::{GameKind, Leaderboard};
pub use runner::{Driver, Game};
pub use session::{Hud, Message, Phase};
pub use settings::{BalloonSettings, DartsSettings, FocusSettings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal host refresh rate the originals were tuned against (Hz)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Play area dimensions (drawing-surface coordinate space)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Ticks a terminal-phase message stays up before the session goes idle
    pub const TERMINAL_MESSAGE_TICKS: u32 = 180;
    /// Ticks a level banner stays up
    pub const LEVEL_MESSAGE_TICKS: u32 = 120;
    /// Ticks a hit/penalty notice stays up
    pub const HIT_MESSAGE_TICKS: u32 = 60;
    /// Ticks a score-delta notice stays up
    pub const SCORE_MESSAGE_TICKS: u32 = 30;
}

/// Center of the play area
#[inline]
pub fn play_center() -> Vec2 {
    Vec2::new(consts::PLAY_WIDTH / 2.0, consts::PLAY_HEIGHT / 2.0)
}
