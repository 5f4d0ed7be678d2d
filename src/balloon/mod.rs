//! "Pop the hero-balloon" clicker
//!
//! Balloons spawn on the play-area edges and drift toward the center
//! avatar; clicking pops them for points. A balloon reaching the avatar
//! costs a life. Popping the level quota advances the level and tightens
//! the spawn interval.

pub mod render;
pub mod state;
pub mod tick;

pub use state::{AmbientHeart, Balloon, BalloonSession, Particle};
pub use tick::{handle_click, tick};

use glam::Vec2;

use crate::leaderboard::GameKind;
use crate::session::{Hud, Phase};
use crate::surface::Surface;

impl crate::runner::Game for BalloonSession {
    fn start(&mut self) {
        BalloonSession::start(self);
    }

    fn advance(&mut self) {
        tick::tick(self);
    }

    fn handle_click(&mut self, at: Vec2) {
        tick::handle_click(self, at);
    }

    fn render(&self, surface: &mut dyn Surface) {
        render::render(self, surface);
    }

    fn hud(&self) -> Hud {
        BalloonSession::hud(self)
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn kind(&self) -> GameKind {
        GameKind::Balloon
    }
}
