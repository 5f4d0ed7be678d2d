//! Rotating dartboard heart-toss
//!
//! A click schedules a delayed throw at the clicked point; the resolution
//! measures the landing against a tolerance band around the board ring.
//! Hits attach hearts that ride the rotation; landing on an attached heart
//! ends the session. Each level carries a time budget and a miss budget.

pub mod render;
pub mod state;
pub mod tick;

pub use state::{Board, DartsSession, PendingThrow, StuckHeart};
pub use tick::{handle_click, tick};

use glam::Vec2;

use crate::leaderboard::GameKind;
use crate::session::{Hud, Phase};
use crate::surface::Surface;

impl crate::runner::Game for DartsSession {
    fn start(&mut self) {
        DartsSession::start(self);
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
        DartsSession::hud(self)
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
        GameKind::Darts
    }
}
