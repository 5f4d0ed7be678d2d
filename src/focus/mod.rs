//! "Focus vs. distraction" clicker
//!
//! Green targets stream toward the player marker and score on click; red
//! distractions wander and bounce, costing a life when clicked. Empty-space
//! clicks are penalized. The score threshold per level drives difficulty.

pub mod render;
pub mod state;
pub mod tick;

pub use state::{Distraction, FocusSession, Target};
pub use tick::{handle_click, tick};

use glam::Vec2;

use crate::leaderboard::GameKind;
use crate::session::{Hud, Phase};
use crate::surface::Surface;

impl crate::runner::Game for FocusSession {
    fn start(&mut self) {
        FocusSession::start(self);
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
        FocusSession::hud(self)
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
        GameKind::Focus
    }
}
