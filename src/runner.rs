//! Single-threaded tick driver
//!
//! Models the host's display-refresh callback: queued pointer clicks drain
//! first (the host event queue serializes them against the tick), then one
//! simulation step, then one render pass. The continue flag is checked
//! before the next frame is scheduled; `Idle` stops the loop.

use std::collections::VecDeque;

use glam::Vec2;

use crate::leaderboard::{GameKind, Leaderboard};
use crate::session::{Hud, Phase};
use crate::surface::Surface;

/// One playable game session, as seen by the driver
pub trait Game {
    /// Full in-memory reset into `Running`
    fn start(&mut self);
    /// Advance one frame
    fn advance(&mut self);
    /// Resolve a pointer click in play-area coordinates
    fn handle_click(&mut self, at: Vec2);
    /// Emit this frame's draw commands (read-only)
    fn render(&self, surface: &mut dyn Surface);
    /// Current UI text block (read-only)
    fn hud(&self) -> Hud;
    fn phase(&self) -> Phase;
    fn score(&self) -> u32;
    fn level(&self) -> u32;
    fn kind(&self) -> GameKind;
}

/// Drives one session at the host's refresh cadence
pub struct Driver<G> {
    game: G,
    clicks: VecDeque<Vec2>,
    board: Leaderboard,
    was_terminal: bool,
}

impl<G: Game> Driver<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            clicks: VecDeque::new(),
            board: Leaderboard::new(),
            was_terminal: false,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }

    /// Start (or restart) the session
    pub fn start(&mut self) {
        self.clicks.clear();
        self.was_terminal = false;
        self.game.start();
        log::info!("{}: session started", self.game.kind().as_str());
    }

    /// Queue a pointer click; it is applied before the next advance
    pub fn push_click(&mut self, at: Vec2) {
        self.clicks.push_back(at);
    }

    /// One frame: input, simulation step, render. Returns whether the host
    /// should schedule another frame.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> bool {
        while let Some(at) = self.clicks.pop_front() {
            self.game.handle_click(at);
        }
        self.game.advance();
        self.record_terminal();
        self.game.render(surface);
        self.game.phase() != Phase::Idle
    }

    /// Submit the final score once per session, on entering a terminal phase
    fn record_terminal(&mut self) {
        let terminal = self.game.phase().is_terminal();
        if terminal && !self.was_terminal {
            let kind = self.game.kind();
            let score = self.game.score();
            match self.board.submit(kind, score, self.game.level()) {
                Some(rank) => {
                    log::info!("{}: final score {score}, board rank {rank}", kind.as_str())
                }
                None => log::info!("{}: final score {score}", kind.as_str()),
            }
        }
        self.was_terminal = terminal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusSession;
    use crate::surface::DrawList;

    #[test]
    fn frame_reports_continue_until_idle() {
        let mut driver = Driver::new(FocusSession::new(1));
        let mut out = DrawList::new();

        // Not started yet: one frame, then the loop stops
        assert!(!driver.frame(&mut out));

        driver.start();
        out.clear();
        assert!(driver.frame(&mut out));
        assert!(!out.is_empty());
    }

    #[test]
    fn clicks_drain_before_the_tick() {
        let mut driver = Driver::new(FocusSession::new(1));
        driver.start();
        driver.game_mut().score = 75;

        // Two queued misses land in the same frame
        driver.push_click(Vec2::new(1.0, 1.0));
        driver.push_click(Vec2::new(2.0, 2.0));
        let mut out = DrawList::new();
        driver.frame(&mut out);

        assert_eq!(driver.game().score, 0);
    }

    #[test]
    fn terminal_session_is_recorded_once() {
        let mut driver = Driver::new(FocusSession::new(1));
        driver.start();
        driver.game_mut().score = 250;
        driver.game_mut().lives = 1;
        driver.game_mut().phase = crate::session::Phase::GameOver;
        driver
            .game_mut()
            .message
            .arm("Game Over", crate::consts::TERMINAL_MESSAGE_TICKS);

        let mut out = DrawList::new();
        driver.frame(&mut out);
        driver.frame(&mut out);

        assert_eq!(driver.leaderboard().entries().len(), 1);
        assert_eq!(driver.leaderboard().entries()[0].score, 250);
    }
}
