//! Controller phases, transient messages, and HUD text
//!
//! Shared by all three games. A session's phase is the whole of its
//! control state machine; level-complete and level-failed are instantaneous
//! transitions inside `Running`, not phases of their own.

use serde::{Deserialize, Serialize};

/// Controller state for one play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-start / post-end; simulation paused until an explicit start
    #[default]
    Idle,
    /// Spawner and simulation step active
    Running,
    /// Session lost; terminal message up, then back to Idle
    GameOver,
    /// Final level cleared; terminal message up, then back to Idle
    Finished,
}

impl Phase {
    /// The session has ended and is winding down to Idle
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Finished)
    }
}

/// Transient center-screen message with a tick countdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    ticks_left: u32,
}

impl Message {
    /// Arm (or replace) the message for `ticks` frames
    pub fn arm(&mut self, text: impl Into<String>, ticks: u32) {
        self.text = text.into();
        self.ticks_left = ticks;
    }

    /// Advance the countdown one frame
    pub fn tick(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    /// The text, while the countdown is positive
    pub fn visible(&self) -> Option<&str> {
        (self.ticks_left > 0).then_some(self.text.as_str())
    }

    /// Frames the message has left on screen
    pub fn remaining(&self) -> u32 {
        self.ticks_left
    }
}

/// Read-only UI text block, refreshed every frame
///
/// Labeled values drawn top-down in the corner panel, plus the optional
/// centered message. Rendering the same state twice yields the same `Hud`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub lines: Vec<(String, String)>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_counts_down_and_hides() {
        let mut m = Message::default();
        assert_eq!(m.visible(), None);

        m.arm("Level 2!", 2);
        assert_eq!(m.visible(), Some("Level 2!"));
        m.tick();
        assert_eq!(m.visible(), Some("Level 2!"));
        m.tick();
        assert_eq!(m.visible(), None);
        m.tick(); // saturates
        assert_eq!(m.remaining(), 0);
    }

    #[test]
    fn rearming_replaces_text_and_countdown() {
        let mut m = Message::default();
        m.arm("-1", 30);
        m.tick();
        m.arm("Ouch!", 60);
        assert_eq!(m.visible(), Some("Ouch!"));
        assert_eq!(m.remaining(), 60);
    }

    #[test]
    fn terminal_phases() {
        assert!(Phase::GameOver.is_terminal());
        assert!(Phase::Finished.is_terminal());
        assert!(!Phase::Running.is_terminal());
        assert!(!Phase::Idle.is_terminal());
    }
}
