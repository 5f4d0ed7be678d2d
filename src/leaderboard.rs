//! In-memory session bests
//!
//! Tracks the best finished sessions across all three games within one
//! process run. Nothing is persisted; a fresh process starts empty.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// Which game a session belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    Balloon,
    Focus,
    Darts,
}

impl GameKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GameKind::Balloon => "balloon",
            GameKind::Focus => "focus",
            GameKind::Darts => "darts",
        }
    }
}

/// One finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub game: GameKind,
    pub score: u32,
    pub level: u32,
}

/// Best sessions, sorted by score descending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a score would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished session. Returns the 1-indexed rank achieved, or
    /// `None` if the score didn't qualify.
    pub fn submit(&mut self, game: GameKind, score: u32, level: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = Entry { game, score, level };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score recorded for one game
    pub fn best_for(&self, game: GameKind) -> Option<u32> {
        self.entries
            .iter()
            .filter(|e| e.game == game)
            .map(|e| e.score)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scores_never_qualify() {
        let mut board = Leaderboard::new();
        assert!(!board.qualifies(0));
        assert_eq!(board.submit(GameKind::Focus, 0, 1), None);
        assert!(board.is_empty());
    }

    #[test]
    fn ranks_are_sorted_descending() {
        let mut board = Leaderboard::new();
        assert_eq!(board.submit(GameKind::Balloon, 100, 2), Some(1));
        assert_eq!(board.submit(GameKind::Focus, 300, 3), Some(1));
        assert_eq!(board.submit(GameKind::Darts, 200, 2), Some(2));

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
    }

    #[test]
    fn board_truncates_at_capacity() {
        let mut board = Leaderboard::new();
        for i in 1..=12u32 {
            board.submit(GameKind::Focus, i * 10, 1);
        }
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        // The two lowest entries fell off
        assert!(board.entries().iter().all(|e| e.score > 20));
        // A low score no longer qualifies
        assert!(!board.qualifies(25));
    }

    #[test]
    fn best_for_filters_by_game() {
        let mut board = Leaderboard::new();
        board.submit(GameKind::Balloon, 50, 1);
        board.submit(GameKind::Darts, 400, 4);
        board.submit(GameKind::Balloon, 80, 2);

        assert_eq!(board.best_for(GameKind::Balloon), Some(80));
        assert_eq!(board.best_for(GameKind::Darts), Some(400));
        assert_eq!(board.best_for(GameKind::Focus), None);
    }
}
