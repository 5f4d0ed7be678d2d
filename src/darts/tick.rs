//! Darts per-frame update, throw scheduling, and delayed resolution
//!
//! A click does not hit-test anything directly: it schedules a one-shot
//! resolution a fixed number of ticks later, guarded by the single
//! in-flight throw slot. The resolution applies the same state-mutation
//! rules as any other transition.

use glam::Vec2;

use super::state::{DartsSession, PendingThrow, StuckHeart};
use crate::consts::*;
use crate::geom;
use crate::session::Phase;

/// Animation progress gained per tick while a throw is in flight
const THROW_ANIM_STEP: f32 = 0.1;

/// Advance the session by one frame
pub fn tick(s: &mut DartsSession) {
    match s.phase {
        Phase::Idle => return,
        Phase::GameOver | Phase::Finished => {
            s.message.tick();
            if s.message.visible().is_none() {
                s.phase = Phase::Idle;
            }
            return;
        }
        Phase::Running => {}
    }

    s.ticks += 1;

    // Level time budget
    if s.time_remaining_secs() == 0 {
        level_failed(s);
    }

    // Board speed ramps toward the max over the session
    if s.board.rotation_speed < s.board.max_speed {
        s.board.rotation_speed = (s.board.base_speed
            + s.ticks as f32 * s.settings.rotation_ramp)
            .min(s.board.max_speed);
    }
    s.board.rotation += s.board.rotation_speed;

    // Animate the in-flight throw, then resolve it when due
    if let Some(t) = s.throw.as_mut() {
        t.progress = (t.progress + THROW_ANIM_STEP).min(1.0);
    }
    let now = s.ticks;
    if let Some(t) = s.throw.take_if(|t| now >= t.resolve_at) {
        resolve_throw(s, t.target);
    }

    s.message.tick();
}

/// Schedule a throw toward the click, unless one is already in flight
pub fn handle_click(s: &mut DartsSession, at: Vec2) {
    if s.phase != Phase::Running || s.throw.is_some() {
        return;
    }

    s.throw = Some(PendingThrow {
        origin: s.heart_rest,
        target: at,
        resolve_at: s.ticks + u64::from(s.settings.throw_resolve_ticks),
        progress: 0.0,
    });
}

/// Apply the delayed outcome of a throw at its terminal position
fn resolve_throw(s: &mut DartsSession, target: Vec2) {
    let off = geom::ring_offset(target, s.board.center, s.board.radius);

    if off <= s.settings.ring_tolerance {
        s.hits += 1;
        s.score += s.settings.hit_score;
        s.message
            .arm(format!("Distance: {}", off.round() as u32), HIT_MESSAGE_TICKS);

        let dir = target - s.board.center;
        let angle = dir.y.atan2(dir.x);
        let landing = s.board.center + Vec2::from_angle(angle) * s.board.radius;

        // Landing on an already-attached heart ends the session outright,
        // hit accuracy notwithstanding
        for other in &s.stuck {
            if landing.distance(other.position(&s.board)) < s.settings.heart_size {
                s.phase = Phase::GameOver;
                s.message.arm("Game Over!", TERMINAL_MESSAGE_TICKS);
                log::info!(
                    "darts: heart collision at level {}, score {}",
                    s.level,
                    s.score
                );
                return;
            }
        }

        s.stuck.push(StuckHeart {
            angle,
            rotation_offset: s.board.rotation,
        });
        if s.stuck.len() as u32 >= s.settings.hearts_per_level {
            level_complete(s);
        }
    } else {
        s.misses += 1;
        s.message
            .arm(format!("Miss by: {}", off.round() as u32), HIT_MESSAGE_TICKS);
        if s.misses >= s.settings.max_misses_per_level {
            level_failed(s);
        }
    }
}

fn level_complete(s: &mut DartsSession) {
    if s.level < s.settings.max_level {
        s.level += 1;
        s.board.base_speed += s.settings.level_speed_bonus;
        s.board.max_speed += s.settings.level_max_speed_bonus;
        s.stuck.clear();
        s.level_started_at = s.ticks;
        s.message
            .arm(format!("Level {}!", s.level), LEVEL_MESSAGE_TICKS);
        log::debug!(
            "darts: level {} (base speed {:.3}, max {:.3})",
            s.level,
            s.board.base_speed,
            s.board.max_speed
        );
    } else {
        s.phase = Phase::Finished;
        s.message.arm("Game Complete!", TERMINAL_MESSAGE_TICKS);
        log::info!("darts: all levels cleared, score {}", s.score);
    }
}

/// The level restarts in place: decorations and misses reset, a score
/// penalty lands, the time budget re-arms. The session keeps running.
fn level_failed(s: &mut DartsSession) {
    s.stuck.clear();
    s.misses = 0;
    s.score = s.score.saturating_sub(s.settings.level_fail_penalty);
    s.level_started_at = s.ticks;
    s.message.arm("Level Failed!", LEVEL_MESSAGE_TICKS);
    log::debug!("darts: level {} failed, score {}", s.level, s.score);
}
