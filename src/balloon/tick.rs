//! Balloon per-frame update and click handling
//!
//! Spawner, simulation step, and the level controller all run inside
//! `tick`; `handle_click` is the input handler and may fire level
//! transitions of its own.

use glam::Vec2;

use super::state::BalloonSession;
use crate::consts::*;
use crate::session::Phase;

/// Advance the session by one frame
pub fn tick(s: &mut BalloonSession) {
    match s.phase {
        Phase::Idle => return,
        Phase::GameOver | Phase::Finished => {
            // Terminal banner winds down, then the session parks in Idle
            s.message.tick();
            if s.message.visible().is_none() {
                s.phase = Phase::Idle;
            }
            return;
        }
        Phase::Running => {}
    }

    s.ticks += 1;

    drift_ambient(s);
    update_particles(s);

    // Spawn gate: interval elapsed and below the live cap
    if s.ticks % u64::from(s.settings.spawn_interval) == 0
        && (s.balloons.len() as u32) < s.settings.balloons_per_level
    {
        s.spawn_balloon();
    }

    // Back-to-front so removal keeps the scan valid
    let avatar = s.avatar_footprint();
    let mut i = s.balloons.len();
    while i > 0 {
        i -= 1;
        let b = &mut s.balloons[i];
        b.pos += b.vel;
        if avatar.contains(b.pos) {
            s.balloons.remove(i);
            s.lives = s.lives.saturating_sub(1);
            s.message.arm("Ouch!", HIT_MESSAGE_TICKS);
            if s.lives == 0 {
                game_over(s);
                return;
            }
        }
    }

    s.message.tick();
}

/// Resolve a pointer click: pop the most recently spawned balloon under the
/// cursor, or charge the miss penalty.
pub fn handle_click(s: &mut BalloonSession, at: Vec2) {
    if s.phase != Phase::Running {
        return;
    }

    for i in (0..s.balloons.len()).rev() {
        let b = &s.balloons[i];
        if crate::geom::circle_contains(b.pos, b.size, at) {
            let (pos, color) = (b.pos, b.color);
            s.balloons.remove(i);
            s.burst(pos, color);
            s.score += s.settings.pop_score;
            s.popped += 1;
            if s.popped >= s.settings.balloons_per_level {
                level_complete(s);
            }
            return;
        }
    }

    s.score = s.score.saturating_sub(s.settings.miss_penalty);
    s.message
        .arm(format!("-{}", s.settings.miss_penalty), SCORE_MESSAGE_TICKS);
}

fn level_complete(s: &mut BalloonSession) {
    if s.level < s.settings.max_level {
        s.level += 1;
        s.popped = 0;
        s.balloons.clear();
        s.settings.level_up();
        s.message
            .arm(format!("Level {}!", s.level), LEVEL_MESSAGE_TICKS);
        log::debug!(
            "balloon: level {} (interval {}, speed {:.1})",
            s.level,
            s.settings.spawn_interval,
            s.settings.balloon_speed
        );
    } else {
        s.phase = Phase::Finished;
        s.message.arm("Game Complete!", TERMINAL_MESSAGE_TICKS);
        log::info!("balloon: all levels cleared, score {}", s.score);
    }
}

fn game_over(s: &mut BalloonSession) {
    s.phase = Phase::GameOver;
    s.message.arm("Game Over", TERMINAL_MESSAGE_TICKS);
    log::info!("balloon: out of lives at level {}, score {}", s.level, s.score);
}

fn drift_ambient(s: &mut BalloonSession) {
    for h in &mut s.ambient {
        h.pos += h.vel;
        if h.pos.x < -h.size {
            h.pos.x = PLAY_WIDTH + h.size;
        }
        if h.pos.x > PLAY_WIDTH + h.size {
            h.pos.x = -h.size;
        }
        if h.pos.y < -h.size {
            h.pos.y = PLAY_HEIGHT + h.size;
        }
        if h.pos.y > PLAY_HEIGHT + h.size {
            h.pos.y = -h.size;
        }
    }
}

fn update_particles(s: &mut BalloonSession) {
    for p in &mut s.particles {
        p.pos += p.vel;
        p.vel.y += 0.1; // gravity
        p.life = p.life.saturating_sub(1);
    }
    s.particles.retain(|p| p.life > 0);
}
