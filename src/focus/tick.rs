//! Focus per-frame update and click handling

use glam::Vec2;

use super::state::{Distraction, FocusSession, Target};
use crate::consts::*;
use crate::geom;
use crate::session::Phase;

/// Advance the session by one frame
pub fn tick(s: &mut FocusSession) {
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

    if s.ticks % u64::from(s.settings.target_spawn_interval) == 0
        && (s.targets.len() as u32) < s.settings.target_cap
    {
        spawn_target(s);
    }
    if s.ticks % u64::from(s.settings.distraction_spawn_interval) == 0
        && (s.distractions.len() as u32) < s.settings.distraction_cap
    {
        spawn_distraction(s);
    }

    for t in &mut s.targets {
        t.pos += t.vel;
        t.lifetime = t.lifetime.saturating_sub(1);
    }
    s.targets
        .retain(|t| t.lifetime > 0 && !geom::fully_outside(t.pos, t.size, PLAY_WIDTH, PLAY_HEIGHT));

    for d in &mut s.distractions {
        d.pos += d.vel;
        // Bounce off the walls
        if d.pos.x < d.size || d.pos.x > PLAY_WIDTH - d.size {
            d.vel.x = -d.vel.x;
        }
        if d.pos.y < d.size || d.pos.y > PLAY_HEIGHT - d.size {
            d.vel.y = -d.vel.y;
        }
        d.lifetime = d.lifetime.saturating_sub(1);
    }
    s.distractions.retain(|d| d.lifetime > 0);

    s.message.tick();
}

/// Resolve a pointer click: targets first, then distractions, newest first;
/// empty space charges the miss penalty.
pub fn handle_click(s: &mut FocusSession, at: Vec2) {
    if s.phase != Phase::Running {
        return;
    }

    for i in (0..s.targets.len()).rev() {
        if geom::circle_contains(s.targets[i].pos, s.targets[i].size, at) {
            s.targets.remove(i);
            s.score += s.settings.hit_score;
            s.targets_hit += 1;
            s.message
                .arm(format!("+{}", s.settings.hit_score), SCORE_MESSAGE_TICKS);
            if s.score >= s.level_threshold() {
                level_complete(s);
            }
            return;
        }
    }

    for i in (0..s.distractions.len()).rev() {
        if geom::circle_contains(s.distractions[i].pos, s.distractions[i].size, at) {
            s.distractions.remove(i);
            s.lives = s.lives.saturating_sub(1);
            s.distractions_hit += 1;
            s.message.arm("Distraction!", HIT_MESSAGE_TICKS);
            if s.lives == 0 {
                s.phase = Phase::GameOver;
                s.message.arm("Game Over", TERMINAL_MESSAGE_TICKS);
                log::info!("focus: out of lives at level {}, score {}", s.level, s.score);
            }
            return;
        }
    }

    s.score = s.score.saturating_sub(s.settings.miss_penalty);
    s.message
        .arm(format!("-{}", s.settings.miss_penalty), SCORE_MESSAGE_TICKS);
}

fn level_complete(s: &mut FocusSession) {
    if s.level < s.settings.max_level {
        s.level += 1;
        s.settings.level_up();
        s.message
            .arm(format!("Level {}!", s.level), LEVEL_MESSAGE_TICKS);
        log::debug!(
            "focus: level {} (target interval {}, distraction interval {})",
            s.level,
            s.settings.target_spawn_interval,
            s.settings.distraction_spawn_interval
        );
    } else {
        s.phase = Phase::Finished;
        s.message.arm("Game Complete!", TERMINAL_MESSAGE_TICKS);
        log::info!("focus: all levels cleared, score {}", s.score);
    }
}

fn spawn_target(s: &mut FocusSession) {
    let pos = geom::edge_spawn(&mut s.rng, PLAY_WIDTH, PLAY_HEIGHT);
    s.targets.push(Target {
        pos,
        vel: geom::aim(pos, s.player, s.settings.target_speed),
        size: s.settings.target_size,
        lifetime: s.settings.target_lifetime,
    });
}

fn spawn_distraction(s: &mut FocusSession) {
    let pos = geom::edge_spawn(&mut s.rng, PLAY_WIDTH, PLAY_HEIGHT);
    let vel = geom::random_direction(&mut s.rng, s.settings.distraction_speed);
    s.distractions.push(Distraction {
        pos,
        vel,
        size: s.settings.distraction_size,
        lifetime: s.settings.distraction_lifetime,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FocusSettings;

    fn running_session() -> FocusSession {
        let mut s = FocusSession::new(4242);
        s.start();
        s
    }

    #[test]
    fn spawners_fire_on_their_intervals() {
        let mut s = running_session();
        for _ in 0..60 {
            tick(&mut s);
        }
        assert_eq!(s.targets.len(), 1);
        assert!(s.distractions.is_empty());

        for _ in 0..60 {
            tick(&mut s);
        }
        assert_eq!(s.targets.len(), 2);
        assert_eq!(s.distractions.len(), 1);
    }

    #[test]
    fn targets_expire_after_their_lifetime() {
        let mut s = running_session();
        s.targets.push(Target {
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::ZERO,
            size: 30.0,
            lifetime: 3,
        });
        for _ in 0..3 {
            tick(&mut s);
        }
        assert!(s.targets.is_empty());
    }

    #[test]
    fn distractions_bounce_off_walls() {
        let mut s = running_session();
        s.distractions.push(Distraction {
            pos: Vec2::new(41.0, 300.0),
            vel: Vec2::new(-3.0, 0.0),
            size: 40.0,
            lifetime: 120,
        });
        tick(&mut s);
        assert!(s.distractions[0].vel.x > 0.0);
    }

    #[test]
    fn target_hit_scores() {
        let mut s = running_session();
        s.targets.push(Target {
            pos: Vec2::new(200.0, 200.0),
            vel: Vec2::ZERO,
            size: 30.0,
            lifetime: 100,
        });
        handle_click(&mut s, Vec2::new(210.0, 200.0));
        assert_eq!(s.score, 100);
        assert_eq!(s.targets_hit, 1);
        assert!(s.targets.is_empty());
        assert_eq!(s.message.visible(), Some("+100"));
    }

    #[test]
    fn distraction_click_costs_a_life() {
        let mut s = running_session();
        s.distractions.push(Distraction {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            size: 40.0,
            lifetime: 100,
        });
        handle_click(&mut s, Vec2::new(300.0, 300.0));
        assert_eq!(s.lives, s.settings.starting_lives - 1);
        assert_eq!(s.distractions_hit, 1);
        assert_eq!(s.message.visible(), Some("Distraction!"));
    }

    #[test]
    fn targets_shadow_overlapping_distractions() {
        let mut s = running_session();
        let at = Vec2::new(250.0, 250.0);
        s.distractions.push(Distraction {
            pos: at,
            vel: Vec2::ZERO,
            size: 40.0,
            lifetime: 100,
        });
        s.targets.push(Target {
            pos: at,
            vel: Vec2::ZERO,
            size: 30.0,
            lifetime: 100,
        });

        handle_click(&mut s, at);
        assert_eq!(s.score, 100);
        assert_eq!(s.lives, s.settings.starting_lives);
        assert_eq!(s.distractions.len(), 1);
    }

    #[test]
    fn threshold_crossing_levels_up_and_scales() {
        let mut s = running_session();
        let before = s.settings.clone();
        s.score = s.level_threshold() - s.settings.hit_score;
        s.targets.push(Target {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            size: 30.0,
            lifetime: 100,
        });

        handle_click(&mut s, Vec2::new(100.0, 100.0));
        assert_eq!(s.level, 2);
        assert!(s.settings.target_spawn_interval < before.target_spawn_interval);
        assert!(s.settings.target_speed > before.target_speed);
    }

    #[test]
    fn final_level_threshold_finishes_the_session() {
        let mut s = FocusSession::with_settings(
            7,
            FocusSettings {
                max_level: 2,
                ..FocusSettings::default()
            },
        );
        s.start();
        s.level = 2;
        s.score = s.level_threshold() - s.settings.hit_score;
        s.targets.push(Target {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            size: 30.0,
            lifetime: 100,
        });

        handle_click(&mut s, Vec2::new(100.0, 100.0));
        assert_eq!(s.phase, Phase::Finished);
    }

    #[test]
    fn game_over_only_when_lives_reach_zero() {
        let mut s = running_session();
        for _ in 0..s.settings.starting_lives {
            assert_ne!(s.phase, Phase::GameOver);
            s.distractions.push(Distraction {
                pos: Vec2::new(300.0, 300.0),
                vel: Vec2::ZERO,
                size: 40.0,
                lifetime: 100,
            });
            handle_click(&mut s, Vec2::new(300.0, 300.0));
        }
        assert_eq!(s.lives, 0);
        assert_eq!(s.phase, Phase::GameOver);
    }
}
