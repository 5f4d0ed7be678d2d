//! Darts renderer: the rotating board, stuck hearts riding it, the resting
//! or in-flight heart, and the HUD column.

use glam::Vec2;

use super::state::DartsSession;
use crate::consts::*;
use crate::shapes;
use crate::surface::{Color, Surface, TextAlign};

const BOARD_COLOR: Color = Color::rgb(0x4CAF50);
const HEART_COLOR: Color = Color::rgb(0xFF0066);
const TIME_WARN_COLOR: Color = Color::rgb(0xFF0000);

pub fn render(s: &DartsSession, out: &mut dyn Surface) {
    out.fill_rect(
        Vec2::ZERO,
        Vec2::new(PLAY_WIDTH, PLAY_HEIGHT),
        Color::rgb(0xFDF6F0),
    );

    // Board ring plus decorative inner rings
    out.stroke_circle(s.board.center, s.board.radius, 20.0, BOARD_COLOR);
    for i in 1..=3 {
        out.stroke_circle(
            s.board.center,
            s.board.radius - (i as f32 * 15.0),
            2.0,
            BOARD_COLOR,
        );
    }
    // Hit zone indicator
    out.stroke_circle(s.board.center, s.board.radius, 2.0, HEART_COLOR);

    for heart in &s.stuck {
        shapes::heart(out, heart.position(&s.board), s.settings.heart_size, HEART_COLOR);
    }

    // The player's heart: lerped along its flight, or waiting at the rest
    match &s.throw {
        Some(t) => {
            let at = t.origin.lerp(t.target, t.progress);
            shapes::heart(out, at, s.settings.heart_size, HEART_COLOR);
        }
        None => shapes::heart(out, s.heart_rest, s.settings.heart_size, HEART_COLOR),
    }

    let hud = s.hud();
    for (i, (label, value)) in hud.lines.iter().enumerate() {
        let color = if label == "Time" && s.time_remaining_secs() <= 5 {
            TIME_WARN_COLOR
        } else {
            Color::BLACK
        };
        out.text(
            &format!("{label}: {value}"),
            Vec2::new(20.0, 30.0 + i as f32 * 30.0),
            20.0,
            TextAlign::Left,
            color,
        );
    }
    if let Some(message) = hud.message {
        out.text(
            &message,
            Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT / 2.0),
            48.0,
            TextAlign::Center,
            HEART_COLOR,
        );
    }
}
