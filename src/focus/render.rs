//! Focus renderer: plain shapes on a dark field, crosshairs on targets,
//! an X on distractions.

use glam::Vec2;

use super::state::FocusSession;
use crate::consts::*;
use crate::surface::{Color, Surface, TextAlign};

const TARGET_COLOR: Color = Color::rgb(0x4CAF50);
const DISTRACTION_COLOR: Color = Color::rgb(0xFF0066);
const PLAYER_COLOR: Color = Color::rgb(0x4CAF50);

pub fn render(s: &FocusSession, out: &mut dyn Surface) {
    out.fill_rect(
        Vec2::ZERO,
        Vec2::new(PLAY_WIDTH, PLAY_HEIGHT),
        Color::rgb(0x101018),
    );

    out.fill_circle(s.player, 20.0, PLAYER_COLOR);

    for t in &s.targets {
        out.fill_circle(t.pos, t.size, TARGET_COLOR);
        // Crosshair
        let r = t.size / 2.0;
        out.line(
            t.pos - Vec2::new(r, 0.0),
            t.pos + Vec2::new(r, 0.0),
            2.0,
            Color::WHITE,
        );
        out.line(
            t.pos - Vec2::new(0.0, r),
            t.pos + Vec2::new(0.0, r),
            2.0,
            Color::WHITE,
        );
    }

    for d in &s.distractions {
        out.fill_circle(d.pos, d.size, DISTRACTION_COLOR);
        // X marker
        let r = d.size / 2.0;
        out.line(
            d.pos - Vec2::new(r, r),
            d.pos + Vec2::new(r, r),
            3.0,
            Color::WHITE,
        );
        out.line(
            d.pos + Vec2::new(r, -r),
            d.pos + Vec2::new(-r, r),
            3.0,
            Color::WHITE,
        );
    }

    let hud = s.hud();
    for (i, (label, value)) in hud.lines.iter().enumerate() {
        out.text(
            &format!("{label}: {value}"),
            Vec2::new(20.0, 20.0 + i as f32 * 30.0),
            24.0,
            TextAlign::Left,
            Color::WHITE,
        );
    }
    if let Some(message) = hud.message {
        out.text(
            &message,
            Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT / 2.0),
            36.0,
            TextAlign::Center,
            Color::WHITE,
        );
    }
}
