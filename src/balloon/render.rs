//! Balloon renderer
//!
//! Read-only pass: background, drifting hearts, pop particles, balloons,
//! the avatar, the HUD panel, and the transient message. Placeholder
//! primitives stand in for the excluded portrait assets.

use glam::Vec2;

use super::state::{BalloonSession, Particle};
use crate::consts::*;
use crate::shapes;
use crate::surface::{Color, Surface, TextAlign};

const BALLOON_COLORS: [Color; 10] = [
    Color::rgb(0xFF4081), // pink
    Color::rgb(0x7C4DFF), // purple
    Color::rgb(0x448AFF), // blue
    Color::rgb(0x00BCD4), // cyan
    Color::rgb(0x009688), // teal
    Color::rgb(0x4CAF50), // green
    Color::rgb(0xFFC107), // amber
    Color::rgb(0xFF5722), // deep orange
    Color::rgb(0x795548), // brown
    Color::rgb(0x9E9E9E), // grey
];

const HEART_COLORS: [Color; 8] = [
    Color::rgb(0xFF4081),
    Color::rgb(0xFF80AB),
    Color::rgb(0xFF1744),
    Color::rgb(0xD50000),
    Color::rgb(0xC51162),
    Color::rgb(0xFF4081),
    Color::rgb(0xFF80AB),
    Color::rgb(0xFF1744),
];

pub fn render(s: &BalloonSession, out: &mut dyn Surface) {
    background(out);

    for h in &s.ambient {
        let color = HEART_COLORS[h.color as usize % HEART_COLORS.len()];
        shapes::heart(out, h.pos, h.size, color);
    }

    for p in &s.particles {
        particle(out, p);
    }

    shapes::stick_figure(out, s.avatar, 30.0, Color::rgb(0x333333));

    for b in &s.balloons {
        let color = BALLOON_COLORS[b.color as usize % BALLOON_COLORS.len()];
        out.fill_circle(b.pos, b.size, color);
        // String
        out.line(
            b.pos + Vec2::new(0.0, b.size),
            b.pos + Vec2::new(0.0, b.size + 12.0),
            1.0,
            Color::WHITE,
        );
    }

    hud_panel(s, out);
}

fn background(out: &mut dyn Surface) {
    // Dark pink over deep purple, split where the gradient used to blend
    out.fill_rect(
        Vec2::ZERO,
        Vec2::new(PLAY_WIDTH, PLAY_HEIGHT / 2.0),
        Color::rgb(0x880E4F),
    );
    out.fill_rect(
        Vec2::new(0.0, PLAY_HEIGHT / 2.0),
        Vec2::new(PLAY_WIDTH, PLAY_HEIGHT / 2.0),
        Color::rgb(0x4A148C),
    );

    // Star field, jittered per index so it holds still frame to frame
    for i in 0..50u32 {
        let hash = i.wrapping_mul(2654435761).wrapping_add(97);
        let x = (hash % 1000) as f32 / 1000.0 * PLAY_WIDTH;
        let y = ((hash >> 10) % 1000) as f32 / 1000.0 * PLAY_HEIGHT;
        let size = 1.0 + ((hash >> 20) % 3) as f32;
        out.fill_circle(Vec2::new(x, y), size, Color::rgba(0x80FF_C0CB));
    }
}

fn particle(out: &mut dyn Surface, p: &Particle) {
    let fade = p.life as f32 / p.max_life as f32;
    let color = BALLOON_COLORS[p.color as usize % BALLOON_COLORS.len()];
    out.fill_circle(p.pos, p.size * (0.5 + fade * 0.5), color);
}

fn hud_panel(s: &BalloonSession, out: &mut dyn Surface) {
    let hud = s.hud();

    out.fill_rect(
        Vec2::new(10.0, 10.0),
        Vec2::new(200.0, 120.0),
        Color::rgba(0x8000_0000),
    );
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
