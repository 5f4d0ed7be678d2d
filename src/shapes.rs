//! Placeholder figures assembled from surface primitives
//!
//! The originals drew photo and bezier-curve assets; asset loading is out of
//! scope here, so these stand-ins mirror the no-image fallback drawings.

use glam::Vec2;

use crate::surface::{Color, Surface};

/// A heart marker: two lobes over a point
pub fn heart(out: &mut dyn Surface, center: Vec2, size: f32, color: Color) {
    let r = size * 0.5;
    out.fill_circle(center + Vec2::new(-r * 0.5, -r * 0.3), r * 0.55, color);
    out.fill_circle(center + Vec2::new(r * 0.5, -r * 0.3), r * 0.55, color);
    out.fill_poly(
        &[
            center + Vec2::new(-r * 0.95, -r * 0.1),
            center + Vec2::new(r * 0.95, -r * 0.1),
            center + Vec2::new(0.0, r),
        ],
        color,
    );
}

/// The stick-figure avatar the balloon game falls back to without its portrait
pub fn stick_figure(out: &mut dyn Surface, center: Vec2, radius: f32, color: Color) {
    let head = Color::rgb(0xFFD700);

    // Body and head
    out.fill_circle(center, radius, color);
    out.fill_circle(center + Vec2::new(0.0, -radius * 0.7), radius * 0.5, head);

    // Eyes
    let eye_y = -radius * 0.8;
    out.fill_circle(center + Vec2::new(-radius * 0.2, eye_y), radius * 0.1, Color::WHITE);
    out.fill_circle(center + Vec2::new(radius * 0.2, eye_y), radius * 0.1, Color::WHITE);
    out.fill_circle(center + Vec2::new(-radius * 0.2, eye_y), radius * 0.05, Color::BLACK);
    out.fill_circle(center + Vec2::new(radius * 0.2, eye_y), radius * 0.05, Color::BLACK);

    // Arms
    out.line(
        center + Vec2::new(-radius * 0.8, 0.0),
        center + Vec2::new(-radius * 1.5, -radius * 0.5),
        5.0,
        color,
    );
    out.line(
        center + Vec2::new(radius * 0.8, 0.0),
        center + Vec2::new(radius * 1.5, -radius * 0.5),
        5.0,
        color,
    );

    // Legs
    out.line(
        center + Vec2::new(-radius * 0.3, radius * 0.8),
        center + Vec2::new(-radius * 0.5, radius * 1.5),
        5.0,
        color,
    );
    out.line(
        center + Vec2::new(radius * 0.3, radius * 0.8),
        center + Vec2::new(radius * 0.5, radius * 1.5),
        5.0,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawList;

    #[test]
    fn heart_emits_lobes_and_point() {
        let mut list = DrawList::new();
        heart(&mut list, Vec2::new(10.0, 10.0), 15.0, Color::rgb(0xFF0066));
        assert_eq!(list.len(), 3);
    }
}
