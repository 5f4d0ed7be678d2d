//! Hit tests and spawn geometry shared by the three games
//!
//! Everything here is pure: positions in, positions/booleans out. The games
//! own all state mutation.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned footprint used for avatar contact tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub center: Vec2,
    /// Half extents on each axis
    pub half: Vec2,
}

impl Footprint {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Point-in-rectangle test, edges inclusive
    pub fn contains(&self, p: Vec2) -> bool {
        (p.x - self.center.x).abs() <= self.half.x && (p.y - self.center.y).abs() <= self.half.y
    }
}

/// Strict point-in-circle test (a click exactly on the rim misses)
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, p: Vec2) -> bool {
    p.distance(center) < radius
}

/// How far a point sits off the ring band: `|distance(p, center) - radius|`
#[inline]
pub fn ring_offset(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p.distance(center) - radius).abs()
}

/// Velocity aimed from `from` toward `to`, normalized to `speed`
///
/// Degenerate (`from == to`) aims collapse to zero velocity.
#[inline]
pub fn aim(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}

/// Uniformly random direction at `speed`
pub fn random_direction<R: Rng>(rng: &mut R, speed: f32) -> Vec2 {
    Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU)) * speed
}

/// Random spawn point on one of the four play-area edges, chosen uniformly
pub fn edge_spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    match rng.random_range(0..4u8) {
        0 => Vec2::new(rng.random_range(0.0..width), 0.0),
        1 => Vec2::new(width, rng.random_range(0.0..height)),
        2 => Vec2::new(rng.random_range(0.0..width), height),
        _ => Vec2::new(0.0, rng.random_range(0.0..height)),
    }
}

/// True once an entity has fully left the padded play bounds
#[inline]
pub fn fully_outside(pos: Vec2, size: f32, width: f32, height: f32) -> bool {
    pos.x < -size || pos.x > width + size || pos.y < -size || pos.y > height + size
}
