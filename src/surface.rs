//! Abstract immediate-mode drawing surface
//!
//! The simulations emit draw commands; a concrete backend (canvas shell,
//! GPU renderer, terminal) consumes them. Nothing flows back into the core,
//! so the render pass stays read-only with respect to gameplay.

use glam::Vec2;

/// Packed 0xAARRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Opaque color from a 0xRRGGBB literal
    pub const fn rgb(rgb: u32) -> Self {
        Self(0xFF00_0000 | rgb)
    }

    /// Color with explicit alpha from a 0xAARRGGBB literal
    pub const fn rgba(argb: u32) -> Self {
        Self(argb)
    }

    pub const WHITE: Self = Self::rgb(0xFF_FFFF);
    pub const BLACK: Self = Self::rgb(0x00_0000);
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// An immediate-mode 2D sink
///
/// Implementations rasterize however they like; the core never reads back.
pub trait Surface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn fill_poly(&mut self, points: &[Vec2], color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn text(&mut self, text: &str, at: Vec2, size: f32, align: TextAlign, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    FillRect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    FillPoly {
        points: Vec<Vec2>,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        at: Vec2,
        size: f32,
        align: TextAlign,
        color: Color,
    },
}

/// Records commands instead of rasterizing
///
/// The test backend, and a convenient wire format for thin rendering shells
/// that replay the list against a real canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Surface for DrawList {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.cmds.push(DrawCmd::FillRect { min, size, color });
    }

    fn fill_poly(&mut self, points: &[Vec2], color: Color) {
        self.cmds.push(DrawCmd::FillPoly {
            points: points.to_vec(),
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, text: &str, at: Vec2, size: f32, align: TextAlign, color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            at,
            size,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::ZERO, 5.0, Color::WHITE);
        list.text("hi", Vec2::ONE, 24.0, TextAlign::Left, Color::BLACK);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.cmds[0], DrawCmd::FillCircle { radius, .. } if radius == 5.0));
        assert!(matches!(&list.cmds[1], DrawCmd::Text { text, .. } if text == "hi"));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0xFF4081).0, 0xFFFF_4081);
        assert_eq!(Color::rgba(0x8000_0000).0, 0x8000_0000);
    }
}
