//! Projection of the point chains onto a line/circle drawing surface.
//!
//! Nothing here owns simulation state; [`paint`] reads the chains after the
//! tick has finished writing them.

use glam::Vec2;

use crate::config::{Palette, StyleEffect};
use crate::constants::TIP_DIAMETER;
use crate::kinematics::Appendage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, truncated toward zero.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

/// Anything that can draw coloured lines and filled circles in screen space.
pub trait DrawSurface {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb, thickness: f32);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
}

/// Emits `P - 1` graded segments per appendage, plus a tip marker when the
/// style asks for one.
pub fn paint<S: DrawSurface + ?Sized>(
    appendages: &[Appendage],
    style: &StyleEffect,
    palette: &Palette,
    surface: &mut S,
) {
    for appendage in appendages {
        let points = appendage.points();
        let last = (points.len() - 1) as f32;
        for (j, pair) in points.windows(2).enumerate() {
            let t = j as f32 / last;
            let color = palette.head.lerp(palette.tail, t);
            surface.draw_line(pair[0], pair[1], color, style.thickness(t));
        }
        if style.draw_tip {
            surface.draw_circle(appendage.tip(), TIP_DIAMETER / 2.0, palette.tail);
        }
    }
}
