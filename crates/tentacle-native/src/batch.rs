// CPU tessellation of draw calls into a flat triangle list for the GPU.

use glam::Vec2;
use tentacle_core::{DrawSurface, Rgb};

pub const CIRCLE_SEGMENTS: usize = 16;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Triangles accumulated for one frame, in screen pixels.
#[derive(Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                pos: p.to_array(),
                color,
            });
        }
    }
}

impl DrawSurface for ShapeBatch {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb, thickness: f32) {
        let span = to - from;
        let length = span.length();
        if length < 1e-6 || thickness <= 0.0 {
            return;
        }
        let n = span.perp() / length * (thickness * 0.5);
        let color = color.to_rgba_f32();
        self.push_triangle(from + n, from - n, to - n, color);
        self.push_triangle(from + n, to - n, to + n, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        let color = color.to_rgba_f32();
        let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
        for i in 0..CIRCLE_SEGMENTS {
            let a0 = step * i as f32;
            let a1 = step * (i + 1) as f32;
            let p0 = center + Vec2::new(a0.cos(), a0.sin()) * radius;
            let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;
            self.push_triangle(center, p0, p1, color);
        }
    }
}
