//! Shared drawing utilities for the mosaic visualizer.

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use mosaic::{Offset, Point, Polygon, Rgb};

pub mod stepper;
pub use stepper::ChordStepper;

/// Fraction of the window kept free around the mosaic at its widest.
const MARGIN: f32 = 0.05;

/// Converts a piece color to macroquad's color type.
pub fn polygon_color(color: Rgb) -> Color {
    let [r, g, b, a] = color.to_rgba_u8();
    Color::from_rgba(r, g, b, a)
}

/// Maps mosaic coordinates to screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub origin: Vec2,
    pub scale: f32,
}

impl View {
    /// Centers a square of side `size` in the window, leaving room for it to
    /// grow to `size * final_scale` without leaving the screen.
    pub fn fit(size: f64, final_scale: f64) -> Self {
        let (width, height) = (screen_width(), screen_height());
        let available = width.min(height) * (1.0 - 2.0 * MARGIN);
        let scale = available / (size * final_scale) as f32;
        let extent = size as f32 * scale;
        Self {
            origin: vec2((width - extent) / 2.0, (height - extent) / 2.0),
            scale,
        }
    }

    /// Projects a mosaic point to screen space.
    pub fn project(&self, p: Point) -> Vec2 {
        self.origin + vec2(p.x as f32, p.y as f32) * self.scale
    }
}

/// Draws a single piece, shifted by `offset`, as a filled fan plus an outline.
pub fn draw_polygon(polygon: &Polygon, offset: Offset, view: &View) {
    let points: Vec<Vec2> = polygon
        .displaced_vertices(offset)
        .into_iter()
        .map(|p| view.project(p))
        .collect();

    let color = polygon_color(polygon.color());

    let mesh_vertices: Vec<Vertex> = points
        .iter()
        .map(|p| Vertex::new2(vec3(p.x, p.y, 0.0), vec2(0.0, 0.0), color))
        .collect();

    // Fan triangulation: vertex 0 connects to all edges
    let mut indices: Vec<u16> = Vec::with_capacity((points.len() - 2) * 3);
    for i in 1..points.len() - 1 {
        indices.push(0);
        indices.push(i as u16);
        indices.push((i + 1) as u16);
    }

    draw_mesh(&Mesh {
        vertices: mesh_vertices,
        indices,
        texture: None,
    });

    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(a.x, a.y, b.x, b.y, 1.0, Color::from_rgba(30, 30, 40, 255));
    }
}
