//! Renderer collaborator interface
//!
//! The core supplies transforms, rectangles, and text; the shell's
//! renderer owns every bit of graphics state. Draw-call failures are
//! the renderer's problem, not the simulation's.

use glam::{Mat4, Vec2};

use crate::assets::ModelId;
use crate::sim::Rect;

/// RGB color in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Draw sink supplied by the shell
pub trait Renderer {
    fn draw_model(&mut self, model: ModelId, transform: Mat4);
    fn draw_rect(&mut self, bounds: Rect, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: Color);
}

/// Discards everything; headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_model(&mut self, _model: ModelId, _transform: Mat4) {}
    fn draw_rect(&mut self, _bounds: Rect, _color: Color) {}
    fn draw_text(&mut self, _text: &str, _position: Vec2, _scale: f32, _color: Color) {}
}
