//! Draw-call recorder for headless runs and tests

use glam::Vec2;

use super::DrawSurface;
use crate::sim::Rect;

/// A single draw call, with the fill color in effect when it was made
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    FillRect { rect: Rect, color: String },
    FillCircle { center: Vec2, radius: f32, color: String },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    fill: String,
}

impl RecordingSurface {
    /// Drop recorded commands (call between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Rectangles filled with `color`, in draw order
    pub fn fill_rects_with(&self, color: &str) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color: c } if c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Circles filled with `color`, in draw order
    pub fn circles_with(&self, color: &str) -> Vec<(Vec2, f32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color: c,
                } if c == color => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_fill(&mut self, color: &str) {
        self.fill.clear();
        self.fill.push_str(color);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: self.fill.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: self.fill.clone(),
        });
    }
}
