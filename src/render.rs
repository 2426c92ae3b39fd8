//! Drawing surface contract and a recording implementation.

use crate::config::Bounds;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::string::{String, ToString};
use alloc::vec::Vec as AllocVec;

/// Fill/stroke colour for a draw call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Grey,
}

impl Color {
    /// Numeric code used when flattening commands for a host.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Grey => 1,
        }
    }
}

/// A 2D drawing context supplied by the host.
///
/// Coordinates are in simulation space. Implementations translate to their
/// own pixel space if needed.
pub trait RenderSurface<F: Float> {
    fn clear(&mut self, region: Bounds<F>);
    fn fill_circle(&mut self, center: Vec2<F>, radius: F, color: Color);
    fn fill_square(&mut self, center: Vec2<F>, half_side: F, color: Color);
    fn stroke_circle(&mut self, center: Vec2<F>, radius: F, color: Color);
    fn stroke_line(&mut self, a: Vec2<F>, b: Vec2<F>, width: F, color: Color);
    fn draw_text(&mut self, text: &str, x: F, y: F, color: Color);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    Clear(Bounds<F>),
    FillCircle { center: Vec2<F>, radius: F, color: Color },
    FillSquare { center: Vec2<F>, half_side: F, color: Color },
    StrokeCircle { center: Vec2<F>, radius: F, color: Color },
    StrokeLine { a: Vec2<F>, b: Vec2<F>, width: F, color: Color },
    Text { text: String, x: F, y: F, color: Color },
}

impl<F: Float> DrawCommand<F> {
    /// Opcode tag of the command in a flattened stream.
    pub fn opcode(&self) -> u8 {
        match self {
            DrawCommand::Clear(_) => 0,
            DrawCommand::FillCircle { .. } => 1,
            DrawCommand::FillSquare { .. } => 2,
            DrawCommand::StrokeCircle { .. } => 3,
            DrawCommand::StrokeLine { .. } => 4,
            DrawCommand::Text { .. } => 5,
        }
    }
}

/// A surface that records every call, in order.
///
/// Hosts without direct drawing access (WASM, headless tests) replay the
/// buffer themselves.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer<F: Float> {
    commands: AllocVec<DrawCommand<F>>,
}

impl<F: Float> CommandBuffer<F> {
    pub fn new() -> Self {
        CommandBuffer { commands: AllocVec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand<F>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of `stroke_line` calls recorded.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }

    /// Flatten the non-text commands to `[opcode, color, args...]` records.
    ///
    /// Record lengths by opcode: clear 6, circle/square/ring 6, line 8.
    /// Text is left out; hosts read it from [`texts`](Self::texts).
    pub fn to_f32_stream(&self) -> AllocVec<f32> {
        let mut out = AllocVec::with_capacity(self.commands.len() * 8);
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Clear(b) => {
                    out.extend_from_slice(&[
                        cmd.opcode() as f32,
                        0.0,
                        b.left.to_f32(),
                        b.top.to_f32(),
                        b.right.to_f32(),
                        b.bottom.to_f32(),
                    ]);
                }
                DrawCommand::FillCircle { center, radius, color }
                | DrawCommand::FillSquare { center, half_side: radius, color }
                | DrawCommand::StrokeCircle { center, radius, color } => {
                    out.extend_from_slice(&[
                        cmd.opcode() as f32,
                        color.code() as f32,
                        center.x.to_f32(),
                        center.y.to_f32(),
                        radius.to_f32(),
                        0.0,
                    ]);
                }
                DrawCommand::StrokeLine { a, b, width, color } => {
                    out.extend_from_slice(&[
                        cmd.opcode() as f32,
                        color.code() as f32,
                        a.x.to_f32(),
                        a.y.to_f32(),
                        b.x.to_f32(),
                        b.y.to_f32(),
                        width.to_f32(),
                        0.0,
                    ]);
                }
                DrawCommand::Text { .. } => {}
            }
        }
        out
    }

    /// Text commands, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<F: Float> RenderSurface<F> for CommandBuffer<F> {
    fn clear(&mut self, region: Bounds<F>) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_circle(&mut self, center: Vec2<F>, radius: F, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn fill_square(&mut self, center: Vec2<F>, half_side: F, color: Color) {
        self.commands.push(DrawCommand::FillSquare { center, half_side, color });
    }

    fn stroke_circle(&mut self, center: Vec2<F>, radius: F, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color });
    }

    fn stroke_line(&mut self, a: Vec2<F>, b: Vec2<F>, width: F, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { a, b, width, color });
    }

    fn draw_text(&mut self, text: &str, x: F, y: F, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_skips_text() {
        let mut buf = CommandBuffer::<f32>::new();
        buf.fill_circle(Vec2::new(1.0, 2.0), 5.0, Color::Black);
        buf.draw_text("hello", 20.0, 20.0, Color::Black);
        buf.stroke_line(Vec2::zero(), Vec2::new(3.0, 4.0), 1.0, Color::Grey);

        let stream = buf.to_f32_stream();
        assert_eq!(stream.len(), 6 + 8);
        assert_eq!(stream[0], 1.0);
        assert_eq!(stream[6], 4.0);
        assert_eq!(stream[7], 1.0);
        assert_eq!(buf.texts().collect::<AllocVec<_>>(), ["hello"]);
        assert_eq!(buf.line_count(), 1);
    }
}
