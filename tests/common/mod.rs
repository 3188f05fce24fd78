// Recording surface shared by the drawing tests.
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f32, f32),
    Alpha(f32),
    Stroke(String, f32),
    Fill(String),
    Line(Vec2, Vec2),
    Circle(Vec2, f32),
    Triangle([Vec2; 3]),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn lines(&self) -> usize {
        self.count(|op| matches!(op, Op::Line(..)))
    }

    pub fn circles(&self) -> usize {
        self.count(|op| matches!(op, Op::Circle(..)))
    }

    pub fn triangles(&self) -> usize {
        self.count(|op| matches!(op, Op::Triangle(..)))
    }

    /// Alpha in effect for each draw call, in order.
    pub fn draw_alphas(&self) -> Vec<(Op, f32)> {
        let mut alpha = 1.0;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::Alpha(a) => alpha = *a,
                Op::Line(..) | Op::Circle(..) | Op::Triangle(..) => out.push((op.clone(), alpha)),
                _ => {}
            }
        }
        out
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn set_stroke(&mut self, color: &str, width: f32) {
        self.ops.push(Op::Stroke(color.to_string(), width));
    }
    fn set_fill(&mut self, color: &str) {
        self.ops.push(Op::Fill(color.to_string()));
    }
    fn line(&mut self, from: Vec2, to: Vec2) {
        self.ops.push(Op::Line(from, to));
    }
    fn circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Circle(center, radius));
    }
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.ops.push(Op::Triangle([a, b, c]));
    }
}
