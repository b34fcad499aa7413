//! Outline recording and SVG serialization (made by FontLab https://www.fontlab.com/)

use std::fmt::Write as _;

use skrifa::outline::OutlinePen;

use crate::glyphs::{FontMetrics, Glyph};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction in font units (y grows upwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CurveTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render SVG path data, flipping y around `baseline` so the glyph reads upright.
    pub fn to_path_data(&self, baseline: f32) -> String {
        let mut d = String::new();
        let flip = |p: &Point| (fmt_num(p.x), fmt_num(baseline - p.y));

        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match cmd {
                PathCommand::MoveTo(p) => {
                    let (x, y) = flip(p);
                    write!(d, "M{x} {y}")
                }
                PathCommand::LineTo(p) => {
                    let (x, y) = flip(p);
                    write!(d, "L{x} {y}")
                }
                PathCommand::QuadTo(c, p) => {
                    let (cx, cy) = flip(c);
                    let (x, y) = flip(p);
                    write!(d, "Q{cx} {cy} {x} {y}")
                }
                PathCommand::CurveTo(c0, c1, p) => {
                    let (c0x, c0y) = flip(c0);
                    let (c1x, c1y) = flip(c1);
                    let (x, y) = flip(p);
                    write!(d, "C{c0x} {c0y} {c1x} {c1y} {x} {y}")
                }
                PathCommand::Close => write!(d, "Z"),
            };
        }

        d
    }
}

impl OutlinePen for Outline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands
            .push(PathCommand::QuadTo(Point::new(cx0, cy0), Point::new(x, y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CurveTo(
            Point::new(cx0, cy0),
            Point::new(cx1, cy1),
            Point::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_string();
    }

    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Serialize a glyph as a standalone SVG document sized to its advance box.
pub fn glyph_to_svg(glyph: &Glyph) -> String {
    let FontMetrics {
        units_per_em,
        ascent,
        descent,
    } = glyph.metrics;
    let fallback = f32::from(units_per_em.max(1));

    let width = positive_or(glyph.advance, fallback);
    let height = positive_or(ascent - descent, fallback);
    let (w, h) = (fmt_num(width), fmt_num(height));
    let d = glyph.outline.to_path_data(ascent);

    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <path d=\"{d}\"/></svg>\n"
    )
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        fallback
    }
}
