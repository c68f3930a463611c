//! Path data model and the path-data interpreter
//!
//! A [`Path`] is a flat list of [`Segment`]s, each pairing one absolute vertex
//! with the kind of drawing instruction it belongs to. Cubic curves occupy three
//! consecutive segments (both control points, then the end point).

mod interpreter;
pub mod lexer;

pub use interpreter::{interpret, parse_path};
pub use lexer::{lex, Token};

use std::ops::{Add, Sub};

use kurbo::{Affine, BezPath};

/// A point in path coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    fn from_kurbo(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Kind of drawing instruction a vertex belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    MoveTo,
    LineTo,
    /// One of the three vertices of a cubic Bezier (control 1, control 2, end)
    CubicTo,
    /// Return to the start of the current subpath; the vertex is that start point
    Close,
}

/// One vertex together with its segment type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub point: Point,
    pub verb: Verb,
}

impl Segment {
    pub fn new(point: Point, verb: Verb) -> Self {
        Self { point, verb }
    }
}

/// An ordered sequence of segments forming one or more subpaths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().map(|s| s.point)
    }

    pub fn verbs(&self) -> impl Iterator<Item = Verb> + '_ {
        self.segments.iter().map(|s| s.verb)
    }

    /// Position of the last emitted vertex
    pub fn current_point(&self) -> Option<Point> {
        self.segments.last().map(|s| s.point)
    }

    /// Start point of the subpath that is currently open
    fn subpath_start(&self) -> Option<Point> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.verb == Verb::MoveTo)
            .map(|s| s.point)
    }

    pub fn push(&mut self, point: Point, verb: Verb) {
        self.segments.push(Segment::new(point, verb));
    }

    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.push(p.into(), Verb::MoveTo);
    }

    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.push(p.into(), Verb::LineTo);
    }

    pub fn cubic_to(&mut self, c1: impl Into<Point>, c2: impl Into<Point>, end: impl Into<Point>) {
        self.push(c1.into(), Verb::CubicTo);
        self.push(c2.into(), Verb::CubicTo);
        self.push(end.into(), Verb::CubicTo);
    }

    /// Quadratic curves are stored as the equivalent cubic
    pub fn quad_to(&mut self, control: impl Into<Point>, end: impl Into<Point>) {
        let q = control.into();
        let end = end.into();
        let p0 = self.current_point().unwrap_or(Point::ORIGIN);
        let c1 = Point::new(p0.x + 2.0 / 3.0 * (q.x - p0.x), p0.y + 2.0 / 3.0 * (q.y - p0.y));
        let c2 = Point::new(end.x + 2.0 / 3.0 * (q.x - end.x), end.y + 2.0 / 3.0 * (q.y - end.y));
        self.cubic_to(c1, c2, end);
    }

    pub fn close(&mut self) {
        let start = self
            .subpath_start()
            .or_else(|| self.current_point())
            .unwrap_or(Point::ORIGIN);
        self.push(start, Verb::Close);
    }

    /// Apply an affine transform to every vertex
    pub fn transform(&self, affine: Affine) -> Path {
        Path {
            segments: self
                .segments
                .iter()
                .map(|s| Segment::new(Point::from_kurbo(affine * s.point.to_kurbo()), s.verb))
                .collect(),
        }
    }

    /// Convert into a kurbo path for filling and ink bounds
    ///
    /// Drawing after a close without an explicit move starts a new subpath at
    /// the closed subpath's start point.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut open = false;
        let mut i = 0;

        while i < self.segments.len() {
            let seg = self.segments[i];
            match seg.verb {
                Verb::MoveTo => {
                    bez.move_to(seg.point.to_kurbo());
                    open = true;
                }
                Verb::Close => {
                    if open {
                        bez.close_path();
                        open = false;
                    }
                }
                Verb::LineTo | Verb::CubicTo => {
                    if !open {
                        let from = if i == 0 {
                            seg.point
                        } else {
                            self.segments[i - 1].point
                        };
                        bez.move_to(from.to_kurbo());
                        open = true;
                    }
                    let is_cubic = seg.verb == Verb::CubicTo
                        && i + 2 < self.segments.len()
                        && self.segments[i + 1].verb == Verb::CubicTo
                        && self.segments[i + 2].verb == Verb::CubicTo;
                    if is_cubic {
                        bez.curve_to(
                            seg.point.to_kurbo(),
                            self.segments[i + 1].point.to_kurbo(),
                            self.segments[i + 2].point.to_kurbo(),
                        );
                        i += 2;
                    } else {
                        bez.line_to(seg.point.to_kurbo());
                    }
                }
            }
            i += 1;
        }

        bez
    }

    /// Render back to compact absolute path data (two decimals)
    pub fn to_svg_d(&self) -> String {
        let mut parts = Vec::new();
        let mut i = 0;

        while i < self.segments.len() {
            let seg = self.segments[i];
            let p = seg.point;
            match seg.verb {
                Verb::MoveTo => parts.push(format!("M{:.2} {:.2}", p.x, p.y)),
                Verb::LineTo => parts.push(format!("L{:.2} {:.2}", p.x, p.y)),
                Verb::CubicTo if i + 2 < self.segments.len() => {
                    let c2 = self.segments[i + 1].point;
                    let end = self.segments[i + 2].point;
                    parts.push(format!(
                        "C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                        p.x, p.y, c2.x, c2.y, end.x, end.y
                    ));
                    i += 2;
                }
                Verb::CubicTo => parts.push(format!("L{:.2} {:.2}", p.x, p.y)),
                Verb::Close => parts.push("Z".to_string()),
            }
            i += 1;
        }

        parts.join(" ")
    }
}
