use glam::Vec2;
use ttf_parser::OutlineBuilder;

/// Segments each quadratic/cubic curve is flattened into.
const CURVE_SEGMENTS: u32 = 8;

/// Collects a glyph outline into flattened closed contours.
///
/// Implements [`OutlineBuilder`] so it can be passed straight to
/// `Face::outline_glyph`. Curves are flattened by uniform parameter
/// sampling, which is plenty at the demo's on-screen glyph size.
#[derive(Debug, Default)]
pub struct ContourCollector {
    contours: Vec<Vec<Vec2>>,
    current: Vec<Vec2>,
    cursor: Vec2,
}

impl ContourCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish collection, returning all contours with at least three
    /// points.
    pub fn finish(mut self) -> Vec<Vec<Vec2>> {
        self.end_contour();
        self.contours
    }

    fn end_contour(&mut self) {
        let contour = std::mem::take(&mut self.current);
        if contour.len() >= 3 {
            self.contours.push(contour);
        }
    }

    fn push(&mut self, p: Vec2) {
        // Curve sampling revisits endpoints; skip exact duplicates.
        if self.current.last() != Some(&p) {
            self.current.push(p);
        }
        self.cursor = p;
    }
}

impl OutlineBuilder for ContourCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.end_contour();
        self.push(Vec2::new(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(Vec2::new(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.cursor;
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x, y);
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let a = p0.lerp(p1, t);
            let b = p1.lerp(p2, t);
            self.push(a.lerp(b, t));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.cursor;
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x2, y2);
        let p3 = Vec2::new(x, y);
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let a = p0.lerp(p1, t);
            let b = p1.lerp(p2, t);
            let c = p2.lerp(p3, t);
            let ab = a.lerp(b, t);
            let bc = b.lerp(c, t);
            self.push(ab.lerp(bc, t));
        }
    }

    fn close(&mut self) {
        // Drop an explicit closing point that repeats the contour start.
        if self.current.len() > 1 && self.current.first() == self.current.last() {
            self.current.pop();
        }
        self.end_contour();
    }
}

/// Triangulate one simple closed polygon by ear clipping.
///
/// Returns triangle indices into `points`. Either winding is accepted; the
/// output is counter-clockwise. Hole contours are not bridged into their
/// outer contour, so enclosed counters render filled; the labels this demo
/// draws have none.
pub fn triangulate(points: &[Vec2]) -> Vec<u32> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut idx: Vec<u32> = (0..n as u32).collect();
    if signed_area(points) < 0.0 {
        idx.reverse();
    }

    let mut out = Vec::with_capacity((n - 2) * 3);
    while idx.len() > 3 {
        let m = idx.len();
        let mut clipped = false;
        for i in 0..m {
            let ip = idx[(i + m - 1) % m];
            let ic = idx[i];
            let inx = idx[(i + 1) % m];
            let (prev, cur, next) = (
                points[ip as usize],
                points[ic as usize],
                points[inx as usize],
            );
            // Reflex corners can never be ears.
            if cross(cur - prev, next - cur) <= 0.0 {
                continue;
            }
            let contains_other = idx.iter().enumerate().any(|(j, &pj)| {
                j != (i + m - 1) % m
                    && j != i
                    && j != (i + 1) % m
                    && point_in_triangle(points[pj as usize], prev, cur, next)
            });
            if !contains_other {
                out.extend_from_slice(&[ip, ic, inx]);
                idx.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            // Numerically degenerate remainder: fall back to a fan so the
            // caller still gets a closed surface.
            for w in 1..idx.len() - 1 {
                out.extend_from_slice(&[idx[0], idx[w], idx[w + 1]]);
            }
            return out;
        }
    }
    out.extend_from_slice(&[idx[0], idx[1], idx[2]]);
    out
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Shoelace area: positive for counter-clockwise winding.
pub(crate) fn signed_area(points: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += cross(a, b);
    }
    sum / 2.0
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);
    let eps = 1e-7;
    d1 > eps && d2 > eps && d3 > eps
}
