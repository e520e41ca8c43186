//! Freehand stroke capture and smoothing.
//!
//! Points are sampled from pointer input with a small distance gate, and every
//! accepted point past the third re-smooths the trailing four points into cubic
//! Bezier segments that the canvas rasterizes immediately. Nothing about a
//! stroke survives pointer-up.

/// Minimum gap (px) between accepted samples.
pub const MIN_POINT_GAP: f64 = 2.0;
/// Control point offset as a fraction of the neighbor chord.
pub const SMOOTHING_TENSION: f64 = 0.2;
/// Keep-clear margin (px) around the title, button and score.
pub const KEEP_CLEAR_MARGIN: f64 = 10.0;
/// Number of trailing points re-smoothed per accepted sample.
pub const SMOOTHING_WINDOW: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Screen-space rectangle (e.g. an element's bounding client rect).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Strict containment after growing the rect by `margin` on every side.
    pub fn contains_with_margin(&self, p: Point, margin: f64) -> bool {
        p.y > self.top - margin
            && p.y < self.bottom + margin
            && p.x > self.left - margin
            && p.x < self.right + margin
    }
}

/// One cubic Bezier piece ready for `bezierCurveTo`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

/// Expand each interior point into `(before, point, after)` control triples.
/// Inputs with fewer than three points come back unchanged.
pub fn smooth_points(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut smoothed = Vec::with_capacity(points.len() * 3);
    smoothed.push(points[0]);
    for w in points.windows(3) {
        let (prev, current, next) = (w[0], w[1], w[2]);
        let dx = (next.x - prev.x) * SMOOTHING_TENSION;
        let dy = (next.y - prev.y) * SMOOTHING_TENSION;
        smoothed.push(Point::new(current.x - dx, current.y - dy));
        smoothed.push(current);
        smoothed.push(Point::new(current.x + dx, current.y + dy));
    }
    smoothed.push(points[points.len() - 1]);
    smoothed
}

/// Chain a smoothed point list into segments: the first point is the pen
/// position, then every full triplet is `(c1, c2, end)`. A trailing partial
/// triplet is dropped.
pub fn bezier_segments(smoothed: &[Point]) -> Vec<CubicSegment> {
    let Some((&first, rest)) = smoothed.split_first() else {
        return Vec::new();
    };
    let mut pen = first;
    rest.chunks_exact(3)
        .map(|c| {
            let seg = CubicSegment { start: pen, c1: c[0], c2: c[1], end: c[2] };
            pen = c[2];
            seg
        })
        .collect()
}

/// In-progress stroke: accepted samples plus the last accepted point.
#[derive(Clone, Debug, Default)]
pub struct StrokeTracker {
    points: Vec<Point>,
    last: Option<Point>,
    active: bool,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn begin(&mut self, at: Point) {
        self.points.clear();
        self.points.push(at);
        self.last = Some(at);
        self.active = true;
    }

    /// Feed a pointer sample. Returns segments to rasterize once the stroke has
    /// more than three accepted points; `None` when the sample was rejected or
    /// there is nothing to draw yet.
    pub fn extend(&mut self, at: Point, keep_clear: &[Rect]) -> Option<Vec<CubicSegment>> {
        if !self.active {
            return None;
        }
        if keep_clear.iter().any(|r| r.contains_with_margin(at, KEEP_CLEAR_MARGIN)) {
            return None;
        }
        let last = self.last?;
        if last.distance(at) < MIN_POINT_GAP {
            return None;
        }
        self.points.push(at);
        self.last = Some(at);
        if self.points.len() < SMOOTHING_WINDOW {
            return None;
        }
        let tail = &self.points[self.points.len() - SMOOTHING_WINDOW..];
        Some(bezier_segments(&smooth_points(tail)))
    }

    /// Finish the stroke. Returns false when no stroke was in progress.
    pub fn end(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.last = None;
        self.points.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn short_inputs_are_returned_unchanged() {
        assert!(smooth_points(&[]).is_empty());
        let one = [Point::new(1.0, 2.0)];
        assert_eq!(smooth_points(&one), one.to_vec());
        let two = [Point::new(1.0, 2.0), Point::new(5.0, 9.0)];
        assert_eq!(smooth_points(&two), two.to_vec());
    }

    #[test]
    fn interior_point_gets_symmetric_controls() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 0.0)];
        let s = smooth_points(&pts);
        assert_eq!(s.len(), 5);
        // chord (20, 0) * 0.2 = (4, 0)
        assert!(close(s[1], Point::new(6.0, 10.0)));
        assert!(close(s[2], Point::new(10.0, 10.0)));
        assert!(close(s[3], Point::new(14.0, 10.0)));
        assert_eq!(s[0], pts[0]);
        assert_eq!(s[4], pts[2]);
    }

    #[test]
    fn four_point_window_yields_two_chained_segments() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
        ];
        let s = smooth_points(&pts);
        assert_eq!(s.len(), 8);
        let segs = bezier_segments(&s);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].start, pts[0]);
        assert_eq!(segs[1].start, segs[0].end);
    }

    #[test]
    fn segments_of_degenerate_input() {
        assert!(bezier_segments(&[]).is_empty());
        assert!(bezier_segments(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]).is_empty());
    }

    #[test]
    fn samples_closer_than_gap_are_dropped() {
        let mut t = StrokeTracker::new();
        t.begin(Point::new(0.0, 0.0));
        assert!(t.extend(Point::new(1.0, 1.0), &[]).is_none());
        assert_eq!(t.points().len(), 1);
        // exactly on the gate is accepted
        t.extend(Point::new(2.0, 0.0), &[]);
        assert_eq!(t.points().len(), 2);
        // distance is measured from the last accepted point, not the last sample
        t.extend(Point::new(3.5, 0.0), &[]);
        assert_eq!(t.points().len(), 2);
        t.extend(Point::new(4.0, 0.0), &[]);
        assert_eq!(t.points().len(), 3);
    }

    #[test]
    fn draws_once_four_points_are_accepted() {
        let mut t = StrokeTracker::new();
        t.begin(Point::new(0.0, 0.0));
        assert!(t.extend(Point::new(5.0, 0.0), &[]).is_none());
        assert!(t.extend(Point::new(10.0, 0.0), &[]).is_none());
        let segs = t.extend(Point::new(15.0, 0.0), &[]).expect("segments");
        assert_eq!(segs.len(), 2);
        let segs = t.extend(Point::new(20.0, 5.0), &[]).expect("segments");
        assert_eq!(segs[0].start, Point::new(5.0, 0.0));
    }

    #[test]
    fn keep_clear_regions_suppress_samples() {
        let button = Rect::new(100.0, 100.0, 200.0, 200.0);
        let mut t = StrokeTracker::new();
        t.begin(Point::new(50.0, 50.0));
        // inside the 10px margin
        assert!(t.extend(Point::new(95.0, 150.0), &[button]).is_none());
        assert_eq!(t.points().len(), 1);
        // exactly on the margin edge is outside (strict comparison)
        t.extend(Point::new(90.0, 150.0), &[button]);
        assert_eq!(t.points().len(), 2);
    }

    #[test]
    fn idle_tracker_ignores_moves_and_end() {
        let mut t = StrokeTracker::new();
        assert!(t.extend(Point::new(10.0, 10.0), &[]).is_none());
        assert!(t.points().is_empty());
        assert!(!t.end());
    }

    #[test]
    fn end_clears_points() {
        let mut t = StrokeTracker::new();
        t.begin(Point::new(0.0, 0.0));
        t.extend(Point::new(3.0, 4.0), &[]);
        assert!(t.end());
        assert!(!t.is_active());
        assert!(t.points().is_empty());
    }
}
