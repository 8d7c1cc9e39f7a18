#[derive(Copy, Clone, Debug, Default, PartialEq)]
/// A point in canvas (pixel) space.
///
/// `u` grows to the right and `v` grows downwards, like the canvas itself.
pub struct CanvasPoint {
    pub u: f32,
    pub v: f32,
}

impl CanvasPoint {
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

impl From<CanvasPoint> for iced::Point {
    fn from(point: CanvasPoint) -> Self {
        iced::Point::new(point.u, point.v)
    }
}

impl From<[f32; 2]> for CanvasPoint {
    fn from([u, v]: [f32; 2]) -> Self {
        Self { u, v }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// A straight line between two canvas points.
pub struct Segment {
    pub from: CanvasPoint,
    pub to: CanvasPoint,
}

impl Segment {
    pub fn new(from: CanvasPoint, to: CanvasPoint) -> Self {
        Self { from, to }
    }
}

/// Segments joining every adjacent pair of `points`.
///
/// Fewer than two points produce no segments.
pub fn chain_segments(points: &[CanvasPoint]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_of_one_point_has_no_segments() {
        assert!(chain_segments(&[CanvasPoint::new(1.0, 2.0)]).is_empty());
        assert!(chain_segments(&[]).is_empty());
    }

    #[test]
    fn chain_connects_neighbours_in_order() {
        let a = CanvasPoint::new(0.0, 0.0);
        let b = CanvasPoint::new(1.0, 0.0);
        let c = CanvasPoint::new(1.0, 1.0);
        let segments = chain_segments(&[a, b, c]);
        assert_eq!(segments, vec![Segment::new(a, b), Segment::new(b, c)]);
    }
}
