use crate::point::{CanvasPoint, Segment};

/// Number of traced points kept by default.
pub const TRAIL_CAPACITY: usize = 1000;

/// A fixed-size window over the most recently traced points.
///
/// The trail always holds exactly `capacity` slots. Slots start unset and fill
/// up one per [`Trail::push`]; once full, each push evicts the oldest point.
#[derive(Debug, Clone)]
pub struct Trail {
    slots: Vec<Option<CanvasPoint>>,
    /// Index of the oldest slot.
    head: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(TRAIL_CAPACITY)
    }
}

impl Trail {
    /// Create a trail of `capacity` unset slots (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Always equal to [`Trail::capacity`].
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Evict the oldest slot and append `newest`.
    pub fn push(&mut self, newest: CanvasPoint) {
        self.slots[self.head] = Some(newest);
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Slot `index`, counted from the oldest.
    pub fn get(&self, index: usize) -> Option<Option<CanvasPoint>> {
        (index < self.slots.len()).then(|| self.slots[(self.head + index) % self.slots.len()])
    }

    /// All slots, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Option<CanvasPoint>> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer).copied()
    }

    /// Set slots only, oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = CanvasPoint> + '_ {
        self.iter().flatten()
    }

    /// Most recently pushed point.
    pub fn newest(&self) -> Option<CanvasPoint> {
        self.get(self.len() - 1).flatten()
    }

    /// Segments between adjacent slots, skipping any pair with an unset end.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.iter()
            .zip(self.iter().skip(1))
            .filter_map(|pair| match pair {
                (Some(from), Some(to)) => Some(Segment::new(from, to)),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> CanvasPoint {
        CanvasPoint::new(i as f32, -(i as f32))
    }

    #[test]
    fn starts_unset_at_full_length() {
        let trail = Trail::default();
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        assert!(trail.iter().all(|slot| slot.is_none()));
        assert_eq!(trail.segments().count(), 0);
        assert_eq!(trail.newest(), None);
    }

    #[test]
    fn length_is_constant_across_pushes() {
        let mut trail = Trail::new(8);
        for i in 0..20 {
            trail.push(p(i));
            assert_eq!(trail.len(), 8);
            assert_eq!(trail.iter().count(), 8);
        }
    }

    #[test]
    fn partial_fill_keeps_newest_at_the_back() {
        let mut trail = Trail::new(5);
        trail.push(p(0));
        trail.push(p(1));
        let slots: Vec<_> = trail.iter().collect();
        assert_eq!(slots, vec![None, None, None, Some(p(0)), Some(p(1))]);
        assert_eq!(trail.newest(), Some(p(1)));
        assert_eq!(trail.segments().collect::<Vec<_>>(), vec![Segment::new(p(0), p(1))]);
    }

    #[test]
    fn wraps_in_arrival_order() {
        let mut trail = Trail::new(4);
        for i in 0..10 {
            trail.push(p(i));
        }
        let points: Vec<_> = trail.points().collect();
        assert_eq!(points, vec![p(6), p(7), p(8), p(9)]);
        assert_eq!(trail.get(0), Some(Some(p(6))));
        assert_eq!(trail.get(3), Some(Some(p(9))));
        assert_eq!(trail.get(4), None);
        assert_eq!(trail.segments().count(), 3);
    }

    #[test]
    fn repeated_points_are_still_pushed() {
        let mut trail = Trail::new(3);
        trail.push(p(1));
        trail.push(p(1));
        assert_eq!(trail.points().count(), 2);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut trail = Trail::new(0);
        assert_eq!(trail.capacity(), 1);
        trail.push(p(3));
        trail.push(p(4));
        assert_eq!(trail.newest(), Some(p(4)));
        assert_eq!(trail.segments().count(), 0);
    }
}
