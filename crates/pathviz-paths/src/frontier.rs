//! The search frontier: a min-priority queue with FIFO tie-breaking.

use std::collections::{BinaryHeap, HashSet};

use pathviz_core::Position;

/// Heap entry, ordered by `(priority, order)` ascending.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: u32,
    order: u64,
    pos: Position,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered-but-unexpanded positions.
///
/// Ties are broken by a monotonically increasing insertion counter rather
/// than by comparing positions, so the pop order is fully determined by the
/// push order. A membership set mirrors the queued positions.
///
/// A position is queued at most once. Its priority is fixed when it is
/// pushed and is not lowered if a cheaper route to it turns up later.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    members: HashSet<Position>,
    counter: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with `priority`. Returns `false`, leaving the queue
    /// untouched, if `pos` is already queued.
    pub fn push(&mut self, pos: Position, priority: u32) -> bool {
        if !self.members.insert(pos) {
            return false;
        }
        let order = self.counter;
        self.counter += 1;
        self.heap.push(Entry {
            priority,
            order,
            pos,
        });
        true
    }

    /// Remove and return the queued position with the lowest priority.
    pub fn pop(&mut self) -> Option<Position> {
        let entry = self.heap.pop()?;
        self.members.remove(&entry.pos);
        Some(entry.pos)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(&pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(p(0, 0), 5);
        f.push(p(0, 1), 2);
        f.push(p(0, 2), 9);
        assert_eq!(f.pop(), Some(p(0, 1)));
        assert_eq!(f.pop(), Some(p(0, 0)));
        assert_eq!(f.pop(), Some(p(0, 2)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = Frontier::new();
        // Positions pushed in an order unrelated to any coordinate ordering.
        let order = [p(3, 3), p(0, 0), p(2, 1), p(1, 2)];
        for pos in order {
            f.push(pos, 4);
        }
        let popped: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(popped, order);
    }

    #[test]
    fn membership_mirrors_queue() {
        let mut f = Frontier::new();
        assert!(f.is_empty());
        assert!(f.push(p(1, 1), 3));
        assert!(!f.push(p(1, 1), 3));
        assert!(f.contains(p(1, 1)));
        assert_eq!(f.pop(), Some(p(1, 1)));
        assert!(!f.contains(p(1, 1)));
        assert_eq!(f.pop(), None);
        assert!(f.is_empty());
        // Once popped it may be queued again.
        assert!(f.push(p(1, 1), 3));
    }

    #[test]
    fn queued_priority_is_not_lowered() {
        let mut f = Frontier::new();
        f.push(p(0, 0), 10);
        f.push(p(5, 5), 6);
        assert!(!f.push(p(0, 0), 4));
        assert_eq!(f.pop(), Some(p(5, 5)));
        assert_eq!(f.pop(), Some(p(0, 0)));
        assert_eq!(f.pop(), None);
    }
}
