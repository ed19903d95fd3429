use num_traits::PrimInt;

use crate::interval::Interval;
use crate::range::midpoint;

/// Node of the centered interval tree
#[derive(Debug)]
pub struct Node<T, V> {
    /// Pivot coordinate of the node
    pub center: T,
    /// Intervals with `start <= center <= stop`, in input order
    pub intervals: Vec<Interval<T, V>>,
    /// Indices into `intervals`, ascending by start
    pub by_start: Vec<usize>,
    /// Indices into `intervals`, descending by stop
    pub by_stop: Vec<usize>,
    /// Subtree of intervals with `stop < center`
    pub left: Option<Box<Node<T, V>>>,
    /// Subtree of intervals with `start > center`
    pub right: Option<Box<Node<T, V>>>,
}

impl<T: PrimInt, V> Node<T, V> {
    /// Build the subtree holding `items`, `None` when there are no items.
    ///
    /// Every child covers at most half of its parent's coordinate span, so the
    /// recursion depth is bounded by the bit width of `T`.
    pub fn build(items: Vec<Interval<T, V>>) -> Option<Box<Self>> {
        let (lo, hi) = bounds(&items)?;
        let center = midpoint(lo, hi);

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut intervals = Vec::new();
        for item in items {
            if item.stop() < center {
                left.push(item);
            } else if item.start() > center {
                right.push(item);
            } else {
                intervals.push(item);
            }
        }

        // stable sorts keep input order among equal keys
        let mut by_start: Vec<usize> = (0..intervals.len()).collect();
        by_start.sort_by_key(|&i| intervals[i].start());
        let mut by_stop: Vec<usize> = (0..intervals.len()).collect();
        by_stop.sort_by(|&a, &b| intervals[b].stop().cmp(&intervals[a].stop()));

        Some(Box::new(Node {
            center,
            intervals,
            by_start,
            by_stop,
            left: Self::build(left),
            right: Self::build(right),
        }))
    }

    /// The center set in ascending start order
    pub fn iter_by_start(&self) -> impl Iterator<Item = &Interval<T, V>> + '_ {
        self.by_start.iter().map(move |&i| &self.intervals[i])
    }

    /// The center set in descending stop order
    pub fn iter_by_stop(&self) -> impl Iterator<Item = &Interval<T, V>> + '_ {
        self.by_stop.iter().map(move |&i| &self.intervals[i])
    }

    /// Position in `by_start` of the first interval with `start >= start`
    pub fn first_starting_at(&self, start: T) -> usize {
        self.by_start
            .partition_point(|&i| self.intervals[i].start() < start)
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Minimum start and maximum stop over `items`, `None` when empty.
pub(crate) fn bounds<T: PrimInt, V>(items: &[Interval<T, V>]) -> Option<(T, T)> {
    let mut iter = items.iter();
    let first = iter.next()?;
    Some(iter.fold((first.start(), first.stop()), |(lo, hi), item| {
        (lo.min(item.start()), hi.max(item.stop()))
    }))
}
