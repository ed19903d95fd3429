use std::ops::Range;

use num_traits::PrimInt;

use crate::error::{Error, Result};
use crate::interval::{Endpoints, Interval};
use crate::iter::{IntoIter, Iter, Values};
use crate::node::{bounds, Node};
use crate::range::inclusive_bounds;

/// An immutable centered interval tree, built once from a collection of intervals.
///
/// Queries only read the node graph, so a shared `&IntervalTree` may be queried from
/// any number of threads at once.
#[derive(Debug)]
pub struct IntervalTree<T, V> {
    /// Root of the interval tree
    pub(crate) root: Option<Box<Node<T, V>>>,
    /// Minimum start and maximum stop over all intervals
    pub(crate) bounds: Option<(T, T)>,
    /// Number of intervals in the tree
    pub(crate) len: usize,
}

impl<T, V> IntervalTree<T, V>
where
    T: PrimInt,
{
    /// Create an empty `IntervalTree`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            bounds: None,
            len: 0,
        }
    }

    /// Build a tree from a collection of intervals.
    ///
    /// Intervals equal by value are kept as distinct entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] for the first interval with `start > stop`.
    ///
    /// # Example
    /// ```rust
    /// use centered_interval_tree::{Error, Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::build(vec![
    ///     Interval::new(1, 5, "A"),
    ///     Interval::new(10, 20, "B"),
    ///     Interval::new(4, 11, "C"),
    /// ])
    /// .unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.min_start(), Ok(1));
    /// assert_eq!(tree.max_stop(), Ok(20));
    ///
    /// let err = IntervalTree::build(vec![Interval::new(5, 2, "X")]).unwrap_err();
    /// assert_eq!(err, Error::InvalidInterval { index: 0 });
    /// ```
    pub fn build<I>(intervals: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval<T, V>>,
    {
        let intervals: Vec<_> = intervals.into_iter().collect();
        if let Some(index) = intervals.iter().position(|i| !i.is_valid()) {
            return Err(Error::InvalidInterval { index });
        }
        let bounds = bounds(&intervals);
        let len = intervals.len();
        Ok(Self {
            root: Node::build(intervals),
            bounds,
            len,
        })
    }

    /// Build a tree from items exposing their own endpoints, each item being its own value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] for the first item with `start > stop`.
    ///
    /// # Example
    /// ```rust
    /// use centered_interval_tree::IntervalTree;
    ///
    /// let tree = IntervalTree::<i32, _>::from_items(vec![(1, 5), (10, 20), (4, 11)]).unwrap();
    /// assert_eq!(tree.overlapping_values(6, 9).unwrap(), vec![&(4, 11)]);
    /// ```
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Endpoints<T>,
    {
        Self::build(
            items
                .into_iter()
                .map(|item| Interval::new(item.start(), item.stop(), item)),
        )
    }

    /// Find all intervals sharing at least one coordinate with `[start, stop]`.
    ///
    /// Results are ordered left subtree, center set, right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `start > stop`.
    ///
    /// # Example
    /// ```rust
    /// use centered_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::build(vec![
    ///     Interval::new(1, 5, "A"),
    ///     Interval::new(10, 20, "B"),
    ///     Interval::new(4, 11, "C"),
    /// ])
    /// .unwrap();
    /// let found = tree.overlapping(6, 9).unwrap();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].value(), &"C");
    /// assert_eq!(tree.overlapping(1, 20).unwrap().len(), 3);
    /// ```
    #[inline]
    pub fn overlapping(&self, start: T, stop: T) -> Result<Vec<&Interval<T, V>>> {
        check_range(start, stop)?;
        let mut list = Vec::new();
        if let Some(root) = self.root.as_deref() {
            Self::find_overlapping_inner(root, start, stop, &mut list);
        }
        Ok(list)
    }

    /// Find all intervals overlapping the half-open range `offset..offset + length`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when the range is empty.
    #[inline]
    pub fn overlapping_in(&self, range: Range<T>) -> Result<Vec<&Interval<T, V>>> {
        let (start, stop) = inclusive_bounds(range).ok_or(Error::InvalidRange)?;
        self.overlapping(start, stop)
    }

    /// Values of all intervals overlapping `[start, stop]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `start > stop`.
    #[inline]
    pub fn overlapping_values(&self, start: T, stop: T) -> Result<Vec<&V>> {
        Ok(project(self.overlapping(start, stop)?))
    }

    /// Values of all intervals overlapping the half-open range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when the range is empty.
    #[inline]
    pub fn overlapping_values_in(&self, range: Range<T>) -> Result<Vec<&V>> {
        Ok(project(self.overlapping_in(range)?))
    }

    /// Find all intervals lying entirely inside `[start, stop]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `start > stop`.
    ///
    /// # Example
    /// ```rust
    /// use centered_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::build(vec![
    ///     Interval::new(1, 5, "A"),
    ///     Interval::new(10, 20, "B"),
    ///     Interval::new(4, 11, "C"),
    /// ])
    /// .unwrap();
    /// assert!(tree.contained(6, 9).unwrap().is_empty());
    /// assert_eq!(tree.contained(1, 20).unwrap().len(), 3);
    /// assert_eq!(tree.contained_values(0, 12).unwrap(), vec![&"A", &"C"]);
    /// ```
    #[inline]
    pub fn contained(&self, start: T, stop: T) -> Result<Vec<&Interval<T, V>>> {
        check_range(start, stop)?;
        let mut list = Vec::new();
        if let Some(root) = self.root.as_deref() {
            Self::find_contained_inner(root, start, stop, &mut list);
        }
        Ok(list)
    }

    /// Find all intervals lying entirely inside the half-open range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when the range is empty.
    #[inline]
    pub fn contained_in(&self, range: Range<T>) -> Result<Vec<&Interval<T, V>>> {
        let (start, stop) = inclusive_bounds(range).ok_or(Error::InvalidRange)?;
        self.contained(start, stop)
    }

    /// Values of all intervals lying entirely inside `[start, stop]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `start > stop`.
    #[inline]
    pub fn contained_values(&self, start: T, stop: T) -> Result<Vec<&V>> {
        Ok(project(self.contained(start, stop)?))
    }

    /// Values of all intervals lying entirely inside the half-open range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when the range is empty.
    #[inline]
    pub fn contained_values_in(&self, range: Range<T>) -> Result<Vec<&V>> {
        Ok(project(self.contained_in(range)?))
    }

    /// Check if any interval in the tree overlaps `[start, stop]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `start > stop`.
    ///
    /// # Example
    /// ```rust
    /// use centered_interval_tree::IntervalTree;
    ///
    /// let tree = IntervalTree::<i32, _>::from_items(vec![(1, 3), (6, 7), (9, 11)]).unwrap();
    /// assert_eq!(tree.overlaps(2, 5), Ok(true));
    /// assert_eq!(tree.overlaps(4, 5), Ok(false));
    /// assert_eq!(tree.overlaps(12, 23), Ok(false));
    /// ```
    #[inline]
    pub fn overlaps(&self, start: T, stop: T) -> Result<bool> {
        check_range(start, stop)?;
        Ok(self
            .root
            .as_deref()
            .is_some_and(|root| Self::any_overlap(root, start, stop)))
    }

    /// Minimum start over all intervals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] when the tree holds no intervals.
    #[inline]
    pub fn min_start(&self) -> Result<T> {
        self.bounds.map(|(lo, _)| lo).ok_or(Error::EmptyTree)
    }

    /// Maximum stop over all intervals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] when the tree holds no intervals.
    #[inline]
    pub fn max_stop(&self) -> Result<T> {
        self.bounds.map(|(_, hi)| hi).ok_or(Error::EmptyTree)
    }

    /// Every interval in the tree, each exactly once, in pre-order.
    #[inline]
    #[must_use]
    pub fn all_intervals(&self) -> Vec<&Interval<T, V>> {
        self.iter().collect()
    }

    /// Every value in the tree, each exactly once, in pre-order.
    #[inline]
    #[must_use]
    pub fn all_values(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Get an iterator over the intervals of the tree, in pre-order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, V> {
        Iter::new(self)
    }

    /// Get an iterator over the values of the tree, in pre-order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, T, V> {
        Values { inner: self.iter() }
    }

    /// Return the number of intervals in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the tree contains no intervals.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, V> IntervalTree<T, V>
where
    T: PrimInt,
{
    /// Collect intervals overlapping `[start, stop]` under `x`.
    fn find_overlapping_inner<'a>(
        x: &'a Node<T, V>,
        start: T,
        stop: T,
        list: &mut Vec<&'a Interval<T, V>>,
    ) {
        if stop < x.center {
            // right subtree starts after center, hence after stop, and every center
            // interval ends at or after center, hence after start
            if let Some(left) = x.left() {
                Self::find_overlapping_inner(left, start, stop, list);
            }
            list.extend(x.iter_by_start().take_while(|i| i.start() <= stop));
        } else if start > x.center {
            list.extend(x.iter_by_stop().take_while(|i| i.stop() >= start));
            if let Some(right) = x.right() {
                Self::find_overlapping_inner(right, start, stop, list);
            }
        } else {
            if let Some(left) = x.left() {
                Self::find_overlapping_inner(left, start, stop, list);
            }
            list.extend(x.iter_by_start());
            if let Some(right) = x.right() {
                Self::find_overlapping_inner(right, start, stop, list);
            }
        }
    }

    /// Collect intervals inside `[start, stop]` under `x`.
    fn find_contained_inner<'a>(
        x: &'a Node<T, V>,
        start: T,
        stop: T,
        list: &mut Vec<&'a Interval<T, V>>,
    ) {
        // left intervals end before center, they can only fit if the query starts before it
        if start < x.center {
            if let Some(left) = x.left() {
                Self::find_contained_inner(left, start, stop, list);
            }
        }
        // center intervals cover center, so the query has to cover it too
        if start <= x.center && x.center <= stop {
            let first = x.first_starting_at(start);
            list.extend(
                x.by_start[first..]
                    .iter()
                    .map(|&i| &x.intervals[i])
                    .filter(|i| i.stop() <= stop),
            );
        }
        if stop > x.center {
            if let Some(right) = x.right() {
                Self::find_contained_inner(right, start, stop, list);
            }
        }
    }

    /// Check if any interval under `x` overlaps `[start, stop]`, stopping at the first hit.
    fn any_overlap(x: &Node<T, V>, start: T, stop: T) -> bool {
        if stop < x.center {
            x.iter_by_start().next().is_some_and(|i| i.start() <= stop)
                || x.left().is_some_and(|l| Self::any_overlap(l, start, stop))
        } else if start > x.center {
            x.iter_by_stop().next().is_some_and(|i| i.stop() >= start)
                || x.right().is_some_and(|r| Self::any_overlap(r, start, stop))
        } else {
            !x.intervals.is_empty()
                || x.left().is_some_and(|l| Self::any_overlap(l, start, stop))
                || x.right().is_some_and(|r| Self::any_overlap(r, start, stop))
        }
    }
}

impl<T, V> Default for IntervalTree<T, V>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> TryFrom<Vec<Interval<T, V>>> for IntervalTree<T, V>
where
    T: PrimInt,
{
    type Error = Error;

    #[inline]
    fn try_from(intervals: Vec<Interval<T, V>>) -> Result<Self> {
        Self::build(intervals)
    }
}

impl<'a, T, V> IntoIterator for &'a IntervalTree<T, V>
where
    T: PrimInt,
{
    type Item = &'a Interval<T, V>;
    type IntoIter = Iter<'a, T, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V> IntoIterator for IntervalTree<T, V>
where
    T: PrimInt,
{
    type Item = Interval<T, V>;
    type IntoIter = IntoIter<T, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[inline]
fn check_range<T: PrimInt>(start: T, stop: T) -> Result<()> {
    if start > stop {
        return Err(Error::InvalidRange);
    }
    Ok(())
}

#[inline]
fn project<'a, T, V>(intervals: Vec<&'a Interval<T, V>>) -> Vec<&'a V>
where
    T: PrimInt,
{
    intervals.into_iter().map(Interval::value).collect()
}
