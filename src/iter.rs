use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::interval::Interval;
use crate::intervaltree::IntervalTree;
use crate::node::Node;

/// An iterator over the intervals of an `IntervalTree`, in pre-order.
///
/// Each node yields its center set in input order, then its left subtree, then its
/// right subtree.
#[derive(Debug)]
pub struct Iter<'a, T, V> {
    /// Nodes still to visit
    stack: Vec<&'a Node<T, V>>,
    /// Center set of the node being visited
    current: std::slice::Iter<'a, Interval<T, V>>,
    /// Intervals not yet yielded
    remaining: usize,
}

impl<'a, T, V> Iter<'a, T, V>
where
    T: PrimInt,
{
    pub(crate) fn new(tree_ref: &'a IntervalTree<T, V>) -> Self {
        Iter {
            stack: tree_ref.root.as_deref().into_iter().collect(),
            current: Default::default(),
            remaining: tree_ref.len(),
        }
    }
}

impl<'a, T, V> Iterator for Iter<'a, T, V>
where
    T: PrimInt,
{
    type Item = &'a Interval<T, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(interval) = self.current.next() {
                self.remaining -= 1;
                return Some(interval);
            }
            let x = self.stack.pop()?;
            self.stack.extend(x.right());
            self.stack.extend(x.left());
            self.current = x.intervals.iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: PrimInt, V> ExactSizeIterator for Iter<'_, T, V> {}

impl<T: PrimInt, V> FusedIterator for Iter<'_, T, V> {}

/// An iterator over the values of an `IntervalTree`, in pre-order.
#[derive(Debug)]
pub struct Values<'a, T, V> {
    pub(crate) inner: Iter<'a, T, V>,
}

impl<'a, T, V> Iterator for Values<'a, T, V>
where
    T: PrimInt,
{
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Interval::value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: PrimInt, V> ExactSizeIterator for Values<'_, T, V> {}

/// An into iterator over the intervals of an `IntervalTree`, in pre-order.
#[derive(Debug)]
pub struct IntoIter<T, V> {
    /// Nodes still to visit
    stack: Vec<Box<Node<T, V>>>,
    /// Center set of the node being visited
    current: std::vec::IntoIter<Interval<T, V>>,
    /// Intervals not yet yielded
    remaining: usize,
}

impl<T, V> IntoIter<T, V>
where
    T: PrimInt,
{
    pub(crate) fn new(tree: IntervalTree<T, V>) -> Self {
        IntoIter {
            stack: tree.root.into_iter().collect(),
            current: Vec::new().into_iter(),
            remaining: tree.len,
        }
    }
}

impl<T, V> Iterator for IntoIter<T, V>
where
    T: PrimInt,
{
    type Item = Interval<T, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(interval) = self.current.next() {
                self.remaining -= 1;
                return Some(interval);
            }
            let x = *self.stack.pop()?;
            let Node {
                intervals,
                left,
                right,
                ..
            } = x;
            self.stack.extend(right);
            self.stack.extend(left);
            self.current = intervals.into_iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: PrimInt, V> ExactSizeIterator for IntoIter<T, V> {}
