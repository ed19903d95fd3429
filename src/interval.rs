//! The `Interval` stored in `IntervalTree` and represents the closed range [start, stop]
//!
//! An `Interval` carries an opaque value that the tree never inspects. Anything that
//! exposes a start and a stop coordinate can be indexed through the [`Endpoints`] trait.

use std::ops::{Range, RangeInclusive};

use num_traits::PrimInt;

use crate::range::inclusive_bounds;

/// Types exposing a closed coordinate range `[start, stop]`.
pub trait Endpoints<T> {
    /// First coordinate covered
    fn start(&self) -> T;
    /// Last coordinate covered
    fn stop(&self) -> T;
}

/// The interval stored in `IntervalTree` represents [start, stop] with an attached value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T, V> {
    start: T,
    stop: T,
    value: V,
}

impl<T: PrimInt, V> Interval<T, V> {
    /// Create a new `Interval`.
    ///
    /// The bounds are not checked here, `IntervalTree::build` rejects
    /// intervals with `start > stop`.
    #[inline]
    pub fn new(start: T, stop: T, value: V) -> Self {
        Self { start, stop, value }
    }

    /// Create an `Interval` from the half-open range `offset..offset + length`,
    /// covering `[offset, offset + length - 1]`.
    ///
    /// Returns `None` when the range is empty.
    ///
    /// # Example
    /// ```rust
    /// use centered_interval_tree::Interval;
    ///
    /// let interval = Interval::from_range(10..15, "a").unwrap();
    /// assert_eq!((interval.start(), interval.stop()), (10, 14));
    /// assert!(Interval::from_range(3..3, "b").is_none());
    /// ```
    #[inline]
    pub fn from_range(range: Range<T>, value: V) -> Option<Self> {
        inclusive_bounds(range).map(|(start, stop)| Self::new(start, stop, value))
    }

    /// First coordinate covered
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Last coordinate covered
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Reference to the attached value
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the interval, returning the attached value
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Checks `start <= stop`
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.stop
    }

    /// Checks if self shares at least one coordinate with [start, stop]
    #[inline]
    pub fn overlaps(&self, start: T, stop: T) -> bool {
        self.start <= stop && self.stop >= start
    }

    /// Checks if self lies entirely inside [start, stop]
    #[inline]
    pub fn is_contained_in(&self, start: T, stop: T) -> bool {
        start <= self.start && self.stop <= stop
    }
}

impl<T: PrimInt, V> Endpoints<T> for Interval<T, V> {
    #[inline]
    fn start(&self) -> T {
        self.start
    }

    #[inline]
    fn stop(&self) -> T {
        self.stop
    }
}

impl<T: PrimInt> Endpoints<T> for (T, T) {
    #[inline]
    fn start(&self) -> T {
        self.0
    }

    #[inline]
    fn stop(&self) -> T {
        self.1
    }
}

impl<T: PrimInt> Endpoints<T> for RangeInclusive<T> {
    #[inline]
    fn start(&self) -> T {
        *RangeInclusive::start(self)
    }

    #[inline]
    fn stop(&self) -> T {
        *self.end()
    }
}

impl<T, E> Endpoints<T> for &E
where
    E: Endpoints<T> + ?Sized,
{
    #[inline]
    fn start(&self) -> T {
        (**self).start()
    }

    #[inline]
    fn stop(&self) -> T {
        (**self).stop()
    }
}
