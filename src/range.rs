//! Conversion from half-open `offset..offset + length` ranges to the inclusive
//! `[start, stop]` pairs used by the tree.

use std::ops::Range;

use num_traits::PrimInt;

/// Inclusive bounds covered by a half-open range, `None` when the range is empty.
#[inline]
pub(crate) fn inclusive_bounds<T: PrimInt>(range: Range<T>) -> Option<(T, T)> {
    if range.start >= range.end {
        return None;
    }
    // `end > start` so `end` is never the minimum value here
    Some((range.start, range.end - T::one()))
}

/// Floor of the average of `lo` and `hi`, without overflow.
#[inline]
pub(crate) fn midpoint<T: PrimInt>(lo: T, hi: T) -> T {
    (lo & hi) + ((lo ^ hi) >> 1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offset_length_maps_to_inclusive_stop() {
        assert_eq!(inclusive_bounds(3..7), Some((3, 6)));
        assert_eq!(inclusive_bounds(5..6), Some((5, 5)));
        assert_eq!(inclusive_bounds(i8::MIN..i8::MAX), Some((-128, 126)));
    }

    #[test]
    fn empty_range_has_no_bounds() {
        assert_eq!(inclusive_bounds(4..4), None);
        assert_eq!(inclusive_bounds(9..2), None);
        assert_eq!(inclusive_bounds(0u8..0), None);
    }

    #[test]
    fn midpoint_rounds_down_and_stays_in_range() {
        assert_eq!(midpoint(0, 10), 5);
        assert_eq!(midpoint(1, 4), 2);
        assert_eq!(midpoint(-3, 0), -2);
        assert_eq!(midpoint(-5, -5), -5);
        assert_eq!(midpoint(i64::MIN, i64::MAX), -1);
        assert_eq!(midpoint(u32::MAX - 1, u32::MAX), u32::MAX - 1);
    }
}
