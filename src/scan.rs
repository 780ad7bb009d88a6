use crate::interval::Interval;

/// Report the intervals containing `point` with a linear scan.
///
/// O(n) per query. This is the baseline the tree is measured against, and
/// the ground truth the tree's results are validated against in tests.
pub fn stab_scan<'a, P>(
    intervals: &'a [Interval<P>],
    point: &'a P,
) -> impl Iterator<Item = &'a Interval<P>>
where
    P: Ord,
{
    intervals.iter().filter(move |v| v.contains(point))
}
