use std::ops::RangeInclusive;

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use crate::interval::Interval;

/// An infinite stream of randomly placed, valid intervals.
///
/// Starts are drawn uniformly from the start range and lengths uniformly
/// from the length range, with `end = start + length`. The defaults draw
/// starts in `[1, 990000]` and lengths in `[1, 10000]`, short intervals
/// scattered across a large domain.
///
/// Any [`Rng`] can drive the stream; tests inject a seeded generator for
/// deterministic fixtures.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use stabtree::{IntervalTree, RandomIntervals};
///
/// let tree = RandomIntervals::new(StdRng::seed_from_u64(42))
///     .take(1_000)
///     .collect::<IntervalTree<_>>();
/// ```
#[derive(Debug, Clone)]
pub struct RandomIntervals<R> {
    rng: R,
    start: Uniform<i64>,
    length: Uniform<i64>,
}

impl<R> RandomIntervals<R>
where
    R: Rng,
{
    /// Construct a stream producing the default distribution.
    pub fn new(rng: R) -> Self {
        Self::with_params(rng, 1..=990_000, 1..=10_000)
    }

    /// Construct a stream with custom start and length distributions.
    ///
    /// # Panics
    ///
    /// Panics if either range is empty, or if `lengths` admits a negative
    /// value (which would invert the interval bounds).
    pub fn with_params(
        rng: R,
        starts: RangeInclusive<i64>,
        lengths: RangeInclusive<i64>,
    ) -> Self {
        assert!(*lengths.start() >= 0, "interval lengths must be non-negative");
        Self {
            rng,
            start: Uniform::from(starts),
            length: Uniform::from(lengths),
        }
    }
}

impl<R> Iterator for RandomIntervals<R>
where
    R: Rng,
{
    type Item = Interval<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start.sample(&mut self.rng);
        let end = start + self.length.sample(&mut self.rng);

        // Lengths are validated as non-negative at construction, so the
        // bounds are always ordered.
        Some(Interval::from(start..=end))
    }
}
