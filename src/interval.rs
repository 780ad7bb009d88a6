use std::{
    cmp::Ordering,
    error::Error,
    fmt::{Debug, Display},
    ops::RangeInclusive,
};

/// A closed interval `[start, end]`, inclusive of both endpoints.
///
/// An [`Interval`] always satisfies `start <= end` and is immutable once
/// constructed. It is ordered by the lower bound, and tie-braked with the
/// upper bound.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Interval<P> {
    start: P,
    end: P,
}

impl<P> Interval<P> {
    /// Construct an [`Interval`] spanning `[start, end]`, validating the
    /// bounds are ordered.
    pub fn try_new(start: P, end: P) -> Result<Self, InvalidInterval<P>>
    where
        P: Ord,
    {
        if start > end {
            return Err(InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// The inclusive lower bound of this interval.
    pub fn start(&self) -> &P {
        &self.start
    }

    /// The inclusive upper bound of this interval.
    pub fn end(&self) -> &P {
        &self.end
    }

    /// Returns true if `point` falls within this interval.
    ///
    /// Both bounds are inclusive: `[5, 10]` contains 5 and 10, but not 4
    /// or 11.
    pub fn contains(&self, point: &P) -> bool
    where
        P: Ord,
    {
        self.start <= *point && *point <= self.end
    }
}

impl<P> PartialOrd for Interval<P>
where
    P: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Interval<P>
where
    P: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // The lower bound is the primary ordering value, falling back to the
        // upper bound when the lower bounds are equal.
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            v => v,
        }
    }
}

impl<P> From<RangeInclusive<P>> for Interval<P>
where
    P: Ord,
{
    /// Convert an ordered [`RangeInclusive`] into an [`Interval`].
    ///
    /// # Panics
    ///
    /// Panics if the range bounds are inverted (`start > end`).
    fn from(value: RangeInclusive<P>) -> Self {
        let (start, end) = value.into_inner();
        match Self::try_new(start, end) {
            Ok(v) => v,
            Err(_) => panic!("invalid interval: start exceeds end"),
        }
    }
}

impl<P> Display for Interval<P>
where
    P: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// The error returned when constructing an [`Interval`] from inverted bounds
/// (`start > end`).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InvalidInterval<P> {
    start: P,
    end: P,
}

impl<P> Display for InvalidInterval<P>
where
    P: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval: start {} exceeds end {}",
            self.start, self.end
        )
    }
}

impl<P> Error for InvalidInterval<P> where P: Display + Debug {}
