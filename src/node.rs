use crate::interval::Interval;

/// A single partition point in the tree.
///
/// A [`Node`] splits the intervals handed to it into three disjoint groups
/// against its `center` value: intervals entirely below `center` form the
/// left subtree, intervals entirely above it form the right subtree, and
/// intervals straddling it are stored locally in `overlapping`.
#[derive(Debug, Clone)]
pub(crate) struct Node<P> {
    /// Child node pointers.
    left: Option<Box<Node<P>>>,
    right: Option<Box<Node<P>>>,

    /// The endpoint value this node partitions around.
    center: P,

    /// The intervals `i` satisfying `i.start <= center <= i.end`.
    ///
    /// Never empty: `center` is an endpoint of at least one interval in the
    /// partition, and that interval always straddles it.
    overlapping: Vec<Interval<P>>,
}

impl<P> Node<P>
where
    P: Ord + Clone,
{
    /// Recursively build the subtree holding `intervals`.
    ///
    /// Returns [`None`] for an empty input, the "absent" subtree.
    pub(crate) fn build(intervals: Vec<Interval<P>>) -> Option<Box<Self>> {
        if intervals.is_empty() {
            return None;
        }

        // Select the splitting point as the middle of the sorted endpoint
        // multiset.
        //
        // Both bounds of every interval contribute, duplicates included, so
        // the pick tracks endpoint density rather than a deduplicated
        // median. This keeps the tree approximately balanced for reasonably
        // spread inputs (it is not a worst-case guarantee).
        let mut endpoints = Vec::with_capacity(intervals.len() * 2);
        for v in &intervals {
            endpoints.push(v.start().clone());
            endpoints.push(v.end().clone());
        }
        endpoints.sort_unstable();
        let center = endpoints[endpoints.len() / 2].clone();

        // Partition the intervals against the center.
        //
        // Every interval lands in exactly one of the three groups.
        let mut overlapping = Vec::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        for v in intervals {
            if *v.end() < center {
                left.push(v);
            } else if *v.start() > center {
                right.push(v);
            } else {
                overlapping.push(v);
            }
        }

        // The interval contributing the center endpoint straddles it, so at
        // least one interval stays at this node and each recursive call
        // operates on a strictly smaller input.
        debug_assert!(!overlapping.is_empty());

        Some(Box::new(Self {
            left: Self::build(left),
            right: Self::build(right),
            center,
            overlapping,
        }))
    }
}

impl<P> Node<P> {
    pub(crate) fn center(&self) -> &P {
        &self.center
    }

    pub(crate) fn overlapping(&self) -> &[Interval<P>] {
        &self.overlapping
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The number of nodes on the longest path from this node to a leaf.
    ///
    /// A childless node has depth 1.
    pub(crate) fn depth(&self) -> usize {
        let left = self.left().map(Self::depth).unwrap_or_default();
        let right = self.right().map(Self::depth).unwrap_or_default();
        1 + left.max(right)
    }
}
