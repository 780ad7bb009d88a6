use crate::{
    interval::Interval,
    iter::{Iter, Stab},
    node::Node,
};

/// A balanced, centered interval tree answering stabbing queries.
///
/// The tree is built once from a static set of intervals and is immutable
/// afterwards; queries are read-only traversals. An empty input yields the
/// absent tree, which answers every query with no matches.
#[derive(Debug, Clone)]
pub struct IntervalTree<P>(Option<Box<Node<P>>>);

impl<P> Default for IntervalTree<P> {
    fn default() -> Self {
        Self(None)
    }
}

impl<P> FromIterator<Interval<P>> for IntervalTree<P>
where
    P: Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = Interval<P>>>(iter: T) -> Self {
        Self(Node::build(iter.into_iter().collect()))
    }
}

impl<P> IntervalTree<P> {
    /// Return an iterator over the intervals containing `point`.
    ///
    /// Matches are yielded in no particular order. The traversal visits a
    /// single root-to-leaf path, inspecting only the intervals stored along
    /// it, so a query costs O(log n + k) for k matches on a balanced tree.
    pub fn stab<'a>(&'a self, point: &'a P) -> impl Iterator<Item = &'a Interval<P>>
    where
        P: Ord,
    {
        Stab::new(self.0.as_deref(), point)
    }

    /// Return an iterator over every interval in the tree, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<P>> {
        Iter::new(self.0.as_deref())
    }

    /// The number of nodes on the longest root-to-leaf path.
    ///
    /// An absent (empty) tree has depth 0 and a single-node tree depth 1.
    /// Diagnostic only; balanced trees stay near log2 of the input size.
    pub fn depth(&self) -> usize {
        self.0.as_deref().map(Node::depth).unwrap_or_default()
    }

    /// Returns true if the tree holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
