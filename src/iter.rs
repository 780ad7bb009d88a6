use std::slice;

use crate::{interval::Interval, node::Node};

/// An iterator over the intervals containing a query point.
///
/// The traversal visits the `overlapping` list of every node on the path
/// from the root towards the leaf nearest the query point, descending left
/// when the point is below a node's center and right otherwise. Subtrees on
/// the far side of a center are pruned: their intervals lie entirely on the
/// wrong side of it and cannot contain the point.
#[derive(Debug)]
pub(crate) struct Stab<'a, P> {
    point: &'a P,

    /// The next node on the root-to-leaf path, if any.
    next_node: Option<&'a Node<P>>,

    /// The remaining `overlapping` entries of the node visited last.
    candidates: slice::Iter<'a, Interval<P>>,
}

impl<'a, P> Stab<'a, P> {
    pub(crate) fn new(root: Option<&'a Node<P>>, point: &'a P) -> Self {
        Self {
            point,
            next_node: root,
            candidates: [].iter(),
        }
    }
}

impl<'a, P> Iterator for Stab<'a, P>
where
    P: Ord,
{
    type Item = &'a Interval<P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Drain the current node's straddling intervals, yielding those
            // that contain the point.
            for v in self.candidates.by_ref() {
                if v.contains(self.point) {
                    return Some(v);
                }
            }

            // Then step down the path to the next node.
            let node = self.next_node.take()?;
            self.candidates = node.overlapping().iter();

            // Descend left iff the point is strictly below the center.
            //
            // A point equal to the center descends right: intervals ending
            // exactly at the center straddle it and were yielded above, so
            // the left subtree cannot contain a match.
            self.next_node = if *self.point < *node.center() {
                node.left()
            } else {
                node.right()
            };
        }
    }
}

/// A pre-order iterator yielding every interval stored in the tree.
#[derive(Debug)]
pub(crate) struct Iter<'a, P> {
    stack: Vec<&'a Node<P>>,
    intervals: slice::Iter<'a, Interval<P>>,
}

impl<'a, P> Iter<'a, P> {
    pub(crate) fn new(root: Option<&'a Node<P>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
            intervals: [].iter(),
        }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Interval<P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.intervals.next() {
                return Some(v);
            }

            let node = self.stack.pop()?;
            self.stack.extend(node.left().into_iter().chain(node.right()));
            self.intervals = node.overlapping().iter();
        }
    }
}
