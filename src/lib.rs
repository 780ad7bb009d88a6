//! A balanced, centered interval tree for efficient stabbing queries.
//!
//! A stabbing query asks, for a point `p`, which of a collection of closed
//! intervals `[start, end]` contain `p`. The [`IntervalTree`] answers it by
//! recursively partitioning the intervals around the median of their
//! endpoint values: intervals straddling the split point stay at the node,
//! the rest are pushed into the left or right subtree. A query then walks a
//! single root-to-leaf path, checking only the intervals stored along it.
//!
//! The tree is built once from a static interval set and is immutable
//! afterwards; there is no insertion or removal. For the baseline the tree
//! is measured against, see [`stab_scan`].
//!
//! ```
//! use stabtree::{Interval, IntervalTree};
//!
//! let tree = [
//!     Interval::from(1..=5),
//!     Interval::from(4..=10),
//!     Interval::from(11..=20),
//! ]
//! .into_iter()
//! .collect::<IntervalTree<_>>();
//!
//! // Both [1, 5] and [4, 10] contain the point 4.
//! assert_eq!(tree.stab(&4).count(), 2);
//! ```

mod gen;
mod interval;
mod iter;
mod node;
mod scan;
mod tree;


pub use gen::RandomIntervals;
pub use interval::{Interval, InvalidInterval};
pub use scan::stab_scan;
pub use tree::IntervalTree;
