//! `centered_interval_tree` is an immutable centered interval tree.
//!
//! The tree is built once from a collection of closed intervals `[start, stop]`, each
//! carrying an opaque value, and then answers two query families without rebuilding:
//! which intervals overlap a range, and which intervals lie entirely inside it.
//!
//! Every node picks a center coordinate and keeps the intervals covering it in two
//! orders, ascending by start and descending by stop. An overlap query on one side of
//! the center scans the matching order and stops at the first interval that misses,
//! and never descends into the subtree on the far side.
//!
//! The structure never changes after construction, so `&IntervalTree` can be shared
//! across threads and queried concurrently.
//!
//! # Example
//!
//! ```rust
//! use centered_interval_tree::{Interval, IntervalTree};
//!
//! let tree = IntervalTree::build(vec![
//!     Interval::new(1, 5, "A"),
//!     Interval::new(10, 20, "B"),
//!     Interval::new(4, 11, "C"),
//! ])
//! .unwrap();
//! assert_eq!(tree.overlapping_values(6, 9).unwrap(), vec![&"C"]);
//! assert!(tree.contained(6, 9).unwrap().is_empty());
//! assert_eq!(tree.overlapping_in(1..21).unwrap().len(), 3);
//! ```
//!

mod error;
mod interval;
mod intervaltree;
mod iter;
mod node;
mod range;


pub use error::{Error, Result};
pub use interval::{Endpoints, Interval};
pub use intervaltree::IntervalTree;
pub use iter::{IntoIter, Iter, Values};
