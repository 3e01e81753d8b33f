//! quadrum - Point quadtree spatial indexing
//!
//! A point quadtree partitions the plane into four quadrants around each
//! inserted point, rather than around a fixed grid. The result is a simple
//! dynamic index over 2D points supporting insertion with duplicate
//! rejection, exact membership tests, and axis-aligned rectangular range
//! queries.
//!
//! # Example
//!
//! ```
//! use quadrum::Quadtree;
//!
//! let mut tree = Quadtree::new();
//! assert!(tree.insert(1, 2));
//! assert!(tree.insert(3, 4));
//! assert!(!tree.insert(1, 2)); // duplicates are rejected
//!
//! assert!(tree.contains(1, 2));
//! assert!(!tree.contains(1, 0));
//!
//! let in_box = tree.query_range(-10, 10, -10, 10).unwrap();
//! assert_eq!(in_box.len(), 2);
//! ```

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod spatial;

pub use bounds::Aabb2;
pub use error::QuadrumError;
pub use primitives::Point2;
pub use spatial::Quadtree;
