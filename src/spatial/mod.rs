//! Spatial data structures and queries.
//!
//! This module provides acceleration structures for efficient spatial queries:
//!
//! - [`Quadtree`] - A point quadtree for exact membership tests and rectangular range queries

mod quadtree;

pub use quadtree::Quadtree;
