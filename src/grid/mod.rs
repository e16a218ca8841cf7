//! Grid data structures and row views
//!
//! This module contains the mutable search substrate:
//! - Cell state with precomputed adjacency
//! - The square grid with digit/tile mutation
//! - Derived row views: number extraction and signature hashing

/// Cell state with precomputed adjacency
pub mod cell;
/// The square grid and its derived row views
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;
