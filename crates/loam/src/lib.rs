//! Dense row-major 2D grid with lazy 8-connected neighbourhood iteration.
//!
//! [`Grid`] owns a contiguous row-major backing store of homogeneous cells
//! and exposes random access, bulk traversal, and textual rendering. The
//! centrepiece is [`Grid::neighbours`] / [`Grid::neighbours_mut`]: lazy,
//! boundary-filtered iterators over the up-to-8 cells adjacent to a centre
//! (including diagonals), the building block for cellular-automata-style
//! updates.
//!
//! # Quick start
//!
//! ```rust
//! use loam::Grid;
//!
//! let mut grid: Grid<i32> = Grid::new(10, 10).unwrap();
//!
//! // Bulk algorithms work directly on the backing slice.
//! grid.as_mut_slice().fill(0);
//!
//! // Row-major iteration over every cell.
//! for cell in &mut grid {
//!     *cell += 1;
//! }
//!
//! // Neighbourhood iteration skips out-of-bounds positions: (0, 2) sits
//! // on the top edge, so only 5 of the 8 candidate offsets survive.
//! for cell in grid.neighbours_mut(0, 2) {
//!     *cell = 4;
//! }
//! assert_eq!(grid.neighbours(0, 2).count(), 5);
//! assert_eq!(grid[(1, 2)], 4);
//! assert_eq!(grid[(5, 5)], 1);
//! ```
//!
//! Neighbourhood views borrow the grid, so the borrow checker rejects any
//! use of a view after the grid is moved or mutably traversed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod neighbours;

pub use error::GridError;
pub use grid::Grid;
pub use neighbours::{Neighbours, NeighboursMut};
