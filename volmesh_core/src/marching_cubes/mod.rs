//! Marching Cubes isosurface extraction.
//!
//! This module provides the cell-level half of the algorithm:
//!
//! - Compile-time lookup tables (triangle table, ambiguous cases, cube topology)
//! - [`Cube`]: a reusable unit cell with edge interpolation
//! - Case classification and triangle emission with a selectable [`AmbiguityPolicy`]
//! - Per-cell and per-slice processing, with sink, fixed-buffer and `Vec` variants
//!
//! # Example
//!
//! ```ignore
//! use volmesh_core::marching_cubes::{process_cell_no_alloc, AmbiguityPolicy};
//! use volmesh_core::types::GridCoord;
//!
//! let (triangles, count) =
//!     process_cell_no_alloc(&field, GridCoord::new(0, 0, 0), 100.5, AmbiguityPolicy::Direct);
//! ```

mod algorithm;
mod classify;
mod cube;
mod tables;

pub use algorithm::{process_cell, process_cell_no_alloc};
pub use classify::{
    case_number, emit_triangles, is_ambiguous, table_offset, table_row, triangle_count,
    validate_tables, AmbiguityPolicy,
};
pub use cube::{interpolate_edge, Cube};
pub use tables::{
    AMBIGUOUS_CASES, AMBIGUOUS_TABLE_LEN, CORNER_OFFSETS, EDGE_CORNERS, MAX_TRIANGLES_PER_CELL,
    ROW_LEN, TRIANGLE_TABLE,
};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use algorithm::{process_cell_into, scan_slice};
