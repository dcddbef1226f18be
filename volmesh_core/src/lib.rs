//! # volmesh_core
//!
//! Pure algorithms for isosurface extraction from discrete scalar volumes.
//!
//! This crate holds the cell-level Marching Cubes machinery used by the `volmesh` runtime:
//! lookup tables, the reusable [`Cube`](marching_cubes::Cube), case classification and
//! triangle emission. It knows nothing about pixel storage; any [`ScalarField`] can be meshed.
//!
//! ## Features
//!
//! - **no_std compatible**: Works in embedded environments with the `alloc` feature
//! - **Pure algorithms**: No storage implementation, just the lattice math
//! - **Constant tables**: The triangle table is `const` data shared by all threads
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables standard library support
//! - `alloc`: Enables heap allocation (Vec, etc.) without full std
//! - `serde`: Serialize/deserialize for [`Point3`], [`GridDims`] and the ambiguity policy
//!
//! ## Modules
//!
//! - [`types`]: Core data types (Point3, GridCoord, GridDims)
//! - [`traits`]: The [`ScalarField`] sampling abstraction
//! - [`marching_cubes`]: Tables, cube, classifier and per-cell processing
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use volmesh_core::prelude::*;
//!
//! let field = FnField::bounded(GridDims::new(4, 4, 4), |x, y, z| {
//!     if (x, y, z) == (1, 1, 1) { 255 } else { 0 }
//! });
//! let mut cube = Cube::new();
//! let mut out = Vec::new();
//! for z in -1..=4 {
//!     scan_slice(&mut cube, &field, z, 127.5, AmbiguityPolicy::Direct, &mut out);
//! }
//! assert_eq!(out.len(), 8 * 3);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Conditional std/alloc support
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal alloc prelude for conditional compilation
#[cfg(feature = "std")]
mod alloc_prelude {
    pub use std::vec::Vec;
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
mod alloc_prelude {
    pub use alloc::vec::Vec;
}

pub mod error;
pub mod marching_cubes;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::error::VolmeshCoreError;
    pub use crate::marching_cubes::{
        case_number, emit_triangles, interpolate_edge, is_ambiguous, process_cell,
        process_cell_no_alloc, AmbiguityPolicy, Cube,
    };
    pub use crate::traits::{FnField, ScalarField};
    pub use crate::types::{GridCoord, GridDims, Point3, ABSENT_EDGE};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::marching_cubes::{process_cell_into, scan_slice};
}

// Re-export everything at crate root for convenience
pub use error::{case_from_i32, VolmeshCoreError};
pub use marching_cubes::{AmbiguityPolicy, Cube};
pub use traits::{corner_from_index, index_from_corner, FnField, ScalarField};
pub use types::{GridCoord, GridDims, Point3, ABSENT_EDGE};
