//! # volmesh
//!
//! Marching cubes isosurface extraction over stacks of image slices.
//!
//! This crate is the std runtime on top of `volmesh_core`'s algorithms. It provides:
//!
//! - **Image stacks**: 8-bit gray or packed 24-bit RGB slices ([`ImageStack`])
//! - **A volume sampler**: channel selection, averaging, lookup tables and saturation turned into
//!   one scalar/color field ([`Volume`]), with swap-to-disk of the pixel data
//! - **Extraction**: full or sparse scans, parallel over z-slices, with progress and
//!   cancellation ([`IsosurfaceExtractor`])
//! - **Output**: unindexed triangle soup in physical coordinates, statistics and OBJ export
//!   ([`TriangleSoup`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use volmesh::prelude::*;
//!
//! // A 32³ gray stack holding a bright ball
//! let dims = GridDims::new(32, 32, 32);
//! let stack = ImageStack::gray_from_fn(dims, |x, y, z| {
//!     let d = ((x as f32 - 16.0).powi(2) + (y as f32 - 16.0).powi(2) + (z as f32 - 16.0).powi(2)).sqrt();
//!     if d < 10.0 { 255 } else { 0 }
//! })?;
//!
//! let volume = Volume::new(stack).with_calibration(Calibration::new(0.5, 0.5, 2.0, Point3::default())?)?;
//! let soup = IsosurfaceExtractor::new().extract_volume(&volume, 127.0)?;
//! std::fs::write("ball.obj", soup.to_obj())?;
//! ```
//!
//! ## Sampling
//!
//! A [`Volume`] decides once per configuration change how voxels are read:
//!
//! - **Scalar** when averaging, or when at most one channel is read through default tables
//! - **Packed color** otherwise, compositing the mapped channels with an alpha from the raw mean
//!
//! Out-of-bounds reads return 0, which closes surfaces touching the volume boundary.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Parallel slice scanning via rayon
//! - `serde` (default): TOML configuration files

#![warn(missing_docs)]
#![warn(clippy::all)]

mod calibration;
mod config;
mod error;
mod extractor;
mod image;
mod io;
mod loader;
mod lut;
mod mesh;
mod schedule;
mod volume;

pub use calibration::Calibration;
pub use config::{ExtractionConfig, ScanMode, VolmeshConfig, VolumeConfig};
pub use error::{ExtractError, Result, VolumeError};
pub use extractor::{
    CancelToken, ExtractionOptions, ExtractionStats, ExtractorState, IsosurfaceExtractor,
    ProgressFn,
};
pub use image::{pack_rgb, unpack_rgb, ImageStack, SourceKind};
pub use io::{compute_file_size, read_stack, write_stack, HEADER_SIZE, SWAP_MAGIC, SWAP_VERSION};
pub use loader::{unpack_argb, DataType, Loader};
pub use lut::{Lut, LutSet, LUT_LEN, OPAQUE_ALPHA};
pub use mesh::{MeshStats, Triangle, TriangleSoup};
pub use schedule::{ScanSchedule, SliceRect};
pub use volume::Volume;

// Re-export volmesh_core types for convenience
pub use volmesh_core::{
    AmbiguityPolicy, Cube, FnField, GridCoord, GridDims, Point3, ScalarField, ABSENT_EDGE,
};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use volmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calibration::Calibration;
    pub use crate::config::{ExtractionConfig, ScanMode, VolumeConfig};
    pub use crate::error::{ExtractError, Result, VolumeError};
    pub use crate::extractor::{CancelToken, ExtractionOptions, IsosurfaceExtractor};
    pub use crate::image::{ImageStack, SourceKind};
    pub use crate::lut::LutSet;
    pub use crate::mesh::{MeshStats, TriangleSoup};
    pub use crate::schedule::{ScanSchedule, SliceRect};
    pub use crate::volume::Volume;

    pub use volmesh_core::{AmbiguityPolicy, GridDims, Point3, ScalarField};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(dims: GridDims, radius: f32) -> ImageStack {
        let c = Point3::new(
            dims.width as f32 / 2.0,
            dims.height as f32 / 2.0,
            dims.depth as f32 / 2.0,
        );
        ImageStack::gray_from_fn(dims, |x, y, z| {
            let d = (Point3::new(x as f32, y as f32, z as f32) - c).length();
            if d < radius {
                255
            } else {
                0
            }
        })
        .unwrap()
    }

    #[test]
    fn test_basic_workflow() {
        let volume = Volume::new(ball(GridDims::new(12, 12, 12), 4.0));
        let mut extractor = IsosurfaceExtractor::new();
        let soup = extractor.extract_volume(&volume, 127.0).unwrap();

        assert!(!soup.is_empty());
        let stats = soup.stats();
        assert!(stats.bbox_min.x > 0.0 && stats.bbox_max.x < 12.0);
        assert_eq!(extractor.state(), ExtractorState::Done);
    }

    #[test]
    fn test_unavailable_volume_is_rejected() {
        let mut volume = Volume::new(ball(GridDims::new(6, 6, 6), 2.0));
        volume.clear();
        let result = IsosurfaceExtractor::new().extract_volume(&volume, 127.0);
        assert!(matches!(
            result,
            Err(ExtractError::Volume(VolumeError::Unavailable))
        ));
    }

    #[test]
    fn test_scheduled_matches_full() {
        let volume = Volume::new(ball(GridDims::new(10, 9, 8), 3.0));
        let mut extractor = IsosurfaceExtractor::new();
        let full = extractor.extract_volume(&volume, 127.0).unwrap();

        let schedule = ScanSchedule::from_occupancy(&volume, 127.0);
        let sparse = extractor
            .extract_scheduled(&volume, volume.calibration(), 127.0, &schedule)
            .unwrap();
        assert_eq!(full, sparse);
        assert!(extractor.last_stats().unwrap().cells_visited < 12 * 11 * 10);
    }
}
