//! Error types for volmesh operations.
//!
//! Sampling is total and never fails; these errors come from configuration misuse, stack
//! construction, swap files and extraction control.

use thiserror::Error;

/// Errors raised while building or configuring a volume.
#[derive(Error, Debug)]
pub enum VolumeError {
    /// Channel flags must be given for exactly R, G and B.
    #[error("expected 3 channel flags, got {got}")]
    InvalidChannelCount {
        /// Number of flags provided.
        got: usize,
    },

    /// A lookup table does not have 256 entries.
    #[error("lookup table '{table}' has {got} entries, expected 256")]
    InvalidLutLength {
        /// Which table (red, green, blue, alpha).
        table: &'static str,
        /// Number of entries provided.
        got: usize,
    },

    /// Voxel spacing must be finite and positive, origin finite.
    #[error("invalid calibration: {message}")]
    InvalidCalibration {
        /// Description of the problem.
        message: String,
    },

    /// Slice dimensions are zero or slices disagree in size.
    #[error("invalid dimensions {width}x{height}x{depth}")]
    InvalidDimensions {
        /// Slice width.
        width: u32,
        /// Slice height.
        height: u32,
        /// Number of slices.
        depth: u32,
    },

    /// A buffer has the wrong number of pixels.
    #[error("dimension mismatch: expected {expected} pixels, got {got}")]
    DimensionMismatch {
        /// Expected number of pixels.
        expected: usize,
        /// Actual number of pixels.
        got: usize,
    },

    /// The backing data is swapped out or cleared.
    #[error("volume data is not available")]
    Unavailable,

    /// A swap file is malformed.
    #[error("invalid file format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: &'static str,
    },

    /// I/O error while reading or writing a swap file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file or values.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Errors raised by isosurface extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extraction was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("extraction cancelled")]
    Cancelled,

    /// A dedicated worker pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// The volume rejected the request.
    #[error("volume error: {0}")]
    Volume(#[from] VolumeError),
}

/// Result type alias for volmesh operations.
pub type Result<T, E = VolumeError> = std::result::Result<T, E>;
