//! Isosurface extraction over a whole volume.
//!
//! [`IsosurfaceExtractor`] drives the per-cell pipeline of `volmesh_core` across every cell
//! origin of the padded grid, z-slice by z-slice. Each slice job owns its own [`Cube`] and
//! vertex buffer, so slices run independently on the rayon pool (feature `parallel`) and are
//! concatenated in z order afterwards. Parallel and sequential runs produce the same soup.
//!
//! # Example
//!
//! ```ignore
//! use volmesh::{Calibration, IsosurfaceExtractor};
//!
//! let mut extractor = IsosurfaceExtractor::new();
//! let soup = extractor.extract(&field, &Calibration::unit(), 127.0)?;
//! println!("{} triangles", soup.len());
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use volmesh_core::marching_cubes::{process_cell_into, scan_slice};
use volmesh_core::{AmbiguityPolicy, Cube, GridCoord, GridDims, Point3, ScalarField};

use crate::calibration::Calibration;
use crate::error::{ExtractError, VolumeError};
use crate::mesh::TriangleSoup;
use crate::schedule::{full_cell_count, ScanSchedule};
use crate::volume::Volume;

/// Progress callback, called with `(slices_done, slices_total)` after each z-slice.
///
/// May be called from worker threads and out of slice order.
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// How an extraction is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Worker threads; 0 uses the global rayon pool.
    pub threads: usize,
    /// Triangle table row used for ambiguous cases.
    pub ambiguity: AmbiguityPolicy,
    /// Split slices across worker threads. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            threads: 0,
            ambiguity: AmbiguityPolicy::Direct,
            parallel: true,
        }
    }
}

/// Shared flag to stop a running extraction between slices.
///
/// Clones share the flag, so one can be kept by a UI thread while the extractor runs.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// New, not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear a previous request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Lifecycle of an [`IsosurfaceExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorState {
    /// Nothing run yet, or the last run was cancelled or failed.
    #[default]
    Idle,
    /// A run is in progress.
    Scanning,
    /// The last run completed.
    Done,
}

/// Summary of the last completed extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionStats {
    /// Triangles emitted.
    pub triangle_count: usize,
    /// Cell origins visited.
    pub cells_visited: usize,
    /// Scan slices, `depth + 2`.
    pub slices: usize,
    /// Whether a sparse schedule restricted the scan.
    pub scheduled: bool,
    /// Wall-clock time.
    pub elapsed: Duration,
}

/// Marching cubes driver.
pub struct IsosurfaceExtractor {
    options: ExtractionOptions,
    progress: Option<ProgressFn>,
    cancel: CancelToken,
    state: ExtractorState,
    last_stats: Option<ExtractionStats>,
}

impl std::fmt::Debug for IsosurfaceExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsosurfaceExtractor")
            .field("options", &self.options)
            .field("progress", &self.progress.is_some())
            .field("state", &self.state)
            .field("last_stats", &self.last_stats)
            .finish()
    }
}

impl Default for IsosurfaceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IsosurfaceExtractor {
    /// Extractor with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractionOptions::default())
    }

    /// Extractor with the given options.
    pub fn with_options(options: ExtractionOptions) -> Self {
        Self {
            options,
            progress: None,
            cancel: CancelToken::new(),
            state: ExtractorState::Idle,
            last_stats: None,
        }
    }

    /// Report progress after each slice.
    pub fn with_progress<P>(mut self, progress: P) -> Self
    where
        P: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Use an existing token for cancellation.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// A handle that cancels this extractor's runs.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Current options.
    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ExtractorState {
        self.state
    }

    /// Statistics of the last completed run.
    pub fn last_stats(&self) -> Option<ExtractionStats> {
        self.last_stats
    }

    /// Extract the surface where `field` crosses `isovalue`, scanning every cell.
    ///
    /// The threshold is `isovalue + 0.5`; vertices are mapped to physical space through
    /// `calibration`.
    ///
    /// # Errors
    /// [`ExtractError::Cancelled`] if the token fires; the token is then reset and the state
    /// returns to [`ExtractorState::Idle`]. Invalid calibrations and pool failures are reported
    /// before any cell is visited.
    pub fn extract<F>(
        &mut self,
        field: &F,
        calibration: &Calibration,
        isovalue: f32,
    ) -> Result<TriangleSoup, ExtractError>
    where
        F: ScalarField + Sync + ?Sized,
    {
        self.run(field, calibration, isovalue, None)
    }

    /// As [`extract`](Self::extract), visiting only the cells of `schedule`.
    ///
    /// Output equals the full scan whenever every voxel above the threshold lies inside the
    /// schedule's rectangles.
    ///
    /// # Errors
    /// As [`extract`](Self::extract), plus [`VolumeError::DimensionMismatch`] when the
    /// schedule was built for other dimensions.
    pub fn extract_scheduled<F>(
        &mut self,
        field: &F,
        calibration: &Calibration,
        isovalue: f32,
        schedule: &ScanSchedule,
    ) -> Result<TriangleSoup, ExtractError>
    where
        F: ScalarField + Sync + ?Sized,
    {
        let dims = field.dims();
        if schedule.dims() != dims {
            return Err(VolumeError::DimensionMismatch {
                expected: dims.voxel_count(),
                got: schedule.dims().voxel_count(),
            }
            .into());
        }
        self.run(field, calibration, isovalue, Some(schedule))
    }

    /// Extract from a [`Volume`] with its own calibration.
    ///
    /// # Errors
    /// [`VolumeError::Unavailable`] if the volume's data is swapped out or cleared.
    pub fn extract_volume(&mut self, volume: &Volume, isovalue: f32) -> Result<TriangleSoup, ExtractError> {
        if !volume.is_available() {
            return Err(VolumeError::Unavailable.into());
        }
        let calibration = *volume.calibration();
        self.extract(volume, &calibration, isovalue)
    }

    fn run<F>(
        &mut self,
        field: &F,
        calibration: &Calibration,
        isovalue: f32,
        schedule: Option<&ScanSchedule>,
    ) -> Result<TriangleSoup, ExtractError>
    where
        F: ScalarField + Sync + ?Sized,
    {
        calibration.validate()?;
        let dims = field.dims();
        self.state = ExtractorState::Scanning;
        let start = Instant::now();

        let job = SliceJob {
            field,
            calibration,
            threshold: isovalue + 0.5,
            policy: self.options.ambiguity,
            schedule,
            cancel: &self.cancel,
            progress: self.progress.as_deref(),
            done: AtomicUsize::new(0),
            total: dims.depth as usize + 2,
        };

        let outputs = match self.scan(&job) {
            Ok(outputs) => outputs,
            Err(err) => {
                if matches!(err, ExtractError::Cancelled) {
                    self.cancel.reset();
                    log::info!("extraction cancelled");
                }
                self.state = ExtractorState::Idle;
                return Err(err);
            }
        };

        let cells_visited = outputs.iter().map(|o| o.cells).sum();
        let total_vertices = outputs.iter().map(|o| o.vertices.len()).sum();
        let mut vertices = Vec::with_capacity(total_vertices);
        for output in outputs {
            vertices.extend(output.vertices);
        }
        let soup = TriangleSoup::from_vertices(vertices);

        let stats = ExtractionStats {
            triangle_count: soup.len(),
            cells_visited,
            slices: job.total,
            scheduled: schedule.is_some(),
            elapsed: start.elapsed(),
        };
        log_summary(dims, &stats);

        self.last_stats = Some(stats);
        self.state = ExtractorState::Done;
        Ok(soup)
    }

    fn scan<F>(&self, job: &SliceJob<'_, F>) -> Result<Vec<SliceOutput>, ExtractError>
    where
        F: ScalarField + Sync + ?Sized,
    {
        if self.options.parallel {
            self.scan_parallel(job)
        } else {
            job.run_sequential()
        }
    }

    #[cfg(feature = "parallel")]
    fn scan_parallel<F>(&self, job: &SliceJob<'_, F>) -> Result<Vec<SliceOutput>, ExtractError>
    where
        F: ScalarField + Sync + ?Sized,
    {
        if self.options.threads == 0 {
            return job.run_parallel();
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads)
            .build()
            .map_err(|e| ExtractError::ThreadPool(e.to_string()))?;
        pool.install(|| job.run_parallel())
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_parallel<F>(&self, job: &SliceJob<'_, F>) -> Result<Vec<SliceOutput>, ExtractError>
    where
        F: ScalarField + Sync + ?Sized,
    {
        job.run_sequential()
    }
}

fn log_summary(dims: GridDims, stats: &ExtractionStats) {
    log::info!(
        "extracted {} triangles from {}x{}x{} volume: {} of {} cells in {:.2?}",
        stats.triangle_count,
        dims.width,
        dims.height,
        dims.depth,
        stats.cells_visited,
        full_cell_count(dims),
        stats.elapsed
    );
}

struct SliceOutput {
    vertices: Vec<Point3>,
    cells: usize,
}

struct SliceJob<'a, F: ?Sized> {
    field: &'a F,
    calibration: &'a Calibration,
    threshold: f32,
    policy: AmbiguityPolicy,
    schedule: Option<&'a ScanSchedule>,
    cancel: &'a CancelToken,
    progress: Option<&'a (dyn Fn(usize, usize) + Send + Sync)>,
    done: AtomicUsize,
    total: usize,
}

impl<F> SliceJob<'_, F>
where
    F: ScalarField + Sync + ?Sized,
{
    fn slice_range(&self) -> std::ops::RangeInclusive<i32> {
        -1..=self.field.dims().depth as i32
    }

    fn run_sequential(&self) -> Result<Vec<SliceOutput>, ExtractError> {
        self.slice_range()
            .map(|z| self.slice(z))
            .collect::<Option<Vec<_>>>()
            .ok_or(ExtractError::Cancelled)
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(&self) -> Result<Vec<SliceOutput>, ExtractError> {
        use rayon::prelude::*;

        self.slice_range()
            .into_par_iter()
            .map(|z| self.slice(z))
            .collect::<Option<Vec<_>>>()
            .ok_or(ExtractError::Cancelled)
    }

    /// Scan one z-slice; `None` once cancelled.
    fn slice(&self, z: i32) -> Option<SliceOutput> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let mut cube = Cube::new();
        let mut vertices = Vec::new();
        let cells = match self.schedule {
            None => {
                scan_slice(&mut cube, self.field, z, self.threshold, self.policy, &mut vertices);
                let dims = self.field.dims();
                (dims.width as usize + 2) * (dims.height as usize + 2)
            }
            Some(schedule) => {
                let mut cells = 0;
                for (x, y) in schedule.cells(z) {
                    process_cell_into(
                        &mut cube,
                        self.field,
                        GridCoord::new(x, y, z),
                        self.threshold,
                        self.policy,
                        &mut vertices,
                    );
                    cells += 1;
                }
                cells
            }
        };

        for v in vertices.iter_mut() {
            *v = self.calibration.to_physical(*v);
        }

        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(progress) = self.progress {
            progress(done, self.total);
        }
        Some(SliceOutput { vertices, cells })
    }
}
