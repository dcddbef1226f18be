//! The volume sampler.
//!
//! [`Volume`] wraps an [`ImageStack`] and exposes it as a total scalar/color field. The
//! channel flags, averaging, saturation and lookup tables decide a [`DataType`] and a
//! [`Loader`]; both are re-derived on every configuration change that actually changes
//! something.
//!
//! # Availability
//!
//! The pixel data can be dropped ([`Volume::clear`]) or written to disk
//! ([`Volume::swap_out`]) while the configuration is kept. Until it is restored, every read
//! returns 0 and writes are dropped; a single warning is logged per unavailable period.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use volmesh_core::{GridDims, Point3, ScalarField};

use crate::calibration::Calibration;
use crate::error::{Result, VolumeError};
use crate::image::{ImageStack, SourceKind};
use crate::io::{read_stack, write_stack};
use crate::loader::{DataType, Loader};
use crate::lut::{Lut, LutSet, OPAQUE_ALPHA};

/// A sampled image volume.
#[derive(Debug)]
pub struct Volume {
    data: Option<ImageStack>,
    dims: GridDims,
    kind: SourceKind,
    calibration: Calibration,
    channels: [bool; 3],
    average: bool,
    saturated: bool,
    luts: LutSet,
    data_type: DataType,
    loader: Loader,
    warned_unavailable: AtomicBool,
}

impl Volume {
    /// Wrap `stack` with all channels enabled, identity tables and unit calibration.
    pub fn new(stack: ImageStack) -> Self {
        let mut volume = Self {
            dims: stack.dims(),
            kind: stack.kind(),
            data: Some(stack),
            calibration: Calibration::unit(),
            channels: [true; 3],
            average: false,
            saturated: false,
            luts: LutSet::identity(),
            data_type: DataType::Scalar,
            loader: Loader::Plain { channel: 0 },
            warned_unavailable: AtomicBool::new(false),
        };
        volume.refresh();
        volume
    }

    /// Wrap `stack` reading only the given R, G, B channels.
    pub fn with_channels(stack: ImageStack, channels: &[bool]) -> Result<Self> {
        let channels = channel_flags(channels)?;
        let mut volume = Self::new(stack);
        volume.channels = channels;
        volume.refresh();
        Ok(volume)
    }

    /// Replace the calibration, validating it first.
    pub fn with_calibration(mut self, calibration: Calibration) -> Result<Self> {
        self.set_calibration(calibration)?;
        Ok(self)
    }

    /// Replace the lookup tables.
    pub fn with_luts(mut self, luts: LutSet) -> Self {
        self.set_lut_set(luts);
        self
    }

    // ---------------------------------------------------------------------
    // Derived state
    // ---------------------------------------------------------------------

    /// Channel flags in effect: a gray source always reads its single channel.
    fn effective_channels(&self) -> [bool; 3] {
        match self.kind {
            SourceKind::Gray8 => [true; 3],
            SourceKind::Rgb => self.channels,
        }
    }

    /// Number of channels read: 1 for gray, the enabled count for RGB.
    pub fn channel_count(&self) -> usize {
        match self.kind {
            SourceKind::Gray8 => 1,
            SourceKind::Rgb => self.channels.iter().filter(|&&c| c).count(),
        }
    }

    /// Whether the alpha table and the tables of every read channel are identity.
    pub fn is_default_lut(&self) -> bool {
        self.luts.is_default_for(self.effective_channels())
    }

    fn refresh(&mut self) {
        self.data_type = DataType::decide(self.average, self.is_default_lut(), self.channel_count());
        self.loader = Loader::select(
            self.data_type,
            self.average,
            self.saturated,
            self.effective_channels(),
        );
        log::debug!(
            "volume {}x{}x{}: data type {:?}, loader {:?}",
            self.dims.width,
            self.dims.height,
            self.dims.depth,
            self.data_type,
            self.loader
        );
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    /// Average the enabled channels into one intensity.
    ///
    /// # Returns
    /// Whether the setting changed.
    pub fn set_average(&mut self, average: bool) -> bool {
        if self.average == average {
            return false;
        }
        self.average = average;
        self.refresh();
        true
    }

    /// Rescale composited colors so their largest channel is 255.
    ///
    /// # Returns
    /// Whether the setting changed.
    pub fn set_saturated_rendering(&mut self, saturated: bool) -> bool {
        if self.saturated == saturated {
            return false;
        }
        self.saturated = saturated;
        self.refresh();
        true
    }

    /// Select which of R, G, B are read. Only affects RGB sources.
    ///
    /// # Errors
    /// [`VolumeError::InvalidChannelCount`] unless exactly 3 flags are given; nothing changes.
    pub fn set_channels(&mut self, channels: &[bool]) -> Result<bool> {
        let channels = channel_flags(channels)?;
        if self.channels == channels {
            return Ok(false);
        }
        self.channels = channels;
        self.refresh();
        Ok(true)
    }

    /// Replace the four lookup tables.
    ///
    /// # Errors
    /// [`VolumeError::InvalidLutLength`] unless every table has 256 entries; nothing changes.
    pub fn set_luts(&mut self, red: &[u8], green: &[u8], blue: &[u8], alpha: &[u8]) -> Result<bool> {
        let luts = LutSet::from_slices(red, green, blue, alpha)?;
        Ok(self.set_lut_set(luts))
    }

    /// Replace the lookup tables from a prepared [`LutSet`].
    ///
    /// # Returns
    /// Whether any table changed.
    pub fn set_lut_set(&mut self, luts: LutSet) -> bool {
        if self.luts == luts {
            return false;
        }
        self.luts = luts;
        self.refresh();
        true
    }

    /// Set every alpha entry to [`OPAQUE_ALPHA`].
    ///
    /// # Returns
    /// Whether the alpha table changed.
    pub fn set_alpha_fully_opaque(&mut self) -> bool {
        let opaque = Lut::constant(OPAQUE_ALPHA);
        if self.luts.alpha == opaque {
            return false;
        }
        self.luts.alpha = opaque;
        self.refresh();
        true
    }

    /// Replace the calibration.
    ///
    /// # Errors
    /// [`VolumeError::InvalidCalibration`] for non-positive or non-finite spacing.
    pub fn set_calibration(&mut self, calibration: Calibration) -> Result<()> {
        calibration.validate()?;
        self.calibration = calibration;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Whether channels are averaged.
    pub fn is_average(&self) -> bool {
        self.average
    }

    /// Whether composited colors are saturated.
    pub fn is_saturated_rendering(&self) -> bool {
        self.saturated
    }

    /// The R, G, B channel flags as configured.
    pub fn channels(&self) -> [bool; 3] {
        self.channels
    }

    /// All four lookup tables.
    pub fn luts(&self) -> &LutSet {
        &self.luts
    }

    /// Red lookup table.
    pub fn red_lut(&self) -> &Lut {
        &self.luts.red
    }

    /// Green lookup table.
    pub fn green_lut(&self) -> &Lut {
        &self.luts.green
    }

    /// Blue lookup table.
    pub fn blue_lut(&self) -> &Lut {
        &self.luts.blue
    }

    /// Alpha lookup table.
    pub fn alpha_lut(&self) -> &Lut {
        &self.luts.alpha
    }

    /// Current data type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Current loader.
    pub fn loader(&self) -> Loader {
        self.loader
    }

    /// Volume dimensions, kept while the data is unavailable.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Pixel format of the backing stack.
    pub fn source_kind(&self) -> SourceKind {
        self.kind
    }

    /// Physical calibration.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Physical position of the minimum corner.
    pub fn min_coord(&self) -> Point3 {
        self.calibration.min_coord()
    }

    /// Physical position of the far corner, `origin + dims * spacing`.
    pub fn max_coord(&self) -> Point3 {
        self.calibration.max_coord(self.dims)
    }

    /// The backing stack, if available.
    pub fn stack(&self) -> Option<&ImageStack> {
        self.data.as_ref()
    }

    /// Whether pixel data is loaded.
    pub fn is_available(&self) -> bool {
        self.data.is_some()
    }

    // ---------------------------------------------------------------------
    // Sampling
    // ---------------------------------------------------------------------

    fn available(&self) -> Option<&ImageStack> {
        let stack = self.data.as_ref();
        if stack.is_none() && !self.warned_unavailable.swap(true, Ordering::Relaxed) {
            log::warn!("volume data is not available (swapped out or cleared); reads return 0");
        }
        stack
    }

    /// Intensity at `(x, y, z)`; 0 outside the volume or while unavailable.
    #[inline]
    pub fn intensity(&self, x: i32, y: i32, z: i32) -> i32 {
        if !self.dims.contains(x, y, z) {
            return 0;
        }
        match self.available() {
            Some(stack) => self.loader.load(stack, x, y, z),
            None => 0,
        }
    }

    /// Display color at `(x, y, z)`; 0 (transparent black) outside or while unavailable.
    #[inline]
    pub fn color(&self, x: i32, y: i32, z: i32) -> u32 {
        if !self.dims.contains(x, y, z) {
            return 0;
        }
        match self.available() {
            Some(stack) => self.loader.load_composited(stack, &self.luts, x, y, z),
            None => 0,
        }
    }

    /// Plain mean of the three raw channels, ignoring the channel flags.
    pub fn average(&self, x: i32, y: i32, z: i32) -> u8 {
        if !self.dims.contains(x, y, z) {
            return 0;
        }
        self.available().map_or(0, |stack| stack.average(x, y, z))
    }

    /// Store `v` at `(x, y, z)` if inside the volume (`0 <= z < depth` included).
    ///
    /// # Returns
    /// Whether a pixel was written.
    pub fn write(&mut self, x: i32, y: i32, z: i32, v: i32) -> bool {
        let loader = self.loader;
        match self.data.as_mut() {
            Some(stack) => loader.write(stack, x, y, z, v),
            None => {
                self.warn_write_dropped();
                false
            }
        }
    }

    /// Store `v` at the linear offset of `(x, y, z)` without per-axis checks.
    pub fn write_unchecked(&mut self, x: i32, y: i32, z: i32, v: i32) -> bool {
        let loader = self.loader;
        match self.data.as_mut() {
            Some(stack) => loader.write_unchecked(stack, x, y, z, v),
            None => {
                self.warn_write_dropped();
                false
            }
        }
    }

    fn warn_write_dropped(&self) {
        if !self.warned_unavailable.swap(true, Ordering::Relaxed) {
            log::warn!("volume data is not available (swapped out or cleared); writes are dropped");
        }
    }

    // ---------------------------------------------------------------------
    // Swap
    // ---------------------------------------------------------------------

    /// Drop the pixel data, keeping configuration and dimensions.
    pub fn clear(&mut self) {
        if self.data.take().is_some() {
            log::info!("volume data cleared");
        }
    }

    /// Write the pixel data to `path` and drop it from memory.
    ///
    /// # Errors
    /// [`VolumeError::Unavailable`] if there is nothing to swap; I/O errors leave the data in
    /// memory.
    pub fn swap_out<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let stack = self.data.as_ref().ok_or(VolumeError::Unavailable)?;
        let mut writer = BufWriter::new(File::create(path)?);
        write_stack(stack, &mut writer)?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;

        self.data = None;
        log::info!("volume swapped out to {}", path.display());
        Ok(())
    }

    /// Reload pixel data written by [`swap_out`](Volume::swap_out).
    ///
    /// The loader is re-derived and the unavailable warning re-armed.
    ///
    /// # Errors
    /// Format errors, or [`VolumeError::DimensionMismatch`] if the file holds a stack of a
    /// different shape or pixel format.
    pub fn restore<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let stack = read_stack(&mut reader)?;
        self.restore_stack(stack)?;
        log::info!("volume restored from {}", path.display());
        Ok(())
    }

    /// Put a stack of the same shape and format back in place.
    pub fn restore_stack(&mut self, stack: ImageStack) -> Result<()> {
        if stack.dims() != self.dims || stack.kind() != self.kind {
            return Err(VolumeError::DimensionMismatch {
                expected: self.dims.voxel_count() * self.kind.bytes_per_pixel(),
                got: stack.byte_len(),
            });
        }
        self.data = Some(stack);
        *self.warned_unavailable.get_mut() = false;
        self.refresh();
        Ok(())
    }
}

impl ScalarField for Volume {
    #[inline]
    fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    fn intensity(&self, x: i32, y: i32, z: i32) -> i32 {
        Volume::intensity(self, x, y, z)
    }
}

fn channel_flags(channels: &[bool]) -> Result<[bool; 3]> {
    channels
        .try_into()
        .map_err(|_| VolumeError::InvalidChannelCount {
            got: channels.len(),
        })
}
