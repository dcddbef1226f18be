//! Volume and extraction configuration.
//!
//! Every struct has a [`Default`], a `validate()` and, with the `serde` feature, can be read
//! from TOML:
//!
//! ```toml
//! [volume]
//! channels = [true, true, false]
//! average = true
//!
//! [extraction]
//! isovalue = 100.0
//! threads = 4
//! scan = "occupied"
//!
//! [extraction.calibration]
//! pixel_width = 0.5
//! pixel_height = 0.5
//! pixel_depth = 2.0
//! origin = { x = 0.0, y = 0.0, z = 0.0 }
//! ```

use volmesh_core::AmbiguityPolicy;

use crate::calibration::Calibration;
use crate::error::{ExtractError, Result, VolumeError};
use crate::extractor::{ExtractionOptions, IsosurfaceExtractor};
use crate::mesh::TriangleSoup;
use crate::schedule::ScanSchedule;
use crate::volume::Volume;

/// Sampler settings applied to a [`Volume`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolumeConfig {
    /// R, G, B channel flags.
    pub channels: [bool; 3],
    /// Average the enabled channels.
    pub average: bool,
    /// Saturate composited colors.
    pub saturated_rendering: bool,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            channels: [true; 3],
            average: false,
            saturated_rendering: false,
        }
    }
}

impl VolumeConfig {
    /// Validate the configuration. Any flag combination is accepted.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Apply to `volume`.
    ///
    /// # Returns
    /// Whether any setting changed.
    pub fn apply(&self, volume: &mut Volume) -> Result<bool> {
        let channels = volume.set_channels(&self.channels)?;
        let average = volume.set_average(self.average);
        let saturated = volume.set_saturated_rendering(self.saturated_rendering);
        Ok(channels || average || saturated)
    }
}

/// Which cells an extraction visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScanMode {
    /// Every cell of the padded grid.
    #[default]
    Full,
    /// Only cells near voxels above the threshold, see [`ScanSchedule::from_occupancy`].
    Occupied,
}

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractionConfig {
    /// Surface level; the threshold is `isovalue + 0.5`.
    pub isovalue: f32,
    /// Worker threads, 0 for the global pool.
    pub threads: usize,
    /// Run slices in parallel.
    pub parallel: bool,
    /// Triangle table row used for ambiguous cases.
    pub ambiguity: AmbiguityPolicy,
    /// Full or occupancy-restricted scan.
    pub scan: ScanMode,
    /// Calibration overriding the volume's own.
    pub calibration: Option<Calibration>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            isovalue: 127.0,
            threads: 0,
            parallel: true,
            ambiguity: AmbiguityPolicy::Direct,
            scan: ScanMode::Full,
            calibration: None,
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.isovalue.is_finite() {
            return Err(VolumeError::Config(format!(
                "isovalue must be finite, got {}",
                self.isovalue
            )));
        }
        if let Some(calibration) = &self.calibration {
            calibration.validate()?;
        }
        Ok(())
    }

    /// Extractor options from these settings.
    pub fn options(&self) -> ExtractionOptions {
        ExtractionOptions {
            threads: self.threads,
            ambiguity: self.ambiguity,
            parallel: self.parallel,
        }
    }

    /// A fresh extractor with these options.
    pub fn extractor(&self) -> IsosurfaceExtractor {
        IsosurfaceExtractor::with_options(self.options())
    }

    /// Extract from `volume` with a fresh extractor.
    pub fn run(&self, volume: &Volume) -> std::result::Result<TriangleSoup, ExtractError> {
        self.extract_with(&mut self.extractor(), volume)
    }

    /// Extract from `volume` with `extractor`, keeping its progress and cancel hooks.
    ///
    /// The extractor's own options are used as they are; only the isovalue, scan mode and
    /// calibration come from this config.
    pub fn extract_with(
        &self,
        extractor: &mut IsosurfaceExtractor,
        volume: &Volume,
    ) -> std::result::Result<TriangleSoup, ExtractError> {
        self.validate()?;
        if !volume.is_available() {
            return Err(VolumeError::Unavailable.into());
        }
        let calibration = self.calibration.unwrap_or(*volume.calibration());
        match self.scan {
            ScanMode::Full => extractor.extract(volume, &calibration, self.isovalue),
            ScanMode::Occupied => {
                let schedule = ScanSchedule::from_occupancy(volume, self.isovalue);
                extractor.extract_scheduled(volume, &calibration, self.isovalue, &schedule)
            }
        }
    }
}

/// Combined `[volume]` and `[extraction]` settings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolmeshConfig {
    /// Sampler settings.
    pub volume: VolumeConfig,
    /// Extraction settings.
    pub extraction: ExtractionConfig,
}

impl VolmeshConfig {
    /// Validate both sections.
    pub fn validate(&self) -> Result<()> {
        self.volume.validate()?;
        self.extraction.validate()
    }
}

#[cfg(feature = "serde")]
mod toml_io {
    use std::path::Path;

    use super::{ExtractionConfig, VolmeshConfig, VolumeConfig};
    use crate::error::{Result, VolumeError};

    fn parse<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
        toml::from_str(text).map_err(|e| VolumeError::Config(e.to_string()))
    }

    fn read(path: &Path) -> Result<String> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(text)
    }

    macro_rules! impl_toml {
        ($ty:ty) => {
            impl $ty {
                /// Parse and validate from a TOML document.
                pub fn from_toml_str(text: &str) -> Result<Self> {
                    let config: Self = parse(text)?;
                    config.validate()?;
                    Ok(config)
                }

                /// Read, parse and validate a TOML file.
                pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
                    Self::from_toml_str(&read(path.as_ref())?)
                }

                /// Render as a TOML document.
                pub fn to_toml_string(&self) -> Result<String> {
                    toml::to_string(self).map_err(|e| VolumeError::Config(e.to_string()))
                }
            }
        };
    }

    impl_toml!(VolumeConfig);
    impl_toml!(ExtractionConfig);
    impl_toml!(VolmeshConfig);
}
