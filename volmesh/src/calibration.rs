//! Physical calibration of a volume.

use volmesh_core::{GridDims, Point3};

use crate::error::{Result, VolumeError};

/// Voxel spacing and origin mapping grid coordinates to physical space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Calibration {
    /// Spacing along x.
    pub pixel_width: f32,
    /// Spacing along y.
    pub pixel_height: f32,
    /// Spacing between slices.
    pub pixel_depth: f32,
    /// Physical position of voxel (0, 0, 0).
    pub origin: Point3,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::unit()
    }
}

impl Calibration {
    /// Unit spacing at the origin: physical and grid coordinates coincide.
    pub const fn unit() -> Self {
        Self {
            pixel_width: 1.0,
            pixel_height: 1.0,
            pixel_depth: 1.0,
            origin: Point3::new(0.0, 0.0, 0.0),
        }
    }

    /// Validated calibration.
    pub fn new(pixel_width: f32, pixel_height: f32, pixel_depth: f32, origin: Point3) -> Result<Self> {
        let calibration = Self {
            pixel_width,
            pixel_height,
            pixel_depth,
            origin,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    /// Check that every spacing is finite and positive and the origin finite.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("pixel_width", self.pixel_width),
            ("pixel_height", self.pixel_height),
            ("pixel_depth", self.pixel_depth),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(VolumeError::InvalidCalibration {
                    message: format!("{} must be finite and positive, got {}", name, v),
                });
            }
        }
        if !self.origin.is_finite() {
            return Err(VolumeError::InvalidCalibration {
                message: format!("origin must be finite, got {:?}", self.origin),
            });
        }
        Ok(())
    }

    /// Spacing as a vector.
    #[inline]
    pub fn spacing(&self) -> Point3 {
        Point3::new(self.pixel_width, self.pixel_height, self.pixel_depth)
    }

    /// Map a grid-space point to physical space: `p * spacing + origin` per axis.
    #[inline]
    pub fn to_physical(&self, p: Point3) -> Point3 {
        p.mul_elem(self.spacing()) + self.origin
    }

    /// Physical position of the volume's minimum corner.
    #[inline]
    pub fn min_coord(&self) -> Point3 {
        self.origin
    }

    /// Physical position of the far corner, `origin + dims * spacing`.
    pub fn max_coord(&self, dims: GridDims) -> Point3 {
        let extent = Point3::new(dims.width as f32, dims.height as f32, dims.depth as f32);
        self.to_physical(extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let cal = Calibration::new(0.5, 2.0, 3.0, Point3::new(10.0, 0.0, -1.0)).unwrap();
        assert_eq!(
            cal.to_physical(Point3::new(2.0, 1.0, 1.0)),
            Point3::new(11.0, 2.0, 2.0)
        );
        assert_eq!(
            cal.max_coord(GridDims::new(4, 4, 2)),
            Point3::new(12.0, 8.0, 5.0)
        );
        assert_eq!(cal.min_coord(), Point3::new(10.0, 0.0, -1.0));
    }

    #[test]
    fn test_unit_is_identity() {
        let p = Point3::new(1.5, -1.0, 7.25);
        assert_eq!(Calibration::default().to_physical(p), p);
    }

    #[test]
    fn test_rejects_bad_spacing() {
        assert!(Calibration::new(0.0, 1.0, 1.0, Point3::default()).is_err());
        assert!(Calibration::new(1.0, -1.0, 1.0, Point3::default()).is_err());
        assert!(Calibration::new(1.0, 1.0, f32::NAN, Point3::default()).is_err());
        assert!(Calibration::new(1.0, 1.0, 1.0, Point3::splat(f32::INFINITY)).is_err());
    }
}
