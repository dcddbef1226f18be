//! Core types for grid-space geometry.
//!
//! Provides the vertex type emitted by marching cubes, signed lattice coordinates for scan
//! origins (padding cells live at -1), and volume dimensions with the bounds contract used by
//! every sampler.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Sentinel point stored in the flat edge representation for "no crossing on this edge".
///
/// Only meaningful together with the edge's presence flag; it is not a coordinate.
pub const ABSENT_EDGE: Point3 = Point3::splat(-1.0);

/// A 3D point with named fields.
///
/// Used for cube corners and edge intersections in grid space, and for output vertices
/// after the physical transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new Point3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Point3 with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Linear interpolation `self + t * (other - self)`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Component-wise product, used for per-axis voxel spacing.
    #[inline]
    pub fn mul_elem(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// Dot product with another point (treating both as vectors).
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another point (treating both as vectors).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: libm::fminf(self.x, other.x),
            y: libm::fminf(self.y, other.y),
            z: libm::fminf(self.z, other.z),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: libm::fmaxf(self.x, other.x),
            y: libm::fmaxf(self.y, other.y),
            z: libm::fmaxf(self.z, other.z),
        }
    }

    /// Whether all three components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        p.as_array()
    }
}

impl From<GridCoord> for Point3 {
    #[inline]
    fn from(c: GridCoord) -> Self {
        Self::new(c.x as f32, c.y as f32, c.z as f32)
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Signed lattice coordinate.
///
/// Addresses either a voxel or a cell origin. Cell origins range over `[-1, dim]` on each axis
/// so surfaces touching the volume boundary are closed by the zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GridCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl GridCoord {
    /// Create a new GridCoord.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Offset by a corner offset (each component 0 or 1).
    #[inline]
    pub const fn offset(self, d: (i32, i32, i32)) -> Self {
        Self::new(self.x + d.0, self.y + d.1, self.z + d.2)
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for GridCoord {
    #[inline]
    fn from(arr: [i32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<(i32, i32, i32)> for GridCoord {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Volume dimensions in voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    /// Number of voxels along x (slice width).
    pub width: u32,
    /// Number of voxels along y (slice height).
    pub height: u32,
    /// Number of slices.
    pub depth: u32,
}

impl GridDims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Whether `(x, y, z)` addresses a voxel inside the volume.
    ///
    /// This is the bounds contract shared by every sampler: anything outside reads as zero.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && (z as u32) < self.depth
    }

    /// Number of voxels in one slice.
    #[inline]
    pub const fn slice_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of voxels.
    #[inline]
    pub const fn voxel_count(&self) -> usize {
        self.slice_len() * self.depth as usize
    }

    /// Total number of voxels, `None` if it does not fit in `usize`.
    #[inline]
    pub const fn checked_voxel_count(&self) -> Option<usize> {
        match (self.width as usize).checked_mul(self.height as usize) {
            Some(slice) => slice.checked_mul(self.depth as usize),
            None => None,
        }
    }

    /// Whether any axis is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.depth == 0
    }

    /// Number of cell origins visited by a full padded scan on each axis (`dim + 2`).
    #[inline]
    pub const fn padded_cells(&self) -> (u32, u32, u32) {
        (self.width + 2, self.height + 2, self.depth + 2)
    }
}
