//! The marching cubes cell.
//!
//! A [`Cube`] is scratch state: one instance is re-initialised for every cell a scanner
//! visits, so it owns fixed-size arrays only and never allocates.

use crate::traits::ScalarField;
use crate::types::{GridCoord, Point3, ABSENT_EDGE};

use super::classify::case_number;
use super::tables::{CORNER_OFFSETS, EDGE_CORNERS};

/// Interpolate the threshold crossing along one edge.
///
/// The endpoints are ordered so that `v1` always carries the lower intensity before
/// interpolating. Computing the same edge from either neighbouring cell therefore produces
/// bit-identical points, which keeps the triangle soup crack-free.
///
/// # Returns
/// `Some(v1 + t * (v2 - v1))` with `t = (threshold - i1) / (i2 - i1)` when `t` lies in
/// `[0, 1]`; `None` when the intensities are equal or the crossing lies off the edge.
#[inline]
pub fn interpolate_edge(v1: Point3, i1: i32, v2: Point3, i2: i32, threshold: f32) -> Option<Point3> {
    let (v1, i1, v2, i2) = if i2 < i1 {
        (v2, i2, v1, i1)
    } else {
        (v1, i1, v2, i2)
    };

    if i1 == i2 {
        return None;
    }

    let t = (threshold - i1 as f32) / (i64::from(i2) - i64::from(i1)) as f32;
    if (0.0..=1.0).contains(&t) {
        Some(v1.lerp(v2, t))
    } else {
        None
    }
}

/// A unit grid cell with its corner samples and edge crossings.
#[derive(Debug, Clone)]
pub struct Cube {
    origin: GridCoord,
    corners: [Point3; 8],
    intensities: [i32; 8],
    edges: [Option<Point3>; 12],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Create a cube anchored at the lattice origin.
    pub fn new() -> Self {
        let mut cube = Self {
            origin: GridCoord::default(),
            corners: [Point3::default(); 8],
            intensities: [0; 8],
            edges: [None; 12],
        };
        cube.init(GridCoord::default());
        cube
    }

    /// Re-anchor the cube at `origin`.
    ///
    /// Corners are placed in [`CORNER_OFFSETS`] order. Samples and edges from the previous
    /// cell are cleared.
    pub fn init(&mut self, origin: GridCoord) {
        self.origin = origin;
        for (corner, &offset) in self.corners.iter_mut().zip(CORNER_OFFSETS.iter()) {
            *corner = Point3::from(origin.offset(offset));
        }
        self.intensities = [0; 8];
        self.edges = [None; 12];
    }

    /// The current cell origin.
    #[inline]
    pub fn origin(&self) -> GridCoord {
        self.origin
    }

    /// Corner positions in grid space.
    #[inline]
    pub fn corners(&self) -> &[Point3; 8] {
        &self.corners
    }

    /// Lattice coordinate of corner `index` (0-7).
    #[inline]
    pub fn corner_coord(&self, index: usize) -> GridCoord {
        self.origin.offset(CORNER_OFFSETS[index & 7])
    }

    /// Read the 8 corner intensities from `field` and cache them.
    pub fn sample<F: ScalarField + ?Sized>(&mut self, field: &F) -> &[i32; 8] {
        for i in 0..8 {
            self.intensities[i] = field.intensity_at(self.corner_coord(i));
        }
        &self.intensities
    }

    /// Corner intensities cached by the last [`sample`](Cube::sample) or
    /// [`compute_edges`](Cube::compute_edges).
    #[inline]
    pub fn intensities(&self) -> &[i32; 8] {
        &self.intensities
    }

    /// Sample the field and compute all 12 edge crossings against `threshold`.
    pub fn compute_edges<F: ScalarField + ?Sized>(&mut self, field: &F, threshold: f32) {
        self.sample(field);
        self.compute_edges_from_samples(threshold);
    }

    /// Compute edge crossings from the cached corner intensities.
    pub fn compute_edges_from_samples(&mut self, threshold: f32) {
        for (edge, &(a, b)) in self.edges.iter_mut().zip(EDGE_CORNERS.iter()) {
            *edge = interpolate_edge(
                self.corners[a],
                self.intensities[a],
                self.corners[b],
                self.intensities[b],
                threshold,
            );
        }
    }

    /// Edge crossings, `None` where the surface does not cross.
    #[inline]
    pub fn edges(&self) -> &[Option<Point3>; 12] {
        &self.edges
    }

    /// Crossing on edge `index`, if any.
    #[inline]
    pub fn edge(&self, index: usize) -> Option<Point3> {
        self.edges[index]
    }

    /// Crossing on edge `index`, or [`ABSENT_EDGE`] when there is none.
    #[inline]
    pub fn edge_or_sentinel(&self, index: usize) -> Point3 {
        self.edges[index].unwrap_or(ABSENT_EDGE)
    }

    /// Classify the cell by sampling `field`.
    ///
    /// Pure with respect to the cube: the cached samples are left untouched.
    pub fn case_number<F: ScalarField + ?Sized>(&self, field: &F, threshold: f32) -> u8 {
        let mut intensities = [0; 8];
        for (i, value) in intensities.iter_mut().enumerate() {
            *value = field.intensity_at(self.corner_coord(i));
        }
        case_number(&intensities, threshold)
    }

    /// Classify the cell from the cached samples.
    #[inline]
    pub fn cached_case_number(&self, threshold: f32) -> u8 {
        case_number(&self.intensities, threshold)
    }
}
