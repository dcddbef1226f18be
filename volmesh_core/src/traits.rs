//! Sampling abstraction shared by the core algorithms and the storage runtime.
//!
//! The core never touches pixel storage directly. Anything that can answer "what is the
//! intensity at this lattice point" can be meshed: the `volmesh` crate implements
//! [`ScalarField`] for its image-stack `Volume`, tests implement it for closures.

use crate::types::{GridCoord, GridDims};

/// A discrete 3-D scalar field over the integer lattice.
///
/// # Contract
///
/// [`intensity`](ScalarField::intensity) is total: it must return a value for every
/// coordinate, including the padding ring at -1 and `dim` that the extractor visits. Volume
/// backed implementations return 0 outside `dims()`, which is what closes surfaces that touch
/// the volume boundary.
///
/// Implementations used with parallel extraction must be safe for concurrent reads (`Sync`).
pub trait ScalarField {
    /// The extent of the field in voxels.
    fn dims(&self) -> GridDims;

    /// Intensity at a lattice point.
    fn intensity(&self, x: i32, y: i32, z: i32) -> i32;

    /// Intensity at a [`GridCoord`].
    #[inline]
    fn intensity_at(&self, p: GridCoord) -> i32 {
        self.intensity(p.x, p.y, p.z)
    }
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
    #[inline]
    fn dims(&self) -> GridDims {
        (**self).dims()
    }

    #[inline]
    fn intensity(&self, x: i32, y: i32, z: i32) -> i32 {
        (**self).intensity(x, y, z)
    }
}

/// Adapter turning a closure into a [`ScalarField`].
///
/// The closure is called for every coordinate, in or out of bounds; wrap it with
/// [`FnField::bounded`] to get the zero-outside contract of an image volume.
///
/// ```ignore
/// let field = FnField::bounded(GridDims::new(8, 8, 8), |x, y, z| (x + y + z) * 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnField<F> {
    dims: GridDims,
    bounded: bool,
    f: F,
}

impl<F> FnField<F>
where
    F: Fn(i32, i32, i32) -> i32,
{
    /// Field that evaluates `f` everywhere, ignoring `dims` for sampling.
    pub fn unbounded(dims: GridDims, f: F) -> Self {
        Self {
            dims,
            bounded: false,
            f,
        }
    }

    /// Field that evaluates `f` inside `dims` and returns 0 outside.
    pub fn bounded(dims: GridDims, f: F) -> Self {
        Self {
            dims,
            bounded: true,
            f,
        }
    }
}

impl<F> ScalarField for FnField<F>
where
    F: Fn(i32, i32, i32) -> i32,
{
    #[inline]
    fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    fn intensity(&self, x: i32, y: i32, z: i32) -> i32 {
        if self.bounded && !self.dims.contains(x, y, z) {
            return 0;
        }
        (self.f)(x, y, z)
    }
}

/// Corner offsets of a unit cell in marching-cubes order.
///
/// ```text
/// Corner:  0      1      2      3      4      5      6      7
/// Offset: (0,0,0)(1,0,0)(1,1,0)(0,1,0)(0,0,1)(1,0,1)(1,1,1)(0,1,1)
/// ```
///
/// Corners 0-3 walk the bottom (z) face, 4-7 walk the top face in the same direction.
#[inline]
pub const fn corner_from_index(idx: usize) -> (i32, i32, i32) {
    crate::marching_cubes::CORNER_OFFSETS[idx & 7]
}

/// Inverse of [`corner_from_index`]. Components are masked to their low bit.
#[inline]
pub const fn index_from_corner(corner: (i32, i32, i32)) -> usize {
    match (corner.0 & 1, corner.1 & 1, corner.2 & 1) {
        (0, 0, 0) => 0,
        (1, 0, 0) => 1,
        (1, 1, 0) => 2,
        (0, 1, 0) => 3,
        (0, 0, 1) => 4,
        (1, 0, 1) => 5,
        (1, 1, 1) => 6,
        _ => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_index_roundtrip() {
        for i in 0..8 {
            assert_eq!(index_from_corner(corner_from_index(i)), i);
        }
        assert_eq!(corner_from_index(6), (1, 1, 1));
        assert_eq!(corner_from_index(3), (0, 1, 0));
    }

    #[test]
    fn test_bounded_fn_field_zero_outside() {
        let field = FnField::bounded(GridDims::new(2, 2, 2), |_, _, _| 7);
        assert_eq!(field.intensity(0, 0, 0), 7);
        assert_eq!(field.intensity(1, 1, 1), 7);
        assert_eq!(field.intensity(-1, 0, 0), 0);
        assert_eq!(field.intensity(2, 0, 0), 0);
        assert_eq!(field.intensity_at(GridCoord::new(0, 0, 2)), 0);
    }

    #[test]
    fn test_unbounded_fn_field_ignores_dims() {
        let field = FnField::unbounded(GridDims::new(1, 1, 1), |x, _, _| x);
        assert_eq!(field.intensity(-5, 0, 0), -5);
        assert_eq!(field.intensity(9, 9, 9), 9);
    }

    #[test]
    fn test_reference_forwarding() {
        let field = FnField::bounded(GridDims::new(3, 3, 3), |x, y, z| x + y + z);
        let by_ref: &dyn ScalarField = &field;
        assert_eq!(by_ref.intensity(1, 1, 1), 3);
        assert_eq!((&field).dims(), GridDims::new(3, 3, 3));
    }
}
