//! Per-cell marching cubes pipeline.
//!
//! Ties [`Cube`] and the classifier together: sample, classify, interpolate, emit. The
//! scanners in the runtime crate call these once per cell origin.

use crate::traits::ScalarField;
use crate::types::{GridCoord, Point3};

use super::classify::{emit_triangles, AmbiguityPolicy};
use super::cube::Cube;
use super::tables::MAX_TRIANGLES_PER_CELL;

/// Process the cell at `origin`, passing each triangle to `sink` in grid space.
///
/// `cube` is scratch state and is re-initialised. Cells classified 0 or 255 return before any
/// edge is interpolated.
///
/// # Returns
/// The number of triangles emitted.
pub fn process_cell<F, S>(
    cube: &mut Cube,
    field: &F,
    origin: GridCoord,
    threshold: f32,
    policy: AmbiguityPolicy,
    sink: S,
) -> usize
where
    F: ScalarField + ?Sized,
    S: FnMut([Point3; 3]),
{
    cube.init(origin);
    cube.sample(field);

    let case = cube.cached_case_number(threshold);
    if case == 0 || case == 255 {
        return 0;
    }

    cube.compute_edges_from_samples(threshold);
    emit_triangles(case, cube.edges(), policy, sink)
}

/// Process a cell without a sink, returning a fixed-size triangle buffer.
///
/// # Returns
/// `(triangles, count)` where only the first `count` entries are valid.
pub fn process_cell_no_alloc<F>(
    field: &F,
    origin: GridCoord,
    threshold: f32,
    policy: AmbiguityPolicy,
) -> ([[Point3; 3]; MAX_TRIANGLES_PER_CELL], usize)
where
    F: ScalarField + ?Sized,
{
    let mut cube = Cube::new();
    let mut triangles = [[Point3::default(); 3]; MAX_TRIANGLES_PER_CELL];
    let mut count = 0;

    process_cell(&mut cube, field, origin, threshold, policy, |tri| {
        triangles[count] = tri;
        count += 1;
    });

    (triangles, count)
}

/// Process a cell and append its triangle vertices to `out`, three per triangle.
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn process_cell_into<F>(
    cube: &mut Cube,
    field: &F,
    origin: GridCoord,
    threshold: f32,
    policy: AmbiguityPolicy,
    out: &mut crate::alloc_prelude::Vec<Point3>,
) -> usize
where
    F: ScalarField + ?Sized,
{
    process_cell(cube, field, origin, threshold, policy, |[a, b, c]| {
        out.push(a);
        out.push(b);
        out.push(c);
    })
}

/// Scan every cell origin `(x, y)` in `[-1, width] x [-1, height]` at slice `z`, x outer and
/// y inner, appending vertices to `out`.
///
/// # Returns
/// The number of triangles appended.
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn scan_slice<F>(
    cube: &mut Cube,
    field: &F,
    z: i32,
    threshold: f32,
    policy: AmbiguityPolicy,
    out: &mut crate::alloc_prelude::Vec<Point3>,
) -> usize
where
    F: ScalarField + ?Sized,
{
    let dims = field.dims();
    let mut triangles = 0;
    for x in -1..=dims.width as i32 {
        for y in -1..=dims.height as i32 {
            triangles += process_cell_into(
                cube,
                field,
                GridCoord::new(x, y, z),
                threshold,
                policy,
                out,
            );
        }
    }
    triangles
}
