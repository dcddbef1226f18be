//! Sparse scan schedules.
//!
//! A full extraction visits `(width + 2) * (height + 2) * (depth + 2)` cell origins. When the
//! caller knows where the data lives (one or more rectangles per slice), a [`ScanSchedule`]
//! restricts the scan to the cells that can touch that data.
//!
//! For scan slice `z` the rectangles of slices `z - 1`, `z` and `z + 1` are fused; each
//! rectangle is grown by one cell on every side and clipped to the padded range
//! `[-1, width] x [-1, height]`. Overlapping rectangles are merged per column, so every cell is
//! visited at most once and in the same x-then-y order as a full scan. The padding slices use
//! the nearest real slice: `z = -1` reads slice 0, `z = depth` reads slice `depth - 1`.

use volmesh_core::{GridDims, ScalarField};

use crate::error::{Result, VolumeError};

/// A half-open rectangle of voxels within one slice: `x..x + width`, `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SliceRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Extent along x.
    pub width: u32,
    /// Extent along y.
    pub height: u32,
}

impl SliceRect {
    /// New rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no voxel.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether voxel `(x, y)` lies inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = i64::from(x) - i64::from(self.x);
        let dy = i64::from(y) - i64::from(self.y);
        dx >= 0 && dy >= 0 && dx < i64::from(self.width) && dy < i64::from(self.height)
    }
}

/// Cell range covered by a grown rectangle, inclusive on both ends.
#[derive(Debug, Clone, Copy)]
struct CellRange {
    x0: i32,
    x1: i32,
    y0: i32,
    y1: i32,
}

/// The y spans to visit at one x, sorted and disjoint, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    x: i32,
    spans: Vec<(i32, i32)>,
}

/// Cell origins to visit, per scan slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSchedule {
    dims: GridDims,
    // Indexed by z + 1 for z in -1..=depth.
    slices: Vec<Vec<Column>>,
}

impl ScanSchedule {
    /// Build a schedule from the data rectangles of each slice.
    ///
    /// `regions[z]` lists the rectangles holding data in slice `z`; an empty list means the
    /// slice is empty.
    ///
    /// # Errors
    /// [`VolumeError::DimensionMismatch`] unless there is one entry per slice.
    pub fn from_slice_regions(dims: GridDims, regions: &[Vec<SliceRect>]) -> Result<Self> {
        if regions.len() != dims.depth as usize {
            return Err(VolumeError::DimensionMismatch {
                expected: dims.depth as usize,
                got: regions.len(),
            });
        }
        Ok(Self::build(dims, regions))
    }

    /// Schedule from the bounding rectangle of the voxels above `isovalue + 0.5` in each slice.
    ///
    /// When the threshold is not above zero the padding outside the volume is itself above it,
    /// so every slice is scheduled in full.
    pub fn from_occupancy<F>(field: &F, isovalue: f32) -> Self
    where
        F: ScalarField + ?Sized,
    {
        let dims = field.dims();
        let threshold = isovalue + 0.5;
        let whole = SliceRect::new(0, 0, dims.width, dims.height);

        let regions: Vec<Vec<SliceRect>> = (0..dims.depth as i32)
            .map(|z| {
                if threshold <= 0.0 {
                    return vec![whole];
                }
                occupied_rect(field, dims, z, threshold).into_iter().collect()
            })
            .collect();

        let schedule = Self::build(dims, &regions);
        log::debug!(
            "occupancy schedule: {} of {} cells",
            schedule.cell_count(),
            full_cell_count(dims)
        );
        schedule
    }

    fn build(dims: GridDims, regions: &[Vec<SliceRect>]) -> Self {
        let depth = dims.depth as i32;
        let slices = (-1..=depth)
            .map(|z| {
                if depth == 0 {
                    return Vec::new();
                }
                // The padding slices take the fused region of their nearest slice.
                let c = z.clamp(0, depth - 1);
                let lo = (c - 1).max(0);
                let hi = (c + 1).min(depth - 1);
                let ranges: Vec<CellRange> = (lo..=hi)
                    .flat_map(|s| regions[s as usize].iter())
                    .filter_map(|rect| grow_and_clip(rect, dims))
                    .collect();
                columns(&ranges, dims)
            })
            .collect();
        Self { dims, slices }
    }

    fn slice(&self, z: i32) -> Option<&[Column]> {
        usize::try_from(i64::from(z) + 1)
            .ok()
            .and_then(|i| self.slices.get(i))
            .map(Vec::as_slice)
    }

    /// Dimensions of the volume the schedule was built for.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Cell origins `(x, y)` to visit at scan slice `z`, x ascending then y ascending.
    ///
    /// Empty for `z` outside `[-1, depth]`.
    pub fn cells(&self, z: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.slice(z)
            .into_iter()
            .flatten()
            .flat_map(|column| {
                let x = column.x;
                column.spans.iter().flat_map(move |&(y0, y1)| (y0..=y1).map(move |y| (x, y)))
            })
    }

    /// Number of cells visited at scan slice `z`.
    pub fn cells_in_slice(&self, z: i32) -> usize {
        let Some(columns) = self.slice(z) else {
            return 0;
        };
        columns
            .iter()
            .flat_map(|c| c.spans.iter())
            .map(|&(y0, y1)| (y1 - y0 + 1) as usize)
            .sum()
    }

    /// Total number of cells visited.
    pub fn cell_count(&self) -> usize {
        (-1..=self.dims.depth as i32).map(|z| self.cells_in_slice(z)).sum()
    }
}

/// Cells a full scan visits.
pub(crate) fn full_cell_count(dims: GridDims) -> usize {
    let (w, h, d) = dims.padded_cells();
    w as usize * h as usize * d as usize
}

fn grow_and_clip(rect: &SliceRect, dims: GridDims) -> Option<CellRange> {
    if rect.is_empty() {
        return None;
    }
    let max_x = i64::from(dims.width);
    let max_y = i64::from(dims.height);
    let x0 = (i64::from(rect.x) - 1).max(-1);
    let y0 = (i64::from(rect.y) - 1).max(-1);
    let x1 = (i64::from(rect.x) + i64::from(rect.width)).min(max_x);
    let y1 = (i64::from(rect.y) + i64::from(rect.height)).min(max_y);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some(CellRange {
        x0: x0 as i32,
        x1: x1 as i32,
        y0: y0 as i32,
        y1: y1 as i32,
    })
}

fn columns(ranges: &[CellRange], dims: GridDims) -> Vec<Column> {
    if ranges.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for x in -1..=dims.width as i32 {
        let mut spans: Vec<(i32, i32)> = ranges
            .iter()
            .filter(|r| r.x0 <= x && x <= r.x1)
            .map(|r| (r.y0, r.y1))
            .collect();
        if spans.is_empty() {
            continue;
        }
        spans.sort_unstable();

        let mut merged: Vec<(i32, i32)> = Vec::with_capacity(spans.len());
        for (y0, y1) in spans {
            match merged.last_mut() {
                Some(last) if y0 <= last.1 + 1 => last.1 = last.1.max(y1),
                _ => merged.push((y0, y1)),
            }
        }
        out.push(Column { x, spans: merged });
    }
    out
}

/// Bounding rectangle of the voxels above `threshold` in slice `z`.
fn occupied_rect<F>(field: &F, dims: GridDims, z: i32, threshold: f32) -> Option<SliceRect>
where
    F: ScalarField + ?Sized,
{
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            if field.intensity(x, y, z) as f32 - threshold <= 0.0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds.map(|(x0, y0, x1, y1)| {
        SliceRect::new(x0, y0, (x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use volmesh_core::FnField;

    #[test]
    fn test_rect_contains() {
        let rect = SliceRect::new(2, 3, 2, 1);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 3));
        assert!(!rect.contains(2, 4));
        assert!(SliceRect::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_region_count_must_match_depth() {
        let dims = GridDims::new(4, 4, 3);
        let result = ScanSchedule::from_slice_regions(dims, &[Vec::new(), Vec::new()]);
        assert!(matches!(
            result,
            Err(VolumeError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_single_voxel_neighbourhood() {
        let dims = GridDims::new(6, 6, 5);
        let mut regions = vec![Vec::new(); 5];
        regions[2] = vec![SliceRect::new(2, 3, 1, 1)];
        let schedule = ScanSchedule::from_slice_regions(dims, &regions).unwrap();

        // Slices 1, 2, 3 see the voxel; the grown rect is x in 1..=3, y in 2..=4.
        for z in [1, 2, 3] {
            let cells: Vec<_> = schedule.cells(z).collect();
            assert_eq!(cells.len(), 9);
            assert_eq!(cells.first(), Some(&(1, 2)));
            assert_eq!(cells.last(), Some(&(3, 4)));
        }
        for z in [-1, 0, 4, 5] {
            assert_eq!(schedule.cells_in_slice(z), 0);
        }
        assert_eq!(schedule.cell_count(), 27);
    }

    #[test]
    fn test_overlapping_rects_visit_once_in_order() {
        let dims = GridDims::new(8, 8, 1);
        let regions = vec![vec![SliceRect::new(0, 0, 3, 3), SliceRect::new(1, 2, 3, 3)]];
        let schedule = ScanSchedule::from_slice_regions(dims, &regions).unwrap();

        let cells: Vec<_> = schedule.cells(0).collect();
        let mut sorted = cells.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(cells, sorted);
        assert_eq!(cells.len(), schedule.cells_in_slice(0));
    }

    #[test]
    fn test_clipped_to_padding() {
        let dims = GridDims::new(3, 3, 1);
        let regions = vec![vec![SliceRect::new(-5, -5, 100, 100)]];
        let schedule = ScanSchedule::from_slice_regions(dims, &regions).unwrap();

        // Every padded cell of slices -1, 0 and 1.
        assert_eq!(schedule.cells_in_slice(-1), 25);
        assert_eq!(schedule.cells_in_slice(0), 25);
        assert_eq!(schedule.cells_in_slice(1), 25);
        assert_eq!(schedule.cell_count(), full_cell_count(dims));
    }

    #[test]
    fn test_occupancy_bounds() {
        let dims = GridDims::new(10, 10, 4);
        let field = FnField::bounded(dims, |x, y, z| {
            if z == 1 && (3..=5).contains(&x) && y == 7 {
                200
            } else {
                0
            }
        });
        let schedule = ScanSchedule::from_occupancy(&field, 100.0);
        // Grown rect: x in 2..=6, y in 6..=8, on slices 0, 1, 2.
        assert_eq!(schedule.cells_in_slice(0), 15);
        assert_eq!(schedule.cells_in_slice(2), 15);
        assert_eq!(schedule.cells_in_slice(3), 0);
        assert_eq!(schedule.cells(1).next(), Some((2, 6)));
    }

    #[test]
    fn test_padding_slices_use_fused_neighbour() {
        let dims = GridDims::new(6, 6, 4);
        let mut regions = vec![Vec::new(); 4];
        regions[1] = vec![SliceRect::new(2, 2, 1, 1)];
        regions[2] = vec![SliceRect::new(0, 0, 2, 1)];
        let schedule = ScanSchedule::from_slice_regions(dims, &regions).unwrap();

        // z = -1 fuses slices 0 and 1, z = depth fuses slices 2 and 3.
        assert_eq!(schedule.cells_in_slice(-1), schedule.cells_in_slice(0));
        assert_eq!(schedule.cells_in_slice(-1), 9);
        assert_eq!(schedule.cells_in_slice(4), schedule.cells_in_slice(3));
        assert_eq!(schedule.cells_in_slice(4), 12);
    }

    #[test]
    fn test_full_cell_count() {
        assert_eq!(full_cell_count(GridDims::new(4, 3, 2)), 6 * 5 * 4);
    }

    #[test]
    fn test_occupancy_negative_threshold_is_full() {
        let dims = GridDims::new(3, 2, 2);
        let field = FnField::bounded(dims, |_, _, _| 0);
        let schedule = ScanSchedule::from_occupancy(&field, -1.0);
        assert_eq!(schedule.cell_count(), full_cell_count(dims));
    }
}
