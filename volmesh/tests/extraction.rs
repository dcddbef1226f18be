//! End-to-end extraction tests for volmesh.
//!
//! These tests run the full pipeline (image stack, volume sampler, extractor) and check the
//! geometry of the resulting triangle soup: vertex placement, boundary closure, watertightness
//! and the physical transform.

use std::collections::HashMap;

use volmesh::prelude::*;
use volmesh::{ExtractionStats, ExtractorState, FnField};

// =============================================================================
// Test Volume Factories
// =============================================================================

/// Gray volume with 255 inside the voxel box `lo..=hi` and 0 elsewhere.
fn box_volume(dims: GridDims, lo: [u32; 3], hi: [u32; 3]) -> Volume {
    let stack = ImageStack::gray_from_fn(dims, |x, y, z| {
        let inside = (lo[0]..=hi[0]).contains(&x)
            && (lo[1]..=hi[1]).contains(&y)
            && (lo[2]..=hi[2]).contains(&z);
        if inside {
            255
        } else {
            0
        }
    })
    .unwrap();
    Volume::new(stack)
}

/// Gray volume holding a binary ball.
fn ball_volume(n: u32, radius: f32) -> Volume {
    let c = n as f32 / 2.0;
    let stack = ImageStack::gray_from_fn(GridDims::new(n, n, n), |x, y, z| {
        let d = (Point3::new(x as f32, y as f32, z as f32) - Point3::splat(c)).length();
        if d <= radius {
            255
        } else {
            0
        }
    })
    .unwrap();
    Volume::new(stack)
}

fn extract(volume: &Volume, isovalue: f32) -> (TriangleSoup, ExtractionStats) {
    let mut extractor = IsosurfaceExtractor::new();
    let soup = extractor.extract_volume(volume, isovalue).unwrap();
    let stats = extractor.last_stats().unwrap();
    (soup, stats)
}

type VertexKey = [u32; 3];

fn key(p: Point3) -> VertexKey {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// Number of triangles using each undirected edge.
fn edge_usage(soup: &TriangleSoup) -> HashMap<(VertexKey, VertexKey), usize> {
    let mut usage = HashMap::new();
    for [a, b, c] in soup.triangles() {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            let (kp, kq) = (key(p), key(q));
            let edge = if kp < kq { (kp, kq) } else { (kq, kp) };
            *usage.entry(edge).or_insert(0) += 1;
        }
    }
    usage
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_single_voxel_closed_octahedron() {
    let volume = box_volume(GridDims::new(4, 4, 4), [1, 1, 1], [1, 1, 1]);
    let (soup, stats) = extract(&volume, 127.0);

    assert_eq!(soup.len(), 8);
    assert_eq!(stats.triangle_count, 8);

    let usage = edge_usage(&soup);
    assert_eq!(usage.len(), 12);
    assert!(usage.values().all(|&n| n == 2));
}

#[test]
fn test_box_is_watertight() {
    let volume = box_volume(GridDims::new(8, 8, 8), [2, 2, 1], [4, 3, 4]);
    let (soup, _) = extract(&volume, 127.0);

    assert!(!soup.is_empty());
    for (edge, n) in edge_usage(&soup) {
        assert_eq!(n, 2, "edge {:?} used {} times", edge, n);
    }

    let stats = soup.stats();
    assert_eq!(stats.bbox_min, Point3::new(1.5, 1.5, 0.5));
    assert_eq!(stats.bbox_max, Point3::new(4.5, 3.5, 4.5));
}

#[test]
fn test_boundary_closes_surface() {
    // Everything from x = 3 on is bright; the zero padding closes the slab.
    let dims = GridDims::new(6, 5, 4);
    let volume = box_volume(dims, [3, 0, 0], [5, 4, 3]);
    let (soup, _) = extract(&volume, 100.0);

    // Threshold 100.5 on a 0..255 edge sits at t = 100.5 / 255 from the dark end.
    let t = 100.5 / 255.0;
    let stats = soup.stats();
    assert!(approx(stats.bbox_min.x, 2.0 + t));
    assert!(approx(stats.bbox_max.x, 6.0 - t));
    assert!(approx(stats.bbox_min.y, -1.0 + t));
    assert!(approx(stats.bbox_max.y, 5.0 - t));
    assert!(approx(stats.bbox_min.z, -1.0 + t));
    assert!(approx(stats.bbox_max.z, 4.0 - t));

    assert!(edge_usage(&soup).values().all(|&n| n == 2));
}

#[test]
fn test_ball_vertices_near_sphere() {
    let radius = 5.0;
    let volume = ball_volume(16, radius);
    let (soup, _) = extract(&volume, 127.0);

    assert!(soup.len() > 50);
    let center = Point3::splat(8.0);
    for v in soup.vertices() {
        let d = (*v - center).length();
        assert!(d > radius - 1.0 && d < radius + 1.0, "vertex {:?} at distance {}", v, d);
    }
}

#[test]
fn test_uniform_volumes_are_empty() {
    let dark = box_volume(GridDims::new(5, 5, 5), [9, 9, 9], [9, 9, 9]);
    assert!(extract(&dark, 10.0).0.is_empty());

    // A threshold above every sample, including the bright ones.
    let bright = box_volume(GridDims::new(5, 5, 5), [0, 0, 0], [4, 4, 4]);
    assert!(extract(&bright, 255.0).0.is_empty());
}

#[test]
fn test_isovalue_shifts_vertices() {
    let volume = box_volume(GridDims::new(4, 4, 4), [1, 1, 1], [1, 1, 1]);
    let (low, _) = extract(&volume, 50.0);
    let (high, _) = extract(&volume, 200.0);

    // Higher threshold pulls the surface towards the bright voxel.
    let extent = |soup: &TriangleSoup| soup.stats().bbox_max.x - soup.stats().bbox_min.x;
    assert!(extent(&low) > extent(&high));
}

// =============================================================================
// Physical Transform
// =============================================================================

#[test]
fn test_anisotropic_calibration() {
    let volume = box_volume(GridDims::new(4, 4, 4), [1, 1, 1], [1, 1, 1])
        .with_calibration(Calibration::new(0.5, 1.0, 3.0, Point3::new(-1.0, 0.0, 100.0)).unwrap())
        .unwrap();
    let (soup, _) = extract(&volume, 127.0);

    let stats = soup.stats();
    assert_eq!(stats.bbox_min, Point3::new(-0.75, 0.5, 101.5));
    assert_eq!(stats.bbox_max, Point3::new(-0.25, 1.5, 104.5));
    assert_eq!(volume.max_coord(), Point3::new(1.0, 4.0, 112.0));
}

#[test]
fn test_obj_export() {
    let volume = box_volume(GridDims::new(4, 4, 4), [1, 1, 1], [1, 1, 1]);
    let (soup, _) = extract(&volume, 127.0);
    let obj = soup.to_obj();

    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 24);
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 8);
    assert!(obj.contains("f 22 23 24"));
}

// =============================================================================
// Fields and Policies
// =============================================================================

#[test]
fn test_closure_fields_extract() {
    // Unbounded step along x: only the crossing plane, no boundary closure.
    let field = FnField::unbounded(GridDims::new(4, 4, 4), |x, _, _| if x >= 2 { 100 } else { 0 });
    let mut extractor = IsosurfaceExtractor::new();
    let soup = extractor.extract(&field, &Calibration::unit(), 49.5).unwrap();

    assert!(!soup.is_empty());
    for v in soup.vertices() {
        assert!(approx(v.x, 1.5));
    }
    // 6 x 6 crossed cells along the plane, 2 triangles each.
    assert_eq!(soup.len(), 72);
}

#[test]
fn test_policies_agree_without_ambiguity() {
    let volume = box_volume(GridDims::new(6, 6, 6), [1, 1, 1], [3, 2, 4]);
    let mut direct = IsosurfaceExtractor::new();
    let mut mirrored = IsosurfaceExtractor::with_options(ExtractionOptions {
        ambiguity: AmbiguityPolicy::Mirrored,
        ..Default::default()
    });

    let a = direct.extract_volume(&volume, 127.0).unwrap();
    let b = mirrored.extract_volume(&volume, 127.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_state_transitions() {
    let volume = box_volume(GridDims::new(3, 3, 3), [1, 1, 1], [1, 1, 1]);
    let mut extractor = IsosurfaceExtractor::new();
    assert_eq!(extractor.state(), ExtractorState::Idle);
    assert!(extractor.last_stats().is_none());

    extractor.extract_volume(&volume, 127.0).unwrap();
    assert_eq!(extractor.state(), ExtractorState::Done);
    assert_eq!(extractor.last_stats().unwrap().slices, 5);
}
