//! Swap-file round-trip tests.

use std::io::Cursor;
use std::path::PathBuf;

use volmesh::prelude::*;
use volmesh::{compute_file_size, read_stack, write_stack, DataType, HEADER_SIZE};

fn swap_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("volmesh_{}_{}.swap", name, std::process::id()))
}

fn make_rgb_volume() -> Volume {
    let stack = ImageStack::rgb_from_fn(GridDims::new(6, 5, 4), |x, y, z| {
        [(x * 40) as u8, (y * 50) as u8, (z * 60) as u8]
    })
    .unwrap();
    Volume::new(stack)
}

fn snapshot(volume: &Volume) -> Vec<(i32, u32)> {
    let dims = volume.dims();
    let mut out = Vec::new();
    for z in 0..dims.depth as i32 {
        for y in 0..dims.height as i32 {
            for x in 0..dims.width as i32 {
                out.push((volume.intensity(x, y, z), volume.color(x, y, z)));
            }
        }
    }
    out
}

#[test]
fn test_swap_out_and_restore() {
    let path = swap_path("restore");
    let mut volume = make_rgb_volume();
    volume.set_channels(&[true, false, true]).unwrap();
    let before = snapshot(&volume);

    volume.swap_out(&path).unwrap();
    assert!(!volume.is_available());
    assert!(snapshot(&volume).iter().all(|&(i, c)| i == 0 && c == 0));
    // Configuration survives the swap.
    assert_eq!(volume.channels(), [true, false, true]);
    assert_eq!(volume.dims(), GridDims::new(6, 5, 4));

    volume.restore(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(volume.is_available());
    assert_eq!(snapshot(&volume), before);
    assert_eq!(volume.data_type(), DataType::PackedColor);
}

#[test]
fn test_swap_file_size() {
    let path = swap_path("size");
    let mut volume = make_rgb_volume();
    volume.swap_out(&path).unwrap();

    let len = std::fs::metadata(&path).unwrap().len() as usize;
    std::fs::remove_file(&path).ok();
    assert_eq!(len, compute_file_size(SourceKind::Rgb, GridDims::new(6, 5, 4)));
    assert_eq!(len, HEADER_SIZE + 6 * 5 * 4 * 4);
}

#[test]
fn test_swap_twice_is_unavailable() {
    let path = swap_path("twice");
    let mut volume = make_rgb_volume();
    volume.swap_out(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(matches!(volume.swap_out(&path), Err(VolumeError::Unavailable)));
}

#[test]
fn test_restore_wrong_shape() {
    let path = swap_path("shape");
    let other = ImageStack::rgb(GridDims::new(2, 2, 2)).unwrap();
    let mut file = std::fs::File::create(&path).unwrap();
    write_stack(&other, &mut file).unwrap();
    drop(file);

    let mut volume = make_rgb_volume();
    volume.clear();
    let result = volume.restore(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(VolumeError::DimensionMismatch { .. })));
    assert!(!volume.is_available());
}

#[test]
fn test_restore_corrupt_header() {
    let path = swap_path("corrupt");
    let mut bytes = Vec::new();
    write_stack(&ImageStack::rgb(GridDims::new(2, 2, 2)).unwrap(), &mut bytes).unwrap();
    bytes[12..24].fill(0xff);
    std::fs::write(&path, &bytes).unwrap();

    let mut volume = make_rgb_volume();
    volume.clear();
    let result = volume.restore(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(VolumeError::InvalidFormat { .. })));
    assert!(!volume.is_available());
}

#[test]
fn test_restore_missing_file() {
    let mut volume = make_rgb_volume();
    volume.clear();
    assert!(matches!(
        volume.restore(swap_path("missing")),
        Err(VolumeError::Io(_))
    ));
}

#[test]
fn test_extraction_survives_swap() {
    let path = swap_path("extract");
    let mut volume = make_rgb_volume();
    volume.set_average(true);
    let mut extractor = IsosurfaceExtractor::new();
    let before = extractor.extract_volume(&volume, 80.0).unwrap();

    volume.swap_out(&path).unwrap();
    assert!(matches!(
        extractor.extract_volume(&volume, 80.0),
        Err(ExtractError::Volume(VolumeError::Unavailable))
    ));

    volume.restore(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(extractor.extract_volume(&volume, 80.0).unwrap(), before);
}

#[test]
fn test_stream_roundtrip_gray() {
    let stack = ImageStack::gray_from_fn(GridDims::new(3, 3, 3), |x, y, z| (x * y * z) as u8).unwrap();
    let mut buffer = Vec::new();
    write_stack(&stack, &mut buffer).unwrap();

    let loaded = read_stack(&mut Cursor::new(buffer)).unwrap();
    assert_eq!(loaded, stack);
    assert_eq!(loaded.kind(), SourceKind::Gray8);
}
