//! Volume sampler tests for volmesh.
//!
//! Covers loader selection from the channel, averaging, saturation and lookup-table settings,
//! the values each loader produces, and configuration change reporting.

use volmesh::{
    unpack_argb, DataType, GridDims, ImageStack, Loader, Lut, LutSet, Volume, VolumeError,
    OPAQUE_ALPHA,
};

// =============================================================================
// Test Volume Factories
// =============================================================================

/// 2x1x1 RGB volume: voxel 0 is `a`, voxel 1 is `b`.
fn rgb_pair(a: [u8; 3], b: [u8; 3]) -> Volume {
    let stack = ImageStack::rgb_from_fn(GridDims::new(2, 1, 1), |x, _, _| if x == 0 { a } else { b })
        .unwrap();
    Volume::new(stack)
}

fn gray_ramp() -> Volume {
    let stack = ImageStack::gray_from_fn(GridDims::new(4, 4, 4), |x, y, z| (x + 4 * y + 16 * z) as u8 * 3)
        .unwrap();
    Volume::new(stack)
}

fn identity() -> Vec<u8> {
    (0..=255).collect()
}

// =============================================================================
// Loader Selection
// =============================================================================

#[test]
fn test_selection_matrix() {
    let mut volume = rgb_pair([10, 20, 30], [0, 0, 0]);

    // Three channels, default tables: packed color.
    assert_eq!(volume.data_type(), DataType::PackedColor);
    assert!(matches!(volume.loader(), Loader::Composited { .. }));

    assert!(volume.set_saturated_rendering(true));
    assert!(matches!(volume.loader(), Loader::SaturatedComposited { .. }));

    // Averaging always wins.
    assert!(volume.set_average(true));
    assert_eq!(volume.data_type(), DataType::Scalar);
    assert!(matches!(volume.loader(), Loader::Average { .. }));

    // One channel with default tables: plain.
    assert!(volume.set_average(false));
    assert!(volume.set_channels(&[true, false, false]).unwrap());
    assert_eq!(volume.loader(), Loader::Plain { channel: 0 });

    // The same channel through a non-identity table is composited again.
    let doubled: Vec<u8> = (0..=255u8).map(|i| i.saturating_mul(2)).collect();
    assert!(volume.set_luts(&doubled, &identity(), &identity(), &identity()).unwrap());
    assert_eq!(volume.data_type(), DataType::PackedColor);
    assert!(matches!(volume.loader(), Loader::SaturatedComposited { .. }));
}

#[test]
fn test_disabled_channel_tables_are_ignored() {
    let mut volume = rgb_pair([10, 20, 30], [0, 0, 0]);
    let zeros = vec![0u8; 256];
    volume.set_channels(&[false, false, true]).unwrap();
    volume.set_luts(&zeros, &zeros, &identity(), &identity()).unwrap();

    assert!(volume.is_default_lut());
    assert_eq!(volume.loader(), Loader::Plain { channel: 2 });
    assert_eq!(volume.intensity(0, 0, 0), 30);
}

#[test]
fn test_opaque_alpha_makes_color() {
    let mut volume = gray_ramp();
    assert_eq!(volume.data_type(), DataType::Scalar);

    assert!(volume.set_alpha_fully_opaque());
    assert!(!volume.set_alpha_fully_opaque());
    assert_eq!(volume.data_type(), DataType::PackedColor);
    assert!(volume.alpha_lut().as_slice().iter().all(|&a| a == OPAQUE_ALPHA));

    // Gray composited: the byte in every color slot, opaque alpha.
    let v = volume.color(1, 0, 0);
    assert_eq!(unpack_argb(v), [OPAQUE_ALPHA, 3, 3, 3]);
    // Intensity stays the raw byte.
    assert_eq!(volume.intensity(1, 0, 0), 3);
}

// =============================================================================
// Loader Values
// =============================================================================

#[test]
fn test_composited_value() {
    let mut volume = rgb_pair([10, 20, 30], [0, 0, 0]);
    let inverted: Vec<u8> = (0..=255u8).map(|i| 255 - i).collect();
    volume.set_luts(&inverted, &identity(), &identity(), &identity()).unwrap();

    let [a, r, g, b] = unpack_argb(volume.color(0, 0, 0));
    assert_eq!(a, 20);
    assert_eq!(r, 245);
    assert_eq!(g, 20);
    assert_eq!(b, 30);
    assert_eq!(volume.intensity(0, 0, 0), 0x000a_141e);
}

#[test]
fn test_saturated_value() {
    let mut volume = rgb_pair([0, 51, 102], [0, 0, 0]);
    volume.set_saturated_rendering(true);

    let [a, r, g, b] = unpack_argb(volume.color(0, 0, 0));
    assert_eq!(a, 51);
    assert_eq!(r, 0);
    assert_eq!(g, 128);
    assert_eq!(b, 255);

    // Black stays black, with scale 0.
    assert_eq!(volume.color(1, 0, 0), 0);
}

#[test]
fn test_average_values() {
    let mut volume = rgb_pair([10, 20, 60], [0, 0, 0]);
    volume.set_average(true);
    assert_eq!(volume.intensity(0, 0, 0), 30);

    volume.set_channels(&[true, true, false]).unwrap();
    assert_eq!(volume.intensity(0, 0, 0), 15);

    let halved: Vec<u8> = (0..=255u8).map(|i| i / 2).collect();
    volume.set_luts(&halved, &halved, &identity(), &identity()).unwrap();
    assert_eq!(volume.color(0, 0, 0), 7);

    volume.set_channels(&[false, false, false]).unwrap();
    assert_eq!(volume.intensity(0, 0, 0), 0);
    assert_eq!(volume.color(0, 0, 0), 0);

    // The plain mean ignores every flag.
    assert_eq!(volume.average(0, 0, 0), 30);
}

#[test]
fn test_out_of_bounds_is_zero() {
    let volume = gray_ramp();
    for (x, y, z) in [(-1, 0, 0), (0, -1, 0), (0, 0, -1), (4, 0, 0), (0, 4, 0), (0, 0, 4)] {
        assert_eq!(volume.intensity(x, y, z), 0);
        assert_eq!(volume.color(x, y, z), 0);
    }
    assert_eq!(volume.intensity(3, 3, 3), 63 * 3);
}

// =============================================================================
// Configuration Changes
// =============================================================================

#[test]
fn test_changes_reported() {
    let mut volume = gray_ramp();
    assert!(!volume.set_average(false));
    assert!(volume.set_average(true));
    assert!(!volume.set_average(true));

    assert!(!volume.set_saturated_rendering(false));
    assert!(!volume.set_channels(&[true, true, true]).unwrap());
    assert!(!volume.set_luts(&identity(), &identity(), &identity(), &identity()).unwrap());
}

#[test]
fn test_invalid_config_rejected_unmodified() {
    let mut volume = rgb_pair([1, 2, 3], [4, 5, 6]);
    let before = (volume.loader(), volume.luts().clone(), volume.channels());

    assert!(matches!(
        volume.set_channels(&[true; 4]),
        Err(VolumeError::InvalidChannelCount { got: 4 })
    ));
    assert!(matches!(
        volume.set_luts(&identity(), &identity(), &[0; 10], &identity()),
        Err(VolumeError::InvalidLutLength { table: "blue", got: 10 })
    ));

    assert_eq!((volume.loader(), volume.luts().clone(), volume.channels()), before);
}

#[test]
fn test_lut_set_builder() {
    let volume = rgb_pair([200, 100, 0], [0, 0, 0]).with_luts(LutSet::display_default());
    assert!(!volume.is_default_lut());
    assert_eq!(volume.alpha_lut().map(255), OPAQUE_ALPHA);
    assert_eq!(volume.red_lut(), &Lut::identity());

    let [a, r, g, b] = unpack_argb(volume.color(0, 0, 0));
    assert_eq!([a, r, g, b], [100, 200, 100, 0]);
}

// =============================================================================
// Writes
// =============================================================================

#[test]
fn test_writes() {
    let mut volume = rgb_pair([0, 0, 0], [0, 0, 0]);
    assert!(volume.write(1, 0, 0, 0x0102_0304));
    assert_eq!(volume.intensity(1, 0, 0), 0x0002_0304);
    assert!(!volume.write(2, 0, 0, 1));

    // Past the end of the row wraps into the next linear pixel, past the buffer is dropped.
    let mut gray = gray_ramp();
    assert!(gray.write_unchecked(4, 0, 0, 99));
    assert_eq!(gray.intensity(0, 1, 0), 99);
    assert!(!gray.write_unchecked(0, 0, 4, 99));
}
