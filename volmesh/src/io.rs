//! Binary swap-file format for image stacks.
//!
//! Layout (little-endian):
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 4 | magic `VMSW` |
//! | 4 | 4 | format version |
//! | 8 | 1 | pixel format (0 = gray, 1 = RGB) |
//! | 9 | 3 | reserved, zero |
//! | 12 | 12 | width, height, depth |
//! | 24 | .. | pixels, slice after slice |

use std::io::{Read, Write};

use volmesh_core::GridDims;

use crate::error::{Result, VolumeError};
use crate::image::{ImageStack, SourceKind};

/// Magic bytes at the start of a swap file.
pub const SWAP_MAGIC: [u8; 4] = *b"VMSW";

/// Current format version.
pub const SWAP_VERSION: u32 = 1;

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 24;

fn kind_tag(kind: SourceKind) -> u8 {
    match kind {
        SourceKind::Gray8 => 0,
        SourceKind::Rgb => 1,
    }
}

fn kind_from_tag(tag: u8) -> Result<SourceKind> {
    match tag {
        0 => Ok(SourceKind::Gray8),
        1 => Ok(SourceKind::Rgb),
        _ => Err(VolumeError::InvalidFormat {
            message: "unknown pixel format",
        }),
    }
}

/// Write `stack` to `writer`.
pub fn write_stack<W: Write>(stack: &ImageStack, writer: &mut W) -> Result<()> {
    let dims = stack.dims();
    let mut header = [0u8; HEADER_SIZE];
    header[0..4].copy_from_slice(&SWAP_MAGIC);
    header[4..8].copy_from_slice(&SWAP_VERSION.to_le_bytes());
    header[8] = kind_tag(stack.kind());
    header[12..16].copy_from_slice(&dims.width.to_le_bytes());
    header[16..20].copy_from_slice(&dims.height.to_le_bytes());
    header[20..24].copy_from_slice(&dims.depth.to_le_bytes());

    writer.write_all(&header)?;
    writer.write_all(&stack.to_le_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read a stack written by [`write_stack`].
pub fn read_stack<R: Read>(reader: &mut R) -> Result<ImageStack> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    if header[0..4] != SWAP_MAGIC {
        return Err(VolumeError::InvalidFormat {
            message: "invalid magic bytes",
        });
    }
    let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    if version != SWAP_VERSION {
        return Err(VolumeError::InvalidFormat {
            message: "unsupported version",
        });
    }
    let kind = kind_from_tag(header[8])?;
    let read_u32 = |at: usize| u32::from_le_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]]);
    let dims = GridDims::new(read_u32(12), read_u32(16), read_u32(20));
    if dims.is_empty() {
        return Err(VolumeError::InvalidDimensions {
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
        });
    }
    let expected = dims
        .checked_voxel_count()
        .and_then(|n| n.checked_mul(kind.bytes_per_pixel()))
        .ok_or(VolumeError::InvalidFormat {
            message: "dimensions overflow",
        })?;

    // Grow only with the bytes actually present.
    let mut payload = Vec::new();
    reader.by_ref().take(expected as u64).read_to_end(&mut payload)?;
    if payload.len() != expected {
        return Err(VolumeError::InvalidFormat {
            message: "truncated payload",
        });
    }
    ImageStack::from_le_bytes(kind, dims, &payload)
}

fn payload_size(kind: SourceKind, dims: GridDims) -> usize {
    dims.voxel_count() * kind.bytes_per_pixel()
}

/// Size of the swap file for a stack of this shape.
pub fn compute_file_size(kind: SourceKind, dims: GridDims) -> usize {
    HEADER_SIZE + payload_size(kind, dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn gradient_stack() -> ImageStack {
        ImageStack::rgb_from_fn(GridDims::new(3, 2, 2), |x, y, z| {
            [x as u8 * 40, y as u8 * 90, z as u8 * 200]
        })
        .unwrap()
    }

    #[test]
    fn test_save_load_roundtrip() {
        let original = gradient_stack();
        let mut buffer = Vec::new();
        write_stack(&original, &mut buffer).unwrap();
        assert_eq!(buffer.len(), compute_file_size(SourceKind::Rgb, original.dims()));

        let loaded = read_stack(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_invalid_magic() {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0..4].copy_from_slice(b"BADM");
        let result = read_stack(&mut Cursor::new(data));
        assert!(matches!(result, Err(VolumeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_unknown_kind() {
        let mut buffer = Vec::new();
        write_stack(&gradient_stack(), &mut buffer).unwrap();
        buffer[8] = 7;
        assert!(matches!(
            read_stack(&mut Cursor::new(buffer)),
            Err(VolumeError::InvalidFormat {
                message: "unknown pixel format"
            })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let mut buffer = Vec::new();
        write_stack(&gradient_stack(), &mut buffer).unwrap();
        buffer.truncate(buffer.len() - 1);
        assert!(matches!(
            read_stack(&mut Cursor::new(buffer)),
            Err(VolumeError::InvalidFormat {
                message: "truncated payload"
            })
        ));
    }

    fn header_with_dims(kind: u8, width: u32, height: u32, depth: u32) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0..4].copy_from_slice(&SWAP_MAGIC);
        data[4..8].copy_from_slice(&SWAP_VERSION.to_le_bytes());
        data[8] = kind;
        data[12..16].copy_from_slice(&width.to_le_bytes());
        data[16..20].copy_from_slice(&height.to_le_bytes());
        data[20..24].copy_from_slice(&depth.to_le_bytes());
        data
    }

    #[test]
    fn test_overflowing_dims_rejected() {
        let data = header_with_dims(1, u32::MAX, u32::MAX, u32::MAX);
        assert!(matches!(
            read_stack(&mut Cursor::new(data)),
            Err(VolumeError::InvalidFormat {
                message: "dimensions overflow"
            })
        ));
    }

    #[test]
    fn test_huge_dims_with_short_payload() {
        let mut data = header_with_dims(0, 65536, 65536, 65536);
        data.extend_from_slice(&[7u8; 8]);
        assert!(matches!(
            read_stack(&mut Cursor::new(data)),
            Err(VolumeError::InvalidFormat {
                message: "truncated payload"
            })
        ));
    }

    #[test]
    fn test_zero_dims_rejected() {
        let data = header_with_dims(0, 4, 0, 4);
        assert!(matches!(
            read_stack(&mut Cursor::new(data)),
            Err(VolumeError::InvalidDimensions { height: 0, .. })
        ));
    }

    #[test]
    fn test_gray_file_size() {
        assert_eq!(
            compute_file_size(SourceKind::Gray8, GridDims::new(4, 4, 2)),
            HEADER_SIZE + 32
        );
    }
}
