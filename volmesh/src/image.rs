//! Image stack storage.
//!
//! An [`ImageStack`] is a stack of equally sized 2-D slices in one of two pixel formats:
//! 8-bit gray, or packed 24-bit RGB (`0x00RRGGBB` in a `u32`). Pixels are addressed as
//! `(x, y, z)` with `y * width + x` inside a slice.

use volmesh_core::GridDims;

use crate::error::{Result, VolumeError};

/// Pixel format of an [`ImageStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// One unsigned byte per pixel.
    Gray8,
    /// Packed `0x00RRGGBB` per pixel.
    Rgb,
}

impl SourceKind {
    /// Number of independent color channels.
    pub const fn channel_count(self) -> usize {
        match self {
            SourceKind::Gray8 => 1,
            SourceKind::Rgb => 3,
        }
    }

    /// Bytes per stored pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            SourceKind::Gray8 => 1,
            SourceKind::Rgb => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pixels {
    Gray(Vec<u8>),
    Rgb(Vec<u32>),
}

/// A stack of image slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStack {
    dims: GridDims,
    pixels: Pixels,
}

/// Split a packed pixel into its `[r, g, b]` bytes.
#[inline]
pub const fn unpack_rgb(v: u32) -> [u8; 3] {
    [((v >> 16) & 0xff) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8]
}

/// Pack `[r, g, b]` into `0x00RRGGBB`.
#[inline]
pub const fn pack_rgb(c: [u8; 3]) -> u32 {
    ((c[0] as u32) << 16) | ((c[1] as u32) << 8) | c[2] as u32
}

fn check_dims(dims: GridDims) -> Result<()> {
    if dims.is_empty() || dims.width > i32::MAX as u32 || dims.height > i32::MAX as u32 {
        return Err(VolumeError::InvalidDimensions {
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
        });
    }
    Ok(())
}

fn flatten<T: Copy>(dims: GridDims, slices: Vec<Vec<T>>) -> Result<Vec<T>> {
    let slice_len = dims.slice_len();
    let mut flat = Vec::with_capacity(dims.voxel_count());
    for slice in slices {
        if slice.len() != slice_len {
            return Err(VolumeError::DimensionMismatch {
                expected: slice_len,
                got: slice.len(),
            });
        }
        flat.extend_from_slice(&slice);
    }
    Ok(flat)
}

impl ImageStack {
    /// Zero-filled 8-bit stack.
    pub fn gray(dims: GridDims) -> Result<Self> {
        check_dims(dims)?;
        Ok(Self {
            dims,
            pixels: Pixels::Gray(vec![0; dims.voxel_count()]),
        })
    }

    /// Zero-filled RGB stack.
    pub fn rgb(dims: GridDims) -> Result<Self> {
        check_dims(dims)?;
        Ok(Self {
            dims,
            pixels: Pixels::Rgb(vec![0; dims.voxel_count()]),
        })
    }

    /// Build an 8-bit stack from one buffer per slice.
    pub fn from_gray_slices(width: u32, height: u32, slices: Vec<Vec<u8>>) -> Result<Self> {
        let dims = GridDims::new(width, height, slices.len() as u32);
        check_dims(dims)?;
        Ok(Self {
            dims,
            pixels: Pixels::Gray(flatten(dims, slices)?),
        })
    }

    /// Build an RGB stack from one buffer of packed pixels per slice.
    ///
    /// The top byte of each pixel is discarded.
    pub fn from_rgb_slices(width: u32, height: u32, slices: Vec<Vec<u32>>) -> Result<Self> {
        let dims = GridDims::new(width, height, slices.len() as u32);
        check_dims(dims)?;
        let mut flat = flatten(dims, slices)?;
        flat.iter_mut().for_each(|v| *v &= 0x00ff_ffff);
        Ok(Self {
            dims,
            pixels: Pixels::Rgb(flat),
        })
    }

    /// 8-bit stack filled by evaluating `f` at every voxel.
    pub fn gray_from_fn<F>(dims: GridDims, f: F) -> Result<Self>
    where
        F: Fn(u32, u32, u32) -> u8,
    {
        let mut stack = Self::gray(dims)?;
        if let Pixels::Gray(data) = &mut stack.pixels {
            fill(dims, data, f);
        }
        Ok(stack)
    }

    /// RGB stack filled by evaluating `f` at every voxel.
    pub fn rgb_from_fn<F>(dims: GridDims, f: F) -> Result<Self>
    where
        F: Fn(u32, u32, u32) -> [u8; 3],
    {
        let mut stack = Self::rgb(dims)?;
        if let Pixels::Rgb(data) = &mut stack.pixels {
            fill(dims, data, |x, y, z| pack_rgb(f(x, y, z)));
        }
        Ok(stack)
    }

    /// Stack dimensions.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Pixel format.
    #[inline]
    pub fn kind(&self) -> SourceKind {
        match self.pixels {
            Pixels::Gray(_) => SourceKind::Gray8,
            Pixels::Rgb(_) => SourceKind::Rgb,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.dims.contains(x, y, z) {
            return None;
        }
        Some(z as usize * self.dims.slice_len() + y as usize * self.dims.width as usize + x as usize)
    }

    /// Raw pixel value: the gray byte, or the packed `0x00RRGGBB` word. 0 outside the stack.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> i32 {
        match (self.index(x, y, z), &self.pixels) {
            (Some(i), Pixels::Gray(data)) => i32::from(data[i]),
            (Some(i), Pixels::Rgb(data)) => data[i] as i32,
            (None, _) => 0,
        }
    }

    /// The pixel as `[r, g, b]`. Gray pixels are replicated into all three channels.
    #[inline]
    pub fn channels(&self, x: i32, y: i32, z: i32) -> [u8; 3] {
        match (self.index(x, y, z), &self.pixels) {
            (Some(i), Pixels::Gray(data)) => [data[i]; 3],
            (Some(i), Pixels::Rgb(data)) => unpack_rgb(data[i]),
            (None, _) => [0; 3],
        }
    }

    /// Integer mean of the three channels.
    #[inline]
    pub fn average(&self, x: i32, y: i32, z: i32) -> u8 {
        let [r, g, b] = self.channels(x, y, z);
        ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
    }

    /// Store `v`: gray keeps the low byte, RGB the low 24 bits.
    ///
    /// # Returns
    /// `false` (and no change) outside the stack.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, v: i32) -> bool {
        let Some(i) = self.index(x, y, z) else {
            return false;
        };
        match &mut self.pixels {
            Pixels::Gray(data) => data[i] = v as u8,
            Pixels::Rgb(data) => data[i] = v as u32 & 0x00ff_ffff,
        }
        true
    }

    /// Store `v` at the linear offset of `(x, y, z)` without checking each axis.
    ///
    /// A coordinate past the end of a row lands in the following row. Offsets outside the
    /// whole buffer are dropped.
    ///
    /// # Returns
    /// Whether a pixel was written.
    pub fn set_linear(&mut self, x: i32, y: i32, z: i32, v: i32) -> bool {
        let offset = i64::from(z) * self.dims.slice_len() as i64
            + i64::from(y) * i64::from(self.dims.width)
            + i64::from(x);
        let Ok(i) = usize::try_from(offset) else {
            return false;
        };
        match &mut self.pixels {
            Pixels::Gray(data) if i < data.len() => data[i] = v as u8,
            Pixels::Rgb(data) if i < data.len() => data[i] = v as u32 & 0x00ff_ffff,
            _ => return false,
        }
        true
    }

    /// Size of the pixel payload in bytes.
    pub fn byte_len(&self) -> usize {
        self.dims.voxel_count() * self.kind().bytes_per_pixel()
    }

    /// The pixel payload as little-endian bytes, slice after slice.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match &self.pixels {
            Pixels::Gray(data) => data.clone(),
            Pixels::Rgb(data) => data.iter().flat_map(|v| v.to_le_bytes()).collect(),
        }
    }

    /// Rebuild a stack from [`to_le_bytes`](ImageStack::to_le_bytes) output.
    pub fn from_le_bytes(kind: SourceKind, dims: GridDims, bytes: &[u8]) -> Result<Self> {
        check_dims(dims)?;
        let expected = dims.voxel_count() * kind.bytes_per_pixel();
        if bytes.len() != expected {
            return Err(VolumeError::DimensionMismatch {
                expected,
                got: bytes.len(),
            });
        }
        let pixels = match kind {
            SourceKind::Gray8 => Pixels::Gray(bytes.to_vec()),
            SourceKind::Rgb => Pixels::Rgb(
                bytes
                    .chunks_exact(4)
                    .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]) & 0x00ff_ffff)
                    .collect(),
            ),
        };
        Ok(Self { dims, pixels })
    }
}

fn fill<T, F>(dims: GridDims, data: &mut [T], f: F)
where
    F: Fn(u32, u32, u32) -> T,
{
    let mut i = 0;
    for z in 0..dims.depth {
        for y in 0..dims.height {
            for x in 0..dims.width {
                data[i] = f(x, y, z);
                i += 1;
            }
        }
    }
}
