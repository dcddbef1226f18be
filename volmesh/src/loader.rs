//! Voxel loading strategies.
//!
//! A [`Loader`] turns the raw pixels of an [`ImageStack`] into either a scalar intensity or a
//! packed ARGB color. The strategy is chosen once per configuration change from the volume's
//! [`DataType`] and flags, never per sample.

use crate::image::{unpack_rgb, ImageStack};
use crate::lut::LutSet;

/// How the volume's values are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// One intensity per voxel.
    Scalar,
    /// Packed ARGB per voxel, with the lookup tables applied.
    PackedColor,
}

impl DataType {
    /// Scalar when averaging, or when the tables are default and at most one channel is read.
    pub fn decide(average: bool, default_luts: bool, channel_count: usize) -> Self {
        if average || (default_luts && channel_count < 2) {
            DataType::Scalar
        } else {
            DataType::PackedColor
        }
    }
}

/// A voxel loading strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    /// Raw value of a single channel.
    Plain {
        /// Channel read (0 = red, 1 = green, 2 = blue).
        channel: usize,
    },
    /// Lookup-table mapped channels packed with an alpha from the raw mean.
    Composited {
        /// Enabled channels.
        channels: [bool; 3],
    },
    /// As [`Loader::Composited`], with the color rescaled so its largest channel is 255.
    SaturatedComposited {
        /// Enabled channels.
        channels: [bool; 3],
    },
    /// Mean of the enabled channels.
    Average {
        /// Enabled channels.
        channels: [bool; 3],
    },
}

/// Integer mean of the enabled entries of `values`, 0 when none is enabled.
#[inline]
fn mean_enabled(channels: [bool; 3], values: [u8; 3]) -> u32 {
    let (sum, n) = channels
        .iter()
        .zip(values.iter())
        .filter(|(enabled, _)| **enabled)
        .fold((0u32, 0u32), |(sum, n), (_, &v)| (sum + u32::from(v), n + 1));
    if n == 0 {
        0
    } else {
        sum / n
    }
}

impl Loader {
    /// Pick the strategy for a configuration.
    ///
    /// `channels` are the effective channel flags; a gray source passes all three enabled.
    /// The plain loader reads the last enabled channel, or red when none is.
    pub fn select(data_type: DataType, average: bool, saturated: bool, channels: [bool; 3]) -> Self {
        match data_type {
            DataType::PackedColor if saturated => Loader::SaturatedComposited { channels },
            DataType::PackedColor => Loader::Composited { channels },
            DataType::Scalar if average => Loader::Average { channels },
            DataType::Scalar => Loader::Plain {
                channel: channels.iter().rposition(|&c| c).unwrap_or(0),
            },
        }
    }

    /// Intensity of a voxel.
    ///
    /// Plain reads its channel, Average the mean of the raw enabled channels, and the
    /// composited loaders return the stored pixel unchanged.
    #[inline]
    pub fn load(&self, stack: &ImageStack, x: i32, y: i32, z: i32) -> i32 {
        match *self {
            Loader::Plain { channel } => i32::from(stack.channels(x, y, z)[channel]),
            Loader::Average { channels } => mean_enabled(channels, stack.channels(x, y, z)) as i32,
            Loader::Composited { .. } | Loader::SaturatedComposited { .. } => stack.get(x, y, z),
        }
    }

    /// Display value of a voxel.
    ///
    /// Packed `alpha << 24 | r << 16 | g << 8 | b` for the composited loaders; the raw channel
    /// for Plain; the mean of the mapped enabled channels for Average.
    #[inline]
    pub fn load_composited(&self, stack: &ImageStack, luts: &LutSet, x: i32, y: i32, z: i32) -> u32 {
        let raw = stack.channels(x, y, z);
        match *self {
            Loader::Plain { channel } => u32::from(raw[channel]),
            Loader::Average { channels } => {
                let mapped = [luts.red.map(raw[0]), luts.green.map(raw[1]), luts.blue.map(raw[2])];
                mean_enabled(channels, mapped)
            }
            Loader::Composited { channels } => composite(channels, luts, raw, false),
            Loader::SaturatedComposited { channels } => composite(channels, luts, raw, true),
        }
    }

    /// Store `v` at `(x, y, z)` if it lies inside the stack.
    ///
    /// # Returns
    /// Whether a pixel was written.
    #[inline]
    pub fn write(&self, stack: &mut ImageStack, x: i32, y: i32, z: i32, v: i32) -> bool {
        stack.set(x, y, z, v)
    }

    /// Store `v` at the linear offset of `(x, y, z)`; see [`ImageStack::set_linear`].
    #[inline]
    pub fn write_unchecked(&self, stack: &mut ImageStack, x: i32, y: i32, z: i32, v: i32) -> bool {
        stack.set_linear(x, y, z, v)
    }
}

fn composite(channels: [bool; 3], luts: &LutSet, raw: [u8; 3], saturate: bool) -> u32 {
    let mut rgb = [0u8; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        if channels[i] {
            *c = luts.channel(i).map(raw[i]);
        }
    }

    if saturate {
        let max = rgb.iter().copied().max().unwrap_or(0);
        let scale = if max == 0 { 0.0 } else { 255.0 / f32::from(max) };
        for c in rgb.iter_mut() {
            *c = (scale * f32::from(*c)).round().min(255.0) as u8;
        }
    }

    let alpha = luts.alpha.map(mean_enabled(channels, raw) as u8);
    (u32::from(alpha) << 24) | (u32::from(rgb[0]) << 16) | (u32::from(rgb[1]) << 8) | u32::from(rgb[2])
}

/// Split a packed ARGB value into `[a, r, g, b]`.
#[inline]
pub fn unpack_argb(v: u32) -> [u8; 4] {
    let [r, g, b] = unpack_rgb(v);
    [(v >> 24) as u8, r, g, b]
}
