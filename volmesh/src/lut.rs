//! Lookup tables mapping raw channel values to display values.

use std::fmt;

use crate::error::{Result, VolumeError};

/// Number of entries in a [`Lut`].
pub const LUT_LEN: usize = 256;

/// Alpha level treated as fully opaque.
pub const OPAQUE_ALPHA: u8 = 254;

/// A 256-entry table from raw channel value to display value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Lut([u8; LUT_LEN]);

impl Lut {
    /// The identity table, `table[i] == i`.
    pub fn identity() -> Self {
        Self::from_fn(|i| i)
    }

    /// Every entry set to `v`.
    pub fn constant(v: u8) -> Self {
        Self([v; LUT_LEN])
    }

    /// Table with `table[i] = f(i)`.
    pub fn from_fn<F: Fn(u8) -> u8>(f: F) -> Self {
        let mut table = [0u8; LUT_LEN];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i as u8);
        }
        Self(table)
    }

    /// Copy a table from a slice, which must have exactly 256 entries.
    ///
    /// `name` identifies the table in the error.
    pub fn from_slice(name: &'static str, values: &[u8]) -> Result<Self> {
        let table: [u8; LUT_LEN] = values
            .try_into()
            .map_err(|_| VolumeError::InvalidLutLength {
                table: name,
                got: values.len(),
            })?;
        Ok(Self(table))
    }

    /// Look up a raw value.
    #[inline]
    pub fn map(&self, v: u8) -> u8 {
        self.0[v as usize]
    }

    /// Whether this is the identity table.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// The entries.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            write!(f, "Lut(identity)")
        } else {
            write!(f, "Lut({:?}..)", &self.0[..8])
        }
    }
}

/// The red, green, blue and alpha tables of a volume.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LutSet {
    /// Red channel table.
    pub red: Lut,
    /// Green channel table.
    pub green: Lut,
    /// Blue channel table.
    pub blue: Lut,
    /// Alpha table, indexed by the mean of the raw enabled channels.
    pub alpha: Lut,
}

impl LutSet {
    /// All four tables identity.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Identity color tables with alpha capped at [`OPAQUE_ALPHA`].
    ///
    /// This is what an RGB stack is displayed with by default.
    pub fn display_default() -> Self {
        Self {
            alpha: Lut::from_fn(|i| i.min(OPAQUE_ALPHA)),
            ..Self::identity()
        }
    }

    /// Tables for a gray stack displayed through a 256-entry color map.
    ///
    /// `colormap[i]` is the `[r, g, b]` shown for raw value `i`; alpha is the capped mean of
    /// the three.
    pub fn from_colormap(colormap: &[[u8; 3]]) -> Result<Self> {
        if colormap.len() != LUT_LEN {
            return Err(VolumeError::InvalidLutLength {
                table: "colormap",
                got: colormap.len(),
            });
        }
        let entry = |i: u8| colormap[i as usize];
        Ok(Self {
            red: Lut::from_fn(|i| entry(i)[0]),
            green: Lut::from_fn(|i| entry(i)[1]),
            blue: Lut::from_fn(|i| entry(i)[2]),
            alpha: Lut::from_fn(|i| {
                let [r, g, b] = entry(i);
                let mean = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
                mean.min(u16::from(OPAQUE_ALPHA)) as u8
            }),
        })
    }

    /// Build from four slices, each of which must have 256 entries.
    ///
    /// Fails on the first table with the wrong length.
    pub fn from_slices(red: &[u8], green: &[u8], blue: &[u8], alpha: &[u8]) -> Result<Self> {
        Ok(Self {
            red: Lut::from_slice("red", red)?,
            green: Lut::from_slice("green", green)?,
            blue: Lut::from_slice("blue", blue)?,
            alpha: Lut::from_slice("alpha", alpha)?,
        })
    }

    /// Color table for channel 0 (red), 1 (green) or 2 (blue).
    #[inline]
    pub fn channel(&self, index: usize) -> &Lut {
        match index {
            0 => &self.red,
            1 => &self.green,
            _ => &self.blue,
        }
    }

    /// Whether the alpha table and every enabled channel's table are identity.
    pub fn is_default_for(&self, channels: [bool; 3]) -> bool {
        self.alpha.is_identity()
            && (0..3).all(|i| !channels[i] || self.channel(i).is_identity())
    }
}
