//! Region extraction for raw SHR graphic dumps.
//!
//! A raw dump is partitioned into three fixed regions at fixed offsets (see
//! the crate documentation for the layout). This module slices an input byte
//! sequence into borrowed views of those regions; no transformation happens
//! here, and nothing is copied.

use crate::error::DecodeError;
use crate::{PALETTE_TABLE_LEN, PIXEL_PLANE_LEN, RAW_LEN, SCANLINE_CONTROL_LEN};

/// Borrowed views of the three regions of a raw SHR dump.
///
/// Obtained via [`Regions::split`]. The views alias only the input; decoding
/// writes into a separately allocated output buffer.
#[derive(Debug, Clone, Copy)]
pub struct Regions<'a> {
    /// 200 scanlines x 160 bytes of packed 4-bit pixel indices.
    pub pixel_plane: &'a [u8],

    /// One control byte per possible scanline; the low nibble selects the
    /// palette, the upper bits are hardware mode flags this decoder ignores.
    pub scanline_control: &'a [u8],

    /// 16 palettes x 16 colors x 2 bytes of little-endian 0x0RGB words.
    pub palette_table: &'a [u8],
}

impl<'a> Regions<'a> {
    /// Split a raw dump into its three regions.
    ///
    /// Bytes beyond the first [`RAW_LEN`] are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedInput`] if `raw` is shorter than
    /// [`RAW_LEN`]; no partial view is produced.
    pub fn split(raw: &'a [u8]) -> Result<Self, DecodeError> {
        if raw.len() < RAW_LEN {
            return Err(DecodeError::TruncatedInput {
                required: RAW_LEN,
                actual: raw.len(),
            });
        }

        const SCANLINE_CONTROL_START: usize = PIXEL_PLANE_LEN;
        const PALETTE_TABLE_START: usize = PIXEL_PLANE_LEN + SCANLINE_CONTROL_LEN;

        Ok(Self {
            pixel_plane: &raw[..PIXEL_PLANE_LEN],
            scanline_control: &raw[SCANLINE_CONTROL_START..PALETTE_TABLE_START],
            palette_table: &raw[PALETTE_TABLE_START..PALETTE_TABLE_START + PALETTE_TABLE_LEN],
        })
    }
}
